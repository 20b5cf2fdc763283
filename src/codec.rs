//! 画像のBase64エンコード/デコード
//!
//! 表示・送信用のテキスト表現（ImagePayload）と画像バッファの相互変換

use crate::error::{IdPhotoError, Result};
use base64::{engine::general_purpose, Engine as _};
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::Path;

/// Base64エンコードされた画像データ（常に完全な1枚分）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload(String);

impl ImagePayload {
    /// Base64文字列から作成。`data:image/png;base64,` 形式のData URLも受け付ける
    pub fn from_base64(data: impl Into<String>) -> Self {
        let data = data.into();
        match extract_base64_from_data_url(&data) {
            Some(stripped) => Self(stripped.to_string()),
            None => Self(data),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Data URLからBase64データ部分を抽出
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    if !data_url.starts_with("data:") {
        return None;
    }
    data_url.split_once(',').map(|(_, data)| data)
}

/// ファイルを読み込んでエンコード
pub fn encode_file(path: &Path) -> Result<ImagePayload> {
    if !path.exists() {
        return Err(IdPhotoError::FileNotFound(path.display().to_string()));
    }
    let bytes = std::fs::read(path)?;
    tracing::debug!(
        path = %path.display(),
        mime = sniff_mime(&bytes).unwrap_or("unknown"),
        bytes = bytes.len(),
        "画像ファイル読み込み"
    );
    Ok(encode_bytes(&bytes))
}

pub fn encode_bytes(bytes: &[u8]) -> ImagePayload {
    ImagePayload(general_purpose::STANDARD.encode(bytes))
}

/// Base64をバイト列に戻す
pub fn to_bytes(payload: &ImagePayload) -> Result<Vec<u8>> {
    general_purpose::STANDARD
        .decode(payload.as_str().trim())
        .map_err(|e| IdPhotoError::Decode(format!("Base64デコード失敗: {}", e)))
}

/// 画像としてデコード（形式は内容から判定）
pub fn decode(payload: &ImagePayload) -> Result<DynamicImage> {
    let bytes = to_bytes(payload)?;
    image::load_from_memory(&bytes)
        .map_err(|e| IdPhotoError::Decode(format!("画像として読み込めません: {}", e)))
}

/// PNGで再エンコード
pub fn encode_png(image: &DynamicImage) -> Result<ImagePayload> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| IdPhotoError::Encode(format!("PNG書き出し失敗: {}", e)))?;
    Ok(encode_bytes(buffer.get_ref()))
}

/// 先頭バイトからMIMEタイプを判定
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    match image::guess_format(bytes).ok()? {
        ImageFormat::Png => Some("image/png"),
        ImageFormat::Jpeg => Some("image/jpeg"),
        ImageFormat::WebP => Some("image/webp"),
        ImageFormat::Gif => Some("image/gif"),
        _ => None,
    }
}

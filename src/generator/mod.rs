//! 証明写真の生成
//!
//! 指示文を組み立て、外部の画像生成AIへ1回だけ問い合わせる。
//! リトライ・ストリーミングはしない。

mod gemini;

pub use gemini::{GeminiProvider, DEFAULT_API_BASE, DEFAULT_MODEL};

use crate::codec::ImagePayload;
use crate::error::{IdPhotoError, Result};
use id_photo_common::{build_id_photo_prompt, Accessories, BackgroundColor, OutfitType};
use std::future::Future;

/// 入力画像のMIMEタイプ（送信時は常にPNG扱い）
pub const INPUT_MIME_TYPE: &str = "image/png";

/// 生成AIへのリクエスト
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub mime_type: String,
    pub image: ImagePayload,
    pub instruction: String,
}

/// レスポンスの1パート（画像データを持たないパートもある）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponsePart {
    pub text: Option<String>,
    pub inline_image: Option<InlineImage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

/// 画像生成プロバイダ
pub trait ImageProvider {
    /// 1回の呼び出しでレスポンスのパートを順に返す
    fn generate_content(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<Vec<ResponsePart>>> + Send;
}

/// 先頭から見て最初の画像データを取り出す
pub fn first_image(parts: &[ResponsePart]) -> Option<ImagePayload> {
    parts
        .iter()
        .filter_map(|part| part.inline_image.as_ref())
        .find(|inline| !inline.data.is_empty())
        .map(|inline| ImagePayload::from_base64(inline.data.clone()))
}

/// 証明写真を生成
///
/// APIキーが空ならプロバイダを呼ばずに `MissingApiKey` を返す。
pub async fn generate<P: ImageProvider>(
    provider: &P,
    api_key: &str,
    image: &ImagePayload,
    background: BackgroundColor,
    outfit: OutfitType,
    accessories: &Accessories,
) -> Result<ImagePayload> {
    if api_key.trim().is_empty() {
        return Err(IdPhotoError::MissingApiKey);
    }

    let instruction = build_id_photo_prompt(background, outfit, accessories);
    let request = GenerationRequest {
        mime_type: INPUT_MIME_TYPE.to_string(),
        image: image.clone(),
        instruction,
    };

    tracing::info!(
        background = %background,
        outfit = %outfit,
        accessories = %accessories.clause(),
        image_len = image.len(),
        "証明写真の生成をリクエスト"
    );

    let parts = provider.generate_content(&request).await.map_err(|e| match e {
        IdPhotoError::Generation { .. } => e,
        other => IdPhotoError::generation_caused_by(other.to_string(), other),
    })?;

    tracing::debug!(parts = parts.len(), "レスポンス受信");

    first_image(&parts).ok_or(IdPhotoError::NoImageReturned)
}

//! セッション状態とアプリケーションの処理順序
//!
//! アップロード → 生成 → 切り抜き → 保存 の流れを1ユーザー分だけ管理する。
//! 状態はメモリ上のみで永続化しない。

use crate::codec::{self, ImagePayload};
use crate::cropper;
use crate::error::{IdPhotoError, Result};
use crate::generator::{self, ImageProvider};
use id_photo_common::{Accessories, BackgroundColor, DocumentType, OutfitType, PhotoOptions};
use std::path::{Path, PathBuf};

/// 1ユーザー分の状態
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub original_image: Option<ImagePayload>,
    pub generated_image: Option<ImagePayload>,
    pub is_generating: bool,
    pub options: PhotoOptions,
}

impl SessionState {
    pub fn new(options: PhotoOptions) -> Self {
        Self { options, ..Default::default() }
    }
}

/// セッションを所有し、各処理を順に呼び出す
///
/// `generate` は `&mut self` を取るため、同じセッションで2つの生成が
/// 同時に走ることはない。`is_generating` は表示用の状態。
pub struct IdPhotoApp<P> {
    provider: P,
    api_key: String,
    state: SessionState,
}

impl<P: ImageProvider> IdPhotoApp<P> {
    pub fn new(provider: P, api_key: impl Into<String>) -> Self {
        Self::with_options(provider, api_key, PhotoOptions::default())
    }

    pub fn with_options(provider: P, api_key: impl Into<String>, options: PhotoOptions) -> Self {
        Self {
            provider,
            api_key: api_key.into(),
            state: SessionState::new(options),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// 元画像を差し替える（生成済み画像は破棄）
    pub fn upload_payload(&mut self, payload: ImagePayload) {
        self.state.original_image = Some(payload);
        self.state.generated_image = None;
    }

    pub fn upload_file(&mut self, path: &Path) -> Result<()> {
        let payload = codec::encode_file(path)?;
        tracing::info!(path = %path.display(), size = payload.len(), "元画像を読み込み");
        self.upload_payload(payload);
        Ok(())
    }

    pub fn set_options(&mut self, options: PhotoOptions) {
        self.state.options = options;
    }

    pub fn set_document_type(&mut self, document_type: DocumentType) {
        self.state.options.document_type = document_type;
    }

    pub fn set_background(&mut self, background: BackgroundColor) {
        self.state.options.background = background;
    }

    pub fn set_outfit(&mut self, outfit: OutfitType) {
        self.state.options.outfit = outfit;
    }

    pub fn set_accessories(&mut self, accessories: Accessories) {
        self.state.options.accessories = accessories;
    }

    /// 証明写真を生成して状態に保存
    ///
    /// 失敗時は生成済み画像を空のままにし、生成中フラグだけ戻す。
    pub async fn generate(&mut self) -> Result<&ImagePayload> {
        let original = self
            .state
            .original_image
            .clone()
            .ok_or(IdPhotoError::NoOriginalImage)?;

        self.state.is_generating = true;
        self.state.generated_image = None;

        let options = self.state.options;
        let result = generator::generate(
            &self.provider,
            &self.api_key,
            &original,
            options.background,
            options.outfit,
            &options.accessories,
        )
        .await;

        self.state.is_generating = false;

        match result {
            Ok(payload) => {
                tracing::info!(size = payload.len(), "生成完了");
                Ok(self.state.generated_image.insert(payload))
            }
            Err(e) => {
                tracing::warn!(error = %e, "生成失敗");
                Err(e)
            }
        }
    }

    /// 生成済み画像を書類サイズに切り抜く（状態は変更しない）
    pub fn crop_for_download(&self) -> Result<ImagePayload> {
        let generated = self
            .state
            .generated_image
            .as_ref()
            .ok_or(IdPhotoError::NoGeneratedImage)?;
        cropper::crop_for_document(generated, self.state.options.document_type)
    }

    pub fn download_file_name(&self) -> String {
        self.state.options.document_type.download_file_name()
    }

    /// 切り抜いた画像をディレクトリに保存し、保存先を返す
    pub fn save_download(&self, output_dir: &Path) -> Result<PathBuf> {
        let cropped = self.crop_for_download()?;
        let bytes = codec::to_bytes(&cropped)?;
        std::fs::create_dir_all(output_dir)?;
        let path = output_dir.join(self.download_file_name());
        std::fs::write(&path, bytes)?;
        Ok(path)
    }
}

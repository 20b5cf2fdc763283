use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdPhotoError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。`id-photo config --set-api-key YOUR_KEY` または環境変数 GEMINI_API_KEY で設定してください")]
    MissingApiKey,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像デコードエラー: {0}")]
    Decode(String),

    #[error("画像エンコードエラー: {0}")]
    Encode(String),

    #[error("画像生成エラー: {message}")]
    Generation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("画像生成エラー: AIから画像が返されませんでした")]
    NoImageReturned,

    #[error("元画像がアップロードされていません")]
    NoOriginalImage,

    #[error("生成済みの画像がありません")]
    NoGeneratedImage,

    #[error("対話入力エラー: {0}")]
    Interactive(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] id_photo_common::Error),
}

impl IdPhotoError {
    pub fn generation(message: impl Into<String>) -> Self {
        IdPhotoError::Generation { message: message.into(), source: None }
    }

    /// 原因エラーを保持した生成エラー
    pub fn generation_caused_by(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        IdPhotoError::Generation { message: message.into(), source: Some(Box::new(source)) }
    }

    /// 生成処理の失敗（呼び出し失敗・画像なし）かどうか
    pub fn is_generation_error(&self) -> bool {
        matches!(self, IdPhotoError::Generation { .. } | IdPhotoError::NoImageReturned)
    }
}

pub type Result<T> = std::result::Result<T, IdPhotoError>;

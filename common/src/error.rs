//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Unknown {kind}: {value}")]
    UnknownOption { kind: &'static str, value: String },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

//! ID Photo Common Library
//!
//! CLIと将来のWeb(WASM)版で共有される型とユーティリティ。
//! I/Oを含まない純粋な処理のみを置く。

pub mod error;
pub mod geometry;
pub mod prompts;
pub mod types;

pub use error::{Error, Result};
pub use geometry::{center_crop, CropRegion, PixelRect, OVERSAMPLE};
pub use prompts::build_id_photo_prompt;
pub use types::{Accessories, BackgroundColor, DocumentType, OutfitType, PhotoOptions, PrintSize};

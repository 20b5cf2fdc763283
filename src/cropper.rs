//! 印刷サイズへの中央切り抜き
//!
//! 領域計算は `id_photo_common::center_crop`、ここでは画素の切り出しと
//! 2倍解像度へのリサンプル、PNG再エンコードを行う。

use crate::codec::{self, ImagePayload};
use crate::error::{IdPhotoError, Result};
use id_photo_common::{center_crop, DocumentType};
use image::imageops::{self, FilterType};
use image::DynamicImage;

/// デコード済み画像を切り抜いてリサンプル
pub fn crop_image(image: &DynamicImage, target_width: u32, target_height: u32) -> Result<DynamicImage> {
    let source = (image.width(), image.height());
    let region = center_crop(source, (target_width, target_height)).map_err(|e| match e {
        id_photo_common::Error::InvalidDimensions { width, height } if (width, height) == source => {
            IdPhotoError::Decode(format!("画像サイズが不正です: {}x{}", width, height))
        }
        other => IdPhotoError::Common(other),
    })?;

    let rect = region.pixel_rect(source);
    let (out_w, out_h) = region.output_size();

    tracing::debug!(
        src_w = source.0,
        src_h = source.1,
        x = rect.x,
        y = rect.y,
        w = rect.width,
        h = rect.height,
        out_w,
        out_h,
        "中央切り抜き"
    );

    let cropped = imageops::crop_imm(image, rect.x, rect.y, rect.width, rect.height).to_image();
    let resized = imageops::resize(&cropped, out_w, out_h, FilterType::Lanczos3);
    Ok(DynamicImage::ImageRgba8(resized))
}

/// 画像を目標比率で中央切り抜きし、目標サイズの2倍で出力
pub fn crop(payload: &ImagePayload, target_width: u32, target_height: u32) -> Result<ImagePayload> {
    let image = codec::decode(payload)?;
    let output = crop_image(&image, target_width, target_height)?;
    codec::encode_png(&output)
}

/// 書類種別の印刷サイズで切り抜き
pub fn crop_for_document(payload: &ImagePayload, document_type: DocumentType) -> Result<ImagePayload> {
    let size = document_type.print_size();
    crop(payload, size.width, size.height)
}

//! 中央切り抜きの寸法計算
//!
//! 画像処理を伴わない純粋な計算のみ。CLIとWASMで同じ結果になる。

use crate::error::{Error, Result};

/// 出力解像度の倍率（印刷用に2倍で描画）
pub const OVERSAMPLE: u32 = 2;

/// 元画像から切り出す矩形（小数精度）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRegion {
    pub offset_x: f64,
    pub offset_y: f64,
    pub render_width: f64,
    pub render_height: f64,
    /// 切り抜き後の出力サイズ（目標サイズ × OVERSAMPLE）
    pub output_width: u32,
    pub output_height: u32,
}

/// ピクセル単位に丸めた切り出し矩形
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub fn output_size(&self) -> (u32, u32) {
        (self.output_width, self.output_height)
    }

    /// 元画像内に収まる整数矩形へ変換
    ///
    /// 幅・高さは四捨五入して元画像の範囲でクランプし、
    /// オフセットは丸めた幅・高さから求め直す（左右・上下の余白差は最大1px）。
    pub fn pixel_rect(&self, source: (u32, u32)) -> PixelRect {
        let (src_w, src_h) = source;
        let width = (self.render_width.round() as u32).clamp(1, src_w.max(1));
        let height = (self.render_height.round() as u32).clamp(1, src_h.max(1));
        PixelRect {
            x: src_w.saturating_sub(width) / 2,
            y: src_h.saturating_sub(height) / 2,
            width,
            height,
        }
    }
}

/// 目標比率に合わせた中央切り抜き領域を計算
///
/// 元画像が目標より横長なら幅を削り、そうでなければ高さを削る。
/// パディングはしない。
pub fn center_crop(source: (u32, u32), target: (u32, u32)) -> Result<CropRegion> {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;

    if src_w == 0 || src_h == 0 {
        return Err(Error::InvalidDimensions { width: src_w, height: src_h });
    }
    if tgt_w == 0 || tgt_h == 0 {
        return Err(Error::InvalidDimensions { width: tgt_w, height: tgt_h });
    }

    let (output_width, output_height) = match (tgt_w.checked_mul(OVERSAMPLE), tgt_h.checked_mul(OVERSAMPLE)) {
        (Some(w), Some(h)) => (w, h),
        _ => return Err(Error::InvalidDimensions { width: tgt_w, height: tgt_h }),
    };

    let target_ratio = tgt_w as f64 / tgt_h as f64;
    let source_ratio = src_w as f64 / src_h as f64;

    let (render_width, render_height, offset_x, offset_y) = if source_ratio > target_ratio {
        // 横長: 高さはそのまま、幅を削る
        let render_height = src_h as f64;
        let render_width = src_h as f64 * target_ratio;
        (render_width, render_height, (src_w as f64 - render_width) / 2.0, 0.0)
    } else {
        // 縦長または同比率: 幅はそのまま、高さを削る
        let render_width = src_w as f64;
        let render_height = src_w as f64 / target_ratio;
        (render_width, render_height, 0.0, (src_h as f64 - render_height) / 2.0)
    };

    Ok(CropRegion {
        offset_x,
        offset_y,
        render_width,
        render_height,
        output_width,
        output_height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_source_crops_width() {
        // 1200x800 → 3x4 cm (300x400, ratio 0.75)
        let region = center_crop((1200, 800), (300, 400)).unwrap();
        assert_eq!(region.render_height, 800.0);
        assert_eq!(region.render_width, 600.0);
        assert_eq!(region.offset_x, 300.0);
        assert_eq!(region.offset_y, 0.0);
        assert_eq!(region.output_size(), (600, 800));
    }

    #[test]
    fn test_tall_source_crops_height() {
        // 400x1000 → 4x6 cm (400x600)
        let region = center_crop((400, 1000), (400, 600)).unwrap();
        assert_eq!(region.render_width, 400.0);
        assert_eq!(region.render_height, 600.0);
        assert_eq!(region.offset_x, 0.0);
        assert_eq!(region.offset_y, 200.0);
        assert_eq!(region.output_size(), (800, 1200));
    }

    #[test]
    fn test_equal_ratio_has_no_offset() {
        for source in [(300, 400), (600, 800), (1500, 2000)] {
            let region = center_crop(source, (300, 400)).unwrap();
            assert_eq!(region.offset_x, 0.0);
            assert_eq!(region.offset_y, 0.0);
            assert_eq!(region.render_width, source.0 as f64);
            assert_eq!(region.render_height, source.1 as f64);
        }
    }

    #[test]
    fn test_output_size_independent_of_source() {
        for source in [(10, 10), (4000, 3000), (333, 1777)] {
            let region = center_crop(source, (400, 600)).unwrap();
            assert_eq!(region.output_size(), (800, 1200));
        }
    }

    #[test]
    fn test_wide_source_offset_formula() {
        let (src_w, src_h) = (1001u32, 500u32);
        let region = center_crop((src_w, src_h), (400, 600)).unwrap();
        let target_ratio = 400.0 / 600.0;
        assert_eq!(region.offset_y, 0.0);
        assert_eq!(region.offset_x, (src_w as f64 - src_h as f64 * target_ratio) / 2.0);
    }

    #[test]
    fn test_zero_source_dimension_is_error() {
        assert!(matches!(
            center_crop((0, 800), (300, 400)),
            Err(Error::InvalidDimensions { width: 0, height: 800 })
        ));
        assert!(center_crop((800, 0), (300, 400)).is_err());
    }

    #[test]
    fn test_zero_target_dimension_is_error() {
        assert!(center_crop((800, 600), (0, 400)).is_err());
    }

    #[test]
    fn test_pixel_rect_rounding() {
        // 1001x500 → 4x6: render_width = 333.33.., offset_x = 333.83..
        let region = center_crop((1001, 500), (400, 600)).unwrap();
        let rect = region.pixel_rect((1001, 500));
        assert_eq!(rect, PixelRect { x: 334, y: 0, width: 333, height: 500 });
    }

    #[test]
    fn test_pixel_rect_is_centered() {
        let cases = [
            ((1001, 500), (400, 600)),
            ((1201, 800), (300, 400)),
            ((999, 1777), (400, 600)),
            ((640, 481), (300, 400)),
            ((37, 1000), (300, 400)),
        ];
        for (source, target) in cases {
            let rect = center_crop(source, target).unwrap().pixel_rect(source);
            let left = rect.x;
            let right = source.0 - rect.x - rect.width;
            let top = rect.y;
            let bottom = source.1 - rect.y - rect.height;
            assert!(left.abs_diff(right) <= 1, "{:?}: left={} right={}", source, left, right);
            assert!(top.abs_diff(bottom) <= 1, "{:?}: top={} bottom={}", source, top, bottom);
        }
    }

    #[test]
    fn test_oversized_target_is_error() {
        assert!(matches!(
            center_crop((10, 10), (u32::MAX / 2 + 1, 1)),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(center_crop((10, 10), (1, u32::MAX)).is_err());
        assert!(center_crop((10, 10), (u32::MAX / 2, 1)).is_ok());
    }

    #[test]
    fn test_pixel_rect_stays_inside_source() {
        let region = center_crop((3, 7), (400, 600)).unwrap();
        let rect = region.pixel_rect((3, 7));
        assert!(rect.x + rect.width <= 3);
        assert!(rect.y + rect.height <= 7);
        assert!(rect.width >= 1 && rect.height >= 1);
    }
}

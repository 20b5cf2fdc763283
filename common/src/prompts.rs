//! プロンプト生成モジュール
//!
//! 画像生成AIに渡す証明写真への編集指示を組み立てる。
//! 色名・服装・アクセサリーの文言はそのまま埋め込む。

use crate::types::{Accessories, BackgroundColor, OutfitType};

/// 証明写真生成の指示文を生成
///
/// # Arguments
/// * `background` - 背景色
/// * `outfit` - 服装
/// * `accessories` - アクセサリー（未選択なら空の節）
pub fn build_id_photo_prompt(
    background: BackgroundColor,
    outfit: OutfitType,
    accessories: &Accessories,
) -> String {
    let background = background.color_name();
    let outfit = outfit.phrase();
    let accessory_clause = accessories.clause();

    format!(
        r#"Transform this image into a professional ID photo/Passport photo.
1. STRICTLY Change the background to a solid {background} color. Clean, even lighting on the background.
2. Change the person's clothing to a {outfit}. Ensure it fits naturally.
3. Keep the person's facial features EXACTLY the same. This is crucial for ID verification.
4. Ensure the person is facing forward.
5. The lighting should be soft, studio-quality, suitable for a government document.
6. Accessories: {accessory_clause}.
7. Return ONLY the image."#
    )
}

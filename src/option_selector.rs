//! 生成オプションの対話式選択モジュール

use crate::error::{IdPhotoError, Result};
use dialoguer::{MultiSelect, Select};
use id_photo_common::{Accessories, BackgroundColor, DocumentType, OutfitType, PhotoOptions};

/// アクセサリーの選択肢（表示順 = 指示文の順）
const ACCESSORY_LABELS: [&str; 4] = ["Mắt kính (glasses)", "Mũ (hat)", "Bông tai (earrings)", "Dây chuyền (necklace)"];

fn index_of<T: PartialEq>(items: &[T], current: &T) -> usize {
    items.iter().position(|item| item == current).unwrap_or(0)
}

/// MultiSelectの初期チェック状態
pub fn accessory_checks(accessories: &Accessories) -> [bool; 4] {
    [accessories.glasses, accessories.hat, accessories.earrings, accessories.necklace]
}

/// MultiSelectの選択結果（インデックス）から復元
pub fn accessories_from_selection(selected: &[usize]) -> Accessories {
    Accessories {
        glasses: selected.contains(&0),
        hat: selected.contains(&1),
        earrings: selected.contains(&2),
        necklace: selected.contains(&3),
    }
}

fn prompt_error(e: dialoguer::Error) -> IdPhotoError {
    IdPhotoError::Interactive(e.to_string())
}

/// 対話式で書類種別・背景・服装・アクセサリーを選択
pub fn select_options_interactive(defaults: PhotoOptions) -> Result<PhotoOptions> {
    println!("\n🪪 証明写真の設定を選択してください:\n");

    let doc_labels: Vec<String> = DocumentType::ALL
        .iter()
        .map(|d| format!("{} - {}", d.display_label(), d.print_size().label))
        .collect();
    let doc_index = Select::new()
        .with_prompt("書類種別")
        .items(&doc_labels)
        .default(index_of(&DocumentType::ALL, &defaults.document_type))
        .interact()
        .map_err(prompt_error)?;

    let bg_labels: Vec<&str> = BackgroundColor::ALL.iter().map(|b| b.color_name()).collect();
    let bg_index = Select::new()
        .with_prompt("背景色")
        .items(&bg_labels)
        .default(index_of(&BackgroundColor::ALL, &defaults.background))
        .interact()
        .map_err(prompt_error)?;

    let outfit_labels: Vec<&str> = OutfitType::ALL.iter().map(|o| o.phrase()).collect();
    let outfit_index = Select::new()
        .with_prompt("服装")
        .items(&outfit_labels)
        .default(index_of(&OutfitType::ALL, &defaults.outfit))
        .interact()
        .map_err(prompt_error)?;

    let accessory_selected = MultiSelect::new()
        .with_prompt("アクセサリー（スペースで切替、Enterで確定）")
        .items(&ACCESSORY_LABELS)
        .defaults(&accessory_checks(&defaults.accessories))
        .interact()
        .map_err(prompt_error)?;

    Ok(PhotoOptions {
        document_type: DocumentType::ALL[doc_index],
        background: BackgroundColor::ALL[bg_index],
        outfit: OutfitType::ALL[outfit_index],
        accessories: accessories_from_selection(&accessory_selected),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_of_default() {
        assert_eq!(index_of(&DocumentType::ALL, &DocumentType::Cccd), 1);
        assert_eq!(index_of(&OutfitType::ALL, &OutfitType::ShirtWhite), 3);
    }

    #[test]
    fn test_accessories_selection_roundtrip_order() {
        let accessories = accessories_from_selection(&[3, 0]);
        assert!(accessories.glasses);
        assert!(!accessories.hat);
        assert!(accessories.necklace);
        assert_eq!(accessory_checks(&accessories), [true, false, false, true]);
    }
}

//! 証明写真オプションの型定義
//!
//! CLIと将来のWeb(WASM)版で共有される型:
//! - DocumentType: 書類種別と印刷サイズ
//! - BackgroundColor / OutfitType: 生成指示にそのまま埋め込む値
//! - Accessories: アクセサリーの選択状態
//! - PhotoOptions: 上記をまとめた選択状態

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 印刷サイズ（ピクセル寸法と物理サイズのラベル）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintSize {
    pub width: u32,
    pub height: u32,
    pub label: &'static str,
}

const SIZE_4X6: PrintSize = PrintSize { width: 400, height: 600, label: "4x6 cm" };
const SIZE_3X4: PrintSize = PrintSize { width: 300, height: 400, label: "3x4 cm" };

/// 書類種別
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    Passport,
    /// 国民IDカード（Căn cước công dân）
    #[default]
    Cccd,
    License,
    Student,
}

impl DocumentType {
    pub const ALL: [DocumentType; 4] = [
        DocumentType::Passport,
        DocumentType::Cccd,
        DocumentType::License,
        DocumentType::Student,
    ];

    /// ファイル名に使う識別子
    pub fn id(&self) -> &'static str {
        match self {
            DocumentType::Passport => "PASSPORT",
            DocumentType::Cccd => "CCCD",
            DocumentType::License => "LICENSE",
            DocumentType::Student => "STUDENT",
        }
    }

    pub fn print_size(&self) -> PrintSize {
        match self {
            DocumentType::Passport | DocumentType::Cccd => SIZE_4X6,
            DocumentType::License | DocumentType::Student => SIZE_3X4,
        }
    }

    /// 選択画面の表示名
    pub fn display_label(&self) -> &'static str {
        match self {
            DocumentType::Passport => "Hộ chiếu (4x6)",
            DocumentType::Cccd => "CCCD (4x6)",
            DocumentType::License => "Bằng lái (3x4)",
            DocumentType::Student => "Hồ sơ (3x4)",
        }
    }

    /// ダウンロードファイル名: `IDPhoto-<種別>-<サイズ>.png`
    pub fn download_file_name(&self) -> String {
        format!("IDPhoto-{}-{}.png", self.id(), self.print_size().label)
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DocumentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "PASSPORT" => Ok(DocumentType::Passport),
            "CCCD" => Ok(DocumentType::Cccd),
            "LICENSE" => Ok(DocumentType::License),
            "STUDENT" => Ok(DocumentType::Student),
            _ => Err(Error::UnknownOption { kind: "document type", value: s.to_string() }),
        }
    }
}

/// 背景色
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BackgroundColor {
    #[default]
    White,
    Blue,
    Grey,
}

impl BackgroundColor {
    pub const ALL: [BackgroundColor; 3] =
        [BackgroundColor::White, BackgroundColor::Blue, BackgroundColor::Grey];

    /// 生成指示に埋め込む色名
    pub fn color_name(&self) -> &'static str {
        match self {
            BackgroundColor::White => "White",
            BackgroundColor::Blue => "Blue",
            BackgroundColor::Grey => "Grey",
        }
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.color_name())
    }
}

impl FromStr for BackgroundColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "white" => Ok(BackgroundColor::White),
            "blue" => Ok(BackgroundColor::Blue),
            "grey" | "gray" => Ok(BackgroundColor::Grey),
            _ => Err(Error::UnknownOption { kind: "background color", value: s.to_string() }),
        }
    }
}

/// 服装
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutfitType {
    Casual,
    SuitBlack,
    SuitNavy,
    #[default]
    ShirtWhite,
    AoDai,
}

impl OutfitType {
    pub const ALL: [OutfitType; 5] = [
        OutfitType::Casual,
        OutfitType::SuitBlack,
        OutfitType::SuitNavy,
        OutfitType::ShirtWhite,
        OutfitType::AoDai,
    ];

    /// 生成指示に埋め込む服装の説明
    pub fn phrase(&self) -> &'static str {
        match self {
            OutfitType::Casual => "Casual t-shirt",
            OutfitType::SuitBlack => "Black Business Suit",
            OutfitType::SuitNavy => "Navy Blue Business Suit",
            OutfitType::ShirtWhite => "White Collared Shirt",
            OutfitType::AoDai => "Traditional Ao Dai",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            OutfitType::Casual => "casual",
            OutfitType::SuitBlack => "suit-black",
            OutfitType::SuitNavy => "suit-navy",
            OutfitType::ShirtWhite => "shirt-white",
            OutfitType::AoDai => "ao-dai",
        }
    }
}

impl fmt::Display for OutfitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

impl FromStr for OutfitType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        OutfitType::ALL
            .into_iter()
            .find(|o| o.id() == normalized)
            .ok_or_else(|| Error::UnknownOption { kind: "outfit", value: s.to_string() })
    }
}

/// アクセサリーの選択状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Accessories {
    pub glasses: bool,
    pub hat: bool,
    pub earrings: bool,
    pub necklace: bool,
}

impl Accessories {
    /// 固定順（眼鏡→帽子→イヤリング→ネックレス）で選択済みの説明を返す
    pub fn phrases(&self) -> Vec<&'static str> {
        [
            (self.glasses, "wearing glasses"),
            (self.hat, "wearing a hat"),
            (self.earrings, "wearing earrings"),
            (self.necklace, "wearing a necklace"),
        ]
        .into_iter()
        .filter_map(|(selected, phrase)| selected.then_some(phrase))
        .collect()
    }

    /// 生成指示用の節。未選択なら空文字
    pub fn clause(&self) -> String {
        self.phrases().join(", ")
    }

    pub fn is_empty(&self) -> bool {
        !(self.glasses || self.hat || self.earrings || self.necklace)
    }
}

/// ユーザーが選択した生成オプション一式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhotoOptions {
    pub document_type: DocumentType,
    pub background: BackgroundColor,
    pub outfit: OutfitType,
    pub accessories: Accessories,
}

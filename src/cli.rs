use clap::{Args, Parser, Subcommand};
use id_photo_common::{Accessories, BackgroundColor, DocumentType, OutfitType, PhotoOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "id-photo")]
#[command(about = "AI証明写真生成・印刷サイズ切り抜きツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// 生成オプション（省略時は設定ファイルの既定値）
#[derive(Args, Debug, Clone, Default)]
pub struct PhotoArgs {
    /// 書類種別 (passport/cccd/license/student)
    #[arg(short = 'd', long)]
    pub doc_type: Option<DocumentType>,

    /// 背景色 (white/blue/grey)
    #[arg(short, long)]
    pub background: Option<BackgroundColor>,

    /// 服装 (casual/suit-black/suit-navy/shirt-white/ao-dai)
    #[arg(short = 'f', long)]
    pub outfit: Option<OutfitType>,

    /// 眼鏡を着用
    #[arg(long, conflicts_with = "no_glasses")]
    pub glasses: bool,

    /// 帽子を着用
    #[arg(long, conflicts_with = "no_hat")]
    pub hat: bool,

    /// イヤリングを着用
    #[arg(long, conflicts_with = "no_earrings")]
    pub earrings: bool,

    /// ネックレスを着用
    #[arg(long, conflicts_with = "no_necklace")]
    pub necklace: bool,

    /// 眼鏡なし（設定ファイルの既定値を打ち消す）
    #[arg(long)]
    pub no_glasses: bool,

    /// 帽子なし
    #[arg(long)]
    pub no_hat: bool,

    /// イヤリングなし
    #[arg(long)]
    pub no_earrings: bool,

    /// ネックレスなし
    #[arg(long)]
    pub no_necklace: bool,
}

/// `--x` / `--no-x` / 既定値 の順で決定
fn toggle(on: bool, off: bool, default: bool) -> bool {
    if off {
        false
    } else {
        on || default
    }
}

impl PhotoArgs {
    /// 既定値に指定分を上書き
    pub fn resolve(&self, defaults: PhotoOptions) -> PhotoOptions {
        PhotoOptions {
            document_type: self.doc_type.unwrap_or(defaults.document_type),
            background: self.background.unwrap_or(defaults.background),
            outfit: self.outfit.unwrap_or(defaults.outfit),
            accessories: Accessories {
                glasses: toggle(self.glasses, self.no_glasses, defaults.accessories.glasses),
                hat: toggle(self.hat, self.no_hat, defaults.accessories.hat),
                earrings: toggle(self.earrings, self.no_earrings, defaults.accessories.earrings),
                necklace: toggle(self.necklace, self.no_necklace, defaults.accessories.necklace),
            },
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// 写真からAIで証明写真を生成（切り抜きなし）
    Generate {
        /// 元の顔写真 (JPEG/PNG)
        #[arg(required = true)]
        photo: PathBuf,

        #[command(flatten)]
        options: PhotoArgs,

        /// 出力PNGファイル（デフォルト: 元ファイル名.generated.png）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 画像を書類サイズの比率で中央切り抜き（2倍解像度）
    Crop {
        /// 切り抜く画像
        #[arg(required = true)]
        image: PathBuf,

        /// 書類種別 (passport/cccd/license/student)
        #[arg(short = 'd', long)]
        doc_type: Option<DocumentType>,

        /// 出力ディレクトリ（デフォルト: カレント）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 生成から切り抜き・保存まで一括実行
    Run {
        /// 元の顔写真 (JPEG/PNG)
        #[arg(required = true)]
        photo: PathBuf,

        #[command(flatten)]
        options: PhotoArgs,

        /// 出力ディレクトリ（デフォルト: カレント）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 切り抜き前の生成画像も保存
        #[arg(long)]
        keep_generated: bool,

        /// 対話式でオプションを選択
        #[arg(short, long)]
        interactive: bool,
    },

    /// 書類種別ごとの印刷サイズを表示
    Sizes,

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// モデル名を設定
        #[arg(long)]
        set_model: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 生成画像の既定出力パス: `<stem>.generated.png`
pub fn default_generated_path(photo: &std::path::Path) -> PathBuf {
    let stem = photo
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("photo");
    photo.with_file_name(format!("{stem}.generated.png"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_options() {
        let cli = Cli::parse_from([
            "id-photo", "run", "me.jpg", "-d", "license", "--background", "blue",
            "--outfit", "ao-dai", "--hat", "--glasses",
        ]);
        let Commands::Run { photo, options, interactive, .. } = cli.command else {
            panic!("run expected");
        };
        assert_eq!(photo, PathBuf::from("me.jpg"));
        assert!(!interactive);

        let resolved = options.resolve(PhotoOptions::default());
        assert_eq!(resolved.document_type, DocumentType::License);
        assert_eq!(resolved.background, BackgroundColor::Blue);
        assert_eq!(resolved.outfit, OutfitType::AoDai);
        assert_eq!(resolved.accessories.clause(), "wearing glasses, wearing a hat");
    }

    #[test]
    fn test_parse_rejects_unknown_doc_type() {
        let result = Cli::try_parse_from(["id-photo", "crop", "x.png", "-d", "visa"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_uses_defaults() {
        let defaults = PhotoOptions {
            document_type: DocumentType::Passport,
            accessories: Accessories { earrings: true, ..Default::default() },
            ..Default::default()
        };
        let resolved = PhotoArgs::default().resolve(defaults);
        assert_eq!(resolved, defaults);
    }

    #[test]
    fn test_no_flag_overrides_default_accessory() {
        let defaults = PhotoOptions {
            accessories: Accessories { glasses: true, necklace: true, ..Default::default() },
            ..Default::default()
        };
        let cli = Cli::parse_from(["id-photo", "generate", "me.jpg", "--no-glasses", "--hat"]);
        let Commands::Generate { options, .. } = cli.command else {
            panic!("generate expected");
        };
        let resolved = options.resolve(defaults);
        assert!(!resolved.accessories.glasses);
        assert!(resolved.accessories.hat);
        assert!(resolved.accessories.necklace);
        assert_eq!(resolved.accessories.clause(), "wearing a hat, wearing a necklace");
    }

    #[test]
    fn test_accessory_flag_conflicts_with_negation() {
        let result = Cli::try_parse_from(["id-photo", "run", "me.jpg", "--hat", "--no-hat"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_generated_path() {
        let path = default_generated_path(std::path::Path::new("/tmp/me.jpg"));
        assert_eq!(path, PathBuf::from("/tmp/me.generated.png"));
    }
}

use clap::Parser;
use id_photo_ai::{cli, codec, config, cropper, error, generator, logging, option_selector, session};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use generator::GeminiProvider;
use id_photo_common::DocumentType;
use indicatif::{ProgressBar, ProgressStyle};
use session::IdPhotoApp;
use std::path::PathBuf;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("\n✖ {}", e);
        std::process::exit(1);
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

fn build_app(config: &Config, api_key: String) -> Result<IdPhotoApp<GeminiProvider>> {
    let provider = GeminiProvider::with_options(
        api_key.clone(),
        config.model.clone(),
        config.api_base.clone(),
        Some(Duration::from_secs(config.timeout_seconds)),
    )?;
    Ok(IdPhotoApp::with_options(provider, api_key, config.defaults))
}

/// 生成中はスピナーを表示
async fn generate_with_spinner(app: &mut IdPhotoApp<GeminiProvider>) -> Result<()> {
    let pb = spinner("AIが顔と服装を処理中...");
    let result = app.generate().await.map(|_| ());
    pb.finish_and_clear();
    result
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    // APIキーは起動時に1回だけ解決する
    let api_key = config.resolve_api_key();

    match cli.command {
        Commands::Generate { photo, options, output } => {
            println!("🪪 id-photo - 証明写真生成\n");

            let mut app = build_app(&config, api_key)?;
            app.set_options(options.resolve(config.defaults));

            println!("[1/2] 写真を読み込み中...");
            app.upload_file(&photo)?;
            println!("✔ {}\n", photo.display());

            println!("[2/2] AI生成中... (モデル: {})", app.provider().model());
            generate_with_spinner(&mut app).await?;

            let output = output.unwrap_or_else(|| cli::default_generated_path(&photo));
            let generated = app.state().generated_image.as_ref().ok_or(error::IdPhotoError::NoGeneratedImage)?;
            std::fs::write(&output, codec::to_bytes(generated)?)?;
            println!("✔ 生成画像を保存: {}", output.display());

            println!("\n✅ 生成完了");
        }

        Commands::Crop { image, doc_type, output } => {
            println!("✂ id-photo - 切り抜き\n");

            let document_type = doc_type.unwrap_or(config.defaults.document_type);
            let size = document_type.print_size();
            println!(
                "- {} ({}) → {}x{}px",
                document_type,
                size.label,
                size.width * id_photo_common::OVERSAMPLE,
                size.height * id_photo_common::OVERSAMPLE
            );

            let payload = codec::encode_file(&image)?;
            let cropped = cropper::crop_for_document(&payload, document_type)?;

            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            std::fs::create_dir_all(&output_dir)?;
            let path = output_dir.join(document_type.download_file_name());
            std::fs::write(&path, codec::to_bytes(&cropped)?)?;
            println!("✔ 保存: {}", path.display());
        }

        Commands::Run { photo, options, output, keep_generated, interactive } => {
            println!("🚀 id-photo - 一括処理\n");

            let mut selected = options.resolve(config.defaults);
            if interactive {
                selected = option_selector::select_options_interactive(selected)?;
            }

            let mut app = build_app(&config, api_key)?;
            app.set_options(selected);

            // 1. Upload
            println!("[1/3] 写真を読み込み中...");
            app.upload_file(&photo)?;
            println!("✔ {}\n", photo.display());

            // 2. Generate
            println!(
                "[2/3] AI生成中... (背景: {}, 服装: {})",
                selected.background, selected.outfit
            );
            generate_with_spinner(&mut app).await?;
            println!("✔ 生成完了\n");

            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            if keep_generated {
                std::fs::create_dir_all(&output_dir)?;
                let generated_path = output_dir.join(cli::default_generated_path(&photo).file_name().unwrap_or_default());
                if let Some(generated) = app.state().generated_image.as_ref() {
                    std::fs::write(&generated_path, codec::to_bytes(generated)?)?;
                    println!("- 生成画像: {}", generated_path.display());
                }
            }

            // 3. Crop & save
            println!("[3/3] {} に切り抜き中...", selected.document_type.print_size().label);
            let path = app.save_download(&output_dir)?;
            println!("✔ 保存: {}", path.display());

            println!("\n✅ 完了");
        }

        Commands::Sizes => {
            println!("書類種別      サイズ    出力(px)");
            for doc in DocumentType::ALL {
                let size = doc.print_size();
                println!(
                    "  {:<10}  {:<7}  {}x{}",
                    doc.id(),
                    size.label,
                    size.width * id_photo_common::OVERSAMPLE,
                    size.height * id_photo_common::OVERSAMPLE
                );
            }
        }

        Commands::Config { set_api_key, set_model, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if let Some(model) = set_model {
                config.set_model(model)?;
                println!("✔ モデルを設定しました");
            }

            if show {
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!("  モデル: {}", config.model);
                println!("  APIベース: {}", config.api_base);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  APIキー: {}", if config.has_api_key() { "設定済み" } else { "未設定" });
                println!(
                    "  既定: {} / {} / {}",
                    config.defaults.document_type, config.defaults.background, config.defaults.outfit
                );
            }
        }
    }

    Ok(())
}

//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use id_photo_ai::codec;
use id_photo_ai::error::IdPhotoError;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないファイルを読み込んだ場合
#[test]
fn test_encode_nonexistent_file() {
    let result = codec::encode_file(Path::new("/nonexistent/path/12345.jpg"));
    assert!(matches!(result.unwrap_err(), IdPhotoError::FileNotFound(_)));
}

/// ディレクトリを読み込んだ場合はIOエラー
#[test]
fn test_encode_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = codec::encode_file(dir.path());
    assert!(matches!(result.unwrap_err(), IdPhotoError::Io(_)));
}

/// 壊れた画像ファイル
#[test]
fn test_decode_broken_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"\x89PNG\r\n\x1a\nbroken").unwrap();

    let payload = codec::encode_file(&path).unwrap();
    assert!(matches!(codec::decode(&payload), Err(IdPhotoError::Decode(_))));
}

/// IdPhotoErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        IdPhotoError::Config("テスト設定エラー".to_string()),
        IdPhotoError::FileNotFound("test.jpg".to_string()),
        IdPhotoError::Decode("不正な画像".to_string()),
        IdPhotoError::Encode("書き出し失敗".to_string()),
        IdPhotoError::generation("API error 500"),
        IdPhotoError::NoImageReturned,
        IdPhotoError::NoOriginalImage,
        IdPhotoError::NoGeneratedImage,
        IdPhotoError::Interactive("中断".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// MissingApiKeyエラーのメッセージ確認
#[test]
fn test_missing_api_key_message() {
    let display = format!("{}", IdPhotoError::MissingApiKey);
    assert!(display.contains("APIキー"));
    assert!(display.contains("id-photo config"));
    assert!(display.contains("GEMINI_API_KEY"));
}

/// 生成エラーの分類
#[test]
fn test_generation_error_classification() {
    assert!(IdPhotoError::NoImageReturned.is_generation_error());
    assert!(IdPhotoError::generation("x").is_generation_error());
    assert!(!IdPhotoError::MissingApiKey.is_generation_error());
    assert!(!IdPhotoError::Decode("x".to_string()).is_generation_error());
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: IdPhotoError = io_err.into();

    assert!(matches!(err, IdPhotoError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: IdPhotoError = json_err.into();

    assert!(matches!(err, IdPhotoError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = id_photo_common::Error::InvalidDimensions { width: 0, height: 10 };
    let err: IdPhotoError = common_err.into();

    assert!(matches!(err, IdPhotoError::Common(_)));
    assert_eq!(format!("{}", err), "Invalid dimensions: 0x10");
}

/// 生成エラーは原因エラーを source として保持する
#[test]
fn test_generation_error_keeps_source() {
    use std::error::Error as _;

    let io_err = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
    let err = IdPhotoError::generation_caused_by("API呼び出しエラー", io_err);

    assert!(format!("{}", err).contains("API呼び出しエラー"));
    let source = err.source().expect("source expected");
    assert_eq!(source.to_string(), "timed out");

    assert!(IdPhotoError::generation("x").source().is_none());
}

//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use folio_rust::data;
use folio_rust::error::FolioError;
use folio_common::SiteConfig;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないフォルダを読み込んだ場合
#[test]
fn test_load_nonexistent_dir() {
    let result = data::load_dir(Path::new("/nonexistent/path/12345"), &SiteConfig::default());
    assert!(matches!(result, Err(FolioError::DataDirNotFound(_))));
}

/// 空のフォルダ（works.json無し）は中止
#[test]
fn test_load_empty_dir() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = data::load_dir(dir.path(), &SiteConfig::default());

    let err = result.unwrap_err();
    assert!(matches!(err, FolioError::Data(folio_common::Error::Io(_))));
}

/// 指定した設定ファイルが無い場合
#[test]
fn test_explicit_config_missing() {
    let dir = tempdir().expect("Failed to create temp dir");
    let missing = dir.path().join("nope.json");

    let result = data::load_config(dir.path(), Some(&missing));
    assert!(matches!(result, Err(FolioError::ConfigNotFound(_))));
}

/// 設定値が範囲外の場合
#[test]
fn test_invalid_config_value() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("site.json"), r#"{"reveal_threshold": 1.5}"#).unwrap();

    let result = data::load_config(dir.path(), None);
    assert!(matches!(
        result,
        Err(FolioError::Data(folio_common::Error::Config(_)))
    ));
}

/// エラーメッセージが日本語で出ること
#[test]
fn test_error_messages() {
    let err = FolioError::DataDirNotFound("/tmp/x".to_string());
    assert_eq!(err.to_string(), "データフォルダが見つかりません: /tmp/x");

    let err = FolioError::InvalidLimit;
    assert!(err.to_string().contains("1以上"));
}

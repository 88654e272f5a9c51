//! データフォルダの読み込み
//!
//! ブラウザと同じ `Dataset::assemble` を通すので、読み込みポリシーの結果も一致する。

use crate::error::{FolioError, Result};
use folio_common::config::CONFIG_FILE;
use folio_common::load::parse_records;
use folio_common::{Dataset, Loaded, Record, SiteConfig, Source};
use std::path::Path;

/// 設定を読み込む
///
/// `explicit` が指定されていればそのファイル、なければ `dir/site.json`。
/// どちらも無ければデフォルト設定。
pub fn load_config(dir: &Path, explicit: Option<&Path>) -> Result<SiteConfig> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(FolioError::ConfigNotFound(path.display().to_string()));
        }
        return Ok(SiteConfig::from_file(path)?);
    }

    let path = dir.join(CONFIG_FILE);
    if path.is_file() {
        Ok(SiteConfig::from_file(&path)?)
    } else {
        Ok(SiteConfig::default())
    }
}

/// 1ソース分を読み込む
pub fn read_source(dir: &Path, source: Source) -> folio_common::Result<Vec<Record>> {
    let path = dir.join(source.file_name());
    let body = std::fs::read_to_string(&path)?;
    parse_records(&path.display().to_string(), &body)
}

/// データフォルダ全体を読み込む
pub fn load_dir(dir: &Path, config: &SiteConfig) -> Result<Loaded> {
    if !dir.is_dir() {
        return Err(FolioError::DataDirNotFound(dir.display().to_string()));
    }

    let results = Source::ALL
        .into_iter()
        .map(|source| (source, read_source(dir, source)))
        .collect();

    Ok(Dataset::assemble(results, &config.load_policy)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_source_parse_error_names_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("posts.json"), "{broken").unwrap();

        let err = read_source(dir.path(), Source::Posts).unwrap_err();
        assert!(matches!(err, folio_common::Error::Parse { .. }));
        assert!(err.to_string().contains("posts.json"));
    }

    #[test]
    fn test_load_config_defaults_without_file() {
        let dir = tempdir().unwrap();
        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config, SiteConfig::default());
    }
}

//! サイト設定
//!
//! `<data_dir>/site.json` から読み込む。すべての項目に既定値があり、
//! ファイルが無くても動作する。

use crate::classify::ClassifierPolicy;
use crate::error::{Error, Result};
use crate::href::{detect_base, normalize_base};
use crate::load::LoadPolicy;
use crate::reveal::DEFAULT_THRESHOLD;
use crate::search::DEFAULT_SEARCH_LIMIT;
use crate::skill::SkillTiming;
use serde::{Deserialize, Serialize};

/// 設定ファイル名
pub const CONFIG_FILE: &str = "site.json";

/// サイト設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// 配置ベースの明示指定（未指定なら現在のパスから検出）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    pub data_dir: String,
    pub load_policy: LoadPolicy,
    /// ホームに並べる件数
    pub home_limit: usize,
    pub search_limit: usize,
    pub reveal_threshold: f64,
    /// 作品タブの初期キー
    pub default_tab: String,
    pub skill: SkillTiming,
    pub classifier: ClassifierPolicy,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: None,
            data_dir: "data".to_string(),
            load_policy: LoadPolicy::default(),
            home_limit: 6,
            search_limit: DEFAULT_SEARCH_LIMIT,
            reveal_threshold: DEFAULT_THRESHOLD,
            default_tab: "design".to_string(),
            skill: SkillTiming::default(),
            classifier: ClassifierPolicy::default(),
        }
    }
}

impl SiteConfig {
    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    fn validate(&self) -> Result<()> {
        if self.search_limit == 0 {
            return Err(Error::Config("search_limit must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(Error::Config(format!(
                "reveal_threshold must be within 0..=1 (got {})",
                self.reveal_threshold
            )));
        }
        Ok(())
    }

    /// 現在のパス名に対する配置ベース
    pub fn base_for(&self, pathname: &str) -> String {
        match self.base_path.as_deref() {
            Some(base) => normalize_base(base),
            None => detect_base(pathname),
        }
    }
}

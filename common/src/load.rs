//! データ読み込みの組み立て
//!
//! 取得処理そのものは環境ごと（WASMはfetch、CLIはファイル）。
//! ここでは取得結果をポリシーに従って1つのDatasetにまとめる。

use crate::error::{Error, Result};
use crate::types::{Group, Record};
use serde::{Deserialize, Serialize};
use std::fmt;

/// データソース
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Works,
    Posts,
    Sns,
}

impl Source {
    pub const ALL: [Source; 3] = [Source::Works, Source::Posts, Source::Sns];

    pub fn file_name(&self) -> &'static str {
        match self {
            Source::Works => "works.json",
            Source::Posts => "posts.json",
            Source::Sns => "sns.json",
        }
    }

    pub fn group(&self) -> Group {
        match self {
            Source::Works => Group::Work,
            Source::Posts => Group::Writing,
            Source::Sns => Group::Sns,
        }
    }

    /// 配置ベース + データディレクトリ + ファイル名
    pub fn url(&self, base: &str, data_dir: &str) -> String {
        resource_url(base, data_dir, self.file_name())
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// データファイルの絶対パス
pub fn resource_url(base: &str, data_dir: &str, file: &str) -> String {
    let base = crate::href::normalize_base(base);
    let dir = data_dir.trim().trim_matches('/');
    if dir.is_empty() {
        format!("{}{}", base, file)
    } else {
        format!("{}{}/{}", base, dir, file)
    }
}

/// 一部のソースが失敗したときの扱い
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum LoadPolicy {
    /// どれか1つでも失敗したら全体を中止
    Strict,
    /// critical 以外の失敗は空リストとして続行
    Tolerant {
        #[serde(default = "default_critical")]
        critical: Vec<Source>,
    },
}

fn default_critical() -> Vec<Source> {
    vec![Source::Works]
}

impl Default for LoadPolicy {
    fn default() -> Self {
        LoadPolicy::Tolerant {
            critical: default_critical(),
        }
    }
}

impl LoadPolicy {
    pub fn is_critical(&self, source: Source) -> bool {
        match self {
            LoadPolicy::Strict => true,
            LoadPolicy::Tolerant { critical } => critical.contains(&source),
        }
    }
}

/// 読み込んだ全データ
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub works: Vec<Record>,
    pub posts: Vec<Record>,
    pub sns: Vec<Record>,
}

impl Dataset {
    pub fn get(&self, source: Source) -> &[Record] {
        match source {
            Source::Works => &self.works,
            Source::Posts => &self.posts,
            Source::Sns => &self.sns,
        }
    }

    fn slot_mut(&mut self, source: Source) -> &mut Vec<Record> {
        match source {
            Source::Works => &mut self.works,
            Source::Posts => &mut self.posts,
            Source::Sns => &mut self.sns,
        }
    }

    /// 取得結果をポリシーに従ってまとめる
    ///
    /// 中止になる場合は `results` の順で最初に失敗した critical ソースのエラーを返す。
    pub fn assemble(
        results: Vec<(Source, Result<Vec<Record>>)>,
        policy: &LoadPolicy,
    ) -> Result<Loaded> {
        let mut loaded = Loaded::default();

        for (source, result) in results {
            match result {
                Ok(records) => *loaded.dataset.slot_mut(source) = records,
                Err(error) if policy.is_critical(source) => return Err(error),
                Err(error) => loaded.degraded.push(Degraded { source, error }),
            }
        }

        Ok(loaded)
    }
}

/// 空リストで代替したソース
#[derive(Debug)]
pub struct Degraded {
    pub source: Source,
    pub error: Error,
}

/// 読み込み結果
#[derive(Debug, Default)]
pub struct Loaded {
    pub dataset: Dataset,
    pub degraded: Vec<Degraded>,
}

/// レスポンス本文をレコード配列としてパース
pub fn parse_records(url: &str, body: &str) -> Result<Vec<Record>> {
    serde_json::from_str(body).map_err(|source| Error::Parse {
        url: url.to_string(),
        source,
    })
}

//! 横断検索
//!
//! 作品・記事・SNSをまとめたコーパスに対して、タイトル + 説明 + タグの
//! 部分一致（大文字小文字無視）で絞り込む。

use crate::load::{Dataset, Source};
use crate::types::{CorpusEntry, Record};

/// 検索結果の表示上限
pub const DEFAULT_SEARCH_LIMIT: usize = 18;

/// 出典タグを付けてコーパスを構築
pub fn build_corpus(dataset: &Dataset) -> Vec<CorpusEntry> {
    Source::ALL
        .iter()
        .flat_map(|source| {
            dataset.get(*source).iter().map(move |record| CorpusEntry {
                record: record.clone(),
                group: source.group(),
            })
        })
        .collect()
}

fn haystack(record: &Record) -> String {
    format!("{} {} {}", record.title, record.desc(), record.tags.join(" ")).to_lowercase()
}

/// `needle` は小文字化済みであること
pub fn matches(record: &Record, needle: &str) -> bool {
    haystack(record).contains(needle)
}

/// 絞り込み（空クエリはコーパス全体）
pub fn filter<'a>(corpus: &'a [CorpusEntry], query: &str) -> Vec<&'a CorpusEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return corpus.iter().collect();
    }
    corpus.iter().filter(|e| matches(&e.record, &needle)).collect()
}

/// 検索結果
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<'a> {
    /// クエリが空：入力を促す
    Prompt,
    /// `total` は全一致件数、`shown` は表示上限で切った結果
    Results {
        total: usize,
        shown: Vec<&'a CorpusEntry>,
    },
}

impl SearchOutcome<'_> {
    /// ステータス行の文言
    pub fn status_line(&self) -> String {
        match self {
            SearchOutcome::Prompt => "Type to search works, writing and links.".to_string(),
            SearchOutcome::Results { total: 0, .. } => "No results.".to_string(),
            SearchOutcome::Results { total, shown } if *total > shown.len() => {
                format!("{} results (showing first {})", total, shown.len())
            }
            SearchOutcome::Results { total: 1, .. } => "1 result".to_string(),
            SearchOutcome::Results { total, .. } => format!("{} results", total),
        }
    }

    pub fn total(&self) -> usize {
        match self {
            SearchOutcome::Prompt => 0,
            SearchOutcome::Results { total, .. } => *total,
        }
    }
}

/// 検索を実行
pub fn search<'a>(corpus: &'a [CorpusEntry], query: &str, limit: usize) -> SearchOutcome<'a> {
    if query.trim().is_empty() {
        return SearchOutcome::Prompt;
    }

    let mut matched = filter(corpus, query);
    let total = matched.len();
    matched.truncate(limit);

    SearchOutcome::Results {
        total,
        shown: matched,
    }
}

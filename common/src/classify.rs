//! 作品カテゴリの判定
//!
//! 判定ポリシーは (条件, 結果) のルール表として保持し、先頭から評価して
//! 最初に一致したものを採用する。どれにも一致しなければ fallback。
//! ルール表は site.json で差し替え可能。

use crate::types::{Category, Record};
use serde::{Deserialize, Serialize};

/// コンテンツ系キーワード（英語・韓国語）
const CONTENT_KEYWORDS: &[&str] = &[
    "reels", "shorts", "youtube", "instagram", "tiktok", "blog", "vlog",
    "릴스", "쇼츠", "유튜브", "블로그", "피드", "인스타", "콘텐츠",
];

/// 詳細ページを示すパス
const WEB_MARKERS: &[&str] = &["/works/", "works/", "work-detail", "case/"];

/// 判定ルール
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rule {
    /// レコードの category / type フィールド（既知の値のみ）
    Explicit,

    /// タイトル・説明・タグにキーワードが含まれる
    Keywords {
        keywords: Vec<String>,
        category: Category,
    },

    /// hrefに詳細ページのマーカーが含まれる
    HrefContains {
        markers: Vec<String>,
        category: Category,
    },
}

impl Rule {
    pub fn apply(&self, record: &Record) -> Option<Category> {
        match self {
            Rule::Explicit => record
                .category
                .as_deref()
                .and_then(Category::parse)
                .or_else(|| record.kind.as_deref().and_then(Category::parse)),
            Rule::Keywords { keywords, category } => {
                let haystack = keyword_haystack(record);
                keywords
                    .iter()
                    .any(|k| !k.is_empty() && haystack.contains(&k.to_lowercase()))
                    .then_some(*category)
            }
            Rule::HrefContains { markers, category } => {
                let href = record.href()?.to_lowercase();
                markers
                    .iter()
                    .any(|m| !m.is_empty() && href.contains(&m.to_lowercase()))
                    .then_some(*category)
            }
        }
    }
}

fn keyword_haystack(record: &Record) -> String {
    format!("{} {} {}", record.title, record.desc(), record.tags.join(" ")).to_lowercase()
}

/// 判定ポリシー
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierPolicy {
    pub rules: Vec<Rule>,
    pub fallback: Category,
}

impl Default for ClassifierPolicy {
    fn default() -> Self {
        Self {
            rules: vec![
                Rule::Explicit,
                Rule::Keywords {
                    keywords: CONTENT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
                    category: Category::Content,
                },
                Rule::HrefContains {
                    markers: WEB_MARKERS.iter().map(|m| m.to_string()).collect(),
                    category: Category::Web,
                },
            ],
            fallback: Category::Design,
        }
    }
}

impl ClassifierPolicy {
    pub fn classify(&self, record: &Record) -> Category {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(record))
            .unwrap_or(self.fallback)
    }
}

/// レコードのカテゴリを判定
pub fn classify(record: &Record, policy: &ClassifierPolicy) -> Category {
    policy.classify(record)
}

/// カテゴリ別に振り分けた作品（入力順を保持）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partitioned {
    pub design: Vec<Record>,
    pub web: Vec<Record>,
    pub content: Vec<Record>,
}

impl Partitioned {
    pub fn get(&self, category: Category) -> &[Record] {
        match category {
            Category::Design => &self.design,
            Category::Web => &self.web,
            Category::Content => &self.content,
        }
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<Record> {
        match category {
            Category::Design => &mut self.design,
            Category::Web => &mut self.web,
            Category::Content => &mut self.content,
        }
    }

    pub fn len(&self) -> usize {
        self.design.len() + self.web.len() + self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 作品をカテゴリ別に振り分け
pub fn partition(records: &[Record], policy: &ClassifierPolicy) -> Partitioned {
    let mut out = Partitioned::default();
    for record in records {
        out.bucket_mut(policy.classify(record)).push(record.clone());
    }
    out
}

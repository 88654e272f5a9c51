//! CLI出力用の集計

use folio_common::card::MAX_TAGS;
use folio_common::href::link_target;
use folio_common::{classify, Category, ClassifierPolicy, CorpusEntry, Dataset, Group, Record, Source};
use serde::Serialize;

/// データ上の注意点
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// カードは無効表示になる
    MissingHref,
    EmptyTitle,
    /// 先頭4件以外のタグは表示されない
    HiddenTags { count: usize },
    /// 分類に使われない category の値
    UnknownCategory { value: String },
}

impl Issue {
    pub fn describe(&self) -> String {
        match self {
            Issue::MissingHref => "hrefが未指定（リンク無効）".to_string(),
            Issue::EmptyTitle => "タイトルが空".to_string(),
            Issue::HiddenTags { count } => format!("タグ{}件が非表示", count),
            Issue::UnknownCategory { value } => format!("不明なcategory: {}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub source: Source,
    pub index: usize,
    pub title: String,
    pub issue: Issue,
}

fn record_issues(source: Source, record: &Record) -> Vec<Issue> {
    let mut issues = Vec::new();

    if record.title.trim().is_empty() {
        issues.push(Issue::EmptyTitle);
    }
    if link_target("/", record.href()).disabled {
        issues.push(Issue::MissingHref);
    }
    if record.tags.len() > MAX_TAGS {
        issues.push(Issue::HiddenTags {
            count: record.tags.len() - MAX_TAGS,
        });
    }
    if source == Source::Works {
        if let Some(value) = record.category.as_deref().filter(|v| !v.trim().is_empty()) {
            if Category::parse(value).is_none() {
                issues.push(Issue::UnknownCategory {
                    value: value.to_string(),
                });
            }
        }
    }

    issues
}

/// 全ソースの注意点を列挙
pub fn check_dataset(dataset: &Dataset) -> Vec<Finding> {
    Source::ALL
        .into_iter()
        .flat_map(|source| {
            dataset
                .get(source)
                .iter()
                .enumerate()
                .flat_map(move |(index, record)| {
                    record_issues(source, record).into_iter().map(move |issue| Finding {
                        source,
                        index,
                        title: record.title.clone(),
                        issue,
                    })
                })
        })
        .collect()
}

/// 分類結果の1行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedRow {
    pub title: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

pub fn classify_rows(works: &[Record], policy: &ClassifierPolicy) -> Vec<ClassifiedRow> {
    works
        .iter()
        .map(|record| ClassifiedRow {
            title: record.title.clone(),
            category: classify(record, policy),
            href: record.href().map(str::to_string),
        })
        .collect()
}

/// 検索結果の1行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRow {
    pub group: Group,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

pub fn search_rows(shown: &[&CorpusEntry]) -> Vec<SearchRow> {
    shown
        .iter()
        .map(|entry| SearchRow {
            group: entry.group,
            title: entry.record.title.clone(),
            href: entry.record.href().map(str::to_string),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, href: Option<&str>) -> Record {
        Record {
            title: title.to_string(),
            href: href.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_check_flags_missing_href_and_hidden_tags() {
        let mut tagged = record("Poster", Some("works/poster.html"));
        tagged.tags = (0..6).map(|i| format!("t{}", i)).collect();

        let dataset = Dataset {
            works: vec![tagged, record("Draft", Some("  ")), record("Soon", Some("#"))],
            ..Default::default()
        };

        let findings = check_dataset(&dataset);
        assert_eq!(findings.len(), 3);
        assert_eq!(findings[0].issue, Issue::HiddenTags { count: 2 });
        assert_eq!(findings[1].index, 1);
        assert_eq!(findings[1].issue, Issue::MissingHref);
        assert_eq!(findings[2].title, "Soon");
        assert_eq!(findings[2].issue, Issue::MissingHref);
    }

    #[test]
    fn test_unknown_category_only_for_works() {
        let mut odd = record("Odd", Some("a.html"));
        odd.category = Some("photo".to_string());

        let dataset = Dataset {
            works: vec![odd.clone()],
            posts: vec![odd],
            ..Default::default()
        };

        let findings = check_dataset(&dataset);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].source, Source::Works);
        assert_eq!(
            findings[0].issue,
            Issue::UnknownCategory { value: "photo".to_string() }
        );
    }

    #[test]
    fn test_classify_rows_follow_policy() {
        let mut reel = record("Reel", Some("https://instagram.com/p/1"));
        reel.tags = vec!["Reels".to_string()];
        let works = vec![reel, record("Case", Some("works/case.html"))];

        let rows = classify_rows(&works, &ClassifierPolicy::default());
        assert_eq!(rows[0].category, Category::Content);
        assert_eq!(rows[1].category, Category::Web);
    }

    #[test]
    fn test_finding_json_shape() {
        let finding = Finding {
            source: Source::Sns,
            index: 0,
            title: "Blog".to_string(),
            issue: Issue::MissingHref,
        };
        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["source"], "sns");
        assert_eq!(json["issue"]["kind"], "missing_href");
    }
}

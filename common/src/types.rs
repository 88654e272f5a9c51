//! データファイルの型定義
//!
//! works.json / posts.json / sns.json は同じ形のレコード配列:
//! - Record: 1件のポートフォリオ項目
//! - Group: 横断検索用の出典タグ
//! - Category: 作品の分類（classifyで導出、保存しない）

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// ポートフォリオ項目（作品・記事・SNSリンク共通）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,

    #[serde(deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Record {
    pub fn desc(&self) -> &str {
        self.desc.as_deref().unwrap_or("")
    }

    /// 空文字のhrefは未指定として扱う
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref().map(str::trim).filter(|h| !h.is_empty())
    }

    pub fn thumb(&self) -> Option<&str> {
        self.thumb.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// 出典グループ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    Work,
    Writing,
    #[serde(rename = "SNS")]
    Sns,
}

impl Group {
    pub fn as_str(&self) -> &'static str {
        match self {
            Group::Work => "Work",
            Group::Writing => "Writing",
            Group::Sns => "SNS",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 作品カテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Design,
    Web,
    Content,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Design, Category::Web, Category::Content];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Design => "design",
            Category::Web => "web",
            Category::Content => "content",
        }
    }

    /// 大文字小文字を無視してパース（未知の値はNone）
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 横断検索用のレコード（出典タグ付きコピー）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusEntry {
    #[serde(flatten)]
    pub record: Record,
    pub group: Group,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserialize_full() {
        let json = r#"{
            "title": "Brand Site",
            "desc": "Renewal",
            "href": "works/brand.html",
            "thumb": "img/brand.jpg",
            "tags": ["web", "ux"],
            "category": "web",
            "type": "case"
        }"#;

        let record: Record = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.title, "Brand Site");
        assert_eq!(record.desc(), "Renewal");
        assert_eq!(record.href(), Some("works/brand.html"));
        assert_eq!(record.tags, vec!["web", "ux"]);
        assert_eq!(record.kind.as_deref(), Some("case"));
    }

    #[test]
    fn test_record_deserialize_missing_fields() {
        // titleのみでもデシリアライズできる
        let record: Record = serde_json::from_str(r#"{"title": "A"}"#).expect("デシリアライズ失敗");
        assert_eq!(record.title, "A");
        assert_eq!(record.desc(), "");
        assert_eq!(record.href(), None);
        assert!(record.tags.is_empty());
    }

    #[test]
    fn test_record_null_tags_and_blank_href() {
        let record: Record =
            serde_json::from_str(r#"{"title": "A", "tags": null, "href": "  "}"#).unwrap();
        assert!(record.tags.is_empty());
        assert_eq!(record.href(), None);
    }

    #[test]
    fn test_category_parse_case_insensitive() {
        assert_eq!(Category::parse("WEB"), Some(Category::Web));
        assert_eq!(Category::parse(" Design "), Some(Category::Design));
        assert_eq!(Category::parse("video"), None);
    }

    #[test]
    fn test_group_serialize() {
        let entry = CorpusEntry {
            record: Record { title: "X".into(), ..Default::default() },
            group: Group::Sns,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"group\":\"SNS\""));
        assert!(json.contains("\"title\":\"X\""));
    }
}

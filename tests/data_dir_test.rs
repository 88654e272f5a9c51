//! データフォルダ読み込みテスト
//!
//! 一時フォルダに works/posts/sns を置いて読み込みポリシーを検証

use folio_common::{build_corpus, partition, search, Category, LoadPolicy, SiteConfig, Source};
use folio_rust::data;
use std::path::Path;
use tempfile::tempdir;

const WORKS: &str = r#"[
  {"title": "Brand Poster", "desc": "Print series", "href": "works/poster.html", "category": "Design", "tags": ["print", "brand"]},
  {"title": "Summer Reels", "desc": "Short-form edits", "href": "https://instagram.com/p/abc", "tags": ["Reels"]},
  {"title": "Shop Renewal", "href": "./works/shop.html", "tags": null}
]"#;

const POSTS: &str = r#"[{"title": "Making the poster", "href": "posts/poster.html", "tags": ["process"]}]"#;

const SNS: &str = r#"[{"title": "Instagram", "href": "https://instagram.com/folio"}]"#;

fn write_all(dir: &Path) {
    std::fs::write(dir.join("works.json"), WORKS).unwrap();
    std::fs::write(dir.join("posts.json"), POSTS).unwrap();
    std::fs::write(dir.join("sns.json"), SNS).unwrap();
}

/// 全ファイルが揃っている場合
#[test]
fn test_load_complete_dir() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_all(dir.path());

    let config = data::load_config(dir.path(), None).unwrap();
    let loaded = data::load_dir(dir.path(), &config).unwrap();

    assert!(loaded.degraded.is_empty());
    assert_eq!(loaded.dataset.works.len(), 3);
    assert!(loaded.dataset.works[2].tags.is_empty());

    let parts = partition(&loaded.dataset.works, &config.classifier);
    assert_eq!(parts.get(Category::Design)[0].title, "Brand Poster");
    assert_eq!(parts.get(Category::Content)[0].title, "Summer Reels");
    assert_eq!(parts.get(Category::Web)[0].title, "Shop Renewal");
}

/// 任意ソースが欠けていても既定ポリシーでは続行する
#[test]
fn test_missing_optional_source_degrades() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_all(dir.path());
    std::fs::remove_file(dir.path().join("sns.json")).unwrap();

    let loaded = data::load_dir(dir.path(), &SiteConfig::default()).unwrap();

    assert!(loaded.dataset.sns.is_empty());
    assert_eq!(loaded.degraded.len(), 1);
    assert_eq!(loaded.degraded[0].source, Source::Sns);
}

/// works.json が壊れていれば中止
#[test]
fn test_broken_works_aborts() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_all(dir.path());
    std::fs::write(dir.path().join("works.json"), "[{").unwrap();

    let result = data::load_dir(dir.path(), &SiteConfig::default());
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("works.json"));
}

/// strict では任意ソースの欠落も中止
#[test]
fn test_strict_policy_from_site_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_all(dir.path());
    std::fs::remove_file(dir.path().join("posts.json")).unwrap();
    std::fs::write(dir.path().join("site.json"), r#"{"load_policy": {"mode": "strict"}}"#).unwrap();

    let config = data::load_config(dir.path(), None).unwrap();
    assert_eq!(config.load_policy, LoadPolicy::Strict);
    assert!(data::load_dir(dir.path(), &config).is_err());
}

/// 横断検索は works → posts → sns の順
#[test]
fn test_search_across_sources() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_all(dir.path());

    let loaded = data::load_dir(dir.path(), &SiteConfig::default()).unwrap();
    let corpus = build_corpus(&loaded.dataset);

    let outcome = search(&corpus, "POSTER", 18);
    assert_eq!(outcome.total(), 2);
    assert_eq!(outcome.status_line(), "2 results");
}

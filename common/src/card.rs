//! カードHTML生成
//!
//! レコード1件を自己完結したカード断片に変換する。
//! テキストと属性値はすべてエスケープしてから埋め込む。

use crate::href::{fix_path, link_target};
use crate::types::{CorpusEntry, Record};
use std::fmt::Write;

/// 表示するタグの上限
pub const MAX_TAGS: usize = 4;

/// HTML特殊文字をエスケープ
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// 一覧用カード（スクロールで表示される `reveal` 付き）
pub fn card_html(record: &Record, base: &str) -> String {
    render_card(record, base, "card reveal", None)
}

/// 検索結果用カード（出典ラベル付き、revealなし）
pub fn search_card_html(entry: &CorpusEntry, base: &str) -> String {
    render_card(&entry.record, base, "card", Some(entry.group.as_str()))
}

fn render_card(record: &Record, base: &str, class: &str, badge: Option<&str>) -> String {
    let link = link_target(base, record.href());
    let title = escape_html(&record.title);

    let mut html = String::new();
    let _ = write!(html, "<a class=\"{}", class);
    if link.disabled {
        html.push_str(" is-disabled");
    }
    let _ = write!(html, "\" href=\"{}\"", escape_html(&link.href));
    if let Some(target) = link.target_attr() {
        let _ = write!(html, " target=\"{}\"", target);
    }
    if let Some(rel) = link.rel_attr() {
        let _ = write!(html, " rel=\"{}\"", rel);
    }
    if link.disabled {
        html.push_str(" aria-disabled=\"true\" tabindex=\"-1\"");
    }
    html.push('>');

    html.push_str("<div class=\"thumb\">");
    if let Some(thumb) = record.thumb() {
        let _ = write!(
            html,
            "<img src=\"{}\" alt=\"{}\" loading=\"lazy\" decoding=\"async\">",
            escape_html(&fix_path(base, thumb)),
            title
        );
    }
    html.push_str("</div>");

    if let Some(badge) = badge {
        let _ = write!(html, "<span class=\"badge\">{}</span>", escape_html(badge));
    }

    let _ = write!(html, "<h3>{}</h3>", title);
    let _ = write!(html, "<p>{}</p>", escape_html(record.desc()));

    html.push_str("<div class=\"tagrow\">");
    for tag in record.tags.iter().take(MAX_TAGS) {
        let _ = write!(html, "<span class=\"tag\">{}</span>", escape_html(tag));
    }
    html.push_str("</div></a>");

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Group;

    fn record(title: &str) -> Record {
        Record {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>\"Tom\" & 'Jerry'</b>"),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("포트폴리오"), "포트폴리오");
    }

    #[test]
    fn test_card_caps_tags_at_four_in_order() {
        let r = Record {
            tags: ["a", "b", "c", "d", "e", "f"].iter().map(|t| t.to_string()).collect(),
            ..record("Tags")
        };
        let html = card_html(&r, "/");
        assert_eq!(html.matches("class=\"tag\"").count(), 4);
        assert!(html.contains(
            "<span class=\"tag\">a</span><span class=\"tag\">b</span>\
             <span class=\"tag\">c</span><span class=\"tag\">d</span>"
        ));
        assert!(!html.contains(">e<"));
    }

    #[test]
    fn test_card_external_link() {
        let r = Record {
            href: Some("https://example.com".into()),
            ..record("Ext")
        };
        let html = card_html(&r, "/");
        assert!(html.contains("href=\"https://example.com\""));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noopener\""));
    }

    #[test]
    fn test_card_internal_link_same_context() {
        let r = Record {
            href: Some("about.html".into()),
            ..record("In")
        };
        let html = card_html(&r, "/repo/");
        assert!(html.contains("href=\"/repo/about.html\""));
        assert!(!html.contains("target="));
    }

    #[test]
    fn test_card_without_href_is_disabled() {
        let html = card_html(&record("Nothing"), "/");
        assert!(html.starts_with("<a class=\"card reveal is-disabled\" href=\"#\""));
        assert!(html.contains("aria-disabled=\"true\""));
    }

    #[test]
    fn test_card_thumbnail() {
        let with_thumb = Record {
            thumb: Some("./img/a.jpg".into()),
            ..record("Pic")
        };
        let html = card_html(&with_thumb, "/repo/");
        assert!(html.contains("<img src=\"/repo/img/a.jpg\" alt=\"Pic\" loading=\"lazy\""));

        let html = card_html(&record("NoPic"), "/");
        assert!(html.contains("<div class=\"thumb\"></div>"));
        assert!(html.contains("<p></p>"));
    }

    #[test]
    fn test_card_escapes_untrusted_text() {
        let r = Record {
            desc: Some("<script>alert(1)</script>".into()),
            tags: vec!["<i>".into()],
            ..record("A \"quoted\" title")
        };
        let html = card_html(&r, "/");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<h3>A &quot;quoted&quot; title</h3>"));
        assert!(html.contains("<span class=\"tag\">&lt;i&gt;</span>"));
    }

    #[test]
    fn test_search_card_has_group_badge() {
        let entry = CorpusEntry {
            record: record("Post"),
            group: Group::Writing,
        };
        let html = search_card_html(&entry, "/");
        assert!(html.starts_with("<a class=\"card is-disabled\""));
        assert!(html.contains("<span class=\"badge\">Writing</span>"));
    }
}

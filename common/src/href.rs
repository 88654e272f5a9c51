//! リンク先の正規化
//!
//! - 外部リンク判定（新しいタブ + noopener）
//! - サブパス配置（/<repo>/ 配下）でのパス補正
//! - 空のhrefはプレースホルダ `#` として無効化

/// hrefが空のときの置き換え先
pub const PLACEHOLDER_HREF: &str = "#";

/// 外部リンクに付与するrel
pub const EXTERNAL_REL: &str = "noopener";

/// 現在のパス名から配置ベースを検出
///
/// 先頭セグメントを配置ルートとみなす。先頭セグメントが空、
/// またはファイル名（`index.html` など）の場合はルート配置。
///
/// # Examples
/// ```
/// use folio_common::detect_base;
///
/// assert_eq!(detect_base("/portfolio/works.html"), "/portfolio/");
/// assert_eq!(detect_base("/"), "/");
/// ```
pub fn detect_base(pathname: &str) -> String {
    let first = pathname
        .trim_start_matches('/')
        .split('/')
        .next()
        .unwrap_or("");

    if first.is_empty() || first.contains('.') {
        "/".to_string()
    } else {
        format!("/{}/", first)
    }
}

/// ベースを `/xxx/` 形式に揃える
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

/// http(s)で始まるか
pub fn is_external(href: &str) -> bool {
    let lower = href.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// ベース補正の対象外（外部・アンカー・スキーム付き）
fn is_passthrough(path: &str) -> bool {
    is_external(path)
        || path.starts_with('#')
        || path.starts_with("//")
        || path.starts_with("mailto:")
        || path.starts_with("tel:")
        || path.starts_with("data:")
}

/// 内部パスに配置ベースを付与
///
/// 既にベースが付いているパスはそのまま返すので、何度適用しても結果は変わらない。
pub fn fix_path(base: &str, path: &str) -> String {
    let path = path.trim();
    if path.is_empty() {
        return PLACEHOLDER_HREF.to_string();
    }
    if is_passthrough(path) {
        return path.to_string();
    }

    let base = normalize_base(base);
    if base != "/" && (path.starts_with(&base) || path == base.trim_end_matches('/')) {
        return path.to_string();
    }

    let relative = path.strip_prefix("./").unwrap_or(path);
    let relative = relative.trim_start_matches('/');
    format!("{}{}", base, relative)
}

/// カードのリンク属性
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub href: String,
    /// 新しいタブで開く（外部リンク）
    pub new_context: bool,
    /// クリックを無効化する（hrefなし）
    pub disabled: bool,
}

impl LinkTarget {
    pub fn target_attr(&self) -> Option<&'static str> {
        self.new_context.then_some("_blank")
    }

    pub fn rel_attr(&self) -> Option<&'static str> {
        self.new_context.then_some(EXTERNAL_REL)
    }
}

/// hrefからリンク属性を決定
pub fn link_target(base: &str, href: Option<&str>) -> LinkTarget {
    match href.map(str::trim).filter(|h| !h.is_empty() && *h != PLACEHOLDER_HREF) {
        None => LinkTarget {
            href: PLACEHOLDER_HREF.to_string(),
            new_context: false,
            disabled: true,
        },
        Some(h) if is_external(h) => LinkTarget {
            href: h.to_string(),
            new_context: true,
            disabled: false,
        },
        Some(h) => LinkTarget {
            href: fix_path(base, h),
            new_context: false,
            disabled: false,
        },
    }
}

/// ナビゲーションのリンクが現在のページを指しているか
///
/// 末尾のスラッシュは無視して比較する。
pub fn is_current_page(current_path: &str, link_path: &str) -> bool {
    current_path.trim_end_matches('/') == link_path.trim_end_matches('/')
}

//! グリッド描画
//!
//! カードを入力順に連結する。コンテナへの差し込みはWASM側。

use crate::card::escape_html;

/// 各項目を描画して連結
pub fn render_grid<T, F>(items: &[T], render: F) -> String
where
    F: Fn(&T) -> String,
{
    items.iter().map(render).collect()
}

/// 先頭 `limit` 件（ホームのハイライト用）
pub fn highlights<T>(items: &[T], limit: usize) -> &[T] {
    &items[..items.len().min(limit)]
}

/// グリッドに表示する案内メッセージ
pub fn notice_html(message: &str) -> String {
    format!("<p class=\"grid-notice\">{}</p>", escape_html(message))
}

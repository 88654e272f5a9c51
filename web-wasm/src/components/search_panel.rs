//! 検索結果コンポーネント
//!
//! 入力欄はページ側にあるので、inputイベントでクエリのsignalを更新する。

use crate::dom;
use folio_common::grid::render_grid;
use folio_common::{search, search_card_html, CorpusEntry, SearchOutcome};
use leptos::prelude::*;
use web_sys::HtmlInputElement;

/// 結果グリッドのHTML（Promptのときは空）
pub fn results_html(outcome: &SearchOutcome<'_>, base: &str) -> String {
    match outcome {
        SearchOutcome::Prompt => String::new(),
        SearchOutcome::Results { shown, .. } => render_grid(shown, |e| search_card_html(e, base)),
    }
}

#[component]
pub fn SearchPanel(
    corpus: Vec<CorpusEntry>,
    input: HtmlInputElement,
    base: String,
    limit: usize,
) -> impl IntoView {
    let (query, set_query) = signal(input.value());

    dom::on(&input, "input", {
        let input = input.clone();
        move |_| set_query.set(input.value())
    });

    let corpus = StoredValue::new(corpus);
    let results = Memo::new(move |_| {
        let q = query.get();
        corpus.with_value(|c| {
            let outcome = search(c, &q, limit);
            (outcome.status_line(), results_html(&outcome, &base))
        })
    });

    view! {
        <p class="search-status" aria-live="polite">
            {move || results.with(|(status, _)| status.clone())}
        </p>
        <div class="grid search-grid" inner_html=move || results.with(|(_, html)| html.clone())></div>
    }
}

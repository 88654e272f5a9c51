//! ページ初期化
//!
//! 読み込み → 分類 → グリッド描画 → タブ・検索接続 → reveal監視

use crate::api::data;
use crate::components::search_panel::SearchPanel;
use crate::dom;
use crate::ui::{self, reveal::Revealer, tabs};
use folio_common::grid::{highlights, notice_html, render_grid};
use folio_common::tabs::ALL_KEY;
use folio_common::{
    build_corpus, card_html, detect_base, filter_by_tag, partition, tag_keys, Category, Dataset,
    Record, SiteConfig, TabState,
};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlInputElement};

/// 読み込み失敗時にメッセージを出すコンテナ（先に見つかったもの）
const PRIMARY_GRIDS: &[&str] = &["workGrid", "workGridAll", "postGridAll", "snsGridAll"];

const LOAD_FAILURE_MESSAGE: &str = "Couldn't load the portfolio right now. Please try again later.";

/// 読み込んだデータと描画設定
struct Page {
    base: String,
    config: SiteConfig,
    dataset: Dataset,
}

impl Page {
    fn grid(&self, id: &str, records: &[Record]) {
        dom::mount_grid(id, &render_grid(records, |r| card_html(r, &self.base)));
    }

    fn mount(&self, revealer: &Revealer) {
        self.mount_home();
        self.mount_work(revealer);
        self.grid("postGridAll", &self.dataset.posts);
        self.grid("snsGridAll", &self.dataset.sns);
        self.mount_search();
    }

    fn mount_home(&self) {
        let limit = self.config.home_limit;
        self.grid("workGrid", highlights(&self.dataset.works, limit));
        self.grid("postGrid", highlights(&self.dataset.posts, limit));
        self.grid("snsGrid", highlights(&self.dataset.sns, limit));
    }

    fn mount_work(&self, revealer: &Revealer) {
        let parts = partition(&self.dataset.works, &self.config.classifier);
        for category in Category::ALL {
            self.grid(&format!("workGrid-{}", category), parts.get(category));
        }

        if let Some(bar) = dom::by_id("workTabs") {
            let state = TabState::new(
                Category::ALL.iter().map(|c| c.as_str()),
                &self.config.default_tab,
            );
            tabs::wire(bar, state, tabs::category_panels(), |_| {});
        }

        self.mount_tag_filter(revealer);
    }

    /// タグでの絞り込み（"All" + 出現順のタグ）
    fn mount_tag_filter(&self, revealer: &Revealer) {
        let (Some(bar), Some(_)) = (dom::by_id("filters"), dom::by_id("workGridAll")) else {
            return;
        };

        let keys = tag_keys(&self.dataset.works);
        bar.set_inner_html(&tabs::buttons_html(&keys));

        let works = self.dataset.works.clone();
        let base = self.base.clone();
        let revealer = revealer.clone();
        tabs::wire(bar, TabState::new(keys, ALL_KEY), Vec::new(), move |key| {
            if let Some(grid) = dom::by_id("workGridAll") {
                revealer.release_in(&grid);
            }
            let filtered = filter_by_tag(&works, key);
            dom::mount_grid(
                "workGridAll",
                &render_grid(&filtered, |r| card_html(r, &base)),
            );
            revealer.observe_all();
        });
    }

    fn mount_search(&self) {
        let container = dom::by_id("searchResults").and_then(|e| e.dyn_into::<HtmlElement>().ok());
        let input = dom::by_id("searchInput").and_then(|e| e.dyn_into::<HtmlInputElement>().ok());
        let (Some(container), Some(input)) = (container, input) else {
            log::debug!("search overlay not on this page");
            return;
        };

        let corpus = build_corpus(&self.dataset);
        let base = self.base.clone();
        let limit = self.config.search_limit;

        container.set_inner_html("");
        leptos::mount::mount_to(container, move || {
            view! { <SearchPanel corpus=corpus input=input base=base limit=limit /> }
        })
        .forget();
    }
}

fn show_load_failure() {
    let notice = notice_html(LOAD_FAILURE_MESSAGE);
    if let Some(id) = PRIMARY_GRIDS.iter().find(|id| dom::by_id(id).is_some()) {
        dom::mount_grid(id, &notice);
    }
}

/// エントリポイント
pub async fn run() {
    ui::wire_static();

    let pathname = dom::pathname();
    let config = data::load_config(&detect_base(&pathname)).await;
    let base = config.base_for(&pathname);
    let revealer = Revealer::new(&config);

    match data::load_all(&base, &config).await {
        Ok(loaded) => {
            for degraded in &loaded.degraded {
                log::warn!(
                    "{} unavailable, showing it as empty: {}",
                    degraded.source,
                    degraded.error
                );
            }
            log::info!(
                "loaded {} works, {} posts, {} links (base {})",
                loaded.dataset.works.len(),
                loaded.dataset.posts.len(),
                loaded.dataset.sns.len(),
                base
            );

            let page = Page {
                base,
                config,
                dataset: loaded.dataset,
            };
            page.mount(&revealer);
        }
        Err(error) => {
            log::error!("failed to load portfolio data: {}", error);
            show_load_failure();
        }
    }

    // 静的な .reveal とスキルバーは読み込み失敗時も監視する
    revealer.observe_all();
}

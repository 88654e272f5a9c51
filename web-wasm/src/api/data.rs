//! データファイルの取得
//!
//! works.json / posts.json / sns.json を同時に取得し、
//! 設定の LoadPolicy に従って1つの Dataset にまとめる。

use folio_common::config::CONFIG_FILE;
use folio_common::load::{parse_records, resource_url};
use folio_common::{Dataset, Error, Loaded, Record, Result, SiteConfig, Source};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response};

/// 設定ファイルの置き場所（data_dir は設定で変わるので既定値で固定）
const CONFIG_DIR: &str = "data";

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn network_error(url: &str, value: JsValue) -> Error {
    Error::Network {
        url: url.to_string(),
        message: js_message(&value),
    }
}

/// キャッシュ無効でGETし、本文を文字列で返す
pub async fn fetch_text(url: &str) -> Result<String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_cache(RequestCache::NoStore);

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|e| network_error(url, e))?;

    let window = web_sys::window().ok_or_else(|| Error::Network {
        url: url.to_string(),
        message: "window is not available".to_string(),
    })?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| network_error(url, e))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| network_error(url, e))?;

    if !resp.ok() {
        return Err(Error::Load {
            url: url.to_string(),
            status: resp.status(),
            status_text: resp.status_text(),
        });
    }

    let text = JsFuture::from(resp.text().map_err(|e| network_error(url, e))?)
        .await
        .map_err(|e| network_error(url, e))?;

    text.as_string().ok_or_else(|| Error::Network {
        url: url.to_string(),
        message: "response body is not text".to_string(),
    })
}

/// レコード配列を取得
pub async fn fetch_records(url: &str) -> Result<Vec<Record>> {
    let body = fetch_text(url).await?;
    parse_records(url, &body)
}

/// site.json を読み込む（無い・壊れている場合は既定値）
pub async fn load_config(base: &str) -> SiteConfig {
    let url = resource_url(base, CONFIG_DIR, CONFIG_FILE);

    let result = match fetch_text(&url).await {
        Ok(body) => SiteConfig::from_json(&body),
        Err(error) => Err(error),
    };

    match result {
        Ok(config) => {
            log::info!("loaded {}", url);
            config
        }
        Err(error) if error.status() == Some(404) => {
            log::debug!("{} not found, using defaults", url);
            SiteConfig::default()
        }
        Err(error) => {
            log::warn!("ignoring {}: {}", url, error);
            SiteConfig::default()
        }
    }
}

/// 全データソースを並行取得
pub async fn load_all(base: &str, config: &SiteConfig) -> Result<Loaded> {
    let works_url = Source::Works.url(base, &config.data_dir);
    let posts_url = Source::Posts.url(base, &config.data_dir);
    let sns_url = Source::Sns.url(base, &config.data_dir);

    let (works, posts, sns) = futures::join!(
        fetch_records(&works_url),
        fetch_records(&posts_url),
        fetch_records(&sns_url),
    );

    Dataset::assemble(
        vec![
            (Source::Works, works),
            (Source::Posts, posts),
            (Source::Sns, sns),
        ],
        &config.load_policy,
    )
}

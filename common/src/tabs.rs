//! タブ/セグメントの状態
//!
//! 既知のキー集合のうち常に1つだけがアクティブ。

use crate::types::Record;

/// タグフィルタの「すべて」キー
pub const ALL_KEY: &str = "All";

/// タブ状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabState {
    keys: Vec<String>,
    active: Option<usize>,
}

impl TabState {
    /// `default` が未知のキーなら先頭をアクティブにする
    pub fn new<I, S>(keys: I, default: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for key in keys {
            let key = key.into();
            if !unique.contains(&key) {
                unique.push(key);
            }
        }
        let active = unique
            .iter()
            .position(|k| k == default)
            .or(if unique.is_empty() { None } else { Some(0) });

        Self { keys: unique, active }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn active(&self) -> Option<&str> {
        self.active.map(|i| self.keys[i].as_str())
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active() == Some(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// キーを選択（未知のキーは無視して false）
    pub fn select(&mut self, key: &str) -> bool {
        match self.keys.iter().position(|k| k == key) {
            Some(i) => {
                self.active = Some(i);
                true
            }
            None => false,
        }
    }
}

/// タグフィルタのキー（"All" + 出現順のユニークなタグ）
pub fn tag_keys(records: &[Record]) -> Vec<String> {
    let mut keys = vec![ALL_KEY.to_string()];
    for tag in records.iter().flat_map(|r| r.tags.iter()) {
        if !keys.contains(tag) {
            keys.push(tag.clone());
        }
    }
    keys
}

/// タグで絞り込み（"All" は全件）
pub fn filter_by_tag<'a>(records: &'a [Record], key: &str) -> Vec<&'a Record> {
    if key == ALL_KEY {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|r| r.tags.iter().any(|t| t == key))
        .collect()
}

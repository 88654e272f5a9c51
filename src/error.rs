use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("データフォルダが見つかりません: {0}")]
    DataDirNotFound(String),

    #[error("設定ファイルが見つかりません: {0}")]
    ConfigNotFound(String),

    #[error("表示件数は1以上を指定してください")]
    InvalidLimit,

    #[error(transparent)]
    Data(#[from] folio_common::Error),

    #[error("JSON出力エラー: {0}")]
    JsonOutput(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FolioError>;

//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// HTTPレスポンスが2xx以外
    #[error("Failed to load {url}: {status} {status_text}")]
    Load {
        url: String,
        status: u16,
        status_text: String,
    },

    /// レスポンス本文がJSONとして不正
    #[error("Invalid JSON in {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// fetch自体が失敗（オフライン、CORSなど）
    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// HTTPステータス（Loadエラーのみ）
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Load { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_load() {
        let error = Error::Load {
            url: "/data/works.json".to_string(),
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Failed to load /data/works.json: 404 Not Found"
        );
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_error_display_parse() {
        let json_error = serde_json::from_str::<serde_json::Value>("[{").unwrap_err();
        let error = Error::Parse {
            url: "/data/sns.json".to_string(),
            source: json_error,
        };
        let display = format!("{}", error);
        assert!(display.starts_with("Invalid JSON in /data/sns.json"));
        assert!(std::error::Error::source(&error).is_some());
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_error_display_config() {
        let error = Error::Config("base_path must not be empty".to_string());
        assert_eq!(format!("{}", error), "Config error: base_path must not be empty");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }
}

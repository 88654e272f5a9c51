use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "ポートフォリオサイトのデータ確認ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 設定ファイル（デフォルト: データフォルダ/site.json）
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// works/posts/sns を読み込んで問題を報告
    Check {
        /// データフォルダのパス
        #[arg(required = true)]
        dir: PathBuf,
    },

    /// 作品をカテゴリ（design/web/content）に振り分けて表示
    Classify {
        /// データフォルダのパス
        #[arg(required = true)]
        dir: PathBuf,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 全データを横断検索
    Search {
        /// データフォルダのパス
        #[arg(required = true)]
        dir: PathBuf,

        /// 検索語（部分一致、大文字小文字無視）
        #[arg(required = true)]
        query: String,

        /// 表示件数の上限（デフォルト: 設定の search_limit）
        #[arg(short, long)]
        limit: Option<usize>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },
}

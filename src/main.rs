use clap::Parser;
use folio_common::{build_corpus, partition, search, Category, SearchOutcome};
use folio_rust::{cli, data, error, report};
use cli::{Cli, Commands};
use error::{FolioError, Result};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { dir } => {
            println!("📂 folio - データ確認\n");

            println!("[1/3] 設定を読み込み中...");
            let config = data::load_config(&dir, cli.config.as_deref())?;
            if cli.verbose {
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            println!("✔ 設定読み込み完了\n");

            println!("[2/3] データを読み込み中...");
            let loaded = data::load_dir(&dir, &config)?;
            for degraded in &loaded.degraded {
                println!("⚠ {}: 空として扱います（{}）", degraded.source.file_name(), degraded.error);
            }
            println!(
                "✔ works: {}件 / posts: {}件 / sns: {}件\n",
                loaded.dataset.works.len(),
                loaded.dataset.posts.len(),
                loaded.dataset.sns.len()
            );

            println!("[3/3] 内容を確認中...");
            let findings = report::check_dataset(&loaded.dataset);
            for finding in &findings {
                println!(
                    "  - {}[{}] {}: {}",
                    finding.source.file_name(),
                    finding.index,
                    finding.title,
                    finding.issue.describe()
                );
            }
            println!("✔ 注意点: {}件", findings.len());

            println!("\n✅ 確認完了");
        }

        Commands::Classify { dir, json } => {
            let config = data::load_config(&dir, cli.config.as_deref())?;
            let loaded = data::load_dir(&dir, &config)?;
            let rows = report::classify_rows(&loaded.dataset.works, &config.classifier);

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
                return Ok(());
            }

            println!("🗂 folio - 作品分類\n");
            let parts = partition(&loaded.dataset.works, &config.classifier);
            for category in Category::ALL {
                println!("[{}] {}件", category, parts.get(category).len());
                if cli.verbose {
                    for row in rows.iter().filter(|r| r.category == category) {
                        println!("  - {}", row.title);
                    }
                }
            }

            println!("\n✅ 分類完了（合計{}件）", parts.len());
        }

        Commands::Search { dir, query, limit, json } => {
            let config = data::load_config(&dir, cli.config.as_deref())?;
            let limit = limit.unwrap_or(config.search_limit);
            if limit == 0 {
                return Err(FolioError::InvalidLimit);
            }

            let loaded = data::load_dir(&dir, &config)?;
            let corpus = build_corpus(&loaded.dataset);
            let outcome = search(&corpus, &query, limit);

            let shown = match &outcome {
                SearchOutcome::Prompt => Vec::new(),
                SearchOutcome::Results { shown, .. } => report::search_rows(shown),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&shown)?);
                return Ok(());
            }

            println!("🔍 {}", outcome.status_line());
            for row in &shown {
                match &row.href {
                    Some(href) if cli.verbose => println!("  [{}] {} ({})", row.group, row.title, href),
                    _ => println!("  [{}] {}", row.group, row.title),
                }
            }
        }
    }

    Ok(())
}

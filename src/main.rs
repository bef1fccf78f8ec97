use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use serde_json::json;

use explorer_sort_order::app::viewer::load_folder_images;
use explorer_sort_order::platform::DefaultQuery;
use explorer_sort_order::service::column_translator::supported_identifiers;
use explorer_sort_order::service::settings::ViewerSettings;
use explorer_sort_order::service::SortOrderResolver;

/// 開いている Explorer ウィンドウのソート順を調べる
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// 画像ファイルまたはフォルダのパス
    #[arg(required_unless_present = "list_columns")]
    path: Option<String>,

    /// 読み込み順に並べた画像一覧も出力する
    #[arg(long)]
    list: bool,

    /// ビューア設定 (JSON)。`--list` と併用する
    #[arg(long, requires = "list")]
    settings: Option<PathBuf>,

    /// 対応している Explorer の列名を出力する
    #[arg(long)]
    list_columns: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    if args.list_columns {
        let mut columns: Vec<_> = supported_identifiers().collect();
        columns.sort_by_key(|(identifier, _)| *identifier);
        let columns: serde_json::Map<_, _> = columns
            .into_iter()
            .map(|(identifier, key)| (identifier.to_string(), json!(key)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&columns)?);
        return Ok(());
    }

    let Some(path) = args.path else {
        return Ok(());
    };
    let resolver = Arc::new(SortOrderResolver::<DefaultQuery>::default());

    if !args.list {
        let resolved = resolver.resolve_async(path).await;
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    let settings = match &args.settings {
        Some(file) => ViewerSettings::load(file)?,
        None => ViewerSettings::default(),
    };
    let images = tokio::task::spawn_blocking(move || {
        load_folder_images(&path, &settings, &*resolver)
    })
    .await??;
    println!("{}", serde_json::to_string_pretty(&images)?);
    Ok(())
}

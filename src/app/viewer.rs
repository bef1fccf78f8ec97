use anyhow::Result;
use log::info;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::platform::SortStateQuery;
use crate::service::directory_comparer::{list_images, sort_files};
use crate::service::explorer_types::{SortConfig, SortDirection};
use crate::service::settings::ViewerSettings;
use crate::service::sort_order_resolver::SortOrderResolver;
use crate::utils::file_utils::get_parent_dir;

/// 読み込み順に並べたフォルダ内の画像
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderImages {
    pub files: Vec<PathBuf>,
    /// 開いたファイルの位置 (フォルダを開いた場合は 0)
    pub index: usize,
    pub sort: SortConfig,
}

/// 実際に使う読み込み順を決める
///
/// Explorer の順序が使えない場合は設定値に戻す。方向だけ分かった場合は
/// 設定の読み込み順にその方向を適用する。
pub fn effective_sort_config<Q: SortStateQuery>(
    path: &str,
    settings: &ViewerSettings,
    resolver: &SortOrderResolver<Q>,
) -> SortConfig {
    let fallback = settings.sort_config();
    if !settings.use_explorer_sort_order {
        return fallback;
    }

    let resolved = resolver.resolve(path);
    if let Some(config) = resolved.sort_config() {
        info!("using explorer sort order {:?} for {}", config, path);
        return config;
    }
    match resolved.is_ascending {
        Some(is_ascending) => SortConfig {
            key: fallback.key,
            direction: SortDirection::from_ascending(is_ascending),
        },
        None => fallback,
    }
}

/// ファイル (またはフォルダ) を開いたときの画像一覧を作る
pub fn load_folder_images<Q: SortStateQuery>(
    path: &str,
    settings: &ViewerSettings,
    resolver: &SortOrderResolver<Q>,
) -> Result<FolderImages> {
    let target = Path::new(path);
    let folder = if target.is_dir() {
        path.to_string()
    } else {
        get_parent_dir(path)
    };

    let sort = effective_sort_config(path, settings, resolver);
    let mut files = list_images(Path::new(&folder))?;
    sort_files(&mut files, &sort);

    let index = files.iter().position(|p| p == target).unwrap_or(0);
    Ok(FolderImages { files, index, sort })
}

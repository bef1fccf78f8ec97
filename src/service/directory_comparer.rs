//! フォルダ内の画像を読み込み順に並べる

use anyhow::{Context, Result};
use log::debug;
use std::cmp::Ordering;
use std::fs::{read_dir, Metadata};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::explorer_types::{OrderingKey, SortConfig, SortDirection};
use crate::utils::exif_utils::{get_date_taken, get_rating, ExifTimestamp};
use crate::utils::file_utils::{get_extension, get_file_name, is_exif_file, is_image_file};

/// フォルダ直下の画像ファイルを列挙する (サブフォルダは含めない)
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        read_dir(dir).with_context(|| format!("failed to open folder: {}", dir.display()))?;
    Ok(entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_image_file(p))
        .collect())
}

/// ソートキー。欠落値 (None) は昇順で先頭に来る
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortValue {
    Name(String),
    Text(String),
    Number(Option<u64>),
    Time(Option<SystemTime>),
    Taken(Option<ExifTimestamp>),
}

/// 並び替え済みのファイルと、比較に使う名前・キー
struct SortEntry {
    path: PathBuf,
    name: String,
    value: SortValue,
}

/// 読み込み順に従ってファイルを並べ替える
///
/// 同じキーのファイルは方向に関係なく名前の自然順で並ぶ。
pub fn sort_files(files: &mut Vec<PathBuf>, config: &SortConfig) {
    let mut entries: Vec<SortEntry> = files
        .drain(..)
        .map(|path| {
            let value = sort_value(&path, config.key);
            SortEntry {
                name: get_file_name(&path).to_lowercase(),
                path,
                value,
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        let primary = match config.direction {
            SortDirection::Asc => compare_values(&a.value, &b.value),
            SortDirection::Desc => compare_values(&b.value, &a.value),
        };
        primary.then_with(|| compare_names(&a.name, &b.name))
    });

    files.extend(entries.into_iter().map(|e| e.path));
}

fn compare_names(a: &str, b: &str) -> Ordering {
    natord::compare(a, b)
}

fn compare_values(a: &SortValue, b: &SortValue) -> Ordering {
    match (a, b) {
        (SortValue::Name(a), SortValue::Name(b)) => compare_names(a, b),
        _ => a.cmp(b),
    }
}

fn sort_value(path: &Path, key: OrderingKey) -> SortValue {
    match key {
        OrderingKey::Name => SortValue::Name(get_file_name(path).to_lowercase()),
        OrderingKey::Extension => SortValue::Text(get_extension(path)),
        OrderingKey::FileSize => SortValue::Number(metadata(path).map(|m| m.len())),
        OrderingKey::DateCreated => {
            SortValue::Time(metadata(path).and_then(|m| m.created().ok()))
        }
        OrderingKey::DateAccessed => {
            SortValue::Time(metadata(path).and_then(|m| m.accessed().ok()))
        }
        OrderingKey::DateModified => {
            SortValue::Time(metadata(path).and_then(|m| m.modified().ok()))
        }
        OrderingKey::ExifDateTaken => SortValue::Taken(exif_value(path, get_date_taken)),
        OrderingKey::ExifRating => {
            SortValue::Number(Some(exif_value(path, get_rating).unwrap_or(0) as u64))
        }
    }
}

fn metadata(path: &Path) -> Option<Metadata> {
    path.metadata().ok()
}

fn exif_value<T>(path: &Path, read: fn(&Path) -> Result<Option<T>>) -> Option<T> {
    if !is_exif_file(path) {
        return None;
    }
    match read(path) {
        Ok(value) => value,
        Err(e) => {
            debug!("no exif in {}: {}", path.display(), e);
            None
        }
    }
}

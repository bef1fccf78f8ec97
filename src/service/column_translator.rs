//! Explorer の列名 (プロパティシステム名) を読み込み順に変換する

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::explorer_types::OrderingKey;

/// Explorer の列名 -> 読み込み順
///
/// 未対応の列はここに追加するだけでよい (リゾルバ側の変更は不要)。
static COLUMN_IDENTIFIER_MAP: Lazy<HashMap<&'static str, OrderingKey>> = Lazy::new(|| {
    HashMap::from([
        ("System.ItemTypeText", OrderingKey::Extension),
        ("System.FileExtension", OrderingKey::Extension),
        ("System.FileName", OrderingKey::Name),
        ("System.ItemNameDisplay", OrderingKey::Name),
        ("System.Size", OrderingKey::FileSize),
        ("System.DateCreated", OrderingKey::DateCreated),
        ("System.DateAccessed", OrderingKey::DateAccessed),
        ("System.DateModified", OrderingKey::DateModified),
        ("System.Photo.DateTaken", OrderingKey::ExifDateTaken),
        ("System.Rating", OrderingKey::ExifRating),
    ])
});

/// 列名を読み込み順に変換する。未対応の列 (空文字を含む) は None
pub fn translate(identifier: &str) -> Option<OrderingKey> {
    COLUMN_IDENTIFIER_MAP.get(identifier).copied()
}

/// 対応済みの列名一覧
pub fn supported_identifiers() -> impl Iterator<Item = (&'static str, OrderingKey)> {
    COLUMN_IDENTIFIER_MAP.iter().map(|(k, v)| (*k, *v))
}

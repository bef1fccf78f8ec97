use serde::{Deserialize, Serialize};

/// 画像の読み込み順
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum OrderingKey {
    #[default]
    Name,
    Extension,
    FileSize,
    DateCreated,
    DateAccessed,
    DateModified,
    ExifDateTaken,
    ExifRating,
}

/// ソート順序
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn from_ascending(is_ascending: bool) -> Self {
        if is_ascending {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    }
}

/// ソート設定
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SortConfig {
    pub key: OrderingKey,
    pub direction: SortDirection,
}

/// Explorer ウィンドウへの問い合わせ結果 (1 回の呼び出しごとに生成)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortQueryResult {
    pub column_identifier: String,
    pub is_ascending: bool,
    pub found: bool,
}

/// Explorer のソート順を解決した結果
///
/// `ordering_key` はウィンドウが見つかり、かつ列が対応済みの場合のみ設定される。
/// `is_ascending` はウィンドウが見つかった場合に設定され、列の対応有無とは無関係。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSortOrder {
    pub ordering_key: Option<OrderingKey>,
    pub is_ascending: Option<bool>,
}

impl ResolvedSortOrder {
    /// ウィンドウが見つからなかった場合の結果
    pub fn not_found() -> Self {
        Self::default()
    }

    /// 読み込み順まで解決できたかどうか
    pub fn is_resolved(&self) -> bool {
        self.ordering_key.is_some()
    }

    /// 解決できた場合のみ SortConfig に変換する
    pub fn sort_config(&self) -> Option<SortConfig> {
        let key = self.ordering_key?;
        let is_ascending = self.is_ascending.unwrap_or(true);
        Some(SortConfig {
            key,
            direction: SortDirection::from_ascending(is_ascending),
        })
    }
}

impl From<SortQueryResult> for ResolvedSortOrder {
    fn from(result: SortQueryResult) -> Self {
        if !result.found {
            return Self::not_found();
        }
        Self {
            ordering_key: super::column_translator::translate(&result.column_identifier),
            is_ascending: Some(result.is_ascending),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_from_query_result() {
        let result = SortQueryResult {
            column_identifier: "System.Size".to_string(),
            is_ascending: true,
            found: false,
        };
        assert_eq!(ResolvedSortOrder::from(result), ResolvedSortOrder::not_found());
    }

    #[test]
    fn test_sort_config_requires_ordering_key() {
        let direction_only = ResolvedSortOrder {
            ordering_key: None,
            is_ascending: Some(false),
        };
        assert!(!direction_only.is_resolved());
        assert_eq!(direction_only.sort_config(), None);

        let resolved = ResolvedSortOrder {
            ordering_key: Some(OrderingKey::DateModified),
            is_ascending: Some(false),
        };
        assert_eq!(
            resolved.sort_config(),
            Some(SortConfig {
                key: OrderingKey::DateModified,
                direction: SortDirection::Desc,
            })
        );
    }

    #[test]
    fn test_serialize_camel_case() {
        let resolved = ResolvedSortOrder {
            ordering_key: Some(OrderingKey::FileSize),
            is_ascending: Some(true),
        };
        let json = serde_json::to_value(resolved).unwrap();
        assert_eq!(json["orderingKey"], "FileSize");
        assert_eq!(json["isAscending"], true);

        let json = serde_json::to_value(ResolvedSortOrder::not_found()).unwrap();
        assert!(json["orderingKey"].is_null());
        assert!(json["isAscending"].is_null());
    }
}

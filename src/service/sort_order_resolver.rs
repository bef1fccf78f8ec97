//! 開いている Explorer ウィンドウのソート順を、ビューアの読み込み順に解決する
//!
//! 失敗は呼び出し側に返さない。ウィンドウが見つからない、列が未対応、
//! ネイティブ側の応答が壊れている、のいずれも結果の欠落として表現する。

use log::{debug, warn};
use std::panic::{catch_unwind, AssertUnwindSafe};

use super::explorer_types::{ResolvedSortOrder, SortQueryResult};
use crate::platform::{
    default_query, to_wide_null, ColumnBuffer, DefaultQuery, SortStateQuery, DIRECTION_UNSET,
    STATUS_FOUND,
};
use crate::utils::file_utils::get_parent_dir;

pub struct SortOrderResolver<Q: SortStateQuery> {
    query: Q,
}

impl<Q: SortStateQuery> SortOrderResolver<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }

    /// ファイルまたはフォルダのパスから Explorer のソート順を求める
    ///
    /// * ウィンドウなし: 両方 None
    /// * ウィンドウあり・列が未対応: `ordering_key` のみ None
    /// * ウィンドウあり・列が対応済み: 両方 Some
    pub fn resolve(&self, path: &str) -> ResolvedSortOrder {
        match self.query_sort_state(path) {
            Ok(result) => ResolvedSortOrder::from(result),
            Err(e) => {
                warn!("failed to read explorer sort order for {}: {}", path, e);
                ResolvedSortOrder::not_found()
            }
        }
    }

    fn query_sort_state(&self, path: &str) -> anyhow::Result<SortQueryResult> {
        let folder_path = get_parent_dir(path);
        let folder_wide = to_wide_null(&folder_path);

        let mut column = ColumnBuffer::new();
        let mut direction = DIRECTION_UNSET;

        let status = catch_unwind(AssertUnwindSafe(|| {
            self.query
                .query(&folder_wide, column.as_mut_slice(), &mut direction)
        }))
        .map_err(|_| anyhow::anyhow!("explorer query panicked"))?;

        if status != STATUS_FOUND {
            debug!("no explorer window for {} (status {})", folder_path, status);
            return Ok(SortQueryResult::default());
        }

        let column_identifier = column.read_column_name()?;
        debug!(
            "explorer window for {} sorted by {:?} (direction {})",
            folder_path, column_identifier, direction
        );

        // 失敗時の初期値 -1 と降順は区別しない (どちらも昇順ではない)
        Ok(SortQueryResult {
            column_identifier,
            is_ascending: direction > 0,
            found: true,
        })
    }
}

impl<Q: SortStateQuery + 'static> SortOrderResolver<Q> {
    /// ブロッキングな問い合わせを tokio のブロッキングプールで実行する
    pub async fn resolve_async(self: std::sync::Arc<Self>, path: String) -> ResolvedSortOrder {
        tokio::task::spawn_blocking(move || self.resolve(&path))
            .await
            .unwrap_or_default()
    }
}

impl Default for SortOrderResolver<DefaultQuery> {
    fn default() -> Self {
        Self::new(default_query())
    }
}

/// 実行中のプラットフォームの実装で解決する
pub fn resolve(path: &str) -> ResolvedSortOrder {
    SortOrderResolver::<DefaultQuery>::default().resolve(path)
}

/// [`resolve`] の非同期版
pub async fn resolve_async(path: String) -> ResolvedSortOrder {
    tokio::task::spawn_blocking(move || resolve(&path))
        .await
        .unwrap_or_default()
}

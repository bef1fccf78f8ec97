use super::{SortStateQuery, STATUS_NOT_FOUND};

/// Explorer が存在しないプラットフォーム用。常に「見つからない」を返す
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExplorerQuery;

impl SortStateQuery for NoExplorerQuery {
    fn query(
        &self,
        _folder_path: &[u16],
        _column_name: &mut [u16],
        _is_ascending: &mut i32,
    ) -> i32 {
        STATUS_NOT_FOUND
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{to_wide_null, ColumnBuffer, DIRECTION_UNSET};

    #[test]
    fn test_never_finds_a_window() {
        let mut buffer = ColumnBuffer::new();
        let mut direction = DIRECTION_UNSET;
        let status = NoExplorerQuery.query(
            &to_wide_null("/home/user/Pictures"),
            buffer.as_mut_slice(),
            &mut direction,
        );
        assert_eq!(status, STATUS_NOT_FOUND);
        assert_eq!(direction, DIRECTION_UNSET);
    }
}

//! 旧来のヘルパー DLL と同じシグネチャで問い合わせを C ABI に公開する
//!
//! `int GetExplorerSortOrder(const wchar_t* folderPath, wchar_t* columnName,
//!                           int columnNameMaxLen, int* isAscending)`

use std::panic::{catch_unwind, AssertUnwindSafe};

use super::shell_windows::ShellWindowsQuery;
use super::{SortStateQuery, STATUS_QUERY_FAILED};

/// # Safety
///
/// `folder_path` は NUL 終端の UTF-16、`column_name` は `column_name_max_len`
/// 要素の書き込み可能な領域、`is_ascending` は書き込み可能な int を指すこと。
#[allow(non_snake_case)]
#[no_mangle]
pub unsafe extern "C" fn GetExplorerSortOrder(
    folder_path: *const u16,
    column_name: *mut u16,
    column_name_max_len: i32,
    is_ascending: *mut i32,
) -> i32 {
    if folder_path.is_null() || column_name.is_null() || is_ascending.is_null() {
        return STATUS_QUERY_FAILED;
    }
    if column_name_max_len <= 0 {
        return STATUS_QUERY_FAILED;
    }

    let mut len = 0;
    while *folder_path.add(len) != 0 {
        len += 1;
    }
    let folder = std::slice::from_raw_parts(folder_path, len + 1);
    let column = std::slice::from_raw_parts_mut(column_name, column_name_max_len as usize);
    let direction = &mut *is_ascending;

    // パニックを C 側へ伝播させない
    catch_unwind(AssertUnwindSafe(|| {
        ShellWindowsQuery.query(folder, column, direction)
    }))
    .unwrap_or(STATUS_QUERY_FAILED)
}

//! Shell の ShellWindows コレクションから Explorer ウィンドウのソート状態を読む

use log::debug;
use windows::core::{Interface, Result as WinResult, VARIANT};
use windows::Win32::Foundation::MAX_PATH;
use windows::Win32::System::Com::{
    CoCreateInstance, CoInitializeEx, CoTaskMemFree, CoUninitialize, IServiceProvider,
    CLSCTX_ALL, COINIT_APARTMENTTHREADED,
};
use windows::Win32::UI::Shell::PropertiesSystem::PSGetNameFromPropertyKey;
use windows::Win32::UI::Shell::{
    IFolderView2, IPersistFolder2, IShellBrowser, IShellWindows, SHGetPathFromIDListW,
    ShellWindows, SID_STopLevelBrowser, SORTCOLUMN, SORT_ASCENDING,
};

use super::{
    from_wide_null, write_wide_truncated, SortStateQuery, STATUS_FOUND, STATUS_NOT_FOUND,
    STATUS_QUERY_FAILED,
};

/// 開いている Explorer ウィンドウを列挙して問い合わせる
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellWindowsQuery;

impl SortStateQuery for ShellWindowsQuery {
    fn query(&self, folder_path: &[u16], column_name: &mut [u16], is_ascending: &mut i32) -> i32 {
        let folder = from_wide_null(folder_path);
        let _com = ComGuard::init();
        match find_sort_column(&folder) {
            Ok(Some((name, ascending))) => {
                write_wide_truncated(&name, column_name);
                *is_ascending = if ascending { 1 } else { -1 };
                STATUS_FOUND
            }
            Ok(None) => STATUS_NOT_FOUND,
            Err(e) => {
                debug!("shell windows query failed for {}: {}", folder, e);
                STATUS_QUERY_FAILED
            }
        }
    }
}

/// 呼び出しスレッドの COM 初期化。自分で初期化した場合のみ解除する
struct ComGuard {
    initialized: bool,
}

impl ComGuard {
    fn init() -> Self {
        let hr = unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) };
        Self {
            initialized: hr.is_ok(),
        }
    }
}

impl Drop for ComGuard {
    fn drop(&mut self) {
        if self.initialized {
            unsafe { CoUninitialize() };
        }
    }
}

fn find_sort_column(folder: &str) -> WinResult<Option<(String, bool)>> {
    let target = normalize_for_compare(folder);
    let shell_windows: IShellWindows =
        unsafe { CoCreateInstance(&ShellWindows, None, CLSCTX_ALL)? };
    let count = unsafe { shell_windows.Count()? };

    for index in 0..count {
        // 列挙中に閉じられたウィンドウや Explorer 以外 (IE 等) は飛ばす
        let view = match folder_view_at(&shell_windows, index) {
            Ok(view) => view,
            Err(_) => continue,
        };
        let current = match current_folder(&view) {
            Ok(Some(path)) => path,
            _ => continue,
        };
        if normalize_for_compare(&current) != target {
            continue;
        }
        return first_sort_column(&view).map(Some);
    }
    Ok(None)
}

fn folder_view_at(shell_windows: &IShellWindows, index: i32) -> WinResult<IFolderView2> {
    let dispatch = unsafe { shell_windows.Item(&VARIANT::from(index))? };
    let provider: IServiceProvider = dispatch.cast()?;
    let browser: IShellBrowser = unsafe { provider.QueryService(&SID_STopLevelBrowser)? };
    let shell_view = unsafe { browser.QueryActiveShellView()? };
    shell_view.cast()
}

fn current_folder(view: &IFolderView2) -> WinResult<Option<String>> {
    let persist: IPersistFolder2 = unsafe { view.GetFolder()? };
    let pidl = unsafe { persist.GetCurFolder()? };
    let mut path = [0u16; MAX_PATH as usize];
    let ok = unsafe { SHGetPathFromIDListW(pidl, &mut path) };
    unsafe { CoTaskMemFree(Some(pidl as *const _)) };
    // 仮想フォルダ (PC、ごみ箱など) はファイルシステムパスを持たない
    if !ok.as_bool() {
        return Ok(None);
    }
    Ok(Some(from_wide_null(&path)))
}

fn first_sort_column(view: &IFolderView2) -> WinResult<(String, bool)> {
    let count = unsafe { view.GetSortColumnCount()? };
    if count <= 0 {
        return Ok((String::new(), true));
    }
    let mut columns = vec![SORTCOLUMN::default(); count as usize];
    unsafe { view.GetSortColumns(&mut columns)? };
    let column = &columns[0];

    let name = unsafe { PSGetNameFromPropertyKey(&column.propkey)? };
    let value = unsafe { name.to_string() }.unwrap_or_default();
    unsafe { CoTaskMemFree(Some(name.0 as *const _)) };

    Ok((value, column.direction == SORT_ASCENDING))
}

fn normalize_for_compare(path: &str) -> String {
    path.replace('/', "\\")
        .trim_end_matches('\\')
        .to_lowercase()
}

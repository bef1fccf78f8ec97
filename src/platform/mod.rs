//! Explorer ウィンドウのソート状態を問い合わせるネイティブ境界

#[cfg(windows)]
pub mod ffi;
#[cfg(windows)]
pub mod shell_windows;
#[cfg(not(windows))]
pub mod unsupported;

/// 列名バッファの容量 (UTF-16 単位)
///
/// 実在するプロパティ名はすべて収まる。これを超える列名は切り詰められる。
pub const COLUMN_NAME_CAPACITY: usize = 200;

/// 問い合わせ前の方向スロットの初期値 (未設定)
pub const DIRECTION_UNSET: i32 = -1;

/// 一致するウィンドウが見つかった
pub const STATUS_FOUND: i32 = 0;
/// 一致するウィンドウがない
pub const STATUS_NOT_FOUND: i32 = 1;
/// Shell への問い合わせ自体が失敗した
pub const STATUS_QUERY_FAILED: i32 = 2;

/// 「このフォルダを開いている Explorer ウィンドウのソート列と方向」を返す機能
///
/// ネイティブ呼び出しの形をそのまま表す:
/// * `folder_path` - NUL 終端の UTF-16 パス
/// * `column_name` - 呼び出し側が確保した列名バッファ (NUL 終端で書き込まれる)
/// * `is_ascending` - 方向スロット。昇順なら 1
///
/// 戻り値は `STATUS_FOUND` (0) なら成功、それ以外は見つからない/失敗。
pub trait SortStateQuery: Send + Sync {
    fn query(&self, folder_path: &[u16], column_name: &mut [u16], is_ascending: &mut i32) -> i32;
}

impl<F> SortStateQuery for F
where
    F: Fn(&[u16], &mut [u16], &mut i32) -> i32 + Send + Sync,
{
    fn query(&self, folder_path: &[u16], column_name: &mut [u16], is_ascending: &mut i32) -> i32 {
        self(folder_path, column_name, is_ascending)
    }
}

/// 実行中のプラットフォームの問い合わせ実装
#[cfg(windows)]
pub type DefaultQuery = shell_windows::ShellWindowsQuery;
#[cfg(not(windows))]
pub type DefaultQuery = unsupported::NoExplorerQuery;

pub fn default_query() -> DefaultQuery {
    DefaultQuery::default()
}

/// 1 回の問い合わせで使い捨てる固定長の列名バッファ
pub struct ColumnBuffer {
    buf: [u16; COLUMN_NAME_CAPACITY],
}

impl ColumnBuffer {
    pub fn new() -> Self {
        Self {
            buf: [0; COLUMN_NAME_CAPACITY],
        }
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn as_mut_slice(&mut self) -> &mut [u16] {
        &mut self.buf
    }

    /// 最初の NUL まで (NUL がなければ容量いっぱい) を文字列に変換する
    pub fn read_column_name(&self) -> anyhow::Result<String> {
        let len = self
            .buf
            .iter()
            .position(|c| *c == 0)
            .unwrap_or(self.buf.len());
        String::from_utf16(&self.buf[..len])
            .map_err(|e| anyhow::anyhow!("malformed column name: {}", e))
    }
}

impl Default for ColumnBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// 文字列を NUL 終端の UTF-16 に変換する
pub fn to_wide_null(value: &str) -> Vec<u16> {
    value.encode_utf16().chain(std::iter::once(0)).collect()
}

/// NUL 終端の UTF-16 を文字列に戻す (不正なサロゲートは置換)
pub fn from_wide_null(value: &[u16]) -> String {
    let len = value.iter().position(|c| *c == 0).unwrap_or(value.len());
    String::from_utf16_lossy(&value[..len])
}

/// 文字列を NUL 終端を保証しつつバッファへ書き込む。収まらない分は切り詰める
pub fn write_wide_truncated(value: &str, buf: &mut [u16]) {
    if buf.is_empty() {
        return;
    }
    let max = buf.len() - 1;
    let mut written = 0;
    for (slot, c) in buf.iter_mut().zip(value.encode_utf16().take(max)) {
        *slot = c;
        written += 1;
    }
    buf[written] = 0;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(buffer: &mut ColumnBuffer, value: &str) {
        write_wide_truncated(value, buffer.as_mut_slice());
    }

    #[test]
    fn test_column_buffer_reads_until_nul() {
        let mut buffer = ColumnBuffer::new();
        assert_eq!(buffer.capacity(), COLUMN_NAME_CAPACITY);
        assert_eq!(buffer.read_column_name().unwrap(), "");

        fill(&mut buffer, "System.DateModified");
        fill(&mut buffer, "System.Size");
        // 前回の書き込みの残りは NUL の後ろにあるので読まれない
        assert_eq!(buffer.read_column_name().unwrap(), "System.Size");
    }

    #[test]
    fn test_column_buffer_without_nul_uses_full_capacity() {
        let mut buffer = ColumnBuffer::new();
        for slot in buffer.as_mut_slice() {
            *slot = 'a' as u16;
        }
        let value = buffer.read_column_name().unwrap();
        assert_eq!(value.len(), COLUMN_NAME_CAPACITY);
    }

    #[test]
    fn test_column_buffer_rejects_unpaired_surrogate() {
        let mut buffer = ColumnBuffer::new();
        buffer.as_mut_slice()[0] = 0xD800;
        assert!(buffer.read_column_name().is_err());
    }

    #[test]
    fn test_write_wide_truncated() {
        let mut small = [0xFFFFu16; 4];
        write_wide_truncated("System.Size", &mut small);
        assert_eq!(from_wide_null(&small), "Sys");
        assert_eq!(small[3], 0);

        let mut empty: [u16; 0] = [];
        write_wide_truncated("System.Size", &mut empty);
    }

    #[test]
    fn test_wide_round_trip() {
        let wide = to_wide_null("C:\\Photos");
        assert_eq!(wide.last(), Some(&0));
        assert_eq!(from_wide_null(&wide), "C:\\Photos");
    }
}

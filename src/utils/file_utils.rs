use std::path::{is_separator, Path};

/// 問い合わせに使うフォルダを求める
///
/// 末尾が区切り文字のパス (例: `C:\Photos\`) はフォルダそのものを指すとみなし、
/// 区切り文字を除いて返す。ドライブのルート (例: `D:\`) のように親を持たない
/// パスは、そのまま返す。
pub(crate) fn get_parent_dir(path: &str) -> String {
    if path.ends_with(is_separator) {
        let trimmed = path.trim_end_matches(is_separator);
        if trimmed.is_empty() || Path::new(path).parent().is_none() {
            return path.to_string();
        }
        return trimmed.to_string();
    }
    match Path::new(path).parent().and_then(|p| p.to_str()) {
        Some(parent) if !parent.is_empty() => parent.to_string(),
        _ => path.to_string(),
    }
}

pub(crate) fn get_file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_str()
        .unwrap_or_default()
        .to_string()
}

pub(crate) fn get_extension(path: &Path) -> String {
    path.extension()
        .unwrap_or_default()
        .to_str()
        .unwrap_or_default()
        .to_lowercase()
}

pub(crate) fn is_image_file(path: &Path) -> bool {
    let ext = get_extension(path);
    IMAGE_EXTENSIONS.iter().any(|v| *v == ext)
}

/// EXIF を持ちうる形式
pub(crate) fn is_exif_file(path: &Path) -> bool {
    let ext = get_extension(path);
    EXIF_EXTENSIONS.iter().any(|v| *v == ext)
}

const IMAGE_EXTENSIONS: [&str; 14] = [
    "jpg", "jpeg", "jpe", "jfif", "pjpeg", "pjp", "png", "gif", "tif", "tiff", "bmp", "dib",
    "webp", "heic",
];

const EXIF_EXTENSIONS: [&str; 10] = [
    "jpg", "jpeg", "jpe", "jfif", "pjpeg", "pjp", "tif", "tiff", "webp", "heic",
];

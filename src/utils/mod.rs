pub mod exif_utils;
pub mod file_utils;

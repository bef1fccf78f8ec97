//! EXIF から撮影日時・レーティングを読み出す

use anyhow::Result;
use exif::{Context, Exif, In, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Windows の「評価」(Microsoft 拡張タグ 0x4746、値は 0〜5)
const TAG_RATING: Tag = Tag(Context::Tiff, 0x4746);

/// 比較用の撮影日時 (年, 月, 日, 時, 分, 秒)
pub type ExifTimestamp = (u16, u8, u8, u8, u8, u8);

fn read_exif(path: &Path) -> Result<Exif> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    Ok(exif::Reader::new().read_from_container(&mut reader)?)
}

/// 撮影日時を取得する。DateTimeOriginal がなければ DateTime を使う
pub fn get_date_taken(path: &Path) -> Result<Option<ExifTimestamp>> {
    let exif = read_exif(path)?;
    let field = exif
        .get_field(Tag::DateTimeOriginal, In::PRIMARY)
        .or_else(|| exif.get_field(Tag::DateTime, In::PRIMARY));
    let Some(field) = field else {
        return Ok(None);
    };
    match &field.value {
        Value::Ascii(values) if !values.is_empty() => {
            let dt = exif::DateTime::from_ascii(&values[0])?;
            Ok(Some((dt.year, dt.month, dt.day, dt.hour, dt.minute, dt.second)))
        }
        _ => Ok(None),
    }
}

/// レーティングを取得する
pub fn get_rating(path: &Path) -> Result<Option<u32>> {
    let exif = read_exif(path)?;
    Ok(exif
        .get_field(TAG_RATING, In::PRIMARY)
        .and_then(|f| f.value.get_uint(0)))
}

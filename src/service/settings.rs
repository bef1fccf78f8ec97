//! ビューアの読み込み順に関する設定

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::explorer_types::{OrderingKey, SortConfig, SortDirection};

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ViewerSettings {
    /// Explorer で開いているフォルダのソート順に合わせる
    #[serde(default = "default_true")]
    pub use_explorer_sort_order: bool,
    /// Explorer の順序が使えない場合の読み込み順
    #[serde(default)]
    pub image_load_order: OrderingKey,
    #[serde(default = "default_true")]
    pub image_load_order_ascending: bool,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            use_explorer_sort_order: true,
            image_load_order: OrderingKey::default(),
            image_load_order_ascending: true,
        }
    }
}

impl ViewerSettings {
    /// JSON ファイルから読み込む。ファイルがなければ既定値
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings: {}", path.display()))?;
        let settings = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse settings: {}", path.display()))?;
        Ok(settings)
    }

    /// 設定上の読み込み順
    pub fn sort_config(&self) -> SortConfig {
        SortConfig {
            key: self.image_load_order,
            direction: SortDirection::from_ascending(self.image_load_order_ascending),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ViewerSettings::default();
        assert!(settings.use_explorer_sort_order);
        assert_eq!(
            settings.sort_config(),
            SortConfig {
                key: OrderingKey::Name,
                direction: SortDirection::Asc,
            }
        );
    }

    #[test]
    fn test_parse_partial_json() {
        let settings: ViewerSettings =
            serde_json::from_str(r#"{ "imageLoadOrder": "DateModified" }"#).unwrap();
        assert!(settings.use_explorer_sort_order);
        assert_eq!(settings.image_load_order, OrderingKey::DateModified);
        assert!(settings.image_load_order_ascending);
    }

    #[test]
    fn test_load() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        assert_eq!(ViewerSettings::load(&path).unwrap(), ViewerSettings::default());

        std::fs::write(
            &path,
            r#"{
                "useExplorerSortOrder": false,
                "imageLoadOrder": "FileSize",
                "imageLoadOrderAscending": false
            }"#,
        )
        .unwrap();
        let settings = ViewerSettings::load(&path).unwrap();
        assert!(!settings.use_explorer_sort_order);
        assert_eq!(
            settings.sort_config(),
            SortConfig {
                key: OrderingKey::FileSize,
                direction: SortDirection::Desc,
            }
        );

        std::fs::write(&path, "{ broken").unwrap();
        assert!(ViewerSettings::load(&path).is_err());
    }
}

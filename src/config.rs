use std::fs;
use std::path::Path;
use serde::Deserialize;

use crate::error::AppError;

/// 汎用トラバーサルが使う括弧・区切り文字の設定。
/// デフォルトは複数行スタイル:
///
/// ```text
/// TxRequest[
///   request_type=TXINPUT
///   details=
///     request_index: 0
///     tx_hash:
/// ]
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    pub use_message_name: bool,
    pub content_start: String,
    pub content_end: String,
    pub field_separator: String,
    pub field_separator_at_start: bool,
    pub field_name_value_separator: String,
    pub null_text: String,
    pub array_start: String,
    pub array_separator: String,
    pub array_end: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            use_message_name: true,
            content_start: "[".to_string(),
            content_end: "\n]".to_string(),
            field_separator: "\n  ".to_string(),
            field_separator_at_start: true,
            field_name_value_separator: "=".to_string(),
            null_text: "<null>".to_string(),
            array_start: "{".to_string(),
            array_separator: ",".to_string(),
            array_end: "}".to_string(),
        }
    }
}

impl StyleConfig {
    /// JSONファイルから読み込む。記述のないキーはデフォルト値のまま
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            log::error!("スタイル設定ファイルの読み込みに失敗しました: {:?}", path);
            AppError::Io(e)
        })?;
        let config: StyleConfig = serde_json::from_str(&content).map_err(|e| {
            log::error!("スタイル設定JSONのパースに失敗しました。");
            AppError::JsonParse {
                file_path: path.to_path_buf(),
                source: e,
            }
        })?;
        log::debug!("スタイル設定の読み込み成功: {:?}", config);
        Ok(config)
    }
}

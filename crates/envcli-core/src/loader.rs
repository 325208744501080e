//! 設定ドキュメントローダー
//!
//! `.envcli.yml` を型付きのドキュメントに読み込む。
//! ファイルが存在しないことはエラーではなく `None` として扱う。

use crate::error::{EnvError, Result};
use crate::model::ProjectConfig;
use std::path::Path;
use tracing::{debug, instrument};

/// 設定ファイルをロード
///
/// - ファイルなし: `Ok(None)`
/// - 空ファイル: 空のドキュメント
/// - 読み込み・解析失敗: `EnvError::Load`
#[instrument(skip(path), fields(file = %path.display()))]
pub fn load_project_config(path: &Path) -> Result<Option<ProjectConfig>> {
    if !path.exists() {
        debug!("Config file does not exist, skipping");
        return Ok(None);
    }

    debug!("Loading config file");
    let content = std::fs::read_to_string(path).map_err(|e| EnvError::Load {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    parse_project_config(&content)
        .map(Some)
        .map_err(|message| EnvError::Load {
            path: path.to_path_buf(),
            message,
        })
}

/// YAML文字列をパース
fn parse_project_config(content: &str) -> std::result::Result<ProjectConfig, String> {
    if content.trim().is_empty() {
        return Ok(ProjectConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| e.to_string())
}

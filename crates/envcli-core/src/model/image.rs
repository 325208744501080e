//! イメージ定義

use serde::{Deserialize, Serialize};
use std::fmt;

/// 設定の出所
///
/// マージ時に付与され、ドキュメントには保存されない。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    /// プロジェクトルートの `.envcli.yml`
    Project,
    /// グローバル設定および追加インクルード
    #[default]
    Global,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Project => write!(f, "Project"),
            Scope::Global => write!(f, "Global"),
        }
    }
}

/// コマンドを実行するコンテナイメージの定義
///
/// YAML形式：
/// ```yaml
/// images:
///   - name: node
///     image: node
///     tag: "18"
///     directory: /project
///     shell: sh
///     provides:
///       - npm
///       - node
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionTarget {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tag: String,
    /// コンテナ内の作業ディレクトリ
    #[serde(default)]
    pub directory: String,
    #[serde(default)]
    pub shell: String,
    /// このイメージが引き受けるコマンド名（宣言順）
    #[serde(default)]
    pub provides: Vec<String>,
    #[serde(skip)]
    pub scope: Scope,
}

impl ExecutionTarget {
    /// `provides` にコマンド名が完全一致で含まれるか
    pub fn provides(&self, command: &str) -> bool {
        self.provides.iter().any(|p| p == command)
    }

    /// `image:tag` 形式の参照
    pub fn image_ref(&self) -> String {
        if self.tag.is_empty() {
            self.image.clone()
        } else {
            format!("{}:{}", self.image, self.tag)
        }
    }
}

/// `.envcli.yml` のドキュメント形式
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub images: Vec<ExecutionTarget>,
}

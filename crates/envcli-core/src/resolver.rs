//! 設定の解決
//!
//! プロジェクト設定、追加インクルード、グローバル設定の順に候補を組み立て、
//! ロードしてマージした上でコマンドをルーティングする。

use crate::discovery::{PROJECT_FILE_NAME, find_project_root};
use crate::error::Result;
use crate::loader::load_project_config;
use crate::model::{ExecutionTarget, MergedConfiguration, Scope};
use crate::router::route;
use envcli_config::{GLOBAL_CONFIGURATION_PATH, PropertyStore};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// ロード候補の設定ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub scope: Scope,
}

/// 設定リゾルバ
#[derive(Debug, Clone)]
pub struct ConfigurationResolver {
    properties: PropertyStore,
    execution_dir: PathBuf,
}

impl ConfigurationResolver {
    /// `execution_dir` はグローバル設定パスが未設定のときのフォールバック
    pub fn new(properties: PropertyStore, execution_dir: impl Into<PathBuf>) -> Self {
        Self {
            properties,
            execution_dir: execution_dir.into(),
        }
    }

    /// 実行ディレクトリの `.envclirc` を使うリゾルバ
    pub fn from_environment() -> Result<Self> {
        let execution_dir = envcli_config::execution_dir()?;
        let properties = PropertyStore::in_dir(&execution_dir);
        Ok(Self::new(properties, execution_dir))
    }

    /// ロード候補を優先順に列挙
    ///
    /// 1. `<project-root>/.envcli.yml`（プロジェクトが見つかった場合のみ）
    /// 2. 追加インクルード（指定順）
    /// 3. `<global-configuration-path>/.envcli.yml`
    ///
    /// プロパティストアの読み込み失敗はそのまま返す。
    pub fn candidate_files(
        &self,
        current_dir: &Path,
        extra_includes: &[PathBuf],
    ) -> Result<Vec<CandidateFile>> {
        let properties = self.properties.load()?;

        let mut candidates = Vec::with_capacity(extra_includes.len() + 2);

        match find_project_root(current_dir) {
            Ok(project_root) => {
                debug!(project_root = %project_root.display(), "Project directory");
                candidates.push(CandidateFile {
                    path: project_root.join(PROJECT_FILE_NAME),
                    scope: Scope::Project,
                });
            }
            Err(_) => debug!("No project directory, skipping project scope"),
        }

        candidates.extend(extra_includes.iter().map(|include| CandidateFile {
            path: expand_home(include),
            scope: Scope::Global,
        }));

        let fallback = self.execution_dir.to_string_lossy();
        let global_dir = properties.value_or(GLOBAL_CONFIGURATION_PATH, &fallback);
        debug!(global_dir = %global_dir, "Will load the global configuration");
        candidates.push(CandidateFile {
            path: expand_home(Path::new(global_dir)).join(PROJECT_FILE_NAME),
            scope: Scope::Global,
        });

        Ok(candidates)
    }

    /// 全候補をロードしてマージ
    ///
    /// 存在しないファイルは 0 件として扱い、壊れたファイルは警告して読み飛ばす。
    #[instrument(skip(self, current_dir, extra_includes), fields(current_dir = %current_dir.display()))]
    pub fn load(
        &self,
        current_dir: &Path,
        extra_includes: &[PathBuf],
    ) -> Result<MergedConfiguration> {
        let candidates = self.candidate_files(current_dir, extra_includes)?;

        let mut merged = MergedConfiguration::new();
        for candidate in candidates {
            match load_project_config(&candidate.path) {
                Ok(Some(document)) => {
                    debug!(
                        file = %candidate.path.display(),
                        scope = %candidate.scope,
                        images = document.images.len(),
                        "Merging config file"
                    );
                    merged.push_document(document, candidate.scope);
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(file = %candidate.path.display(), error = %e, "Skipping unreadable config file");
                }
            }
        }

        debug!(images = merged.len(), "Configuration merged");
        Ok(merged)
    }

    /// コマンド名に対応するイメージ定義を解決
    #[instrument(skip(self, current_dir, extra_includes))]
    pub fn resolve(
        &self,
        command: &str,
        current_dir: &Path,
        extra_includes: &[PathBuf],
    ) -> Result<ExecutionTarget> {
        let merged = self.load(current_dir, extra_includes)?;
        route(merged.entries(), command).cloned()
    }
}

/// 先頭の `~/` をホームディレクトリに展開
fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_home(Path::new("~/conf/.envcli.yml")), home.join("conf/.envcli.yml"));
        assert_eq!(expand_home(Path::new("/etc/envcli.yml")), PathBuf::from("/etc/envcli.yml"));
        assert_eq!(expand_home(Path::new("~user/x")), PathBuf::from("~user/x"));
    }
}

//! プロジェクトルートの検出
//!
//! カレントディレクトリから親方向へ `.envcli.yml` を探す。

use crate::error::{EnvError, Result};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, trace};

/// プロジェクトのマーカー兼設定ファイル名
pub const PROJECT_FILE_NAME: &str = ".envcli.yml";

/// プロジェクトルートを検出
///
/// `start_dir` から親に向かって `.envcli.yml` を含む最初のディレクトリを返す。
/// シンボリックリンクは解決せず、パスを文字通りに辿る。
#[tracing::instrument(skip(start_dir), fields(start_dir = %start_dir.display()))]
pub fn find_project_root(start_dir: &Path) -> Result<PathBuf> {
    let mut current = start_dir;
    debug!("Searching for project root");

    loop {
        trace!(checking = %current.display(), "Looking for .envcli.yml");
        if current.join(PROJECT_FILE_NAME).exists() {
            debug!(project_root = %current.display(), "Found project root");
            return Ok(current.to_path_buf());
        }

        // ルートに到達したか、親が自分自身なら終了
        match current.parent() {
            Some(parent) if parent != current => current = parent,
            _ => break,
        }
    }

    debug!("No .envcli.yml found in any parent directory");
    Err(EnvError::ProjectRootNotFound(start_dir.to_path_buf()))
}

/// プロジェクトルート、見つからなければ作業ディレクトリ
pub fn project_or_working_directory(current_dir: &Path) -> PathBuf {
    find_project_root(current_dir).unwrap_or_else(|_| current_dir.to_path_buf())
}

/// プロジェクトルートから作業ディレクトリへの相対パス（`/` 区切り）
///
/// 作業ディレクトリがプロジェクト外、またはルートそのものの場合は空文字。
pub fn relative_path_to_working_directory(project_root: &Path, current_dir: &Path) -> String {
    let Ok(relative) = current_dir.strip_prefix(project_root) else {
        return String::new();
    };

    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_in_start_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(PROJECT_FILE_NAME), "").unwrap();

        let root = find_project_root(temp_dir.path()).unwrap();
        assert_eq!(root, temp_dir.path());
    }

    #[test]
    fn test_nearest_ancestor_wins() {
        let temp_dir = tempfile::tempdir().unwrap();
        let grandparent = temp_dir.path().join("a");
        let parent = grandparent.join("b");
        let child = parent.join("c");
        fs::create_dir_all(&child).unwrap();
        fs::write(grandparent.join(PROJECT_FILE_NAME), "").unwrap();
        fs::write(parent.join(PROJECT_FILE_NAME), "").unwrap();

        let root = find_project_root(&child).unwrap();
        assert_eq!(root, parent);
    }

    #[test]
    fn test_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("x").join("y");
        fs::create_dir_all(&nested).unwrap();

        // テンポラリディレクトリの祖先にマーカーがある環境では検証できない
        if find_project_root(temp_dir.path()).is_ok() {
            return;
        }

        match find_project_root(&nested) {
            Err(EnvError::ProjectRootNotFound(start)) => assert_eq!(start, nested),
            other => panic!("Expected ProjectRootNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_filesystem_root_terminates() {
        let root = Path::new("/");
        // 結果はホスト依存だが、無限ループせずに終わること
        let _ = find_project_root(root);
    }

    #[test]
    fn test_project_or_working_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let project = temp_dir.path().join("project");
        let sub = project.join("src");
        fs::create_dir_all(&sub).unwrap();
        fs::write(project.join(PROJECT_FILE_NAME), "").unwrap();

        assert_eq!(project_or_working_directory(&sub), project);
    }

    #[test]
    fn test_relative_path_to_working_directory() {
        let root = Path::new("/home/user/project");

        assert_eq!(relative_path_to_working_directory(root, root), "");
        assert_eq!(
            relative_path_to_working_directory(root, Path::new("/home/user/project/src/app")),
            "src/app"
        );
        assert_eq!(
            relative_path_to_working_directory(root, Path::new("/tmp")),
            ""
        );
    }
}

//! コマンドルーティング

use crate::error::{EnvError, Result};
use crate::model::ExecutionTarget;
use tracing::debug;

/// コマンド名に対応する最初のイメージ定義を返す
///
/// マージ順に走査し、`provides` の完全一致（大文字小文字を区別）で最初に
/// 見つかったものを採用する。先にマージされたプロジェクト設定が常に勝つ。
pub fn route<'a>(entries: &'a [ExecutionTarget], command: &str) -> Result<&'a ExecutionTarget> {
    for entry in entries {
        debug!(image = %entry.name, scope = %entry.scope, "Checking for a match");
        if entry.provides(command) {
            debug!(command = %command, image = %entry.name, "Matched command");
            return Ok(entry);
        }
    }

    Err(EnvError::CommandNotFound(command.to_string()))
}

//! マージ済み設定

use super::image::{ExecutionTarget, ProjectConfig, Scope};

/// 複数の設定ドキュメントを連結した結果
///
/// 先にマージされたドキュメントのエントリが常に前に並ぶ。
/// 追加のみで、削除や重複排除は行わない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedConfiguration {
    entries: Vec<ExecutionTarget>,
}

impl MergedConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// 2つのドキュメントをマージ（1つ目を Project、2つ目を Global として扱う）
    pub fn merge(project: ProjectConfig, global: ProjectConfig) -> Self {
        let mut merged = Self::new();
        merged.push_document(project, Scope::Project);
        merged.push_document(global, Scope::Global);
        merged
    }

    /// ドキュメントのエントリをスコープ付きで末尾に追加
    pub fn push_document(&mut self, document: ProjectConfig, scope: Scope) {
        self.entries
            .extend(document.images.into_iter().map(|mut image| {
                image.scope = scope;
                image
            }));
    }

    pub fn entries(&self) -> &[ExecutionTarget] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

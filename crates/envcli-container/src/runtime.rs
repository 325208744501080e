//! 実行先の抽象化

use crate::error::Result;
use std::path::PathBuf;

/// シェル未指定時に使うシェル
pub const DEFAULT_SHELL: &str = "sh";

/// コンテナ内ディレクトリ未指定時のマウント先
pub const DEFAULT_CONTAINER_DIRECTORY: &str = "/project";

/// プロキシ設定
///
/// プロセス全体の環境変数ではなく、起動するサブプロセスにだけ渡す。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
}

impl ProxySettings {
    /// 空文字は未設定として扱う
    pub fn new(http: impl Into<String>, https: impl Into<String>) -> Self {
        let non_empty = |s: String| (!s.is_empty()).then_some(s);
        Self {
            http: non_empty(http.into()),
            https: non_empty(https.into()),
        }
    }

    /// 環境変数名と値の組
    pub fn env_vars(&self) -> Vec<(&'static str, &str)> {
        let mut vars = Vec::new();
        if let Some(http) = &self.http {
            vars.push(("HTTP_PROXY", http.as_str()));
        }
        if let Some(https) = &self.https {
            vars.push(("HTTPS_PROXY", https.as_str()));
        }
        vars
    }
}

/// コンテナでのコマンド実行要求
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecRequest {
    pub image: String,
    pub tag: String,
    pub shell: String,
    /// シェルに渡すコマンドライン（引数は結合済み）
    pub command_line: String,
    /// ホスト側のプロジェクトディレクトリ
    pub host_directory: PathBuf,
    /// コンテナ内のマウント先
    pub container_directory: String,
    /// プロジェクトルートからの相対パス（`/` 区切り、空ならルート）
    pub working_subpath: String,
    pub proxy: ProxySettings,
}

impl ExecRequest {
    pub fn image_ref(&self) -> String {
        if self.tag.is_empty() {
            self.image.clone()
        } else {
            format!("{}:{}", self.image, self.tag)
        }
    }

    pub fn shell(&self) -> &str {
        if self.shell.is_empty() {
            DEFAULT_SHELL
        } else {
            &self.shell
        }
    }

    pub fn container_directory(&self) -> &str {
        if self.container_directory.is_empty() {
            DEFAULT_CONTAINER_DIRECTORY
        } else {
            &self.container_directory
        }
    }

    /// コンテナ内の作業ディレクトリ
    pub fn working_directory(&self) -> String {
        let base = self.container_directory().trim_end_matches('/');
        let sub = self.working_subpath.trim_matches('/');
        if !sub.is_empty() {
            format!("{}/{}", base, sub)
        } else if base.is_empty() {
            "/".to_string()
        } else {
            base.to_string()
        }
    }
}

/// コマンドを実行してコンテナの終了コードを返す
#[allow(async_fn_in_trait)]
pub trait Executor {
    async fn execute(&self, request: &ExecRequest) -> Result<i32>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxy_settings_skip_blank() {
        let proxy = ProxySettings::new("", "http://secure:3128");
        assert_eq!(proxy.http, None);
        assert_eq!(proxy.env_vars(), vec![("HTTPS_PROXY", "http://secure:3128")]);
    }

    #[test]
    fn test_defaults() {
        let request = ExecRequest {
            image: "alpine".to_string(),
            ..Default::default()
        };
        assert_eq!(request.image_ref(), "alpine");
        assert_eq!(request.shell(), "sh");
        assert_eq!(request.container_directory(), "/project");
        assert_eq!(request.working_directory(), "/project");
    }

    #[test]
    fn test_working_directory() {
        let mut request = ExecRequest {
            container_directory: "/src/".to_string(),
            working_subpath: "packages/web".to_string(),
            ..Default::default()
        };
        assert_eq!(request.working_directory(), "/src/packages/web");

        request.container_directory = "/".to_string();
        assert_eq!(request.working_directory(), "/packages/web");

        request.working_subpath.clear();
        assert_eq!(request.working_directory(), "/");
    }
}

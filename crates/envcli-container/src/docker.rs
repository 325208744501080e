//! docker CLI ラッパー
//!
//! `docker run --rm` で使い捨てコンテナを起動し、プロジェクトをマウントして
//! コマンドを実行する。イメージの取得やライフサイクルは docker に任せる。

use crate::error::{ContainerError, Result};
use crate::runtime::{ExecRequest, Executor};
use std::io::IsTerminal;
use std::process::Stdio;
use tokio::process::Command;

/// docker CLI を使う Executor
#[derive(Debug, Clone)]
pub struct DockerCli {
    binary: String,
}

impl Default for DockerCli {
    fn default() -> Self {
        Self::new()
    }
}

impl DockerCli {
    pub fn new() -> Self {
        Self::with_binary("docker")
    }

    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// docker がインストールされ、デーモンに接続できるか確認
    pub async fn check_available(&self) -> Result<String> {
        let output = Command::new(&self.binary)
            .args(["version", "--format", "{{.Server.Version}}"])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ContainerError::DockerNotFound {
                    binary: self.binary.clone(),
                },
                _ => ContainerError::Io(e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ContainerError::DockerConnectionFailed(
                stderr.trim().to_string(),
            ));
        }

        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        tracing::debug!(version = %version, "Docker server detected");
        Ok(version)
    }
}

/// `docker run` の引数を組み立てる
pub fn run_args(request: &ExecRequest, tty: bool) -> Vec<String> {
    let mut args = vec!["run".to_string(), "--rm".to_string(), "-i".to_string()];
    if tty {
        args.push("-t".to_string());
    }

    args.push("-v".to_string());
    args.push(format!(
        "{}:{}",
        request.host_directory.display(),
        request.container_directory()
    ));
    args.push("-w".to_string());
    args.push(request.working_directory());

    for (key, value) in request.proxy.env_vars() {
        args.push("-e".to_string());
        args.push(format!("{}={}", key, value));
    }

    args.push(request.image_ref());
    args.push(request.shell().to_string());
    args.push("-c".to_string());
    args.push(request.command_line.clone());
    args
}

impl Executor for DockerCli {
    async fn execute(&self, request: &ExecRequest) -> Result<i32> {
        self.check_available().await?;

        let tty = std::io::stdin().is_terminal() && std::io::stdout().is_terminal();
        let args = run_args(request, tty);
        tracing::debug!("Running: {} {}", self.binary, args.join(" "));

        let mut cmd = Command::new(&self.binary);
        cmd.args(&args);
        // プロキシは docker CLI 自身（イメージ取得）にも必要
        for (key, value) in request.proxy.env_vars() {
            cmd.env(key, value);
        }

        let status = cmd.status().await?;
        status.code().ok_or_else(|| ContainerError::Terminated {
            image: request.image_ref(),
        })
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContainerError {
    #[error(
        "docker コマンドが見つかりません: {binary}\n\nヒント:\n  • Docker Desktop、OrbStack または docker CLI をインストールしてください"
    )]
    DockerNotFound { binary: String },

    #[error(
        "Dockerに接続できません: {0}\n\nヒント:\n  • Dockerが起動しているか確認してください\n  • OrbStackまたはDocker Desktopがインストールされているか確認してください"
    )]
    DockerConnectionFailed(String),

    #[error("コンテナがシグナルで終了しました: {image}")]
    Terminated { image: String },

    #[error("IO エラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ContainerError>;

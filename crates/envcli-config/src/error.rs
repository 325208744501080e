use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PropertyError {
    #[error("実行ディレクトリが見つかりません")]
    ExecutionDirNotFound,

    #[error("プロパティファイルの解析に失敗しました: {path}\n理由: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("プロパティファイルのシリアライズに失敗しました: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error("IO エラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PropertyError>;

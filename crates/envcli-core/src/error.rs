use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("ファイル読み込みエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("設定ファイルの読み込みに失敗しました: {path}\n理由: {message}")]
    Load { path: PathBuf, message: String },

    #[error("プロパティエラー: {0}")]
    Property(#[from] envcli_config::PropertyError),

    #[error(
        "プロジェクトルートが見つかりません\n探索開始位置: {0}\nヒント: .envcli.yml ファイルを含むディレクトリで実行してください"
    )]
    ProjectRootNotFound(PathBuf),

    #[error("コマンド '{0}' に対応する設定が見つかりません")]
    CommandNotFound(String),
}

pub type Result<T> = std::result::Result<T, EnvError>;

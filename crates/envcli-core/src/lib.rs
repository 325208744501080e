//! EnvCLI のコア
//!
//! 複数スコープの `.envcli.yml` を1つのコマンドテーブルにまとめ、
//! コマンド名から実行先のコンテナイメージを解決する。

pub mod discovery;
pub mod error;
pub mod loader;
pub mod model;
pub mod resolver;
pub mod router;

pub use discovery::{
    PROJECT_FILE_NAME, find_project_root, project_or_working_directory,
    relative_path_to_working_directory,
};
pub use error::{EnvError, Result};
pub use loader::load_project_config;
pub use model::*;
pub use resolver::{CandidateFile, ConfigurationResolver};
pub use router::route;

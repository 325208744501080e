//! ユーザープロパティストア
//!
//! 実行ディレクトリの `.envclirc` に保存されるフラットなキー/値ストア。
//! 読み書きのたびにディスクから再ロードし、変更は即座に永続化する。

pub mod error;

pub use error::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// プロパティファイル名
pub const PROPERTY_FILE_NAME: &str = ".envclirc";

/// 実行ディレクトリを上書きする環境変数
pub const HOME_ENV: &str = "ENVCLI_HOME";

pub const HTTP_PROXY: &str = "http-proxy";
pub const HTTPS_PROXY: &str = "https-proxy";
pub const GLOBAL_CONFIGURATION_PATH: &str = "global-configuration-path";
pub const CACHE_PATH: &str = "cache-path";
pub const LAST_UPDATE_CHECK: &str = "last-update-check";

/// 読み書きを許可するプロパティ名
///
/// これ以外のキーは get/set/unset で黙って無視される。
pub const VALID_PROPERTIES: [&str; 5] = [
    HTTP_PROXY,
    HTTPS_PROXY,
    GLOBAL_CONFIGURATION_PATH,
    CACHE_PATH,
    LAST_UPDATE_CHECK,
];

pub fn is_valid_property(key: &str) -> bool {
    VALID_PROPERTIES.contains(&key)
}

/// 実行ディレクトリを取得
///
/// 以下の優先順位:
/// 1. 環境変数 ENVCLI_HOME
/// 2. 実行中のバイナリが置かれたディレクトリ
pub fn execution_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var(HOME_ENV)
        && !home.is_empty()
    {
        return Ok(PathBuf::from(home));
    }

    let exe = std::env::current_exe()?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or(PropertyError::ExecutionDirNotFound)
}

/// `.envclirc` のドキュメント形式
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyFile {
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl PropertyFile {
    /// 値を取得（未設定・空文字の場合は None）
    pub fn value(&self, key: &str) -> Option<&str> {
        self.properties
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn value_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.value(key).unwrap_or(default)
    }
}

/// ディスク上の `.envclirc` へのハンドル
///
/// インスタンスはパスしか保持しない。値はすべての操作でファイルから読み直す。
#[derive(Debug, Clone)]
pub struct PropertyStore {
    path: PathBuf,
}

impl PropertyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 指定ディレクトリの `.envclirc` を扱うストア
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(PROPERTY_FILE_NAME))
    }

    /// 実行ディレクトリの `.envclirc` を扱うストア
    pub fn open_default() -> Result<Self> {
        Ok(Self::in_dir(&execution_dir()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ファイルをロード（存在しなければ空のストア）
    pub fn load(&self) -> Result<PropertyFile> {
        if !self.path.exists() {
            debug!(file = %self.path.display(), "Property file does not exist, using empty store");
            return Ok(PropertyFile::default());
        }

        debug!(file = %self.path.display(), "Loading property file");
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(PropertyFile::default());
        }

        serde_yaml::from_str(&content).map_err(|source| PropertyError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, file: &PropertyFile) -> Result<()> {
        debug!(file = %self.path.display(), "Saving property file");
        let content = serde_yaml::to_string(file)?;

        let mut options = std::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut handle = options.open(&self.path)?;
        handle.write_all(content.as_bytes())?;

        // mode() は新規作成時にしか効かないため既存ファイルも絞る
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    /// 値を取得
    ///
    /// 未知のキーと未設定のキーはどちらも空文字を返す。
    pub fn get(&self, key: &str) -> Result<String> {
        let file = self.load()?;
        if !is_valid_property(key) {
            return Ok(String::new());
        }
        Ok(file.properties.get(key).cloned().unwrap_or_default())
    }

    /// 値を設定して保存（未知のキーは何もしない）
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut file = self.load()?;
        if !is_valid_property(key) {
            debug!(key = %key, "Ignoring unknown property");
            return Ok(());
        }
        file.properties.insert(key.to_string(), value.to_string());
        self.save(&file)
    }

    /// 値を空文字にして保存（キー自体は残る）
    pub fn unset(&self, key: &str) -> Result<()> {
        self.set(key, "")
    }
}

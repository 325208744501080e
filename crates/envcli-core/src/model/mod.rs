//! モデル定義
//!
//! 設定ファイルから読み込むイメージ定義と、マージ後の設定を定義します。

mod image;
mod merged;

// Re-exports
pub use image::*;
pub use merged::*;

use std::path::PathBuf;
use thiserror::Error;

/// 构造控件时加载资源失败，直接交给调用方处理
#[derive(Error, Debug)]
pub enum ResourceLoadError {
    #[error("Could not read image {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to decode image {path:?}")]
    Decode { path: PathBuf },
    #[error("Failed to render label {text:?}: {reason}")]
    Glyph { text: String, reason: String },
}

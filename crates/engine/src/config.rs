// crates/engine/src/config.rs
use derive_builder::Builder;
use std::path::PathBuf;

/// 走査ルートはビルド時に固定
pub const DEFAULT_ROOT: &str = "src";

/// 対象拡張子もビルド時に固定
pub const TARGET_EXTENSION: &str = "ts";

/// Engine configuration.
///
/// There is no runtime surface for these values; the binary always runs with
/// the defaults. The builder exists so library tests can point the walk at a
/// fixture tree.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Directory the walk starts from.
    #[builder(default = "PathBuf::from(DEFAULT_ROOT)")]
    pub root: PathBuf,

    /// Extension a file must carry to be touched.
    #[builder(default = "TARGET_EXTENSION.to_string()")]
    pub extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            extension: TARGET_EXTENSION.to_string(),
        }
    }
}

//! 설정 저장소 포트 구현 어댑터.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::application::config::Config;
use crate::application::ports::ConfigRepository;
use crate::infrastructure::config;

/// JSON 기반 설정 저장소 어댑터.
pub struct JsonConfigRepository;

impl ConfigRepository for JsonConfigRepository {
    fn load(&self) -> Result<Config> {
        config::load()
    }

    fn inspect_pretty_json(&self) -> Result<String> {
        config::inspect_pretty_json()
    }

    fn config_paths(&self) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
        config::paths()
    }

    fn redacted_contents(&self, path: &Path) -> Result<String> {
        config::redacted_contents(path)
    }
}

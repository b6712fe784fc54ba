//! 사용자 설정(JSON) 로딩/병합 모듈.
//! 여러 경로의 설정을 우선순위대로 병합하고, 실행 진단용 정보를 함께 제공한다.

mod inspection;
mod loader;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::application::config::Config;

pub use inspection::{AccountInspection, ConfigInspection, EffectiveDefaults};
pub use loader::{ACCESS_TOKEN_ENV, CONFIG_ENV, INSTANCE_ENV, config_paths, redact_secrets};

/// 병합된 최종 설정을 로딩한다.
pub fn load() -> Result<Config> {
    Ok(loader::load_merged_config()?.config)
}

/// 설정 진단 결과를 사람이 읽기 쉬운 JSON으로 반환한다.
pub fn inspect_pretty_json() -> Result<String> {
    let loaded = loader::load_merged_config()?;
    Ok(serde_json::to_string_pretty(&ConfigInspection::from_loaded(
        loaded,
    ))?)
}

/// (탐색 경로, 로딩된 경로). 파싱 오류가 있어도 탐색 경로는 돌려준다.
pub fn paths() -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    let searched = config_paths();
    let loaded = match loader::load_from_paths(&searched) {
        Ok(loaded) => loaded.loaded_paths,
        Err(_) => searched.iter().filter(|p| p.exists()).cloned().collect(),
    };
    Ok((searched, loaded))
}

/// 비밀값 줄을 가린 설정 파일 내용.
pub fn redacted_contents(path: &Path) -> Result<String> {
    loader::read_redacted(path)
}

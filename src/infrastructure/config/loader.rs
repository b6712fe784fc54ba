//! 설정 파일 탐색/병합 로더.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::config::Config;

pub const CONFIG_ENV: &str = "FEDICLI_CONFIG";
pub const INSTANCE_ENV: &str = "FEDICLI_INSTANCE";
pub const ACCESS_TOKEN_ENV: &str = "FEDICLI_ACCESS_TOKEN";

const REDACTED: &str = "***CONTENTS REDACTED***";

#[derive(Debug, Clone)]
pub(crate) struct LoadedConfig {
    pub config: Config,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
    /// 액세스 토큰을 어디서 얻었는지(진단용)
    pub token_source: Option<String>,
}

/// 우선순위 경로의 JSON 설정을 병합하고 환경변수 오버라이드를 적용한다.
pub(crate) fn load_merged_config() -> Result<LoadedConfig> {
    let paths = config_paths();
    let mut loaded = load_from_paths(&paths)?;
    loaded.token_source = apply_env_overrides(&mut loaded.config, |key| env::var(key).ok());
    Ok(loaded)
}

/// 존재하는 파일만 낮은 우선순위 → 높은 우선순위 순서로 병합한다.
pub(crate) fn load_from_paths(paths: &[PathBuf]) -> Result<LoadedConfig> {
    let mut merged = Config::default();
    let mut loaded_paths = Vec::new();

    for path in paths {
        if !path.exists() {
            continue;
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let parsed: Config = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded config");
        merged.merge_from(parsed);
        loaded_paths.push(path.clone());
    }

    Ok(LoadedConfig {
        config: merged,
        searched_paths: paths.to_vec(),
        loaded_paths,
        token_source: None,
    })
}

/// 시스템 + 사용자 + 프로젝트 + 명시 경로 순으로 병합 경로를 구성한다.
pub fn config_paths() -> Vec<PathBuf> {
    // 낮은 우선순위 -> 높은 우선순위 순서로 병합됨.
    let mut paths = vec![PathBuf::from("/etc/fedicli/config.json")];

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join("fedicli").join("config.json"));
    }

    paths.push(PathBuf::from(".fedicli/config.json"));

    if let Ok(path) = env::var(CONFIG_ENV)
        && !path.trim().is_empty()
    {
        paths.push(Path::new(&path).to_path_buf());
    }

    dedup_paths(paths)
}

/// 인스턴스/토큰 환경변수를 반영하고, 토큰 출처를 반환한다.
/// 토큰 우선순위: `access_token` > `access_token_env`가 가리키는 변수 > `FEDICLI_ACCESS_TOKEN`.
pub(crate) fn apply_env_overrides(
    config: &mut Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(instance) = lookup(INSTANCE_ENV) {
        config.account.instance = Some(instance);
    }

    if config.account.access_token.is_some() {
        return Some("config".to_string());
    }

    if let Some(name) = config.account.access_token_env.clone()
        && let Some(token) = lookup(&name)
    {
        config.account.access_token = Some(token);
        return Some(format!("env:{name}"));
    }

    let token = lookup(ACCESS_TOKEN_ENV)?;
    config.account.access_token = Some(token);
    Some(format!("env:{ACCESS_TOKEN_ENV}"))
}

/// 토큰/클라이언트 비밀값이 들어있는 줄을 가린다.
pub fn redact_secrets(raw: &str) -> String {
    raw.lines()
        .map(|line| {
            if line.contains("token") || line.contains("client_") {
                REDACTED
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn read_redacted(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config at {}", path.display()))?;
    Ok(redact_secrets(&raw))
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn merges_existing_files_in_priority_order() {
        let dir = tempfile::tempdir().unwrap();
        let low = write(
            dir.path(),
            "low.json",
            r#"{"account":{"instance":"low.social","access_token":"t"},"defaults":{"max_width":100}}"#,
        );
        let high = write(dir.path(), "high.json", r#"{"account":{"instance":"high.social"}}"#);
        let missing = dir.path().join("missing.json");

        let loaded = load_from_paths(&[low.clone(), missing, high.clone()]).unwrap();

        assert_eq!(loaded.loaded_paths, vec![low, high]);
        assert_eq!(loaded.searched_paths.len(), 3);
        assert_eq!(loaded.config.account.instance.as_deref(), Some("high.social"));
        assert_eq!(loaded.config.account.access_token.as_deref(), Some("t"));
        assert_eq!(loaded.config.max_width(), 100);
    }

    #[test]
    fn invalid_json_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let bad = write(dir.path(), "bad.json", "{ not json");
        let err = load_from_paths(&[bad]).unwrap_err();
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn env_overrides_instance_and_resolves_token_env() {
        let env: HashMap<&str, &str> = HashMap::from([
            (INSTANCE_ENV, "env.social"),
            ("MY_TOKEN", "from-my-token"),
            (ACCESS_TOKEN_ENV, "from-default"),
        ]);
        let lookup = |key: &str| env.get(key).map(ToString::to_string);

        let mut config = Config::default();
        config.account.instance = Some("file.social".to_string());
        config.account.access_token_env = Some("MY_TOKEN".to_string());

        let source = apply_env_overrides(&mut config, lookup);
        assert_eq!(config.account.instance.as_deref(), Some("env.social"));
        assert_eq!(config.account.access_token.as_deref(), Some("from-my-token"));
        assert_eq!(source.as_deref(), Some("env:MY_TOKEN"));

        let mut fallback = Config::default();
        let source = apply_env_overrides(&mut fallback, lookup);
        assert_eq!(fallback.account.access_token.as_deref(), Some("from-default"));
        assert_eq!(source.as_deref(), Some("env:FEDICLI_ACCESS_TOKEN"));
    }

    #[test]
    fn config_token_wins_and_empty_env_is_ignored() {
        let mut config = Config::default();
        config.account.access_token = Some("file".to_string());
        let source = apply_env_overrides(&mut config, |_| Some("  ".to_string()));
        assert_eq!(config.account.access_token.as_deref(), Some("file"));
        assert_eq!(source.as_deref(), Some("config"));
        assert_eq!(config.account.instance, None);

        let mut none = Config::default();
        assert_eq!(apply_env_overrides(&mut none, |_| None), None);
    }

    #[test]
    fn redacts_secret_lines() {
        let raw = "{\n  \"instance\": \"x\",\n  \"access_token\": \"abc\",\n  \"client_secret\": \"s\"\n}";
        assert_eq!(
            redact_secrets(raw),
            "{\n  \"instance\": \"x\",\n***CONTENTS REDACTED***\n***CONTENTS REDACTED***\n}"
        );
    }
}

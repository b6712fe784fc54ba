//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use crate::application::config::DefaultsConfig;
use crate::domain::options::GlobalOptions;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub account: AccountInspection,
    pub defaults: DefaultsConfig,
    pub effective_defaults: EffectiveDefaults,
}

/// 토큰 값 자체는 노출하지 않고 출처만 보여준다.
#[derive(Debug, Clone, Serialize)]
pub struct AccountInspection {
    pub instance_url: Option<String>,
    pub access_token_env: Option<String>,
    pub token_source: Option<String>,
    pub token_resolved: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveDefaults {
    pub max_width: usize,
    pub colors: Option<u32>,
    pub language: Option<String>,
    pub timeout_secs: Option<u64>,
    /// 잘못된 설정값 메시지
    pub errors: Vec<String>,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let config = &loaded.config;
        let options = GlobalOptions::default();
        let mut errors = Vec::new();

        let colors = config
            .colors(&options)
            .map_err(|e| errors.push(format!("{e:#}")))
            .ok();
        let language = config
            .language(&options)
            .map_err(|e| errors.push(format!("{e:#}")))
            .ok()
            .flatten();
        let timeout_secs = config
            .timeout(&options)
            .map_err(|e| errors.push(format!("{e:#}")))
            .ok()
            .map(|d| d.as_secs());

        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            account: AccountInspection {
                instance_url: config.instance_url(),
                access_token_env: config.account.access_token_env.clone(),
                token_source: loaded.token_source.clone(),
                token_resolved: config.account.access_token.is_some(),
            },
            defaults: config.defaults.clone(),
            effective_defaults: EffectiveDefaults {
                max_width: config.max_width(),
                colors,
                language,
                timeout_secs,
                errors,
            },
        }
    }
}

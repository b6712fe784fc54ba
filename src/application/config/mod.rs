//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::options::GlobalOptions;
use crate::domain::validators::{
    validate_duration, validate_instance, validate_language, validate_tui_colors,
};

pub const DEFAULT_MAX_WIDTH: usize = 80;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_COLORS: u32 = 256;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 로그인된 계정/인스턴스 정보(읽기 전용)
    #[serde(default)]
    pub account: AccountConfig,
    /// 출력/HTTP 기본값
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AccountConfig {
    /// 인스턴스 도메인 또는 base URL
    pub instance: Option<String>,
    /// 고정 액세스 토큰(민감정보: 권장하지 않음)
    pub access_token: Option<String>,
    /// 액세스 토큰을 읽을 환경변수 이름
    pub access_token_env: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DefaultsConfig {
    /// 출력 최대 너비(기본 80)
    pub max_width: Option<usize>,
    /// 색상 수 또는 이름(1/16/88/256/16777216/24bit)
    pub colors: Option<String>,
    /// `Accept-Language` 두 글자 코드
    pub language: Option<String>,
    /// HTTP 타임아웃 기간 문자열(예: "30s", "1m 30s")
    pub timeout: Option<String>,
}

/// API 호출 한 번에 필요한 연결 정보.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSession {
    pub base_url: String,
    pub access_token: Option<String>,
    pub language: Option<String>,
    pub timeout: Duration,
}

impl Config {
    /// 높은 우선순위 설정의 값(`Some`)으로 덮어쓴다.
    pub fn merge_from(&mut self, other: Config) {
        let Config { account, defaults } = other;

        merge_opt(&mut self.account.instance, account.instance);
        merge_opt(&mut self.account.access_token, account.access_token);
        merge_opt(&mut self.account.access_token_env, account.access_token_env);

        merge_opt(&mut self.defaults.max_width, defaults.max_width);
        merge_opt(&mut self.defaults.colors, defaults.colors);
        merge_opt(&mut self.defaults.language, defaults.language);
        merge_opt(&mut self.defaults.timeout, defaults.timeout);
    }

    /// 설정된 인스턴스를 base URL로 정규화해 반환한다.
    pub fn instance_url(&self) -> Option<String> {
        validate_instance(self.account.instance.as_deref())
    }

    /// base URL의 호스트(도메인) 부분.
    pub fn instance_domain(&self) -> Option<String> {
        let base = self.instance_url()?;
        url::Url::parse(&base)
            .ok()
            .and_then(|u| u.host_str().map(str::to_lowercase))
    }

    pub fn max_width(&self) -> usize {
        self.defaults
            .max_width
            .filter(|w| *w > 0)
            .unwrap_or(DEFAULT_MAX_WIDTH)
    }

    /// CLI 옵션 > 설정 파일 > 기본값 순으로 색상 수를 결정한다.
    pub fn colors(&self, options: &GlobalOptions) -> Result<u32> {
        if let Some(colors) = options.colors {
            return Ok(colors);
        }
        let colors = validate_tui_colors(self.defaults.colors.as_deref())
            .context("invalid defaults.colors in config")?;
        Ok(colors.unwrap_or(DEFAULT_COLORS))
    }

    pub fn language(&self, options: &GlobalOptions) -> Result<Option<String>> {
        if options.language.is_some() {
            return Ok(options.language.clone());
        }
        validate_language(self.defaults.language.as_deref())
            .context("invalid defaults.language in config")
    }

    pub fn timeout(&self, options: &GlobalOptions) -> Result<Duration> {
        if let Some(secs) = options.timeout_secs {
            return Ok(Duration::from_secs(secs));
        }
        let secs = validate_duration(self.defaults.timeout.as_deref())
            .context("invalid defaults.timeout in config")?;
        Ok(Duration::from_secs(secs.unwrap_or(DEFAULT_TIMEOUT_SECS)))
    }

    /// 지정한 base URL(없으면 설정된 인스턴스)로 API 세션을 구성한다.
    /// 토큰은 설정된 인스턴스와 같은 곳을 호출할 때만 붙인다.
    pub fn session(&self, base_url: Option<String>, options: &GlobalOptions) -> Result<ApiSession> {
        let configured = self.instance_url();
        let base_url = base_url
            .or_else(|| configured.clone())
            .context("no instance configured; set account.instance in the config file or FEDICLI_INSTANCE")?;

        let access_token = if configured.as_deref() == Some(base_url.as_str()) {
            self.account.access_token.clone()
        } else {
            None
        };

        Ok(ApiSession {
            base_url,
            access_token,
            language: self.language(options)?,
            timeout: self.timeout(options)?,
        })
    }
}

fn merge_opt<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(instance: Option<&str>, token: Option<&str>) -> Config {
        Config {
            account: AccountConfig {
                instance: instance.map(ToString::to_string),
                access_token: token.map(ToString::to_string),
                access_token_env: None,
            },
            defaults: DefaultsConfig::default(),
        }
    }

    #[test]
    fn merge_keeps_lower_priority_values_when_missing() {
        let mut base = config(Some("a.social"), Some("t1"));
        base.defaults.max_width = Some(100);

        let mut over = config(Some("b.social"), None);
        over.defaults.colors = Some("16".to_string());
        base.merge_from(over);

        assert_eq!(base.account.instance.as_deref(), Some("b.social"));
        assert_eq!(base.account.access_token.as_deref(), Some("t1"));
        assert_eq!(base.defaults.max_width, Some(100));
        assert_eq!(base.defaults.colors.as_deref(), Some("16"));
    }

    #[test]
    fn instance_url_and_domain_are_normalized() {
        let cfg = config(Some("Example.Social/"), None);
        assert_eq!(cfg.instance_url().as_deref(), Some("https://Example.Social"));
        assert_eq!(cfg.instance_domain().as_deref(), Some("example.social"));
        assert_eq!(config(None, None).instance_domain(), None);
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = Config::default();
        let opts = GlobalOptions::default();
        assert_eq!(cfg.max_width(), DEFAULT_MAX_WIDTH);
        assert_eq!(cfg.colors(&opts).unwrap(), DEFAULT_COLORS);
        assert_eq!(cfg.language(&opts).unwrap(), None);
        assert_eq!(
            cfg.timeout(&opts).unwrap(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
    }

    #[test]
    fn cli_options_override_config_values() {
        let mut cfg = Config::default();
        cfg.defaults.colors = Some("24bit".to_string());
        cfg.defaults.language = Some("DE".to_string());
        cfg.defaults.timeout = Some("1m".to_string());

        let none = GlobalOptions::default();
        assert_eq!(cfg.colors(&none).unwrap(), 16_777_216);
        assert_eq!(cfg.language(&none).unwrap().as_deref(), Some("de"));
        assert_eq!(cfg.timeout(&none).unwrap(), Duration::from_secs(60));

        let opts = GlobalOptions {
            language: Some("fr".to_string()),
            timeout_secs: Some(5),
            colors: Some(1),
            no_color: false,
        };
        assert_eq!(cfg.colors(&opts).unwrap(), 1);
        assert_eq!(cfg.language(&opts).unwrap().as_deref(), Some("fr"));
        assert_eq!(cfg.timeout(&opts).unwrap(), Duration::from_secs(5));
    }

    #[test]
    fn invalid_config_values_are_reported() {
        let mut cfg = Config::default();
        cfg.defaults.timeout = Some("forever".to_string());
        let err = cfg.timeout(&GlobalOptions::default()).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid duration: forever"));
    }

    #[test]
    fn session_uses_token_only_for_configured_instance() {
        let cfg = config(Some("example.social"), Some("secret"));
        let opts = GlobalOptions::default();

        let own = cfg.session(None, &opts).unwrap();
        assert_eq!(own.base_url, "https://example.social");
        assert_eq!(own.access_token.as_deref(), Some("secret"));

        let other = cfg
            .session(Some("https://other.social".to_string()), &opts)
            .unwrap();
        assert_eq!(other.access_token, None);
    }

    #[test]
    fn session_requires_an_instance() {
        let err = Config::default()
            .session(None, &GlobalOptions::default())
            .unwrap_err();
        assert!(err.to_string().contains("no instance configured"));
    }
}

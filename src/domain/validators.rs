//! 사용자 입력값 검증기 모음(순수 함수).
//!
//! clap `value_parser`와 설정 파일 값 검증에서 공통으로 사용한다.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// 색상 수 이름과 실제 값의 대응표(선언 순서 유지).
pub const TUI_COLORS: &[(&str, u32)] = &[
    ("1", 1),
    ("16", 16),
    ("88", 88),
    ("256", 256),
    ("16777216", 16_777_216),
    ("24bit", 16_777_216),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Language should be a two letter abbreviation.")]
    Language,
    #[error("Invalid duration: {0}")]
    Duration(String),
    #[error("Empty duration")]
    EmptyDuration,
    #[error("Invalid value: {value}. Expected one of: {expected}")]
    Colors { value: String, expected: String },
}

static LANGUAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}$").expect("valid language regex"));

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)^
        (([0-9]+)\s*(days|day|d))?\s*
        (([0-9]+)\s*(hours|hour|h))?\s*
        (([0-9]+)\s*(minutes|minute|m))?\s*
        (([0-9]+)\s*(seconds|second|s))?\s*
        $",
    )
    .expect("valid duration regex")
});

/// 두 글자 언어 코드를 정규화(trim + 소문자)해 반환한다.
pub fn validate_language(value: Option<&str>) -> Result<Option<String>, ValidationError> {
    let Some(value) = value else {
        return Ok(None);
    };

    let normalized = value.trim().to_lowercase();
    if LANGUAGE_RE.is_match(&normalized) {
        Ok(Some(normalized))
    } else {
        Err(ValidationError::Language)
    }
}

/// `1d 2h 30m 10s` 형식의 기간 문자열을 초 단위로 변환한다.
/// 각 단위는 생략 가능하지만 순서는 일/시/분/초를 따라야 한다.
pub fn validate_duration(value: Option<&str>) -> Result<Option<u64>, ValidationError> {
    let Some(value) = value else {
        return Ok(None);
    };

    let caps = DURATION_RE
        .captures(value)
        .ok_or_else(|| ValidationError::Duration(value.to_string()))?;

    let part = |idx: usize| -> Result<u64, ValidationError> {
        caps.get(idx)
            .map(|m| m.as_str().parse::<u64>())
            .transpose()
            .map(|n| n.unwrap_or(0))
            .map_err(|_| ValidationError::Duration(value.to_string()))
    };

    let days = part(2)?;
    let hours = part(5)?;
    let minutes = part(8)?;
    let seconds = part(11)?;

    let duration = days
        .checked_mul(86_400)
        .and_then(|d| hours.checked_mul(3_600).and_then(|h| d.checked_add(h)))
        .and_then(|t| minutes.checked_mul(60).and_then(|m| t.checked_add(m)))
        .and_then(|t| t.checked_add(seconds))
        .ok_or_else(|| ValidationError::Duration(value.to_string()))?;

    if duration == 0 {
        return Err(ValidationError::EmptyDuration);
    }

    Ok(Some(duration))
}

/// 인스턴스를 도메인 또는 base URL로 받아 base URL로 정규화한다.
pub fn validate_instance(value: Option<&str>) -> Option<String> {
    let value = value.filter(|v| !v.is_empty())?;
    let value = value.trim_end_matches('/');

    if value.starts_with("http") {
        Some(value.to_string())
    } else {
        Some(format!("https://{value}"))
    }
}

/// 색상 수 값 또는 이름(`24bit` 등)을 색상 수로 변환한다.
pub fn validate_tui_colors(value: Option<&str>) -> Result<Option<u32>, ValidationError> {
    let Some(value) = value else {
        return Ok(None);
    };

    if let Ok(count) = value.parse::<u32>()
        && TUI_COLORS.iter().any(|(_, known)| *known == count)
    {
        return Ok(Some(count));
    }

    if let Some((_, count)) = TUI_COLORS.iter().find(|(name, _)| *name == value) {
        return Ok(Some(*count));
    }

    let expected = TUI_COLORS
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ");
    Err(ValidationError::Colors {
        value: value.to_string(),
        expected,
    })
}

/// clap `value_parser` 어댑터: 언어 코드.
pub fn parse_language_arg(raw: &str) -> Result<String, String> {
    validate_language(Some(raw))
        .map_err(|e| e.to_string())?
        .ok_or_else(|| ValidationError::Language.to_string())
}

/// clap `value_parser` 어댑터: 기간(초).
pub fn parse_duration_arg(raw: &str) -> Result<u64, String> {
    validate_duration(Some(raw))
        .map_err(|e| e.to_string())?
        .ok_or_else(|| ValidationError::EmptyDuration.to_string())
}

/// clap `value_parser` 어댑터: 색상 수.
pub fn parse_colors_arg(raw: &str) -> Result<u32, String> {
    validate_tui_colors(Some(raw))
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Invalid value: {raw}"))
}

/// clap `value_parser` 어댑터: 인스턴스 URL.
pub fn parse_instance_arg(raw: &str) -> Result<String, String> {
    validate_instance(Some(raw)).ok_or_else(|| "Please specify an instance.".to_string())
}

//! 명령 실행 옵션 값 객체.

/// 모든 명령에 공통으로 적용되는 전역 옵션(CLI 값이 설정 파일보다 우선).
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// `Accept-Language`로 보낼 두 글자 언어 코드
    pub language: Option<String>,
    /// HTTP 타임아웃(초)
    pub timeout_secs: Option<u64>,
    /// 터미널 색상 수(1이면 단색)
    pub colors: Option<u32>,
    pub no_color: bool,
}

/// 읽기 전용 API 명령.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadCommand {
    Whoami { json: bool },
    Whois { account: String, json: bool },
    Instance { instance_url: Option<String>, json: bool },
    Search { query: String, resolve: bool, json: bool },
    Status { status_id: String, json: bool },
    Thread { status_id: String, json: bool },
}

/// 텍스트 출력 형식(너비/색상 사용 여부).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub width: usize,
    pub color: bool,
}

#[cfg(test)]
impl DisplayOptions {
    pub fn plain(width: usize) -> Self {
        Self {
            width,
            color: false,
        }
    }
}

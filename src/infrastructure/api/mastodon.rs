//! Mastodon 호환 API 클라이언트 구현.

use anyhow::{Context, Result};
use async_trait::async_trait;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};

use super::ApiError;
use crate::application::config::ApiSession;
use crate::application::ports::ApiGateway;

const USER_AGENT: &str = concat!("fedicli/", env!("CARGO_PKG_VERSION"));

pub struct MastodonClient {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl MastodonClient {
    /// 세션의 타임아웃/언어 헤더를 적용한 클라이언트를 생성한다.
    pub fn new(session: &ApiSession) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(language) = &session.language {
            let value = HeaderValue::from_str(language)
                .with_context(|| format!("invalid language header value: {language}"))?;
            headers.insert(ACCEPT_LANGUAGE, value);
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(session.timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: session.base_url.trim_end_matches('/').to_string(),
            access_token: session.access_token.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn status_endpoint(&self, status_id: &str, suffix: &str) -> String {
        let id = utf8_percent_encode(status_id, NON_ALPHANUMERIC);
        self.endpoint(&format!("/api/v1/statuses/{id}{suffix}"))
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        let req = self.client.request(method, url);
        if let Some(token) = &self.access_token {
            req.bearer_auth(token)
        } else {
            req
        }
    }

    /// 요청을 보내고 2xx 본문을 반환한다. 실패 응답은 `ApiError`로 변환한다.
    async fn send(&self, req: RequestBuilder, what: &str) -> Result<String> {
        let resp = req
            .send()
            .await
            .with_context(|| format!("api: failed to {what}"))?;

        let status = resp.status();
        tracing::debug!(%status, url = %resp.url(), "api response");

        let body = resp
            .text()
            .await
            .with_context(|| format!("api: failed to read {what} body"))?;

        if !status.is_success() {
            return Err(ApiError::from_response(status, &body))
                .with_context(|| format!("api: failed to {what}"));
        }

        Ok(body)
    }
}

#[async_trait]
impl ApiGateway for MastodonClient {
    async fn verify_credentials(&self) -> Result<String> {
        let req = self.request(
            Method::GET,
            self.endpoint("/api/v1/accounts/verify_credentials"),
        );
        self.send(req, "verify credentials").await
    }

    async fn search(&self, query: &str, resolve: bool, kind: Option<&str>) -> Result<String> {
        let mut params = vec![("q", query), ("resolve", if resolve { "true" } else { "false" })];
        if let Some(kind) = kind {
            params.push(("type", kind));
        }

        let req = self
            .request(Method::GET, self.endpoint("/api/v2/search"))
            .query(&params);
        self.send(req, "search").await
    }

    async fn fetch_status(&self, status_id: &str) -> Result<String> {
        let req = self.request(Method::GET, self.status_endpoint(status_id, ""));
        self.send(req, "fetch status").await
    }

    async fn status_context(&self, status_id: &str) -> Result<String> {
        let req = self.request(Method::GET, self.status_endpoint(status_id, "/context"));
        self.send(req, "fetch status context").await
    }

    async fn instance(&self) -> Result<String> {
        let req = self.request(Method::GET, self.endpoint("/api/v1/instance"));
        self.send(req, "fetch instance").await
    }
}

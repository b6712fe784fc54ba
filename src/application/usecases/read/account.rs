//! 계정 조회(whoami/whois) 단계.

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::application::ports::ApiGateway;
use crate::application::usecases::read::ReadUseCase;
use crate::application::usecases::read::context::{ReadContext, connect};
use crate::domain::entities::{Account, SearchResults};
use crate::domain::lookup::{find_matching_account, normalize_account_name};

/// 로그인된 계정 정보를 출력한다.
pub(super) async fn whoami(use_case: &ReadUseCase<'_>, ctx: &ReadContext, json: bool) -> Result<()> {
    let session = ctx.session(None)?;
    if session.access_token.is_none() {
        bail!(
            "not logged in; set account.access_token or account.access_token_env in the config file, or FEDICLI_ACCESS_TOKEN"
        );
    }

    let gateway = connect(use_case, &session)?;
    let body = gateway.verify_credentials().await?;

    if json {
        use_case.console.line(&body);
        return Ok(());
    }

    let account: Account = serde_json::from_str(&body).context("invalid account JSON")?;
    use_case.emit(use_case.renderer.account(&account, &ctx.display));
    Ok(())
}

/// 이름으로 계정을 찾아 출력한다.
/// 검색 응답에서 계정을 골라내야 하므로 JSON 모드도 해당 객체만 재직렬화한다.
pub(super) async fn whois(
    use_case: &ReadUseCase<'_>,
    ctx: &ReadContext,
    name: &str,
    json: bool,
) -> Result<()> {
    let session = ctx.session(None)?;
    let gateway = connect(use_case, &session)?;
    let local_domain = ctx.config.instance_domain();
    let found = find_account(gateway.as_ref(), name, local_domain.as_deref()).await?;

    if json {
        use_case.console.line(&serde_json::to_string(&found)?);
        return Ok(());
    }

    let account: Account = serde_json::from_value(found).context("invalid account JSON")?;
    use_case.emit(use_case.renderer.account(&account, &ctx.display));
    Ok(())
}

/// 원격 계정까지 resolve하는 계정 검색으로 정확히 일치하는 계정을 찾는다.
pub(super) async fn find_account(
    gateway: &dyn ApiGateway,
    name: &str,
    local_domain: Option<&str>,
) -> Result<Value> {
    if name.is_empty() {
        bail!("Empty account name given");
    }

    let normalized = normalize_account_name(name, local_domain);
    let body = gateway.search(name, true, Some("accounts")).await?;
    let results: SearchResults = serde_json::from_str(&body).context("invalid search JSON")?;

    find_matching_account(&results.accounts, &normalized)
        .cloned()
        .context("Account not found")
}

//! 인스턴스 정보 조회 단계.

use anyhow::{Context, Result, bail};

use crate::application::usecases::read::ReadUseCase;
use crate::application::usecases::read::context::{ReadContext, connect};
use crate::domain::entities::Instance;

pub(super) async fn instance(
    use_case: &ReadUseCase<'_>,
    ctx: &ReadContext,
    instance_url: Option<String>,
    json: bool,
) -> Result<()> {
    let Some(base_url) = instance_url.or_else(|| ctx.config.instance_url()) else {
        bail!("Please specify an instance.");
    };

    // 인스턴스 정보는 공개 API이므로 토큰 없이 호출한다.
    let mut session = ctx.session(Some(base_url.clone()))?;
    session.access_token = None;
    let gateway = connect(use_case, &session)?;

    let body = match gateway.instance().await {
        Ok(body) => body,
        Err(err) => {
            tracing::debug!(error = %format!("{err:#}"), %base_url, "instance lookup failed");
            bail!(
                "Instance not found at {base_url}.\nThe given domain probably does not host a Mastodon instance."
            );
        }
    };

    if json {
        use_case.console.line(&body);
        return Ok(());
    }

    let instance: Instance = serde_json::from_str(&body).context("invalid instance JSON")?;
    use_case.emit(use_case.renderer.instance(&instance, &ctx.display));
    Ok(())
}

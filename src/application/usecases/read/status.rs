//! 단일 글/스레드 조회 단계.

use anyhow::{Context, Result};

use crate::application::usecases::read::ReadUseCase;
use crate::application::usecases::read::context::{ReadContext, connect};
use crate::domain::entities::{Status, StatusContext};

pub(super) async fn status(
    use_case: &ReadUseCase<'_>,
    ctx: &ReadContext,
    status_id: &str,
    json: bool,
) -> Result<()> {
    let session = ctx.session(None)?;
    let gateway = connect(use_case, &session)?;
    let body = gateway.fetch_status(status_id).await?;

    if json {
        use_case.console.line(&body);
        return Ok(());
    }

    let status: Status = serde_json::from_str(&body).context("invalid status JSON")?;
    use_case.emit(use_case.renderer.status(&status, &ctx.display));
    Ok(())
}

/// 조상 → 대상 글 → 후손 순서로 스레드를 출력한다.
/// JSON 모드는 context 응답만 그대로 출력한다.
pub(super) async fn thread(
    use_case: &ReadUseCase<'_>,
    ctx: &ReadContext,
    status_id: &str,
    json: bool,
) -> Result<()> {
    let session = ctx.session(None)?;
    let gateway = connect(use_case, &session)?;

    if json {
        let body = gateway.status_context(status_id).await?;
        use_case.console.line(&body);
        return Ok(());
    }

    let (context_body, status_body) = futures::try_join!(
        gateway.status_context(status_id),
        gateway.fetch_status(status_id)
    )?;

    let context: StatusContext =
        serde_json::from_str(&context_body).context("invalid context JSON")?;
    let status: Status = serde_json::from_str(&status_body).context("invalid status JSON")?;

    let StatusContext {
        ancestors,
        descendants,
    } = context;
    let statuses: Vec<Status> = ancestors
        .into_iter()
        .chain(std::iter::once(status))
        .chain(descendants)
        .collect();

    use_case.emit(use_case.renderer.timeline(&statuses, &ctx.display));
    Ok(())
}

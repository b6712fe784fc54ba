//! 계정/해시태그 검색 단계.

use anyhow::{Context, Result};

use crate::application::usecases::read::ReadUseCase;
use crate::application::usecases::read::context::{ReadContext, connect};
use crate::domain::entities::SearchResults;

pub(super) async fn search(
    use_case: &ReadUseCase<'_>,
    ctx: &ReadContext,
    query: &str,
    resolve: bool,
    json: bool,
) -> Result<()> {
    let session = ctx.session(None)?;
    let gateway = connect(use_case, &session)?;
    let body = gateway.search(query, resolve, None).await?;

    if json {
        use_case.console.line(&body);
        return Ok(());
    }

    let results: SearchResults = serde_json::from_str(&body).context("invalid search JSON")?;
    use_case.emit(use_case.renderer.search_results(&results, &ctx.display));
    Ok(())
}

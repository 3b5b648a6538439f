use crate::context::AppContext;
use crate::error::AppResult;

pub async fn run(ctx: &AppContext) -> AppResult<()> {
    let status = ctx.client.health().await?;

    let text = match status.timestamp {
        Some(timestamp) => format!("status: {} (timestamp {timestamp:.0})", status.status),
        None => format!("status: {}", status.status),
    };
    ctx.output.emit(&text, &status)
}

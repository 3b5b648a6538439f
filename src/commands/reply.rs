use std::fs;
use std::io::{self, Read};

use crate::api::models::ReplyRequest;
use crate::cli::ReplyArgs;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::output::{OutputMode, json};

pub async fn run(ctx: &AppContext, args: ReplyArgs) -> AppResult<()> {
    let request = build_reply_request(args)?;
    let reply = ctx.client.generate_reply(&request).await?;

    match ctx.output.mode() {
        OutputMode::Json => json::print(&reply),
        OutputMode::Text => {
            println!("tone: {}", reply.tone);
            println!();
            println!("{}", reply.generated_response);
            Ok(())
        }
    }
}

fn build_reply_request(args: ReplyArgs) -> AppResult<ReplyRequest> {
    let body = read_body(&args)?;
    Ok(ReplyRequest::new(args.subject, body, args.tone.as_deref()))
}

fn read_body(args: &ReplyArgs) -> AppResult<String> {
    let mut selected = 0;
    if args.body.is_some() {
        selected += 1;
    }
    if args.body_file.is_some() {
        selected += 1;
    }
    if args.stdin {
        selected += 1;
    }

    if selected == 0 {
        return Err(AppError::InvalidInput(
            "missing body source; pass one of --body, --body-file, or --stdin".to_string(),
        ));
    }

    if selected > 1 {
        return Err(AppError::InvalidInput(
            "pass only one body source: --body, --body-file, or --stdin".to_string(),
        ));
    }

    if let Some(body) = &args.body {
        return Ok(body.clone());
    }

    if let Some(path) = &args.body_file {
        return Ok(fs::read_to_string(path)?);
    }

    let mut body = String::new();
    io::stdin().read_to_string(&mut body)?;
    Ok(body)
}

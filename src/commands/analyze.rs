use std::fs;
use std::io::{self, Read};

use chrono::{SecondsFormat, Utc};

use crate::api::models::AnalysisRequest;
use crate::cli::AnalyzeArgs;
use crate::commands::render;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};

const NO_SUBJECT_PLACEHOLDER: &str = "(No subject)";
const NO_BODY_PLACEHOLDER: &str = "(No body)";
const UNKNOWN_SENDER_PLACEHOLDER: &str = "unknown@example.com";
const DEFAULT_RECIPIENT: &str = "you@company.com";

pub async fn run(ctx: &AppContext, args: AnalyzeArgs) -> AppResult<()> {
    let request = build_analysis_request(args)?;
    let analysis = ctx.client.analyze(&request).await?;

    let lines = render::analysis_lines(&analysis);
    ctx.output.emit_lines(&lines, &analysis)
}

fn build_analysis_request(args: AnalyzeArgs) -> AppResult<AnalysisRequest> {
    let body = read_body(&args)?;

    Ok(AnalysisRequest {
        subject: or_placeholder(args.subject, NO_SUBJECT_PLACEHOLDER),
        sender: or_placeholder(args.sender, UNKNOWN_SENDER_PLACEHOLDER),
        recipient: or_placeholder(args.recipient, DEFAULT_RECIPIENT),
        body: or_placeholder(body, NO_BODY_PLACEHOLDER),
        received_at: args
            .received_at
            .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
    })
}

fn or_placeholder(value: Option<String>, placeholder: &str) -> String {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| placeholder.to_string())
}

fn read_body(args: &AnalyzeArgs) -> AppResult<Option<String>> {
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

    if selected > 1 {
        return Err(AppError::InvalidInput(
            "pass only one body source: --body, --body-file, or --stdin".to_string(),
        ));
    }

    if let Some(body) = &args.body {
        return Ok(Some(body.clone()));
    }

    if let Some(path) = &args.body_file {
        return Ok(Some(fs::read_to_string(path)?));
    }

    if args.stdin {
        let mut body = String::new();
        io::stdin().read_to_string(&mut body)?;
        return Ok(Some(body));
    }

    Ok(None)
}

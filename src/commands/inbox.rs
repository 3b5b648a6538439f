use std::io::{self, BufRead, Write};

use crate::api::models::InboxFetchRequest;
use crate::cli::InboxArgs;
use crate::commands::render;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::output::{OutputMode, json};

pub async fn run(ctx: &AppContext, args: InboxArgs) -> AppResult<()> {
    validate_limit(args.limit)?;

    let email = args.email.trim().to_string();
    if email.is_empty() {
        return Err(AppError::InvalidInput("--email must not be empty".to_string()));
    }

    let password = resolve_password(args.password)?;
    let request = InboxFetchRequest::new(email, password, args.limit);
    let outcome = ctx.client.fetch_inbox(&request).await?;

    match ctx.output.mode() {
        OutputMode::Json => json::print(&outcome),
        OutputMode::Text => {
            if outcome.results.is_empty() {
                println!("0 messages");
                return Ok(());
            }

            for (index, analysis) in outcome.results.iter().enumerate() {
                println!("{}.", index + 1);
                for line in render::analysis_lines(analysis) {
                    println!("   {line}");
                }
                if index + 1 < outcome.results.len() {
                    println!();
                }
            }
            println!();
            println!("{} messages analyzed", outcome.total);
            Ok(())
        }
    }
}

fn validate_limit(limit: Option<u32>) -> AppResult<()> {
    if limit == Some(0) {
        return Err(AppError::InvalidInput(
            "--limit must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

fn resolve_password(flag: Option<String>) -> AppResult<String> {
    if let Some(password) = flag {
        return Ok(password);
    }

    eprint!("app password: ");
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        return Err(AppError::InvalidInput(
            "password must not be empty; pass --password or enter one at the prompt".to_string(),
        ));
    }

    Ok(password)
}

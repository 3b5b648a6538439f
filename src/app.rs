use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub async fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        api_url,
        json,
        verbose,
        command,
    } = cli;

    let ctx = AppContext::bootstrap(api_url, json, verbose)?;

    match command {
        Command::Analyze(args) => commands::analyze::run(&ctx, args).await,
        Command::Inbox(args) => commands::inbox::run(&ctx, args).await,
        Command::Reply(args) => commands::reply::run(&ctx, args).await,
        Command::Health => commands::health::run(&ctx).await,
    }
}

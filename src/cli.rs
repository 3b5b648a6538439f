use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "mailprio",
    version,
    about = "Command line client for the email prioritizer API"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Backend base URL (overrides MAILPRIO_API_URL)"
    )]
    pub api_url: Option<String>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Analyze(AnalyzeArgs),
    Inbox(InboxArgs),
    Reply(ReplyArgs),
    Health,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    #[arg(long, visible_alias = "subj", help = "Email subject")]
    pub subject: Option<String>,
    #[arg(long, help = "Sender address")]
    pub sender: Option<String>,
    #[arg(long, help = "Recipient address")]
    pub recipient: Option<String>,
    #[arg(long, help = "Inline body text")]
    pub body: Option<String>,
    #[arg(long, help = "Read body from file")]
    pub body_file: Option<PathBuf>,
    #[arg(long, help = "Read body from stdin")]
    pub stdin: bool,
    #[arg(long, help = "Received timestamp (RFC 3339), defaults to now")]
    pub received_at: Option<String>,
}

#[derive(Debug, Args)]
pub struct InboxArgs {
    #[arg(long, help = "Inbox address to connect as")]
    pub email: String,
    #[arg(long, help = "App password (prompted on stdin when omitted)")]
    pub password: Option<String>,
    #[arg(long, help = "Maximum messages to fetch and analyze")]
    pub limit: Option<u32>,
}

#[derive(Debug, Args)]
pub struct ReplyArgs {
    #[arg(long, visible_alias = "subj", help = "Subject of the email to answer")]
    pub subject: String,
    #[arg(long, help = "Inline body text")]
    pub body: Option<String>,
    #[arg(long, help = "Read body from file")]
    pub body_file: Option<PathBuf>,
    #[arg(long, help = "Read body from stdin")]
    pub stdin: bool,
    #[arg(long, help = "Tone of the generated reply")]
    pub tone: Option<String>,
}

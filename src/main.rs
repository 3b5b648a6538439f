use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = mailprio::cli::Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = mailprio::run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

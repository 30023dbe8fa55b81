use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use ghtitles::{create_sink, Config, ExportConfig, Exporter, GitHubClient, Progress};

#[derive(Parser, Debug)]
#[command(name = "ghtitles")]
#[command(version = "0.1.0")]
#[command(about = "Export the number and title of every issue, pull request and discussion in a GitHub repository")]
struct Args {
    /// Repository owner (user or organization)
    owner: String,

    /// Repository name
    repo: String,

    /// File holding a personal access token, sent verbatim
    token_file: PathBuf,

    /// Output file, or `-`/`stdout` for standard output
    output: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; stdout is reserved for records
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("ghtitles=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = match usage_or_args(Args::try_parse()) {
        Ok(args) => args,
        Err(usage) => {
            println!("{}", usage);
            std::process::exit(1);
        }
    };

    let config = Config::from_token_file(&args.token_file)?;
    let github = GitHubClient::new(&config)?;

    // Previous output is replaced before any request is made
    let mut sink = create_sink(&args.output)?;

    let exporter = Exporter::new(github, ExportConfig::from(&config), Progress::new());
    let result = exporter
        .run(&args.owner, &args.repo, sink.as_mut())
        .await?;

    if result.failed_pages > 0 {
        eprintln!(
            "Wrote {} records to {} ({} issue pages failed)",
            result.record_count, result.written_to, result.failed_pages
        );
    } else {
        eprintln!("Wrote {} records to {}", result.record_count, result.written_to);
    }

    Ok(())
}

/// Returns the parsed arguments, or the usage line for a malformed
/// invocation. `--help` and `--version` exit through clap.
fn usage_or_args(parsed: Result<Args, clap::Error>) -> Result<Args, String> {
    match parsed {
        Ok(args) => Ok(args),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => Err(Args::command().render_usage().to_string()),
    }
}

use anyhow::Result;
use backlog_cacoo::card::{CardBuilder, Classification};
use backlog_cacoo::cli::{Cli, Commands, IssueArgs};
use backlog_cacoo::clipboard::{PLAIN_KIND, SHAPE_KIND, SimulatedClipboard, SystemClipboard};
use backlog_cacoo::config::Config;
use backlog_cacoo::copy::copy_issue;
use backlog_cacoo::issue::load_issue;
use backlog_cacoo::notify::ConsoleNotifier;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(layout) = cli.layout {
        config.card.layout = layout;
    }

    match cli.command {
        Commands::Copy { issue, dry_run } => {
            handle_copy(&config, issue, dry_run)?;
        }
        Commands::Build {
            issue,
            plain,
            pretty,
        } => {
            handle_build(&config, issue, plain, pretty)?;
        }
        Commands::Color {
            issue_type,
            priority,
        } => {
            handle_color(&config.card.classification, &issue_type, &priority);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .init();
}

fn handle_copy(config: &Config, args: IssueArgs, dry_run: bool) -> Result<()> {
    let issue = load_issue(args.into_source())?;
    let builder = CardBuilder::from_config(&config.card);
    let notifier = ConsoleNotifier;

    if dry_run {
        let mut host = SimulatedClipboard::new();
        copy_issue(&issue, &builder, &mut host, &notifier, &config.notify)?;

        if let Some(pasted) = host.paste() {
            println!("{}: {}", SHAPE_KIND, pasted.get_data(SHAPE_KIND).unwrap_or_default());
            println!("{}: {}", PLAIN_KIND, pasted.get_data(PLAIN_KIND).unwrap_or_default());
        }
        return Ok(());
    }

    let mut host = SystemClipboard::new().with_hold(config.clipboard.hold());
    copy_issue(&issue, &builder, &mut host, &notifier, &config.notify)?;
    host.serve();

    Ok(())
}

fn handle_build(config: &Config, args: IssueArgs, plain: bool, pretty: bool) -> Result<()> {
    let issue = load_issue(args.into_source())?;
    let builder = CardBuilder::from_config(&config.card);

    if plain {
        println!("{}", issue.plain_text());
    } else if pretty {
        println!("{}", serde_json::to_string_pretty(&builder.build_document(&issue))?);
    } else {
        println!("{}", builder.build(&issue).structured);
    }

    Ok(())
}

fn handle_color(classification: &Classification, issue_type: &str, priority: &str) {
    println!("{}", classification.resolve(issue_type, priority));
}

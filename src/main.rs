use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use semver::Version;
use tracing_subscriber::EnvFilter;

use changes::cli::{self, AddWorkflowArgs, QueryWorkflowArgs};
use changes::config;
use changes::ui;

#[derive(Parser)]
#[command(
    name = "changes",
    version,
    about = "Track pending and released changelog entries"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Query released versions
    Query {
        #[arg(long, num_args = 1.., help = "Return exactly these versions")]
        versions: Vec<Version>,

        #[arg(long, help = "Also return the latest release")]
        latest: bool,

        #[arg(
            long,
            help = "Version range: A..=B, A..B, A.., ..B, ..=B or A..=latest"
        )]
        range: Option<String>,

        #[arg(long, help = "Print results as JSON")]
        json: bool,
    },
    /// Add a new changelog entry
    Add {
        #[arg(short, long, num_args = 1.., help = "One or more tags for the entry")]
        tags: Vec<String>,

        #[arg(short, long, help = "Description of the change")]
        description: Option<String>,

        #[arg(
            short,
            long,
            help = "Release to add the entry to (defaults to Unreleased)"
        )]
        release: Option<Version>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CHANGES_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let loaded = config::load_config(args.config.as_deref())?;

    match args.command {
        Command::Query {
            versions,
            latest,
            range,
            json,
        } => {
            let workflow_args = QueryWorkflowArgs {
                versions,
                latest,
                range,
            };
            let items = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?
                .block_on(cli::run_query(&workflow_args, &loaded))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                ui::display_releases(&items);
            }
        }
        Command::Add {
            tags,
            description,
            release,
        } => {
            let workflow_args = AddWorkflowArgs {
                tags,
                description,
                release,
            };
            let path = cli::run_add(&workflow_args, &loaded)?;
            ui::display_success(&format!("Added entry {}", path.display()));
        }
    }

    Ok(())
}

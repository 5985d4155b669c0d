/*
[INPUT]:  Parsed CLI arguments and configuration
[OUTPUT]: Task board operations with JSON or interactive output
[POS]:    CLI layer - command dispatch
[UPDATE]: When adding subcommands or changing output format
*/

mod init;
mod interactive;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use taskdesk::{ActiveTab, AssignError, Assignee, RefreshOutcome, TaskBoard, TaskdeskConfig, nav_items};

#[derive(Parser, Debug)]
#[command(name = "taskdesk", version, about = "Task list and assignment client")]
pub struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    pub log_level: String,
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a starter configuration file
    Init {
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Load and validate configuration, then exit
    Check,
    /// Print one tab's task list as JSON
    Tasks {
        #[arg(long, default_value = "my")]
        tab: ActiveTab,
    },
    /// Assign a new task, then print the refreshed list as JSON
    Assign {
        #[arg(long, default_value = "")]
        task: String,
        #[arg(long = "document-type", default_value = "")]
        document_type: String,
        #[arg(long = "assignee-id")]
        assignee_id: Option<i64>,
        #[arg(long = "assignee-name", default_value = "")]
        assignee_name: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Tab shown while assigning; it is refreshed after submit
        #[arg(long, default_value = "my")]
        tab: ActiveTab,
    },
    /// Print the navigation menu as JSON
    Nav,
}

pub async fn run(args: Cli) -> Result<()> {
    match args.command {
        Some(Command::Init { output }) => {
            let output = output
                .or_else(TaskdeskConfig::default_path)
                .context("no config directory found; pass --output")?;
            init::run_init(output)
        }
        Some(Command::Nav) => print_json(&nav_items()),
        Some(Command::Check) => {
            let config = load_config(args.config_path)?;
            info!(
                base_url = %config.server.base_url,
                user_id = ?config.identity.user_id,
                "configuration validated"
            );
            println!("configuration OK");
            Ok(())
        }
        Some(Command::Tasks { tab }) => {
            let board = build_board(&load_config(args.config_path)?)?;
            show_tab(&board, tab).await?;
            print_json(&board.view().await.tasks)
        }
        Some(Command::Assign {
            task,
            document_type,
            assignee_id,
            assignee_name,
            description,
            tab,
        }) => {
            let board = build_board(&load_config(args.config_path)?)?;
            if board.select_tab(tab).await == Some(RefreshOutcome::Failed) {
                warn!(%tab, "could not load task list before assigning");
            }

            board.open_assignment().await;
            board.set_task(task).await;
            board.set_document_type(document_type).await;
            board
                .set_assignee(assignee_id.map(|id| Assignee::new(id, assignee_name)))
                .await;
            board.set_description(description).await;

            match board.submit_assignment().await {
                Ok(()) => print_json(&board.view().await.tasks),
                Err(AssignError::Invalid(err)) => bail!("{err}"),
                Err(err) => Err(err).context("assign task"),
            }
        }
        None => {
            let board = build_board(&load_config(args.config_path)?)?;
            interactive::run_interactive(board).await
        }
    }
}

/// Bring `tab` on screen, fetching it exactly once
pub(crate) async fn show_tab(board: &TaskBoard, tab: ActiveTab) -> Result<()> {
    let outcome = match board.select_tab(tab).await {
        Some(outcome) => outcome,
        None => board.mount().await,
    };
    if outcome == RefreshOutcome::Failed {
        bail!("failed to fetch {tab} list; see logs for details");
    }
    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<TaskdeskConfig> {
    let path = path
        .or_else(TaskdeskConfig::default_path)
        .context("no config directory found; pass --config")?;
    TaskdeskConfig::from_file(&path).context("load config")
}

fn build_board(config: &TaskdeskConfig) -> Result<TaskBoard> {
    let client = config.build_client()?;
    Ok(TaskBoard::new(Arc::new(client), config.identity.clone()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{json}");
    Ok(())
}

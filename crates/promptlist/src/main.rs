mod commands;
mod config;
mod select;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use promptlist_logging::{init_tracing, LogFormat};
use promptlist_store::PromptStore;

use crate::commands::{CommandContext, UpsertArgs};
use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(
    name = "promptlist",
    about = "Store, recall and randomly pick named prompt pairs",
    version,
    author
)]
struct Cli {
    /// Base path holding the Prompt/ directory
    #[arg(long, global = true)]
    base_path: Option<PathBuf>,

    /// Config file (default: <config_dir>/promptlist/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Tracing level (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value = "pretty", global = true)]
    log_format: LogFormatChoice,

    /// Print results as JSON
    #[arg(long, global = true)]
    json_output: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the available list files, "New List" first
    Lists,

    /// Show the prompt names of a list
    Names {
        /// List file, or "New List" to create one
        #[arg(short, long)]
        list: Option<String>,

        /// File name for a list created through "New List"
        #[arg(long)]
        new_list_name: Option<String>,
    },

    /// Add a prompt, or read back / update an existing one
    Upsert {
        /// List file, or "New List" to create one
        #[arg(short, long)]
        list: Option<String>,

        /// File name for a list created through "New List"
        #[arg(long)]
        new_list_name: Option<String>,

        /// Prompt name
        #[arg(short, long)]
        name: String,

        /// Positive prompt (required for new prompts)
        #[arg(short, long, default_value = "")]
        positive: String,

        /// Negative prompt
        #[arg(short = 'N', long, default_value = "")]
        negative: String,

        /// Update the prompt if it already exists
        #[arg(short, long)]
        overwrite: bool,

        /// Print the resulting prompt to the console
        #[arg(long)]
        console_log: bool,
    },

    /// Pick a random prompt from a list
    Random {
        /// List file, or "New List" to create one
        #[arg(short, long)]
        list: Option<String>,

        /// File name for a list created through "New List"
        #[arg(long)]
        new_list_name: Option<String>,

        /// Print the picked prompt to the console
        #[arg(long)]
        console_log: bool,
    },

    /// Describe the registered nodes
    Nodes,

    /// Run a registered node with host-style parameters
    Invoke {
        /// Node class name, e.g. ComfyUI_Prompt_JSON
        class_name: String,

        /// Parameters as a JSON object
        #[arg(long, default_value = "{}")]
        params: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatChoice {
    Pretty,
    Json,
    Compact,
}

impl From<LogFormatChoice> for LogFormat {
    fn from(choice: LogFormatChoice) -> Self {
        match choice {
            LogFormatChoice::Pretty => LogFormat::Pretty,
            LogFormatChoice::Json => LogFormat::Json,
            LogFormatChoice::Compact => LogFormat::Compact,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?
            .with_context(|| format!("Config file not found: {}", path.display()))?,
        None => AppConfig::load_default()?,
    };

    init_tracing(
        &config.log_level(cli.log_level.as_deref()),
        cli.log_format.into(),
    );

    let base_path = config.base_path(cli.base_path.clone())?;
    let store = PromptStore::open(&base_path)
        .with_context(|| format!("Failed to open prompt store at {}", base_path.display()))?;
    tracing::debug!(dir = %store.prompt_dir().display(), "Using prompt store");

    let ctx = CommandContext {
        store,
        json_output: cli.json_output,
        console_log: config.console_log(false),
    };

    match cli.command {
        Commands::Lists => commands::handle_lists(&ctx),
        Commands::Names {
            list,
            new_list_name,
        } => commands::handle_names(&ctx, list.as_deref(), new_list_name.as_deref()),
        Commands::Upsert {
            list,
            new_list_name,
            name,
            positive,
            negative,
            overwrite,
            console_log,
        } => commands::handle_upsert(
            &ctx,
            UpsertArgs {
                list,
                new_list_name,
                name,
                positive,
                negative,
                overwrite,
                console_log,
            },
        ),
        Commands::Random {
            list,
            new_list_name,
            console_log,
        } => commands::handle_random(
            &ctx,
            list.as_deref(),
            new_list_name.as_deref(),
            console_log,
        ),
        Commands::Nodes => commands::handle_nodes(&ctx),
        Commands::Invoke { class_name, params } => {
            commands::handle_invoke(&ctx, &class_name, &params)
        }
    }
}

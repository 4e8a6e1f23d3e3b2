mod client;
mod output;

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;

use client::{RunPayload, TextflowClient};

#[derive(Parser)]
#[command(name = "textflow")]
#[command(version, about = "Textflow Command Line Tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Textflow server URL
    #[arg(
        long,
        env = "TEXTFLOW_SERVER_URL",
        default_value = "http://localhost:8090",
        global = true
    )]
    server_url: String,

    /// Emit raw JSON responses
    #[arg(short, long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available step types
    Steps,

    /// List the built-in workflow templates
    Templates,

    /// Run a pipeline against some text
    ///
    /// Examples:
    ///     textflow run --steps CLEAN_TEXT,SUMMARIZE --text "Some long text..."
    ///     textflow run --template "Quick Summary" --file notes.txt
    #[command(verbatim_doc_comment)]
    Run {
        /// Comma-separated step types, 2 to 4 of them
        #[arg(short, long, value_delimiter = ',', conflicts_with = "template")]
        steps: Vec<String>,

        /// Use the steps of a built-in template
        #[arg(short, long)]
        template: Option<String>,

        /// Text to process
        #[arg(long, conflicts_with = "file", required_unless_present = "file")]
        text: Option<String>,

        /// Read the text to process from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Display name for the run
        #[arg(short, long)]
        name: Option<String>,

        /// Id of a saved workflow this run belongs to
        #[arg(long)]
        workflow_id: Option<String>,
    },

    /// Show recent runs
    History {
        /// Number of runs to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show one run with every step output
    Show {
        /// Run id
        id: String,
    },

    /// Manage saved workflows
    Workflows {
        #[command(subcommand)]
        command: WorkflowCommands,
    },

    /// Check server and language model health
    Health,
}

#[derive(Subcommand)]
enum WorkflowCommands {
    /// List saved workflows
    List,

    /// Save a workflow
    Create {
        /// Workflow name
        #[arg(short, long)]
        name: String,

        /// Comma-separated step types, 2 to 4 of them
        #[arg(short, long, value_delimiter = ',', required = true)]
        steps: Vec<String>,
    },

    /// Delete a saved workflow
    Delete {
        /// Workflow id
        id: String,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print(value: &Value, json_only: bool, render: fn(&Value) -> String) -> Result<()> {
    if json_only {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", render(value));
    }
    Ok(())
}

fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    match (text, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read input file: {:?}", path)),
        (None, None) => bail!("Provide --text or --file"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let client = TextflowClient::new(&cli.server_url);
    let json = cli.json;

    match cli.command {
        Commands::Steps => print(&client.steps().await?, json, output::format_steps)?,
        Commands::Templates => {
            print(&client.templates().await?, json, output::format_templates)?
        }
        Commands::Run {
            steps,
            template,
            text,
            file,
            name,
            workflow_id,
        } => {
            let input_text = read_input(text, file)?;

            let (steps, name) = match template {
                Some(template) => {
                    let (template_name, steps) = client.template_steps(&template).await?;
                    (steps, name.or(Some(template_name)))
                }
                None if steps.is_empty() => bail!("Provide --steps or --template"),
                None => (steps, name),
            };

            let run = client
                .run(&RunPayload {
                    workflow_name: name,
                    workflow_id,
                    steps,
                    input_text,
                })
                .await?;

            print(&run, json, output::format_run)?;
            if run["status"] == "error" {
                std::process::exit(1);
            }
        }
        Commands::History { limit } => {
            print(&client.history(limit).await?, json, output::format_history)?
        }
        Commands::Show { id } => print(&client.run_detail(&id).await?, json, output::format_run)?,
        Commands::Workflows { command } => match command {
            WorkflowCommands::List => {
                print(&client.workflows().await?, json, output::format_workflows)?
            }
            WorkflowCommands::Create { name, steps } => {
                let workflow = client.create_workflow(&name, &steps).await?;
                print(&workflow, json, output::format_workflow)?
            }
            WorkflowCommands::Delete { id } => {
                client.delete_workflow(&id).await?;
                if json {
                    println!("{}", serde_json::json!({ "success": true }));
                } else {
                    println!("Deleted workflow {}", id);
                }
            }
        },
        Commands::Health => {
            let health = client.health().await?;
            print(&health, json, output::format_health)?;
            if health["status"] != "ok" {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use graphgrid_sdk::config::loader::load_sdk_config;
use graphgrid_sdk::utils::logging::{self, LogLevel};
use graphgrid_sdk::GraphGridSdk;
use serde::Serialize;
use tracing::info;
use tracing::instrument::WithSubscriber;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML config; without it credentials are bootstrapped from the
    /// mounted properties file
    #[arg(short, long, env = "GRAPHGRID_SDK_CONFIG")]
    config: Option<String>,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    /// Print the session metrics after the call
    #[arg(long)]
    metrics: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Round trip against the config service
    TestApi {
        #[arg(long)]
        message: Option<String>,
    },
    /// Fetch the config of a module
    GetData {
        module: String,
        #[arg(long, value_delimiter = ',', default_value = "default")]
        profiles: Vec<String>,
        #[arg(long, default_value = "master")]
        revision: String,
    },
    /// Status of a DAG run
    JobStatus { dag_id: String, dag_run_id: String },
    /// Status of an NMT training run
    NmtStatus { dag_run_id: String },
    /// Active model of an NLP task
    ActiveModel { nlp_task: String },
    /// Promote a trained model
    PromoteModel {
        model_name: String,
        nlp_task: String,
        #[arg(long, default_value = "default")]
        environment: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Load config
    // -------------------------------

    let args = Args::parse();
    // validation errors and the credentials file wait are logged before
    // the configured subscriber exists
    let sdk_config = load_sdk_config(args.config.as_deref().map(Path::new))
        .with_subscriber(logging::bootstrap_subscriber(args.log_level))
        .await?;
    logging::run(Some(&sdk_config), args.log_level);

    // -------------------------------
    // 2. Build the session
    // -------------------------------

    let sdk = GraphGridSdk::new(sdk_config)?;
    info!("SDK ready");

    // -------------------------------
    // 3. Run the call
    // -------------------------------

    match &args.command {
        Command::TestApi { message } => print_json(&sdk.test_api(message.as_deref()).await?)?,
        Command::GetData { module, profiles, revision } => {
            print_json(&sdk.get_data(module, profiles, revision).await?)?
        }
        Command::JobStatus { dag_id, dag_run_id } => print_json(&sdk.job_status(dag_id, dag_run_id).await?)?,
        Command::NmtStatus { dag_run_id } => print_json(&sdk.nmt_status(dag_run_id).await?)?,
        Command::ActiveModel { nlp_task } => print_json(&sdk.get_active_model(nlp_task).await?)?,
        Command::PromoteModel { model_name, nlp_task, environment } => {
            print_json(&sdk.promote_model(model_name, nlp_task, environment).await?)?
        }
    }

    if args.metrics {
        print!("{}", sdk.metrics_text());
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

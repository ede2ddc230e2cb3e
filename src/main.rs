use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::batch::{BatchRunner, BatchReport};
use payroll_engine::config::{ConfigLoader, PayrollConfig};
use payroll_engine::report::ReportWriter;
use payroll_engine::roster;

/// Attendance-based payroll: batch payslips and a working-hours API
#[derive(Parser)]
#[command(name = "payroll-engine", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate payslips, the salary distribution and a summary
    Generate {
        /// JSON file with the employee records
        #[arg(short, long)]
        input: PathBuf,

        /// Output root (overrides the configuration file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to the payroll configuration file
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// Maximum records computed at once (overrides the configuration file)
        #[arg(short = 'w', long)]
        workers: Option<usize>,
    },
    /// Serve the HTTP API
    Serve {
        /// JSON file with weekly timesheets
        #[arg(short, long)]
        timesheets: PathBuf,

        /// Path to the payroll configuration file
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:8080")]
        addr: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        2 => "trace",
        _ => "trace,hyper=debug,tower=debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_target(cli.verbose >= 2)
        .with_thread_ids(cli.verbose >= 3)
        .with_line_number(cli.verbose >= 3)
        .init();

    debug!("payroll-engine started with verbosity level: {}", cli.verbose);

    match cli.command {
        Commands::Generate {
            input,
            output,
            config,
            workers,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(output) = output {
                config.batch.output_dir = output;
            }
            if workers.is_some() {
                config.batch.workers = workers;
            }
            generate(&input, config).await
        }
        Commands::Serve {
            timesheets,
            config,
            addr,
        } => {
            let config = load_config(config.as_deref())?;
            serve(&timesheets, config, addr).await
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<PayrollConfig> {
    match path {
        Some(path) => Ok(ConfigLoader::load(path)?.into_config()),
        None => Ok(PayrollConfig::default()),
    }
}

async fn generate(input: &Path, config: PayrollConfig) -> anyhow::Result<()> {
    let employees = roster::load_employees(input)
        .with_context(|| format!("cannot load employees from {}", input.display()))?;
    println!("Loaded employees: {}", employees.len());

    let writer = ReportWriter::create(&config.batch.output_dir)?;
    let runner = BatchRunner::new(config.rates.clone(), writer, config.batch.worker_count());
    let report = runner.run(employees).await?;

    print_outcome(&report);
    Ok(())
}

fn print_outcome(report: &BatchReport) {
    for rejected in &report.rejected {
        warn!(employee_id = %rejected.employee_id, error = %rejected.error, "Record skipped");
    }
    for failure in &report.failures {
        warn!(artifact = %failure.artifact, error = %failure.error, "Artifact not written");
    }
    println!(
        "Processing complete. Output written to: {}",
        report.output_dir.display()
    );
}

async fn serve(timesheets: &Path, config: PayrollConfig, addr: SocketAddr) -> anyhow::Result<()> {
    let timesheets = roster::load_timesheets_or_empty(timesheets);
    let state = AppState::new(timesheets, config.rates);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("cannot bind {}", addr))?;
    info!(addr = %addr, "Serving payroll API");

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

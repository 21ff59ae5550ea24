use clap::Parser;
use miette::{IntoDiagnostic, Result};
use statement_ledger::application::service::AccountService;
use statement_ledger::config::LedgerConfig;
use statement_ledger::infrastructure::in_memory::InMemoryAccountRepository;
use statement_ledger::interfaces::csv::account_writer::AccountWriter;
use statement_ledger::interfaces::csv::command_reader::CommandReader;
use statement_ledger::interfaces::csv::statement_writer::StatementWriter;
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input commands CSV file
    input: PathBuf,

    /// Minutes east of UTC used to split statements into calendar days.
    /// Defaults to the host's local offset.
    #[arg(long, allow_hyphen_values = true)]
    utc_offset_minutes: Option<i32>,

    /// Print the statement of this identification number instead of the
    /// account summary
    #[arg(long)]
    statement: Option<String>,

    /// Restrict the statement to one calendar day (YYYY-MM-DD)
    #[arg(long, requires = "statement")]
    date: Option<String>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let config = match cli.utc_offset_minutes {
        Some(minutes) => LedgerConfig::with_offset_minutes(minutes).into_diagnostic()?,
        None => LedgerConfig::default(),
    };
    let service = AccountService::new(Box::new(InMemoryAccountRepository::new()), config);

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = CommandReader::new(file);
    let mut processed = 0usize;
    for command_result in reader.commands() {
        match command_result {
            Ok(command) => {
                if let Err(e) = command.execute(&service).await {
                    warn!(
                        identification_number = command.identification_number(),
                        error = %e,
                        "Error processing command"
                    );
                } else {
                    processed += 1;
                }
            }
            Err(e) => {
                warn!(error = %e, "Error reading command");
            }
        }
    }
    info!(processed, "batch finished");

    let stdout = io::stdout();
    match cli.statement {
        Some(identification_number) => {
            let operations = match cli.date {
                Some(date) => {
                    service
                        .get_statement_for_date(&identification_number, &date)
                        .await
                }
                None => service.get_statement(&identification_number).await,
            }
            .into_diagnostic()?;
            StatementWriter::new(stdout.lock())
                .write_operations(&operations)
                .into_diagnostic()?;
        }
        None => {
            let accounts = service.list_accounts().await.into_diagnostic()?;
            AccountWriter::new(stdout.lock())
                .write_accounts(&accounts)
                .into_diagnostic()?;
        }
    }

    Ok(())
}

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use org_chart::model::EmployeeId;
use org_chart::report;
use org_chart::{ChartError, Result};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_tracing()?;

    if !cli.input.exists() {
        return Err(ChartError::MissingInput(cli.input));
    }

    let hierarchy = report::load_hierarchy(&cli.input)?;
    let output = if cli.salary_only {
        let total = report::select_total(&hierarchy, cli.from)?;
        format!("{}\n", report::salary_line(total))
    } else {
        report::render_report(&hierarchy, cli.from)?
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Logs go to stderr so stdout only ever carries the report.
/// Defaults to `warn`; override with `RUST_LOG`.
fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ChartError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Print an org chart and total salary from a JSON list of employees."
)]
struct Cli {
    /// JSON file holding an array of employee records.
    input: PathBuf,

    /// Only report the subtree headed by this employee id.
    #[arg(long, value_name = "ID")]
    from: Option<EmployeeId>,

    /// Print the total salary line without the chart.
    #[arg(long)]
    salary_only: bool,
}

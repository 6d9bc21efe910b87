//! Ditrans CLI - print examples from the ditransitives database
//!
//! ```bash
//! ditrans english                        # every English example, plain text
//! ditrans english 0 4                    # examples 0 and 4 as expex LaTeX
//! ditrans english 0 --style smallcaps    # small-caps glosses
//! ditrans english 0 --explain            # log each gloss rewrite step
//! ```

use clap::{ArgAction, Parser};
use ditrans::config::{parse_log_format, resolve_data_path, resolve_delimiter};
use ditrans::logs::{log_error, LogFormat, Verbosity, LOGGER};
use ditrans::{run, Config, ConfigError, GlossStyle};
use std::fmt::Display;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ditrans", version)]
#[command(about = "Print examples from the ditransitives database", long_about = None)]
struct Cli {
    /// Language to print (any case)
    language: String,

    /// Example numbers to print as LaTeX
    exno: Vec<usize>,

    /// Gloss style: smallcaps, or expex for any other value
    #[arg(long, num_args = 0..=1, default_missing_value = "expex", value_name = "STYLE")]
    style: Option<String>,

    /// Data file (default: $DITRANS_DATA or languages.csv)
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Column delimiter (default: $DITRANS_DELIMITER or ';')
    #[arg(short, long)]
    delimiter: Option<String>,

    /// Log every rewrite step for the requested glosses
    #[arg(long)]
    explain: bool,

    /// More logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// No logging on stderr
    #[arg(short, long)]
    quiet: bool,

    /// Log line format: text or json
    #[arg(long, default_value = "text")]
    log_format: String,
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logging is configured before the rest of the arguments are validated
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let log_format = parse_log_format(&cli.log_format).unwrap_or_else(|e| fatal(e));
    LOGGER.configure(verbosity, log_format);

    let config = build_config(cli, verbosity, log_format).unwrap_or_else(|e| fatal(e));
    LOGGER.configure(config.verbosity, config.log_format);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match run(&config, &mut out) {
        Ok(report) => {
            for failure in &report.failures {
                eprintln!("{}", failure.user_message());
            }
            if !report.is_ok() {
                std::process::exit(1);
            }
        }
        Err(e) => fatal(e),
    }
}

fn build_config(
    cli: Cli,
    verbosity: Verbosity,
    log_format: LogFormat,
) -> Result<Config, ConfigError> {
    let delimiter = resolve_delimiter(cli.delimiter.as_deref())?;

    Ok(Config::new(cli.language)
        .with_numbers(cli.exno)
        .with_style(GlossStyle::from_flag(cli.style.as_deref()))
        .with_data_path(resolve_data_path(cli.data))
        .with_delimiter(delimiter)
        .with_logging(verbosity, log_format)
        .with_explain(cli.explain))
}

fn fatal(err: impl Display) -> ! {
    log_error(format!("Error: {}", err));
    std::process::exit(1)
}

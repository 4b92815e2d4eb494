use clap::{error::ErrorKind, Parser, ValueEnum};
use n26ynablib::{
    config::{Config, MemoField, DEFAULT_HOME_CURRENCY, DEFAULT_OUTPUT_SUFFIX},
    error::Result,
    pipeline::{convert_file, Job},
    report::TracingReporter,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum MemoArg {
    Reference,
    Category,
}

impl From<MemoArg> for MemoField {
    fn from(arg: MemoArg) -> Self {
        match arg {
            MemoArg::Reference => MemoField::Reference,
            MemoArg::Category => MemoField::Category,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "n26ynab", version, about = "Конвертация выписки N26 в CSV для YNAB")]
struct Cli {
    /// CSV-выписка N26
    #[arg(short = 'i', long = "input")]
    input: PathBuf,

    /// Куда писать CSV для YNAB (по умолчанию <вход>_<суффикс>.csv рядом со входом)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Суффикс имени выходного файла по умолчанию
    #[arg(long = "suffix", default_value = DEFAULT_OUTPUT_SUFFIX)]
    suffix: String,

    /// Домашняя валюта: операции в ней не считаются валютными
    #[arg(long = "home-currency", default_value = DEFAULT_HOME_CURRENCY)]
    home_currency: String,

    /// Что идёт в мемо после типа операции
    #[arg(long = "memo-field", value_enum, default_value = "reference")]
    memo_field: MemoArg,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if !matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                error!("could not run conversion due to missing input");
            }
            e.exit();
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let cfg = Config {
        output_suffix: cli.suffix,
        home_currency: cli.home_currency,
        memo_field: cli.memo_field.into(),
    };
    let job = Job {
        input: cli.input,
        output: cli.output,
    };

    convert_file(&job, &cfg, &mut TracingReporter)?;
    Ok(())
}

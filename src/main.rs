//! ttlbench - compare array-form and object-form TTL table lookups.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use ttlbench::{
    check_consistency, compare, load_documents, BenchConfig, TtlBenchError, DEFAULT_ARRAY_PATH,
    DEFAULT_ITERATIONS, DEFAULT_OBJECT_PATH, DEFAULT_RECORD_TYPE,
};

#[derive(Parser)]
#[command(name = "ttlbench")]
#[command(about = "Time TTL lookups in array-form versus object-form JSON documents")]
#[command(version)]
struct Cli {
    /// Array-form document
    #[arg(long, default_value = DEFAULT_ARRAY_PATH)]
    array: PathBuf,

    /// Object-form document
    #[arg(long, default_value = DEFAULT_OBJECT_PATH)]
    object: PathBuf,

    /// Record type to look up
    #[arg(short, long, default_value = DEFAULT_RECORD_TYPE)]
    record_type: String,

    /// Timed lookups per approach
    #[arg(short = 'n', long, default_value_t = DEFAULT_ITERATIONS,
          value_parser = clap::value_parser!(u64).range(1..))]
    iterations: u64,

    /// Untimed lookups before each timed loop
    #[arg(long, default_value_t = 0)]
    warmup: u64,

    /// Check that both documents encode the same table before timing
    #[arg(long)]
    verify: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn config(&self) -> BenchConfig {
        BenchConfig::new()
            .with_array_path(&self.array)
            .with_object_path(&self.object)
            .with_record_type(&self.record_type)
            .with_iterations(self.iterations)
            .with_warmup(self.warmup)
    }
}

fn run(cli: &Cli) -> Result<(), TtlBenchError> {
    let config = cli.config();
    let (array, object) = load_documents(&config)?;

    if cli.verify {
        let checked = check_consistency(&array, &object)?;
        info!("verified {checked} record types");
    }

    let report = compare(&config, &array, &object);
    if cli.json {
        let out = serde_json::to_string_pretty(&report).map_err(TtlBenchError::Report)?;
        println!("{out}");
    } else {
        println!("{report}");
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

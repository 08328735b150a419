extern crate managed_array_benchmarks;

use clap::{App, Arg, ArgMatches};
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use managed_array_benchmarks::benchmarks::{run_benchmarks, BenchmarkMode, BenchmarkParams};
use managed_array_benchmarks::error::{BenchmarkError, BenchmarkResult};


fn parse_number<T>(matches: &ArgMatches, name: &str) -> BenchmarkResult<T>
where
    T: std::str::FromStr,
{
    let value = matches.value_of(name).unwrap_or_default();
    value.parse().map_err(|_| {
        BenchmarkError::InvalidArgument(format!("--{} expects a number, got '{}'", name, value))
    })
}

fn run(matches: &ArgMatches) -> BenchmarkResult<()> {
    let mode: BenchmarkMode = matches.value_of("mode").unwrap_or_default().parse()?;

    let params = BenchmarkParams {
        n: parse_number(matches, "n")?,
        measure_every: parse_number(matches, "measure-every")?,
        num_runs: parse_number(matches, "runs")?,
        keep_sorted: !matches.is_present("unsorted"),
        output_dir: PathBuf::from(matches.value_of("output").unwrap_or_default()),
    };

    run_benchmarks(mode, &params)
}

fn main() {
    #[rustfmt::skip]
    let matches = App::new("Benchmark runner")
        .arg(Arg::with_name("mode")
                 .long("mode")
                 .short("m")
                 .default_value("upsert")
                 .possible_values(&["upsert", "remove", "find"])
                 .help("Operation to benchmark"))
        .arg(Arg::with_name("n")
                 .long("n")
                 .short("n")
                 .default_value("10000")
                 .help("Number of elements"))
        .arg(Arg::with_name("measure-every")
                 .long("measure-every")
                 .default_value("100")
                 .help("Number of operations between measurements"))
        .arg(Arg::with_name("runs")
                 .long("runs")
                 .short("r")
                 .default_value("1")
                 .help("Number of runs"))
        .arg(Arg::with_name("unsorted")
                 .long("unsorted")
                 .help("Preserve insertion order instead of sorting on every commit"))
        .arg(Arg::with_name("output")
                 .long("output")
                 .short("o")
                 .default_value("results")
                 .help("Directory for the JSON results"))
        .arg(Arg::with_name("verbose")
                 .long("verbose")
                 .short("v")
                 .help("Enable debug logging"))
        .get_matches();

    let filter = if matches.is_present("verbose") { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    if let Err(err) = run(&matches) {
        error!(%err, "benchmark failed");
        std::process::exit(1);
    }
}

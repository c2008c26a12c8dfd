use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Deserialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cpu_schedule::models::{Algorithm, Process};
use cpu_schedule::report;
use cpu_schedule::scheduler::{schedule, ScheduleMetrics, ScheduleRequest};
use cpu_schedule::validation::{validate_batch, BatchLimits};
use cpu_schedule::workload::{random_batch, sample_batch, WorkloadSpec};

/// Compute FCFS or non-preemptive SJF completion, waiting, and turnaround
/// times for a batch of processes.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,

    /// Scheduling algorithm (FCFS or SJF)
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Process as ID:ARRIVAL:BURST (repeatable)
    #[arg(short, long = "process", value_name = "ID:ARRIVAL:BURST", value_parser = parse_process)]
    processes: Vec<Process>,

    /// JSON file holding a process array or a {"algorithm", "processes"} request
    #[arg(short, long, conflicts_with_all = ["processes", "random"])]
    input: Option<PathBuf>,

    /// Generate N random processes instead of reading them
    #[arg(long, value_name = "N", conflicts_with = "processes")]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Minimum batch size
    #[arg(long, default_value_t = 3)]
    min_processes: usize,

    /// Maximum batch size
    #[arg(long, default_value_t = 10)]
    max_processes: usize,

    /// Reject batches with repeated arrival times
    #[arg(long)]
    unique_arrivals: bool,

    /// Print the result as JSON
    #[arg(long, conflicts_with_all = ["explain", "timeline"])]
    json: bool,

    /// Show how each metric was derived
    #[arg(long)]
    explain: bool,

    /// Show the CPU timeline
    #[arg(long)]
    timeline: bool,
}

/// Accepted shapes of an `--input` file.
#[derive(Deserialize)]
#[serde(untagged)]
enum InputFile {
    Request(ScheduleRequest),
    Processes(Vec<Process>),
}

fn parse_process(s: &str) -> Result<Process, String> {
    let parts: Vec<&str> = s.split(':').collect();
    let [id, arrival, burst] = parts.as_slice() else {
        return Err(format!("expected ID:ARRIVAL:BURST, got '{s}'"));
    };
    let arrival = arrival
        .trim()
        .parse()
        .map_err(|e| format!("invalid arrival time '{arrival}': {e}"))?;
    let burst = burst
        .trim()
        .parse()
        .map_err(|e| format!("invalid burst time '{burst}': {e}"))?;
    Ok(Process::new(id.trim(), arrival, burst))
}

/// Resolves the batch and algorithm from the command line.
fn load_request(cli: &Cli) -> Result<ScheduleRequest> {
    let (file_algorithm, processes) = if let Some(path) = &cli.input {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let parsed: InputFile = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        match parsed {
            InputFile::Request(request) => (Some(request.algorithm), request.processes),
            InputFile::Processes(processes) => (None, processes),
        }
    } else if let Some(count) = cli.random {
        let seed = cli.seed.unwrap_or_else(rand::random);
        debug!(seed, count, "generating random batch");
        let mut rng = SmallRng::seed_from_u64(seed);
        (None, random_batch(&mut rng, &WorkloadSpec::new(count)))
    } else if !cli.processes.is_empty() {
        (None, cli.processes.clone())
    } else {
        info!("no processes given, using the sample batch");
        (None, sample_batch())
    };

    let algorithm = cli.algorithm.or(file_algorithm).unwrap_or_default();
    Ok(ScheduleRequest::new(algorithm, processes))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the report.
    let level = cli.verbose.tracing_level_filter();
    let filter = EnvFilter::new(format!("warn,cpu_schedule={level}"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let request = load_request(&cli)?;

    let limits = BatchLimits::default()
        .with_size(cli.min_processes, cli.max_processes)
        .with_unique_arrival_times(cli.unique_arrivals);
    if let Err(errors) = validate_batch(&request.processes, &limits) {
        for e in &errors {
            eprintln!("error: {e}");
        }
        bail!("{} validation error(s) in process batch", errors.len());
    }

    info!(
        algorithm = %request.algorithm,
        processes = request.processes.len(),
        "scheduling batch"
    );
    let result = schedule(&request.processes, request.algorithm)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print!("{}", report::render_table(&result));

    let metrics = ScheduleMetrics::calculate(&result);
    println!(
        "Makespan = {}, CPU utilization = {:.1}%, idle = {}",
        metrics.makespan,
        metrics.cpu_utilization * 100.0,
        metrics.idle_time
    );

    if cli.timeline {
        println!("\n{}", report::render_timeline(&result));
    }
    if cli.explain {
        println!("\n{}", report::explain(&result));
    }

    Ok(())
}

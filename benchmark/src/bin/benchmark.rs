use std::{
    collections::{HashMap, HashSet},
    fs::{self, File},
    path::PathBuf,
};
use benchmark::{
    fmt_open_err, path_str, props_at_x, trial_seed, xvalues,
    format::{format_time, format_x, format_xlabel},
    generators,
    schema::*,
    timer::{self, harness::Harness, Timer},
    util,
};
use clap::Parser;
use colored::*;

const WARMUP: u32 = 2;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(default_value = "experiment.toml", long)]
    experiment: PathBuf,
    #[arg(default_value = "results.json", long)]
    out: PathBuf,
    /// Print known algorithm ids and exit.
    #[arg(long, action)]
    list: bool,
    // Ignore --bench provided by cargo.
    #[arg(long, action)]
    bench: bool,
    experiments: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    if cli.list {
        for (name, kind) in timer::ALGORITHMS {
            println!("{:20} {:?}", name, kind);
        }
        return;
    }

    if cfg!(debug_assertions) {
        println!("{}", "warning: running in debug mode".yellow().bold());
    }

    if let Err(e) = bench_from_files(&cli) {
        let msg = format!("error: {}", e);
        println!("{}", msg.red().bold());
        std::process::exit(1);
    }
}

fn bench_from_files(cli: &Cli) -> Result<(), String> {
    let experiment_toml = fs::read_to_string(&cli.experiment)
        .map_err(|e| fmt_open_err(e, &cli.experiment))?;

    let experiment: Experiment = toml::from_str(&experiment_toml)
        .map_err(|e| format!(
            "invalid toml file {}: {}",
            path_str(&cli.experiment), e
        ))?;

    for workload in &experiment.workload {
        workload.validate()?;
    }

    let workload_algos = gen_workload_to_algos_map(cli, &experiment)?;

    if workload_algos.is_empty() {
        return Err("no algorithm matches found".to_string());
    }

    let results = run_experiments(cli, experiment, workload_algos)?;

    write_results(results, &cli.out)?;

    Ok(())
}

type AlgorithmSet = HashSet<String>;
/// Map each workload to algorithms which need to be run on it.
/// This saves us from running multiple workload/algorithm pairs twice
/// if present in multiple experiments.
fn gen_workload_to_algos_map(cli: &Cli, experiment: &Experiment)
    -> Result<HashMap<WorkloadId, AlgorithmSet>, String>
{
    let mut workload_algos: HashMap<WorkloadId, AlgorithmSet> = HashMap::new();
    for e in &experiment.experiment {
        if cli.experiments.is_empty() || cli.experiments.contains(&e.name) {
            if !experiment.workload.iter().any(|w| w.name == e.workload) {
                return Err(format!(
                    "experiment {} refers to unknown workload {}",
                    e.name, e.workload));
            }

            workload_algos
                .entry(e.workload.clone())
                .or_default()
                .extend(e.algorithms.iter().cloned());
        }
    }
    Ok(workload_algos)
}

fn run_experiments(
    cli: &Cli,
    experiment: Experiment,
    workload_algos: HashMap<WorkloadId, AlgorithmSet>)
    -> Result<Results, String>
{
    let mut results = HashMap::<WorkloadId, WorkloadResults>::new();

    for workload in &experiment.workload {
        if let Some(algos) = workload_algos.get(&workload.name) {
            let workload_results = WorkloadResults {
                info: workload.clone(),
                algos: run_workload_benchmarks(workload, algos),
            };
            results.insert(workload.name.clone(), workload_results);
        }
    }

    let experiments = if !cli.experiments.is_empty() {
        experiment.experiment
            .into_iter()
            .filter(|e| cli.experiments.contains(&e.name))
            .collect()
    } else {
        experiment.experiment
    };

    Ok(Results {
        experiments,
        workloads: results,
    })
}

fn run_workload_benchmarks(info: &WorkloadInfo, algos: &AlgorithmSet) -> AlgorithmResults {
    println!("{}", &info.name.green().bold());

    let mut timers: Vec<(String, Timer)> = Vec::new();
    for name in algos {
        match timer::workload_kind(name).zip(Timer::new(name)) {
            Some((kind, timer)) if kind == info.kind => timers.push((name.clone(), timer)),
            Some((kind, _)) => println!("{}", format!(
                "  {} runs on {:?} workloads, not {:?}", name, kind, info.kind).yellow()),
            None => println!("{}", format!("  unknown algorithm {}", name).yellow()),
        }
    }
    timers.sort_by(|a, b| a.0.cmp(&b.0));

    let mut algorithm_results: AlgorithmResults =
        timers.iter().map(|(name, _)| (name.clone(), Vec::new())).collect();

    let mut harness = Harness::new(WARMUP);

    for x in xvalues(info) {
        let xlabel = format!("[{}: {}]", format_xlabel(info.vary), format_x(x, info));
        println!("{}", xlabel.bold());

        let props = props_at_x(info, x);
        let mut runs: Vec<ResultRun> = timers.iter().map(|_| ResultRun::new(x)).collect();
        let mut failed: Vec<bool> = vec![false; timers.len()];

        for trial in 0..info.trials {
            let input = generators::generate(info.kind, &props, trial_seed(info, x, trial));

            for (i, (name, timer)) in timers.iter().enumerate() {
                if failed[i] {
                    continue;
                }
                match timer.run(&mut harness, &input) {
                    Ok(elapsed) => runs[i].times.push(elapsed.as_nanos() as u64),
                    Err(e) => {
                        println!("{}", format!("  warn: {}: {}", name, e).yellow());
                        failed[i] = true;
                    }
                }
            }
        }

        for ((name, _), mut run) in timers.iter().zip(runs) {
            run.median = util::median(&run.times);
            println!("  {:20} {}", name, format_time(run.median));
            if let Some(entry) = algorithm_results.get_mut(name) {
                entry.push(run);
            }
        }
    }
    algorithm_results
}

fn write_results(results: Results, path: &PathBuf) -> Result<(), String> {
    let results_file = File::options()
        .write(true).create(true).truncate(true)
        .open(path)
        .map_err(|e| fmt_open_err(e, path))?;

    serde_json::to_writer(results_file, &results)
        .map_err(|e| format!(
            "failed to write {}: {}",
            path_str(path), e
        ))?;

    Ok(())
}

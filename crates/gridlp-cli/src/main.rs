use clap::{Parser, Subcommand};
use std::path::PathBuf;

use gridlp_solver::{
    ExhaustiveSearch, ProblemModel, Sample, Sampler, SearchObserver, Silent, Solution,
};

#[derive(Parser)]
#[command(name = "gridlp")]
#[command(about = "Brute-force and Monte-Carlo solver for small integer LPs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Exhaustively search the integer grid for the optimal assignment
    Solve {
        /// JSON problem description file
        file: PathBuf,
        /// Grid spacing for each variable
        #[arg(short, long, default_value_t = 1)]
        step: u64,
        /// Print every Nth feasible combination to stderr
        #[arg(short, long)]
        progress: Option<u64>,
        /// Output format (json, pretty)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Draw random assignments and report the top feasible ones
    Sample {
        /// JSON problem description file
        file: PathBuf,
        /// Number of random draws
        #[arg(short = 'n', long, default_value_t = 20_000)]
        samples: usize,
        /// RNG seed for reproducible draws
        #[arg(short = 'S', long)]
        seed: Option<u64>,
        /// Output format (json, pretty)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Validate a problem description file
    Check {
        /// JSON problem description file
        file: PathBuf,
    },
}

/// Prints progress to stderr so stdout stays machine-readable.
struct ConsoleProgress;

impl SearchObserver for ConsoleProgress {
    fn on_feasible(&mut self, count: u64, problem: &ProblemModel, values: &[u64]) {
        let assignment: Vec<String> = problem
            .variables
            .iter()
            .zip(values)
            .map(|(v, &x)| format!("{}={}", v.name, x))
            .collect();
        eprintln!("[feasible #{:>6}] {}", count, assignment.join(" "));
    }

    fn on_complete(&mut self, total_feasible: u64) {
        eprintln!("searched {} feasible combinations", total_feasible);
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            file,
            step,
            progress,
            format,
        } => {
            let problem = load_problem(&file);

            let mut search = ExhaustiveSearch::new().with_step(step);
            if let Some(every) = progress {
                search = search.with_notify_every(every);
            }
            let mut console = ConsoleProgress;
            let mut silent = Silent;
            let observer: &mut dyn SearchObserver = if progress.is_some() {
                &mut console
            } else {
                &mut silent
            };

            match search.solve_with_observer(&problem, observer) {
                Ok(solution) => print_solution(&problem, &solution, &format),
                Err(e) => {
                    eprintln!("Solve error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Sample {
            file,
            samples,
            seed,
            format,
        } => {
            let problem = load_problem(&file);

            let mut sampler = Sampler::new().with_samples(samples);
            if let Some(seed) = seed {
                sampler = sampler.with_seed(seed);
            }

            let top = sampler.sample(&problem);
            print_samples(&problem, &top, &format);
        }
        Commands::Check { file } => {
            load_problem(&file);
            println!("OK");
        }
    }
}

fn load_problem(file: &PathBuf) -> ProblemModel {
    let source = match std::fs::read_to_string(file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        }
    };

    match gridlp_parse::parse_problem(&source) {
        Ok(problem) => problem,
        Err(e) => {
            eprintln!("Invalid problem description: {}", e);
            std::process::exit(1);
        }
    }
}

/// Assignment as a JSON object with one entry per variable plus a
/// synthetic "objective" entry.
fn assignment_json(problem: &ProblemModel, values: &[u64], objective: f64) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    for (var, &val) in problem.variables.iter().zip(values) {
        map.insert(var.name.clone(), serde_json::json!(val));
    }
    map.insert("objective".to_string(), serde_json::json!(objective));
    serde_json::Value::Object(map)
}

fn print_solution(problem: &ProblemModel, solution: &Solution, format: &str) {
    if format == "json" {
        let out = serde_json::json!({
            "best": assignment_json(problem, &solution.values, solution.objective),
            "report": solution.report,
        });
        match serde_json::to_string_pretty(&out) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("Status: OPTIMAL");
    println!("Objective: {}", solution.objective);
    println!("Feasible combinations: {}", solution.feasible_count);
    println!();
    println!("Variables:");
    for (var, &val) in problem.variables.iter().zip(&solution.values) {
        println!("  {} = {}", var.name, val);
    }
    println!();
    println!("Constraints:");
    println!(
        "  {:<20} {:>10} {:>5} {:>10} {:>10}",
        "name", "lhs", "", "rhs", "slack"
    );
    for row in &solution.report.rows {
        println!(
            "  {:<20} {:>10.2} {:>5} {:>10.2} {:>10.2}",
            row.constraint,
            row.lhs,
            row.op.to_string(),
            row.rhs,
            row.slack
        );
    }
}

fn print_samples(problem: &ProblemModel, top: &[Sample], format: &str) {
    if format == "json" {
        let rows: Vec<serde_json::Value> = top
            .iter()
            .map(|s| assignment_json(problem, &s.values, s.objective))
            .collect();
        match serde_json::to_string_pretty(&rows) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if top.is_empty() {
        println!("No feasible draws.");
        return;
    }

    let names: Vec<String> = problem.variables.iter().map(|v| v.name.clone()).collect();
    println!("Top {} feasible draws:", top.len());
    println!("  {:>4} {:>12} {}", "#", "objective", names.join(" "));
    for (i, sample) in top.iter().enumerate() {
        let values: Vec<String> = sample.values.iter().map(|v| v.to_string()).collect();
        println!(
            "  {:>4} {:>12.2} {}",
            i + 1,
            sample.objective,
            values.join(" ")
        );
    }
}

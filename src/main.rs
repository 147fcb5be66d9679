use clap::Parser;
use cpu_sched::pcb_file::load_process_control_blocks;
use cpu_sched::scheduler::Algorithm;
use log::debug;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about = "Simulate CPU scheduling over a PCB file", long_about = None)]
struct Cli {
    /// Path to the binary PCB file
    pcb_file: PathBuf,

    /// Scheduling algorithm: FCFS, SJF, SRTF, P or RR
    algorithm: String,

    /// Time quantum in ticks (required for RR)
    quantum: Option<u32>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut ready_queue = load_process_control_blocks(&cli.pcb_file)
        .map_err(|err| format!("failed to load process control blocks: {err}"))?;
    let algorithm = Algorithm::from_code(&cli.algorithm, cli.quantum)?;

    debug!(
        "running {} over {} processes",
        algorithm,
        ready_queue.len()
    );
    let result = algorithm
        .run(&mut ready_queue)
        .map_err(|err| format!("failed to execute {} algorithm: {err}", algorithm.code()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{result}");
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reported_before_bad_algorithm() {
        let cli = Cli {
            pcb_file: std::env::temp_dir().join("cpu-sched-no-such-file.bin"),
            algorithm: "lottery".to_string(),
            quantum: None,
            json: false,
        };
        let err = run(cli).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("failed to load process control blocks"));
    }
}

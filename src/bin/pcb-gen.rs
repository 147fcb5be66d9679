use clap::Parser;
use cpu_sched::models::ProcessControlBlock;
use cpu_sched::pcb_file::save_process_control_blocks;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::path::PathBuf;

/// Writes a PCB file of randomly generated processes.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output file
    output: PathBuf,

    /// Number of processes
    #[arg(long, default_value_t = 30)]
    count: usize,

    /// Largest burst time (ticks)
    #[arg(long, default_value_t = 20)]
    max_burst: u32,

    /// Largest arrival tick
    #[arg(long, default_value_t = 0)]
    max_arrival: u32,

    /// Largest priority value
    #[arg(long, default_value_t = 10)]
    max_priority: u32,

    /// RNG seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    if cli.max_burst == 0 {
        return Err("--max-burst must be at least 1".into());
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let pcbs: Vec<ProcessControlBlock> = (0..cli.count)
        .map(|_| {
            ProcessControlBlock::new(rng.random_range(1..=cli.max_burst))
                .with_arrival(rng.random_range(0..=cli.max_arrival))
                .with_priority(rng.random_range(0..=cli.max_priority))
        })
        .collect();

    save_process_control_blocks(&cli.output, &pcbs)?;
    println!("Wrote {} processes to {:?}", pcbs.len(), cli.output);

    Ok(())
}

//! Loop-order benchmark for triple-loop matrix multiplication
//!
//! Multiplies random square matrices under each loop order and prints the
//! mean time per order and size.
//!
//! Usage:
//!     cargo run --release --bin matmul-bench -- --sizes 10,100 --repetitions 5

use clap::{Parser, ValueEnum};
use math_audio_dense::LoopOrder;
use math_audio_dense::benchmark::{self, BenchConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "matmul-bench",
    about = "Compare the six loop orders of dense matrix multiplication"
)]
struct Cli {
    /// Square matrix sizes to time (comma separated)
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,

    /// Multiplications per order and size
    #[arg(long)]
    repetitions: Option<usize>,

    /// Loop order to time (repeat to select several; default: all six)
    #[arg(long = "order", value_enum)]
    orders: Vec<OrderChoice>,

    /// Seed for reproducible random matrices
    #[arg(long)]
    seed: Option<u64>,

    /// JSON configuration file; command-line flags override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the full report (all samples) to this JSON file
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OrderChoice {
    Ijk,
    Ikj,
    Jik,
    Jki,
    Kij,
    Kji,
}

impl From<OrderChoice> for LoopOrder {
    fn from(choice: OrderChoice) -> Self {
        match choice {
            OrderChoice::Ijk => LoopOrder::Ijk,
            OrderChoice::Ikj => LoopOrder::Ikj,
            OrderChoice::Jik => LoopOrder::Jik,
            OrderChoice::Jki => LoopOrder::Jki,
            OrderChoice::Kij => LoopOrder::Kij,
            OrderChoice::Kji => LoopOrder::Kji,
        }
    }
}

fn build_config(args: &Cli) -> anyhow::Result<BenchConfig> {
    let mut config = match &args.config {
        Some(path) => BenchConfig::from_json_file(path)?,
        None => BenchConfig::default(),
    };

    if let Some(sizes) = &args.sizes {
        config.sizes = sizes.clone();
    }
    if let Some(repetitions) = args.repetitions {
        config.repetitions = repetitions;
    }
    if !args.orders.is_empty() {
        config.orders = args.orders.iter().map(|&o| o.into()).collect();
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Cli::parse();
    let config = build_config(&args)?;

    println!("Loop-order matrix multiplication benchmark");
    println!("==========================================");
    println!(
        "sizes: {:?}, repetitions: {}, orders: {}",
        config.sizes,
        config.repetitions,
        config
            .orders
            .iter()
            .map(|o| o.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let report = benchmark::run(&config)?;

    for size_report in &report.sizes {
        println!("{}", size_report.size);
        for timing in &size_report.timings {
            println!("\t {} {:.4} ms", timing.order, timing.mean_ms);
        }
        if let Some(best) = report.fastest(size_report.size) {
            println!("\t fastest: {}", best);
        }
    }

    if let Some(path) = &args.json {
        report.save_json(path)?;
        println!("\nReport written to {}", path.display());
    }

    Ok(())
}

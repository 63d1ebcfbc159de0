use std::sync::Arc;

use clap::Parser;
use pack_calculator::render;
use pack_calculator::service::PackCalculator;
use pack_calculator::store::MemoryPackSizeStore;

#[derive(Parser)]
#[command(
    name = "pack_calculator",
    about = "Whole-pack order fulfilment calculator"
)]
struct Cli {
    /// Available pack sizes, comma separated (e.g. 250,500,1000)
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "250,500,1000,2000,5000",
        allow_negative_numbers = true
    )]
    packs: Vec<i64>,

    /// Number of items ordered
    #[arg(long, allow_negative_numbers = true)]
    order: i64,

    /// Show a per-size breakdown table
    #[arg(long)]
    table: bool,
}

fn main() {
    let cli = Cli::parse();

    let calculator = PackCalculator::new(Arc::new(MemoryPackSizeStore::default()));

    calculator.update_pack_sizes(&cli.packs).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let results = calculator.calculate(cli.order).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    for r in &results {
        println!("{}", r);
    }

    if cli.table {
        println!();
        print!("{}", render::render_breakdown(&results));
    }

    let packs: u64 = results.iter().map(|r| r.count).sum();
    let shipped: u64 = results.iter().map(|r| r.items()).sum();
    println!();
    println!(
        "Summary: {} pack{}, {} items shipped ({} over)",
        packs,
        if packs == 1 { "" } else { "s" },
        shipped,
        shipped - cli.order as u64,
    );
}

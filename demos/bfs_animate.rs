//! Step-by-step BFS animation in the terminal.
//!
//! Left click picks the start, middle click a goal, right click or space
//! pauses. Run: cargo run --bin bfs-animate -- --seed 7

use clap::Parser;
use wavefront_demos::Cli;
use wavefront_sim::ExplorerConfig;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = wavefront_demos::run(&cli, ExplorerConfig::default(), 60) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

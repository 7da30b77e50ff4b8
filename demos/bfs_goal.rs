//! Goal-directed BFS, recomputed every frame.
//!
//! Left click moves the goal, right click the start.
//! Run: cargo run --bin bfs-goal

use clap::Parser;
use wavefront_demos::Cli;
use wavefront_sim::ExplorerConfig;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = wavefront_demos::run(&cli, ExplorerConfig::goal_directed(), 30) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

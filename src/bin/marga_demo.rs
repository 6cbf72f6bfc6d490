//! Random-map pathfinding demo.
//!
//! Seeds obstacles on a tile grid, picks random free start and goal cells,
//! then prints the map, the raw A* path and the smoothed waypoints.
//!
//! Usage:
//!   marga-demo
//!   marga-demo --rows 20 --columns 30 --seed 42
//!   marga-demo --config configs/marga.yaml --no-smooth
//!
//! Set `RUST_LOG=marga=trace` to see search logs.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use rand::prelude::*;
use rand::rngs::StdRng;

use marga::grid::{format_path, render_map, render_solution};
use marga::{Environment, GridPlanner, MargaConfig, PathError, TileGrid};

/// A* pathfinding demo on a random tile grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path [default: configs/marga.yaml if present]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of rows [default: 40]
    #[arg(long)]
    rows: Option<usize>,

    /// Number of columns [default: 50]
    #[arg(long)]
    columns: Option<usize>,

    /// Probability that a cell is blocked [default: 0.25]
    #[arg(long)]
    block_chance: Option<f64>,

    /// RNG seed for a reproducible map
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the raw path only
    #[arg(long)]
    no_smooth: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = load_config(&args)?;

    let mut rng = match config.demo.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut grid = TileGrid::from_config(&config.to_grid_config())?;
    let blocks = scatter_obstacles(&mut grid, config.demo.block_chance, &mut rng);
    println!("blocks({}): {}", blocks.len(), format_path(&blocks));

    let free: Vec<usize> = (0..grid.cell_count())
        .filter(|&id| grid.is_traversable(id))
        .collect();
    let start = *free.choose(&mut rng).ok_or("every cell is blocked")?;
    let goal = *free.choose(&mut rng).ok_or("every cell is blocked")?;
    println!("start = {}, end = {};", start, goal);

    print!("{}", render_map(&grid, start, goal));
    println!("-----------");

    let planner_config = config.to_planner_config();
    let smoothing = planner_config.smoothing;
    let mut planner = GridPlanner::new(&grid, planner_config);

    match planner.plan(start, goal) {
        Ok(planned) => {
            println!(
                "cost = {}, nodes expanded = {}",
                planned.cost, planned.nodes_expanded
            );
            println!("path({}): {}", planned.raw.len(), format_path(&planned.raw));
            print!("{}", render_solution(&grid, &planned.raw));

            if smoothing {
                println!("-----------");
                println!(
                    "smoothed({}): {}",
                    planned.waypoints.len(),
                    format_path(&planned.waypoints)
                );
                print!("{}", render_solution(&grid, &planned.waypoints));
            }
        }
        Err(e @ (PathError::NoPathFound | PathError::ExpansionLimitReached { .. })) => {
            println!("No path from {} to {}: {}", start, goal, e);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

/// Merge the optional config file with command-line overrides
fn load_config(args: &Args) -> Result<MargaConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => MargaConfig::load(path)?,
        None => MargaConfig::load_default()?,
    };

    if let Some(rows) = args.rows {
        config.grid.rows = rows;
    }
    if let Some(columns) = args.columns {
        config.grid.columns = columns;
    }
    if let Some(chance) = args.block_chance {
        config.demo.block_chance = chance;
    }
    if args.seed.is_some() {
        config.demo.seed = args.seed;
    }
    if args.no_smooth {
        config.search.smoothing = false;
    }

    config.validate()?;
    Ok(config)
}

/// Block each cell independently with probability `chance`
fn scatter_obstacles(grid: &mut TileGrid, chance: f64, rng: &mut StdRng) -> Vec<usize> {
    let mut blocks = Vec::new();
    for id in 0..grid.cell_count() {
        if rng.random_bool(chance) {
            grid.set_blocked(id);
            blocks.push(id);
        }
    }
    blocks
}

//! Solve a maze and print the route.
//!
//! Run: cargo run --bin maze [GRID_FILE [START_ROW,COL GOAL_ROW,COL]]
//!
//! Without arguments the built-in labyrinth is solved from (0, 0) to (4, 4).
//! A grid file holds whitespace-separated integers, one row per line; `0`
//! is open, anything else is a wall. Start and goal default to the top-left
//! and bottom-right corners.

use anyhow::{Context, Result, bail};
use maze_core::{Coord, Grid};
use maze_demos::{LABYRINTH, format_path, render};
use maze_paths::AStar;

fn parse_coord(s: &str) -> Result<Coord> {
    let (r, c) = s
        .split_once(',')
        .with_context(|| format!("expected ROW,COL but got {s:?}"))?;
    let row = r.trim().parse().with_context(|| format!("bad row in {s:?}"))?;
    let col = c.trim().parse().with_context(|| format!("bad column in {s:?}"))?;
    Ok(Coord::new(row, col))
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let grid = match args.first() {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading grid file {path}"))?;
            text.parse::<Grid>()
                .with_context(|| format!("parsing grid file {path}"))?
        }
        None => Grid::from_rows(LABYRINTH)?,
    };

    let (start, goal) = match &args[..] {
        [] | [_] => (
            Coord::ORIGIN,
            Coord::new(grid.rows() - 1, grid.cols() - 1),
        ),
        [_, s, g] => (parse_coord(s)?, parse_coord(g)?),
        _ => bail!("usage: maze [GRID_FILE [START_ROW,COL GOAL_ROW,COL]]"),
    };

    log::info!(
        "solving {}x{} maze from {start} to {goal}",
        grid.rows(),
        grid.cols()
    );
    let engine = AStar::new();
    log::debug!("search config: {:?}", engine.config());
    let report = engine.search(&grid, start, goal)?;
    log::info!("{:?} after {} expansions", report.outcome, report.expanded);

    if report.is_found() {
        println!("\nPath found:");
        println!("Path Coordinates: {}", format_path(&report.path));
        print!("{}", render(&grid, &report.path, start, goal));
    } else {
        println!("\nNo path.");
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

//! Command-line runner for the grid puzzles.
//!
//! Run: cargo run -- maze input.txt

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use gridpath_demos::{
    chiton, garden, logger,
    maze::{self, MazeCosts},
    race::{self, RaceConfig},
    ram_run::{self, RamRunConfig},
    trails,
};
use gridpath_paths::Cost;

/// Solve grid puzzles with gridpath
#[derive(Parser, Debug)]
#[command(name = "gridpath", version)]
struct Args {
    /// More logging on stderr (repeat for debug and trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Cheapest route through a maze with a turn penalty
    Maze {
        input: PathBuf,
        #[arg(long, default_value_t = MazeCosts::default().move_cost)]
        move_cost: Cost,
        #[arg(long, default_value_t = MazeCosts::default().turn_cost)]
        turn_cost: Cost,
    },
    /// Escape a memory space as bytes fall into it
    RamRun {
        input: PathBuf,
        #[arg(long, default_value_t = RamRunConfig::default().size)]
        size: usize,
        #[arg(long, default_value_t = RamRunConfig::default().fallen)]
        fallen: usize,
    },
    /// Count wall-clipping shortcuts on a race track
    Race {
        input: PathBuf,
        #[arg(long, default_value_t = RaceConfig::default().threshold)]
        threshold: Cost,
        #[arg(long, default_value_t = RaceConfig::default().short_cheat)]
        short_cheat: u32,
        #[arg(long, default_value_t = RaceConfig::default().long_cheat)]
        long_cheat: u32,
    },
    /// Price the fences around garden regions
    Garden { input: PathBuf },
    /// Score and rate hiking trails on a height map
    Trails { input: PathBuf },
    /// Lowest-risk crossing of a cave, then of the cave tiled 5x5
    Chiton { input: PathBuf },
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn run(args: Args) -> anyhow::Result<()> {
    logger::init(logger::level_for(args.verbose)).context("installing logger")?;

    let (part1, part2) = solve(args.command)?;
    println!("part 1: {part1}");
    println!("part 2: {part2}");
    Ok(())
}

/// Read the command's input and compute both answers.
fn solve(command: Command) -> anyhow::Result<(String, String)> {
    let answers = match command {
        Command::Maze {
            input,
            move_cost,
            turn_cost,
        } => {
            let costs = MazeCosts {
                move_cost,
                turn_cost,
            };
            let (score, tiles) = maze::solve(&read_input(&input)?, costs)?;
            (score.to_string(), tiles.to_string())
        }
        Command::RamRun {
            input,
            size,
            fallen,
        } => {
            let cfg = RamRunConfig { size, fallen };
            let (steps, blocker) = ram_run::solve(&read_input(&input)?, cfg)?;
            (steps.to_string(), blocker.unwrap_or_else(|| "none".into()))
        }
        Command::Race {
            input,
            threshold,
            short_cheat,
            long_cheat,
        } => {
            let cfg = RaceConfig {
                threshold,
                short_cheat,
                long_cheat,
            };
            let (short, long) = race::solve(&read_input(&input)?, cfg)?;
            (short.to_string(), long.to_string())
        }
        Command::Garden { input } => {
            let (perimeter, sides) = garden::solve(&read_input(&input)?)?;
            (perimeter.to_string(), sides.to_string())
        }
        Command::Trails { input } => {
            let (score, rating) = trails::solve(&read_input(&input)?)?;
            (score.to_string(), rating.to_string())
        }
        Command::Chiton { input } => {
            let (small, full) = chiton::solve(&read_input(&input)?)?;
            (small.to_string(), full.to_string())
        }
    };
    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn flags_override_defaults() {
        let args =
            Args::try_parse_from(["gridpath", "-vv", "maze", "in.txt", "--turn-cost", "5"]).unwrap();
        assert_eq!(args.verbose, 2);
        match args.command {
            Command::Maze {
                move_cost,
                turn_cost,
                ..
            } => assert_eq!((move_cost, turn_cost), (1, 5)),
            other => panic!("unexpected {other:?}"),
        }
    }

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("gridpath-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_input_names_the_file() {
        let input = PathBuf::from("/nonexistent/gridpath/garden.txt");
        let err = solve(Command::Garden { input }).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.starts_with("reading /nonexistent/gridpath/garden.txt"), "{msg}");
    }

    #[test]
    fn run_reports_input_then_logger_errors() {
        let args = || {
            Args::try_parse_from(["gridpath", "chiton", "/nonexistent/cave.txt"]).unwrap()
        };
        let first = run(args()).unwrap_err();
        assert!(format!("{first:#}").starts_with("reading /nonexistent/cave.txt"));
        // The logger is process-wide, so a second install is refused.
        let second = run(args()).unwrap_err();
        assert!(format!("{second:#}").starts_with("installing logger"), "{second:#}");
    }

    #[test]
    fn puzzle_errors_reach_the_caller() {
        let input = scratch_file("no-start.txt", "#.E#\n");
        let err = solve(Command::Maze {
            input: input.clone(),
            move_cost: 1,
            turn_cost: 1000,
        })
        .unwrap_err();
        fs::remove_file(&input).unwrap();
        assert!(format!("{err}").contains("'S'"), "{err}");
    }

    #[test]
    fn answers_from_a_file() {
        let input = scratch_file("garden.txt", "AAAA\nBBCD\nBBCC\nEEEC\n");
        let answers = solve(Command::Garden {
            input: input.clone(),
        })
        .unwrap();
        fs::remove_file(&input).unwrap();
        assert_eq!(answers, ("140".to_string(), "80".to_string()));
    }

    #[test]
    fn kebab_case_subcommand() {
        let args = Args::try_parse_from(["gridpath", "ram-run", "bytes.txt"]).unwrap();
        assert!(matches!(
            args.command,
            Command::RamRun {
                size: 71,
                fallen: 1024,
                ..
            }
        ));
    }
}

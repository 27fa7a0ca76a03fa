#![deny(clippy::all)]

//! Generate a randomized maze and watch one of three search strategies
//! walk it, from the comfort of a terminal.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::time::Duration;

use anyhow::Error;
use clap::{value_t, App, Arg};
use lazy_static::lazy_static;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use maze::{generate, solve, Grid, Point, Strategy};

pub mod render;

/// Grid dimensions and wall probability for one named difficulty.
#[derive(Debug, Copy, Clone)]
pub struct Difficulty {
    pub rows: usize,
    pub cols: usize,
    pub wall_density: f64,
}

lazy_static! {
    static ref DIFFICULTIES: HashMap<&'static str, Difficulty> = {
        let mut d: HashMap<&'static str, Difficulty> = HashMap::new();
        d.insert(
            "easy",
            Difficulty {
                rows: 10,
                cols: 10,
                wall_density: 0.2,
            },
        );
        d.insert(
            "medium",
            Difficulty {
                rows: 15,
                cols: 15,
                wall_density: 0.3,
            },
        );
        d.insert(
            "hard",
            Difficulty {
                rows: 20,
                cols: 20,
                wall_density: 0.4,
            },
        );
        d
    };
}

/// Look up the settings of a named difficulty level.
pub fn difficulty(name: &str) -> Option<Difficulty> {
    DIFFICULTIES.get(name).copied()
}

pub fn run() -> Result<(), Error> {
    let matches = App::new("Maze Solver")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Generate a randomized maze and solve it with a chosen search strategy")
        .arg(
            Arg::with_name("difficulty")
                .short("d")
                .long("difficulty")
                .value_name("LEVEL")
                .help("Named preset controlling size and wall density")
                .takes_value(true)
                .possible_values(&["easy", "medium", "hard"])
                .default_value("medium"),
        )
        .arg(
            Arg::with_name("algorithm")
                .short("a")
                .long("algorithm")
                .value_name("ALGORITHM")
                .help("Search strategy: bfs, dfs or astar")
                .takes_value(true)
                .default_value("bfs"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("Seed for reproducible maze generation")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("toggle")
                .short("t")
                .long("toggle")
                .value_name("ROW,COL")
                .help("Toggle a wall before solving (repeatable)")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1),
        )
        .arg(
            Arg::with_name("delay")
                .long("delay")
                .value_name("MILLIS")
                .help("Per-step delay of the route reveal")
                .takes_value(true)
                .default_value("100"),
        )
        .arg(
            Arg::with_name("map")
                .short("m")
                .long("map")
                .value_name("FILE")
                .help("Load the maze from a file (or - for stdin) instead of generating one")
                .takes_value(true),
        )
        .get_matches();

    let strategy = value_t!(matches, "algorithm", Strategy).unwrap_or_else(|e| e.exit());
    let delay = value_t!(matches, "delay", u64).unwrap_or_else(|e| e.exit());

    let mut grid = match matches.value_of("map") {
        Some(filename) => read_grid(filename)?,
        None => {
            let level = matches.value_of("difficulty").unwrap();
            let settings = difficulty(level).unwrap();

            let seed = match matches.value_of("seed") {
                Some(_) => value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit()),
                None => rand::thread_rng().gen(),
            };

            let mut rng = StdRng::seed_from_u64(seed);
            generate(settings.rows, settings.cols, settings.wall_density, &mut rng)?
        }
    };

    if let Some(values) = matches.values_of("toggle") {
        for value in values {
            let point: Point = value.parse()?;
            grid.toggle_wall(point)?;
        }
    }

    println!("{}", grid);

    match solve(&grid, strategy) {
        Some(path) => {
            render::reveal(&grid, &path, Duration::from_millis(delay))?;
            println!("Solved ({}) in {} steps", strategy, path.distance());
        }
        None => println!("No solution found!"),
    }

    Ok(())
}

fn read_grid(filename: &str) -> Result<Grid, Error> {
    let mut reader: Box<dyn Read> = match filename {
        "-" => Box::new(io::stdin()),
        path => Box::new(File::open(path)?),
    };

    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text.parse::<Grid>()?)
}

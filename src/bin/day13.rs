use std::process::exit;

use clap::Parser;

use aoc_2016::error::MazeError;
use aoc_2016::maze::{Coordinate, Maze, ACTUAL_SEED};
use aoc_2016::search::{a_star, reachable_within, MazeWalk};

#[derive(Parser)]
#[command(
    name = "day13",
    version,
    about = "Finds paths through the cubicle maze"
)]
struct Cli {
    /// The office designer's favourite number
    #[arg(long, default_value_t = ACTUAL_SEED)]
    seed: u32,

    #[arg(long, default_value_t = 31)]
    finish_x: u32,

    #[arg(long, default_value_t = 39)]
    finish_y: u32,

    /// Step budget for part two
    #[arg(long, default_value_t = 50)]
    max_steps: u32,

    /// Draw the floor around the start and finish first
    #[arg(long)]
    draw: bool,
}

const START: Coordinate = Coordinate { x: 1, y: 1 };

fn solve(cli: &Cli) -> Result<(), MazeError> {
    let finish = Coordinate::new(cli.finish_x, cli.finish_y);

    if cli.draw {
        let mut maze = Maze::new(cli.seed)?;
        print!("{}", maze.render(finish.x.saturating_add(2), finish.y.saturating_add(2)));
    }

    let mut maze = Maze::new(cli.seed)?;
    match a_star(START, &mut MazeWalk::new(&mut maze, finish)) {
        Some(path) => println!("answer part one = {}", path.len() - 1),
        None => println!("answer part one = unreachable"),
    }

    let mut maze = Maze::new(cli.seed)?;
    let visited = reachable_within(START, &mut MazeWalk::new(&mut maze, finish), cli.max_steps);
    println!("answer part two = {}", visited.len());

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = solve(&cli) {
        log::error!("{}", e);
        exit(1);
    }
}

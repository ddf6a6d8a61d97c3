use std::num::NonZero;
use std::str::FromStr;

use galvanize::{Bias, Direction, Location, Puzzle, PuzzleBuilder};

fn powered_count(puzzle: &Puzzle) -> usize {
    (0..puzzle.height())
        .flat_map(|y| (0..puzzle.width()).map(move |x| Location(x, y)))
        .filter(|location| puzzle.tile_at(*location).unwrap().is_powered())
        .count()
}

fn main() {
    // bias may be chosen on the command line: normal, horizontal, or vertical
    let bias = std::env::args()
        .nth(1)
        .map(|arg| Bias::from_str(&arg).unwrap())
        .unwrap_or_default();

    let mut puzzle = PuzzleBuilder::with_dims((NonZero::new(7).unwrap(), NonZero::new(7).unwrap()))
        .bias(bias)
        .seed(2520)
        .build()
        .unwrap();

    println!("fresh board ({:?} bias):", puzzle.bias());
    print!("{puzzle}");
    println!("powered: {}/{}", powered_count(&puzzle), puzzle.width() * puzzle.height());

    // poke at the board a little: a few quarter turns and a move attempt per direction
    for location in [Location(1, 0), Location(0, 1), Location(1, 1)] {
        puzzle.rotate_tile_at(location);
    }
    for direction in [Direction::DOWN, Direction::RIGHT, Direction::UP, Direction::LEFT] {
        if puzzle.move_source(direction) {
            println!("source moved {direction:?} to {:?}", puzzle.source());
        }
    }

    println!("after {} rotations:", puzzle.rotations());
    print!("{puzzle}");
    println!(
        "powered: {}/{}, won: {}",
        powered_count(&puzzle),
        puzzle.width() * puzzle.height(),
        puzzle.check_win()
    );
}

// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod config;
pub mod data;
pub mod level;
pub mod map_formatter;
pub mod packs;
pub mod solution_formatter;
pub mod solver;
pub mod state;
pub mod taps;

mod fs;
mod parser;
mod vec2d;

use std::error::Error;

use crate::config::Format;
use crate::level::Level;
use crate::solver::SolverOk;

pub use crate::parser::ParserErr;

pub trait LoadLevel {
    fn load_level(&self) -> Result<Level, Box<dyn Error>>;

    fn load_level_format(&self, format: Format) -> Result<Level, Box<dyn Error>>;
}

pub trait Solve {
    /// Finds the shortest sequence of taps that puts every box on a target.
    ///
    /// An unsolvable level is not an error, it's reported as `taps: None`.
    fn solve(&self, print_status: bool) -> SolverOk;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        // (path, expected number of taps)
        let levels = [
            ("levels/custom/01-corridor.txt", Some(1)),
            ("levels/custom/02-two-ways.txt", Some(2)),
            ("levels/custom/03-push-machine.txt", Some(3)),
            ("levels/custom/04-two-boxes.txt", Some(2)),
            ("levels/custom/no-solution-pinned.txt", None),
            ("levels/Practice/1", Some(2)),
        ];

        for &(path, expected) in &levels {
            let level = path.load_level().unwrap();
            let solution = level.solve(false);
            println!("{}: {:?}", path, solution);
            assert_eq!(solution.taps.as_ref().map(|taps| taps.len()), expected, "{}", path);

            // solving again gives the same answer
            assert_eq!(level.solve(false).taps, solution.taps, "{}", path);
        }
    }

    #[test]
    fn explicit_format() {
        let compact = "levels/custom/02-two-ways.txt"
            .load_level_format(Format::Compact)
            .unwrap();
        assert_eq!(compact.rows(), 3);
        assert!("levels/custom/02-two-ways.txt"
            .load_level_format(Format::Sections)
            .is_err());
        assert!("levels/does-not-exist.txt".load_level().is_err());
    }
}

use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Pos;
use crate::level::Level;
use crate::state::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Contents {
    Empty,
    Box,
    Machine(usize),
    /// Extended part of a machine, anything past the anchor
    Arm(usize),
}

/// Draws a state in the compact format.
///
/// Arms of extended machines are drawn as `=` or `:` - those chars can't be parsed back,
/// a level is always loaded with every machine retracted.
pub struct MapFormatter<'a> {
    level: &'a Level,
    state: &'a State,
}

impl<'a> MapFormatter<'a> {
    pub(crate) fn new(level: &'a Level, state: &'a State) -> Self {
        Self { level, state }
    }

    fn write_to_formatter(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let grid = &self.level.grid;

        let mut state_grid = grid.scratchpad_with_default(Contents::Empty);
        for &b in &self.state.boxes {
            state_grid[b] = Contents::Box;
        }
        for (i, (ms, machine)) in self.state.machines.iter().zip(&self.level.machines).enumerate() {
            for n in 1..ms.len {
                if let Some(pos) = grid.offset(ms.pos, machine.dir, n) {
                    state_grid[pos] = Contents::Arm(i);
                }
            }
            state_grid[ms.pos] = Contents::Machine(i);
        }

        for r in 0..grid.rows() {
            for c in 0..grid.cols() {
                let pos = Pos::new(r, c);
                write!(f, "{}", self.cell_char(pos, state_grid[pos]))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn cell_char(&self, pos: Pos, contents: Contents) -> char {
        let target = self.level.is_target(pos);
        match contents {
            Contents::Empty if self.level.is_block(pos) => '#',
            Contents::Empty if target => '.',
            Contents::Empty => '-',
            Contents::Box if target => '*',
            Contents::Box => '$',
            Contents::Machine(i) if target => self.level.machines[i].dir.letter(),
            Contents::Machine(i) => self.level.machines[i].dir.arrow(),
            Contents::Arm(i) if self.level.machines[i].dir.is_horizontal() => '=',
            Contents::Arm(_) => ':',
        }
    }
}

impl Display for MapFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to_formatter(f)
    }
}

impl Debug for MapFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

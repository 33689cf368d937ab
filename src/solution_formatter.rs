use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Indexing;
use crate::level::Level;
use crate::solver::transition;
use crate::taps::Taps;

pub struct SolutionFormatter<'a> {
    level: &'a Level,
    taps: &'a Taps,
    indexing: Indexing,
    include_steps: bool,
}

impl<'a> SolutionFormatter<'a> {
    pub fn new(level: &'a Level, taps: &'a Taps, indexing: Indexing, include_steps: bool) -> Self {
        Self {
            level,
            taps,
            indexing,
            include_steps,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let offset = self.indexing.offset();
        writeln!(
            f,
            "The solution is the following (rows and columns start from {}):",
            self.indexing
        )?;

        let mut state = self.level.initial_state();
        if self.include_steps {
            writeln!(f, "{}", self.level.format_state(&state))?;
        }

        for tap in self.taps {
            writeln!(
                f,
                "Tap machine on row {} and column {}",
                usize::from(tap.pos.r) + offset,
                usize::from(tap.pos.c) + offset
            )?;

            if self.include_steps {
                // taps from a different level may not fit this one
                let new_state = if tap.machine < state.machines.len() {
                    transition::tap(self.level, &state, tap.machine)
                } else {
                    None
                };
                state = match new_state {
                    Some(new_state) => new_state,
                    None => {
                        writeln!(f, "Invalid tap")?;
                        return Ok(());
                    }
                };
                writeln!(f, "{}", self.level.format_state(&state))?;
            }
        }

        writeln!(f, "{} moves", self.taps.len())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{MapCell, Machine, Pos, MAX_SIZE};
use crate::map_formatter::MapFormatter;
use crate::state::{MachineState, State};
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelErr {
    Empty,
    TooLarge,
    OutOfBounds(Pos),
    OnBlock(Pos),
    Overlap(Pos),
}

impl Display for LevelErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            LevelErr::Empty => write!(f, "Level has no cells"),
            LevelErr::TooLarge => write!(f, "Level larger than {} rows/columns", MAX_SIZE),
            LevelErr::OutOfBounds(pos) => write!(f, "Position {} is outside the level", pos),
            LevelErr::OnBlock(pos) => write!(f, "Box or machine on a block at {}", pos),
            LevelErr::Overlap(pos) => write!(f, "More than one box or machine at {}", pos),
        }
    }
}

impl Error for LevelErr {}

/// The static part of a puzzle plus the start positions of everything that moves.
///
/// Never changes once created; every search state borrows it.
#[derive(Clone, PartialEq, Eq)]
pub struct Level {
    pub(crate) grid: Vec2d<MapCell>,
    pub(crate) targets: Vec<Pos>,
    pub(crate) target_grid: Vec2d<bool>,
    pub(crate) boxes: Vec<Pos>,
    pub(crate) machines: Vec<Machine>,
}

impl Level {
    pub fn new(
        rows: usize,
        cols: usize,
        blocks: &[Pos],
        targets: Vec<Pos>,
        boxes: Vec<Pos>,
        machines: Vec<Machine>,
    ) -> Result<Level, LevelErr> {
        if rows == 0 || cols == 0 {
            return Err(LevelErr::Empty);
        }
        if rows > MAX_SIZE || cols > MAX_SIZE {
            return Err(LevelErr::TooLarge);
        }

        let mut grid = Vec2d::new(rows as u8, cols as u8, MapCell::Empty);
        for &pos in blocks {
            if !grid.contains(pos) {
                return Err(LevelErr::OutOfBounds(pos));
            }
            grid[pos] = MapCell::Block;
        }

        let mut target_grid = grid.scratchpad();
        for &pos in &targets {
            if !grid.contains(pos) {
                return Err(LevelErr::OutOfBounds(pos));
            }
            target_grid[pos] = true;
        }

        let mut occupied = grid.scratchpad();
        for pos in boxes.iter().cloned().chain(machines.iter().map(|m| m.pos)) {
            if !grid.contains(pos) {
                return Err(LevelErr::OutOfBounds(pos));
            }
            if grid[pos] == MapCell::Block {
                return Err(LevelErr::OnBlock(pos));
            }
            if occupied[pos] {
                return Err(LevelErr::Overlap(pos));
            }
            occupied[pos] = true;
        }

        Ok(Level {
            grid,
            targets,
            target_grid,
            boxes,
            machines,
        })
    }

    pub fn rows(&self) -> usize {
        self.grid.rows().into()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols().into()
    }

    pub fn targets(&self) -> &[Pos] {
        &self.targets
    }

    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    /// Boxes at their start positions, every machine retracted.
    pub fn initial_state(&self) -> State {
        State::new(
            self.boxes.clone(),
            self.machines
                .iter()
                .map(|m| MachineState::new(m.pos, 1))
                .collect(),
        )
    }

    pub fn is_block(&self, pos: Pos) -> bool {
        self.grid[pos] == MapCell::Block
    }

    pub fn is_target(&self, pos: Pos) -> bool {
        self.target_grid[pos]
    }

    /// Every box is on a target - box and target order doesn't matter.
    pub fn is_solved(&self, state: &State) -> bool {
        state.boxes.iter().all(|&b| self.is_target(b))
    }

    /// Index of the machine whose current footprint includes `pos`.
    ///
    /// A retracted machine covers only its anchor.
    pub(crate) fn machine_covering(&self, state: &State, pos: Pos) -> Option<usize> {
        state
            .machines
            .iter()
            .zip(&self.machines)
            .position(|(ms, machine)| {
                (0..ms.len).any(|i| self.grid.offset(ms.pos, machine.dir, i) == Some(pos))
            })
    }

    pub fn format_state<'a>(&'a self, state: &'a State) -> MapFormatter<'a> {
        MapFormatter::new(self, state)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_state(&self.initial_state()))
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

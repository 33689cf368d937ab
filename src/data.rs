use std::fmt::{self, Debug, Display, Formatter};

/// Largest number of rows or columns - positions are stored as `u8`
pub const MAX_SIZE: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapCell {
    Empty,
    Block,
}

/// Row-major: derived ordering compares rows first, then columns.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub fn new(r: u8, c: u8) -> Pos {
        Pos { r, c }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.r, self.c)
    }
}

impl Debug for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    /// (rows, columns) moved by one step
    pub(crate) fn delta(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }

    pub(crate) fn is_horizontal(self) -> bool {
        self == Dir::Left || self == Dir::Right
    }

    pub(crate) fn from_arrow(c: char) -> Option<Dir> {
        match c {
            '^' => Some(Dir::Up),
            'v' => Some(Dir::Down),
            '<' => Some(Dir::Left),
            '>' => Some(Dir::Right),
            _ => None,
        }
    }

    pub(crate) fn arrow(self) -> char {
        match self {
            Dir::Up => '^',
            Dir::Down => 'v',
            Dir::Left => '<',
            Dir::Right => '>',
        }
    }

    /// Used by the compact format for a machine standing on a target
    pub(crate) fn from_letter(c: char) -> Option<Dir> {
        match c {
            'U' => Some(Dir::Up),
            'D' => Some(Dir::Down),
            'L' => Some(Dir::Left),
            'R' => Some(Dir::Right),
            _ => None,
        }
    }

    pub(crate) fn letter(self) -> char {
        match self {
            Dir::Up => 'U',
            Dir::Down => 'D',
            Dir::Left => 'L',
            Dir::Right => 'R',
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "up"),
            Dir::Down => write!(f, "down"),
            Dir::Left => write!(f, "left"),
            Dir::Right => write!(f, "right"),
        }
    }
}

/// What the static part of a machine looks like - where it started and where it's facing.
/// The current anchor and length live in `MachineState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Machine {
    pub pos: Pos,
    pub dir: Dir,
}

impl Machine {
    pub fn new(pos: Pos, dir: Dir) -> Self {
        Machine { pos, dir }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_row_major() {
        let mut positions = vec![
            Pos::new(1, 0),
            Pos::new(0, 5),
            Pos::new(0, 1),
            Pos::new(2, 2),
            Pos::new(1, 3),
        ];
        positions.sort();
        assert_eq!(
            positions,
            vec![
                Pos::new(0, 1),
                Pos::new(0, 5),
                Pos::new(1, 0),
                Pos::new(1, 3),
                Pos::new(2, 2),
            ]
        );
    }

    #[test]
    fn arrows() {
        for &dir in &Dir::ALL {
            assert_eq!(Dir::from_arrow(dir.arrow()), Some(dir));
            assert_eq!(Dir::from_letter(dir.letter()), Some(dir));
        }
        assert_eq!(Dir::from_arrow('x'), None);
        assert_eq!(Dir::from_letter('v'), None);
    }
}

use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Pos;

/// One activation of a machine.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tap {
    /// Index of the machine in the level
    pub machine: usize,
    /// Where the machine's anchor was when it was tapped
    pub pos: Pos,
}

impl Tap {
    pub(crate) fn new(machine: usize, pos: Pos) -> Self {
        Tap { machine, pos }
    }
}

impl Display for Tap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pos)
    }
}

impl Debug for Tap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}@{}", self.machine, self.pos)
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Taps(Vec<Tap>);

impl Taps {
    pub(crate) fn new(taps: Vec<Tap>) -> Self {
        Taps(taps)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Tap> {
        self.0.iter()
    }

    /// Just the cells to tap, in order
    pub fn positions(&self) -> Vec<Pos> {
        self.0.iter().map(|tap| tap.pos).collect()
    }
}

impl IntoIterator for Taps {
    type Item = Tap;
    type IntoIter = ::std::vec::IntoIter<Tap>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Taps {
    type Item = &'a Tap;
    type IntoIter = ::std::slice::Iter<'a, Tap>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Taps {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let positions: Vec<_> = self.0.iter().map(|tap| tap.to_string()).collect();
        write!(f, "{}", positions.join(" "))
    }
}

impl Debug for Taps {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_taps() {
        let taps = Taps::new(vec![
            Tap::new(0, Pos::new(1, 2)),
            Tap::new(1, Pos::new(3, 1)),
        ]);
        assert_eq!(taps.to_string(), "[1, 2] [3, 1]");
        assert_eq!(format!("{:?}", taps), "[#0@[1, 2], #1@[3, 1]]");
        assert_eq!(Taps::default().to_string(), "");
    }

    #[test]
    fn iterating() {
        let v = vec![
            Tap::new(0, Pos::new(0, 0)),
            Tap::new(2, Pos::new(4, 1)),
            Tap::new(0, Pos::new(0, 0)),
        ];
        let taps = Taps::new(v.clone());
        assert_eq!(taps.len(), 3);
        assert!(!taps.is_empty());
        assert_eq!(
            taps.positions(),
            vec![Pos::new(0, 0), Pos::new(4, 1), Pos::new(0, 0)]
        );

        let mut v2 = Vec::new();
        for &t in &taps {
            v2.push(t);
        }
        for &t in taps.iter() {
            v2.push(t);
        }
        for t in taps {
            v2.push(t);
        }
        assert_eq!(v2.len(), 9);
        for chunk in v2.chunks(3) {
            assert_eq!(chunk, &v[..]);
        }
    }
}

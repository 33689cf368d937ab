use std::fmt::{self, Display, Formatter};

/// Level file format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// One char per cell, targets drawn on the same grid as everything else
    Compact,
    /// Target grid and maze grid in separate sections, one cell per odd column
    Sections,
}

/// How coordinates of taps are presented
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indexing {
    ZeroBased,
    OneBased,
}

impl Indexing {
    pub fn offset(self) -> usize {
        match self {
            Indexing::ZeroBased => 0,
            Indexing::OneBased => 1,
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Format::Compact => write!(f, "compact"),
            Format::Sections => write!(f, "sections"),
        }
    }
}

impl Display for Indexing {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Indexing::ZeroBased => write!(f, "0"),
            Indexing::OneBased => write!(f, "1"),
        }
    }
}

use std::fmt::{self, Debug, Display, Formatter};

use prettytable::format::consts::FORMAT_CLEAN;
use prettytable::{Cell, Row, Table};
use separator::Separatable;

/// Counts of states by search depth.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Stats {
    created_states: Vec<i32>,
    duplicate_states: Vec<i32>,
    unique_states: Vec<i32>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> i32 {
        self.created_states.iter().sum::<i32>()
    }

    pub fn total_reached_duplicates(&self) -> i32 {
        self.duplicate_states.iter().sum::<i32>()
    }

    pub fn total_unique(&self) -> i32 {
        self.unique_states.iter().sum::<i32>()
    }

    pub fn max_depth(&self) -> usize {
        self.created_states.len().saturating_sub(1)
    }

    /// Returns true if this is the first state at this depth.
    pub(crate) fn add_created(&mut self, depth: usize) -> bool {
        Self::add(&mut self.created_states, depth)
    }

    pub(crate) fn add_reached_duplicate(&mut self, depth: usize) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    pub(crate) fn add_unique(&mut self, depth: usize) -> bool {
        Self::add(&mut self.unique_states, depth)
    }

    fn add(counts: &mut Vec<i32>, depth: usize) -> bool {
        let mut ret = false;
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*FORMAT_CLEAN);
        table.set_titles(Row::new(vec![
            Cell::new("Depth"),
            Cell::new("Created"),
            Cell::new("Unique"),
            Cell::new("Duplicates"),
        ]));
        // created is always the longest
        for (depth, &created) in self.created_states.iter().enumerate() {
            let unique = self.unique_states.get(depth).cloned().unwrap_or(0);
            let duplicates = self.duplicate_states.get(depth).cloned().unwrap_or(0);
            table.add_row(Row::new(vec![
                Cell::new(&format!("{}:", depth)),
                Cell::new(&created.separated_string()),
                Cell::new(&unique.separated_string()),
                Cell::new(&duplicates.separated_string()),
            ]));
        }
        table
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "unique by depth: {:?}", self.unique_states)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(
            f,
            "total reached duplicates: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(f, "total unique: {}", self.total_unique().separated_string())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "States created total: {}", self.total_created().separated_string())?;
        writeln!(f, "Unique states total: {}", self.total_unique().separated_string())?;
        writeln!(
            f,
            "Reached duplicates total: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(f)?;
        write!(f, "{}", self.table())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_by_depth() {
        let mut stats = Stats::new();
        assert!(stats.add_created(0));
        assert!(stats.add_unique(0));
        assert!(stats.add_created(1));
        assert!(!stats.add_created(1));
        assert!(stats.add_unique(1));
        // depths can be skipped
        assert!(stats.add_reached_duplicate(1));
        assert!(stats.add_created(3));

        assert_eq!(stats.total_created(), 4);
        assert_eq!(stats.total_unique(), 2);
        assert_eq!(stats.total_reached_duplicates(), 1);
        assert_eq!(stats.max_depth(), 3);
        assert_eq!(stats.created_states, vec![1, 2, 0, 1]);
    }

    #[test]
    fn formatting() {
        let mut stats = Stats::new();
        for _ in 0..1234 {
            stats.add_created(0);
        }
        stats.add_unique(0);

        let out = stats.to_string();
        assert!(out.starts_with("States created total: 1,234\nUnique states total: 1\n"));
        assert!(out.contains("Depth"));
        assert!(out.contains("0:"));

        let debug = format!("{:?}", stats);
        assert!(debug.contains("created by depth: [1234]"));
        assert!(debug.contains("total created: 1,234"));
    }
}

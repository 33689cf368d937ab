mod stats;
pub(crate) mod transition;

use std::fmt::{self, Debug, Formatter};

use fnv::FnvHashMap;
use log::{debug, info, trace};

use crate::level::Level;
use crate::state::State;
use crate::taps::{Tap, Taps};
use crate::Solve;

pub use self::stats::Stats;

/// Visited states, each with the state it was first reached from and the tap that got there.
/// The initial state has no parent.
type Prevs = FnvHashMap<State, Option<(State, Tap)>>;

pub struct SolverOk {
    /// `None` if no reachable state has every box on a target
    pub taps: Option<Taps>,
    pub stats: Stats,
}

impl SolverOk {
    fn new(taps: Option<Taps>, stats: Stats) -> Self {
        Self { taps, stats }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.taps {
            None => writeln!(f, "No solution")?,
            Some(ref taps) => writeln!(f, "Taps: {}", taps.len())?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Level {
    fn solve(&self, print_status: bool) -> SolverOk {
        search(self, print_status)
    }
}

/// Breadth first search over whole levels of depth.
///
/// All states of one depth are checked for the goal before any of them is expanded
/// so the first solution found has the fewest taps. Ties are broken by discovery order
/// and machine index which makes the result deterministic.
fn search(level: &Level, print_status: bool) -> SolverOk {
    debug!("Search called");

    let mut stats = Stats::new();
    let mut prevs = Prevs::default();

    let start = level.initial_state();
    stats.add_created(0);
    stats.add_unique(0);
    prevs.insert(start.clone(), None);

    let mut depth = 0;
    let mut frontier = vec![start];
    while !frontier.is_empty() {
        if print_status {
            println!("Visited new depth: {}", depth);
            println!("States at this depth: {}", frontier.len());
            println!();
        }
        debug!("Depth {}: {} states", depth, frontier.len());

        let mut next_frontier = Vec::new();
        for state in &frontier {
            if level.is_solved(state) {
                debug!("Solved at depth {}, backtracking path", depth);
                return SolverOk::new(Some(backtrack_taps(&prevs, state)), stats);
            }

            for machine_index in 0..state.machines.len() {
                let new_state = match transition::tap(level, state, machine_index) {
                    Some(new_state) => new_state,
                    None => continue,
                };
                stats.add_created(depth + 1);

                if prevs.contains_key(&new_state) {
                    stats.add_reached_duplicate(depth + 1);
                    continue;
                }
                stats.add_unique(depth + 1);

                trace!("New state via machine {}: {:?}", machine_index, new_state);
                let tap = Tap::new(machine_index, state.machines[machine_index].pos);
                prevs.insert(new_state.clone(), Some((state.clone(), tap)));
                next_frontier.push(new_state);
            }
        }

        frontier = next_frontier;
        depth += 1;
    }

    info!("Exhausted {} states without a solution", prevs.len());
    SolverOk::new(None, stats)
}

fn backtrack_taps(prevs: &Prevs, final_state: &State) -> Taps {
    let mut taps = Vec::new();
    let mut state = final_state;
    while let Some((prev, tap)) = &prevs[state] {
        taps.push(*tap);
        state = prev;
    }
    taps.reverse();
    Taps::new(taps)
}

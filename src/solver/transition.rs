use crate::data::{Dir, Pos};
use crate::level::Level;
use crate::state::State;

// Terminology:
// tap = the only player action, toggles one machine
// extend = grow a retracted machine until it's blocked
// retract = shrink an extended machine back to length 1
// front = first cell past the machine, beyond = the one after that

/// Activates machine `machine_index`.
///
/// Returns `None` when the tap wouldn't change anything (a retracted machine that can't grow)
/// so it's never treated as a move.
pub(crate) fn tap(level: &Level, state: &State, machine_index: usize) -> Option<State> {
    let mut new_state = state.clone();

    if new_state.machines[machine_index].is_extended() {
        new_state.machines[machine_index].len = 1;
        return Some(new_state);
    }

    // each successful step makes the machine longer and its front must stay on the grid
    // so this always terminates
    let mut grown = false;
    while grow(level, &mut new_state, machine_index) {
        grown = true;
    }

    if grown {
        Some(new_state)
    } else {
        None
    }
}

/// Extends the machine by one cell, pushing whatever is in front of it if possible.
fn grow(level: &Level, state: &mut State, machine_index: usize) -> bool {
    let dir = level.machines[machine_index].dir;
    let machine = state.machines[machine_index];

    let front = match level.grid.offset(machine.pos, dir, machine.len) {
        Some(front) if !level.is_block(front) => front,
        _ => return false,
    };

    if let Some(box_index) = state.box_at(front) {
        match landing(level, state, front, dir) {
            Some(beyond) => state.boxes[box_index] = beyond,
            None => return false,
        }
    } else if let Some(pushed_index) = state.retracted_machine_at(front) {
        // moves as a single cell, it doesn't extend
        match landing(level, state, front, dir) {
            Some(beyond) => state.machines[pushed_index].pos = beyond,
            None => return false,
        }
    } else if level.machine_covering(state, front).is_some() {
        // extended machines can't be pushed
        return false;
    }

    state.machines[machine_index].len += 1;
    true
}

/// Where something pushed out of `front` ends up, if it's free.
///
/// Free means on the grid, not a block, no box and no machine - that includes the anchors
/// of retracted machines, a pushed object can't share a cell with one.
fn landing(level: &Level, state: &State, front: Pos, dir: Dir) -> Option<Pos> {
    let beyond = level.grid.offset(front, dir, 1)?;
    if level.is_block(beyond)
        || state.box_at(beyond).is_some()
        || level.machine_covering(state, beyond).is_some()
    {
        return None;
    }
    Some(beyond)
}

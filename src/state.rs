use crate::data::Pos;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MachineState {
    /// Anchor cell - the machine's start cell unless it has been pushed while retracted.
    pub pos: Pos,
    /// Number of occupied cells counting from the anchor, 1 means retracted.
    pub len: u8,
}

impl MachineState {
    pub fn new(pos: Pos, len: u8) -> Self {
        MachineState { pos, len }
    }

    pub fn is_extended(&self) -> bool {
        self.len > 1
    }
}

/// One search node - everything that can move.
///
/// Boxes and machines keep the index order of the level, they're not sorted,
/// so equal states always compare equal no matter in which order they were found.
/// Derived ordering compares boxes first, then machines.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    pub boxes: Vec<Pos>,
    pub machines: Vec<MachineState>,
}

impl State {
    pub fn new(boxes: Vec<Pos>, machines: Vec<MachineState>) -> State {
        State { boxes, machines }
    }

    pub(crate) fn box_at(&self, pos: Pos) -> Option<usize> {
        self.boxes.iter().position(|&b| b == pos)
    }

    pub(crate) fn retracted_machine_at(&self, pos: Pos) -> Option<usize> {
        self.machines
            .iter()
            .position(|m| !m.is_extended() && m.pos == pos)
    }
}

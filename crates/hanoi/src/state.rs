use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::{
    domain::{Disk, DiskCount, Move, Peg},
    moves::MoveSequence,
};

/// Disks on each peg, bottom to top.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PegState {
    pegs: [Vec<Disk>; 3],
}

impl PegState {
    /// All disks stacked on `source`, largest at the bottom.
    pub fn initial(disks: DiskCount, source: Peg) -> Self {
        let mut pegs: [Vec<Disk>; 3] = Default::default();
        pegs[source.index()] = disks.disks().rev().collect();
        Self { pegs }
    }

    pub fn peg(&self, peg: Peg) -> &[Disk] {
        &self.pegs[peg.index()]
    }

    pub fn top(&self, peg: Peg) -> Option<Disk> {
        self.pegs[peg.index()].last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Peg, &[Disk])> {
        Peg::ALL.into_iter().map(|peg| (peg, self.peg(peg)))
    }

    pub fn disk_count(&self) -> usize {
        self.pegs.iter().map(Vec::len).sum()
    }

    /// True when every disk sits on `peg`.
    pub fn all_on(&self, peg: Peg) -> bool {
        Peg::ALL
            .into_iter()
            .filter(|other| *other != peg)
            .all(|other| self.peg(other).is_empty())
    }

    /// Moves the top disk of `mv.from` onto `mv.to` and returns it. A move from
    /// an empty peg leaves the state untouched and returns `None`.
    pub fn apply(&mut self, mv: Move) -> Option<Disk> {
        let disk = self.pegs[mv.from.index()].pop()?;
        self.pegs[mv.to.index()].push(disk);
        Some(disk)
    }
}

impl Serialize for PegState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.pegs.len()))?;
        for (peg, disks) in self.iter() {
            map.serialize_entry(peg.label(), disks)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MovedDisk {
    pub disk: Disk,
    pub from: Peg,
    pub to: Peg,
}

/// Puzzle state after `step` moves, plus the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub step: usize,
    pub state: PegState,
    /// `None` at step 0, or when the last applied move was degenerate.
    pub last_move: Option<MovedDisk>,
}

/// Clamps a requested step into `[0, total_moves]`.
pub fn clamp_step(requested: i64, total_moves: usize) -> usize {
    if requested <= 0 {
        return 0;
    }
    usize::try_from(requested).map_or(total_moves, |step| step.min(total_moves))
}

/// Replays the first `step` moves from the initial state on `source`.
/// `step` past the end of `moves` replays the whole list.
pub fn replay(disks: DiskCount, source: Peg, moves: &[Move], step: usize) -> Snapshot {
    let step = step.min(moves.len());
    let mut state = PegState::initial(disks, source);
    let mut last_move = None;
    for mv in &moves[..step] {
        last_move = state.apply(*mv).map(|disk| MovedDisk {
            disk,
            from: mv.from,
            to: mv.to,
        });
    }
    Snapshot {
        step,
        state,
        last_move,
    }
}

pub fn snapshot(disks: DiskCount, moves: &MoveSequence, step: i64) -> Snapshot {
    let step = clamp_step(step, moves.len());
    replay(disks, moves.source(), moves.moves(), step)
}

/// State after `step` moves of `moves`, with `step` clamped into range.
pub fn reconstruct(disks: DiskCount, moves: &MoveSequence, step: i64) -> PegState {
    snapshot(disks, moves, step).state
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;

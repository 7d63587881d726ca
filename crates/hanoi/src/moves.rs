use serde::Serialize;

use crate::domain::{DiskCount, Move, Peg};

/// Ordered, immutable list of moves that carries a stack from `source` to `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveSequence {
    source: Peg,
    target: Peg,
    moves: Vec<Move>,
}

impl MoveSequence {
    /// Wraps a caller-supplied list. Nothing checks that the list is a legal
    /// solution; replay tolerates moves from empty pegs.
    pub fn from_moves(source: Peg, target: Peg, moves: Vec<Move>) -> Self {
        Self {
            source,
            target,
            moves,
        }
    }

    pub fn source(&self) -> Peg {
        self.source
    }

    pub fn target(&self) -> Peg {
        self.target
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Move> {
        self.moves.get(index).copied()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Move> {
        self.moves.iter()
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Classic recursive solution: park `n - 1` disks on the spare peg, move the
/// largest disk, then bring the `n - 1` disks back on top of it.
pub fn generate(disks: DiskCount, source: Peg, target: Peg, auxiliary: Peg) -> MoveSequence {
    debug_assert!(
        source != target && source != auxiliary && target != auxiliary,
        "peg roles must be distinct"
    );

    let mut moves = Vec::with_capacity(disks.total_moves());
    push_moves(disks.get(), source, target, auxiliary, &mut moves);
    MoveSequence {
        source,
        target,
        moves,
    }
}

/// Solution from peg A to peg C using B as the spare.
pub fn solve(disks: DiskCount) -> MoveSequence {
    generate(disks, Peg::A, Peg::C, Peg::B)
}

fn push_moves(n: u8, source: Peg, target: Peg, auxiliary: Peg, out: &mut Vec<Move>) {
    if n == 1 {
        out.push(Move::new(source, target));
        return;
    }
    push_moves(n - 1, source, auxiliary, target, out);
    out.push(Move::new(source, target));
    push_moves(n - 1, auxiliary, target, source, out);
}

#[cfg(test)]
#[path = "tests/moves_tests.rs"]
mod tests;

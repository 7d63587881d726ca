//! Property-based tests for move generation and state replay.

use std::collections::BTreeSet;

use hanoi::{generate, reconstruct, solve, snapshot, Disk, DiskCount, Peg, PegState};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_count()(n in 1i64..=10) -> DiskCount {
        DiskCount::new(n).expect("in range")
    }
}

prop_compose! {
    fn arbitrary_roles()(rotation in 0usize..6) -> (Peg, Peg, Peg) {
        use Peg::{A, B, C};
        [(A, C, B), (A, B, C), (B, A, C), (B, C, A), (C, A, B), (C, B, A)][rotation]
    }
}

fn strictly_decreasing(disks: &[Disk]) -> bool {
    disks.windows(2).all(|pair| pair[0] > pair[1])
}

fn disk_set(state: &PegState) -> BTreeSet<u8> {
    state
        .iter()
        .flat_map(|(_, disks)| disks.iter().map(|disk| disk.0))
        .collect()
}

proptest! {
    #[test]
    fn full_replay_ends_on_target(disks in arbitrary_count(), (source, target, spare) in arbitrary_roles()) {
        let moves = generate(disks, source, target, spare);
        prop_assert_eq!(moves.len(), disks.total_moves());
        let state = reconstruct(disks, &moves, moves.len() as i64);
        prop_assert!(state.all_on(target));
        prop_assert_eq!(state.peg(target).len(), usize::from(disks.get()));
    }

    #[test]
    fn every_step_is_a_legal_stacking(disks in arbitrary_count()) {
        let moves = solve(disks);
        let expected: BTreeSet<u8> = (1..=disks.get()).collect();
        for step in 0..=moves.len() {
            let state = reconstruct(disks, &moves, step as i64);
            for (_, pegged) in state.iter() {
                prop_assert!(strictly_decreasing(pegged));
            }
            prop_assert_eq!(state.disk_count(), usize::from(disks.get()));
            prop_assert_eq!(disk_set(&state), expected.clone());
        }
    }

    #[test]
    fn consecutive_steps_differ_by_one_disk(disks in arbitrary_count(), seed in any::<u32>()) {
        let moves = solve(disks);
        let k = seed as usize % moves.len();
        let before = reconstruct(disks, &moves, k as i64);
        let after = snapshot(disks, &moves, k as i64 + 1);
        let mv = moves.get(k).expect("k < len");

        let moved = after.last_move.expect("generated moves are never degenerate");
        prop_assert_eq!(moved.from, mv.from);
        prop_assert_eq!(moved.to, mv.to);
        prop_assert_eq!(before.top(mv.from), Some(moved.disk));
        prop_assert_eq!(after.state.top(mv.to), Some(moved.disk));

        for peg in Peg::ALL {
            if peg == mv.from {
                prop_assert_eq!(after.state.peg(peg), &before.peg(peg)[..before.peg(peg).len() - 1]);
            } else if peg == mv.to {
                prop_assert_eq!(&after.state.peg(peg)[..before.peg(peg).len()], before.peg(peg));
            } else {
                prop_assert_eq!(after.state.peg(peg), before.peg(peg));
            }
        }
    }

    #[test]
    fn reconstruct_is_idempotent(disks in arbitrary_count(), step in any::<i64>()) {
        let moves = solve(disks);
        prop_assert_eq!(reconstruct(disks, &moves, step), reconstruct(disks, &moves, step));
    }

    #[test]
    fn out_of_range_steps_clamp_to_bounds(disks in arbitrary_count(), below in i64::MIN..0, above in 1i64..1_000_000) {
        let moves = solve(disks);
        let total = moves.len() as i64;
        prop_assert_eq!(reconstruct(disks, &moves, below), PegState::initial(disks, Peg::A));
        prop_assert_eq!(reconstruct(disks, &moves, total + above), reconstruct(disks, &moves, total));
    }

    #[test]
    fn counts_outside_range_are_rejected(n in prop_oneof![i64::MIN..1, 16i64..i64::MAX]) {
        prop_assert!(DiskCount::new(n).is_err());
    }
}

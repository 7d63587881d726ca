//! Step navigation.
//!
//! The only mutable thing a viewer holds is the step index. Every transition
//! produces a new cursor clamped to `[0, total_moves]`.

use crate::state::clamp_step;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Previous,
    Next,
    Jump(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCursor {
    step: usize,
    total_moves: usize,
}

impl StepCursor {
    pub fn new(requested: i64, total_moves: usize) -> Self {
        Self {
            step: clamp_step(requested, total_moves),
            total_moves,
        }
    }

    pub fn start(total_moves: usize) -> Self {
        Self {
            step: 0,
            total_moves,
        }
    }

    pub fn step(self) -> usize {
        self.step
    }

    pub fn total_moves(self) -> usize {
        self.total_moves
    }

    pub fn at_start(self) -> bool {
        self.step == 0
    }

    pub fn at_end(self) -> bool {
        self.step == self.total_moves
    }

    #[must_use]
    pub fn navigate(self, navigation: Navigation) -> Self {
        let step = match navigation {
            Navigation::Previous => self.step.saturating_sub(1),
            Navigation::Next => self.step.saturating_add(1).min(self.total_moves),
            Navigation::Jump(requested) => clamp_step(requested, self.total_moves),
        };
        Self { step, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_stops_at_zero() {
        let cursor = StepCursor::start(7).navigate(Navigation::Previous);
        assert_eq!(cursor.step(), 0);
        assert!(cursor.at_start());
    }

    #[test]
    fn next_stops_at_total_moves() {
        let cursor = StepCursor::new(7, 7).navigate(Navigation::Next);
        assert_eq!(cursor.step(), 7);
        assert!(cursor.at_end());
    }

    #[test]
    fn jump_clamps_both_ways() {
        let cursor = StepCursor::start(7);
        assert_eq!(cursor.navigate(Navigation::Jump(-3)).step(), 0);
        assert_eq!(cursor.navigate(Navigation::Jump(4)).step(), 4);
        assert_eq!(cursor.navigate(Navigation::Jump(99)).step(), 7);
    }

    #[test]
    fn out_of_range_start_is_clamped_before_navigating() {
        assert_eq!(StepCursor::new(50, 7).navigate(Navigation::Previous).step(), 6);
        assert_eq!(StepCursor::new(-5, 7).navigate(Navigation::Next).step(), 1);
    }
}

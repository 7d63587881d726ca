use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::HanoiError;

macro_rules! id_newtype {
    ($name:ident, $repr:ty) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub $repr);
    };
}

// Larger ids are larger disks.
id_newtype!(Disk, u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Peg {
    A,
    B,
    C,
}

impl Peg {
    pub const ALL: [Peg; 3] = [Peg::A, Peg::B, Peg::C];

    pub fn index(self) -> usize {
        match self {
            Peg::A => 0,
            Peg::B => 1,
            Peg::C => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Peg::A => "A",
            Peg::B => "B",
            Peg::C => "C",
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Relocation of the topmost disk of `from` onto `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Peg,
    pub to: Peg,
}

impl Move {
    pub fn new(from: Peg, to: Peg) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// A disk count that has already been checked against `[MIN, MAX]`.
///
/// Every core operation takes a `DiskCount`, so the bound is enforced once
/// where user input enters the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DiskCount(u8);

impl DiskCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 15;
    pub const DEFAULT: DiskCount = DiskCount(3);

    pub fn new(requested: i64) -> Result<Self, HanoiError> {
        if requested < i64::from(Self::MIN) || requested > i64::from(Self::MAX) {
            return Err(HanoiError::InvalidDiskCount { requested });
        }
        Ok(Self(requested as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Length of the optimal solution, `2^n - 1`.
    pub fn total_moves(self) -> usize {
        (1usize << self.0) - 1
    }

    pub fn disks(self) -> impl DoubleEndedIterator<Item = Disk> {
        (1..=self.0).map(Disk)
    }
}

impl Default for DiskCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<'de> Deserialize<'de> for DiskCount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        DiskCount::new(raw).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for DiskCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disk_count_rejects_zero_and_sixteen() {
        assert_eq!(
            DiskCount::new(0),
            Err(HanoiError::InvalidDiskCount { requested: 0 })
        );
        assert_eq!(
            DiskCount::new(16),
            Err(HanoiError::InvalidDiskCount { requested: 16 })
        );
        assert!(DiskCount::new(-1).is_err());
    }

    #[test]
    fn disk_count_accepts_bounds() {
        assert_eq!(DiskCount::new(1).map(DiskCount::get), Ok(1));
        assert_eq!(DiskCount::new(15).map(DiskCount::total_moves), Ok(32767));
    }

    #[test]
    fn disk_count_deserialize_validates() {
        let parsed: DiskCount = serde_json::from_str("4").expect("valid");
        assert_eq!(parsed.get(), 4);
        assert!(serde_json::from_str::<DiskCount>("99").is_err());
    }

    #[test]
    fn move_displays_as_arrow() {
        assert_eq!(Move::new(Peg::A, Peg::C).to_string(), "A -> C");
    }
}

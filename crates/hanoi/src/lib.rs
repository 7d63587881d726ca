pub mod domain;
pub mod error;
pub mod moves;
pub mod navigation;
pub mod state;

pub use domain::{Disk, DiskCount, Move, Peg};
pub use error::{ApiError, ErrorCode, HanoiError};
pub use moves::{generate, solve, MoveSequence};
pub use navigation::{Navigation, StepCursor};
pub use state::{clamp_step, reconstruct, replay, snapshot, MovedDisk, PegState, Snapshot};

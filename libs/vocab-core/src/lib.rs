//! Core review engine for a vocabulary trainer.
//!
//! Provides:
//! - SM-2-family spaced repetition scheduling with derived difficulty
//! - Due-set selection, hardest items first
//! - Points, streak and level accumulation
//! - Monotonic achievement unlocking
//!
//! Every operation is a pure computation over immutable snapshots; the
//! caller owns persistence and supplies the clock.

pub mod achievements;
pub mod error;
pub mod progress;
pub mod queue;
pub mod scheduler;
pub mod session;
pub mod types;

pub use achievements::{check_achievements, AchievementId};
pub use error::{EngineError, Result};
pub use progress::{apply_outcome, level_for_points, points_for_answer, points_for_level};
pub use queue::{select_due, QueueCandidate};
pub use scheduler::{estimate_difficulty, SchedulingResult, Sm2};
pub use session::{record_answer, AnswerOutcome};
pub use types::{ProgressState, Quality, ReviewState};

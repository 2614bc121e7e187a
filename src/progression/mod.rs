//! Progression projector: levels, stats, skills and milestones per chapter.

pub mod catalog;
pub mod projector;
pub mod settings;

pub use projector::{project, ProgressionSnapshot};
pub use settings::{LevelingCurve, Milestone, ProgressionSettings};

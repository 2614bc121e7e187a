//! Character attributes and the state a projection starts from.

pub mod attributes;
pub mod state;

pub use attributes::{AttributeBlock, AttributeType, Attributes};
pub use state::CharacterState;

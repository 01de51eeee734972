//! Game engine.
//!
//! - `transition`: pure snapshot-to-snapshot functions
//! - `scheduler`: deferred rolls and auto-passes on a logical clock
//! - `query`: turn phase and legality questions for a UI
//! - `events`: what accepted commands and timers report
//! - `game`: `GameEngine`, which owns the live snapshot and the timers

pub mod events;
pub mod game;
pub mod query;
pub mod scheduler;
pub mod transition;

pub use events::GameEvent;
pub use game::GameEngine;
pub use query::TurnPhase;
pub use scheduler::{Scheduler, Timer};
pub use transition::Transition;

//! Async host for a single game.
//!
//! [`GameHandle::spawn`] starts a tokio task that owns the engine. Handles
//! send commands and read snapshots; subscribers receive every event,
//! including the ones produced when a timer fires with no command pending.

mod actor;
pub mod error;
pub mod handle;

pub use error::{Result, RuntimeError};
pub use handle::GameHandle;

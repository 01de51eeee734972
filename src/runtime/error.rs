//! Errors surfaced by [`GameHandle`](super::GameHandle).

use thiserror::Error;
use tokio::sync::oneshot;

use crate::rules::MoveRejection;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("game actor command channel closed")]
    CommandChannelClosed,

    #[error("game actor reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error(transparent)]
    Rejected(#[from] MoveRejection),
}

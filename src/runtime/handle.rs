//! Cloneable façade for talking to a running game.

use tokio::sync::{broadcast, mpsc, oneshot};

use super::actor::{GameActor, Request};
use super::error::{Result, RuntimeError};
use crate::core::{Command, DiceSource, GameState, RulesConfig, TokenId};
use crate::engine::{GameEngine, GameEvent};
use crate::rules::RulesEngine;

const REQUEST_CAPACITY: usize = 64;
const EVENT_CAPACITY: usize = 256;

/// Client-facing handle to a game actor.
///
/// The actor stops once every clone of the handle is dropped.
#[derive(Clone, Debug)]
pub struct GameHandle {
    request_tx: mpsc::Sender<Request>,
    events: broadcast::Sender<GameEvent>,
}

impl GameHandle {
    /// Spawn a classic game on the current tokio runtime.
    pub fn spawn(config: RulesConfig) -> Self {
        Self::spawn_engine(GameEngine::new(config))
    }

    /// Spawn an actor around an existing engine.
    pub fn spawn_engine<R, D>(engine: GameEngine<R, D>) -> Self
    where
        R: RulesEngine + Send + 'static,
        D: DiceSource + Send + 'static,
    {
        let (request_tx, request_rx) = mpsc::channel(REQUEST_CAPACITY);
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        let actor = GameActor::new(engine, request_rx, events.clone());
        tokio::spawn(actor.run());

        Self { request_tx, events }
    }

    /// Apply a command and return the events it produced.
    pub async fn dispatch(&self, command: Command) -> Result<Vec<GameEvent>> {
        let (reply, reply_rx) = oneshot::channel();
        self.send(Request::Dispatch { command, reply }).await?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    pub async fn roll(&self) -> Result<Vec<GameEvent>> {
        self.dispatch(Command::Roll).await
    }

    pub async fn move_token(&self, token: TokenId) -> Result<Vec<GameEvent>> {
        self.dispatch(Command::Move(token)).await
    }

    pub async fn pass(&self) -> Result<Vec<GameEvent>> {
        self.dispatch(Command::Pass).await
    }

    pub async fn reset(&self) -> Result<Vec<GameEvent>> {
        self.dispatch(Command::Reset).await
    }

    /// Move a token; a refused move comes back as [`RuntimeError::Rejected`].
    pub async fn try_move(&self, token: TokenId) -> Result<Vec<GameEvent>> {
        let (reply, reply_rx) = oneshot::channel();
        self.send(Request::TryMove { token, reply }).await?;
        Ok(reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)??)
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> Result<GameState> {
        let (reply, reply_rx) = oneshot::channel();
        self.send(Request::QueryState { reply }).await?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Stream of every event from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<GameEvent> {
        self.events.subscribe()
    }

    async fn send(&self, request: Request) -> Result<()> {
        self.request_tx
            .send(request)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }
}

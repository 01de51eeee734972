//! Background task that owns the authoritative [`GameEngine`].
//!
//! Commands arrive over an mpsc channel; engine timers are mapped onto
//! tokio's clock with `sleep_until`. Every event the engine produces is
//! published on a broadcast channel.

use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, trace};

use crate::core::{Command, DiceSource, GameState, TokenId};
use crate::engine::{GameEngine, GameEvent};
use crate::rules::{MoveRejection, RulesEngine};

/// Requests the actor understands.
pub(crate) enum Request {
    Dispatch {
        command: Command,
        reply: oneshot::Sender<Vec<GameEvent>>,
    },
    TryMove {
        token: TokenId,
        reply: oneshot::Sender<Result<Vec<GameEvent>, MoveRejection>>,
    },
    QueryState {
        reply: oneshot::Sender<GameState>,
    },
}

pub(crate) struct GameActor<R, D> {
    engine: GameEngine<R, D>,
    epoch: Instant,
    request_rx: mpsc::Receiver<Request>,
    events: broadcast::Sender<GameEvent>,
}

impl<R: RulesEngine, D: DiceSource> GameActor<R, D> {
    pub(crate) fn new(
        engine: GameEngine<R, D>,
        request_rx: mpsc::Receiver<Request>,
        events: broadcast::Sender<GameEvent>,
    ) -> Self {
        // Engine time zero is now; it may already have advanced.
        let epoch = Instant::now() - engine.now();
        Self {
            engine,
            epoch,
            request_rx,
            events,
        }
    }

    /// Run until every handle is dropped.
    pub(crate) async fn run(mut self) {
        loop {
            let deadline = self.engine.next_deadline().map(|due| self.epoch + due);

            tokio::select! {
                request = self.request_rx.recv() => match request {
                    Some(request) => self.handle(request),
                    None => break,
                },
                () = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    self.catch_up();
                }
            }
        }
        debug!("game actor stopped, all handles dropped");
    }

    fn handle(&mut self, request: Request) {
        // Timers that came due while waiting fire before the request.
        self.catch_up();

        match request {
            Request::Dispatch { command, reply } => {
                trace!(%command, "dispatch");
                let events = self.engine.dispatch(command);
                self.publish(&events);
                if reply.send(events).is_err() {
                    debug!("Dispatch reply channel closed (caller dropped)");
                }
            }
            Request::TryMove { token, reply } => {
                let result = self.engine.try_move(token);
                if let Ok(events) = &result {
                    self.publish(events);
                }
                if reply.send(result).is_err() {
                    debug!("TryMove reply channel closed (caller dropped)");
                }
            }
            Request::QueryState { reply } => {
                if reply.send(self.engine.state().clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn catch_up(&mut self) {
        let events = self.engine.advance_to(self.epoch.elapsed());
        self.publish(&events);
    }

    fn publish(&self, events: &[GameEvent]) {
        for event in events {
            if self.events.send(event.clone()).is_err() {
                // No subscribers is normal
                trace!(?event, "no event subscribers");
            }
        }
    }
}

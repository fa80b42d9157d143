//! Game session: the engine behind a mutex plus the giveaway drumroll
//!
//! Each action locks the engine, runs to completion and unlocks, so actions
//! never interleave. Joining a giveaway schedules a Tokio task that waits for
//! the drumroll delay and then settles the draw. Resetting or dropping the
//! session aborts those tasks; a draw that already woke up is rejected by the
//! engine's generation check instead of touching the new session.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::progression::{
    ClaimResult, DrawOutcome, Engine, EngineError, Profile, ProgressionEvent, Purchase, TaskId,
    Ticket,
};

/// A settled giveaway draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawResult {
    pub ticket: Ticket,
    pub outcome: DrawOutcome,
}

type DrawHandles = Arc<Mutex<HashMap<u64, JoinHandle<()>>>>;

/// Shared, single-actor wrapper around [`Engine`]
pub struct GameSession {
    engine: Arc<Mutex<Engine>>,
    draws: DrawHandles,
    drumroll: Duration,
    results_tx: mpsc::UnboundedSender<DrawResult>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A panic while holding the lock leaves the data consistent: every engine
    // operation validates before it mutates
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl GameSession {
    /// Wrap an engine. Settled draws are published on the returned receiver.
    pub fn new(engine: Engine) -> (Self, mpsc::UnboundedReceiver<DrawResult>) {
        let drumroll = engine.config().session.drumroll();
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        let session = Self {
            engine: Arc::new(Mutex::new(engine)),
            draws: Arc::new(Mutex::new(HashMap::new())),
            drumroll,
            results_tx,
        };
        (session, results_rx)
    }

    pub fn drumroll(&self) -> Duration {
        self.drumroll
    }

    /// Run a closure against the locked engine (queries, custom actions)
    pub fn with_engine<T>(&self, f: impl FnOnce(&mut Engine) -> T) -> T {
        f(&mut *lock(&self.engine))
    }

    /// Pay for a giveaway and schedule its draw after the drumroll.
    ///
    /// Outside a Tokio runtime this fails with [`EngineError::NoRuntime`]
    /// before any coins move.
    pub fn join_giveaway(&self, giveaway_id: u32) -> Result<Ticket, EngineError> {
        let runtime = Handle::try_current().map_err(|_| EngineError::NoRuntime)?;
        let ticket = lock(&self.engine).join_giveaway(giveaway_id)?;

        let engine = Arc::clone(&self.engine);
        let draws = Arc::clone(&self.draws);
        let results_tx = self.results_tx.clone();
        let drumroll = self.drumroll;

        // Hold the handle map while spawning so the task cannot finish and
        // deregister before it is registered
        let mut handles = lock(&self.draws);
        let handle = runtime.spawn(async move {
            tokio::time::sleep(drumroll).await;

            let settled = lock(&engine).settle_draw(ticket);
            lock(&draws).remove(&ticket.id);

            match settled {
                Ok(outcome) => {
                    let _ = results_tx.send(DrawResult { ticket, outcome });
                }
                Err(err) => debug!("Draw for ticket #{} dropped: {}", ticket.id, err),
            }
        });
        handles.insert(ticket.id, handle);

        Ok(ticket)
    }

    pub fn buy_item(&self, item_id: u32) -> Result<Purchase, EngineError> {
        lock(&self.engine).buy_item(item_id)
    }

    pub fn claim_task(&self, task_id: TaskId) -> Result<ClaimResult, EngineError> {
        lock(&self.engine).claim_task(task_id)
    }

    pub fn start_new_cycle(&self) {
        lock(&self.engine).start_new_cycle();
    }

    pub fn profile(&self) -> Profile {
        lock(&self.engine).profile()
    }

    pub fn drain_events(&self) -> Vec<ProgressionEvent> {
        lock(&self.engine).drain_events()
    }

    /// Draws scheduled but not yet settled
    pub fn pending_draws(&self) -> usize {
        lock(&self.draws).len()
    }

    /// Cancel every scheduled draw and restart the engine from its starting profile
    pub fn reset(&self) {
        self.abort_draws();
        lock(&self.engine).reset();
    }

    /// Wait until every scheduled draw has settled
    pub async fn wait_for_draws(&self) {
        let handles: Vec<_> = lock(&self.draws).drain().map(|(_, h)| h).collect();
        for handle in handles {
            if let Err(err) = handle.await {
                if !err.is_cancelled() {
                    warn!("Draw task failed: {}", err);
                }
            }
        }
    }

    fn abort_draws(&self) {
        let mut handles = lock(&self.draws);
        if !handles.is_empty() {
            debug!("Aborting {} pending draws", handles.len());
        }
        for (_, handle) in handles.drain() {
            handle.abort();
        }
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        self.abort_draws();
    }
}

//! New Year Games - progression engine
//!
//! The reward rules behind a festive promotional dashboard: a coin balance,
//! prize giveaways, a leaderboard, daily/bonus/achievement tasks and a
//! cosmetic shop. All state lives in memory for the length of a session.
//!
//! ## Layers
//!
//! 1. **Engine** ([`progression::Engine`]): synchronous owner of all state.
//!    Every user action is a method call that validates, mutates and queues
//!    [`progression::ProgressionEvent`]s for the UI.
//!
//! 2. **Session** ([`session::GameSession`]): shares the engine behind a mutex
//!    and runs the giveaway drumroll as cancellable Tokio tasks.

pub mod config;
pub mod progression;
pub mod session;

pub use config::Config;
pub use progression::{Engine, EngineError};
pub use session::{DrawResult, GameSession};

//! Shared test utilities for engine and session tests

#![allow(dead_code)]

use nygames::progression::{FixedSource, RandomSource};
use nygames::{Config, Engine};

/// Config with a custom starting balance and a short drumroll
pub fn config_with_balance(balance: u64) -> Config {
    let mut config = Config::default();
    config.profile.balance = balance;
    config.session.drumroll_ms = 20;
    config
}

/// Engine whose every draw wins `payout`
pub fn winning_engine(config: Config, payout: u64) -> Engine {
    engine_with(config, FixedSource::always_win(payout))
}

/// Engine whose every draw loses
pub fn losing_engine(config: Config) -> Engine {
    engine_with(config, FixedSource::always_lose())
}

fn engine_with(config: Config, source: impl RandomSource + 'static) -> Engine {
    Engine::with_source(config, Box::new(source)).expect("valid test config")
}

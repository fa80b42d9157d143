//! Play command implementation
//!
//! Runs a scripted session: each action is applied in order, notices are
//! printed as they happen, and pending giveaway draws are awaited at the end.

use anyhow::{bail, Result};

use nygames::progression::{ProgressionEvent, Severity, TaskId};
use nygames::{Config, Engine, GameSession};

/// A single scripted user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `join:<giveaway-id>`
    Join(u32),
    /// `buy:<item-id>`
    Buy(u32),
    /// `claim:<task-id>`
    Claim(String),
    /// `new-day`
    NewDay,
    /// `wait` - let pending draws finish before the next action
    Wait,
}

impl Action {
    pub fn parse(s: &str) -> Result<Self> {
        let (verb, arg) = match s.split_once(':') {
            Some((verb, arg)) => (verb, Some(arg)),
            None => (s, None),
        };

        match (verb, arg) {
            ("join", Some(id)) => Ok(Self::Join(id.parse()?)),
            ("buy", Some(id)) => Ok(Self::Buy(id.parse()?)),
            ("claim", Some(id)) if !id.is_empty() => Ok(Self::Claim(id.to_string())),
            ("new-day", None) => Ok(Self::NewDay),
            ("wait", None) => Ok(Self::Wait),
            _ => bail!(
                "Unknown action '{}' (expected join:<id>, buy:<id>, claim:<task>, new-day, wait)",
                s
            ),
        }
    }
}

/// Run a scripted session
pub async fn play_command(
    mut config: Config,
    actions: Vec<String>,
    drumroll_ms: Option<u64>,
) -> Result<()> {
    let actions = actions
        .iter()
        .map(|a| Action::parse(a))
        .collect::<Result<Vec<_>>>()?;

    if let Some(ms) = drumroll_ms {
        config.session.drumroll_ms = ms;
    }

    let (session, mut results) = GameSession::new(Engine::new(config)?);
    let start = session.profile();
    println!(
        "Session started: {} coins, level {}, {} wins\n",
        start.balance, start.level, start.wins
    );

    for action in actions {
        let outcome = match &action {
            Action::Join(id) => session.join_giveaway(*id).map(|_| ()),
            Action::Buy(id) => session.buy_item(*id).map(|_| ()),
            Action::Claim(id) => TaskId::parse(id).and_then(|id| session.claim_task(id).map(|_| ())),
            Action::NewDay => {
                session.start_new_cycle();
                println!("  -- a new day begins --");
                Ok(())
            }
            Action::Wait => {
                session.wait_for_draws().await;
                Ok(())
            }
        };

        print_events(&session.drain_events());
        if let Err(err) = outcome {
            // Expected conditions; the session carries on
            println!("  ! {}", err);
        }
    }

    if session.pending_draws() > 0 {
        println!("  ...waiting for {} draw(s)", session.pending_draws());
    }
    session.wait_for_draws().await;
    print_events(&session.drain_events());

    let mut settled = 0;
    while let Ok(result) = results.try_recv() {
        tracing::debug!(
            "Ticket #{} settled: won={}",
            result.ticket.id,
            result.outcome.won
        );
        settled += 1;
    }

    let end = session.profile();
    println!(
        "\nSession over after {} draw(s): {} coins ({:+}), level {}, {} wins, rank #{}",
        settled,
        end.balance,
        end.balance as i64 - start.balance as i64,
        end.level,
        end.wins,
        end.rank
    );

    Ok(())
}

fn print_events(events: &[ProgressionEvent]) {
    for event in events {
        // The insufficient-funds notice duplicates the error line
        if matches!(event, ProgressionEvent::InsufficientFunds { .. }) {
            continue;
        }
        let notice = event.notice();
        let marker = match notice.severity {
            Severity::Info => "-",
            Severity::Success => "+",
            Severity::Warning => "!",
        };
        println!("  {} {}: {}", marker, notice.title, notice.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_actions() {
        assert_eq!(Action::parse("join:1").unwrap(), Action::Join(1));
        assert_eq!(Action::parse("buy:4").unwrap(), Action::Buy(4));
        assert_eq!(
            Action::parse("claim:daily_login").unwrap(),
            Action::Claim("daily_login".to_string())
        );
        assert_eq!(Action::parse("new-day").unwrap(), Action::NewDay);
        assert_eq!(Action::parse("wait").unwrap(), Action::Wait);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["join", "join:x", "claim:", "dance", "wait:1"] {
            assert!(Action::parse(bad).is_err(), "accepted: {}", bad);
        }
    }
}

//! End-to-end scenarios against the progression engine

mod common;

use nygames::progression::{ProgressionEvent, TaskId, TaskKind, TaskTracker, TASKS};
use nygames::EngineError;

use common::{config_with_balance, losing_engine, winning_engine};

#[test]
fn test_join_giveaway_forced_win_settles_payout() {
    // Mega Prize costs exactly 100
    let mut engine = winning_engine(config_with_balance(100), 450);
    let xp_before = engine.xp();
    let wins_before = engine.wins();

    let ticket = engine.join_giveaway(1).unwrap();
    assert_eq!(engine.balance(), 0, "fee is taken before the draw");

    let outcome = engine.settle_draw(ticket).unwrap();
    assert!(outcome.won);
    assert_eq!(outcome.payout, 450);
    assert_eq!(engine.balance(), 450);
    assert_eq!(engine.wins(), wins_before + 1);
    assert_eq!(engine.xp(), xp_before + 150);
}

#[test]
fn test_buy_item_insufficient_funds() {
    let mut engine = losing_engine(config_with_balance(50));

    // Santa's Luck costs 500
    let err = engine.buy_item(1).unwrap_err();
    assert_eq!(
        err,
        EngineError::InsufficientFunds {
            needed: 500,
            balance: 50,
            shortfall: 450
        }
    );
    assert_eq!(engine.balance(), 50);
    assert_eq!(engine.counters().shop_purchases, 0);

    let events = engine.drain_events();
    assert_eq!(
        events,
        vec![ProgressionEvent::InsufficientFunds {
            needed: 500,
            balance: 50,
            shortfall: 450
        }]
    );
}

#[test]
fn test_join_giveaway_insufficient_funds_changes_nothing() {
    let mut engine = losing_engine(config_with_balance(99));
    let before = engine.giveaways()[0].participants;

    let err = engine.join_giveaway(1).unwrap_err();
    assert_eq!(err.shortfall(), Some(1));
    assert_eq!(engine.balance(), 99);
    assert_eq!(engine.giveaways()[0].participants, before);
    assert_eq!(engine.counters().giveaway_joins, 0);
    assert_eq!(engine.pending_draws(), 0);
}

#[test]
fn test_login_claim_is_idempotent() {
    let mut engine = losing_engine(config_with_balance(1_000));
    let xp_before = engine.xp();

    let claim = engine.claim_task(TaskId::DailyLogin).unwrap();
    assert_eq!(claim.reward, 100);
    assert_eq!(engine.balance(), 1_100);
    assert_eq!(engine.xp(), xp_before + 100);
    assert!(engine.task(TaskId::DailyLogin).unwrap().completed);

    let err = engine.claim_task(TaskId::DailyLogin).unwrap_err();
    assert_eq!(err, EngineError::TaskAlreadyClaimed(TaskId::DailyLogin));
    assert_eq!(engine.balance(), 1_100);
    assert_eq!(engine.xp(), xp_before + 100);
}

#[test]
fn test_progress_task_claim_before_ready() {
    let mut engine = losing_engine(config_with_balance(1_000));
    let err = engine.claim_task(TaskId::ShopSpree).unwrap_err();
    assert_eq!(err, EngineError::TaskNotReady(TaskId::ShopSpree));
    assert_eq!(engine.balance(), 1_000);
}

#[test]
fn test_invite_claim_is_a_stub() {
    let mut engine = losing_engine(config_with_balance(1_000));
    let xp_before = engine.xp();

    let claim = engine.claim_task(TaskId::InviteFriend).unwrap();
    assert!(claim.placeholder);
    assert_eq!(engine.balance(), 1_000);
    assert_eq!(engine.xp(), xp_before);
    assert!(!engine.task(TaskId::InviteFriend).unwrap().claimed);
}

#[test]
fn test_unknown_ids_are_not_found() {
    let mut engine = losing_engine(config_with_balance(1_000));
    assert!(matches!(
        engine.buy_item(99),
        Err(EngineError::NotFound { what: "shop item", .. })
    ));
    assert!(matches!(
        TaskId::parse("free_coins"),
        Err(EngineError::NotFound { what: "task", .. })
    ));
}

#[test]
fn test_win_task_progress_through_tracker() {
    let mut tracker = TaskTracker::new(TASKS, 100, 200);
    tracker.update_progress(TaskKind::Win, 5);
    let task = tracker.tasks().iter().find(|t| t.id == TaskId::HundredWins).unwrap();
    assert_eq!(task.progress, Some(5));
    assert!(!task.completed);

    tracker.update_progress(TaskKind::Win, 100);
    let task = tracker.tasks().iter().find(|t| t.id == TaskId::HundredWins).unwrap();
    assert!(task.completed);
}

#[test]
fn test_big_claim_crosses_several_levels() {
    let mut config = config_with_balance(10_000);
    config.profile.level = 1;
    config.profile.xp = 0;
    config.economy.xp_per_level = 100;
    config.rewards.progress_claim_xp = 350;
    config.rewards.purchase_xp = 0;
    let mut engine = losing_engine(config);

    // Two purchases complete the shop task
    engine.buy_item(4).unwrap();
    engine.buy_item(4).unwrap();
    engine.drain_events();

    engine.claim_task(TaskId::ShopSpree).unwrap();
    assert_eq!(engine.level(), 4);
    assert_eq!(engine.xp(), 50);

    let level_ups: Vec<u32> = engine
        .drain_events()
        .into_iter()
        .filter_map(|e| match e {
            ProgressionEvent::LevelUp(l) => Some(l.new_level),
            _ => None,
        })
        .collect();
    assert_eq!(level_ups, vec![2, 3, 4]);
    assert_eq!(engine.counters().level, 4);
}

#[test]
fn test_events_render_notices() {
    let mut engine = winning_engine(config_with_balance(1_000), 300);
    let ticket = engine.join_giveaway(1).unwrap();
    engine.settle_draw(ticket).unwrap();

    let notices: Vec<String> = engine
        .drain_events()
        .iter()
        .map(|e| e.notice().title)
        .collect();
    assert!(notices.contains(&"Entered giveaway".to_string()));
    assert!(notices.contains(&"You won!".to_string()));
    assert!(engine.drain_events().is_empty());
}

#[test]
fn test_joins_advance_seasoned_player() {
    let mut engine = losing_engine(config_with_balance(10_000));
    let before = engine.task(TaskId::SeasonedPlayer).unwrap().progress;
    assert_eq!(before, Some(127));

    engine.join_giveaway(1).unwrap();
    engine.join_giveaway(2).unwrap();

    assert_eq!(engine.counters().games_played, 129);
    assert_eq!(
        engine.task(TaskId::SeasonedPlayer).unwrap().progress,
        Some(129)
    );
}

#[test]
fn test_new_day_reopens_daily_giveaways() {
    let mut engine = losing_engine(config_with_balance(10_000));
    for _ in 0..3 {
        engine.join_giveaway(1).unwrap();
    }
    engine.claim_task(TaskId::DailyGiveaways).unwrap();
    assert_eq!(
        engine.claim_task(TaskId::DailyGiveaways).unwrap_err(),
        EngineError::TaskAlreadyClaimed(TaskId::DailyGiveaways)
    );

    engine.start_new_cycle();
    assert_eq!(engine.counters().giveaway_joins, 0);
    let task = engine.task(TaskId::DailyGiveaways).unwrap();
    assert_eq!(task.progress, Some(0));
    assert!(!task.completed && !task.claimed);
    assert_eq!(
        engine.claim_task(TaskId::DailyGiveaways).unwrap_err(),
        EngineError::TaskNotReady(TaskId::DailyGiveaways)
    );

    for _ in 0..3 {
        engine.join_giveaway(1).unwrap();
    }
    let balance = engine.balance();
    let claim = engine.claim_task(TaskId::DailyGiveaways).unwrap();
    assert_eq!(engine.balance(), balance + claim.reward);
    assert_eq!(engine.counters().games_played, 127 + 6);
}

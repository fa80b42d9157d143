//! Task catalog and claim rules
//!
//! Tasks are defined once in [`TASKS`] and copied into a [`TaskTracker`] when a
//! session starts. Only progress, completion and claim state change afterwards.
//!
//! Completion and payout are separate: a progress-bound task becomes
//! `completed` (ready) when its counter reaches the target, and pays out only
//! when it is claimed.

use std::fmt;

use serde::Serialize;

use super::error::EngineError;

/// Unique identifier for each task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskId {
    // Daily
    DailyLogin,
    DailyGiveaways,
    // Bonus
    InviteFriend,
    ShopSpree,
    // Achievement
    HundredWins,
    SeasonedPlayer,
    WeekStreak,
    LevelTen,
}

impl TaskId {
    /// Get the string ID used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DailyLogin => "daily_login",
            Self::DailyGiveaways => "daily_giveaways",
            Self::InviteFriend => "invite_friend",
            Self::ShopSpree => "shop_spree",
            Self::HundredWins => "hundred_wins",
            Self::SeasonedPlayer => "seasoned_player",
            Self::WeekStreak => "week_streak",
            Self::LevelTen => "level_ten",
        }
    }

    /// Parse from string ID
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "daily_login" => Some(Self::DailyLogin),
            "daily_giveaways" => Some(Self::DailyGiveaways),
            "invite_friend" => Some(Self::InviteFriend),
            "shop_spree" => Some(Self::ShopSpree),
            "hundred_wins" => Some(Self::HundredWins),
            "seasoned_player" => Some(Self::SeasonedPlayer),
            "week_streak" => Some(Self::WeekStreak),
            "level_ten" => Some(Self::LevelTen),
            _ => None,
        }
    }

    /// Parse a user-supplied ID, failing with `NotFound`
    pub fn parse(s: &str) -> Result<Self, EngineError> {
        Self::from_str(s).ok_or_else(|| EngineError::not_found("task", s))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task category for grouping in UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Daily,
    Bonus,
    Achievement,
}

impl TaskCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Bonus => "Bonus",
            Self::Achievement => "Achievements",
        }
    }
}

/// Which engine counter drives a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Login,
    Giveaway,
    Play,
    Invite,
    Shop,
    Win,
    Streak,
    Level,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Giveaway => "giveaway",
            Self::Play => "play",
            Self::Invite => "invite",
            Self::Shop => "shop",
            Self::Win => "win",
            Self::Streak => "streak",
            Self::Level => "level",
        }
    }
}

/// Static task definition
#[derive(Debug, Clone)]
pub struct TaskDefinition {
    pub id: TaskId,
    pub title: &'static str,
    pub description: &'static str,
    pub reward: u64,
    pub category: TaskCategory,
    pub kind: TaskKind,
    /// Counter value needed to complete (None for one-shot tasks)
    pub max_progress: Option<u32>,
}

/// All task definitions
pub static TASKS: &[TaskDefinition] = &[
    TaskDefinition {
        id: TaskId::DailyLogin,
        title: "Daily Login",
        description: "Come back and collect your holiday coins",
        reward: 100,
        category: TaskCategory::Daily,
        kind: TaskKind::Login,
        max_progress: None,
    },
    TaskDefinition {
        id: TaskId::DailyGiveaways,
        title: "Gift Hunter",
        description: "Join 3 giveaways today",
        reward: 300,
        category: TaskCategory::Daily,
        kind: TaskKind::Giveaway,
        max_progress: Some(3),
    },
    TaskDefinition {
        id: TaskId::InviteFriend,
        title: "Bring a Friend",
        description: "Invite a friend to the New Year Games",
        reward: 500,
        category: TaskCategory::Bonus,
        kind: TaskKind::Invite,
        max_progress: None,
    },
    TaskDefinition {
        id: TaskId::ShopSpree,
        title: "Holiday Shopper",
        description: "Buy 2 items in the shop",
        reward: 400,
        category: TaskCategory::Bonus,
        kind: TaskKind::Shop,
        max_progress: Some(2),
    },
    TaskDefinition {
        id: TaskId::HundredWins,
        title: "Lucky Hundred",
        description: "Win 100 giveaways",
        reward: 5000,
        category: TaskCategory::Achievement,
        kind: TaskKind::Win,
        max_progress: Some(100),
    },
    TaskDefinition {
        id: TaskId::SeasonedPlayer,
        title: "Seasoned Player",
        description: "Play 150 giveaways",
        reward: 1500,
        category: TaskCategory::Achievement,
        kind: TaskKind::Play,
        max_progress: Some(150),
    },
    TaskDefinition {
        id: TaskId::WeekStreak,
        title: "Week of Wonders",
        description: "Log in 7 days in a row",
        reward: 1000,
        category: TaskCategory::Achievement,
        kind: TaskKind::Streak,
        max_progress: Some(7),
    },
    TaskDefinition {
        id: TaskId::LevelTen,
        title: "Rising Star",
        description: "Reach level 10",
        reward: 3000,
        category: TaskCategory::Achievement,
        kind: TaskKind::Level,
        max_progress: Some(10),
    },
];

/// Runtime state of a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub title: &'static str,
    pub description: &'static str,
    pub reward: u64,
    pub category: TaskCategory,
    pub kind: TaskKind,
    pub progress: Option<u32>,
    pub max_progress: Option<u32>,
    /// Target reached (or one-shot task claimed). Never reverts, except that
    /// [`TaskTracker::start_new_cycle`] clears it on daily tasks.
    pub completed: bool,
    /// Reward paid out
    pub claimed: bool,
}

impl Task {
    pub fn from_definition(def: &TaskDefinition) -> Self {
        Self {
            id: def.id,
            title: def.title,
            description: def.description,
            reward: def.reward,
            category: def.category,
            kind: def.kind,
            progress: def.max_progress.map(|_| 0),
            max_progress: def.max_progress,
            completed: false,
            claimed: false,
        }
    }

    pub fn is_progress_bound(&self) -> bool {
        self.max_progress.is_some()
    }

    /// Completed but not yet paid out
    pub fn is_ready(&self) -> bool {
        self.completed && !self.claimed
    }

    fn reset(&mut self) {
        self.progress = self.max_progress.map(|_| 0);
        self.completed = false;
        self.claimed = false;
    }
}

/// Result of a successful claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimResult {
    pub task_id: TaskId,
    pub reward: u64,
    pub xp_award: u64,
    /// The task is a stub that grants nothing
    pub placeholder: bool,
}

/// Tracks progress and claims for the session's tasks
#[derive(Debug, Clone)]
pub struct TaskTracker {
    tasks: Vec<Task>,
    one_shot_xp: u64,
    progress_xp: u64,
}

impl TaskTracker {
    /// Build a tracker from definitions.
    ///
    /// `one_shot_xp` is granted for tasks without a progress target (login),
    /// `progress_xp` for tasks that had to be filled up.
    pub fn new(definitions: &[TaskDefinition], one_shot_xp: u64, progress_xp: u64) -> Self {
        Self {
            tasks: definitions.iter().map(Task::from_definition).collect(),
            one_shot_xp,
            progress_xp,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks waiting to be claimed
    pub fn ready_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_ready()).count()
    }

    /// Push a counter value into every progress-bound task of `kind`.
    ///
    /// Returns the tasks that became ready because of this update.
    pub fn update_progress(&mut self, kind: TaskKind, current_value: u32) -> Vec<TaskId> {
        let mut newly_ready = Vec::new();
        for task in self.tasks.iter_mut().filter(|t| t.kind == kind) {
            let Some(max) = task.max_progress else {
                continue;
            };
            if task.completed {
                // Completion is sticky; a counter going down must not un-complete it
                continue;
            }
            let progress = current_value.min(max);
            task.progress = Some(progress);
            if progress >= max {
                task.completed = true;
                newly_ready.push(task.id);
            }
        }
        newly_ready
    }

    /// Claim a task's reward.
    ///
    /// Invite tasks are a stub: the claim succeeds with a placeholder result and
    /// changes nothing.
    pub fn claim(&mut self, id: TaskId) -> Result<ClaimResult, EngineError> {
        let one_shot_xp = self.one_shot_xp;
        let progress_xp = self.progress_xp;
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| EngineError::not_found("task", id))?;

        if task.kind == TaskKind::Invite {
            return Ok(ClaimResult {
                task_id: id,
                reward: 0,
                xp_award: 0,
                placeholder: true,
            });
        }

        if task.claimed {
            return Err(EngineError::TaskAlreadyClaimed(id));
        }

        let xp_award = if task.is_progress_bound() {
            if !task.completed {
                return Err(EngineError::TaskNotReady(id));
            }
            progress_xp
        } else {
            task.completed = true;
            one_shot_xp
        };
        task.claimed = true;

        Ok(ClaimResult {
            task_id: id,
            reward: task.reward,
            xp_award,
            placeholder: false,
        })
    }

    /// Start a new daily cycle: daily tasks go back to unclaimed with no progress
    pub fn start_new_cycle(&mut self) {
        for task in self
            .tasks
            .iter_mut()
            .filter(|t| t.category == TaskCategory::Daily)
        {
            task.reset();
        }
    }
}

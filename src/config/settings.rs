//! Settings configuration types

mod economy;
mod profile;
mod session;

pub use economy::{EconomySettings, RewardSettings};
pub use profile::ProfileSettings;
pub use session::SessionSettings;

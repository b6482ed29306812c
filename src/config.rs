//! Application-level configuration constants.

use log::LevelFilter;

// Scheduling
pub const TICK_MS: u32 = 1_000;

// Pomodoro pair
pub const POMODORO_WORK_MINUTES: u32 = 25;
pub const POMODORO_BREAK_MINUTES: u32 = 5;
pub const BREAK_DELAY_MS: u32 = POMODORO_WORK_MINUTES * 60 * 1_000;

// Labels
pub const DEFAULT_LABEL: &str = "Custom Timer";
pub const POMODORO_LABEL: &str = "Pomodoro Timer";
pub const BREAK_LABEL: &str = "Break Timer";

// Notifications
pub const TIME_UP_MESSAGE: &str = "Time is up!";
pub const BREAK_MESSAGE: &str = "Time to take a break!";

// Assets and page
pub const ALARM_SRC: &str = "alarm.wav";
pub const DARK_MODE_CLASS: &str = "dark-mode";

// Input limits
pub const MAX_SECONDS: u32 = 59;

pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

//! Smart Calendar Library
//!
//! This library tracks two kinds of reminders: notes bound to a date and time,
//! and birthdays that recur every year. It validates the date strings users
//! type, computes how much time is left, and keeps the collection in a
//! line-delimited JSON file.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Session Layer**: `Session` - Interactive command loop over any reader/writer
//! - **Domain Layer**: `validation`, `countdown` and `calendar` - Validation,
//!   countdowns, and the task collection with its filters and sorts
//! - **Persistence Layer**: `storage` module - One JSON record per line
//!
//! # Example
//!
//! ```no_run
//! use smart_calendar::{LocalClock, Session, Storage};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let storage = Storage::new("tasks.jsonl");
//!     let store = storage.load()?;
//!     let mut session = Session::new(store, Some(storage), LocalClock);
//!     session.run(std::io::stdin().lock(), std::io::stdout())?;
//!     Ok(())
//! }
//! ```

pub mod calendar;
pub mod clock;
pub mod config;
pub mod countdown;
pub mod formatting;
pub mod session;
pub mod storage;
pub mod validation;

// Re-export commonly used types
pub use calendar::{AddTaskError, Birthday, Note, Task, TaskFilter, TaskKind, TaskStore};
pub use clock::{Clock, FixedClock, LocalClock};
pub use config::Config;
pub use countdown::{Countdown, birthdays_time_remaining, notes_time_remaining};
pub use session::Session;
pub use storage::Storage;
pub use validation::{is_valid_birthday, is_valid_note_datetime};

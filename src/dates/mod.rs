//! Date handling for the partitioner
//!
//! Resolves symbolic or literal bound tokens into concrete calendar dates.
//!
//! # Design Principles
//!
//! - Injected time: "now" always comes from a [`Clock`], never a global
//! - Fixed timezone: "today" is evaluated in the configured timezone
//! - Format-driven: every date crossing the API boundary is parsed and
//!   rendered through a validated [`DateFormat`]

mod calendar;
mod clock;
mod format;
mod resolver;
mod token;

pub use calendar::{end_of_month_offset, end_of_year, first_day_of_month, first_day_of_year};
pub use clock::{Clock, FixedClock, SystemClock};
pub use format::DateFormat;
pub use resolver::{parse_timezone, DateResolver, DEFAULT_TIMEZONE};
pub use token::DateToken;

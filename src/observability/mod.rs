//! Observability for querychunk
//!
//! Structured JSON logging of command lifecycle events. The planning core
//! stays side-effect free; only the command layer logs.
//!
//! ```ignore
//! use querychunk::observability::{Event, Logger, Severity};
//!
//! let logger = Logger::new(Severity::Info);
//! logger.info(Event::PlanComplete, &[("chunks", "12")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{render_line, Logger, Severity};

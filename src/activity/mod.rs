//! Activity logging for Spendboard
//!
//! Records dataset loads, report computations and exports in an
//! append-only JSON-lines log (`activity.log` in the config directory).
//!
//! - `ActivityEntry`: one record with timestamp, session id, operation,
//!   row counts and the filter in effect.
//! - `ActivityLogger`: appends entries and reads them back for
//!   `spendboard history`.

mod entry;
mod logger;

pub use entry::{ActivityEntry, Operation};
pub use logger::ActivityLogger;

//! Lazy sequence generators
//!
//! Each function returns a single-pass iterator struct that owns its cursor.
//! No work happens until the caller pulls the first element.

mod concat;
mod cycle;
mod progression;
mod repeat;
mod zip;

pub use concat::{append, concat, Append, Concat};
pub use cycle::{cycle, Cycle};
pub use progression::{infinity, range, Infinity, Step, StepRange};
pub use repeat::{repeat, Repeat};
pub use zip::{zip, zip_all, Zip, ZipAll, ZipCursors, ZipSources};

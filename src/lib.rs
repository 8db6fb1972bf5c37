//! Seeded weighted-random picking of image resolutions.
//!
//! Input is a list of `WIDTHxHEIGHT[:WEIGHT]` lines. [`parse`] turns it into
//! [`WeightedEntry`] records and [`select`] draws one of them with a
//! generator seeded per call, so the same text and seed always give the same
//! resolution.
//!
//! ```
//! let r = randres::pick("800x600:3\n600x800", false, 42);
//! assert!(r.description == "800x600" || r.description == "600x800");
//! ```

pub mod config;
pub mod error;
pub mod io_utils;
pub mod output;
pub mod parse;
pub mod select;
pub mod sweep;

pub use config::Config;
pub use error::RandresError;
pub use output::Format;
pub use parse::{
    parse, ResolutionEntry, ResolutionParser, WeightedEntry, DEFAULT_RESOLUTIONS, DEFAULT_WEIGHT,
};
pub use select::{pick, select, SelectionResult, FALLBACK};
pub use sweep::{sweep, tally, SweepRow, TallyRow, MAX_SWEEP_COUNT};

//! Seeded weighted selection over parsed resolution entries.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::parse::{parse, ResolutionEntry, WeightedEntry};

/// Resolution returned when nothing can be drawn.
pub const FALLBACK: ResolutionEntry = ResolutionEntry {
    width: 1024,
    height: 1024,
};

const FALLBACK_SUFFIX: &str = " (fallback)";
const INVERTED_SUFFIX: &str = " (inverted)";

/// Outcome of a single selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub width: u64,
    pub height: u64,
    pub description: String,
    /// True when [`FALLBACK`] was substituted.
    pub fallback: bool,
    pub inverted: bool,
}

impl SelectionResult {
    /// The `(width, height, description)` triple.
    pub fn into_tuple(self) -> (u64, u64, String) {
        (self.width, self.height, self.description)
    }
}

/// Index of the entry chosen by a cumulative-weight walk, or `None` when the
/// total weight is zero.
fn draw_index<R: Rng>(entries: &[WeightedEntry], rng: &mut R) -> Option<usize> {
    let total: u128 = entries.iter().map(|e| e.weight as u128).sum();
    if total == 0 {
        return None;
    }
    let target = rng.gen_range(0..total);
    trace!("drawing {} of total weight {}", target, total);
    let mut cumulative = 0u128;
    for (idx, e) in entries.iter().enumerate() {
        cumulative += e.weight as u128;
        if target < cumulative {
            return Some(idx);
        }
    }
    None
}

/// Draw one entry from `entries` using a generator seeded with `seed`.
///
/// Each call owns its generator, so equal inputs always give equal results.
/// With `invert` the chosen width and height are swapped; the description
/// keeps the pre-swap `WxH` and gains an ` (inverted)` marker.
pub fn select(entries: &[WeightedEntry], invert: bool, seed: u64) -> SelectionResult {
    let mut rng = StdRng::seed_from_u64(seed);
    let (chosen, mut description, fallback) = match draw_index(entries, &mut rng) {
        Some(idx) => {
            let entry = entries[idx].entry;
            (entry, entry.to_string(), false)
        }
        None => {
            debug!("no drawable entries among {}, using fallback", entries.len());
            (FALLBACK, format!("{FALLBACK}{FALLBACK_SUFFIX}"), true)
        }
    };

    let chosen = if invert {
        description.push_str(INVERTED_SUFFIX);
        chosen.swapped()
    } else {
        chosen
    };

    SelectionResult {
        width: chosen.width,
        height: chosen.height,
        description,
        fallback,
        inverted: invert,
    }
}

/// Parse `text` and select from it in one step.
pub fn pick(text: &str, invert: bool, seed: u64) -> SelectionResult {
    select(&parse(text), invert, seed)
}

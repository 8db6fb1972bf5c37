//! Repeated selection over a run of consecutive seeds.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::parse::WeightedEntry;
use crate::select::{select, SelectionResult};

/// Largest number of seeds the command line accepts for one sweep.
pub const MAX_SWEEP_COUNT: u64 = 10_000_000;

/// One seed of a sweep and what it picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepRow {
    pub seed: u64,
    pub width: u64,
    pub height: u64,
    pub description: String,
    pub fallback: bool,
    pub inverted: bool,
}

impl SweepRow {
    fn from_result(seed: u64, r: SelectionResult) -> Self {
        Self {
            seed,
            width: r.width,
            height: r.height,
            description: r.description,
            fallback: r.fallback,
            inverted: r.inverted,
        }
    }
}

/// How often a resolution came up during a sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TallyRow {
    pub width: u64,
    pub height: u64,
    pub count: u64,
    pub percent: f64,
}

/// Select once for each of `count` seeds starting at `start`.
///
/// Rows are produced lazily. Seeds wrap around at `u64::MAX`.
pub fn sweep(
    entries: &[WeightedEntry],
    invert: bool,
    start: u64,
    count: u64,
) -> impl Iterator<Item = SweepRow> + '_ {
    (0..count).map(move |i| {
        let seed = start.wrapping_add(i);
        SweepRow::from_result(seed, select(entries, invert, seed))
    })
}

/// Count picks per resolution, in order of first appearance.
pub fn tally<I>(rows: I) -> Vec<TallyRow>
where
    I: IntoIterator,
    I::Item: std::borrow::Borrow<SweepRow>,
{
    use std::borrow::Borrow;

    let mut index: HashMap<(u64, u64), usize> = HashMap::new();
    let mut out: Vec<TallyRow> = Vec::new();
    let mut total = 0u64;
    for row in rows {
        let row = row.borrow();
        total += 1;
        let key = (row.width, row.height);
        match index.get(&key) {
            Some(&i) => out[i].count += 1,
            None => {
                index.insert(key, out.len());
                out.push(TallyRow {
                    width: row.width,
                    height: row.height,
                    count: 1,
                    percent: 0.0,
                });
            }
        }
    }
    let total = total.max(1) as f64;
    for t in &mut out {
        t.percent = 100.0 * t.count as f64 / total;
    }
    out
}

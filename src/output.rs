//! Rendering of picks, sweeps and tallies as text, JSON or CSV.

use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::RandresError;
use crate::parse::WeightedEntry;
use crate::select::SelectionResult;
use crate::sweep::{SweepRow, TallyRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
    Csv,
}

fn write_json<W: Write, T: Serialize + ?Sized>(w: &mut W, value: &T) -> Result<(), RandresError> {
    serde_json::to_writer_pretty(&mut *w, value)?;
    w.write_all(b"\n")?;
    Ok(())
}

fn write_csv<W, I>(w: &mut W, rows: I) -> Result<(), RandresError>
where
    W: Write,
    I: IntoIterator,
    I::Item: Serialize,
{
    let mut wtr = csv::Writer::from_writer(w);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write a single pick.
pub fn write_selection<W: Write>(
    w: &mut W,
    result: &SelectionResult,
    format: Format,
) -> Result<(), RandresError> {
    match format {
        Format::Text => {
            writeln!(w, "{} {} {}", result.width, result.height, result.description)?;
            Ok(())
        }
        Format::Json => write_json(w, result),
        Format::Csv => write_csv(w, std::slice::from_ref(result)),
    }
}

/// Write one line per swept seed.
///
/// Text and CSV rows are written as they are produced; JSON needs the whole
/// array in memory.
pub fn write_sweep<W, I>(w: &mut W, rows: I, format: Format) -> Result<(), RandresError>
where
    W: Write,
    I: IntoIterator<Item = SweepRow>,
{
    match format {
        Format::Text => {
            for r in rows {
                writeln!(w, "seed {}: {}x{} - {}", r.seed, r.width, r.height, r.description)?;
            }
            Ok(())
        }
        Format::Json => write_json(w, &rows.into_iter().collect::<Vec<_>>()),
        Format::Csv => write_csv(w, rows),
    }
}

/// Write per-resolution counts of a sweep.
pub fn write_tally<W: Write>(w: &mut W, rows: &[TallyRow], format: Format) -> Result<(), RandresError> {
    match format {
        Format::Text => {
            for r in rows {
                writeln!(w, "{}x{}: {} ({:.1}%)", r.width, r.height, r.count, r.percent)?;
            }
            Ok(())
        }
        Format::Json => write_json(w, rows),
        Format::Csv => write_csv(w, rows),
    }
}

/// Write the parsed entries of a resolution list.
pub fn write_entries<W: Write>(
    w: &mut W,
    entries: &[WeightedEntry],
    format: Format,
) -> Result<(), RandresError> {
    match format {
        Format::Text => {
            for e in entries {
                writeln!(w, "{}:{}", e.entry, e.weight)?;
            }
            Ok(())
        }
        Format::Json => write_json(w, entries),
        Format::Csv => {
            // Flattened structs are not supported by the csv serializer.
            let mut wtr = csv::Writer::from_writer(w);
            wtr.write_record(["width", "height", "weight"])?;
            for e in entries {
                wtr.write_record([
                    e.entry.width.to_string(),
                    e.entry.height.to_string(),
                    e.weight.to_string(),
                ])?;
            }
            wtr.flush()?;
            Ok(())
        }
    }
}

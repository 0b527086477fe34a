use crate::entries::Entry;
use anyhow::Result;
use std::io::Write;
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

pub const EMPTY_STATE: &str = "No entries yet. Create your first logbook entry!";

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[month repr:short] [day padding:none], [year], [hour repr:12]:[minute] [period]"
);

/// "Jan 5, 2024, 03:45 PM" style.
pub fn format_date(date: OffsetDateTime) -> Result<String> {
    Ok(date.format(DATE_FORMAT)?)
}

/// Write the listing newest-first, one card per entry. An empty slice renders
/// the single empty-state line, whether the collection is empty or a search
/// came back with nothing. Sorting happens on a copy of the slice; the
/// entries themselves are never touched.
pub fn render(entries: &[&Entry], out: &mut impl Write) -> Result<()> {
    if entries.is_empty() {
        writeln!(out, "{EMPTY_STATE}")?;
        return Ok(());
    }

    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    for entry in sorted {
        writeln!(out, "{} ({})", entry.title, entry.id)?;
        match entry.last_edited {
            Some(edited) => writeln!(
                out,
                "{} (edited {})",
                format_date(entry.date)?,
                format_date(edited)?
            )?,
            None => writeln!(out, "{}", format_date(entry.date)?)?,
        }
        writeln!(out, "{}", entry.content)?;
        writeln!(out)?;
    }

    Ok(())
}

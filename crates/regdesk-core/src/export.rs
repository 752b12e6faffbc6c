//! Flat CSV projection of the board.

use chrono::NaiveDate;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::ExportError;
use crate::regulation::Regulation;

/// Column headings of the export.
pub const EXPORT_HEADERS: [&str; 5] = ["Title", "Category", "Status", "Tags", "Updated"];

/// Default separator placed between tags in the `Tags` column.
pub const DEFAULT_TAG_DELIMITER: &str = "; ";

/// Formatting knobs for [`export_csv`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub tag_delimiter: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            tag_delimiter: DEFAULT_TAG_DELIMITER.to_string(),
        }
    }
}

/// Write one header row and one row per regulation, every field quoted.
/// Returns the number of regulation rows written.
pub fn export_csv<'a, I, W>(
    regulations: I,
    writer: W,
    options: &ExportOptions,
) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = &'a Regulation>,
    W: Write,
{
    let mut csv = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);

    csv.write_record(EXPORT_HEADERS)?;
    let mut rows = 0;
    for r in regulations {
        let tags = r.tags.join(&options.tag_delimiter);
        let updated = r.updated_at.format("%Y-%m-%d").to_string();
        csv.write_record([
            r.title.as_str(),
            r.category.as_str(),
            r.status.as_str(),
            tags.as_str(),
            updated.as_str(),
        ])?;
        rows += 1;
    }
    csv.flush()?;
    Ok(rows)
}

/// Default download name, e.g. `regulations-2024-05-01.csv`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("regulations-{}.csv", date.format("%Y-%m-%d"))
}

/// Export straight to a file, replacing it if present.
pub fn export_to_path<'a, I>(
    regulations: I,
    path: &Path,
    options: &ExportOptions,
) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = &'a Regulation>,
{
    let file = File::create(path)?;
    let rows = export_csv(regulations, file, options)?;
    tracing::info!(?path, rows, "exported regulations");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regulation::{Category, RegulationStatus};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn sample() -> Regulation {
        let updated = Utc.with_ymd_and_hms(2024, 3, 9, 15, 30, 0).unwrap();
        Regulation {
            id: Uuid::new_v4(),
            title: "PCI DSS 4.0, \"Card\" Standards".into(),
            content: "ignored".into(),
            category: Category::Relevant,
            status: RegulationStatus::PartiallyApplicable,
            is_pinned: false,
            is_relevant: true,
            tags: vec!["payment".into(), "security".into()],
            sort_order: 0,
            created_at: updated,
            updated_at: updated,
            move_notes: None,
        }
    }

    #[test]
    fn export_quotes_every_field() {
        let regs = vec![sample()];
        let mut out = Vec::new();
        let rows = export_csv(&regs, &mut out, &ExportOptions::default()).unwrap();
        assert_eq!(rows, 1);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], r#""Title","Category","Status","Tags","Updated""#);
        assert_eq!(
            lines[1],
            r#""PCI DSS 4.0, ""Card"" Standards","relevant","partially-applicable","payment; security","2024-03-09""#
        );
    }

    #[test]
    fn custom_tag_delimiter() {
        let regs = vec![sample()];
        let mut out = Vec::new();
        let options = ExportOptions {
            tag_delimiter: "|".into(),
        };
        export_csv(&regs, &mut out, &options).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("\"payment|security\""));
    }

    #[test]
    fn filename_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(export_filename(date), "regulations-2024-05-01.csv");
    }
}

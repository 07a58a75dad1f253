//! CSV export of the result collection.
//!
//! Layout: an unquoted header row, then one row per record with every field
//! double-quoted. Skills are joined with `; ` into a single field. Rows are
//! separated by `\n` with no trailing newline.
//!
//! Embedded `"` characters are doubled (`"` -> `""`). Earlier exports wrote
//! them through unescaped, which broke the row for any name or skill that
//! contained a quote.

use anyhow::{Context, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};

use super::ResultStore;

pub const EXPORT_HEADER: &str = "Name,Email,Phone,Location,Skills";
pub const EXPORT_FILE_NAME: &str = "parsed_resumes_export.csv";
const SKILL_SEPARATOR: &str = "; ";

impl ResultStore {
    /// Renders the collection as CSV. Returns `None` for an empty collection
    /// so callers can skip producing an artifact at all.
    pub fn export_delimited(&self) -> Result<Option<String>> {
        if self.is_empty() {
            return Ok(None);
        }

        let mut buffer = Vec::with_capacity(64 * (self.len() + 1));
        buffer.extend_from_slice(EXPORT_HEADER.as_bytes());
        buffer.push(b'\n');

        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(buffer);

        for record in self.all() {
            let contact = &record.contact_info;
            let skills = record.skills.join(SKILL_SEPARATOR);
            writer
                .write_record([
                    contact.full_name.as_str(),
                    contact.email.as_str(),
                    contact.phone.as_str(),
                    contact.location.as_str(),
                    skills.as_str(),
                ])
                .context("Failed to write CSV row")?;
        }

        let mut bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {e}"))?;
        if bytes.last() == Some(&b'\n') {
            bytes.pop();
        }

        String::from_utf8(bytes)
            .map(Some)
            .context("CSV export produced invalid UTF-8")
    }
}

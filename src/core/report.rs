use crate::domain::model::{FieldValue, Report, Section};
use crate::domain::ports::{Clock, Storage};
use crate::utils::error::Result;
use std::io::Write;
use std::path::PathBuf;

pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

const PHONE_LABEL: &str = "📞 رقم الهاتف:";
const BASIC_HEADER: &str = "--- معلومات أساسية ---";
const DEEP_HEADER_CONSOLE: &str = "--- نتائج OSINT عميقة (دارك ويب 🔥) ---";
const DEEP_HEADER_FILE: &str = "--- نتائج OSINT عميقة (نمط دارك ويب) ---";
const LINKS_HEADER: &str = "--- روابط بحث سريعة ---";

/// Console and file renderings differ in the Deep OSINT header and the
/// spacing after the phone line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    Console,
    TextFile,
}

#[derive(Debug, Clone, Copy)]
enum ListStyle {
    /// `label: a, b`
    Inline,
    /// one `N. item` line per entry
    Enumerated,
}

/// Renders the three sections: Basic Info, Deep OSINT, then Links.
pub fn render_text<W: Write>(report: &Report, target: RenderTarget, out: &mut W) -> Result<()> {
    let deep_header = match target {
        RenderTarget::Console => DEEP_HEADER_CONSOLE,
        RenderTarget::TextFile => DEEP_HEADER_FILE,
    };

    writeln!(out, "{} {}", PHONE_LABEL, report.phone_number())?;
    // The console leaves a blank line under the phone line; the file does not.
    if target == RenderTarget::Console {
        writeln!(out)?;
    }
    writeln!(out, "{}", BASIC_HEADER)?;
    render_section(&report.basic_info, ListStyle::Inline, out)?;

    writeln!(out)?;
    writeln!(out, "{}", deep_header)?;
    render_section(&report.deep_osint, ListStyle::Enumerated, out)?;

    writeln!(out)?;
    writeln!(out, "{}", LINKS_HEADER)?;
    render_section(&report.links, ListStyle::Enumerated, out)?;

    Ok(())
}

fn render_section<W: Write>(section: &Section, style: ListStyle, out: &mut W) -> Result<()> {
    for field in section.fields() {
        match (&field.value, style) {
            (FieldValue::Scalar(value), _) => writeln!(out, "{}: {}", field.label, value)?,
            (FieldValue::List(items), ListStyle::Inline) => {
                writeln!(out, "{}: {}", field.label, items.join(", "))?
            }
            (FieldValue::List(items), ListStyle::Enumerated) => {
                for (index, item) in items.iter().enumerate() {
                    writeln!(out, "{}. {}", index + 1, item)?;
                }
            }
        }
    }
    Ok(())
}

/// `+966501234567` → `966501234567`. Everything but digits is dropped so the
/// result is always a safe file name.
pub fn sanitize_phone(phone: &str) -> String {
    phone
        .trim()
        .trim_start_matches('+')
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect()
}

/// Persists a report as `<base>.json` and `<base>.txt`.
pub struct ReportWriter<S: Storage, C: Clock> {
    storage: S,
    clock: C,
}

impl<S: Storage, C: Clock> ReportWriter<S, C> {
    pub fn new(storage: S, clock: C) -> Self {
        Self { storage, clock }
    }

    pub fn base_name(&self, phone: &str) -> String {
        format!(
            "{}_{}",
            sanitize_phone(phone),
            self.clock.now().format(TIMESTAMP_FORMAT)
        )
    }

    /// Writes both files and returns the base path without extension. The two
    /// writes are independent: if the second fails the first stays on disk.
    pub fn save(&self, report: &Report) -> Result<PathBuf> {
        self.storage.ensure_ready()?;
        let base = self.base_name(report.phone_number());

        let json = serde_json::to_string_pretty(report)?;
        let json_name = format!("{}.json", base);
        tracing::debug!("Writing {} ({} bytes)", json_name, json.len());
        self.storage.write_file(&json_name, json.as_bytes())?;

        let mut text = Vec::new();
        render_text(report, RenderTarget::TextFile, &mut text)?;
        let txt_name = format!("{}.txt", base);
        tracing::debug!("Writing {} ({} bytes)", txt_name, text.len());
        self.storage.write_file(&txt_name, &text)?;

        Ok(self.storage.location(&base))
    }
}

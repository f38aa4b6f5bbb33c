use crate::config::metadata::MetadataTable;
use crate::core::links::generate_links;
use crate::core::parser::parse_number;
use crate::core::placeholder::generate_placeholders;
use crate::core::report::{render_text, RenderTarget, ReportWriter};
use crate::domain::model::Report;
use crate::domain::ports::{Clock, Storage};
use crate::utils::error::Result;
use rand::Rng;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Runs one lookup end to end: parse, build links and placeholders, print the
/// report, persist it.
pub struct HunterEngine<S: Storage, C: Clock> {
    writer: ReportWriter<S, C>,
    metadata: MetadataTable,
    dry_run: bool,
}

impl<S: Storage, C: Clock> HunterEngine<S, C> {
    pub fn new(storage: S, clock: C, metadata: MetadataTable) -> Self {
        Self {
            writer: ReportWriter::new(storage, clock),
            metadata,
            dry_run: false,
        }
    }

    /// In dry-run mode the report is printed but nothing is written.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn build_report<R: Rng + ?Sized>(&self, phone: &str, rng: &mut R) -> Result<Report> {
        tracing::debug!("Parsing phone number...");
        let (parsed, basic_info) = parse_number(phone, &self.metadata)?;

        tracing::debug!("Building search links...");
        let links = generate_links(phone, &parsed);

        tracing::debug!("Generating placeholder section...");
        let deep_osint = generate_placeholders(phone, rng);

        Ok(Report::new(basic_info, links, deep_osint))
    }

    /// Returns the base path of the saved report, or `None` in dry-run mode.
    /// Nothing is printed or written when the number is rejected.
    pub fn run<R: Rng + ?Sized, W: Write>(
        &self,
        phone: &str,
        rng: &mut R,
        out: &mut W,
    ) -> Result<Option<PathBuf>> {
        tracing::info!("Starting lookup for {}", phone);
        let report = self.build_report(phone, rng)?;

        render_text(&report, RenderTarget::Console, out)?;

        if self.dry_run {
            tracing::info!("Dry run, skipping report files");
            return Ok(None);
        }

        let base = self.writer.save(&report)?;
        writeln!(out)?;
        writeln!(out, "{}", confirmation_line(&base))?;
        tracing::info!("Report saved to {}", base.display());

        Ok(Some(base))
    }
}

pub fn confirmation_line(base: &Path) -> String {
    format!(
        "✅ تم حفظ تقرير متقدم في: {0}.txt و {0}.json",
        base.display()
    )
}

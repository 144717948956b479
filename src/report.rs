//! Plain-text census report.

use std::io::{self, Write};

use chrono::NaiveDate;

use crate::config::{
    COUNT_COLUMN_WIDTH, NAME_COLUMN_WIDTH, PERCENT_COLUMN_WIDTH, PERCENT_PRECISION,
};
use crate::patterns::GenerationReport;

const RULE_WIDTH: usize = NAME_COLUMN_WIDTH + COUNT_COLUMN_WIDTH + PERCENT_COLUMN_WIDTH + 5;

/// Writes a run header followed by one table per generation
pub struct ReportWriter<W: Write> {
    out: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Date and universe size, written once per run
    pub fn write_header(&mut self, date: NaiveDate, width: usize, height: usize) -> io::Result<()> {
        writeln!(self.out, "Simulation at {}", date.format("%Y-%m-%d"))?;
        writeln!(self.out, "Universe size {} x {}", width, height)?;
        writeln!(self.out)
    }

    /// Header stamped with today's local date
    pub fn write_header_today(&mut self, width: usize, height: usize) -> io::Result<()> {
        self.write_header(chrono::Local::now().date_naive(), width, height)
    }

    pub fn write_generation(
        &mut self,
        generation: u64,
        report: &GenerationReport,
    ) -> io::Result<()> {
        let rule = "-".repeat(RULE_WIDTH);

        writeln!(self.out, "Iteration: {}", generation)?;
        writeln!(self.out, "{}", rule)?;
        self.write_row("", "Count", "Percent")?;
        for tally in report.tallies() {
            let percent = format!("{:.*}", PERCENT_PRECISION, tally.percentage);
            self.write_row(&format!(" {}", tally.label), &tally.count.to_string(), &percent)?;
        }
        writeln!(self.out, "{}", rule)?;
        self.write_row(" TOTAL", &report.total().to_string(), "")?;
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_row(&mut self, name: &str, count: &str, percent: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "{:<nw$}|{:>cw$} |{:>pw$} |",
            name,
            count,
            percent,
            nw = NAME_COLUMN_WIDTH,
            cw = COUNT_COLUMN_WIDTH,
            pw = PERCENT_COLUMN_WIDTH
        )
    }
}

//! Scan a target's method table and wrap every tagged method with notices.
//!
//! For each tagged method, in table order, the scanner writes:
//! - the header line with the declared label;
//! - the before notice;
//! - whatever the method itself writes;
//! - the after notice.
//!
//! Blocks are separated by a blank line. The first method returning `Err`
//! aborts the scan; its after notice is not written.
//!
//! Panics are not caught: a panicking method unwinds through the scan without
//! producing [`ScanError::InvocationFailure`]. Return an error instead.
mod error;
pub use error::ScanError;

mod report;
pub use report::{Invocation, ScanReport};

use std::io::{self, Write};

use tracing::{debug, instrument, trace};

use crate::{
    Annotated,
    config::ScanConfig,
    table::{MethodKind, MethodTable},
};

/// Stateless scanner holding the notice configuration.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    /// Create a scanner with the given notices.
    #[inline]
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan `target` using the table generated for its type.
    pub fn process<T, W>(&self, target: &T, out: &mut W) -> Result<ScanReport, ScanError>
    where
        T: Annotated,
        W: Write,
    {
        let table = T::method_table();
        self.process_table(&table, target, out)
    }

    /// Scan `target` and write to standard output.
    pub fn process_stdout<T: Annotated>(&self, target: &T) -> Result<ScanReport, ScanError> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        let report = self.process(target, &mut lock)?;
        lock.flush()?;
        Ok(report)
    }

    /// Scan `target` against an explicit table.
    ///
    /// Entries are visited in table order. Untagged entries are skipped and
    /// never invoked.
    #[instrument(level = "debug", skip_all, fields(methods = table.len()))]
    pub fn process_table<T>(
        &self,
        table: &MethodTable<T>,
        target: &T,
        out: &mut dyn Write,
    ) -> Result<ScanReport, ScanError> {
        let mut report = ScanReport::default();

        for entry in table.iter() {
            let MethodKind::Tagged { marker, invoke } = entry.kind() else {
                trace!(method = entry.name(), "skipping untagged method");
                continue;
            };
            let method = entry.name();
            let label = marker.label();

            if self.config.separator && !report.is_empty() {
                writeln!(out)?;
            }
            writeln!(out, "{}", self.config.header.render(method, label))?;
            writeln!(out, "{}", self.config.before.render(method, label))?;

            debug!(method, label, "invoking tagged method");
            invoke(target, &mut *out).map_err(|source| {
                debug!(method, label, error = %source, "tagged method failed");
                ScanError::InvocationFailure {
                    method,
                    label: label.to_string(),
                    source,
                }
            })?;

            writeln!(out, "{}", self.config.after.render(method, label))?;
            report.push(method, label);
        }

        debug!(invoked = report.len(), "scan finished");
        Ok(report)
    }
}

/// Scan `target` with the default notices and write to standard output.
pub fn process<T: Annotated>(target: &T) -> Result<ScanReport, ScanError> {
    Scanner::default().process_stdout(target)
}

use alloc::string::String;
use alloc::vec::Vec;

/// Severity of a non-fatal [`Diagnostic`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Printed only with [`DecodeConfig::with_verbose`](crate::DecodeConfig::with_verbose).
    Info,
    /// Suppressed by [`DecodeConfig::with_quiet`](crate::DecodeConfig::with_quiet).
    Warning,
}

/// A message emitted while opening a file or converting a surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

/// Sink that forwards to the `log` facade and keeps a copy.
#[derive(Clone, Debug, Default)]
pub(crate) struct DiagnosticLog {
    quiet: bool,
    verbose: bool,
    entries: Vec<Diagnostic>,
}

impl DiagnosticLog {
    pub(crate) fn new(quiet: bool, verbose: bool) -> Self {
        Self {
            quiet,
            verbose,
            entries: Vec::new(),
        }
    }

    pub(crate) fn warn(&mut self, message: String) {
        if self.quiet {
            return;
        }
        log::warn!(target: "zentexture", "{message}");
        self.entries.push(Diagnostic {
            severity: Severity::Warning,
            message,
        });
    }

    pub(crate) fn info(&mut self, message: String) {
        if !self.verbose {
            return;
        }
        log::info!(target: "zentexture", "{message}");
        self.entries.push(Diagnostic {
            severity: Severity::Info,
            message,
        });
    }

    pub(crate) fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

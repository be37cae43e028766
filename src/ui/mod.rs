//! Console reporting for both launchers
//!
//! All user-facing progress goes through the [`Reporter`] trait:
//! - [`InteractiveReporter`] prints styled status lines and shows a spinner
//!   while the bundle streams to the server
//! - [`SilentReporter`] swallows progress and only keeps warnings, for tests
//!
//! Output produced by the remote setup script is relayed to stdout line by
//! line so it stays readable next to the spinner.

use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for launcher steps
pub trait Reporter {
    /// A top-level step is starting (build, package, transfer)
    fn step(&mut self, message: &str);

    /// Extra detail, shown only with `-v`
    fn detail(&mut self, message: &str);

    /// Something the operator should know about; never fatal
    fn warn(&mut self, message: &str);

    /// Start a long-running phase with a spinner
    fn begin_wait(&mut self, message: &str);

    /// A line printed by the remote side
    fn remote_output(&mut self, line: &str);

    /// End the current long-running phase
    fn end_wait(&mut self);
}

/// Styled terminal reporter
pub struct InteractiveReporter {
    verbose: bool,
    spinner: Option<ProgressBar>,
}

impl InteractiveReporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            spinner: None,
        }
    }

    fn print_err(&self, line: &str) {
        match self.spinner {
            Some(ref pb) => pb.suspend(|| eprintln!("{line}")),
            None => eprintln!("{line}"),
        }
    }
}

impl Reporter for InteractiveReporter {
    fn step(&mut self, message: &str) {
        let arrow = Style::new().bold().green().apply_to("==>");
        let text = Style::new().bold().apply_to(message);
        self.print_err(&format!("{arrow} {text}"));
    }

    fn detail(&mut self, message: &str) {
        if self.verbose {
            let text = Style::new().dim().apply_to(message);
            self.print_err(&format!("    {text}"));
        }
    }

    fn warn(&mut self, message: &str) {
        let label = Style::new().bold().yellow().apply_to("warning:");
        self.print_err(&format!("{label} {message}"));
    }

    fn begin_wait(&mut self, message: &str) {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
            pb.set_style(
                style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "]),
            );
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(pb);
    }

    fn remote_output(&mut self, line: &str) {
        match self.spinner {
            Some(ref pb) => pb.suspend(|| println!("{line}")),
            None => println!("{line}"),
        }
    }

    fn end_wait(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }
}

/// Reporter that prints nothing
///
/// Warnings and remote output are kept so callers can inspect them.
#[derive(Debug, Default)]
pub struct SilentReporter {
    pub warnings: Vec<String>,
    pub remote_lines: Vec<String>,
}

impl Reporter for SilentReporter {
    fn step(&mut self, _message: &str) {}

    fn detail(&mut self, _message: &str) {}

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn begin_wait(&mut self, _message: &str) {}

    fn remote_output(&mut self, line: &str) {
        self.remote_lines.push(line.to_string());
    }

    fn end_wait(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_reporter_keeps_warnings() {
        let mut reporter = SilentReporter::default();
        reporter.step("Packaging");
        reporter.detail("linked job.py");
        reporter.warn("dotfile");
        reporter.begin_wait("Transferring");
        reporter.remote_output("Run the job with:");
        reporter.end_wait();

        assert_eq!(reporter.warnings, vec!["dotfile".to_string()]);
        assert_eq!(reporter.remote_lines, vec!["Run the job with:".to_string()]);
    }

    #[test]
    fn test_interactive_spinner_lifecycle() {
        let mut reporter = InteractiveReporter::new(false);
        assert!(reporter.spinner.is_none());
        reporter.begin_wait("Transferring");
        assert!(reporter.spinner.is_some());
        reporter.end_wait();
        assert!(reporter.spinner.is_none());
    }
}

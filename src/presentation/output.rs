//! Output Rendering
//!
//! Renders the end-of-run summary. Per-file progress comes from the event
//! sinks; this is what is printed once everything has finished.

use std::path::Path;

use crate::application::GenerateResult;

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    arrow: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            arrow: "→",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            arrow: "->",
        }
    }
}

/// Text renderer for generate results
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    /// Whether to use unicode
    pub unicode: bool,
    /// Verbosity level
    pub verbose: u8,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            unicode: true,
            verbose: 0,
        }
    }
}

impl TextRenderer {
    /// Render the summary as lines of text
    pub fn render(&self, result: &GenerateResult, source: &Path) -> String {
        let icons = if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        };
        let mut out = String::new();

        if result.is_success() {
            out.push_str(&format!("{} Icons generated\n", icons.check));
        } else {
            out.push_str(&format!("{} Icons generated with errors\n", icons.cross));
        }
        out.push('\n');
        out.push_str(&format!("  Source: {}\n", source.display()));
        out.push('\n');

        for report in &result.reports {
            let mark = if report.is_success() {
                icons.check
            } else {
                icons.cross
            };
            out.push_str(&format!(
                "  {} {:<8} {} written",
                mark,
                report.platform.display_name(),
                report.written.len()
            ));
            if !report.failures.is_empty() {
                out.push_str(&format!(", {} failed", report.failures.len()));
            }
            out.push('\n');

            if self.verbose > 0 {
                for path in &report.written {
                    out.push_str(&format!("      {} {}\n", icons.arrow, path.display()));
                }
            }
        }

        let failures: Vec<_> = result.failures().collect();
        if !failures.is_empty() {
            out.push('\n');
            out.push_str(&format!("  Errors ({}):\n", failures.len()));
            for failure in failures {
                match failure.size {
                    Some(size) => out.push_str(&format!(
                        "    {} {} ({}px): {}\n",
                        icons.cross,
                        failure.path.display(),
                        size,
                        failure.message
                    )),
                    None => out.push_str(&format!(
                        "    {} {}: {}\n",
                        icons.cross,
                        failure.path.display(),
                        failure.message
                    )),
                }
            }
        }

        out.push('\n');
        out.push_str(&format!(
            "  {} files written, {} errors\n",
            result.written_count(),
            result.error_count()
        ));
        out
    }
}

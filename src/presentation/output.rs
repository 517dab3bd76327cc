//! Output Rendering
//!
//! Provides a unified interface for rendering reports to different formats.

use unicode_width::UnicodeWidthStr;

use crate::application::{ColumnsReport, InspectReport, ValidationReport};
use crate::domain::entities::InstallOutcome;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    warn: &'static str,
    bullet: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            warn: "⚠",
            bullet: "•",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            warn: "[!]",
            bullet: "-",
        }
    }
}

/// Trait for rendering command reports
pub trait ReportRenderer {
    fn render_inspect(&self, report: &InspectReport) -> String;

    fn render_columns(&self, report: &ColumnsReport) -> String;

    fn render_validation(&self, report: &ValidationReport) -> String;
}

/// Text renderer for reports
pub struct TextRenderer {
    /// Whether to use unicode icons
    pub unicode: bool,
    /// Verbosity level; above zero the installation audit is shown
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
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }
}

/// Left-align `text` in `width` terminal cells
fn pad(text: &str, width: usize) -> String {
    let mut out = text.to_string();
    out.push_str(&" ".repeat(width.saturating_sub(text.width())));
    out
}

fn widest<'a>(items: impl Iterator<Item = &'a str>) -> usize {
    items.map(UnicodeWidthStr::width).max().unwrap_or(0)
}

impl ReportRenderer for TextRenderer {
    fn render_inspect(&self, report: &InspectReport) -> String {
        let icons = self.icons();
        let mut out = String::new();

        out.push_str(&format!(
            "{} Metamodel: {} classes, {} features\n",
            icons.check,
            report.classes,
            report.features.len()
        ));

        for feature in &report.features {
            out.push('\n');
            out.push_str(&format!(
                "{} ({}) \"{}\"\n",
                feature.full_identity, feature.kind, feature.display_name
            ));
            if let Some(value_type) = &feature.value_type {
                out.push_str(&format!("  value type: {}\n", value_type));
            }

            let width = widest(feature.facets.iter().map(|f| f.facet_type.as_str()));
            for facet in &feature.facets {
                out.push_str(&format!(
                    "  {} {}  {}\n",
                    icons.bullet,
                    pad(&facet.facet_type, width),
                    facet.description
                ));
            }

            if self.verbose > 0 && !feature.installations.is_empty() {
                out.push_str("  installed by:\n");
                let width = widest(feature.installations.iter().map(|i| i.factory));
                for installation in &feature.installations {
                    let outcome = match installation.outcome {
                        InstallOutcome::Installed => "",
                        InstallOutcome::Replaced => " (replaced)",
                    };
                    out.push_str(&format!(
                        "    {}  {}{}\n",
                        pad(installation.factory, width),
                        installation.facet_type,
                        outcome
                    ));
                }
            }
        }

        if !report.diagnostics.is_empty() {
            out.push('\n');
            out.push_str(&format!("Diagnostics ({}):\n", report.diagnostics.len()));
            for diagnostic in &report.diagnostics {
                out.push_str(&format!("  {} {}\n", icons.warn, diagnostic));
            }
        }

        out
    }

    fn render_columns(&self, report: &ColumnsReport) -> String {
        if report.features.is_empty() {
            return "No mapped properties\n".to_string();
        }

        const HEADERS: [&str; 4] = ["FEATURE", "SEMANTICS", "COLUMN", "TYPE"];
        let feature_width = widest(
            report
                .features
                .iter()
                .map(|f| f.feature.as_str())
                .chain([HEADERS[0]]),
        );
        let semantics_width = widest(
            report
                .features
                .iter()
                .map(|f| f.semantics.as_str())
                .chain([HEADERS[1]]),
        );
        let column_width = widest(
            report
                .features
                .iter()
                .flat_map(|f| f.columns.iter().map(|c| c.name.as_str()))
                .chain([HEADERS[2]]),
        );

        let row = |feature: &str, semantics: &str, column: &str, column_type: &str| {
            format!(
                "{}  {}  {}  {}\n",
                pad(feature, feature_width),
                pad(semantics, semantics_width),
                pad(column, column_width),
                column_type
            )
        };

        let mut out = row(HEADERS[0], HEADERS[1], HEADERS[2], HEADERS[3]);
        for feature in &report.features {
            for (i, column) in feature.columns.iter().enumerate() {
                let (name, semantics) = if i == 0 {
                    (feature.feature.as_str(), feature.semantics.as_str())
                } else {
                    ("", "")
                };
                out.push_str(&row(name, semantics, &column.name, &column.column_type));
            }
        }
        out
    }

    fn render_validation(&self, report: &ValidationReport) -> String {
        let icons = self.icons();
        let mut out = String::new();

        if report.valid {
            out.push_str(&format!(
                "{} {} accepts '{}'\n",
                icons.check, report.feature, report.candidate
            ));
        } else {
            out.push_str(&format!(
                "{} {} rejects '{}'\n",
                icons.cross, report.feature, report.candidate
            ));
            for reason in &report.reasons {
                out.push_str(&format!("    {} {}\n", icons.bullet, reason));
            }
        }

        if report.rules.is_empty() {
            out.push_str("  no rules declared\n");
        } else if self.verbose > 0 || !report.valid {
            out.push_str(&format!("  rules: {}\n", report.rules.join(", ")));
        }
        out
    }
}

/// JSON renderer for reports
pub struct JsonRenderer;

impl JsonRenderer {
    fn envelope(kind: &str, data: serde_json::Value) -> String {
        let json = serde_json::json!({
            "type": kind,
            "data": data,
        });
        serde_json::to_string_pretty(&json).unwrap_or_default()
    }
}

impl ReportRenderer for JsonRenderer {
    fn render_inspect(&self, report: &InspectReport) -> String {
        Self::envelope("inspect", serde_json::to_value(report).unwrap_or_default())
    }

    fn render_columns(&self, report: &ColumnsReport) -> String {
        Self::envelope("columns", serde_json::to_value(report).unwrap_or_default())
    }

    fn render_validation(&self, report: &ValidationReport) -> String {
        Self::envelope("validate", serde_json::to_value(report).unwrap_or_default())
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, unicode: bool, verbose: u8) -> Box<dyn ReportRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { unicode, verbose }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

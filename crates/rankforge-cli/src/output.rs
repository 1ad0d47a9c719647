//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use rankforge_domain::{RankId, RankInfo};
use rankforge_janitor::{SweepReport, UserFix};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a user's rank set.
    pub fn format_ranks(&self, username: &str, ranks: &[RankId]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let tokens: Vec<&str> = ranks.iter().map(RankId::as_str).collect();
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "username": username,
                    "ranks": tokens,
                }))?)
            }
            OutputFormat::Table => {
                if ranks.is_empty() {
                    return Ok(self.colorize("No ranks recorded.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Rank", "Kind"]);
                for rank in ranks {
                    let kind = if rank.is_upgrade() {
                        "pending upgrade"
                    } else {
                        "held"
                    };
                    builder.push_record([rank.as_str(), kind]);
                }
                Ok(styled(builder))
            }
            OutputFormat::Quiet => {
                let tokens: Vec<&str> = ranks.iter().map(RankId::as_str).collect();
                Ok(tokens.join("\n"))
            }
        }
    }

    /// Format the diff of one user fix.
    pub fn format_fix(&self, fix: &UserFix) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(fix)?),
            OutputFormat::Table => {
                if !fix.changed {
                    return Ok(self.info(&format!("{}: already normalized", fix.username)));
                }

                let mut builder = Builder::default();
                builder.push_record(["Token", "Status"]);
                for token in &fix.removed {
                    builder.push_record([token.as_str(), "removed"]);
                }
                for token in &fix.kept {
                    builder.push_record([token.as_str(), "kept"]);
                }
                Ok(styled(builder))
            }
            OutputFormat::Quiet => Ok(fix.kept.join("\n")),
        }
    }

    /// Format a sweep report.
    pub fn format_sweep(&self, report: &SweepReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => {
                let mut lines = Vec::new();

                if report.changed.is_empty() {
                    lines.push(self.info("No users needed fixing."));
                } else {
                    let mut builder = Builder::default();
                    builder.push_record(["Username", "Removed", "Kept"]);
                    for fix in &report.changed {
                        builder.push_record([
                            fix.username.as_str(),
                            &fix.removed.join(", "),
                            &fix.kept.join(", "),
                        ]);
                    }
                    lines.push(styled(builder));
                }

                for failure in &report.failures {
                    lines.push(self.warning(&format!(
                        "{}: fix failed ({})",
                        failure.username, failure.error
                    )));
                }

                let mut summary = format!(
                    "{} of {} user(s) affected",
                    report.affected(),
                    report.scanned
                );
                if report.dry_run {
                    summary.push_str(" (dry run, nothing persisted)");
                }
                lines.push(self.success(&summary));

                Ok(lines.join("\n"))
            }
            OutputFormat::Quiet => {
                let users: Vec<&str> =
                    report.changed.iter().map(|f| f.username.as_str()).collect();
                Ok(users.join("\n"))
            }
        }
    }

    /// Format catalog entries.
    pub fn format_catalog(&self, entries: &[&RankInfo]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<serde_json::Value> = entries
                    .iter()
                    .map(|info| {
                        serde_json::json!({
                            "id": info.id.as_str(),
                            "name": info.name,
                            "category": info.category.as_str(),
                            "price_cents": info.price_cents,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
            OutputFormat::Table => {
                if entries.is_empty() {
                    return Ok(self.colorize("Catalog is empty.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Rank", "Name", "Category", "Price"]);
                for info in entries {
                    let price = format!(
                        "${}.{:02}",
                        info.price_cents / 100,
                        info.price_cents % 100
                    );
                    builder.push_record([
                        info.id.as_str(),
                        &info.name,
                        info.category.as_str(),
                        &price,
                    ]);
                }
                Ok(styled(builder))
            }
            OutputFormat::Quiet => {
                let ids: Vec<&str> = entries.iter().map(|info| info.id.as_str()).collect();
                Ok(ids.join("\n"))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn styled(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

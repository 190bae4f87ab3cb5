//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Article, DecisionKind, Role, Summary, SummaryCounts};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Result of listing reviewers
#[derive(Debug, Serialize)]
pub struct ReviewerListResult {
    /// Reviewer identifiers
    pub reviewers: Vec<String>,
}

impl ReviewerListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.reviewers.is_empty() {
                    println!("No reviewers found.");
                    return;
                }
                println!("Reviewers:\n");
                for name in &self.reviewers {
                    println!("  {name}");
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Result of fetching a summary
#[derive(Debug, Serialize)]
pub struct SummaryResult {
    /// Reviewer name
    pub reviewer: String,
    /// Role code
    pub role: Role,
    /// Summary as reported by the store
    #[serde(flatten)]
    pub summary: Summary,
}

impl SummaryResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        let SummaryCounts {
            reviewed,
            included,
            excluded,
            pending,
            ..
        } = self.summary.counts;

        println!("{}", format!("Summary for {} ({})", self.reviewer, self.role.label()).bold());
        println!(
            "  Reviewed: {reviewed}   Included: {}   Excluded: {}   Pending: {pending}   ({:.0}% complete)\n",
            included.to_string().green(),
            excluded.to_string().red(),
            self.summary.percent_complete()
        );

        if self.summary.reviewed.is_empty() {
            println!("No articles reviewed yet.");
        } else {
            println!("Reviewed:");
            for item in &self.summary.reviewed {
                let badge = match item.decision {
                    Some(DecisionKind::Include) => "✓ Included".green(),
                    Some(DecisionKind::Exclude) => "✗ Excluded".red(),
                    None => "? Unknown".yellow(),
                };
                println!("  {} {}", badge, item.article.title);
                println!("      {}", meta_line(&item.article).dimmed());
                if let Some(note) = &item.note {
                    println!("      {note}");
                }
            }
        }

        if !self.summary.pending.is_empty() {
            println!("\nPending:");
            for article in &self.summary.pending {
                println!("  {}", article.title);
                println!("      {}", meta_line(article).dimmed());
            }
        }
    }
}

/// Author, year and row of an article on one line
#[must_use]
pub fn meta_line(article: &Article) -> String {
    let mut parts = vec![
        article.author.clone().unwrap_or_else(|| "Unknown".to_string()),
        article.year.clone().unwrap_or_else(|| "N/A".to_string()),
    ];
    if let Some(row) = article.row_number {
        parts.push(format!("Row {row}"));
    }
    parts.join(" · ")
}

/// Result of the status command
#[derive(Debug, Serialize)]
pub struct StatusResult {
    /// Saved reviewer, if any
    pub reviewer: Option<String>,
    /// Saved role, if any
    pub role: Option<Role>,
    /// When the login was saved
    pub saved_at: Option<String>,
    /// Endpoint in use
    pub api_url: Option<String>,
    /// Config file location
    pub config_path: String,
}

impl StatusResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                match (&self.reviewer, self.role) {
                    (Some(reviewer), Some(role)) => {
                        println!("Logged in as: {reviewer} ({})", role.label());
                        if let Some(saved_at) = &self.saved_at {
                            println!("  since {saved_at}");
                        }
                    },
                    _ => println!("Not logged in."),
                }
                println!(
                    "API endpoint: {}",
                    self.api_url.as_deref().unwrap_or("(not configured)")
                );
                println!("Config: {}", self.config_path);
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Reason catalog for one role
#[derive(Debug, Serialize)]
pub struct ReasonListResult {
    /// Role the catalog applies to
    pub role: Role,
    /// Whether include decisions need a reason
    pub require_include_reason: bool,
    /// Include reasons, in menu order
    pub include: Vec<String>,
    /// Exclude reasons, in menu order
    pub exclude: Vec<String>,
}

impl ReasonListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Reasons for {}:\n", self.role.label());
                println!("Include{}:", if self.require_include_reason { "" } else { " (optional)" });
                print_numbered(&self.include);
                println!("\nExclude:");
                print_numbered(&self.exclude);
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Print a 1-based numbered list
pub fn print_numbered(items: &[String]) {
    for (i, item) in items.iter().enumerate() {
        println!("  {}. {item}", i + 1);
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Successful result with a message
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}

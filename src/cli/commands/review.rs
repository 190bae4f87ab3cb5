//! Review command - interactive screening loop
//!
//! Renders the session after every action and turns typed commands into
//! navigator operations. Remote calls block the loop, so no command can be
//! issued while one is outstanding.

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, bail};
use colored::Colorize;

use screener::adapters::FileSessionStore;
use screener::core::models::{Article, DecisionKind, REASON_OTHER, Reviewer, Role};
use screener::core::services::{Navigator, Phase, Session};
use screener::output::{OutputMode, SummaryResult, meta_line, print_numbered};

use super::{Context, parse_role};

/// A list number or a typed name
fn pick_reviewer(reviewers: &[String], answer: &str) -> anyhow::Result<String> {
    let Ok(number) = answer.parse::<usize>() else {
        return Ok(answer.to_string());
    };
    number
        .checked_sub(1)
        .and_then(|i| reviewers.get(i).cloned())
        .ok_or_else(|| anyhow!("No reviewer numbered {number}; choose 1-{}", reviewers.len()))
}

/// A command typed at the review prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum ReviewCommand {
    /// `args` is the reason and optional notes, split against the catalog later
    Decide {
        kind: DecisionKind,
        args: Option<String>,
    },
    Skip,
    Previous,
    Summary,
    Back,
    Reasons,
    Logout,
    Help,
    Quit,
}

/// Log in and run the interactive loop on stdin
pub fn review(ctx: &Context, reviewer: Option<&str>, role: Option<&str>) -> anyhow::Result<()> {
    if ctx.mode == OutputMode::Json {
        bail!("'review' is interactive and does not support --json");
    }

    let (config, gateway) = ctx.connect()?;
    let store = FileSessionStore::default_location();
    let mut navigator = Navigator::new(&gateway, &store, config.screening);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let reviewer = choose_reviewer(&navigator, &mut input, reviewer, role)?;
    println!("Loading your assigned articles...");
    navigator.login(&reviewer.name, reviewer.role)?;
    println!("Logged in as {}\n", reviewer.display_label().bold());

    run_loop(&mut navigator, &mut input)
}

fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Reviewer from flags, the saved login, or prompts, in that order
fn choose_reviewer(
    navigator: &Navigator<'_>,
    input: &mut impl BufRead,
    reviewer: Option<&str>,
    role: Option<&str>,
) -> anyhow::Result<Reviewer> {
    let saved = navigator.saved_login()?;

    let name = match reviewer {
        Some(name) => name.to_string(),
        None => {
            println!("Loading reviewers...");
            let reviewers = navigator.reviewers()?;
            println!("Select your name:");
            print_numbered(&reviewers);
            let default = saved.as_ref().map(|s| s.reviewer.clone());
            let label = default
                .as_ref()
                .map_or_else(|| "Name: ".to_string(), |d| format!("Name [{d}]: "));
            let answer = prompt(input, &label)?.unwrap_or_default();
            match (answer.as_str(), default) {
                ("", Some(default)) => default,
                ("", None) => bail!("Please select your name"),
                (answer, _) => pick_reviewer(&reviewers, answer)?,
            }
        },
    };

    let role = match role {
        Some(role) => parse_role(role)?,
        None => {
            let default = saved.as_ref().map(|s| s.role);
            let label = default.map_or_else(
                || "Role (C1 = first, C2 = second): ".to_string(),
                |d| format!("Role (C1 = first, C2 = second) [{d}]: "),
            );
            let answer = prompt(input, &label)?.unwrap_or_default();
            match (answer.as_str(), default) {
                ("", Some(default)) => default,
                ("", None) => bail!("Please select your role"),
                (answer, _) => parse_role(answer)?,
            }
        },
    };

    Ok(Reviewer::new(name, role))
}

fn parse_command(line: &str) -> Result<ReviewCommand, String> {
    let line = line.trim();
    let (head, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(head, rest)| (head, rest.trim()));

    let decide = |kind| ReviewCommand::Decide {
        kind,
        args: (!rest.is_empty()).then(|| rest.to_string()),
    };

    match head.to_lowercase().as_str() {
        "i" | "include" => Ok(decide(DecisionKind::Include)),
        "e" | "exclude" => Ok(decide(DecisionKind::Exclude)),
        "s" | "skip" | "n" | "next" => Ok(ReviewCommand::Skip),
        "p" | "prev" | "previous" => Ok(ReviewCommand::Previous),
        "sum" | "summary" => Ok(ReviewCommand::Summary),
        "b" | "back" => Ok(ReviewCommand::Back),
        "r" | "reasons" => Ok(ReviewCommand::Reasons),
        "logout" => Ok(ReviewCommand::Logout),
        "h" | "help" | "?" => Ok(ReviewCommand::Help),
        "q" | "quit" | "exit" => Ok(ReviewCommand::Quit),
        "" => Err(String::new()),
        other => Err(format!("Unknown command '{other}'. Type h for help.")),
    }
}

fn run_loop(navigator: &mut Navigator<'_>, input: &mut impl BufRead) -> anyhow::Result<()> {
    render(navigator);

    loop {
        let Some(line) = prompt(input, "> ")? else {
            break;
        };
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                if !message.is_empty() {
                    println!("{message}");
                }
                continue;
            },
        };

        let result = match command {
            ReviewCommand::Quit => break,
            ReviewCommand::Help => {
                print_help();
                continue;
            },
            ReviewCommand::Reasons => {
                print_reasons(navigator);
                continue;
            },
            ReviewCommand::Decide { kind, args } => decide(navigator, input, kind, args.as_deref()),
            ReviewCommand::Skip => navigator.skip().map_err(anyhow::Error::from),
            ReviewCommand::Previous => navigator
                .previous()
                .map(|moved| {
                    if !moved {
                        println!("No previous article.");
                    }
                })
                .map_err(anyhow::Error::from),
            ReviewCommand::Summary => {
                println!("Loading your summary...");
                navigator.view_summary().map_err(anyhow::Error::from)
            },
            ReviewCommand::Back => navigator.back().map_err(anyhow::Error::from),
            ReviewCommand::Logout => {
                navigator.logout()?;
                println!("Logged out.");
                break;
            },
        };

        match result {
            Ok(()) => render(navigator),
            Err(e) => println!("{} {e}", "Error:".red().bold()),
        }
    }

    Ok(())
}

fn decide(
    navigator: &mut Navigator<'_>,
    input: &mut impl BufRead,
    kind: DecisionKind,
    args: Option<&str>,
) -> anyhow::Result<()> {
    let role = navigator
        .session()
        .reviewer()
        .map(|r| r.role)
        .ok_or_else(|| anyhow!("not logged in"))?;
    let interactive = args.is_none();

    let (reason, notes) = match args {
        Some(args) => split_reason(navigator.policy().reasons(role, kind), args),
        None => {
            let label = match kind {
                DecisionKind::Include => "Reason for inclusion:",
                DecisionKind::Exclude => "Reason for exclusion:",
            };
            println!("{label}");
            print_numbered(navigator.policy().reasons(role, kind));
            (prompt(input, "Reason: ")?.unwrap_or_default(), None)
        },
    };

    let is_other = navigator
        .policy()
        .resolve_reason(role, kind, &reason)
        .is_ok_and(|r| r == REASON_OTHER);
    let notes = match notes {
        Some(notes) => Some(notes),
        None if is_other => prompt(input, "Notes (required for \"other\"): ")?,
        None if interactive => prompt(input, "Additional notes (Enter to skip): ")?,
        None => None,
    };

    println!("Saving your decision...");
    navigator.decide(kind, &reason, notes.as_deref())?;
    Ok(())
}

/// Split typed arguments into a reason and notes.
///
/// The longest catalog reason the input starts with wins, so multi-word
/// reasons can be typed out. Otherwise the first word is the reason (a number
/// or an unknown reason, rejected later).
fn split_reason(reasons: &[String], args: &str) -> (String, Option<String>) {
    let args = args.trim();
    let matched = reasons
        .iter()
        .filter(|reason| {
            args.get(..reason.len()).is_some_and(|head| head.eq_ignore_ascii_case(reason))
                && args[reason.len()..]
                    .chars()
                    .next()
                    .is_none_or(char::is_whitespace)
        })
        .max_by_key(|reason| reason.len());

    let (reason, notes) = match matched {
        Some(reason) => (&args[..reason.len()], &args[reason.len()..]),
        None => args.split_once(char::is_whitespace).unwrap_or((args, "")),
    };
    let notes = notes.trim();
    (reason.to_string(), (!notes.is_empty()).then(|| notes.to_string()))
}

fn render(navigator: &Navigator<'_>) {
    let session = navigator.session();
    match session.phase() {
        Phase::Reviewing => {
            if let Some(article) = session.current() {
                render_article(session, article);
            }
        },
        Phase::QueueExhausted => {
            println!();
            if session.queue().is_empty() {
                println!("{}", "No articles are assigned to you.".bold());
            } else {
                println!("{}", "All assigned articles are reviewed.".green().bold());
            }
            if session.can_go_back() {
                println!("Type 'sum' for your summary, 'p' to revisit the previous article, 'q' to quit.");
            } else {
                println!("Type 'sum' for your summary or 'q' to quit.");
            }
        },
        Phase::SummaryView => {
            if let (Some(reviewer), Some(summary)) = (session.reviewer(), session.summary()) {
                println!();
                SummaryResult {
                    reviewer: reviewer.name.clone(),
                    role: reviewer.role,
                    summary: summary.clone(),
                }
                .render(OutputMode::Human);
                println!("\nType 'b' to return to review, 'logout' to log out.");
            }
        },
        Phase::Unauthenticated | Phase::QueueLoading => {},
    }
}

fn field(label: &str, value: Option<&str>) {
    println!("{:<13}{}", format!("{label}:"), value.unwrap_or("N/A"));
}

fn render_article(session: &Session, article: &Article) {
    let progress = session.progress();
    println!();
    println!(
        "{}",
        format!(
            "Article {} of {} ({:.0}% complete)",
            progress.position, progress.total, progress.percent
        )
        .dimmed()
    );
    println!("{}", article.title.bold());

    match (article.row_number, &article.sheet_url) {
        (Some(row), Some(url)) => println!("{}", format!("Sheet Row {row}  {url}").dimmed()),
        (Some(row), None) => println!("{}", format!("Sheet Row {row}").dimmed()),
        _ => {},
    }
    if article.duplicate {
        println!("{}", "⚠ Flagged as a possible duplicate".yellow());
    }

    println!();
    field("Authors", Some(article.author.as_deref().unwrap_or("Unknown")));
    field("Year", article.year.as_deref());
    field("Source", article.source.as_deref());
    field("Publication", article.publication.as_deref());
    field("Type", article.publication_type.as_deref());
    field("DOI", article.doi_url().as_deref());
    field(
        "Full text",
        Some(article.url.as_deref().unwrap_or("No URL available")),
    );

    println!("\nAbstract:");
    println!(
        "  {}",
        article.abstract_text.as_deref().unwrap_or("No abstract available")
    );
    println!();

    let previous = if session.can_go_back() {
        "[p]revious".normal()
    } else {
        "[p]revious".dimmed()
    };
    println!("[i]nclude  [e]xclude  [s]kip  {previous}  [sum]mary  [r]easons  [q]uit  (h for help)");
}

fn print_reasons(navigator: &Navigator<'_>) {
    let role = navigator
        .session()
        .reviewer()
        .map_or(Role::First, |r| r.role);
    println!("Include:");
    print_numbered(navigator.policy().reasons(role, DecisionKind::Include));
    println!("Exclude:");
    print_numbered(navigator.policy().reasons(role, DecisionKind::Exclude));
}

fn print_help() {
    println!(
        "\
Commands:
  i [n [notes]]   Include; pick reason n (or type the reason) then notes
  e [n [notes]]   Exclude; pick reason n (or type the reason) then notes
  s               Skip to the next article
  p               Go back to the previous article
  sum             Show your summary
  b               Return from the summary
  r               List reasons
  logout          Log out and forget your saved login
  q               Quit (your login is remembered)"
    );
}

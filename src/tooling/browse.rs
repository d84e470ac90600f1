//! Interactive browse commands: each input line is one UI event.

use crate::error::{ChartError, Result};
use crate::format::{format_filter_summary, format_rows};
use crate::session::ChartSession;

/// Help text listing browse commands.
pub const BROWSE_HELP: &str = "\
Commands:
  search <term> | /<term>   set the name search (empty clears it)
  clear                     clear the search term
  dept <name|All>           filter by department
  grade <A|B|C|D|All>       filter by grade
  toggle <key|name>         expand or collapse a node
  reset                     restore all filters to defaults
  zoom in | zoom out | + | -
  help                      show this help
  quit                      leave";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Search(String),
    Department(String),
    Grade(String),
    Toggle(String),
    Reset,
    ZoomIn,
    ZoomOut,
    Help,
    Quit,
}

impl BrowseCommand {
    pub fn parse(line: &str) -> Result<Self> {
        // Only the command word is trimmed; search terms keep their spaces.
        let line = line.trim_start();
        if let Some(term) = line.strip_prefix('/') {
            return Ok(BrowseCommand::Search(term.to_string()));
        }
        let (verb, raw_rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest),
            None => (line.trim_end(), ""),
        };
        let rest = raw_rest.trim();
        let command = match verb.to_ascii_lowercase().as_str() {
            "search" | "s" => BrowseCommand::Search(raw_rest.to_string()),
            "clear" => BrowseCommand::Search(String::new()),
            "dept" | "department" | "d" => BrowseCommand::Department(require(verb, rest)?),
            "grade" | "g" => BrowseCommand::Grade(require(verb, rest)?),
            "toggle" | "t" => BrowseCommand::Toggle(require(verb, rest)?),
            "reset" => BrowseCommand::Reset,
            "+" => BrowseCommand::ZoomIn,
            "-" => BrowseCommand::ZoomOut,
            "zoom" => match rest {
                "in" | "+" => BrowseCommand::ZoomIn,
                "out" | "-" => BrowseCommand::ZoomOut,
                other => {
                    return Err(ChartError::InvalidFilter(format!(
                        "zoom expects 'in' or 'out', got '{}'",
                        other
                    )))
                }
            },
            "help" | "?" | "" => BrowseCommand::Help,
            "quit" | "exit" | "q" => BrowseCommand::Quit,
            other => {
                return Err(ChartError::InvalidFilter(format!(
                    "unknown command '{}' (type 'help')",
                    other
                )))
            }
        };
        Ok(command)
    }
}

fn require(verb: &str, rest: &str) -> Result<String> {
    if rest.is_empty() {
        return Err(ChartError::InvalidFilter(format!("'{}' needs an argument", verb)));
    }
    Ok(rest.to_string())
}

/// Result of applying a command to a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseOutcome {
    /// Redraw the chart, optionally with a status message
    Redraw(Option<String>),
    Message(String),
    Quit,
}

impl BrowseCommand {
    pub fn apply(self, session: &mut ChartSession) -> Result<BrowseOutcome> {
        let outcome = match self {
            BrowseCommand::Search(term) => {
                session.set_search_term(term)?;
                BrowseOutcome::Redraw(None)
            }
            BrowseCommand::Department(value) => {
                session.set_department_filter(&value)?;
                BrowseOutcome::Redraw(None)
            }
            BrowseCommand::Grade(value) => {
                session.set_grade_filter(&value)?;
                BrowseOutcome::Redraw(None)
            }
            BrowseCommand::Toggle(query) => {
                let (key, expanded) = session.toggle(&query)?;
                let verb = if expanded { "Expanded" } else { "Collapsed" };
                BrowseOutcome::Redraw(Some(format!("{} {}", verb, key)))
            }
            BrowseCommand::Reset => {
                session.reset_filters()?;
                BrowseOutcome::Redraw(Some("Filters cleared".to_string()))
            }
            BrowseCommand::ZoomIn => {
                session.zoom_mut().zoom_in();
                BrowseOutcome::Redraw(None)
            }
            BrowseCommand::ZoomOut => {
                session.zoom_mut().zoom_out();
                BrowseOutcome::Redraw(None)
            }
            BrowseCommand::Help => BrowseOutcome::Message(BROWSE_HELP.to_string()),
            BrowseCommand::Quit => BrowseOutcome::Quit,
        };
        Ok(outcome)
    }
}

/// Full screen text for the current session state.
pub fn render_screen(session: &ChartSession, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format_filter_summary(session.criteria(), session.zoom()));
    out.push_str("\n\n");
    out.push_str(&format_rows(&session.rows(), session.zoom(), color));
    out
}

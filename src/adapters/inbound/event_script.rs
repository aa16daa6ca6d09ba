//! Line-oriented event scripts
//!
//! Stands in for pointer input: each line is one event, applied to the
//! interaction port in order.
//!
//! ```text
//! # comments and blank lines are skipped
//! hover generator-1
//! leave
//! click workbench-1
//! extend medstation-1
//! show
//! summary
//! quit
//! ```

use crate::application::read_models::{HideoutReadModelBuilder, ReadModelOptions, SummarySection};
use crate::ports::inbound::{HideoutInteractionPort, InteractionOutcome};
use crate::ports::outbound::{HideoutFormatter, OutputPresenter};
use crate::shared::error::HideoutError;
use crate::shared::Result;
use std::io::BufRead;
use std::str::FromStr;

/// One scripted interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Hover(String),
    Leave,
    Click(String),
    /// Click with the modifier key held
    Extend(String),
    /// Print the whole graph with styling
    Show,
    /// Print the requirement summary even when not pinned
    Summary,
    Quit,
}

impl SessionEvent {
    /// Parses one script line; `Ok(None)` for blank lines and comments
    pub fn parse_line(line: &str) -> std::result::Result<Option<Self>, HideoutError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        line.parse().map(Some)
    }

    fn name(&self) -> &'static str {
        match self {
            SessionEvent::Hover(_) => "hover",
            SessionEvent::Leave => "leave",
            SessionEvent::Click(_) => "click",
            SessionEvent::Extend(_) => "extend",
            SessionEvent::Show => "show",
            SessionEvent::Summary => "summary",
            SessionEvent::Quit => "quit",
        }
    }
}

impl FromStr for SessionEvent {
    type Err = HideoutError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let command = words.next().unwrap_or_default().to_ascii_lowercase();
        let argument = words.next();
        if words.next().is_some() {
            return Err(HideoutError::Validation {
                message: format!("'{}' takes at most one argument", command),
            });
        }

        let station = |argument: Option<&str>| {
            argument
                .map(str::to_string)
                .ok_or_else(|| HideoutError::Validation {
                    message: format!("'{}' needs a station id", command),
                })
        };
        let bare = |event: SessionEvent| match argument {
            None => Ok(event),
            Some(_) => Err(HideoutError::Validation {
                message: format!("'{}' takes no argument", command),
            }),
        };

        match command.as_str() {
            "hover" => station(argument).map(SessionEvent::Hover),
            "click" => station(argument).map(SessionEvent::Click),
            "extend" => station(argument).map(SessionEvent::Extend),
            "leave" => bare(SessionEvent::Leave),
            "show" => bare(SessionEvent::Show),
            "summary" => bare(SessionEvent::Summary),
            "quit" | "exit" => bare(SessionEvent::Quit),
            other => Err(HideoutError::Validation {
                message: format!("unknown event '{}'", other),
            }),
        }
    }
}

/// Counts of what happened while running a script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptReport {
    pub applied: usize,
    pub ignored: usize,
    pub invalid: usize,
}

/// EventScriptRunner feeds script events into an interaction port
///
/// After every event the current selection is rendered (with the summary
/// while pinned). Rejected events and unparsable lines are reported on
/// stderr and the script continues.
pub struct EventScriptRunner<'a> {
    formatter: &'a dyn HideoutFormatter,
    presenter: &'a dyn OutputPresenter,
}

impl<'a> EventScriptRunner<'a> {
    pub fn new(formatter: &'a dyn HideoutFormatter, presenter: &'a dyn OutputPresenter) -> Self {
        Self {
            formatter,
            presenter,
        }
    }

    /// Runs every line of `input` until it ends or a `quit` event
    pub fn run<P, R>(&self, port: &mut P, input: R) -> Result<ScriptReport>
    where
        P: HideoutInteractionPort + ?Sized,
        R: BufRead,
    {
        let mut report = ScriptReport::default();

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let event = match SessionEvent::parse_line(&line) {
                Ok(Some(event)) => event,
                Ok(None) => continue,
                Err(e) => {
                    report.invalid += 1;
                    eprintln!("line {}: {}", index + 1, e);
                    continue;
                }
            };
            if event == SessionEvent::Quit {
                break;
            }

            match self.apply(port, &event) {
                InteractionOutcome::Applied => report.applied += 1,
                InteractionOutcome::Ignored(reason) => {
                    report.ignored += 1;
                    eprintln!("line {}: {} ignored: {}", index + 1, event.name(), reason);
                }
            }
            self.render(port, &event)?;
        }

        tracing::debug!(?report, "event script finished");
        Ok(report)
    }

    fn apply<P>(&self, port: &mut P, event: &SessionEvent) -> InteractionOutcome
    where
        P: HideoutInteractionPort + ?Sized,
    {
        match event {
            SessionEvent::Hover(station) => port.hover_enter(station),
            SessionEvent::Leave => port.hover_leave(),
            SessionEvent::Click(station) => port.click(station, false),
            SessionEvent::Extend(station) => port.click(station, true),
            SessionEvent::Show | SessionEvent::Summary | SessionEvent::Quit => {
                InteractionOutcome::Applied
            }
        }
    }

    fn render<P>(&self, port: &P, event: &SessionEvent) -> Result<()>
    where
        P: HideoutInteractionPort + ?Sized,
    {
        let options = match event {
            SessionEvent::Show => ReadModelOptions::full(),
            SessionEvent::Summary => ReadModelOptions::summary_only(SummarySection::Always),
            _ => ReadModelOptions::default(),
        };
        let model = HideoutReadModelBuilder::build(port, &options);
        self.presenter.present(&self.formatter.format(&model)?)
    }
}

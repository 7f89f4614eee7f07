//! The `guidance-log track` command.
//!
//! Runs the front-desk prompt loop: each line checks a student in or out,
//! redraws the session list, or saves a snapshot. State lives only as long
//! as the loop; completed visits are appended to the session log as they
//! happen.

use crate::cli::args::TrackArgs;
use crate::config::ResolvedConfig;
use crate::error::{GuidanceError, Result};
use crate::logfile::LogWriter;
use crate::tracker::{GuidanceTracker, SessionTracking};
use crate::ui::{Prompt, PromptOption, UserInterface};
use crate::view::SessionView;

use super::dispatcher::{Command, CommandResult};

const HELP: &str = "\
Commands:
  <id>            check a student in
  enter <id>      check a student in (alias: in)
  exit <id>       check a student out (alias: out)
  exit            pick a student to check out
  show            show the session list (alias: list)
  save            save the session list to current_sessions_log.txt
  help            show this help
  quit            leave (alias: q)";

/// One line of front-desk input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Check in the given ID.
    Enter(String),
    /// Check out the given ID.
    Exit(String),
    /// Check out someone chosen from the open sessions.
    ExitPick,
    Show,
    Save,
    Help,
    Quit,
    /// Blank line.
    Nothing,
}

impl Action {
    /// Interpret a line of input.
    ///
    /// The command word is case-insensitive. Everything after the first
    /// space is the ID, verbatim, so `"enter "` checks in the blank ID. A
    /// line that is not a command is an ID to check in; IDs that collide
    /// with a command word need the explicit `enter` form.
    pub fn parse(line: &str) -> Self {
        if line.is_empty() {
            return Self::Nothing;
        }

        let (word, id) = match line.split_once(' ') {
            Some((word, id)) => (word, Some(id)),
            None => (line, None),
        };

        match (word.to_lowercase().as_str(), id) {
            ("enter" | "in", id) => Self::Enter(id.unwrap_or_default().to_string()),
            ("exit" | "out", Some(id)) => Self::Exit(id.to_string()),
            ("exit" | "out", None) => Self::ExitPick,
            ("show" | "list", None) => Self::Show,
            ("save", None) => Self::Save,
            ("help" | "?", None) => Self::Help,
            ("quit" | "q", None) => Self::Quit,
            _ => Self::Enter(line.to_string()),
        }
    }
}

/// The track command implementation.
pub struct TrackCommand {
    config: ResolvedConfig,
    args: TrackArgs,
}

impl TrackCommand {
    /// Create a new track command.
    pub fn new(config: ResolvedConfig, args: TrackArgs) -> Self {
        Self { config, args }
    }

    /// Run the prompt loop against any tracker and view until the user
    /// quits or input runs out.
    pub fn run_loop(
        &self,
        tracker: &mut dyn SessionTracking,
        view: &dyn SessionView,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let prompt = Prompt::input("command", "Enter your ID #");

        loop {
            let line = match ui.prompt(&prompt) {
                Ok(answer) => answer.into_text(),
                Err(GuidanceError::InputClosed) => break,
                Err(e) => return Err(e),
            };

            match Action::parse(&line) {
                Action::Enter(id) => {
                    if tracker.enter(&id) {
                        ui.success(&format!("Checked in '{}'", id));
                    } else {
                        ui.warning(&format!("'{}' is already on the list", id));
                    }
                    self.refresh(tracker, view, ui);
                }
                Action::Exit(id) => {
                    check_out(tracker, ui, &id);
                    self.refresh(tracker, view, ui);
                }
                Action::ExitPick => {
                    if let Some(id) = pick_open_session(tracker, ui)? {
                        check_out(tracker, ui, &id);
                        self.refresh(tracker, view, ui);
                    }
                }
                Action::Show => show(tracker, view, ui),
                Action::Save => {
                    let content = view.snapshot_content(&tracker.rows());
                    if tracker.save_snapshot(&content) {
                        ui.success("Saved current log");
                    }
                }
                Action::Help => ui.message(HELP),
                Action::Quit => break,
                Action::Nothing => {}
            }
        }

        Ok(())
    }

    fn refresh(
        &self,
        tracker: &dyn SessionTracking,
        view: &dyn SessionView,
        ui: &mut dyn UserInterface,
    ) {
        if !self.args.no_refresh {
            show(tracker, view, ui);
        }
    }
}

impl Command for TrackCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let writer = LogWriter::new(&self.config.log_directory)
            .with_counselor(self.config.counselor_name.clone());
        tracing::debug!(
            log = %writer.log_path().display(),
            view = %self.config.view,
            "starting front desk"
        );

        let mut tracker = GuidanceTracker::new(writer);
        let view = self.config.view.view();

        ui.show_header("Guidance Session Tracker");
        if ui.is_interactive() {
            ui.message("Type an ID to check in, 'exit <id>' to check out, 'help' for more.");
        }

        self.run_loop(&mut tracker, view.as_ref(), ui)?;
        Ok(CommandResult::success())
    }
}

fn check_out(tracker: &mut dyn SessionTracking, ui: &mut dyn UserInterface, id: &str) {
    match tracker.exit(id) {
        Some(done) => ui.success(&format!("Checked out '{}' after {}", done.id, done.elapsed)),
        None => ui.warning(&format!("No open session for '{}'", id)),
    }
}

fn pick_open_session(
    tracker: &dyn SessionTracking,
    ui: &mut dyn UserInterface,
) -> Result<Option<String>> {
    let open = tracker.open_ids();
    if open.is_empty() {
        ui.warning("Nobody is checked in");
        return Ok(None);
    }

    let options = open.iter().map(|id| PromptOption::plain(id)).collect();
    let prompt = Prompt::select("checkout", "Who is leaving?", options);
    match ui.prompt(&prompt) {
        Ok(answer) => Ok(answer.into_choice()),
        Err(GuidanceError::InputClosed) => Ok(None),
        Err(e) => Err(e),
    }
}

fn show(tracker: &dyn SessionTracking, view: &dyn SessionView, ui: &mut dyn UserInterface) {
    let rows = tracker.rows();
    if rows.is_empty() {
        ui.message("No sessions yet.");
    } else {
        ui.message(&view.render(&rows));
    }
}

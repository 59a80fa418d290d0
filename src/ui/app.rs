use rust_decimal::Decimal;

use super::commands;
use super::dialog::DialogKind;
use super::render;
use super::util::format_amount;
use crate::clock::Clock;
use crate::models::{parse_amount, BudgetError, BudgetModel, Notification};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Dialog(DialogKind),
}

/// Shell state: the budget model, the clock that drives it, and output waiting to be printed.
pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) model: BudgetModel,
    clock: Box<dyn Clock>,
    output: Vec<String>,
}

impl App {
    pub(crate) fn new(model: BudgetModel, clock: Box<dyn Clock>) -> Self {
        Self {
            running: true,
            input_mode: InputMode::Normal,
            model,
            clock,
            output: Vec::new(),
        }
    }

    pub(crate) fn prompt(&self) -> &'static str {
        match self.input_mode {
            InputMode::Normal => "closet> ",
            InputMode::Dialog(_) => "Amount ($): ",
        }
    }

    pub(crate) fn say(&mut self, line: impl Into<String>) {
        self.output.push(line.into());
    }

    pub(crate) fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }

    pub(crate) fn show_welcome(&mut self) {
        self.sync_clock();
        let today = self.model.current_date();
        self.say("Budget Closet");
        self.say(format!(
            "Daily budget {}, today is {}",
            format_amount(self.model.daily_budget()),
            today.format("%a %-d %b %Y")
        ));
        self.say("Type 'help' for commands.");
        self.say(String::new());
        self.show_closet();
        self.flush_notifications();
    }

    /// Process one line of input. The clock is checked first so views never show a stale day.
    pub(crate) fn handle_input(&mut self, line: &str) -> anyhow::Result<()> {
        self.sync_clock();
        match self.input_mode {
            InputMode::Normal => commands::handle_command(line, self)?,
            InputMode::Dialog(kind) => self.handle_dialog_input(kind, line),
        }
        self.flush_notifications();
        Ok(())
    }

    pub(crate) fn show_closet(&mut self) {
        let lines = render::render_closet(&self.model.closet());
        self.output.extend(lines);
    }

    pub(crate) fn open_dialog(&mut self, kind: DialogKind) {
        self.say(kind.title());
        self.say(kind.description());
        self.input_mode = InputMode::Dialog(kind);
    }

    /// Run a validated transaction. Overspending surfaces through the model's notifications.
    pub(crate) fn apply(&mut self, kind: DialogKind, amount: Decimal) {
        let result = match kind {
            DialogKind::AddSavings => self.model.add_savings(amount),
            DialogKind::RecordSpending => self.model.record_spending(amount),
        };
        match (kind, result) {
            (DialogKind::AddSavings, Ok(savings)) => {
                self.say(render::render_bag("Savings", savings));
            }
            (DialogKind::RecordSpending, Ok(left)) => {
                let budget = self.model.daily_budget();
                self.say(format!(
                    "Today: {} left of {}",
                    format_amount(left),
                    format_amount(budget)
                ));
            }
            // Already queued as a SpendingRejected notification.
            (_, Err(err @ BudgetError::InsufficientBudget { .. })) => {
                tracing::debug!(%err, %kind, "transaction not applied");
            }
            (_, Err(err)) => {
                tracing::warn!(%err, %kind, "transaction not applied");
                self.say(err.to_string());
            }
        }
    }

    fn handle_dialog_input(&mut self, kind: DialogKind, line: &str) {
        let input = line.trim();
        if input.is_empty() || input.eq_ignore_ascii_case("cancel") {
            self.input_mode = InputMode::Normal;
            self.say("Cancelled");
            return;
        }
        match parse_amount(input) {
            Ok(amount) => {
                self.input_mode = InputMode::Normal;
                self.apply(kind, amount);
            }
            // Dialog stays open until the amount is valid.
            Err(err) => self.say(err.to_string()),
        }
    }

    fn sync_clock(&mut self) {
        let now = self.clock.now();
        self.model.tick(now);
    }

    fn flush_notifications(&mut self) {
        for note in self.model.take_notifications() {
            let line = render_notification(&note);
            self.output.push(line);
            if let Notification::SpendingRejected { reason } = &note {
                if let Some(detail) = reason.detail() {
                    self.output.push(format!("  ({detail})"));
                }
            }
        }
    }
}

fn render_notification(note: &Notification) -> String {
    let mark = if note.is_error() { '✗' } else { '✓' };
    format!("{mark} {note}")
}

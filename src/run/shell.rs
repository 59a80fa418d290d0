use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::models::BudgetModel;
use crate::ui::app::App;

pub(crate) fn as_shell(config: &Config) -> Result<()> {
    let clock = SystemClock;
    let model = BudgetModel::new(config.daily_budget, clock.now().date());
    let mut app = App::new(model, Box::new(clock));

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_app(&mut app, stdin.lock(), &mut stdout.lock())
}

/// Read commands line by line until `quit` or end of input.
pub(crate) fn run_app<R: BufRead, W: Write>(app: &mut App, mut input: R, out: &mut W) -> Result<()> {
    app.show_welcome();
    flush_output(app, out)?;

    let mut line = String::new();
    while app.running {
        write!(out, "{}", app.prompt())?;
        out.flush()?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            writeln!(out)?;
            break;
        }

        app.handle_input(&line)?;
        flush_output(app, out)?;
    }
    tracing::debug!("shell closed");
    Ok(())
}

fn flush_output<W: Write>(app: &mut App, out: &mut W) -> Result<()> {
    for line in app.take_output() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod shell_tests;

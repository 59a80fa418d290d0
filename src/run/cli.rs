use anyhow::Result;

use crate::clock::{Clock, SystemClock};
use crate::config::{Config, DAILY_BUDGET_ENV, DAILY_BUDGET_FLAG};
use crate::logging::LOG_ENV;
use crate::models::BudgetModel;
use crate::ui::render;

pub(crate) fn as_cli(args: &[String], config: &Config) -> Result<()> {
    match args[1].as_str() {
        "show" => cli_show(config),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("closet {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Budget Closet - daily budget jars on weekly shelves");
    println!();
    println!("Usage: closet [{DAILY_BUDGET_FLAG} <amount>] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch the interactive shell");
    println!("  show                          Print this week, next week and both bags");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Environment:");
    println!("  {DAILY_BUDGET_ENV:<29} Daily budget (default 50.00)");
    println!("  {LOG_ENV:<29} Log filter, e.g. budget_closet=debug");
}

fn cli_show(config: &Config) -> Result<()> {
    let model = BudgetModel::new(config.daily_budget, SystemClock.now().date());
    for line in render::render_closet(&model.closet()) {
        println!("{line}");
    }
    Ok(())
}

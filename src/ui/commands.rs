use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::App;
use super::dialog::DialogKind;
use super::render;
use super::util::{format_amount, levenshtein};
use crate::models::parse_amount;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit", cmd_quit, r);
    register_command!("quit", "Quit", cmd_quit, r);
    register_command!("exit", "Quit", cmd_quit, r);
    register_command!("c", "Show both shelves and both bags", cmd_closet, r);
    register_command!("closet", "Show both shelves and both bags", cmd_closet, r);
    register_command!("w", "Show this week's shelf", cmd_week, r);
    register_command!("week", "Show this week's shelf", cmd_week, r);
    register_command!("n", "Show next week's shelf", cmd_next, r);
    register_command!("next", "Show next week's shelf", cmd_next, r);
    register_command!("+", "Add to savings (e.g. + 15)", cmd_add, r);
    register_command!(
        "add",
        "Add to savings (e.g. add 15, or add alone to open the dialog)",
        cmd_add,
        r
    );
    register_command!("-", "Record spending (e.g. - 4.50)", cmd_spend, r);
    register_command!(
        "spend",
        "Record spending today (e.g. spend 4.50, or spend alone to open the dialog)",
        cmd_spend,
        r
    );
    register_command!("s", "Show the savings bag", cmd_savings, r);
    register_command!("savings", "Show the savings bag", cmd_savings, r);
    register_command!(
        "spent",
        "Show the spent bag with a per-day breakdown",
        cmd_spent,
        r
    );
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!("help", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.say(format!(
            "Unknown command: {cmd_name}. Did you mean {suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_closet(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_closet();
    Ok(())
}

fn cmd_week(_args: &str, app: &mut App) -> anyhow::Result<()> {
    let shelf = app.model.closet().this_week;
    for line in render::render_shelf(&shelf) {
        app.say(line);
    }
    Ok(())
}

fn cmd_next(_args: &str, app: &mut App) -> anyhow::Result<()> {
    let shelf = app.model.closet().next_week;
    for line in render::render_shelf(&shelf) {
        app.say(line);
    }
    Ok(())
}

fn cmd_add(args: &str, app: &mut App) -> anyhow::Result<()> {
    transaction(args, app, DialogKind::AddSavings);
    Ok(())
}

fn cmd_spend(args: &str, app: &mut App) -> anyhow::Result<()> {
    transaction(args, app, DialogKind::RecordSpending);
    Ok(())
}

fn transaction(args: &str, app: &mut App, kind: DialogKind) {
    if args.is_empty() {
        app.open_dialog(kind);
        return;
    }
    match parse_amount(args) {
        Ok(amount) => app.apply(kind, amount),
        Err(err) => app.say(format!("{err}. Usage: {}", kind.usage())),
    }
}

fn cmd_savings(_args: &str, app: &mut App) -> anyhow::Result<()> {
    let line = render::render_bag("Savings", app.model.savings());
    app.say(line);
    Ok(())
}

fn cmd_spent(_args: &str, app: &mut App) -> anyhow::Result<()> {
    let budget = app.model.daily_budget();
    let spent_days: Vec<(u32, rust_decimal::Decimal)> = app
        .model
        .tracked_days()
        .filter(|(_, left)| *left < budget)
        .map(|(day, left)| (day, budget - left))
        .collect();

    let line = render::render_bag("Spent This Month", app.model.total_spent_this_cycle());
    app.say(line);
    for (day, spent) in spent_days {
        app.say(format!("  day {day:>2}  {:>10}", format_amount(spent)));
    }
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    let mut names: Vec<&&str> = COMMANDS.keys().filter(|k| k.len() > 1).collect();
    names.sort();
    app.say("Commands:");
    for name in names {
        if let Some(cmd) = COMMANDS.get(*name) {
            app.say(format!("  {name:<8} {}", cmd.description));
        }
    }
    app.say("Aliases: c w n s h q, + for add, - for spend");
    Ok(())
}

use anyhow::{Context, Result};
use rust_decimal::Decimal;

use crate::models::parse_amount;

pub(crate) const DAILY_BUDGET_ENV: &str = "CLOSET_DAILY_BUDGET";
pub(crate) const DAILY_BUDGET_FLAG: &str = "--daily-budget";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    /// Amount every day's jar starts with.
    pub(crate) daily_budget: Decimal,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            daily_budget: Decimal::new(50, 0),
        }
    }
}

impl Config {
    /// Build the config from process arguments and environment.
    ///
    /// `--daily-budget <amount>` is removed from `args` so the remaining arguments are the command.
    pub(crate) fn load(args: &mut Vec<String>) -> Result<Self> {
        let flag = take_flag(args, DAILY_BUDGET_FLAG)?;
        let env = std::env::var(DAILY_BUDGET_ENV).ok();
        Self::resolve(flag.as_deref(), env.as_deref())
    }

    /// Flag wins over environment, environment wins over the default.
    pub(crate) fn resolve(flag: Option<&str>, env: Option<&str>) -> Result<Self> {
        let daily_budget = if let Some(raw) = flag {
            parse_budget(raw, DAILY_BUDGET_FLAG)?
        } else if let Some(raw) = env.filter(|v| !v.trim().is_empty()) {
            parse_budget(raw, DAILY_BUDGET_ENV)?
        } else {
            return Ok(Self::default());
        };
        Ok(Self { daily_budget })
    }
}

fn parse_budget(raw: &str, source: &str) -> Result<Decimal> {
    parse_amount(raw).with_context(|| format!("Invalid daily budget from {source}: '{raw}'"))
}

/// Remove `name <value>` from `args`, returning the value. The flag may appear at most once.
pub(crate) fn take_flag(args: &mut Vec<String>, name: &str) -> Result<Option<String>> {
    let Some(pos) = args.iter().position(|a| a == name) else {
        return Ok(None);
    };
    if pos + 1 >= args.len() {
        anyhow::bail!("Usage: {name} <amount>");
    }
    let value = args.remove(pos + 1);
    args.remove(pos);
    if args.iter().any(|a| a == name) {
        anyhow::bail!("{name} given more than once");
    }
    Ok(Some(value))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

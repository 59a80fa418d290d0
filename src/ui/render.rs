use rust_decimal::Decimal;

use super::util::{format_amount, percent};
use crate::models::{Closet, Jar, Shelf};

pub(crate) fn render_closet(closet: &Closet) -> Vec<String> {
    let mut lines = render_shelf(&closet.this_week);
    lines.push(String::new());
    lines.extend(render_shelf(&closet.next_week));
    lines.push(String::new());
    lines.push(render_bag("Savings", closet.savings));
    lines.push(render_bag("Spent This Month", closet.spent));
    lines
}

pub(crate) fn render_shelf(shelf: &Shelf) -> Vec<String> {
    let mut lines = Vec::with_capacity(shelf.jars.len() + 2);
    lines.push(shelf.label.to_string());
    lines.push("─".repeat(40));
    lines.extend(shelf.jars.iter().map(render_jar));
    lines.push(format!(
        "  {:<14} {:>10}",
        "left",
        format_amount(shelf.remaining_total())
    ));
    lines
}

fn render_jar(jar: &Jar) -> String {
    let marker = if jar.is_current_day { '>' } else { ' ' };
    format!(
        "{marker} {} {:>2}  {:>10} / {:<10} {:>3}%",
        jar.date.format("%a"),
        jar.day_of_month,
        format_amount(jar.remaining),
        format_amount(jar.daily_budget),
        percent(jar.fill()),
    )
}

pub(crate) fn render_bag(label: &str, amount: Decimal) -> String {
    format!("{label}: {}", format_amount(amount))
}

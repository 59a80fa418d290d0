use chrono::NaiveDate;
use rust_decimal::Decimal;

/// One day's budget as shown on a shelf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jar {
    pub date: NaiveDate,
    pub day_of_month: u32,
    pub daily_budget: Decimal,
    pub remaining: Decimal,
    pub is_current_day: bool,
}

impl Jar {
    /// How full the jar is, clamped to `0..=1`.
    pub fn fill(&self) -> Decimal {
        if self.daily_budget <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        (self.remaining / self.daily_budget).clamp(Decimal::ZERO, Decimal::ONE)
    }
}

/// Seven jars for one Sunday-to-Saturday week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shelf {
    pub label: &'static str,
    pub jars: Vec<Jar>,
}

impl Shelf {
    pub fn new(label: &'static str, jars: Vec<Jar>) -> Self {
        Self { label, jars }
    }

    pub fn remaining_total(&self) -> Decimal {
        self.jars
            .iter()
            .map(|j| j.remaining)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }
}

/// Everything the screen shows at once: two shelves and two bags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Closet {
    pub this_week: Shelf,
    pub next_week: Shelf,
    pub savings: Decimal,
    pub spent: Decimal,
}

use std::collections::{BTreeMap, VecDeque};

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use super::amount::validate_amount;
use super::error::BudgetError;
use super::{Closet, Jar, Notification, Shelf};

/// Number of consecutive days filled with a fresh budget on construction and on month rollover.
pub const WINDOW_DAYS: usize = 14;

const DAYS_PER_WEEK: usize = 7;

/// Day-indexed remaining budget, the savings total and the model's notion of "today".
///
/// Days are keyed by day-of-month only, so the same key is reused across months. Keys are
/// only ever bulk-reinitialized, never removed one at a time.
#[derive(Debug, Clone)]
pub struct BudgetModel {
    current_date: NaiveDate,
    daily_budget: Decimal,
    remaining: BTreeMap<u32, Decimal>,
    savings: Decimal,
    outbox: VecDeque<Notification>,
}

impl BudgetModel {
    /// `daily_budget` is expected to be positive; `Config` validates it.
    pub fn new(daily_budget: Decimal, today: NaiveDate) -> Self {
        let mut model = Self {
            current_date: today,
            daily_budget,
            remaining: BTreeMap::new(),
            savings: Decimal::ZERO,
            outbox: VecDeque::new(),
        };
        model.refill_window(today);
        model
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn daily_budget(&self) -> Decimal {
        self.daily_budget
    }

    pub fn savings(&self) -> Decimal {
        self.savings
    }

    /// Remaining budget for a day-of-month; untracked days have the full daily budget.
    pub fn remaining_for(&self, day_of_month: u32) -> Decimal {
        self.remaining
            .get(&day_of_month)
            .copied()
            .unwrap_or(self.daily_budget)
    }

    /// Tracked `(day_of_month, remaining)` pairs in day order.
    pub fn tracked_days(&self) -> impl Iterator<Item = (u32, Decimal)> + '_ {
        self.remaining.iter().map(|(day, left)| (*day, *left))
    }

    /// Feed the wall clock. Returns `true` when this call performed a month rollover.
    ///
    /// Repeated calls within the same calendar day are no-ops.
    pub fn tick(&mut self, now: NaiveDateTime) -> bool {
        let today = now.date();
        if today == self.current_date {
            return false;
        }

        tracing::debug!(from = %self.current_date, to = %today, "new day");
        self.current_date = today;

        if today.day() != 1 {
            return false;
        }

        self.refill_window(today);
        self.savings = Decimal::ZERO;
        tracing::info!(%today, "month rollover: budget window refilled, savings cleared");
        self.outbox.push_back(Notification::MonthReset);
        true
    }

    /// Put `amount` in the savings bag. Returns the new savings total.
    pub fn add_savings(&mut self, amount: Decimal) -> Result<Decimal, BudgetError> {
        let amount = validate_amount(amount)?;
        self.savings = self
            .savings
            .checked_add(amount)
            .ok_or(BudgetError::AmountTooLarge(amount))?;
        tracing::debug!(%amount, savings = %self.savings, "savings added");
        self.outbox.push_back(Notification::SavingsAdded { amount });
        Ok(self.savings)
    }

    /// Take `amount` out of today's jar. Returns what is left for today.
    ///
    /// Spending more than today's remaining budget is rejected without touching any jar.
    pub fn record_spending(&mut self, amount: Decimal) -> Result<Decimal, BudgetError> {
        let amount = validate_amount(amount)?;
        let today = self.current_date.day();
        let remaining = self.remaining_for(today);

        if amount > remaining {
            tracing::warn!(%amount, %remaining, day = today, "spending rejected");
            let reason = BudgetError::InsufficientBudget {
                requested: amount,
                remaining,
            };
            self.outbox.push_back(Notification::SpendingRejected {
                reason: reason.clone(),
            });
            return Err(reason);
        }

        let left = remaining - amount;
        self.remaining.insert(today, left);
        tracing::debug!(%amount, remaining = %left, day = today, "spending recorded");
        self.outbox.push_back(Notification::SpendingRecorded { amount });
        Ok(left)
    }

    /// The Sunday-to-Saturday week containing today.
    pub fn current_week_view(&self) -> Vec<Jar> {
        self.week_jars(self.week_start(), true)
    }

    /// The seven days after the current week.
    pub fn next_week_view(&self) -> Vec<Jar> {
        let start = self.week_start() + Days::new(DAYS_PER_WEEK as u64);
        self.week_jars(start, false)
    }

    /// Sum of `daily_budget - remaining` over the tracked window only.
    ///
    /// Saturates at `Decimal::MAX` instead of overflowing.
    pub fn total_spent_this_cycle(&self) -> Decimal {
        self.remaining
            .values()
            .map(|left| self.daily_budget - left)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    pub fn closet(&self) -> Closet {
        Closet {
            this_week: Shelf::new("This Week", self.current_week_view()),
            next_week: Shelf::new("Next Week", self.next_week_view()),
            savings: self.savings,
            spent: self.total_spent_this_cycle(),
        }
    }

    /// Drain queued notifications, oldest first.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.outbox.drain(..).collect()
    }

    fn refill_window(&mut self, start: NaiveDate) {
        self.remaining.clear();
        for date in start.iter_days().take(WINDOW_DAYS) {
            self.remaining.insert(date.day(), self.daily_budget);
        }
    }

    fn week_start(&self) -> NaiveDate {
        let offset = self.current_date.weekday().num_days_from_sunday();
        self.current_date - Days::new(u64::from(offset))
    }

    fn week_jars(&self, start: NaiveDate, mark_today: bool) -> Vec<Jar> {
        start
            .iter_days()
            .take(DAYS_PER_WEEK)
            .map(|date| Jar {
                date,
                day_of_month: date.day(),
                daily_budget: self.daily_budget,
                remaining: self.remaining_for(date.day()),
                is_current_day: mark_today && date == self.current_date,
            })
            .collect()
    }
}

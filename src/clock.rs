use chrono::{Local, NaiveDateTime};

/// Source of "now" for the host's day-change checks.
pub(crate) trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time.
pub(crate) struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that reads whatever time it was last set to.
#[cfg(test)]
pub(crate) struct FixedClock(pub(crate) std::rc::Rc<std::cell::Cell<NaiveDateTime>>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0.get()
    }
}

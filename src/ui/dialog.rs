/// The two transaction dialogs the closet offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DialogKind {
    AddSavings,
    RecordSpending,
}

impl DialogKind {
    pub(crate) fn title(&self) -> &'static str {
        match self {
            Self::AddSavings => "Add to Savings",
            Self::RecordSpending => "Record Spending",
        }
    }

    pub(crate) fn description(&self) -> &'static str {
        match self {
            Self::AddSavings => "Enter the amount you want to add to your savings bag",
            Self::RecordSpending => "Enter the amount you spent today",
        }
    }

    pub(crate) fn usage(&self) -> &'static str {
        match self {
            Self::AddSavings => "add <amount>",
            Self::RecordSpending => "spend <amount>",
        }
    }
}

impl std::fmt::Display for DialogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

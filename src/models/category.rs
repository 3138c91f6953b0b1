use serde::Serialize;

/// Closed set of parent task categories from the audit worksheet.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ParentCategory {
    Ehs,
    Hr,
    Qa,
    Esg,
    Other,
}

/// Sub-categories suggested by the entry form. Free text is always accepted;
/// when the parent is `Other` a custom sub-category is mandatory.
pub const SUGGESTED_SUB_CATEGORIES: [&str; 9] = [
    "SDS management",
    "OSHA log management",
    "Meeting minutes",
    "Training records",
    "Data entry",
    "Report writing",
    "Training coordination",
    "Invoice management",
    "Other",
];

impl ParentCategory {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "EHS" => Some(Self::Ehs),
            "HR" => Some(Self::Hr),
            "QA" => Some(Self::Qa),
            "ESG" => Some(Self::Esg),
            "OTHER" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ParentCategory::Ehs => "EHS",
            ParentCategory::Hr => "HR",
            ParentCategory::Qa => "QA",
            ParentCategory::Esg => "ESG",
            ParentCategory::Other => "Other",
        }
    }

    /// EHS and QA entries earn the +10 category bonus.
    pub fn bonus_eligible(&self) -> bool {
        matches!(self, ParentCategory::Ehs | ParentCategory::Qa)
    }

    pub fn all() -> [Self; 5] {
        [Self::Ehs, Self::Hr, Self::Qa, Self::Esg, Self::Other]
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepreciationMethod {
    StraightLine,
    DoubleDecliningBalance,
    SumOfYearsDigits,
}

impl DepreciationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StraightLine => "straight-line",
            Self::DoubleDecliningBalance => "double-declining-balance",
            Self::SumOfYearsDigits => "sum-of-years-digits",
        }
    }

    /// Parses a method name. Accepts the canonical name or the common
    /// short code (sl, ddb, syd).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "straight-line" | "sl" => Some(Self::StraightLine),
            "double-declining-balance" | "ddb" => Some(Self::DoubleDecliningBalance),
            "sum-of-years-digits" | "syd" => Some(Self::SumOfYearsDigits),
            _ => None,
        }
    }
}

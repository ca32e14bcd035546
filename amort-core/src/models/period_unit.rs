use serde::{Deserialize, Serialize};

/// The accounting interval one schedule row covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodUnit {
    Monthly,
    Yearly,
}

impl PeriodUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "monthly" => Some(Self::Monthly),
            "yearly" => Some(Self::Yearly),
            _ => None,
        }
    }

    /// Calendar months spanned by one period of this unit.
    pub fn months(&self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Yearly => 12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_units() {
        assert_eq!(PeriodUnit::parse("monthly"), Some(PeriodUnit::Monthly));
        assert_eq!(PeriodUnit::parse("yearly"), Some(PeriodUnit::Yearly));
    }

    #[test]
    fn parse_rejects_unknown_units() {
        assert_eq!(PeriodUnit::parse("weekly"), None);
        assert_eq!(PeriodUnit::parse(""), None);
    }

    #[test]
    fn months_per_period() {
        assert_eq!(PeriodUnit::Monthly.months(), 1);
        assert_eq!(PeriodUnit::Yearly.months(), 12);
    }
}

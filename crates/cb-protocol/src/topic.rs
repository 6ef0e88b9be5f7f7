use serde::{Deserialize, Serialize};

/// Subject of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    /// Positive COVID cases.
    Cases,
    /// Vaccinations.
    Vaccinations,
    /// Both case and vaccination triggers fired.
    Ambiguous,
    /// Neither trigger fired.
    #[default]
    Unknown,
}

impl Topic {
    /// Combine the two independent topic predicates.
    ///
    /// The truth table is exhaustive and has no priority between the two.
    pub fn from_flags(is_vaccine: bool, is_cases: bool) -> Self {
        match (is_vaccine, is_cases) {
            (true, true) => Self::Ambiguous,
            (true, false) => Self::Vaccinations,
            (false, true) => Self::Cases,
            (false, false) => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cases => "cases",
            Self::Vaccinations => "vaccinations",
            Self::Ambiguous => "ambiguous",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truth_table() {
        assert_eq!(Topic::from_flags(true, true), Topic::Ambiguous);
        assert_eq!(Topic::from_flags(true, false), Topic::Vaccinations);
        assert_eq!(Topic::from_flags(false, true), Topic::Cases);
        assert_eq!(Topic::from_flags(false, false), Topic::Unknown);
    }

    #[test]
    fn topic_serialization() {
        assert_eq!(
            serde_json::to_string(&Topic::Vaccinations).unwrap(),
            r#""vaccinations""#
        );
        let t: Topic = serde_json::from_str(r#""ambiguous""#).unwrap();
        assert_eq!(t, Topic::Ambiguous);
    }

    #[test]
    fn default_is_unknown() {
        assert_eq!(Topic::default(), Topic::Unknown);
    }
}

use std::{fmt, str::FromStr};

use crate::error::ValueError;

/// The closed set of priorities a message can carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

impl Priority {
    /// The value used for the `X-Priority` header (1 is highest).
    #[must_use]
    pub const fn header_value(self) -> u8 {
        match self {
            Self::High => 1,
            Self::Normal => 3,
            Self::Low => 5,
        }
    }

    /// Parse `value`, keeping `self` if it does not name a priority.
    ///
    /// Unknown values are logged and otherwise ignored.
    #[must_use]
    pub fn or_keep(self, value: &str) -> Self {
        value.parse().unwrap_or_else(|err: ValueError| {
            crate::internal!(level = WARN, "Ignoring {err}, keeping {}", self);
            self
        })
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
        })
    }
}

impl FromStr for Priority {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "normal" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            _ => Err(ValueError::UnknownCategory {
                kind: "priority",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<Priority>(), Ok(Priority::High));
        assert_eq!(" low ".parse::<Priority>(), Ok(Priority::Low));
        assert_eq!("normal".parse::<Priority>(), Ok(Priority::Normal));
    }

    #[test]
    fn test_priority_rejects_unknown() {
        assert_eq!(
            "wombat".parse::<Priority>(),
            Err(ValueError::UnknownCategory {
                kind: "priority",
                value: "wombat".to_string(),
            })
        );
    }

    #[test]
    fn test_or_keep_is_last_valid_wins() {
        let priority = Priority::default().or_keep("high");
        assert_eq!(priority, Priority::High);

        let priority = priority.or_keep("wombat");
        assert_eq!(priority, Priority::High);

        let priority = priority.or_keep("low").or_keep("");
        assert_eq!(priority, Priority::Low);
    }

    #[test]
    fn test_header_value() {
        assert_eq!(Priority::High.header_value(), 1);
        assert_eq!(Priority::Normal.header_value(), 3);
        assert_eq!(Priority::Low.header_value(), 5);
    }
}

//! Simple counters, with strict conversion from loosely-typed values.
//!
//! The conversions from [`toml::Value`] refuse to coerce: a counter's initial
//! value must be an integer, and a [`BeanCounter`] must be built from a counter
//! rather than a bare number.

use toml::Value;

use crate::error::ValueError;

/// A monotonically increasing count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    count: u64,
}

impl Counter {
    #[must_use]
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    #[must_use]
    pub const fn starting_at(count: u64) -> Self {
        Self { count }
    }

    pub fn increment(&mut self) -> &mut Self {
        self.count = self.count.saturating_add(1);
        self
    }

    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }
}

impl TryFrom<&Value> for Counter {
    type Error = ValueError;

    /// Accepts a non-negative integer as the initial count.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(count) => u64::try_from(*count)
                .map(Self::starting_at)
                .map_err(|_| ValueError::OutOfRange {
                    field: "count",
                    value: *count,
                }),
            other => Err(ValueError::TypeMismatch {
                expected: "integer",
                found: other.type_str(),
            }),
        }
    }
}

/// Counts beans, delegating the bookkeeping to a [`Counter`] it owns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BeanCounter {
    counter: Counter,
}

impl BeanCounter {
    #[must_use]
    pub const fn new(counter: Counter) -> Self {
        Self { counter }
    }

    pub fn add_bean(&mut self) -> &mut Self {
        self.counter.increment();
        self
    }

    #[must_use]
    pub const fn how_many(&self) -> u64 {
        self.counter.count()
    }
}

impl TryFrom<&Value> for BeanCounter {
    type Error = ValueError;

    /// Only a table shaped like a [`Counter`] (`{ count = 3 }`) is accepted.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Table(table) => {
                let counter = match table.get("count") {
                    Some(count) => Counter::try_from(count)?,
                    None => Counter::new(),
                };
                Ok(Self::new(counter))
            }
            other => Err(ValueError::TypeMismatch {
                expected: "counter",
                found: other.type_str(),
            }),
        }
    }
}

//! Comparison vocabulary
//!
//! The closed set of operators a search descriptor may apply to a column. Names follow the
//! descriptor spelling (`equals`, `notEquals`, `ilike`, ...).

use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::errors::ModelError;

/// Query condition operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Equals,    // =
    NotEquals, // <>
    Gt,        // >
    Gte,       // >=
    Lt,        // <
    Lte,       // <=
    Like,      // LIKE
    NotLike,   // NOT LIKE
    Ilike,     // ILIKE (case insensitive)
    NotIlike,  // NOT ILIKE
    In,        // IN
    NotIn,     // NOT IN
    IsNull,    // IS NULL
    IsNotNull, // IS NOT NULL
    Between,   // BETWEEN .. AND ..
}

impl FilterOperator {
    pub const ALL: [FilterOperator; 15] = [
        FilterOperator::Equals,
        FilterOperator::NotEquals,
        FilterOperator::Gt,
        FilterOperator::Gte,
        FilterOperator::Lt,
        FilterOperator::Lte,
        FilterOperator::Like,
        FilterOperator::NotLike,
        FilterOperator::Ilike,
        FilterOperator::NotIlike,
        FilterOperator::In,
        FilterOperator::NotIn,
        FilterOperator::IsNull,
        FilterOperator::IsNotNull,
        FilterOperator::Between,
    ];

    /// Descriptor spelling of the operator.
    pub fn name(&self) -> &'static str {
        match self {
            FilterOperator::Equals => "equals",
            FilterOperator::NotEquals => "notEquals",
            FilterOperator::Gt => "gt",
            FilterOperator::Gte => "gte",
            FilterOperator::Lt => "lt",
            FilterOperator::Lte => "lte",
            FilterOperator::Like => "like",
            FilterOperator::NotLike => "notLike",
            FilterOperator::Ilike => "ilike",
            FilterOperator::NotIlike => "notIlike",
            FilterOperator::In => "in",
            FilterOperator::NotIn => "notIn",
            FilterOperator::IsNull => "isNull",
            FilterOperator::IsNotNull => "isNotNull",
            FilterOperator::Between => "between",
        }
    }

    /// `IS NULL` / `IS NOT NULL` ignore their value.
    pub fn takes_value(&self) -> bool {
        !matches!(self, FilterOperator::IsNull | FilterOperator::IsNotNull)
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterOperator {
    type Err = ModelError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|operator| operator.name() == name)
            .ok_or_else(|| ModelError::UnknownOperator(name.to_string()))
    }
}

/// Single predicate of a WHERE clause, on a storage column.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub column: String,
    pub operator: FilterOperator,
    pub value: Value,
}

impl Condition {
    /// Build a condition, checking the value has the shape the operator needs. Operators that
    /// take no value keep null.
    pub fn new(
        column: impl Into<String>,
        operator: FilterOperator,
        value: Value,
    ) -> Result<Self, ModelError> {
        let column = column.into();

        match operator {
            FilterOperator::In | FilterOperator::NotIn if !value.is_array() => {
                return Err(ModelError::InvalidDescriptor(format!(
                    "\"{}\" on \"{}\" expects an array of values",
                    operator, column
                )));
            }
            FilterOperator::Between
                if value.as_array().map(|bounds| bounds.len()) != Some(2) =>
            {
                return Err(ModelError::InvalidDescriptor(format!(
                    "\"between\" on \"{}\" expects [low, high]",
                    column
                )));
            }
            _ => {}
        }

        let value = if operator.takes_value() { value } else { Value::Null };

        Ok(Self {
            column,
            operator,
            value,
        })
    }
}

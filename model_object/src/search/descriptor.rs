use serde_json::{Map, Value};

use crate::errors::ModelError;
use crate::query_builder::{FilterOperator, SortOrder};

/// One `field operator value` predicate, field in external convention.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub operator: FilterOperator,
    pub value: Value,
}

/// Declarative search: filters (ANDed), order terms and an optional limit, all kept in the
/// order they were added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Search {
    pub(crate) filters: Vec<Filter>,
    pub(crate) order: Vec<(String, SortOrder)>,
    pub(crate) limit: Option<u64>,
}

impl Search {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(
        mut self,
        field: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<Value>,
    ) -> Self {
        self.filters.push(Filter {
            field: field.into(),
            operator,
            value: value.into(),
        });
        self
    }

    pub fn equals(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(field, FilterOperator::Equals, value)
    }

    pub fn like(self, field: impl Into<String>, pattern: &str) -> Self {
        self.filter(field, FilterOperator::Like, pattern)
    }

    pub fn ilike(self, field: impl Into<String>, pattern: &str) -> Self {
        self.filter(field, FilterOperator::Ilike, pattern)
    }

    pub fn order(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.order.push((field.into(), order));
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn order_terms(&self) -> &[(String, SortOrder)] {
        &self.order
    }

    pub fn limit_value(&self) -> Option<u64> {
        self.limit
    }

    /// Parse the JSON descriptor form:
    ///
    /// ```json
    /// { "where": { "name": { "ilike": "j%" }, "isAdmin": { "equals": true } },
    ///   "order": { "name": "desc" },
    ///   "limit": 10 }
    /// ```
    pub fn from_json(descriptor: &Value) -> Result<Self, ModelError> {
        let object = match descriptor {
            Value::Null => return Ok(Self::default()),
            Value::Object(object) => object,
            other => {
                return Err(ModelError::InvalidDescriptor(format!(
                    "expected an object, got {}",
                    other
                )))
            }
        };

        let mut search = Self::default();

        for (key, value) in object {
            match key.as_str() {
                "where" => search.filters = parse_where(value)?,
                "order" => search.order = parse_order(value)?,
                "limit" => search.limit = Some(parse_limit(value)?),
                other => {
                    return Err(ModelError::InvalidDescriptor(format!(
                        "unknown key \"{}\"",
                        other
                    )))
                }
            }
        }

        Ok(search)
    }
}

fn expect_object<'a>(value: &'a Value, what: &str) -> Result<&'a Map<String, Value>, ModelError> {
    value
        .as_object()
        .ok_or_else(|| ModelError::InvalidDescriptor(format!("\"{}\" must be an object", what)))
}

fn parse_where(value: &Value) -> Result<Vec<Filter>, ModelError> {
    let mut filters = Vec::new();

    for (field, operators) in expect_object(value, "where")? {
        for (operator, value) in expect_object(operators, field)? {
            filters.push(Filter {
                field: field.clone(),
                operator: operator.parse()?,
                value: value.clone(),
            });
        }
    }

    Ok(filters)
}

fn parse_order(value: &Value) -> Result<Vec<(String, SortOrder)>, ModelError> {
    expect_object(value, "order")?
        .iter()
        .map(|(field, direction)| {
            let token = direction.as_str().ok_or_else(|| {
                ModelError::InvalidDescriptor(format!(
                    "order direction for \"{}\" must be a string",
                    field
                ))
            })?;
            Ok((field.clone(), token.parse()?))
        })
        .collect()
}

fn parse_limit(value: &Value) -> Result<u64, ModelError> {
    match value.as_u64() {
        Some(limit) if limit > 0 => Ok(limit),
        _ => Err(ModelError::InvalidDescriptor(format!(
            "limit must be a positive integer, got {}",
            value
        ))),
    }
}

/// Identifier or descriptor; what every read, update, count and destroy accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Id(Value),
    Search(Search),
}

impl Lookup {
    /// Matches every row.
    pub fn all() -> Self {
        Lookup::Search(Search::default())
    }

    /// Numbers and strings are identifiers, objects are descriptors, null matches everything.
    pub fn from_json(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::Null => Ok(Self::all()),
            Value::Number(_) | Value::String(_) => Ok(Lookup::Id(value)),
            Value::Object(_) => Search::from_json(&value).map(Lookup::Search),
            other => Err(ModelError::InvalidIdentifier(other.to_string())),
        }
    }

    /// Expand the identifier shorthand into `where id equals <id>`.
    pub fn into_search(self) -> Result<Search, ModelError> {
        match self {
            Lookup::Search(search) => Ok(search),
            Lookup::Id(id) => Ok(Search::new().equals("id", normalize_id(id)?)),
        }
    }
}

/// Numeric strings become numbers; other non-empty strings stay as text keys.
fn normalize_id(id: Value) -> Result<Value, ModelError> {
    match id {
        Value::Number(_) => Ok(id),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(ModelError::InvalidIdentifier("empty string".to_string()));
            }
            if let Ok(number) = trimmed.parse::<i64>() {
                return Ok(Value::from(number));
            }
            match trimmed.parse::<f64>() {
                Ok(number) if number.is_finite() => Ok(numeric_id(number)),
                _ => Ok(Value::String(text)),
            }
        }
        other => Err(ModelError::InvalidIdentifier(other.to_string())),
    }
}

/// Whole values such as `"3.0"` are integers.
fn numeric_id(number: f64) -> Value {
    if number.fract() == 0.0 && number.abs() < 9_007_199_254_740_992.0 {
        Value::from(number as i64)
    } else {
        Value::from(number)
    }
}

impl Default for Lookup {
    fn default() -> Self {
        Self::all()
    }
}

impl From<Search> for Lookup {
    fn from(search: Search) -> Self {
        Lookup::Search(search)
    }
}

impl From<i64> for Lookup {
    fn from(id: i64) -> Self {
        Lookup::Id(Value::from(id))
    }
}

impl From<i32> for Lookup {
    fn from(id: i32) -> Self {
        Lookup::Id(Value::from(id))
    }
}

impl From<u32> for Lookup {
    fn from(id: u32) -> Self {
        Lookup::Id(Value::from(id))
    }
}

impl From<&str> for Lookup {
    fn from(id: &str) -> Self {
        Lookup::Id(Value::from(id))
    }
}

impl From<String> for Lookup {
    fn from(id: String) -> Self {
        Lookup::Id(Value::from(id))
    }
}

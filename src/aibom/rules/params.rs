use crate::shared::error::ParamError;
use serde_json::{Map, Value};

/// Typed view over the untyped parameter map of a rule definition
///
/// Absent and `null` values are treated the same. Present values of the
/// wrong type are rejected rather than silently defaulted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleParams {
    values: Map<String, Value>,
}

impl RuleParams {
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name).filter(|v| !v.is_null())
    }

    /// A non-empty string parameter that must be present
    pub fn required_str(&self, name: &str) -> Result<String, ParamError> {
        match self.get(name) {
            None => Err(missing(name)),
            Some(Value::String(s)) if s.is_empty() => Err(missing(name)),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(wrong_type(name, "a string")),
        }
    }

    /// A string parameter that defaults to empty when absent
    pub fn optional_str(&self, name: &str) -> Result<String, ParamError> {
        match self.get(name) {
            None => Ok(String::new()),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(wrong_type(name, "a string")),
        }
    }

    /// A list of strings that defaults to empty when absent
    pub fn string_list(&self, name: &str) -> Result<Vec<String>, ParamError> {
        match self.get(name) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    _ => Err(wrong_type(name, "a list of strings")),
                })
                .collect(),
            Some(_) => Err(wrong_type(name, "a list of strings")),
        }
    }

    /// A non-negative integer that defaults to zero when absent
    ///
    /// Whole floating-point numbers such as `5.0` are accepted, since JSON
    /// producers do not always distinguish them from integers.
    pub fn count(&self, name: &str) -> Result<usize, ParamError> {
        let number = match self.get(name) {
            None => return Ok(0),
            Some(Value::Number(n)) => n,
            Some(_) => return Err(wrong_type(name, "a non-negative integer")),
        };

        if let Some(value) = number.as_u64() {
            return usize::try_from(value).map_err(|_| ParamError::OutOfRange {
                name: name.to_string(),
                details: format!("{} does not fit in a count", value),
            });
        }

        if let Some(value) = number.as_i64() {
            return Err(ParamError::OutOfRange {
                name: name.to_string(),
                details: format!("{} is negative", value),
            });
        }

        match number.as_f64() {
            Some(value) if value < 0.0 => Err(ParamError::OutOfRange {
                name: name.to_string(),
                details: format!("{} is negative", value),
            }),
            Some(value) if value.fract() == 0.0 && value < usize::MAX as f64 => Ok(value as usize),
            Some(value) if value.fract() == 0.0 => Err(ParamError::OutOfRange {
                name: name.to_string(),
                details: format!("{} does not fit in a count", value),
            }),
            _ => Err(wrong_type(name, "a non-negative integer")),
        }
    }
}

impl From<Map<String, Value>> for RuleParams {
    fn from(values: Map<String, Value>) -> Self {
        Self::new(values)
    }
}

fn missing(name: &str) -> ParamError {
    ParamError::Missing {
        name: name.to_string(),
    }
}

fn wrong_type(name: &str, expected: &str) -> ParamError {
    ParamError::WrongType {
        name: name.to_string(),
        expected: expected.to_string(),
    }
}

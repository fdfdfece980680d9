/// An element of an R vector.
///
/// Every variant carries an `na` flag. R has no separate missing type: an
/// `NA` is a value of some type that is marked as not available.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int { value: i32, na: bool },
    Float { value: f64, na: bool },
    Char { value: String, na: bool },
    Bool { value: bool, na: bool },
}

impl Value {
    pub fn int(value: i32) -> Self {
        Value::Int { value, na: false }
    }

    pub fn float(value: f64) -> Self {
        Value::Float { value, na: false }
    }

    pub fn character<S: Into<String>>(value: S) -> Self {
        Value::Char {
            value: value.into(),
            na: false,
        }
    }

    pub fn bool(value: bool) -> Self {
        Value::Bool { value, na: false }
    }

    /// The value a bare `NA` literal stands for.
    pub fn na() -> Self {
        Value::Bool {
            value: false,
            na: true,
        }
    }

    pub fn is_na(&self) -> bool {
        match self {
            Value::Int { na, .. }
            | Value::Float { na, .. }
            | Value::Char { na, .. }
            | Value::Bool { na, .. } => *na,
        }
    }

    /// Name of the variant as it appears in serialized trees.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int { .. } => "IntValue",
            Value::Float { .. } => "FloatValue",
            Value::Char { .. } => "CharValue",
            Value::Bool { .. } => "BoolValue",
        }
    }
}

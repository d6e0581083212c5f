use crate::object::Object;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Input tree handed to the normalizer chain.
///
/// Scalars and collections are already primitive; [`Value::Object`] still needs a normalizer.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Object(Arc<dyn Object>),
}

impl Value {
    /// Wraps a shared object.
    pub fn object<T: Object>(object: Arc<T>) -> Self {
        Self::Object(object)
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&Arc<dyn Object>> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Short label used in diagnostics: the registered type name for objects, the kind otherwise.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::UInt(_) => "uint",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Object(object) => object.type_info().name,
        }
    }
}

/// Conversion of accessor results into [`Value`].
pub trait IntoValue {
    fn into_value(self) -> Value;
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl IntoValue for () {
    fn into_value(self) -> Value {
        Value::Null
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

macro_rules! signed_into_value {
    ($($ty:ty),*) => {
        $(impl IntoValue for $ty {
            fn into_value(self) -> Value {
                Value::Int(i64::from(self))
            }
        })*
    };
}

macro_rules! unsigned_into_value {
    ($($ty:ty),*) => {
        $(impl IntoValue for $ty {
            fn into_value(self) -> Value {
                Value::UInt(u64::from(self))
            }
        })*
    };
}

signed_into_value!(i8, i16, i32, i64);
unsigned_into_value!(u8, u16, u32, u64);

impl IntoValue for usize {
    fn into_value(self) -> Value {
        u64::try_from(self).map_or_else(|_| Value::String(self.to_string()), Value::UInt)
    }
}

impl IntoValue for f32 {
    fn into_value(self) -> Value {
        Value::Float(f64::from(self))
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::Float(self)
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::String(self.to_owned())
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        self.map_or(Value::Null, IntoValue::into_value)
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(IntoValue::into_value).collect())
    }
}

impl<T: IntoValue + Clone> IntoValue for &[T] {
    fn into_value(self) -> Value {
        Value::List(self.iter().cloned().map(IntoValue::into_value).collect())
    }
}

impl<T: IntoValue> IntoValue for BTreeMap<String, T> {
    fn into_value(self) -> Value {
        Value::Map(self.into_iter().map(|(k, v)| (k, v.into_value())).collect())
    }
}

impl<T: Object> IntoValue for Arc<T> {
    fn into_value(self) -> Value {
        Value::Object(self)
    }
}

impl IntoValue for Arc<dyn Object> {
    fn into_value(self) -> Value {
        Value::Object(self)
    }
}

impl<T: IntoValue + Clone> IntoValue for &T {
    fn into_value(self) -> Value {
        self.clone().into_value()
    }
}

/// One exposed accessor of an [`Object`].
#[derive(Debug, Clone)]
pub struct Field {
    name: &'static str,
    value: Value,
    groups: &'static [&'static str],
}

impl Field {
    #[must_use]
    pub const fn new(name: &'static str, value: Value) -> Self {
        Self { name, value, groups: &[] }
    }

    /// Serialization groups this field belongs to. Empty means "no group".
    #[must_use]
    pub const fn with_groups(mut self, groups: &'static [&'static str]) -> Self {
        self.groups = groups;
        self
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }

    #[must_use]
    pub const fn groups(&self) -> &'static [&'static str] {
        self.groups
    }

    /// Whether the field passes a group filter. Fields without groups never match a filter.
    #[must_use]
    pub fn in_any_group<S: AsRef<str>>(&self, filter: &[S]) -> bool {
        self.groups.iter().any(|group| filter.iter().any(|wanted| wanted.as_ref() == *group))
    }
}

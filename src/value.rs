use gc_arena::{Collect, Gc};

/// An opaque handle to a host managed object. The container never looks
/// inside one of these, it only stores and forwards them; `Nil` is the
/// absent-value sentinel and is distinct from every real value.
#[derive(Copy, Clone, Collect)]
#[collect(no_drop)]
pub enum Value<'gc> {
    Nil,
    Integer(i64),
    Number(f64),
    Bool(bool),
    // arena allocated, so a tracing mistake is observable
    String(Gc<'gc, String>),
}

impl<'gc> Value<'gc> {
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn type_name(&self) -> ValueType {
        match self {
            Value::Nil => ValueType::Nil,
            Value::Integer(_) => ValueType::Integer,
            Value::Number(_) => ValueType::Number,
            Value::Bool(_) => ValueType::Bool,
            Value::String(_) => ValueType::String,
        }
    }
}

/** Readable rendering, what the host shows for the value inside an
inspect string */
impl std::fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Number(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            // by content, two separate allocations of "a" are equal
            (Value::String(a), Value::String(b)) => **a == **b,
            _ => false,
        }
    }
}

impl std::fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

pub enum ValueType {
    Nil,
    Integer,
    Number,
    Bool,
    String,
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueType::Nil => write!(f, "nil"),
            ValueType::Integer => write!(f, "integer"),
            ValueType::Number => write!(f, "number"),
            ValueType::Bool => write!(f, "bool"),
            ValueType::String => write!(f, "string"),
        }
    }
}

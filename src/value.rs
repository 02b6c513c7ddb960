use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A value produced by a successful parse
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bytes(Vec<u8>),
    /// A single matched byte
    Char(u8),
    SignedInt(i64),
    UnsignedInt(u64),
    Sequence(Vec<Value>),
    /// Result of zero-width matches such as `epsilon_p` or `end_p`
    Unit,
    /// An `optional` that matched nothing; distinct from `Unit`
    Absent,
    /// Arbitrary domain data produced by an action
    User(UserValue),
}

impl Value {
    /// Wrap domain data so it can flow through the parse tree
    pub fn user<T: Any + Send + Sync>(value: T) -> Self {
        Value::User(UserValue::new(value))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, Value::Unit)
    }

    /// Integer view over chars, signed and unsigned integers
    pub fn as_integer(&self) -> Option<i128> {
        match self {
            Value::Char(c) => Some(*c as i128),
            Value::SignedInt(v) => Some(*v as i128),
            Value::UnsignedInt(v) => Some(*v as i128),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.as_integer().and_then(|v| u64::try_from(v).ok())
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_integer().and_then(|v| i64::try_from(v).ok())
    }

    pub fn as_char(&self) -> Option<u8> {
        match self {
            Value::Char(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn into_sequence(self) -> Option<Vec<Value>> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Value::User(user) => user.downcast_ref(),
            _ => None,
        }
    }
}

impl From<u8> for Value {
    fn from(c: u8) -> Self {
        Value::Char(c)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bytes(bytes) => {
                write!(f, "<")?;
                for (i, byte) in bytes.iter().enumerate() {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{:02x}", byte)?;
                }
                write!(f, ">")
            }
            Value::Char(c) => write!(f, "u0x{:02x}", c),
            Value::SignedInt(v) if *v < 0 => write!(f, "s-0x{:x}", v.unsigned_abs()),
            Value::SignedInt(v) => write!(f, "s0x{:x}", v),
            Value::UnsignedInt(v) => write!(f, "u0x{:x}", v),
            Value::Sequence(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
            Value::Unit => write!(f, "unit"),
            Value::Absent => write!(f, "null"),
            Value::User(_) => write!(f, "<user>"),
        }
    }
}

/// Shared handle to user data; equality is identity
#[derive(Clone)]
pub struct UserValue(Arc<dyn Any + Send + Sync>);

impl UserValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        UserValue(Arc::new(value))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }
}

impl PartialEq for UserValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for UserValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UserValue(..)")
    }
}

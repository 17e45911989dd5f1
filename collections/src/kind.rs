//! Element kind tags for typed dumps.

use std::fmt;

use derive_more::{Display, From};

/// Kind tag attached to an element by [`Typed`] output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Kind {
    /// Text.
    String,

    /// 32-bit integer.
    Integer,

    /// 64-bit float.
    Double,

    /// 32-bit float.
    Float,

    /// 64-bit integer.
    Long,

    /// Boolean.
    Boolean,

    /// Single character.
    Character,

    /// Anything else that is present.
    Object,

    /// Absent value.
    Null,
}

/// Types that know which [`Kind`] they are.
pub trait Kinded {
    /// Returns the kind tag of this value.
    fn kind(&self) -> Kind;
}

macro_rules! impl_kinded {
    ($($ty:ty => $kind:ident),+ $(,)?) => {
        $(
            impl Kinded for $ty {
                fn kind(&self) -> Kind {
                    Kind::$kind
                }
            }
        )+
    };
}

impl_kinded! {
    String => String,
    str => String,
    i32 => Integer,
    i64 => Long,
    f64 => Double,
    f32 => Float,
    bool => Boolean,
    char => Character,
}

impl<T: Kinded + ?Sized> Kinded for &T {
    fn kind(&self) -> Kind {
        T::kind(self)
    }
}

/// A closed set of primitive-like values, for lists that mix kinds.
///
/// # Examples
/// ```
/// use seq_collections::{DynamicArray, Value};
///
/// let mut list = DynamicArray::new();
/// list.append(Value::from("hi"));
/// list.append(Value::from(4));
/// list.append(Value::Null);
///
/// assert_eq!(
///     list.typed().to_string(),
///     "\nValue: hi Type: String\nValue: 4 Type: Integer\nValue: null\n",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Display, From)]
pub enum Value {
    /// Text.
    String(String),

    /// 32-bit integer.
    Integer(i32),

    /// 64-bit integer.
    Long(i64),

    /// 64-bit float.
    Double(f64),

    /// 32-bit float.
    Float(f32),

    /// Boolean.
    Boolean(bool),

    /// Single character.
    Character(char),

    /// Any other value, stored as its rendered text.
    #[from(skip)]
    Object(String),

    /// Absent value.
    #[display("null")]
    Null,
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl Value {
    /// Wraps any displayable value as an [`Object`](Self::Object).
    pub fn object(value: impl fmt::Display) -> Self {
        Self::Object(value.to_string())
    }
}

impl Kinded for Value {
    fn kind(&self) -> Kind {
        match self {
            Value::String(_) => Kind::String,
            Value::Integer(_) => Kind::Integer,
            Value::Long(_) => Kind::Long,
            Value::Double(_) => Kind::Double,
            Value::Float(_) => Kind::Float,
            Value::Boolean(_) => Kind::Boolean,
            Value::Character(_) => Kind::Character,
            Value::Object(_) => Kind::Object,
            Value::Null => Kind::Null,
        }
    }
}

/// Display adapter listing each element with its [`Kind`], one per line.
///
/// Output starts with an empty line. Present elements render as `Value: {value} Type: {kind}`
/// and absent ones as `Value: null`.
#[derive(Debug, Clone)]
pub struct Typed<I> {
    items: I,
}

impl<I> Typed<I> {
    pub(crate) fn new(items: I) -> Self {
        Self { items }
    }
}

impl<'a, I, T> fmt::Display for Typed<I>
where
    I: Iterator<Item = &'a T> + Clone,
    T: Kinded + fmt::Display + 'a,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;

        for item in self.items.clone() {
            match item.kind() {
                Kind::Null => writeln!(f, "Value: null")?,
                kind => writeln!(f, "Value: {item} Type: {kind}")?,
            }
        }

        Ok(())
    }
}

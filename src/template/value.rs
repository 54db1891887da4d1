//! Placeholder values, bound arguments and callbacks

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A substitution value
///
/// Rendered through its `Display` form.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Value {
    /// Integer view; floats are truncated, other kinds yield `None`
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Float(f) => Some(*f as i64),
            _ => None,
        }
    }

    /// Float view of numeric values
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// An argument bound to a computed placeholder
///
/// `Shared` and `Lazy` bindings are read when the pattern is rendered, so a
/// computed placeholder follows changes the caller makes to the underlying
/// state between renders.
#[derive(Clone)]
pub enum Binding {
    /// Value captured at registration
    Fixed(Value),
    /// Caller-owned cell, read on every render
    Shared(Rc<RefCell<Value>>),
    /// Getter closure, called on every render
    Lazy(Rc<dyn Fn() -> Value>),
}

impl Binding {
    /// Bind a fixed value
    pub fn fixed(value: impl Into<Value>) -> Self {
        Binding::Fixed(value.into())
    }

    /// Bind a shared cell
    pub fn shared(cell: &Rc<RefCell<Value>>) -> Self {
        Binding::Shared(Rc::clone(cell))
    }

    /// Bind a getter closure
    pub fn lazy<F, V>(getter: F) -> Self
    where
        F: Fn() -> V + 'static,
        V: Into<Value>,
    {
        Binding::Lazy(Rc::new(move || -> Value { getter().into() }))
    }

    /// Current value of the binding
    pub fn resolve(&self) -> Value {
        match self {
            Binding::Fixed(value) => value.clone(),
            Binding::Shared(cell) => cell.borrow().clone(),
            Binding::Lazy(getter) => getter(),
        }
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            Binding::Shared(cell) => f.debug_tuple("Shared").field(&*cell.borrow()).finish(),
            Binding::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

impl From<Value> for Binding {
    fn from(value: Value) -> Self {
        Binding::Fixed(value)
    }
}

/// A computation with a declared number of parameters
///
/// The callback receives the current values of its bindings, in the order
/// they were supplied at registration.
#[derive(Clone)]
pub struct Callback {
    arity: usize,
    func: Rc<dyn Fn(&[Value]) -> Value>,
}

impl Callback {
    /// Create a callback taking `arity` arguments
    pub fn new<F, V>(arity: usize, func: F) -> Self
    where
        F: Fn(&[Value]) -> V + 'static,
        V: Into<Value>,
    {
        Self {
            arity,
            func: Rc::new(move |args: &[Value]| -> Value { func(args).into() }),
        }
    }

    /// Create a callback without parameters
    pub fn nullary<F, V>(func: F) -> Self
    where
        F: Fn() -> V + 'static,
        V: Into<Value>,
    {
        Self::new(0, move |_| func())
    }

    /// Create a single-parameter callback
    pub fn unary<F, V>(func: F) -> Self
    where
        F: Fn(&Value) -> V + 'static,
        V: Into<Value>,
    {
        Self::new(1, move |args| func(&args[0]))
    }

    /// Declared number of parameters
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Invoke with already resolved arguments
    pub fn call(&self, args: &[Value]) -> Value {
        (self.func)(args)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// What a placeholder is registered with
#[derive(Debug, Clone)]
pub enum Substitution {
    Literal(Value),
    Computed(Callback),
}

impl From<Callback> for Substitution {
    fn from(callback: Callback) -> Self {
        Substitution::Computed(callback)
    }
}

impl From<Value> for Substitution {
    fn from(value: Value) -> Self {
        Substitution::Literal(value)
    }
}

/// `From` impls for every primitive that converts into a `Value`
macro_rules! from_primitives {
    ($target:ty, $variant:path; $($ty:ty),*) => {
        $(
            impl From<$ty> for $target {
                fn from(value: $ty) -> Self {
                    $variant(Value::from(value))
                }
            }
        )*
    };
}

from_primitives!(Binding, Binding::Fixed; &str, String, i64, i32, u32, f64, bool);
from_primitives!(Substitution, Substitution::Literal; &str, String, i64, i32, u32, f64, bool);

/// A registered placeholder
#[derive(Debug, Clone)]
pub enum Placeholder {
    /// Static value
    Literal(Value),
    /// Callback plus its bound arguments.
    ///
    /// `bindings` is `None` when registration failed the arity check; such an
    /// entry is known to the registry but cannot be rendered.
    Computed {
        callback: Callback,
        bindings: Option<Vec<Binding>>,
    },
}

impl Placeholder {
    pub fn is_computed(&self) -> bool {
        matches!(self, Placeholder::Computed { .. })
    }

    /// The literal value, if this is a literal placeholder
    pub fn literal(&self) -> Option<&Value> {
        match self {
            Placeholder::Literal(value) => Some(value),
            Placeholder::Computed { .. } => None,
        }
    }

    /// The callback, if this is a computed placeholder
    pub fn callback(&self) -> Option<&Callback> {
        match self {
            Placeholder::Computed { callback, .. } => Some(callback),
            Placeholder::Literal(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display() {
        assert_eq!(Value::from("sostituto").to_string(), "sostituto");
        assert_eq!(Value::from(5).to_string(), "5");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from(true).to_string(), "true");
    }

    #[test]
    fn test_value_numeric_views() {
        assert_eq!(Value::from(7).as_i64(), Some(7));
        assert_eq!(Value::from(7).as_f64(), Some(7.0));
        assert_eq!(Value::from("7").as_i64(), None);
        assert_eq!(Value::from("x").as_str(), Some("x"));
    }

    #[test]
    fn test_shared_binding_reads_current_value() {
        let cell = Rc::new(RefCell::new(Value::from(5)));
        let binding = Binding::shared(&cell);
        assert_eq!(binding.resolve(), Value::from(5));
        *cell.borrow_mut() = Value::from(7);
        assert_eq!(binding.resolve(), Value::from(7));
    }

    #[test]
    fn test_lazy_binding_calls_getter() {
        let counter = Rc::new(std::cell::Cell::new(1));
        let c = Rc::clone(&counter);
        let binding = Binding::lazy(move || c.get());
        counter.set(3);
        assert_eq!(binding.resolve(), Value::from(3));
    }

    #[test]
    fn test_callback_arity_and_call() {
        let square = Callback::unary(|v| v.as_i64().unwrap_or(0).pow(2));
        assert_eq!(square.arity(), 1);
        assert_eq!(square.call(&[Value::from(4)]), Value::from(16));

        let join = Callback::new(2, |args: &[Value]| format!("{}-{}", args[0], args[1]));
        assert_eq!(join.arity(), 2);
        assert_eq!(join.call(&["a".into(), "b".into()]), Value::from("a-b"));
    }

    #[test]
    fn test_substitution_conversions() {
        assert!(matches!(Substitution::from("x"), Substitution::Literal(_)));
        assert!(matches!(
            Substitution::from(Callback::nullary(|| 5)),
            Substitution::Computed(_)
        ));
    }
}

//! Placeholder templates
//!
//! A [`TemplateRenderer`] holds a pattern and an ordered set of named
//! placeholders. Each placeholder is either a literal [`Value`] or a
//! [`Callback`] with bound arguments, evaluated at render time.
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use placeholder_system::{Binding, Callback, TemplateRenderer, Value};
//!
//! let mut tpl = TemplateRenderer::with_pattern("{user} has {points} points");
//! tpl.add_literal("user", "ada");
//!
//! let score = Rc::new(RefCell::new(Value::from(20)));
//! let double = Callback::unary(|v| v.as_i64().unwrap_or(0) * 2);
//! tpl.add_computed("points", double, vec![Binding::shared(&score)]).unwrap();
//!
//! assert_eq!(tpl.render().unwrap(), "ada has 40 points");
//! *score.borrow_mut() = Value::from(21);
//! assert_eq!(tpl.render().unwrap(), "ada has 42 points");
//! ```

mod registry;
mod renderer;
mod value;

pub use registry::PlaceholderRegistry;
pub use renderer::TemplateRenderer;
pub use value::{Binding, Callback, Placeholder, Substitution, Value};

//! Human-readable rendering shared by every record's `Display` impl.
//!
//! Records render as `Name : (field = value, ...)`. Absent values render as `null`,
//! lists as `[a, b]` and maps as `{key: value}`.

use std::collections::BTreeMap;
use std::fmt::{Formatter, Result};

/// Renders a field value inside a record's `Display` output.
pub trait Render {
    /// Writes the rendering of `self` into `f`.
    ///
    /// # Errors
    /// Propagates formatter errors.
    fn render(&self, f: &mut Formatter<'_>) -> Result;
}

impl Render for str {
    fn render(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self)
    }
}

impl Render for String {
    fn render(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self)
    }
}

macro_rules! render_with_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                fn render(&self, f: &mut Formatter<'_>) -> Result {
                    std::fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

render_with_display!(bool, i32, i64);

impl<T: Render> Render for Option<T> {
    fn render(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Some(value) => value.render(f),
            None => f.write_str("null"),
        }
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("[")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }
}

impl<T: Render> Render for BTreeMap<String, T> {
    fn render(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("{")?;
        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(key)?;
            f.write_str(": ")?;
            value.render(f)?;
        }
        f.write_str("}")
    }
}

/// Adapter that exposes any [`Render`] value through `Display`.
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a, T: ?Sized>(pub &'a T);

impl<T: Render + ?Sized> std::fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        self.0.render(f)
    }
}

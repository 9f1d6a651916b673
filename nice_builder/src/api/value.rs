use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;
use std::str::FromStr;

use thiserror::Error;

/// A caller-owned location handed out by the allocating helpers (ex: [`bool_flag`](crate::bool_flag)).
pub type Shared<T> = Rc<RefCell<T>>;

/// Behaviour to read and write an externally-owned scalar, without knowing its concrete type.
///
/// The registration layer only ever holds a handle to the scalar; the storage belongs to the Cli author.
pub trait Value {
    /// Display the current value.
    fn get(&self) -> String;

    /// Parse `token` and replace the current value.
    fn set(&mut self, token: &str) -> Result<(), InvalidValue>;

    /// The type tag capability, if this value has one.
    fn typer(&self) -> Option<&dyn Typer> {
        None
    }
}

/// Behaviour to report a human readable type tag (ex: `bool`) for a [`Value`].
pub trait Typer {
    /// The type tag.
    fn type_name(&self) -> &str;
}

/// Scalar types with a canonical type tag and zero value.
pub trait Scalable: FromStr + Display + Default + 'static {
    /// The type tag reported by [`Typer::type_name`].
    const TYPE_NAME: &'static str;
}

macro_rules! scalable {
    ($($t:ty => $name:literal),* $(,)?) => {
        $(
            impl Scalable for $t {
                const TYPE_NAME: &'static str = $name;
            }
        )*
    };
}

scalable! {
    bool => "bool",
    String => "string",
    char => "char",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    isize => "isize",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    usize => "usize",
    f32 => "f32",
    f64 => "f64",
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot convert '{token}' to {type_name}.")]
/// The token could not be converted into the value's type.
pub struct InvalidValue {
    /// The offending input.
    pub token: String,
    /// The target type.
    pub type_name: &'static str,
}

enum Location<'a, T> {
    Borrowed(&'a mut T),
    Shared(Shared<T>),
}

/// A [`Value`] over a single scalar of type `T`.
///
/// ### Example
/// ```
/// # use nice_builder as nice;
/// use nice::{prelude::*, Scalar};
///
/// let mut port: u16 = 0;
/// let mut value = Scalar::new(&mut port);
/// value.set("8080").unwrap();
/// assert_eq!(value.get(), "8080");
/// ```
pub struct Scalar<'a, T> {
    location: Location<'a, T>,
    type_name: Option<&'static str>,
}

impl<'a, T> Scalar<'a, T> {
    /// Create a scalar value bound to `variable`.
    pub fn new(variable: &'a mut T) -> Self {
        Self {
            location: Location::Borrowed(variable),
            type_name: None,
        }
    }

    /// Create a scalar value bound to a shared location.
    pub fn shared(variable: Shared<T>) -> Self {
        Self {
            location: Location::Shared(variable),
            type_name: None,
        }
    }

    /// Tag this value with a type name, reported via [`Typer`].
    pub fn typed(mut self, type_name: &'static str) -> Self {
        self.type_name.replace(type_name);
        self
    }
}

impl<'a, T: FromStr + Display> Value for Scalar<'a, T> {
    fn get(&self) -> String {
        match &self.location {
            Location::Borrowed(variable) => variable.to_string(),
            Location::Shared(variable) => variable.borrow().to_string(),
        }
    }

    fn set(&mut self, token: &str) -> Result<(), InvalidValue> {
        let value = T::from_str(token).map_err(|_| InvalidValue {
            token: token.to_string(),
            type_name: self
                .type_name
                .unwrap_or_else(|| std::any::type_name::<T>()),
        })?;

        match &mut self.location {
            Location::Borrowed(variable) => **variable = value,
            Location::Shared(variable) => *variable.borrow_mut() = value,
        };
        Ok(())
    }

    fn typer(&self) -> Option<&dyn Typer> {
        match self.type_name {
            Some(_) => Some(self),
            None => None,
        }
    }
}

impl<'a, T> Typer for Scalar<'a, T> {
    fn type_name(&self) -> &str {
        self.type_name.unwrap_or_default()
    }
}

//! Traits which, typically, may be imported without concern: `use nice::prelude::*`.

pub use crate::api::{ArgOptionApplier, FlagOptionApplier, Register, Typer, Usager, Value};

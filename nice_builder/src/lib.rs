//! Builder module for `nice`.
//! See [documentation root](https://docs.rs/nice/latest/nice/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod model;
pub mod prelude;
mod registry;

pub use api::*;
pub use model::*;
pub use registry::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

mod applier;
mod descriptor;
mod options;
mod register;
mod value;

pub use applier::*;
pub use descriptor::*;
pub use options::*;
pub use register::*;
pub use value::*;

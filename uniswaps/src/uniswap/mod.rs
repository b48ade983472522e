pub mod addresses;
pub mod bindings;

pub use addresses::*;
pub use bindings::*;

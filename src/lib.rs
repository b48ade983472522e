pub mod constants;
pub mod contracts;
pub mod libs;
pub mod ops;

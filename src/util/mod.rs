//! A set of utility structs and functions used when operating the core.

pub mod id;
#[macro_use]
pub mod number;

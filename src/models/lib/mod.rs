#[macro_use]
pub mod org_model;

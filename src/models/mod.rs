#[macro_use]
mod lib;

// kind of trying to load based on dependency order here
pub mod employee;
pub mod department;
pub mod accounting;
pub mod company;

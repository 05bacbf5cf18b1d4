//! The main error enum for the project lives here, and documents the various
//! conditions that can arise while interacting with the system.

use crate::models::{
    department::DepartmentID,
    employee::EmployeeID,
};
use thiserror::Error;

/// This is our error enum. It contains an entry for any part of the system in
/// which an expectation is not met or a problem occurs.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// A company can only have one accounting department
    #[error("this company already has an accounting department")]
    AccountingExists,
    /// When we try to build a model and it fails (missing fields)
    #[error("error building model: {0}")]
    BuilderFailed(String),
    /// The department we're looking for doesn't exist in this company
    #[error("department {0} was not found")]
    DepartmentNotFound(DepartmentID),
    /// A department can't take an employee that belongs to another one
    /// directly, they have to be transferred through the company
    #[error("employee {0} belongs to department {1}")]
    EmployeeInOtherDepartment(EmployeeID, DepartmentID),
    /// The employee we're looking for isn't on any roster in this company
    #[error("employee {0} was not found")]
    EmployeeNotFound(EmployeeID),
    /// The payment gateway could not be reached
    #[error("payment gateway unavailable: {0}")]
    GatewayUnavailable(String),
    /// A pre-hired candidate cannot be promoted without routing data
    #[error("you must enter payment details to proceed")]
    MissingPaymentDetails,
    /// Payroll needs an accounting department to run
    #[error("this company has no accounting department")]
    NoAccounting,
    /// The payment gateway refused the payment
    #[error("payment rejected: {0}")]
    PaymentRejected(String),
}

pub type Result<T> = std::result::Result<T, Error>;

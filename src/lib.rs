//! Welcome to the staffing core. This crate models a company, its
//! departments, its employees and pre-hired candidates, and an accounting
//! department that runs payroll.
//!
//! Everything here is an in-memory object graph:
//!
//! - A [Company] owns [Department]s (and optionally one [Accounting]
//!   department), plus a list of [PreHiredEmployee] candidates.
//! - A [Department] owns a roster of [Employee]s and a [Budget]. Adding an
//!   employee to a roster credits the budget with their salary.
//! - [Accounting] keeps a payroll queue and decides who gets paid and through
//!   which channel of the [PaymentGateway] the caller provides.
//!
//! Employees move between departments through [Company::transfer_employee],
//! which never leaves an employee on two rosters (or none).
//!
//! [Company]: models/company/struct.Company.html
//! [Company::transfer_employee]: models/company/struct.Company.html#method.transfer_employee
//! [Department]: models/department/struct.Department.html
//! [Budget]: models/department/struct.Budget.html
//! [Accounting]: models/accounting/struct.Accounting.html
//! [Employee]: models/employee/struct.Employee.html
//! [PreHiredEmployee]: models/employee/struct.PreHiredEmployee.html
//! [PaymentGateway]: payment/trait.PaymentGateway.html

pub mod error;
#[macro_use]
mod util;
pub mod models;
pub mod payment;

pub use models::{
    accounting::{Accounting, PayrollEntry},
    company::Company,
    department::{Budget, Department, DepartmentID},
    employee::{Employee, EmployeeID, EmployeeStatus, PreHiredEmployee, Staff},
};
pub use util::id::IdAllocator;

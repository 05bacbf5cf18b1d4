//! Employees are the people on a department's roster. They are paid through
//! the internal payment channel, which means they need a full set of
//! [PaymentDetails] on file.
//!
//! Pre-hired employees are candidates who have not been onboarded yet. They
//! have no ID, no department, and no status. They become employees when a
//! department promotes them (see [Department::add_employee]).
//!
//! [PaymentDetails]: ../../payment/struct.PaymentDetails.html
//! [Department::add_employee]: ../department/struct.Department.html#method.add_employee

use crate::{
    models::department::DepartmentID,
    payment::PaymentDetails,
};
use getset::{Getters, Setters};
use rust_decimal::prelude::*;
#[cfg(feature = "with_serde")]
use serde_derive::{Serialize, Deserialize};

/// Where an employee stands with the company. There are no transition rules
/// here, any status can be set at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub enum EmployeeStatus {
    /// Currently working
    Active,
    /// Not currently working
    Inactive,
    /// On (unpaid) leave
    Vacation,
}

impl Default for EmployeeStatus {
    fn default() -> Self {
        EmployeeStatus::Inactive
    }
}

org_model! {
    /// An onboarded employee.
    pub struct Employee {
        id: <<EmployeeID>>,
        first_name: String,
        last_name: String,
        #[getset(set = "pub")]
        salary: Decimal,
        /// Where this employee's salary gets sent
        #[getset(set = "pub")]
        payment_details: PaymentDetails,
        #[getset(set = "pub")]
        #[builder(default)]
        status: EmployeeStatus,
        /// The department whose roster holds this employee. Only changes via
        /// transfer.
        department: DepartmentID,
    }
    EmployeeBuilder
}

impl Employee {
    /// Point this employee at a new department.
    ///
    /// This does *not* touch any roster. Whoever holds the old department is
    /// responsible for detaching the employee from it, and whoever holds the
    /// new one appends it.
    pub(crate) fn change_department(&mut self, new_department: DepartmentID) {
        self.department = new_department;
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}

/// A candidate that has been hired but not yet onboarded. Paid through the
/// external payment channel.
#[derive(Clone, Debug, PartialEq, Getters, Setters)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[getset(get = "pub")]
pub struct PreHiredEmployee {
    first_name: String,
    last_name: String,
    #[getset(set = "pub")]
    salary: Decimal,
    #[getset(set = "pub")]
    bank_account_number: String,
}

impl PreHiredEmployee {
    /// Create a new candidate
    pub fn new<T, S>(first_name: T, last_name: T, salary: S, bank_account_number: T) -> Self
        where T: Into<String>,
              S: Into<Decimal>,
    {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            salary: salary.into(),
            bank_account_number: bank_account_number.into(),
        }
    }
}

/// Anyone the company pays: either an onboarded employee or a pre-hired
/// candidate.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub enum Staff {
    Employee(Employee),
    PreHired(PreHiredEmployee),
}

impl Staff {
    pub fn first_name(&self) -> &String {
        match self {
            Staff::Employee(employee) => employee.first_name(),
            Staff::PreHired(candidate) => candidate.first_name(),
        }
    }

    pub fn last_name(&self) -> &String {
        match self {
            Staff::Employee(employee) => employee.last_name(),
            Staff::PreHired(candidate) => candidate.last_name(),
        }
    }

    pub fn salary(&self) -> &Decimal {
        match self {
            Staff::Employee(employee) => employee.salary(),
            Staff::PreHired(candidate) => candidate.salary(),
        }
    }

    /// Grab the employee out of this staff entry, if it is one.
    pub fn as_employee(&self) -> Option<&Employee> {
        match self {
            Staff::Employee(employee) => Some(employee),
            Staff::PreHired(_) => None,
        }
    }
}

impl From<Employee> for Staff {
    fn from(employee: Employee) -> Self {
        Staff::Employee(employee)
    }
}

impl From<PreHiredEmployee> for Staff {
    fn from(candidate: PreHiredEmployee) -> Self {
        Staff::PreHired(candidate)
    }
}

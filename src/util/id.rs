//! Hands out model IDs.

use crate::models::{
    department::DepartmentID,
    employee::EmployeeID,
};
#[cfg(feature = "with_serde")]
use serde_derive::{Serialize, Deserialize};

/// Keeps one counter per kind of model. Counters start at zero, only go up,
/// and never hand out the same value twice.
///
/// A [Company] carries its own allocator, so separate companies (and separate
/// tests) never share numbering.
///
/// [Company]: ../../models/company/struct.Company.html
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub struct IdAllocator {
    next_department: u64,
    next_employee: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_department_id(&mut self) -> DepartmentID {
        let id = DepartmentID::new(self.next_department);
        self.next_department += 1;
        id
    }

    pub fn next_employee_id(&mut self) -> EmployeeID {
        let id = EmployeeID::new(self.next_employee);
        self.next_employee += 1;
        id
    }
}

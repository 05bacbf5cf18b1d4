//! A department is a named group of employees within a company. Each
//! department tracks a two-sided budget: `debit` is money the department has
//! been given, `credit` is money it owes out in salaries.
//!
//! An employee lives on exactly one department's roster at a time. Moving
//! employees between departments is done through the owning [Company], which
//! detaches and appends in one step.
//!
//! [Company]: ../company/struct.Company.html

use crate::{
    error::{Error, Result},
    models::employee::{Employee, EmployeeID, EmployeeStatus, Staff},
    payment::PaymentDetails,
    util::id::IdAllocator,
};
use getset::{Getters, Setters};
use rust_decimal::prelude::*;
#[cfg(feature = "with_serde")]
use serde_derive::{Serialize, Deserialize};
use tracing::debug;

/// A department's budget.
#[derive(Clone, Debug, Default, PartialEq, Getters, Setters)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[getset(get = "pub", set = "pub")]
pub struct Budget {
    /// Money coming in
    debit: Decimal,
    /// Money owed out (salaries)
    credit: Decimal,
}

impl Budget {
    pub fn new<D, C>(debit: D, credit: C) -> Self
        where D: Into<Decimal>,
              C: Into<Decimal>,
    {
        Self {
            debit: debit.into(),
            credit: credit.into(),
        }
    }

    /// Debit minus credit. Never stored.
    pub fn balance(&self) -> Decimal {
        self.debit - self.credit
    }
}

org_model! {
    /// A department and its roster.
    pub struct Department {
        id: <<DepartmentID>>,
        #[getset(set = "pub")]
        name: String,
        /// The domain this department covers (sales, engineering, etc)
        #[getset(set = "pub")]
        area: String,
        /// The roster. Only changes through `add_employee`/`remove_employee`.
        #[builder(default)]
        employees: Vec<Employee>,
        #[getset(set = "pub", get_mut = "pub")]
        #[builder(default)]
        budget: Budget,
    }
    DepartmentBuilder
}

impl Department {
    /// Create a new department with an empty roster. The budget defaults to
    /// zero debit/zero credit.
    pub fn new<T: Into<String>>(id: DepartmentID, name: T, area: T, budget: Option<Budget>) -> Result<Self> {
        Self::builder()
            .id(id)
            .name(name.into())
            .area(area.into())
            .budget(budget.unwrap_or_default())
            .build()
            .map_err(|e| Error::BuilderFailed(e))
    }

    /// This department's balance (debit minus credit).
    pub fn balance(&self) -> Decimal {
        self.budget.balance()
    }

    /// Put money into this department's budget. Returns the post-op budget.
    pub fn deposit<T: Into<Decimal>>(&mut self, amount: T) -> &Budget {
        let debit = *self.budget.debit() + amount.into();
        self.budget.set_debit(debit);
        &self.budget
    }

    /// Find an employee on this roster.
    pub fn employee(&self, id: &EmployeeID) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id() == id)
    }

    /// Find an employee on this roster, mutably (for instance, to change their
    /// status or salary).
    pub fn employee_mut(&mut self, id: &EmployeeID) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|e| e.id() == id)
    }

    /// Add a person to this department's roster.
    ///
    /// An existing employee must already belong to this department (re-adding
    /// them, or adding one built for this department). They're put back on
    /// the roster and their salary is added to our budget's credit. Employees
    /// of another department are refused with
    /// `Error::EmployeeInOtherDepartment`: moving them means taking them off
    /// another roster, which only the owning [Company] can do.
    ///
    /// A pre-hired candidate is promoted into a new, active employee with a
    /// fresh ID from `ids`. This requires `payment_details`. Note that the
    /// promoted employee's salary is *not* credited to the budget.
    ///
    /// Returns the ID of the employee that landed on the roster.
    ///
    /// [Company]: ../company/struct.Company.html
    pub fn add_employee(&mut self, person: Staff, payment_details: Option<PaymentDetails>, ids: &mut IdAllocator) -> Result<EmployeeID> {
        match person {
            Staff::Employee(employee) => {
                if employee.department() != self.id() {
                    Err(Error::EmployeeInOtherDepartment(*employee.id(), *employee.department()))?;
                }
                Ok(self.attach_employee(employee))
            }
            Staff::PreHired(candidate) => {
                let payment_details = payment_details.ok_or(Error::MissingPaymentDetails)?;
                let employee = Employee::builder()
                    .id(ids.next_employee_id())
                    .first_name(candidate.first_name().clone())
                    .last_name(candidate.last_name().clone())
                    .salary(*candidate.salary())
                    .payment_details(payment_details)
                    .status(EmployeeStatus::Active)
                    .department(*self.id())
                    .build()
                    .map_err(|e| Error::BuilderFailed(e))?;
                let employee_id = *employee.id();
                debug!(employee = %employee_id, department = %self.id(), "candidate promoted to employee");
                self.employees.push(employee);
                Ok(employee_id)
            }
        }
    }

    /// Point an existing employee at this department, credit their salary to
    /// our budget, and append them to the roster. Any copy of them already on
    /// this roster is replaced. Taking them off some *other* roster is the
    /// caller's job.
    pub(crate) fn attach_employee(&mut self, mut employee: Employee) -> EmployeeID {
        self.remove_employee(employee.id());
        employee.change_department(*self.id());
        let credit = *self.budget.credit() + *employee.salary();
        self.budget.set_credit(credit);
        let employee_id = *employee.id();
        debug!(employee = %employee_id, department = %self.id(), "employee added to roster");
        self.employees.push(employee);
        employee_id
    }

    /// Take an employee off the roster, returning them. If they aren't on the
    /// roster, nothing happens. The budget is not adjusted.
    pub fn remove_employee(&mut self, id: &EmployeeID) -> Option<Employee> {
        let idx = self.employees.iter().position(|e| e.id() == id)?;
        let employee = self.employees.remove(idx);
        debug!(employee = %id, department = %self.id(), "employee removed from roster");
        Some(employee)
    }
}

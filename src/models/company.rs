//! A company is the top-level aggregate. It owns its departments (including,
//! optionally, one accounting department), a list of pre-hired candidates,
//! and a free-form staff list.
//!
//! The company also owns the [IdAllocator] that numbers its departments and
//! employees, so two companies never share ID state.
//!
//! Anything that touches more than one department at once (transferring an
//! employee, running payroll against every roster) goes through here.
//!
//! [IdAllocator]: ../../util/id/struct.IdAllocator.html

use crate::{
    error::{Error, Result},
    models::{
        accounting::Accounting,
        department::{Budget, Department, DepartmentID},
        employee::{Employee, EmployeeID, PreHiredEmployee, Staff},
    },
    payment::{PaymentDetails, PaymentGateway},
    util::id::IdAllocator,
};
use getset::{Getters, MutGetters, Setters};
#[cfg(feature = "with_serde")]
use serde_derive::{Serialize, Deserialize};
use tracing::info;

/// A company and everything it owns.
///
/// Departments are ordered as they were created, with the accounting
/// department (if any) always counted after every regular department. This is
/// the order `units()` and `all_employees()` walk in.
#[derive(Clone, Debug, PartialEq, Getters, MutGetters, Setters)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[getset(get = "pub")]
pub struct Company {
    #[getset(set = "pub")]
    name: String,
    /// Hands out department and employee IDs
    ids: IdAllocator,
    /// Regular departments, in the order they were added
    #[getset(get_mut = "pub")]
    departments: Vec<Department>,
    /// The accounting department, if we have one
    #[getset(get_mut = "pub")]
    accounting: Option<Accounting>,
    /// Candidates waiting to be onboarded
    #[getset(get_mut = "pub")]
    pre_hired: Vec<PreHiredEmployee>,
    /// A staff list maintained by the caller. This is *not* derived from the
    /// rosters, see `all_employees()` for that.
    #[getset(get_mut = "pub")]
    staff: Vec<Staff>,
}

impl Company {
    /// Create a new company with no departments or staff.
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            ids: IdAllocator::new(),
            departments: Vec::new(),
            accounting: None,
            pre_hired: Vec::new(),
            staff: Vec::new(),
        }
    }

    /// Create a new department and add it to the company. Returns the new
    /// department's ID.
    pub fn create_department<T: Into<String>>(&mut self, name: T, area: T, budget: Option<Budget>) -> Result<DepartmentID> {
        let department = Department::new(self.ids.next_department_id(), name, area, budget)?;
        let id = *department.id();
        self.departments.push(department);
        Ok(id)
    }

    /// Create the company's accounting department. Accounting always starts
    /// with an empty budget.
    pub fn create_accounting<T: Into<String>>(&mut self, name: T, area: T) -> Result<DepartmentID> {
        if self.accounting.is_some() {
            Err(Error::AccountingExists)?;
        }
        let department = Department::new(self.ids.next_department_id(), name, area, None)?;
        let id = *department.id();
        self.accounting = Some(Accounting::new(department));
        Ok(id)
    }

    /// Every department in the company: regular departments in creation
    /// order, then accounting. Accounting can't be placed elsewhere.
    pub fn units(&self) -> impl Iterator<Item = &Department> + '_ {
        self.departments.iter()
            .chain(self.accounting.as_ref().map(|a| a.department()))
    }

    fn units_mut(&mut self) -> impl Iterator<Item = &mut Department> + '_ {
        self.departments.iter_mut()
            .chain(self.accounting.as_mut().map(|a| a.department_mut()))
    }

    /// Find a department (regular or accounting) by ID.
    pub fn department(&self, id: &DepartmentID) -> Option<&Department> {
        self.units().find(|d| d.id() == id)
    }

    /// Find a department (regular or accounting) by ID, mutably.
    pub fn department_mut(&mut self, id: &DepartmentID) -> Option<&mut Department> {
        self.units_mut().find(|d| d.id() == id)
    }

    /// Find an employee on any roster in the company.
    pub fn find_employee(&self, id: &EmployeeID) -> Option<&Employee> {
        self.units().find_map(|d| d.employee(id))
    }

    /// Every employee on every roster (in department order, accounting last)
    /// followed by every pre-hired candidate. Built fresh on each call.
    pub fn all_employees(&self) -> Vec<Staff> {
        self.units()
            .flat_map(|d| d.employees().iter().cloned().map(Staff::Employee))
            .chain(self.pre_hired.iter().cloned().map(Staff::PreHired))
            .collect()
    }

    /// Add a person to one of the company's departments.
    ///
    /// An existing employee is taken off whichever roster holds their ID
    /// before landing on the target department, so they're never on two
    /// rosters (or none) at once. The `employee` passed in is what lands on
    /// the target roster, the copy that was detached is dropped. A candidate
    /// is promoted and needs `payment_details`; the candidate stays in the
    /// pre-hired list.
    pub fn add_employee(&mut self, to: &DepartmentID, person: Staff, payment_details: Option<PaymentDetails>) -> Result<EmployeeID> {
        if self.department(to).is_none() {
            Err(Error::DepartmentNotFound(*to))?;
        }
        match person {
            Staff::Employee(employee) => {
                self.units_mut().find_map(|d| d.remove_employee(employee.id()));
                let department = self.department_mut(to).ok_or(Error::DepartmentNotFound(*to))?;
                Ok(department.attach_employee(employee))
            }
            Staff::PreHired(_) => {
                let ids = &mut self.ids;
                let department = self.departments.iter_mut()
                    .chain(self.accounting.as_mut().map(|a| a.department_mut()))
                    .find(|d| d.id() == to)
                    .ok_or(Error::DepartmentNotFound(*to))?;
                department.add_employee(person, payment_details, ids)
            }
        }
    }

    /// Move an employee from whatever department they're in to another one.
    /// The target department's credit goes up by the employee's salary, the
    /// source department's budget is left alone.
    ///
    /// Nothing changes if either the employee or the target department can't
    /// be found.
    pub fn transfer_employee(&mut self, employee_id: &EmployeeID, to: &DepartmentID) -> Result<()> {
        if self.department(to).is_none() {
            Err(Error::DepartmentNotFound(*to))?;
        }
        let employee = self.units_mut()
            .find_map(|d| d.remove_employee(employee_id))
            .ok_or(Error::EmployeeNotFound(*employee_id))?;
        info!(employee = %employee_id, from = %employee.department(), to = %to, "transferring employee");
        let department = self.department_mut(to).ok_or(Error::DepartmentNotFound(*to))?;
        department.attach_employee(employee);
        Ok(())
    }

    /// Run payroll through the company's accounting department, resolving the
    /// queue against every roster in the company.
    pub fn pay_all_salary<G: PaymentGateway>(&self, gateway: &mut G) -> Result<Vec<EmployeeID>> {
        let accounting = self.accounting.as_ref().ok_or(Error::NoAccounting)?;
        accounting.pay_all_salary(|id| self.find_employee(id), gateway)
    }
}

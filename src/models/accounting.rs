//! Accounting is a department that also runs payroll. On top of its own
//! roster, it keeps a payroll queue (the "salary balance") of employees and
//! departments that are up for payroll action. The queue is separate from the
//! roster: someone can be on the roster without being queued and vice versa.
//!
//! Payroll has a somewhat surprising rule: running it pays every queued
//! employee whose status is *not* `Active`. Queued departments and active
//! employees are skipped. Callers are responsible for making sure the queue
//! and statuses reflect who should actually be paid.

use crate::{
    error::Result,
    models::{
        department::{Department, DepartmentID},
        employee::{Employee, EmployeeID, EmployeeStatus, PreHiredEmployee},
    },
    payment::PaymentGateway,
};
use getset::{Getters, MutGetters};
#[cfg(feature = "with_serde")]
use serde_derive::{Serialize, Deserialize};
use std::ops::{Deref, DerefMut};
use tracing::{info, warn};

/// An entry in the payroll queue. Employees and departments are numbered
/// independently, so entries are tagged by kind and compared as a whole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub enum PayrollEntry {
    Employee(EmployeeID),
    Department(DepartmentID),
}

impl From<EmployeeID> for PayrollEntry {
    fn from(id: EmployeeID) -> Self {
        PayrollEntry::Employee(id)
    }
}

impl From<DepartmentID> for PayrollEntry {
    fn from(id: DepartmentID) -> Self {
        PayrollEntry::Department(id)
    }
}

impl From<&Employee> for PayrollEntry {
    fn from(employee: &Employee) -> Self {
        PayrollEntry::Employee(*employee.id())
    }
}

impl From<&Department> for PayrollEntry {
    fn from(department: &Department) -> Self {
        PayrollEntry::Department(*department.id())
    }
}

/// The accounting department.
#[derive(Clone, Debug, PartialEq, Getters, MutGetters)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[getset(get = "pub")]
pub struct Accounting {
    /// The department side of accounting (roster, budget)
    #[getset(get_mut = "pub")]
    department: Department,
    /// The payroll queue, in the order things were added
    salary_balance: Vec<PayrollEntry>,
}

impl Accounting {
    /// Wrap a department into an accounting department with an empty payroll
    /// queue.
    pub fn new(department: Department) -> Self {
        Self {
            department,
            salary_balance: Vec::new(),
        }
    }

    /// Queue an employee or department for payroll.
    pub fn add_to_balance<T: Into<PayrollEntry>>(&mut self, entity: T) {
        self.salary_balance.push(entity.into());
    }

    /// Take an employee or department out of the payroll queue. Does nothing
    /// if they aren't queued.
    pub fn remove_from_balance<T: Into<PayrollEntry>>(&mut self, entity: T) {
        let entry = entity.into();
        self.salary_balance.retain(|queued| queued != &entry);
    }

    /// Pay an employee their salary through their bank details.
    pub fn internal_payment<G: PaymentGateway>(&self, employee: &Employee, gateway: &mut G) -> Result<()> {
        info!(employee = %employee.id(), amount = %employee.salary(), "sending internal payment");
        gateway.make_internal_payment(employee.payment_details(), employee.salary())
    }

    /// Pay a pre-hired candidate their salary through their bank account
    /// number.
    pub fn external_payment<G: PaymentGateway>(&self, candidate: &PreHiredEmployee, gateway: &mut G) -> Result<()> {
        info!(amount = %candidate.salary(), "sending external payment");
        gateway.make_external_payment(candidate.bank_account_number(), candidate.salary())
    }

    /// Run payroll over the queue.
    ///
    /// Every queued employee whose status is not `Active` gets an internal
    /// payment. `lookup` resolves queued employee IDs to the employee as it
    /// currently stands on whatever roster holds it. Queued employees that
    /// can't be resolved are skipped.
    ///
    /// The first failed payment stops the run and is returned; payments
    /// already made stay made. On success, returns the IDs paid, in queue
    /// order.
    pub fn pay_all_salary<'a, F, G>(&self, lookup: F, gateway: &mut G) -> Result<Vec<EmployeeID>>
        where F: Fn(&EmployeeID) -> Option<&'a Employee>,
              G: PaymentGateway,
    {
        let mut paid = Vec::new();
        for entry in &self.salary_balance {
            let employee_id = match entry {
                PayrollEntry::Employee(id) => id,
                PayrollEntry::Department(_) => continue,
            };
            let employee = match lookup(employee_id) {
                Some(employee) => employee,
                None => {
                    warn!(employee = %employee_id, "queued employee not found, skipping");
                    continue;
                }
            };
            if employee.status() == &EmployeeStatus::Active {
                continue;
            }
            self.internal_payment(employee, gateway)?;
            paid.push(*employee_id);
        }
        Ok(paid)
    }
}

impl Deref for Accounting {
    type Target = Department;

    fn deref(&self) -> &Department {
        &self.department
    }
}

impl DerefMut for Accounting {
    fn deref_mut(&mut self) -> &mut Department {
        &mut self.department
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::Error,
        models::department::Budget,
        util::{id::IdAllocator, test::*},
    };
    use rust_decimal_macros::*;

    fn make_accounting() -> Accounting {
        Accounting::new(make_department(0, "accounting", None))
    }

    #[test]
    fn add_and_remove_from_balance() {
        let mut accounting = make_accounting();
        let employee = make_employee(1, 0, dec!(300), EmployeeStatus::Inactive);
        let department = make_department(1, "widgets", None);

        accounting.add_to_balance(&employee);
        accounting.add_to_balance(&department);
        assert_eq!(accounting.salary_balance(), &vec![PayrollEntry::Employee(EmployeeID::new(1)), PayrollEntry::Department(DepartmentID::new(1))]);

        // same number, different kind: only the department goes
        accounting.remove_from_balance(DepartmentID::new(1));
        assert_eq!(accounting.salary_balance(), &vec![PayrollEntry::Employee(EmployeeID::new(1))]);

        // not queued, nothing happens
        accounting.remove_from_balance(EmployeeID::new(9));
        assert_eq!(accounting.salary_balance().len(), 1);

        accounting.remove_from_balance(&employee);
        assert_eq!(accounting.salary_balance().len(), 0);
    }

    #[test]
    fn remove_from_balance_removes_every_copy() {
        let mut accounting = make_accounting();
        accounting.add_to_balance(EmployeeID::new(3));
        accounting.add_to_balance(EmployeeID::new(4));
        accounting.add_to_balance(EmployeeID::new(3));
        accounting.remove_from_balance(EmployeeID::new(3));
        assert_eq!(accounting.salary_balance(), &vec![PayrollEntry::Employee(EmployeeID::new(4))]);
    }

    #[test]
    fn queue_is_separate_from_roster() {
        let mut ids = IdAllocator::new();
        let mut accounting = make_accounting();
        accounting.add_employee(make_employee(2, 0, dec!(100), EmployeeStatus::Inactive).into(), None, &mut ids).unwrap();
        assert_eq!(accounting.employees().len(), 1);
        assert_eq!(accounting.salary_balance().len(), 0);
        // department side works through deref
        assert_eq!(accounting.budget(), &Budget::new(dec!(0), dec!(100)));
        accounting.deposit(dec!(500));
        assert_eq!(accounting.balance(), dec!(400));
    }

    #[test]
    fn pays_only_non_active_employees() {
        let mut ids = IdAllocator::new();
        let mut accounting = make_accounting();
        let x = make_employee(0, 0, dec!(300), EmployeeStatus::Inactive);
        let y = make_employee(1, 0, dec!(450), EmployeeStatus::Active);
        let z = make_employee(2, 0, dec!(200), EmployeeStatus::Vacation);
        for employee in vec![x.clone(), y.clone(), z.clone()] {
            accounting.add_to_balance(&employee);
            accounting.add_employee(employee.into(), None, &mut ids).unwrap();
        }
        accounting.add_to_balance(DepartmentID::new(0));

        let mut gateway = RecordingGateway::new();
        let paid = accounting.pay_all_salary(|id| accounting.employee(id), &mut gateway).unwrap();
        assert_eq!(paid, vec![EmployeeID::new(0), EmployeeID::new(2)]);
        assert_eq!(gateway.internal, vec![
            (x.payment_details().clone(), dec!(300)),
            (z.payment_details().clone(), dec!(200)),
        ]);
        assert_eq!(gateway.external.len(), 0);
    }

    #[test]
    fn payroll_sees_current_status() {
        let mut ids = IdAllocator::new();
        let mut accounting = make_accounting();
        let x = make_employee(0, 0, dec!(300), EmployeeStatus::Inactive);
        accounting.add_to_balance(&x);
        accounting.add_employee(x.into(), None, &mut ids).unwrap();
        accounting.employee_mut(&EmployeeID::new(0)).unwrap().set_status(EmployeeStatus::Active);

        let mut gateway = RecordingGateway::new();
        let paid = accounting.pay_all_salary(|id| accounting.employee(id), &mut gateway).unwrap();
        assert_eq!(paid.len(), 0);
        assert_eq!(gateway.internal.len(), 0);
    }

    #[test]
    fn payroll_skips_missing_employees() {
        let accounting = {
            let mut accounting = make_accounting();
            accounting.add_to_balance(EmployeeID::new(77));
            accounting
        };
        let mut gateway = RecordingGateway::new();
        let paid = accounting.pay_all_salary(|id| accounting.employee(id), &mut gateway).unwrap();
        assert_eq!(paid.len(), 0);
        assert_eq!(gateway.internal.len(), 0);
    }

    #[test]
    fn payroll_fails_fast() {
        let mut ids = IdAllocator::new();
        let mut accounting = make_accounting();
        for id in 0..3 {
            let employee = make_employee(id, 0, dec!(100), EmployeeStatus::Inactive);
            accounting.add_to_balance(&employee);
            accounting.add_employee(employee.into(), None, &mut ids).unwrap();
        }
        let mut gateway = RecordingGateway::failing_on(1, Error::PaymentRejected("insufficient funds".into()));
        let res = accounting.pay_all_salary(|id| accounting.employee(id), &mut gateway);
        assert_eq!(res, Err(Error::PaymentRejected("insufficient funds".into())));
        // the first payment went through, the third was never attempted
        assert_eq!(gateway.internal.len(), 1);
        assert_eq!(gateway.attempts, 2);
    }

    #[test]
    fn internal_and_external_payments() {
        let accounting = make_accounting();
        let employee = make_employee(5, 0, dec!(1000), EmployeeStatus::Active);
        let candidate = make_candidate("Sandra", dec!(800));
        let mut gateway = RecordingGateway::new();

        accounting.internal_payment(&employee, &mut gateway).unwrap();
        accounting.external_payment(&candidate, &mut gateway).unwrap();
        assert_eq!(gateway.internal, vec![(employee.payment_details().clone(), dec!(1000))]);
        assert_eq!(gateway.external, vec![("UA-0000-SANDRA".to_string(), dec!(800))]);

        let mut gateway = RecordingGateway::failing_on(0, Error::GatewayUnavailable("bank is closed".into()));
        let res = accounting.external_payment(&candidate, &mut gateway);
        assert_eq!(res, Err(Error::GatewayUnavailable("bank is closed".into())));
        assert_eq!(gateway.external.len(), 0);
    }
}

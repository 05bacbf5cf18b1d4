use staffing_core::{
    error::Result,
    money,
    payment::{PaymentDetails, PaymentGateway},
    Budget,
    Company,
    EmployeeStatus,
    PreHiredEmployee,
};
use rust_decimal::Decimal;

/// Pretends to be a bank. Normally this would be a real banking client.
struct PrintingBank;

impl PaymentGateway for PrintingBank {
    fn make_internal_payment(&mut self, details: &PaymentDetails, amount: &Decimal) -> Result<()> {
        println!("  wire {} to {} ({}) via {}", amount, details.iban(), details.swift(), details.correspondent_bank());
        Ok(())
    }

    fn make_external_payment(&mut self, bank_account_number: &str, amount: &Decimal) -> Result<()> {
        println!("  send {} to account {}", amount, bank_account_number);
        Ok(())
    }
}

fn example() -> Result<Company> {
    let mut company = Company::new("Widget Extravaganza");
    let widgets = company.create_department("Widgets", "manufacturing", Some(Budget::new(money!(10000), money!(0))))?;
    let trucks = company.create_department("Trucks", "logistics", None)?;
    let accounting = company.create_accounting("Accounting", "finance")?;

    // candidates are hired before they're onboarded. onboarding them means
    // promoting them into a department with a full set of bank details.
    let jerry = PreHiredEmployee::new("Jerry", "Larson", money!(3200), "UA-4411-0091");
    let sandra = PreHiredEmployee::new("Sandra", "Kim", money!(4100), "UA-4411-0092");
    company.pre_hired_mut().push(jerry.clone());
    company.pre_hired_mut().push(sandra.clone());

    let details = PaymentDetails::new("PBANUA2X", "UA213223130000026007233566001", 26007233566001, "Citibank N.A., New York");
    let jerry_id = company.add_employee(&widgets, jerry.into(), Some(details.clone()))?;
    let sandra_id = company.add_employee(&widgets, sandra.into(), Some(details))?;
    company.pre_hired_mut().clear();

    // jerry moves over to trucks, which puts his salary on trucks' books
    company.transfer_employee(&jerry_id, &trucks)?;
    println!("trucks balance after transfer: {}", company.department(&trucks).map(|d| d.balance()).unwrap_or_default());

    // sandra goes on vacation, which makes her eligible for payroll
    if let Some(sandra) = company.department_mut(&widgets).and_then(|d| d.employee_mut(&sandra_id)) {
        sandra.set_status(EmployeeStatus::Vacation);
    }
    if let Some(accounting) = company.accounting_mut() {
        accounting.add_to_balance(jerry_id);
        accounting.add_to_balance(sandra_id);
        accounting.add_to_balance(widgets);
    }
    println!("accounting department {} queued {} entries", accounting, company.accounting().as_ref().map(|a| a.salary_balance().len()).unwrap_or(0));
    Ok(company)
}

fn main() -> Result<()> {
    let company = example()?;
    println!("running payroll for {}", company.name());
    let paid = company.pay_all_salary(&mut PrintingBank)?;
    println!("paid {} employee(s)", paid.len());
    for staff in company.all_employees() {
        println!("  {} {}: {}", staff.first_name(), staff.last_name(), staff.salary());
    }
    Ok(())
}

//! Payments leave the system through a `PaymentGateway`, which is whatever
//! banking client the caller plugs in. This core never moves money itself, it
//! only decides who gets paid and through which channel.
//!
//! There are two channels:
//!
//! - *internal* payments route through full bank details ([PaymentDetails])
//!   and are used for onboarded employees.
//! - *external* payments route to a raw bank account number and are used for
//!   pre-hired candidates.

use crate::error::Result;
use getset::{Getters, Setters};
use rust_decimal::prelude::*;
#[cfg(feature = "with_serde")]
use serde_derive::{Serialize, Deserialize};

/// The routing data an employee is paid through.
///
/// The contents are not validated (we don't check that a SWIFT code or IBAN
/// is well-formed), that's up to the gateway.
#[derive(Clone, Debug, PartialEq, Getters, Setters)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[getset(get = "pub", set = "pub")]
pub struct PaymentDetails {
    /// SWIFT/BIC code of the receiving bank
    swift: String,
    /// International bank account number
    iban: String,
    /// Account number at the receiving bank
    number: u64,
    /// The correspondent bank used to route the transfer
    correspondent_bank: String,
}

impl PaymentDetails {
    /// Create a new set of payment details
    pub fn new<T: Into<String>>(swift: T, iban: T, number: u64, correspondent_bank: T) -> Self {
        Self {
            swift: swift.into(),
            iban: iban.into(),
            number,
            correspondent_bank: correspondent_bank.into(),
        }
    }
}

/// The outside world's banking system, as far as we're concerned.
///
/// Implementations either complete the transfer or return an error (generally
/// `Error::PaymentRejected` or `Error::GatewayUnavailable`). We don't retry
/// or time out anything here.
pub trait PaymentGateway {
    /// Pay `amount` using a full set of bank details.
    fn make_internal_payment(&mut self, details: &PaymentDetails, amount: &Decimal) -> Result<()>;

    /// Pay `amount` into a bare bank account number.
    fn make_external_payment(&mut self, bank_account_number: &str, amount: &Decimal) -> Result<()>;
}

impl<G: PaymentGateway + ?Sized> PaymentGateway for &mut G {
    fn make_internal_payment(&mut self, details: &PaymentDetails, amount: &Decimal) -> Result<()> {
        (**self).make_internal_payment(details, amount)
    }

    fn make_external_payment(&mut self, bank_account_number: &str, amount: &Decimal) -> Result<()> {
        (**self).make_external_payment(bank_account_number, amount)
    }
}

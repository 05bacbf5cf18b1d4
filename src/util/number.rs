//! A set of utilities for working with money amounts.

/// Create a money amount (salary, debit, credit) from a literal.
///
/// The result is always a `Decimal`, so `money!(300)` can be handed to
/// anything that takes an amount without further conversion.
#[macro_export]
macro_rules! money {
    ($amount:expr) => {{
        let amount: rust_decimal::Decimal = rust_decimal_macros::dec!($amount);
        amount
    }};
}

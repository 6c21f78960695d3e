//! Resource documents for the Moip v2 API.

pub mod amount;
pub mod customer;
pub mod entry;
pub mod links;
pub mod order;
pub mod payment;
pub mod refund;

pub use amount::{Amount, EntryAmount, OrderAmount, PaymentAmount, RefundAmount};
pub use customer::{CustomerData, TaxDocument};
pub use entry::EntryData;
pub use links::{Link, Links};
pub use order::OrderData;
pub use payment::{FundingInstrument, PaymentData};
pub use refund::{BankCode, RefundBankAccount, RefundData, RefundingInstrument};

//! # Moip Types
//!
//! Typed documents and request payloads for the Moip v2 API.
//! This crate has ZERO IO dependencies - only data structures and
//! their JSON mappings.
//!
//! ## Layout
//!
//! - `domain/` - Resource documents (Entry, Refund, Payment, Order, Customer)
//! - `dto/` - Outbound request payloads and response envelopes
//!
//! Every document field is optional: a group missing from a response is
//! left unset, never reported as an error.

mod de;
pub mod domain;
pub mod dto;

// Re-export commonly used types
pub use domain::{
    Amount, BankCode, CustomerData, EntryAmount, EntryData, FundingInstrument, Link, Links, OrderAmount,
    OrderData, PaymentAmount, PaymentData, RefundAmount, RefundBankAccount, RefundData,
    RefundingInstrument, TaxDocument,
};
pub use dto::*;

//! Concrete API resources.

mod customer;
mod entry;
mod order;
mod payment;
mod refund;

pub use customer::Customer;
pub use entry::Entry;
pub use order::Order;
pub use payment::Payment;
pub use refund::{Refund, RefundOwner};

//! # Moip Client SDK
//!
//! A typed Rust client for the Moip v2 API resources.
//!
//! ```rust,no_run
//! # use moip_client::{Environment, Moip, MoipError};
//! # async fn example() -> Result<(), MoipError> {
//! let moip = Moip::for_environment(Environment::Sandbox)
//!     .with_authorization("Basic dG9rZW46a2V5");
//!
//! let entry = moip.entries().get("ENT-8UY8AIUCM8K2").await?;
//! println!("{:?} {:?}", entry.status(), entry.amount_liquid());
//!
//! let order = moip.orders().get("ORD-3V6GCJ2UJ9ZB").await?;
//! let refund = order.refunds().credit_card_partial(500).await?;
//! println!("refund {:?} is {:?}", refund.id(), refund.status());
//! # Ok(())
//! # }
//! ```

mod error;
mod http;
mod moip;
mod resource;
mod resources;


pub use error::MoipError;
pub use http::{Connection, HttpClient, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient};
pub use moip::{Environment, Moip, PRODUCTION_ENDPOINT, SANDBOX_ENDPOINT};
pub use resource::{Resource, get_if_set_in};
pub use resources::{Customer, Entry, Order, Payment, Refund, RefundOwner};

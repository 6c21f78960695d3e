//! Client context shared by every resource.

use std::sync::Arc;

use crate::http::{AUTHORIZATION, Connection, HttpClient, ReqwestHttpClient};
use crate::resources::{Customer, Entry, Order, Payment, Refund};

/// Sandbox API endpoint.
pub const SANDBOX_ENDPOINT: &str = "https://sandbox.moip.com.br";
/// Production API endpoint.
pub const PRODUCTION_ENDPOINT: &str = "https://api.moip.com.br";

/// API environments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Sandbox,
    Production,
}

impl Environment {
    /// Returns the base URL of the environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_ENDPOINT,
            Environment::Production => PRODUCTION_ENDPOINT,
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sandbox" => Ok(Environment::Sandbox),
            "production" => Ok(Environment::Production),
            _ => Err(format!(
                "Unknown environment: {}. Supported: sandbox, production",
                s
            )),
        }
    }
}

/// Moip API client context.
///
/// Cheap to clone: every clone shares the same transport. Resources hold a
/// clone and only ever use it to open new connections.
#[derive(Clone)]
pub struct Moip {
    http: Arc<dyn HttpClient>,
    authorization: Option<String>,
}

impl Moip {
    /// Creates a context talking to `endpoint` over reqwest.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::new(endpoint)))
    }

    /// Creates a context for one of the public environments.
    pub fn for_environment(environment: Environment) -> Self {
        Self::new(environment.base_url())
    }

    /// Creates a context over a custom transport.
    pub fn with_http_client(http: Arc<dyn HttpClient>) -> Self {
        Self {
            http,
            authorization: None,
        }
    }

    /// Sets the `Authorization` header value sent with every request.
    pub fn with_authorization(mut self, authorization: impl Into<String>) -> Self {
        self.authorization = Some(authorization.into());
        self
    }

    /// Opens a new connection, pre-loaded with the context's headers.
    pub fn create_connection(&self) -> Connection {
        let mut connection = Connection::new(Arc::clone(&self.http));
        if let Some(authorization) = &self.authorization {
            connection.add_header(AUTHORIZATION, authorization.as_str());
        }
        connection
    }

    /// Returns an empty ledger entry resource.
    pub fn entries(&self) -> Entry {
        Entry::new(self.clone())
    }

    /// Returns an empty order resource.
    pub fn orders(&self) -> Order {
        Order::new(self.clone())
    }

    /// Returns an empty payment resource.
    pub fn payments(&self) -> Payment {
        Payment::new(self.clone())
    }

    /// Returns an empty customer resource.
    pub fn customers(&self) -> Customer {
        Customer::new(self.clone())
    }

    /// Returns a refund resource not yet bound to an order or payment.
    pub fn refunds(&self) -> Refund {
        Refund::new(self.clone())
    }
}

impl std::fmt::Debug for Moip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Moip")
            .field("authorization", &self.authorization.as_ref().map(|_| "***"))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_urls() {
        assert_eq!(Environment::Sandbox.base_url(), "https://sandbox.moip.com.br");
        assert_eq!(Environment::Production.base_url(), "https://api.moip.com.br");
        assert_eq!(Environment::default(), Environment::Sandbox);
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            "Production".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_debug_hides_authorization() {
        let moip = Moip::new(SANDBOX_ENDPOINT).with_authorization("Basic c2VjcmV0");
        let debug = format!("{:?}", moip);
        assert!(!debug.contains("c2VjcmV0"));
    }
}

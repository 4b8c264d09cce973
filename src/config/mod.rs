mod errors;

use reqwest::Url;

use crate::generator::GeneratorSettings;

pub use errors::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/api/v1/transactions";
pub const UNAUTHENTICATED_COUNT: usize = 1000;
pub const AUTHENTICATED_COUNT: usize = 500;

/// What the run loop does when a request never gets a response.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum TransportFailurePolicy {
    /// Stop the run at the failing record and report the error.
    #[default]
    Abort,
    /// Log the failure, count it, and move on to the next record.
    Continue
}

/// Everything a seeding run needs, passed explicitly into the run loop.
#[derive(Debug, Clone)]
pub struct SeederConfig {
    pub endpoint: String,
    pub bearer_token: Option<String>,
    pub count: usize,
    pub transport_failure_policy: TransportFailurePolicy,
    pub generator: GeneratorSettings
}

impl SeederConfig {
    /// The plain variant: 1000 records and no `Authorization` header.
    pub fn unauthenticated() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            bearer_token: None,
            count: UNAUTHENTICATED_COUNT,
            transport_failure_policy: TransportFailurePolicy::default(),
            generator: GeneratorSettings::default()
        }
    }

    /// The authenticated variant: 500 records sent with `Authorization: Bearer <token>`.
    pub fn authenticated(token: impl Into<String>) -> Self {
        Self {
            bearer_token: Some(token.into()),
            count: AUTHENTICATED_COUNT,
            ..Self::unauthenticated()
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_transport_failure_policy(mut self, policy: TransportFailurePolicy) -> Self {
        self.transport_failure_policy = policy;
        self
    }

    pub fn with_generator(mut self, generator: GeneratorSettings) -> Self {
        self.generator = generator;
        self
    }

    /// Checks the endpoint and token before any request is made.
    pub fn validate(self) -> Result<Self, ConfigError> {
        let url = Url::parse(&self.endpoint)
            .map_err(|error| ConfigError::InvalidEndpoint { endpoint: self.endpoint.clone(), reason: error.to_string() })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEndpoint {
                endpoint: self.endpoint.clone(),
                reason: format!("unsupported scheme '{}'", url.scheme())
            })
        }

        if let Some(token) = &self.bearer_token {
            if token.trim().is_empty() {
                return Err(ConfigError::EmptyToken)
            }
        }

        Ok(self)
    }
}

impl Default for SeederConfig {
    fn default() -> Self {
        Self::unauthenticated()
    }
}

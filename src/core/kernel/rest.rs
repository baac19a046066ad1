use crate::core::errors::ExchangeError;
use crate::core::kernel::nonce::{Clock, SystemClock};
use crate::core::kernel::session::Session;
use crate::core::kernel::signer::Signer;
use crate::core::types::ApiResponse;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{instrument, trace, warn};

const JSON_CONTENT_TYPE: &str = "application/json";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// REST client trait for making HTTP requests
///
/// Public endpoints are plain GETs. Private endpoints are form-encoded POSTs
/// whose body starts with the session's authentication fields.
///
/// Errors are reserved for exchanges that did not complete (see
/// [`ExchangeError::is_transport_failure`]) and for undecodable bodies. A
/// body carrying an `error` key is a completed exchange.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Make a GET request
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint path, appended to the base URL
    ///
    /// # Returns
    /// The response body as a JSON value
    async fn get(&self, endpoint: &str) -> Result<Value, ExchangeError>;

    /// Make a GET request with strongly-typed response
    async fn get_json<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
    ) -> Result<ApiResponse<T>, ExchangeError> {
        decode_reply(endpoint, self.get(endpoint).await?)
    }

    /// Make a form-encoded POST request
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint path, appended to the base URL
    /// * `params` - Form fields placed after the authentication fields
    /// * `authenticated` - Whether to sign the request
    ///
    /// # Returns
    /// The response body as a JSON value
    async fn post_form(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        authenticated: bool,
    ) -> Result<Value, ExchangeError>;

    /// Make a form-encoded POST request with strongly-typed response
    async fn post_form_json<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        authenticated: bool,
    ) -> Result<ApiResponse<T>, ExchangeError> {
        decode_reply(endpoint, self.post_form(endpoint, params, authenticated).await?)
    }
}

/// Decode a JSON body into the operation's reply, logging a body that does not fit
fn decode_reply<T: DeserializeOwned>(
    endpoint: &str,
    value: Value,
) -> Result<ApiResponse<T>, ExchangeError> {
    ApiResponse::from_value(value).map_err(|e| {
        warn!(endpoint = %endpoint, error = %e, "response did not match the expected payload");
        e
    })
}

/// Configuration for the REST client
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Exchange name for logging and tracing
    pub exchange_name: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string to include in requests
    pub user_agent: String,
}

impl RestClientConfig {
    /// Create a new configuration
    ///
    /// # Arguments
    /// * `base_url` - Base URL for the API
    /// * `exchange_name` - Name of the exchange
    pub fn new(base_url: String, exchange_name: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            exchange_name,
            timeout_seconds: 30,
            user_agent: crate::core::config::default_user_agent(),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Builder for creating REST client instances
pub struct RestClientBuilder<C: Clock = SystemClock> {
    config: RestClientConfig,
    session: Option<Arc<Session<C>>>,
}

impl RestClientBuilder<SystemClock> {
    /// Create a new builder with the given configuration
    pub fn new(config: RestClientConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    /// Authenticate private requests with a fresh wall-clock session
    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.session = Some(Arc::new(Session::new(signer)));
        self
    }
}

impl<C: Clock> RestClientBuilder<C> {
    /// Authenticate private requests with an existing session
    ///
    /// Clients built from the same session share its nonce sequence.
    pub fn with_session<C2: Clock>(self, session: Arc<Session<C2>>) -> RestClientBuilder<C2> {
        RestClientBuilder {
            config: self.config,
            session: Some(session),
        }
    }

    /// Build the REST client
    pub fn build(self) -> Result<ReqwestRest<C>, ExchangeError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(self.config.timeout_seconds))
            .user_agent(&self.config.user_agent)
            .build()
            .map_err(|e| {
                ExchangeError::ConfigError(crate::core::config::ConfigError::InvalidConfiguration(
                    format!("Failed to build HTTP client: {}", e),
                ))
            })?;

        Ok(ReqwestRest {
            client,
            config: self.config,
            session: self.session,
        })
    }
}

/// Implementation of `RestClient` using reqwest
pub struct ReqwestRest<C: Clock = SystemClock> {
    client: Client,
    config: RestClientConfig,
    session: Option<Arc<Session<C>>>,
}

impl<C: Clock> Clone for ReqwestRest<C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            config: self.config.clone(),
            session: self.session.clone(),
        }
    }
}

impl<C: Clock> std::fmt::Debug for ReqwestRest<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestRest")
            .field("config", &self.config)
            .field("has_session", &self.session.is_some())
            .finish_non_exhaustive()
    }
}

impl<C: Clock> ReqwestRest<C> {
    pub fn config(&self) -> &RestClientConfig {
        &self.config
    }

    /// The session signing private requests, if any
    pub fn session(&self) -> Option<&Arc<Session<C>>> {
        self.session.as_ref()
    }

    /// Build the full URL for an endpoint
    fn build_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url, endpoint)
    }

    /// Send the request and decode the body
    ///
    /// Transport failures are logged here, at the dispatch boundary.
    async fn dispatch(&self, request: RequestBuilder, endpoint: &str) -> Result<Value, ExchangeError> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(
                    exchange = %self.config.exchange_name,
                    endpoint = %endpoint,
                    error = %e,
                    "request failed"
                );
                return Err(ExchangeError::NetworkError(format!("Request failed: {}", e)));
            }
        };

        self.handle_response(response, endpoint).await
    }

    /// Handle the response and extract JSON
    #[instrument(skip(self, response), fields(exchange = %self.config.exchange_name, status = %response.status()))]
    async fn handle_response(
        &self,
        response: Response,
        endpoint: &str,
    ) -> Result<Value, ExchangeError> {
        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            warn!(endpoint = %endpoint, error = %e, "failed to read response body");
            ExchangeError::NetworkError(format!("Failed to read response body: {}", e))
        })?;

        trace!("Response body: {}", response_text);

        if status.is_success() {
            serde_json::from_str(&response_text).map_err(|e| {
                warn!(endpoint = %endpoint, error = %e, "response body is not JSON");
                ExchangeError::DeserializationError(format!("Failed to parse JSON response: {}", e))
            })
        } else {
            warn!(endpoint = %endpoint, status = status.as_u16(), "request rejected");
            Err(ExchangeError::HttpStatus {
                status: status.as_u16(),
                body: response_text,
            })
        }
    }
}

#[async_trait]
impl<C: Clock + 'static> RestClient for ReqwestRest<C> {
    #[instrument(skip(self), fields(exchange = %self.config.exchange_name, endpoint = %endpoint))]
    async fn get(&self, endpoint: &str) -> Result<Value, ExchangeError> {
        let request = self
            .client
            .get(self.build_url(endpoint))
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);

        self.dispatch(request, endpoint).await
    }

    #[instrument(skip(self, params), fields(exchange = %self.config.exchange_name, endpoint = %endpoint, param_count = params.len()))]
    async fn post_form(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        authenticated: bool,
    ) -> Result<Value, ExchangeError> {
        let slot = if authenticated {
            let Some(session) = &self.session else {
                return Err(ExchangeError::AuthError(
                    "Authentication required but no signer provided".to_string(),
                ));
            };
            Some(session.begin().await?)
        } else {
            None
        };

        let auth_fields = slot.as_ref().map_or(&[][..], |slot| slot.auth_fields());
        let body = build_form_body(auth_fields, params);

        let request = self
            .client
            .post(self.build_url(endpoint))
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body);

        // The slot stays alive until the exchange is over, keeping signed
        // requests on this session strictly one at a time.
        let result = self.dispatch(request, endpoint).await;
        drop(slot);
        result
    }
}

/// Form-encode the authentication fields followed by the request parameters
pub fn build_form_body(auth_fields: &[(String, String)], params: &[(&str, &str)]) -> String {
    auth_fields
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .chain(params.iter().copied())
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

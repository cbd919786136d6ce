//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use crate::domain::{DeliveryResult, Password, SendSms, StatusCode, Username, ValidationError};
use crate::transport::DecodeError;

const DEFAULT_ENDPOINT: &str = "http://ngn.rmlconnect.net/bulksms/bulksms";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: &'a Url,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a Url,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            // The URL carries the password in its query string.
            let response = self
                .client
                .get(url.as_str())
                .timeout(self.timeout)
                .send()
                .await
                .map_err(redact_url)?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(redact_url)?;
            Ok(HttpResponse { status, body })
        })
    }
}

fn redact_url(err: reqwest::Error) -> Box<dyn StdError + Send + Sync> {
    Box::new(err.without_url())
}

#[derive(Debug, Clone)]
/// RouteSMS account credentials, sent as `username` and `password` on every request.
///
/// The password is redacted from `Debug` output and never logged.
pub struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    /// Validate that both parts are non-empty.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    fn push_query_params(&self, params: &mut Vec<(String, String)>) {
        params.push((Username::FIELD.to_owned(), self.username.as_str().to_owned()));
        params.push((Password::FIELD.to_owned(), self.password.as_str().to_owned()));
    }
}

#[derive(Debug, thiserror::Error)]
/// Non-2xx answer from the gateway's HTTP server, reported through
/// [`RouteSmsError::Transport`].
#[error("unexpected HTTP status: {status}")]
pub struct HttpStatusError {
    pub status: u16,
    pub body: Option<String>,
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`RouteSmsClient`].
pub enum RouteSmsError {
    /// HTTP client / transport failure (DNS, timeouts, connection resets, non-2xx
    /// status via [`HttpStatusError`]).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The gateway answered with a status code other than success or DND.
    #[error("gateway error {code}: {message}")]
    Gateway { code: StatusCode, message: String },

    /// Response body did not follow the delimited grammar.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The configured endpoint is not an absolute URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl From<DecodeError> for RouteSmsError {
    fn from(value: DecodeError) -> Self {
        match value {
            DecodeError::Gateway { code, message } => Self::Gateway { code, message },
            other => Self::Parse(Box::new(other)),
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`RouteSmsClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct RouteSmsClientBuilder {
    credentials: Credentials,
    endpoint: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl RouteSmsClientBuilder {
    /// Create a builder with the default endpoint and a 15 second timeout.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Override the full `bulksms` endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the timeout applied to each request as a whole.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`RouteSmsClient`].
    pub fn build(self) -> Result<RouteSmsClient, RouteSmsError> {
        Url::parse(&self.endpoint)?;

        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| RouteSmsError::Transport(Box::new(err)))?;

        Ok(RouteSmsClient {
            credentials: self.credentials,
            endpoint: self.endpoint,
            http: Arc::new(ReqwestTransport {
                client,
                timeout: self.timeout,
            }),
        })
    }
}

#[derive(Clone)]
/// High-level RouteSMS client.
///
/// Validates requests, encodes them into the `bulksms` query string, issues one GET
/// per call, and decodes the delimited response. By default it talks to
/// `http://ngn.rmlconnect.net/bulksms/bulksms` with a 15 second timeout.
pub struct RouteSmsClient {
    credentials: Credentials,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for RouteSmsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteSmsClient")
            .field("credentials", &self.credentials)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl RouteSmsClient {
    /// Create a client using the default endpoint and timeout.
    ///
    /// For more customization, use [`RouteSmsClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
                timeout: DEFAULT_TIMEOUT,
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> RouteSmsClientBuilder {
        RouteSmsClientBuilder::new(credentials)
    }

    /// Send one message through `bulksms`.
    ///
    /// Returns one [`DeliveryResult`] per record in the gateway's answer, in the order
    /// the gateway listed them.
    ///
    /// Errors:
    /// - [`RouteSmsError::Transport`] for connection failures, timeouts and non-2xx responses,
    /// - [`RouteSmsError::Gateway`] when the gateway answers with an error status code,
    /// - [`RouteSmsError::Parse`] when the status field is not a number.
    pub async fn send(&self, request: SendSms) -> Result<Vec<DeliveryResult>, RouteSmsError> {
        let mut params = Vec::<(String, String)>::new();
        self.credentials.push_query_params(&mut params);
        params.extend(crate::transport::encode_send_sms_query(&request));
        let url = Url::parse_with_params(&self.endpoint, &params)?;

        debug!(
            endpoint = %self.endpoint,
            destination = request.recipient().as_str(),
            message_type = request.message_type().value(),
            dlr = request.dlr().value(),
            "sending bulksms request"
        );

        let response = self.http.get(&url).await.map_err(|err| {
            warn!(error = %err, "bulksms request failed");
            RouteSmsError::Transport(err)
        })?;

        if !(200..=299).contains(&response.status) {
            warn!(status = response.status, "bulksms returned non-success HTTP status");
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(RouteSmsError::Transport(Box::new(HttpStatusError {
                status: response.status,
                body,
            })));
        }

        let results = crate::transport::decode_send_sms_response(&response.body).map_err(|err| {
            warn!(error = %err, "bulksms request rejected");
            RouteSmsError::from(err)
        })?;

        debug!(results = results.len(), "decoded bulksms response");
        Ok(results)
    }

    /// Validate raw inputs with default type and dlr, then [`send`](Self::send) them.
    pub async fn send_text(
        &self,
        sender: impl Into<String>,
        recipient: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Vec<DeliveryResult>, RouteSmsError> {
        let request = SendSms::new(sender, recipient, message)?;
        self.send(request).await
    }
}

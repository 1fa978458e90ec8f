use reqwest::Url;
use shared_types::{ErrorResponse, RegistrationRecord};
use std::fmt;

/// Where the registration endpoint lives, relative to the page origin.
pub const REGISTER_PATH: &str = "/api/users";

/// Origin used when the page origin cannot be determined (native builds,
/// unit tests).
const FALLBACK_ORIGIN: &str = "http://localhost:8080";

/// Failure modes of a registration submission.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationError {
    /// The endpoint rejected the submission and explained why.
    Rejected { message: String },
    /// The request never completed, or the response could not be read as
    /// the documented error shape.
    Transport(String),
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationError::Rejected { message } => {
                write!(f, "registration rejected: {message}")
            }
            RegistrationError::Transport(detail) => {
                write!(f, "registration request failed: {detail}")
            }
        }
    }
}

impl std::error::Error for RegistrationError {}

/// Resolve the registration endpoint against an origin.
fn register_url(origin: &str) -> Result<Url, RegistrationError> {
    Url::parse(origin)
        .and_then(|base| base.join(REGISTER_PATH))
        .map_err(|e| RegistrationError::Transport(e.to_string()))
}

/// Origin of the page currently hosting the form.
#[cfg(target_arch = "wasm32")]
fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| FALLBACK_ORIGIN.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> String {
    FALLBACK_ORIGIN.to_string()
}

/// Submit one registration record.
///
/// Posts the record as JSON and maps the response per the endpoint
/// contract: a 2xx status succeeds without the body being read; any other
/// status is expected to carry an [`ErrorResponse`] body whose message is
/// surfaced to the caller.
pub async fn submit_registration(record: &RegistrationRecord) -> Result<(), RegistrationError> {
    let url = register_url(&page_origin())?;

    let response = reqwest::Client::new()
        .post(url)
        .json(record)
        .send()
        .await
        .map_err(|e| RegistrationError::Transport(e.to_string()))?;

    if response.status().is_success() {
        return Ok(());
    }

    match response.json::<ErrorResponse>().await {
        Ok(body) => Err(RegistrationError::Rejected {
            message: body.message,
        }),
        Err(e) => Err(RegistrationError::Transport(e.to_string())),
    }
}

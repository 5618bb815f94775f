use crate::{
    common::REQUEST_ID_HEADER,
    error::{ApiError, Error},
};
use async_trait::async_trait;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use std::collections::HashMap;
use task_local_extensions::Extensions;

/// Reqwest middleware which translates error responses returned from Shopify APIs
/// into [`Error::ApiError`](crate::error::Error)s.
pub struct ErrorHandlingMiddleware;

#[async_trait]
impl Middleware for ErrorHandlingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        // Capture the response
        let response = next.run(req, extensions).await?;

        // Build an ApiError if the response is not a success
        if !response.status().is_success() {
            tracing::debug!("Failed HTTP request. Status code: {}", response.status());

            let api_error = api_error_from_response(response).await?;
            return Err(Error::ApiError(api_error).into());
        }

        Ok(response)
    }
}

/// Body of an error response from Shopify APIs.
///
/// Shopify is not consistent about the shape of `errors`: depending on the endpoint
/// it is a plain message, a list of messages or a map of per-field messages.
#[derive(serde::Deserialize, Debug)]
#[serde(untagged)]
enum ErrorResponseBody {
    FieldErrors {
        errors: HashMap<String, FieldMessages>,
    },
    ErrorList {
        errors: Vec<String>,
    },
    ErrorMessage {
        errors: String,
    },
    SingleError {
        error: String,
        error_description: Option<String>,
    },
    Unknown,
}

#[derive(serde::Deserialize, Debug)]
#[serde(untagged)]
enum FieldMessages {
    Many(Vec<String>),
    One(String),
}

impl From<FieldMessages> for Vec<String> {
    fn from(messages: FieldMessages) -> Self {
        match messages {
            FieldMessages::Many(messages) => messages,
            FieldMessages::One(message) => vec![message],
        }
    }
}

async fn api_error_from_response(response: Response) -> reqwest_middleware::Result<ApiError> {
    let status = response.status();
    let request_id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());
    let fallback_message = status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string();

    // Parse the response body as JSON
    let bytes = response.bytes().await?;
    let error_response: ErrorResponseBody =
        serde_json::from_slice(&bytes).unwrap_or(ErrorResponseBody::Unknown);

    let (message, errors) = match error_response {
        ErrorResponseBody::FieldErrors { errors } => {
            let errors: HashMap<String, Vec<String>> =
                errors.into_iter().map(|(k, v)| (k, v.into())).collect();
            (field_errors_message(&errors), errors)
        }
        ErrorResponseBody::ErrorList { errors } => (
            errors.join(", "),
            [("base".to_string(), errors)].into_iter().collect(),
        ),
        ErrorResponseBody::ErrorMessage { errors } => (errors, HashMap::new()),
        ErrorResponseBody::SingleError {
            error,
            error_description,
        } => match error_description {
            Some(description) => (format!("{}: {}", error, description), HashMap::new()),
            None => (error, HashMap::new()),
        },
        // Not one of the known shapes (proxy pages, plain text): keep the body as is
        ErrorResponseBody::Unknown => (
            String::from_utf8_lossy(&bytes).trim().to_string(),
            HashMap::new(),
        ),
    };

    Ok(ApiError {
        status: status.as_u16(),
        message: if message.is_empty() {
            fallback_message
        } else {
            message
        },
        errors,
        request_id,
    })
}

/// Builds a single-line summary like `date: is invalid; status: is unknown`.
fn field_errors_message(errors: &HashMap<String, Vec<String>>) -> String {
    let mut fields = errors.iter().collect::<Vec<_>>();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}

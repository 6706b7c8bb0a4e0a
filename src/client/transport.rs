//! Default HTTP dispatch over reqwest.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, error, instrument, trace};

use super::request::{validate_request_props, RequestProps};
use crate::error::{Error, Result};

/// Error payload the API attaches to a 500 response.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// Issues one API request and maps the response status onto the crate's
/// error taxonomy.
///
/// 200 deserializes into the expected type; 500 carries a JSON error
/// payload from the API; 400 is how the API reports a nonexistent path;
/// everything else is surfaced verbatim.
#[instrument(level = "debug", skip(http, props), fields(method = %props.method, url = %props.url))]
pub(crate) async fn dispatch<T: DeserializeOwned>(
    http: &reqwest::Client,
    props: RequestProps,
) -> Result<T> {
    validate_request_props(&props)?;

    let mut request = http
        .request(props.method.clone(), &props.url)
        .header(AUTHORIZATION, &props.auth);
    if let Some(body) = &props.body {
        request = request.header(CONTENT_TYPE, "application/json").json(body);
    }

    trace!("sending request");
    let response = request.send().await?;
    let status = response.status();
    debug!("received status {status}");

    match status {
        StatusCode::OK => Ok(response.json::<T>().await?),
        StatusCode::INTERNAL_SERVER_ERROR => {
            let body: ApiErrorBody = response.json().await?;
            error!("api reported failure: {}", body.error);
            Err(Error::Api {
                message: body.error,
                path: props.url,
                method: props.method.to_string(),
            })
        }
        StatusCode::BAD_REQUEST => Err(Error::NotFound {
            path: props.url,
            method: props.method.to_string(),
        }),
        other => {
            let body = response.text().await.unwrap_or_default();
            error!("unexpected status {other}: {body}");
            Err(Error::UnexpectedStatus {
                status: other.as_u16(),
                body,
            })
        }
    }
}

//! Request assembly shared by every resource call.

use reqwest::Method;
use serde_json::Value;

use crate::error::{Error, Result};

/// Everything the transport needs to issue one API call.
#[derive(Debug, Clone)]
pub(crate) struct RequestProps {
    pub url: String,
    pub method: Method,
    /// Full `Authorization` header value.
    pub auth: String,
    pub body: Option<Value>,
}

/// Builds the props for one request, wiring the default authentication
/// header so callers only supply what varies per call.
pub(crate) fn build_request_props(
    url: String,
    basic_auth: &str,
    method: Method,
    body: Option<Value>,
) -> RequestProps {
    RequestProps {
        url,
        method,
        auth: format!("Basic {basic_auth}"),
        body,
    }
}

/// Rejects props that would produce a request the API can never accept.
pub(crate) fn validate_request_props(props: &RequestProps) -> Result<()> {
    if props.url.trim().is_empty() {
        return Err(Error::InvalidRequest("no url provided".to_string()));
    }
    if props.auth.trim().is_empty() || props.auth.trim() == "Basic" {
        return Err(Error::InvalidRequest(
            "no authorization credential provided".to_string(),
        ));
    }
    if (props.method == Method::POST || props.method == Method::PUT) && props.body.is_none() {
        return Err(Error::InvalidRequest(format!(
            "no body was provided for method {}",
            props.method
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(method: Method, body: Option<Value>) -> RequestProps {
        build_request_props(
            "https://api.migadu.com/v1/domains/example.org".to_string(),
            "Y3JlZA==",
            method,
            body,
        )
    }

    #[test]
    fn default_headers_are_wired() {
        let props = props(Method::GET, None);
        assert_eq!(props.auth, "Basic Y3JlZA==");
        assert!(validate_request_props(&props).is_ok());
    }

    #[test]
    fn blank_url_is_rejected() {
        let mut props = props(Method::GET, None);
        props.url = "   ".to_string();
        assert!(matches!(
            validate_request_props(&props),
            Err(Error::InvalidRequest(_))
        ));
    }

    #[test]
    fn missing_credential_is_rejected() {
        let mut props = props(Method::GET, None);
        props.auth = "Basic ".to_string();
        assert!(matches!(
            validate_request_props(&props),
            Err(Error::InvalidRequest(_))
        ));
    }

    #[test]
    fn write_methods_require_a_body() {
        for method in [Method::POST, Method::PUT] {
            let err = validate_request_props(&props(method.clone(), None)).unwrap_err();
            assert!(err.to_string().contains(method.as_str()));
        }
        let body = serde_json::json!({ "name": "demo" });
        assert!(validate_request_props(&props(Method::POST, Some(body))).is_ok());
    }

    #[test]
    fn delete_needs_no_body() {
        assert!(validate_request_props(&props(Method::DELETE, None)).is_ok());
    }
}

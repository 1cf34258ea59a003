use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::error::CommonRequestError;

/// Content types a request can declare explicitly.
///
/// Multipart bodies are absent on purpose: the transport sets their
/// boundary-bearing content type itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Json,
    FormUrlEncoded,
}

impl ContentType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::FormUrlEncoded => "application/x-www-form-urlencoded",
        }
    }
}

/// Build the standard header set: `Authorization: Bearer <token>` plus an
/// optional `Content-Type`.
///
/// The token is placed verbatim; only characters HTTP forbids in header values
/// are rejected.
pub fn build_headers(
    token: &str,
    content_type: Option<ContentType>,
) -> Result<HeaderMap, CommonRequestError> {
    let mut headers = HeaderMap::new();

    let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|_| CommonRequestError::InvalidHeader("authorization".to_string()))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);

    if let Some(content_type) = content_type {
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(content_type.as_str()),
        );
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_and_json() {
        let headers = build_headers("secret", Some(ContentType::Json)).unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[AUTHORIZATION], "Bearer secret");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert!(headers[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn bearer_only() {
        let headers = build_headers("secret", None).unwrap();
        assert_eq!(headers.len(), 1);
        assert!(headers.get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn form_content_type() {
        let headers = build_headers("k", Some(ContentType::FormUrlEncoded)).unwrap();
        assert_eq!(
            headers[CONTENT_TYPE],
            "application/x-www-form-urlencoded"
        );
    }

    #[test]
    fn token_is_not_validated_beyond_http_rules() {
        assert!(build_headers("", None).is_ok());
        assert!(build_headers("any thing=/+", None).is_ok());
        assert!(matches!(
            build_headers("line\nbreak", None),
            Err(CommonRequestError::InvalidHeader(_))
        ));
    }
}

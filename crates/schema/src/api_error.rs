//! The error document the API returns with non-2xx responses.

use linkedin_xml::schema_entity;
use std::fmt;

schema_entity! {
    pub struct ApiError("error") {
        status: text(u16, "status") optional,
        /// Milliseconds since the epoch.
        timestamp: text(u64, "timestamp") optional,
        request_id: text(String, "request-id") optional,
        error_code: text(i32, "error-code") optional,
        message: text(String, "message") optional,
    }
}

impl ApiError {
    /// Returns `true` for throttling responses.
    pub fn is_throttled(&self) -> bool {
        let throttle_message = self
            .message
            .as_deref()
            .is_some_and(|message| message.to_ascii_lowercase().contains("throttle"));
        self.status == Some(403) && throttle_message
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "HTTP {status}")?,
            None => f.write_str("API error")?,
        }
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request {request_id})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use linkedin_xml::from_xml_str;

    const THROTTLED: &str = concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        "\n<error>\n  <status>403</status>\n  <timestamp>1279576089423</timestamp>\n",
        "  <request-id>QX2HDCMJCS</request-id>\n  <error-code>0</error-code>\n",
        "  <message>Throttle limit for calls to this resource is reached.</message>\n</error>\n"
    );

    #[test]
    fn parses_indented_error_document() {
        let error: ApiError = from_xml_str(THROTTLED).unwrap();
        assert_eq!(error.status, Some(403));
        assert_eq!(error.timestamp, Some(1_279_576_089_423));
        assert_eq!(error.error_code, Some(0));
        assert!(error.is_throttled());
        assert_eq!(
            error.to_string(),
            "HTTP 403: Throttle limit for calls to this resource is reached. (request QX2HDCMJCS)"
        );
    }
}

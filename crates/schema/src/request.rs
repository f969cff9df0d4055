//! Profile requests and the HTTP headers that come with them.
//!
//! A member's profile carries two request descriptors: one for the public site
//! and one for the API. The API descriptor includes the headers (usually an
//! `x-li-auth-token`) a client must send to fetch that profile.

use crate::capabilities::Headers;
use linkedin_xml::schema_entity;

schema_entity! {
    /// One HTTP header. The API has used both `<http-header>` and `<header>`
    /// for this element; both are accepted, `<http-header>` is written.
    pub struct HttpHeader("http-header", alias "header") {
        name: text(String, "name") required,
        value: text(String, "value") required,
    }
}

schema_entity! {
    /// The headers to send with a profile request.
    pub struct HttpHeaders("headers") {
        total: attribute(u64, "total") optional,
        headers: list(HttpHeader) optional,
    }
}

impl HttpHeaders {
    /// Builds a header set from name and value pairs, with `total` filled in.
    pub fn from_pairs<I, N, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        let headers: Vec<HttpHeader> = pairs
            .into_iter()
            .map(|(name, value)| HttpHeader {
                name: Some(name.into()),
                value: Some(value.into()),
            })
            .collect();
        Self {
            total: Some(headers.len() as u64),
            headers,
        }
    }

    /// Value of the first header with the given name, compared without regard
    /// to ASCII case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|header| {
                header
                    .name
                    .as_deref()
                    .is_some_and(|candidate| candidate.eq_ignore_ascii_case(name))
            })
            .and_then(|header| header.value.as_deref())
    }
}

schema_entity! {
    /// How to fetch a member's profile through the API.
    pub struct ApiStandardProfileRequest("api-standard-profile-request") {
        url: text(String, "url") required,
        headers: capability(Headers) optional,
    }
}

schema_entity! {
    /// Link to a member's profile on the public site.
    pub struct SiteStandardProfileRequest("site-standard-profile-request") {
        url: text(String, "url") required,
    }
}

//! # LinkedIn API Schema
//!
//! Typed entities for the XML documents exchanged with the LinkedIn REST API,
//! each declared through [`linkedin_xml::schema_entity!`].
//!
//! | Module | Entities |
//! |--------|----------|
//! | [`profile`] | `Person`, `Location`, `Country`, `Connections`, `People` |
//! | [`request`] | `ApiStandardProfileRequest`, `SiteStandardProfileRequest`, `HttpHeaders`, `HttpHeader` |
//! | [`skills`] | `Skill`, `Skills`, `SkillProficiency`, `SkillYears`, `SkillName` |
//! | [`messaging`] | `MailboxItem`, `Recipients`, `InvitationRequest`, `InvitationAuthorization` |
//! | [`updates`] | `Activity`, `UpdateComment` |
//! | [`api_error`] | `ApiError` |
//!
//! Fields with an abstract type are bound to their concrete entity in
//! [`capabilities`].
//!
//! ## Example
//!
//! ```rust
//! use linkedin_schema::ApiStandardProfileRequest;
//! use linkedin_xml::{from_xml_str, to_xml_string};
//!
//! let xml = concat!(
//!     "<api-standard-profile-request>",
//!     "<url>http://api.linkedin.com/v1/people/x</url>",
//!     "<headers total=\"1\"><http-header><name>x-li-auth-token</name>",
//!     "<value>name:abc</value></http-header></headers>",
//!     "</api-standard-profile-request>"
//! );
//! let request: ApiStandardProfileRequest = from_xml_str(xml).unwrap();
//! let headers = request.headers.as_ref().unwrap();
//! assert_eq!(headers.get("x-li-auth-token"), Some("name:abc"));
//! assert_eq!(to_xml_string(&request).unwrap(), xml);
//! ```

pub mod api_error;
pub mod capabilities;
pub mod document;
pub mod messaging;
pub mod profile;
pub mod request;
pub mod skills;
pub mod updates;

pub use api_error::ApiError;
pub use capabilities::{Authorization, BINDINGS, Headers, NameType, Proficiency, Years, binding_for};
pub use document::Document;
pub use messaging::{
    InvitationAuthorization, InvitationRequest, ItemContent, MailboxItem, Recipient, Recipients,
};
pub use profile::{Connections, Country, Location, People, Person};
pub use request::{ApiStandardProfileRequest, HttpHeader, HttpHeaders, SiteStandardProfileRequest};
pub use skills::{
    ProficiencyLevel, Skill, SkillName, SkillProficiency, SkillYears, Skills,
    UnknownProficiencyLevel,
};
pub use updates::{Activity, UpdateComment};

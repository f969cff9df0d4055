//! Mailbox items: messages and connection invitations sent between members.

use crate::capabilities::Authorization;
use crate::profile::Person;
use linkedin_xml::schema_entity;

schema_entity! {
    pub struct Recipient("recipient") {
        person: entity(Person) required,
    }
}

schema_entity! {
    pub struct Recipients("recipients") {
        recipients: list(Recipient) optional,
    }
}

schema_entity! {
    /// Out-of-network authorization taken from a profile request's
    /// `x-li-auth-token` header.
    pub struct InvitationAuthorization("authorization") {
        name: text(String, "name") required,
        value: text(String, "value") required,
    }
}

impl InvitationAuthorization {
    /// Splits an `x-li-auth-token` header value of the form `name:value`.
    pub fn from_auth_token(token: &str) -> Option<Self> {
        let (name, value) = token.split_once(':')?;
        Some(Self {
            name: Some(name.to_string()),
            value: Some(value.to_string()),
        })
    }
}

schema_entity! {
    pub struct InvitationRequest("invitation-request") {
        connect_type: text(String, "connect-type") required,
        authorization: capability(Authorization) optional,
    }
}

schema_entity! {
    pub struct ItemContent("item-content") {
        invitation_request: entity(InvitationRequest) optional,
    }
}

schema_entity! {
    /// A message or invitation posted to `/people/~/mailbox`.
    pub struct MailboxItem("mailbox-item") {
        recipients: entity(Recipients) required,
        subject: text(String, "subject") required,
        body: text(String, "body") required,
        item_content: entity(ItemContent) optional,
    }
}

impl MailboxItem {
    /// A plain message to the members at the given profile paths.
    pub fn message<I, P>(paths: I, subject: impl Into<String>, body: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let recipients = paths
            .into_iter()
            .map(|path| Recipient {
                person: Some(Person {
                    path: Some(path.into()),
                    ..Person::default()
                }),
            })
            .collect();
        Self {
            recipients: Some(Recipients { recipients }),
            subject: Some(subject.into()),
            body: Some(body.into()),
            item_content: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkedin_xml::{to_xml_string, validate};

    #[test]
    fn auth_token_splits_on_first_colon() {
        let auth = InvitationAuthorization::from_auth_token("NAME_SEARCH:a:b").unwrap();
        assert_eq!(auth.name.as_deref(), Some("NAME_SEARCH"));
        assert_eq!(auth.value.as_deref(), Some("a:b"));
        assert!(InvitationAuthorization::from_auth_token("nocolon").is_none());
    }

    #[test]
    fn message_body_is_complete() {
        let item = MailboxItem::message(["/people/~"], "Hi", "Hello there");
        assert!(validate(&item).is_ok());
        assert_eq!(
            to_xml_string(&item).unwrap(),
            concat!(
                "<mailbox-item>",
                "<recipients><recipient><person path=\"/people/~\"></person></recipient></recipients>",
                "<subject>Hi</subject>",
                "<body>Hello there</body>",
                "</mailbox-item>"
            )
        );
    }
}

//! Payloads posted to a member's network update stream.

use linkedin_xml::schema_entity;

schema_entity! {
    /// A comment on a network update.
    pub struct UpdateComment("update-comment") {
        comment: text(String, "comment") required,
    }
}

schema_entity! {
    /// A custom activity posted to the member's network.
    pub struct Activity("activity") {
        locale: attribute(String, "locale") optional,
        content_type: text(String, "content-type") required,
        body: text(String, "body") required,
    }
}

impl Activity {
    /// A `linkedin-html` activity in the `en_US` locale.
    pub fn html(body: impl Into<String>) -> Self {
        Self {
            locale: Some("en_US".to_string()),
            content_type: Some("linkedin-html".to_string()),
            body: Some(body.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkedin_xml::{from_xml_str, to_xml_string};

    #[test]
    fn html_body_is_escaped_and_restored() {
        let activity = Activity::html("<a href=\"x\">link</a> &amp; more");
        let xml = to_xml_string(&activity).unwrap();
        assert!(xml.starts_with(r#"<activity locale="en_US"><content-type>linkedin-html</content-type>"#));
        assert!(!xml.contains("<a href"));
        let back: Activity = from_xml_str(&xml).unwrap();
        assert_eq!(back, activity);
    }
}

//! Member profiles and the collections they appear in.
//!
//! `Person` is the central entity: the current member's own profile, each of
//! their connections, and every people-search hit are all `<person>` elements
//! carrying whichever profile fields the request asked for.

use crate::request::{ApiStandardProfileRequest, SiteStandardProfileRequest};
use crate::skills::Skills;
use linkedin_xml::schema_entity;

schema_entity! {
    pub struct Country("country") {
        code: text(String, "code") required,
    }
}

schema_entity! {
    /// A member's general location.
    pub struct Location("location") {
        name: text(String, "name") optional,
        country: entity(Country) optional,
    }
}

schema_entity! {
    /// A member profile. Every field is optional on the wire because the
    /// caller chooses which profile fields to request.
    pub struct Person("person") {
        /// Resource path of this profile, present on connection entries.
        path: attribute(String, "path") optional,
        id: normalized("id") optional,
        first_name: text(String, "first-name") optional,
        last_name: text(String, "last-name") optional,
        headline: text(String, "headline") optional,
        location: entity(Location) optional,
        industry: text(String, "industry") optional,
        /// Degree of separation from the requesting member; -1 when out of
        /// network.
        distance: text(i64, "distance") optional,
        num_connections: text(u32, "num-connections") optional,
        summary: text(String, "summary") optional,
        picture_url: text(String, "picture-url") optional,
        public_profile_url: text(String, "public-profile-url") optional,
        site_standard_profile_request: entity(SiteStandardProfileRequest) optional,
        api_standard_profile_request: entity(ApiStandardProfileRequest) optional,
        skills: entity(Skills) optional,
        connections: entity(Connections) optional,
    }
}

impl Person {
    /// First and last name joined by a space, skipping whichever is missing.
    pub fn display_name(&self) -> Option<String> {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(name), None) | (None, Some(name)) => Some(name.to_string()),
            (None, None) => None,
        }
    }
}

schema_entity! {
    /// One page of a member's first-degree connections.
    pub struct Connections("connections") {
        total: attribute(u32, "total") optional,
        start: attribute(u32, "start") optional,
        count: attribute(u32, "count") optional,
        persons: list(Person) optional,
    }
}

schema_entity! {
    /// One page of people-search results.
    pub struct People("people") {
        total: attribute(u32, "total") optional,
        start: attribute(u32, "start") optional,
        count: attribute(u32, "count") optional,
        persons: list(Person) optional,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkedin_xml::{from_xml_str, to_xml_string};

    #[test]
    fn display_name_uses_available_parts() {
        let mut person = Person {
            first_name: Some("Ada".to_string()),
            ..Person::default()
        };
        assert_eq!(person.display_name().as_deref(), Some("Ada"));
        person.last_name = Some("Lovelace".to_string());
        assert_eq!(person.display_name().as_deref(), Some("Ada Lovelace"));
        assert_eq!(Person::default().display_name(), None);
    }

    #[test]
    fn paging_attributes_round_trip() {
        let xml = concat!(
            r#"<connections total="120" start="10" count="1">"#,
            r#"<person path="/people/id=abc"><id>abc</id><first-name>Ada</first-name></person>"#,
            "</connections>"
        );
        let page: Connections = from_xml_str(xml).unwrap();
        assert_eq!((page.total, page.start, page.count), (Some(120), Some(10), Some(1)));
        assert_eq!(page.persons[0].path.as_deref(), Some("/people/id=abc"));
        assert_eq!(to_xml_string(&page).unwrap(), xml);
    }

    #[test]
    fn out_of_network_distance_is_negative() {
        let person: Person =
            from_xml_str("<person><distance>-1</distance></person>").unwrap();
        assert_eq!(person.distance, Some(-1));
    }
}

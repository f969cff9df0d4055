//! Concrete variants behind the schema's abstract field types.
//!
//! Each line binds one capability to the only entity that implements it.
//! Fields declared as `capability(..)` build that entity when their element
//! appears; the stream itself never names a variant.

use crate::messaging::InvitationAuthorization;
use crate::request::HttpHeaders;
use crate::skills::{SkillName, SkillProficiency, SkillYears};

linkedin_xml::capabilities! {
    /// Headers attached to an API profile request.
    pub Headers => HttpHeaders;
    /// A member's proficiency in a skill.
    pub Proficiency => SkillProficiency;
    /// Years of experience with a skill.
    pub Years => SkillYears;
    /// Display name of a skill.
    pub NameType => SkillName;
    /// Authorization carried by a connection invitation.
    pub Authorization => InvitationAuthorization;
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkedin_xml::resolve::{Resolved, instantiate};
    use linkedin_xml::{Capability, SchemaEntity};

    #[test]
    fn every_capability_is_bound_once() {
        let names: Vec<_> = BINDINGS.iter().map(|b| b.capability).collect();
        assert_eq!(
            names,
            vec!["Headers", "Proficiency", "Years", "NameType", "Authorization"]
        );
        assert_eq!(binding_for("Years").map(|b| b.variant_tag), Some("years"));
        assert_eq!(binding_for("Salary"), None);
    }

    #[test]
    fn resolution_is_static() {
        assert_eq!(<Resolved<Headers> as SchemaEntity>::TAG, "headers");
        assert_eq!(<Proficiency as Capability>::NAME, "Proficiency");
        let fresh: SkillYears = instantiate::<Years>();
        assert_eq!(fresh, SkillYears::default());
    }
}

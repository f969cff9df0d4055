//! Parsing and writing real-shaped API documents.

use linkedin_schema::{
    ApiStandardProfileRequest, Connections, Document, HttpHeader, HttpHeaders,
    InvitationAuthorization, InvitationRequest, ItemContent, MailboxItem, Person,
    ProficiencyLevel, Skill, SkillName, SkillProficiency, SkillYears, Skills,
};
use linkedin_xml::{
    CollectingDiagnostics, MappingError, ParseContext, Result, StructuralViolation, WriterConfig,
    from_xml_str, from_xml_str_with, to_xml_string, to_xml_string_config, validate,
};
use pretty_assertions::assert_eq;

#[test]
fn test_profile_request_with_unknown_field() -> Result<()> {
    let xml = concat!(
        "<api-standard-profile-request>",
        "<url>http://x</url>",
        "<unexpected-field>z</unexpected-field>",
        "<headers><header><name>a</name></header></headers>",
        "</api-standard-profile-request>"
    );
    let diagnostics = CollectingDiagnostics::new();
    let request: ApiStandardProfileRequest =
        from_xml_str_with(xml, &ParseContext::with_diagnostics(&diagnostics))?;

    assert_eq!(request.url.as_deref(), Some("http://x"));
    let headers = request.headers.as_ref().expect("headers parsed");
    assert_eq!(headers.headers.len(), 1);
    assert_eq!(headers.headers[0].name.as_deref(), Some("a"));
    assert_eq!(headers.headers[0].value, None);
    assert_eq!(diagnostics.unknown_elements().len(), 1);
    assert_eq!(diagnostics.unknown_elements()[0].element, "unexpected-field");

    let out = to_xml_string(&request)?;
    assert_eq!(
        out,
        concat!(
            "<api-standard-profile-request>",
            "<url>http://x</url>",
            "<headers><http-header><name>a</name></http-header></headers>",
            "</api-standard-profile-request>"
        )
    );
    assert!(!out.contains("unexpected-field"));
    Ok(())
}

#[test]
fn test_profile_request_output_order_is_fixed() -> Result<()> {
    let request = ApiStandardProfileRequest {
        headers: Some(HttpHeaders::default()),
        url: Some("http://x".to_string()),
    };
    assert_eq!(
        to_xml_string(&request)?,
        "<api-standard-profile-request><url>http://x</url><headers></headers></api-standard-profile-request>"
    );

    let reversed: ApiStandardProfileRequest = from_xml_str(
        "<api-standard-profile-request><headers/><url>http://x</url></api-standard-profile-request>",
    )?;
    assert_eq!(reversed, request);
    Ok(())
}

const PROFILE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<person>
  <id>
    a1B2c3
  </id>
  <first-name>Ada</first-name>
  <last-name>Lovelace</last-name>
  <headline>Analyst &amp; Metaphysician</headline>
  <location>
    <name>London, United Kingdom</name>
    <country>
      <code>gb</code>
    </country>
  </location>
  <industry>Computer Software</industry>
  <distance>0</distance>
  <relation-to-viewer>
    <distance>0</distance>
    <related-connections total="0"/>
  </relation-to-viewer>
  <num-connections>500</num-connections>
  <summary><![CDATA[Notes on the <Analytical Engine>.]]></summary>
  <site-standard-profile-request>
    <url>http://www.linkedin.com/profile?viewProfile=&amp;key=1</url>
  </site-standard-profile-request>
  <api-standard-profile-request>
    <url>http://api.linkedin.com/v1/people/a1B2c3:full</url>
    <headers total="1">
      <http-header>
        <name>x-li-auth-token</name>
        <value>name:Xh2k</value>
      </http-header>
    </headers>
  </api-standard-profile-request>
  <skills total="2">
    <skill>
      <id>1</id>
      <skill><name>Mathematics</name></skill>
      <proficiency><level>expert</level><name>Expert</name></proficiency>
      <years><id>   5 </id><name>5+ years</name></years>
    </skill>
    <skill>
      <id>2</id>
      <skill><name>Poetry</name></skill>
      <proficiency><level>beginner</level></proficiency>
      <years><id>1</id></years>
    </skill>
  </skills>
</person>
"#;

#[test]
fn test_full_profile() -> Result<()> {
    let diagnostics = CollectingDiagnostics::new();
    let person: Person = from_xml_str_with(PROFILE, &ParseContext::with_diagnostics(&diagnostics))?;

    assert_eq!(person.id.as_deref(), Some("a1B2c3"));
    assert_eq!(person.display_name().as_deref(), Some("Ada Lovelace"));
    assert_eq!(person.headline.as_deref(), Some("Analyst & Metaphysician"));
    assert_eq!(
        person
            .location
            .as_ref()
            .and_then(|l| l.country.as_ref())
            .and_then(|c| c.code.as_deref()),
        Some("gb")
    );
    assert_eq!(person.distance, Some(0));
    assert_eq!(person.num_connections, Some(500));
    assert_eq!(
        person.summary.as_deref(),
        Some("Notes on the <Analytical Engine>.")
    );
    assert_eq!(
        person
            .site_standard_profile_request
            .as_ref()
            .and_then(|r| r.url.as_deref()),
        Some("http://www.linkedin.com/profile?viewProfile=&key=1")
    );
    let token = person
        .api_standard_profile_request
        .as_ref()
        .and_then(|r| r.headers.as_ref())
        .and_then(|h| h.get("x-li-auth-token"));
    assert_eq!(token, Some("name:Xh2k"));

    let skills = person.skills.as_ref().expect("skills parsed");
    assert_eq!(skills.total, Some(2));
    let first = &skills.skills[0];
    assert_eq!(
        first.proficiency.as_ref().and_then(|p| p.level),
        Some(ProficiencyLevel::Expert)
    );
    assert_eq!(
        first.years.as_ref().and_then(|y| y.id.as_deref()),
        Some("5")
    );
    assert_eq!(
        skills.skills[1].skill.as_ref().and_then(|s| s.name.as_deref()),
        Some("Poetry")
    );

    let skipped: Vec<_> = diagnostics
        .unknown_elements()
        .into_iter()
        .map(|r| r.element)
        .collect();
    assert_eq!(skipped, vec!["relation-to-viewer"]);
    Ok(())
}

#[test]
fn test_full_profile_round_trip() -> Result<()> {
    let person: Person = from_xml_str(PROFILE)?;
    let compact = to_xml_string(&person)?;
    let pretty = to_xml_string_config(&person, &WriterConfig::pretty())?;
    assert!(pretty.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<person>\n  <id>"));

    let from_compact: Person = from_xml_str(&compact)?;
    let from_pretty: Person = from_xml_str(&pretty)?;
    assert_eq!(from_compact, person);
    assert_eq!(from_pretty, person);
    Ok(())
}

#[test]
fn test_skill_serializes_in_declared_order() -> Result<()> {
    let skill = Skill {
        skill: Some(SkillName {
            name: Some("Rust".to_string()),
        }),
        id: Some("9".to_string()),
        years: Some(SkillYears {
            id: Some("3".to_string()),
            name: None,
        }),
        proficiency: Some(SkillProficiency {
            level: Some(ProficiencyLevel::Advanced),
            name: None,
        }),
    };
    assert_eq!(
        to_xml_string(&skill)?,
        concat!(
            "<skill>",
            "<proficiency><level>advanced</level></proficiency>",
            "<years><id>3</id></years>",
            "<id>9</id>",
            "<skill><name>Rust</name></skill>",
            "</skill>"
        )
    );
    Ok(())
}

#[test]
fn test_validate_skill_paths() {
    let skill = Skill {
        proficiency: Some(SkillProficiency::default()),
        ..Skill::default()
    };
    match validate(&skill) {
        Err(MappingError::MissingRequired(paths)) => assert_eq!(
            paths,
            vec![
                "skill/proficiency/level",
                "skill/years",
                "skill/id",
                "skill/skill",
            ]
        ),
        other => panic!("unexpected result: {other:?}"),
    }

    let skills = Skills {
        total: Some(1),
        skills: vec![Skill::default()],
    };
    match validate(&skills) {
        Err(MappingError::MissingRequired(paths)) => {
            assert_eq!(paths[0], "skills/skill[0]/proficiency")
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_optional_field_omission() -> Result<()> {
    let header = HttpHeader {
        name: Some("a".to_string()),
        value: None,
    };
    let xml = to_xml_string(&header)?;
    assert_eq!(xml, "<http-header><name>a</name></http-header>");
    let back: HttpHeader = from_xml_str(&xml)?;
    assert_eq!(back.value, None);

    let empty = HttpHeader {
        name: Some("a".to_string()),
        value: Some(String::new()),
    };
    let xml = to_xml_string(&empty)?;
    assert_eq!(xml, "<http-header><name>a</name><value></value></http-header>");
    let back: HttpHeader = from_xml_str(&xml)?;
    assert_eq!(back.value.as_deref(), Some(""));
    Ok(())
}

#[test]
fn test_invitation_payload() -> Result<()> {
    let mut item = MailboxItem::message(["/people/id=abc"], "Invitation", "Let's connect");
    item.item_content = Some(ItemContent {
        invitation_request: Some(InvitationRequest {
            connect_type: Some("friend".to_string()),
            authorization: InvitationAuthorization::from_auth_token("NAME_SEARCH:xyz"),
        }),
    });
    let xml = to_xml_string(&item)?;
    assert!(xml.ends_with(concat!(
        "<item-content><invitation-request><connect-type>friend</connect-type>",
        "<authorization><name>NAME_SEARCH</name><value>xyz</value></authorization>",
        "</invitation-request></item-content></mailbox-item>"
    )));
    let back: MailboxItem = from_xml_str(&xml)?;
    assert_eq!(back, item);
    assert!(validate(&back).is_ok());
    Ok(())
}

#[test]
fn test_connections_page_with_nested_profiles() -> Result<()> {
    let xml = concat!(
        r#"<connections total="2" start="0" count="2">"#,
        r#"<person path="/people/id=1"><id>1</id><first-name>A</first-name>"#,
        "<picture-url>http://media/1.jpg</picture-url>",
        "<connections total=\"0\"></connections></person>",
        r#"<person path="/people/id=2"><id>2</id><first-name>B</first-name></person>"#,
        "</connections>"
    );
    let page: Connections = from_xml_str(xml)?;
    assert_eq!(page.persons.len(), 2);
    assert_eq!(
        page.persons[0].connections.as_ref().and_then(|c| c.total),
        Some(0)
    );
    assert_eq!(to_xml_string(&page)?, xml);
    Ok(())
}

#[test]
fn test_wrong_root_and_truncation() {
    let err = from_xml_str::<Person>("<people></people>").unwrap_err();
    assert!(matches!(
        err.as_structural(),
        Some(StructuralViolation::UnexpectedRoot { expected: "person", .. })
    ));

    let err = from_xml_str::<Person>("<person><location><name>x</name>").unwrap_err();
    assert!(matches!(
        err.as_structural(),
        Some(StructuralViolation::Truncated { .. })
    ));
}

#[test]
fn test_document_dispatch() -> Result<()> {
    match Document::from_xml_str(PROFILE)? {
        Document::Person(person) => assert_eq!(person.first_name.as_deref(), Some("Ada")),
        other => panic!("expected a person, got <{}>", other.tag()),
    }
    Ok(())
}

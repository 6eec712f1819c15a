use super::common::*;
use crate::form::domain::{ApplicationDraft, FieldName, Position, Skill};
use crate::form::validation::{validate, FieldError};

#[test]
fn valid_drafts_produce_no_errors() {
    for draft in [developer_draft(), designer_draft(), manager_draft(), unset_draft()] {
        let result = validate(&draft);
        assert!(result.is_valid(), "unexpected errors for {:?}: {result:?}", draft.position);
    }
}

#[test]
fn blank_full_name_is_the_only_failure() {
    let draft = ApplicationDraft {
        full_name: String::new(),
        ..developer_draft()
    };

    let result = validate(&draft);
    assert_eq!(result.len(), 1);
    assert_eq!(result.get(FieldName::FullName), Some(FieldError::Required));

    let whitespace = ApplicationDraft {
        full_name: "   ".to_string(),
        ..developer_draft()
    };
    assert_eq!(
        validate(&whitespace).get(FieldName::FullName),
        Some(FieldError::Required)
    );
}

#[test]
fn email_and_phone_formats_fail_together() {
    let draft = ApplicationDraft {
        email: "not-an-email".to_string(),
        phone_number: "12a3".to_string(),
        ..developer_draft()
    };

    let result = validate(&draft);
    assert_eq!(result.len(), 2);
    assert_eq!(result.get(FieldName::Email), Some(FieldError::InvalidFormat));
    assert_eq!(result.get(FieldName::PhoneNumber), Some(FieldError::NotNumeric));
    assert_eq!(
        result.message_for(FieldName::Email).as_deref(),
        Some("Email is invalid")
    );
    assert_eq!(
        result.message_for(FieldName::PhoneNumber).as_deref(),
        Some("Phone Number must be a valid number")
    );
}

#[test]
fn missing_email_and_phone_report_required() {
    let draft = ApplicationDraft {
        email: String::new(),
        phone_number: String::new(),
        ..developer_draft()
    };

    let result = validate(&draft);
    assert_eq!(result.get(FieldName::Email), Some(FieldError::Required));
    assert_eq!(result.get(FieldName::PhoneNumber), Some(FieldError::Required));
}

#[test]
fn whitespace_only_is_not_missing_outside_full_name() {
    let developer = ApplicationDraft {
        email: "   ".to_string(),
        phone_number: " ".to_string(),
        experience: "  ".to_string(),
        preferred_interview_time: "  ".to_string(),
        ..developer_draft()
    };
    let result = validate(&developer);
    assert_eq!(result.get(FieldName::Email), Some(FieldError::InvalidFormat));
    assert_eq!(result.get(FieldName::PhoneNumber), Some(FieldError::NotNumeric));
    assert_eq!(result.get(FieldName::Experience), Some(FieldError::NotPositive));
    assert!(!result.contains(FieldName::PreferredInterviewTime));

    let manager = ApplicationDraft {
        management_experience: "  ".to_string(),
        ..manager_draft()
    };
    assert!(validate(&manager).is_valid());
}

#[test]
fn email_pattern_matches_anywhere_in_value() {
    let draft = ApplicationDraft {
        email: "contact me at ada@example.com".to_string(),
        ..developer_draft()
    };
    assert!(!validate(&draft).contains(FieldName::Email));

    let no_dot = ApplicationDraft {
        email: "ada@example".to_string(),
        ..developer_draft()
    };
    assert_eq!(
        validate(&no_dot).get(FieldName::Email),
        Some(FieldError::InvalidFormat)
    );
}

#[test]
fn phone_rejects_spaces_and_signs() {
    for phone in ["555 1234", "+15551234", "555-1234"] {
        let draft = ApplicationDraft {
            phone_number: phone.to_string(),
            ..developer_draft()
        };
        assert_eq!(
            validate(&draft).get(FieldName::PhoneNumber),
            Some(FieldError::NotNumeric),
            "phone {phone:?} should be rejected"
        );
    }
}

#[test]
fn experience_must_be_positive_number() {
    let cases = [
        ("", Some(FieldError::Required)),
        ("0", Some(FieldError::NotPositive)),
        ("-2", Some(FieldError::NotPositive)),
        ("three", Some(FieldError::NotPositive)),
        ("NaN", Some(FieldError::NotPositive)),
        ("inf", Some(FieldError::NotPositive)),
        ("Infinity", Some(FieldError::NotPositive)),
        ("0x10", Some(FieldError::NotPositive)),
        ("  ", Some(FieldError::NotPositive)),
        ("0.5", None),
        (" 4 ", None),
    ];

    for (experience, expected) in cases {
        let draft = ApplicationDraft {
            experience: experience.to_string(),
            ..developer_draft()
        };
        assert_eq!(
            validate(&draft).get(FieldName::Experience),
            expected,
            "experience {experience:?}"
        );
    }
}

#[test]
fn designer_portfolio_is_required_and_checked() {
    let empty = ApplicationDraft {
        portfolio_url: String::new(),
        ..designer_draft()
    };
    assert_eq!(
        validate(&empty).get(FieldName::PortfolioUrl),
        Some(FieldError::Required)
    );

    for url in ["ada.design", "ftp://ada.design", "https://localhost", "https://ada .design"] {
        let draft = ApplicationDraft {
            portfolio_url: url.to_string(),
            ..designer_draft()
        };
        assert_eq!(
            validate(&draft).get(FieldName::PortfolioUrl),
            Some(FieldError::InvalidUrl),
            "url {url:?}"
        );
    }

    let valid = ApplicationDraft {
        portfolio_url: "http://me.dev".to_string(),
        ..designer_draft()
    };
    assert!(!validate(&valid).contains(FieldName::PortfolioUrl));
}

#[test]
fn management_experience_required_for_managers() {
    let missing = ApplicationDraft {
        management_experience: String::new(),
        ..manager_draft()
    };
    let result = validate(&missing);
    assert_eq!(
        result.get(FieldName::ManagementExperience),
        Some(FieldError::Required)
    );
    assert_eq!(
        result.message_for(FieldName::ManagementExperience).as_deref(),
        Some("Management Experience is required")
    );

    assert!(!validate(&manager_draft()).contains(FieldName::ManagementExperience));
}

#[test]
fn skills_must_not_be_empty() {
    let none = ApplicationDraft {
        additional_skills: skills(&[]),
        ..developer_draft()
    };
    let result = validate(&none);
    assert_eq!(
        result.get(FieldName::AdditionalSkills),
        Some(FieldError::NoSkillSelected)
    );
    assert_eq!(
        result.message_for(FieldName::AdditionalSkills).as_deref(),
        Some("At least one skill must be selected")
    );

    let css = ApplicationDraft {
        additional_skills: skills(&[Skill::Css]),
        ..developer_draft()
    };
    assert!(!validate(&css).contains(FieldName::AdditionalSkills));
}

#[test]
fn irrelevant_fields_are_never_checked() {
    let draft = ApplicationDraft {
        position: Position::Unset,
        experience: "-10".to_string(),
        portfolio_url: "nonsense".to_string(),
        management_experience: String::new(),
        ..developer_draft()
    };
    assert!(validate(&draft).is_valid());

    let developer = ApplicationDraft {
        portfolio_url: "nonsense".to_string(),
        ..developer_draft()
    };
    assert!(validate(&developer).is_valid());

    let manager = ApplicationDraft {
        experience: "zero".to_string(),
        ..manager_draft()
    };
    assert!(validate(&manager).is_valid());
}

#[test]
fn empty_draft_reports_every_always_required_field() {
    let result = validate(&ApplicationDraft::default());
    let fields: Vec<_> = result.fields().collect();
    assert_eq!(
        fields,
        vec![
            FieldName::FullName,
            FieldName::Email,
            FieldName::PhoneNumber,
            FieldName::AdditionalSkills,
            FieldName::PreferredInterviewTime,
        ]
    );
    assert_eq!(
        result.message_for(FieldName::PreferredInterviewTime).as_deref(),
        Some("Preferred Interview Time is required")
    );
}

#[test]
fn validation_is_deterministic_and_leaves_draft_untouched() {
    let draft = ApplicationDraft {
        email: "bad".to_string(),
        ..designer_draft()
    };
    let before = draft.clone();

    let first = validate(&draft);
    let second = validate(&draft);

    assert_eq!(first, second);
    assert_eq!(draft, before);
}

#[test]
fn serializes_messages_by_wire_key() {
    let draft = ApplicationDraft {
        full_name: String::new(),
        additional_skills: skills(&[]),
        ..developer_draft()
    };

    let json = serde_json::to_value(validate(&draft)).expect("serializes");
    assert_eq!(json["fullName"], "Full Name is required");
    assert_eq!(json["additionalSkills"], "At least one skill must be selected");
}

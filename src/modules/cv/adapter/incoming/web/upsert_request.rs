use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::OnceLock;
use utoipa::ToSchema;

use crate::cv::domain::CvPatch;
use crate::shared::api::FieldError;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*@[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*(\.[A-Za-z0-9_]{2,3})+$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Body of `POST /api/cv`. Every section is optional and kept as raw JSON
/// until it has been validated. An explicit `null` reads as absent.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertCVRequest {
    #[schema(value_type = Option<crate::cv::domain::PersonalDetails>)]
    pub personal_details: Option<Value>,
    #[schema(value_type = Option<crate::cv::domain::About>)]
    pub about: Option<Value>,
    #[schema(value_type = Option<Vec<crate::cv::domain::Education>>)]
    pub education: Option<Value>,
    #[schema(value_type = Option<Vec<crate::cv::domain::WorkExperience>>)]
    pub work_experience: Option<Value>,
    #[schema(value_type = Option<Vec<String>>)]
    pub skills: Option<Value>,
    #[schema(value_type = Option<Vec<String>>)]
    pub interests: Option<Value>,
    #[schema(value_type = Option<Vec<crate::cv::domain::Project>>)]
    pub projects: Option<Value>,
}

enum TextRule {
    /// Upper bound in Unicode scalar values (`char`s), not UTF-16 code units,
    /// so a character outside the BMP counts once.
    MaxChars(usize),
    Email,
}

struct TextField {
    key: &'static str,
    label: &'static str,
    rule: TextRule,
    message: &'static str,
}

const PERSONAL_DETAILS_FIELDS: [TextField; 4] = [
    TextField {
        key: "fullName",
        label: "Full name",
        rule: TextRule::MaxChars(100),
        message: "Full name must be less than 100 characters",
    },
    TextField {
        key: "phone",
        label: "Phone",
        rule: TextRule::MaxChars(20),
        message: "Phone must be less than 20 characters",
    },
    TextField {
        key: "email",
        label: "Email",
        rule: TextRule::Email,
        message: "Please enter a valid email",
    },
    TextField {
        key: "address",
        label: "Address",
        rule: TextRule::MaxChars(200),
        message: "Address must be less than 200 characters",
    },
];

const ABOUT_FIELDS: [TextField; 1] = [TextField {
    key: "profile",
    label: "Profile",
    rule: TextRule::MaxChars(1000),
    message: "Profile must be less than 1000 characters",
}];

/// JSON truthiness: `null`, `false`, `0`, `""`, `[]` and `{}` count as not supplied.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn check_text(section: &str, field: &TextField, value: Option<&Value>, errors: &mut Vec<FieldError>) {
    let path = format!("{}.{}", section, field.key);

    // Numbers and booleans are checked in the string form they are stored as.
    let stringified;
    let text = match value {
        None | Some(Value::Null) => return,
        Some(Value::String(s)) => s.as_str(),
        Some(Value::Number(n)) => {
            stringified = n.to_string();
            stringified.as_str()
        }
        Some(Value::Bool(b)) => if *b { "true" } else { "false" },
        Some(_) => {
            errors.push(FieldError::body(&path, &format!("{} must be a string", field.label)));
            return;
        }
    }
    .trim();

    if text.is_empty() {
        return;
    }

    let valid = match field.rule {
        TextRule::MaxChars(max) => text.chars().count() <= max,
        TextRule::Email => email_regex().is_match(text),
    };

    if !valid {
        errors.push(FieldError::body(&path, field.message));
    }
}

fn check_object(
    section: &str,
    label: &str,
    value: Option<&Value>,
    fields: &[TextField],
    errors: &mut Vec<FieldError>,
) {
    match value {
        None | Some(Value::Null) => {}
        Some(Value::Object(map)) => {
            for field in fields {
                check_text(section, field, map.get(field.key), errors);
            }
        }
        Some(_) => errors.push(FieldError::body(section, &format!("{} must be an object", label))),
    }
}

fn check_array(section: &str, label: &str, value: Option<&Value>, errors: &mut Vec<FieldError>) {
    if let Some(v) = value {
        if !v.is_array() {
            errors.push(FieldError::body(section, &format!("{} must be an array", label)));
        }
    }
}

fn supplied(value: Option<Value>) -> Option<Value> {
    value.filter(is_truthy)
}

impl UpsertCVRequest {
    /// Runs every field rule and returns all violations, in field order.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        check_object(
            "personalDetails",
            "Personal details",
            self.personal_details.as_ref(),
            &PERSONAL_DETAILS_FIELDS,
            &mut errors,
        );
        check_object("about", "About", self.about.as_ref(), &ABOUT_FIELDS, &mut errors);

        check_array("education", "Education", self.education.as_ref(), &mut errors);
        check_array(
            "workExperience",
            "Work experience",
            self.work_experience.as_ref(),
            &mut errors,
        );
        check_array("skills", "Skills", self.skills.as_ref(), &mut errors);
        check_array("interests", "Interests", self.interests.as_ref(), &mut errors);
        check_array("projects", "Projects", self.projects.as_ref(), &mut errors);

        errors
    }

    /// Keeps only the truthy sections; everything else means "leave as is".
    pub fn into_patch(self) -> CvPatch {
        CvPatch {
            personal_details: supplied(self.personal_details),
            about: supplied(self.about),
            education: supplied(self.education),
            work_experience: supplied(self.work_experience),
            skills: supplied(self.skills),
            interests: supplied(self.interests),
            projects: supplied(self.projects),
        }
    }
}

//! Typed form submissions and their validation.
//!
//! Every single-choice field is an `Option`; `None` means the participant left
//! the placeholder selected. Validation collects every problem at once and, on
//! success, yields the answers keyed the way they are stored.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use super::catalog::{
    is_feedback_statement, is_personality_statement, FEEDBACK_SECTIONS,
    PERSONALITY_ATTENTION_CHECK, PERSONALITY_SECTIONS,
};
use super::choices::{AiFamiliarity, Education, Gender, LikertChoice, SamRating, WritingFrequency};
use super::validation::{FieldError, FormErrors};
use super::Answers;
use crate::domain::foundation::ParticipantId;

pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 120;

/// Consent checkbox plus participant id on the welcome page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConsentForm {
    #[serde(default)]
    pub consent: bool,
    #[serde(default)]
    pub participant_id: Option<String>,
}

impl ConsentForm {
    pub fn validate(&self) -> Result<ParticipantId, FormErrors> {
        if !self.consent {
            return Err(FieldError::missing(
                "consent",
                "You must agree to the consent form to proceed.",
            )
            .into());
        }

        self.participant_id
            .as_deref()
            .and_then(|raw| ParticipantId::new(raw).ok())
            .ok_or_else(|| {
                FieldError::missing("participant_id", "Please enter your Prolific ID to proceed.")
                    .into()
            })
    }
}

/// Administrator password entry on the welcome page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminLoginForm {
    #[serde(default)]
    pub password: String,
}

/// Demographic questions plus pre-task SAM ratings.
///
/// Placeholders and unrecognized labels deserialize to `None`, and integers
/// keep their raw value, so `validate()` reports them per field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DemographicsForm {
    #[serde(default, deserialize_with = "lenient_integer")]
    pub age: Option<i64>,
    #[serde(default, deserialize_with = "lenient_choice")]
    pub gender: Option<Gender>,
    #[serde(default, deserialize_with = "lenient_choice")]
    pub education: Option<Education>,
    #[serde(default)]
    pub education_other: Option<String>,
    #[serde(default)]
    pub religion: Option<String>,
    #[serde(default, deserialize_with = "lenient_choice")]
    pub experience_with_ai: Option<AiFamiliarity>,
    #[serde(default, deserialize_with = "lenient_choice")]
    pub creative_writing_frequency: Option<WritingFrequency>,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub valence: Option<i64>,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub arousal: Option<i64>,
}

impl DemographicsForm {
    pub fn validate(&self) -> Result<Answers, FormErrors> {
        let mut errors = FormErrors::new();
        let mut answers = Answers::new();

        match self.age {
            None => errors.push(FieldError::missing("age", "Please enter your age.")),
            Some(age) if !(i64::from(MIN_AGE)..=i64::from(MAX_AGE)).contains(&age) => {
                errors.push(FieldError::out_of_range(
                    "age",
                    format!("Age must be between {MIN_AGE} and {MAX_AGE}."),
                ))
            }
            Some(age) => {
                answers.insert("age".into(), Value::from(age));
            }
        }

        match self.gender {
            Some(g) => insert_label(&mut answers, "gender", g.label()),
            None => errors.push(FieldError::missing("gender", "Please select your gender.")),
        }

        match self.education {
            Some(e) => {
                insert_label(&mut answers, "education", e.label());
                if e.requires_specification() {
                    match non_blank(self.education_other.as_deref()) {
                        Some(text) => insert_label(&mut answers, "education_other", text),
                        None => errors.push(FieldError::missing(
                            "education_other",
                            "Please specify your education level.",
                        )),
                    }
                } else {
                    insert_label(&mut answers, "education_other", "");
                }
            }
            None => errors.push(FieldError::missing(
                "education",
                "Please select your highest level of education.",
            )),
        }

        insert_label(
            &mut answers,
            "religion",
            self.religion.as_deref().map(str::trim).unwrap_or_default(),
        );

        match self.experience_with_ai {
            Some(f) => insert_label(&mut answers, "experience_with_ai", f.label()),
            None => errors.push(FieldError::missing(
                "experience_with_ai",
                "Please indicate your familiarity with AI tools.",
            )),
        }

        match self.creative_writing_frequency {
            Some(f) => insert_label(&mut answers, "creative_writing_frequency", f.label()),
            None => errors.push(FieldError::missing(
                "creative_writing_frequency",
                "Please indicate how often you engage in creative writing.",
            )),
        }

        check_sam(&mut errors, &mut answers, "valence", self.valence);
        check_sam(&mut errors, &mut answers, "arousal", self.arousal);

        errors.into_result(answers)
    }
}

/// Likert answers for the four personality matrices, keyed by statement.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonalityForm {
    #[serde(default, deserialize_with = "lenient_choices")]
    pub responses: BTreeMap<String, Option<LikertChoice>>,
}

impl PersonalityForm {
    pub fn validate(&self) -> Result<Answers, FormErrors> {
        let mut errors = FormErrors::new();
        let mut answers = Answers::new();

        reject_unknown(&mut errors, &self.responses, is_personality_statement);
        collect_matrix(
            &mut errors,
            &mut answers,
            &self.responses,
            PERSONALITY_SECTIONS.iter().flat_map(|s| s.statements.iter().copied()),
            "Please answer all questions before proceeding.",
        );

        let check = PERSONALITY_ATTENTION_CHECK;
        if let Some(Some(answer)) = self.responses.get(check.statement) {
            if *answer != check.expected {
                errors.push(FieldError::attention_check(
                    check.statement,
                    "Attention check failed. Please review your answers carefully and select 'Somewhat Agree' for the attention check question.",
                ));
            }
        }

        errors.into_result(answers)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryForm {
    #[serde(default)]
    pub summary: String,
}

impl SummaryForm {
    /// Returns the trimmed summary text.
    pub fn validate(&self) -> Result<String, FormErrors> {
        non_blank(Some(&self.summary))
            .map(str::to_string)
            .ok_or_else(|| {
                FieldError::missing("summary", "Please provide a summary before proceeding.").into()
            })
    }
}

/// Post-task feedback matrices plus after-task SAM ratings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackForm {
    #[serde(default, deserialize_with = "lenient_choices")]
    pub responses: BTreeMap<String, Option<LikertChoice>>,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub arousal_post: Option<i64>,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub valence_post: Option<i64>,
}

impl FeedbackForm {
    pub fn validate(&self) -> Result<Answers, FormErrors> {
        let mut errors = FormErrors::new();
        let mut answers = Answers::new();

        reject_unknown(&mut errors, &self.responses, is_feedback_statement);
        collect_matrix(
            &mut errors,
            &mut answers,
            &self.responses,
            FEEDBACK_SECTIONS.iter().flat_map(|s| s.statements.iter().copied()),
            "Please answer all feedback questions before proceeding.",
        );
        check_sam(&mut errors, &mut answers, "arousal_post", self.arousal_post);
        check_sam(&mut errors, &mut answers, "valence_post", self.valence_post);

        errors.into_result(answers)
    }
}

/// Reads a single-choice answer, treating placeholders and unknown labels as
/// unanswered.
fn lenient_choice<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| serde_json::from_value(value).ok()))
}

fn lenient_choices<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, Option<LikertChoice>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(statement, value)| (statement, serde_json::from_value(value).ok()))
        .collect())
}

/// Reads an integer answer from a number or numeric string.
///
/// Values too large for `i64` saturate so they still fail the range check.
fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_u64().map(|_| i64::MAX)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}

fn insert_label(answers: &mut Answers, key: &str, label: &str) {
    answers.insert(key.to_string(), Value::String(label.to_string()));
}

fn check_sam(errors: &mut FormErrors, answers: &mut Answers, key: &str, value: Option<i64>) {
    let rating = value.map(|v| u8::try_from(v).ok().and_then(|v| SamRating::new(v).ok()));
    match rating {
        Some(None) => errors.push(FieldError::out_of_range(
            key,
            format!("Rating must be between {} and {}.", SamRating::MIN, SamRating::MAX),
        )),
        None => errors.push(FieldError::missing(key, "Please select a rating.")),
        Some(Some(rating)) => {
            answers.insert(key.to_string(), Value::from(rating.value()));
        }
    }
}

fn reject_unknown(
    errors: &mut FormErrors,
    responses: &BTreeMap<String, Option<LikertChoice>>,
    known: fn(&str) -> bool,
) {
    for statement in responses.keys().filter(|s| !known(s)) {
        errors.push(FieldError::invalid(statement.as_str(), "Unknown statement."));
    }
}

fn collect_matrix<'a>(
    errors: &mut FormErrors,
    answers: &mut Answers,
    responses: &BTreeMap<String, Option<LikertChoice>>,
    statements: impl Iterator<Item = &'a str>,
    missing_message: &str,
) {
    for statement in statements {
        match responses.get(statement).copied().flatten() {
            Some(choice) => insert_label(answers, statement, choice.label()),
            None => errors.push(FieldError::missing(statement, missing_message)),
        }
    }
}

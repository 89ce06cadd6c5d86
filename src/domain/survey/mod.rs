//! Survey module - Questionnaire catalogs, typed forms and validation.

pub mod catalog;
mod choices;
#[cfg(test)]
pub(crate) mod fixtures;
mod forms;
mod validation;

pub use choices::{AiFamiliarity, Education, Gender, LikertChoice, SamRating, WritingFrequency};
pub use forms::{
    AdminLoginForm, ConsentForm, DemographicsForm, FeedbackForm, PersonalityForm, SummaryForm,
    MAX_AGE, MIN_AGE,
};
pub use validation::{FieldError, FieldErrorKind, FormErrors};

use std::collections::BTreeMap;

/// Answers keyed by question, in stable key order.
pub type Answers = BTreeMap<String, serde_json::Value>;

/// Merges `incoming` into `target`; later answers replace earlier ones.
pub fn merge_answers(target: &mut Answers, incoming: Answers) {
    target.extend(incoming);
}

//! Single-choice answer types used by the questionnaires.
//!
//! Each choice deserializes from its snake_case tag or from its display label,
//! and is stored in answer maps under its display label.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Five-point agreement scale for the matrix questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LikertChoice {
    #[serde(alias = "Strongly Disagree")]
    StronglyDisagree,
    #[serde(alias = "Somewhat Disagree")]
    SomewhatDisagree,
    #[serde(alias = "Neither Agree nor Disagree", alias = "Neither Agree or Disagree")]
    Neutral,
    #[serde(alias = "Somewhat Agree")]
    SomewhatAgree,
    #[serde(alias = "Strongly Agree")]
    StronglyAgree,
}

impl LikertChoice {
    /// All choices in scale order.
    pub const ALL: [LikertChoice; 5] = [
        LikertChoice::StronglyDisagree,
        LikertChoice::SomewhatDisagree,
        LikertChoice::Neutral,
        LikertChoice::SomewhatAgree,
        LikertChoice::StronglyAgree,
    ];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            LikertChoice::StronglyDisagree => "Strongly Disagree",
            LikertChoice::SomewhatDisagree => "Somewhat Disagree",
            LikertChoice::Neutral => "Neither Agree nor Disagree",
            LikertChoice::SomewhatAgree => "Somewhat Agree",
            LikertChoice::StronglyAgree => "Strongly Agree",
        }
    }
}

impl fmt::Display for LikertChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[serde(alias = "Male")]
    Male,
    #[serde(alias = "Female")]
    Female,
    #[serde(alias = "Non-binary / third gender")]
    NonBinary,
    #[serde(alias = "Prefer not to say")]
    PreferNotToSay,
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Male,
        Gender::Female,
        Gender::NonBinary,
        Gender::PreferNotToSay,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::NonBinary => "Non-binary / third gender",
            Gender::PreferNotToSay => "Prefer not to say",
        }
    }
}

/// Highest completed education level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Education {
    #[serde(alias = "Highschool")]
    Highschool,
    #[serde(alias = "Bachelor's Degree")]
    Bachelors,
    #[serde(alias = "Master's degree")]
    Masters,
    #[serde(alias = "Doctorate")]
    Doctorate,
    #[serde(alias = "Other")]
    Other,
}

impl Education {
    pub const ALL: [Education; 5] = [
        Education::Highschool,
        Education::Bachelors,
        Education::Masters,
        Education::Doctorate,
        Education::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Education::Highschool => "Highschool",
            Education::Bachelors => "Bachelor's Degree",
            Education::Masters => "Master's degree",
            Education::Doctorate => "Doctorate",
            Education::Other => "Other",
        }
    }

    /// Returns true if this level needs a free-text specification.
    pub fn requires_specification(&self) -> bool {
        matches!(self, Education::Other)
    }
}

/// Familiarity with AI tools like ChatGPT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiFamiliarity {
    #[serde(alias = "Not familiar")]
    NotFamiliar,
    #[serde(alias = "Somewhat familiar")]
    SomewhatFamiliar,
    #[serde(alias = "Very familiar")]
    VeryFamiliar,
}

impl AiFamiliarity {
    pub const ALL: [AiFamiliarity; 3] = [
        AiFamiliarity::NotFamiliar,
        AiFamiliarity::SomewhatFamiliar,
        AiFamiliarity::VeryFamiliar,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AiFamiliarity::NotFamiliar => "Not familiar",
            AiFamiliarity::SomewhatFamiliar => "Somewhat familiar",
            AiFamiliarity::VeryFamiliar => "Very familiar",
        }
    }
}

/// How often the participant writes creatively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WritingFrequency {
    #[serde(alias = "Never")]
    Never,
    #[serde(alias = "Sometimes")]
    Sometimes,
    #[serde(alias = "Often")]
    Often,
}

impl WritingFrequency {
    pub const ALL: [WritingFrequency; 3] = [
        WritingFrequency::Never,
        WritingFrequency::Sometimes,
        WritingFrequency::Often,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WritingFrequency::Never => "Never",
            WritingFrequency::Sometimes => "Sometimes",
            WritingFrequency::Often => "Often",
        }
    }
}

/// Self-Assessment Manikin rating on a 1 to 9 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SamRating(u8);

impl SamRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 9;

    /// Creates a rating, returning an error outside `1..=9`.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "sam_rating",
                Self::MIN as i32,
                Self::MAX as i32,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for SamRating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SamRating> for u8 {
    fn from(rating: SamRating) -> Self {
        rating.0
    }
}

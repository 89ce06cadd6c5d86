//! Fully answered forms for tests.

use super::catalog::{ATTENTION_CHECK_STATEMENT, FEEDBACK_SECTIONS, PERSONALITY_SECTIONS};
use super::{
    AiFamiliarity, DemographicsForm, Education, FeedbackForm, Gender, LikertChoice,
    PersonalityForm, WritingFrequency,
};

pub fn complete_demographics() -> DemographicsForm {
    DemographicsForm {
        age: Some(30),
        gender: Some(Gender::Female),
        education: Some(Education::Masters),
        education_other: None,
        religion: None,
        experience_with_ai: Some(AiFamiliarity::VeryFamiliar),
        creative_writing_frequency: Some(WritingFrequency::Sometimes),
        valence: Some(5),
        arousal: Some(3),
    }
}

pub fn complete_personality() -> PersonalityForm {
    let responses = PERSONALITY_SECTIONS
        .iter()
        .flat_map(|s| s.statements.iter())
        .map(|s| {
            let choice = if *s == ATTENTION_CHECK_STATEMENT {
                LikertChoice::SomewhatAgree
            } else {
                LikertChoice::StronglyAgree
            };
            (s.to_string(), Some(choice))
        })
        .collect();
    PersonalityForm { responses }
}

pub fn complete_feedback() -> FeedbackForm {
    let responses = FEEDBACK_SECTIONS
        .iter()
        .flat_map(|s| s.statements.iter())
        .map(|s| (s.to_string(), Some(LikertChoice::Neutral)))
        .collect();
    FeedbackForm {
        responses,
        arousal_post: Some(4),
        valence_post: Some(6),
    }
}

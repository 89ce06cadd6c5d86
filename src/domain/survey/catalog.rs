//! Question catalog for every questionnaire page.
//!
//! Matrix statements double as answer keys in the stored response maps, so
//! their wording must stay stable across releases.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashSet;

use super::choices::LikertChoice;

/// A titled group of Likert statements.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MatrixSection {
    pub title: &'static str,
    pub statements: &'static [&'static str],
}

/// A statement whose answer must equal a fixed value.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AttentionCheck {
    pub statement: &'static str,
    pub expected: LikertChoice,
}

pub const ATTENTION_CHECK_STATEMENT: &str =
    "If you're reading this carefully, select 'Somewhat Agree'.";

pub const PERSONALITY_ATTENTION_CHECK: AttentionCheck = AttentionCheck {
    statement: ATTENTION_CHECK_STATEMENT,
    expected: LikertChoice::SomewhatAgree,
};

pub const PERSONALITY_SECTIONS: &[MatrixSection] = &[
    MatrixSection {
        title: "Please rate the following statement: I see myself as someone who...",
        statements: &[
            "is reserved",
            "is generally trusting",
            "tends to be lazy",
            "is relaxed, handles stress well",
            "has few artistic interests",
            "is outgoing, sociable",
            "tends to find faults with others",
            "does a thorough job",
            ATTENTION_CHECK_STATEMENT,
            "gets nervous easily",
        ],
    },
    MatrixSection {
        title: "Work Style Preference",
        statements: &[
            "I prefer to work with other in a group, rather than working alone",
            "If given a choice: I would rather do a job where I can work alone, rather do a job where I have to work with others",
            "Working in a group is better than working alone",
        ],
    },
    MatrixSection {
        title: "Please rate each statement regarding Artificial Intelligence (AI) - Trust and Reliance",
        statements: &[
            "Generally I would trust AI",
            "AI can help me solve many problems",
            "I think it is a good idea to rely on AI for help",
            "I may not trust information I get from AI",
            "AI is reliable",
            "I would rely on AI",
        ],
    },
    MatrixSection {
        title: "Please rate each statement regarding Artificial Intelligence (AI) - Perceived Creativity",
        statements: &[
            "AI systems can be truly creative.",
            "AI can generate novel and innovative ideas.",
            "AI can understand and express emotions in a creative context.",
            "Collaborating with AI can enhance my own creativity.",
            "AI can contribute original content to a creative project.",
        ],
    },
];

pub const FEEDBACK_SECTIONS: &[MatrixSection] = &[
    MatrixSection {
        title: "Feedback on the Writing Process",
        statements: &[
            "I was satisfied with the writing process",
            "I enjoyed the writing process",
            "I found it easy to complete the writing process",
            "I was able to express my creative goals during the writing process",
        ],
    },
    MatrixSection {
        title: "Feedback on the Final Outcome",
        statements: &[
            "I am satisfied with the quality of the final outcome",
            "I feel a sense of ownership of the final outcome",
            "I am proud of the final outcome",
            "I found the final outcome to be unique",
        ],
    },
    MatrixSection {
        title: "Accountability of Final Outcome",
        statements: &[
            "I'm willing to take the responsibility if my product is criticized for containing deceptive content.",
            "I'm willing to take the responsibility if my product is criticized for containing content that is highly similar to someone else's writing.",
            "I'm willing to take the responsibility if my product is criticized for containing content that invades someone else's privacy.",
            "I'm willing to take the responsibility if my product is criticized for exhibiting bias and discrimination.",
        ],
    },
];

static PERSONALITY_STATEMENTS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| statements_of(PERSONALITY_SECTIONS));

static FEEDBACK_STATEMENTS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| statements_of(FEEDBACK_SECTIONS));

fn statements_of(sections: &[MatrixSection]) -> HashSet<&'static str> {
    sections
        .iter()
        .flat_map(|s| s.statements.iter().copied())
        .collect()
}

/// Returns true if `statement` belongs to the personality matrices.
pub fn is_personality_statement(statement: &str) -> bool {
    PERSONALITY_STATEMENTS.contains(statement)
}

/// Returns true if `statement` belongs to the feedback matrices.
pub fn is_feedback_statement(statement: &str) -> bool {
    FEEDBACK_STATEMENTS.contains(statement)
}

/// Question wording for the demographic page, keyed by answer key.
pub const DEMOGRAPHIC_QUESTIONS: &[(&str, &str)] = &[
    ("age", "How old are you?"),
    ("gender", "Which gender do you identify with?"),
    ("education", "What is the highest level of education that you have completed?"),
    ("education_other", "Please specify your education level:"),
    ("religion", "Which religion do you align with, if any? (Optional)"),
    ("experience_with_ai", "How familiar are you with AI tools like ChatGPT?"),
    (
        "creative_writing_frequency",
        "How often do you engage in creative writing (e.g., stories, blogs)?",
    ),
    ("valence", "Valence (Unpleasant ← → Pleasant)"),
    ("arousal", "Arousal (Calm ← → Excited)"),
];

/// Post-task SAM questions on the feedback page.
pub const FEEDBACK_SAM_QUESTIONS: &[(&str, &str)] = &[
    ("arousal_post", "Arousal after task (Calm ← → Excited)"),
    ("valence_post", "Valence after task (Unpleasant ← → Pleasant)"),
];

//! Page view models.
//!
//! `render` picks exactly one render function per page. Views carry static
//! page content plus whatever session state the page displays.

use serde::Serialize;

use super::page::{Page, PageAction};
use super::session::StudySession;
use crate::domain::conversation::{prompts::TOPIC, TranscriptEntry, COMPLETION_NOTICE};
use crate::domain::foundation::{SessionId, StateMachine};
use crate::domain::survey::catalog::{
    MatrixSection, DEMOGRAPHIC_QUESTIONS, FEEDBACK_SAM_QUESTIONS, FEEDBACK_SECTIONS,
    PERSONALITY_SECTIONS,
};
use crate::domain::survey::{
    AiFamiliarity, Education, Gender, LikertChoice, SamRating, WritingFrequency, MAX_AGE, MIN_AGE,
};

/// Warning attached to every view while chat is disabled.
pub const CHAT_DISABLED_WARNING: &str =
    "No completion service API key is configured. Chat functionality is disabled.";

pub const CONSENT_TEXT: &str = "You are invited to participate in a research study exploring how people \
engage in creative collaboration with AI systems like ChatGPT. If you agree to take part, you will \
complete a brief pre-activity survey, brainstorm a fictional scenario with an AI assistant, and \
complete a post-activity survey about the experience. Your survey answers and your conversation \
will be stored for analysis by the study team only. Participation is voluntary and you may \
withdraw at any point without penalty.";

pub const CONSENT_CHECKBOX_LABEL: &str = "I have read and understand the above information and consent to participate in this research study.";

pub const INSTRUCTIONS_TEXT: &str = "Let's imagine something wild together. How would that change \
cities, society, and daily life? Brainstorm ideas back and forth with an AI assistant for a \
limited number of turns. After the brainstorming session concludes, you will be asked to write a \
short summary of your discussion.";

pub const SUMMARY_PROMPT: &str = "Please summarize your discussion:";

pub const THANK_YOU_MESSAGE: &str =
    "Thank you for completing the survey, now you may close this window.";

/// Rendering inputs that do not live in the session.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    pub chat_available: bool,
}

/// A rendered page.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub session_id: SessionId,
    pub page: Page,
    pub title: &'static str,
    pub actions: Vec<PageAction>,
    pub warnings: Vec<&'static str>,
    pub content: PageContent,
}

/// One single-choice question with its options.
#[derive(Debug, Clone, Serialize)]
pub struct ChoiceQuestion {
    pub key: &'static str,
    pub prompt: &'static str,
    pub options: Vec<&'static str>,
}

/// A numeric rating question with inclusive bounds.
#[derive(Debug, Clone, Serialize)]
pub struct RangeQuestion {
    pub key: &'static str,
    pub prompt: &'static str,
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageContent {
    Welcome {
        consent_text: &'static str,
        consent_label: &'static str,
    },
    Demographics {
        ranges: Vec<RangeQuestion>,
        choices: Vec<ChoiceQuestion>,
        free_text: Vec<ChoiceQuestion>,
    },
    Personality {
        scale: Vec<&'static str>,
        sections: &'static [MatrixSection],
    },
    Instructions {
        topic: &'static str,
        text: &'static str,
    },
    Brainstorm {
        messages: Vec<TranscriptEntry>,
        turns_used: u32,
        turn_limit: u32,
        input_enabled: bool,
        notice: Option<&'static str>,
        can_advance: bool,
    },
    Summary {
        prompt: &'static str,
        text: String,
    },
    Feedback {
        scale: Vec<&'static str>,
        sections: &'static [MatrixSection],
        ratings: Vec<RangeQuestion>,
    },
    ThankYou {
        message: &'static str,
    },
    AdminDashboard {
        search_hint: &'static str,
    },
}

/// Renders the session's current page.
pub fn render(session: &StudySession, context: RenderContext) -> PageView {
    let page = session.page();
    let content = match page {
        Page::Welcome => render_welcome(),
        Page::Demographics => render_demographics(),
        Page::Personality => render_personality(),
        Page::Instructions => render_instructions(),
        Page::Brainstorm => render_brainstorm(session),
        Page::Summary => render_summary(session),
        Page::Feedback => render_feedback(),
        Page::ThankYou => render_thank_you(),
        Page::AdminDashboard => render_admin_dashboard(),
    };

    let mut warnings = Vec::new();
    if !context.chat_available {
        warnings.push(CHAT_DISABLED_WARNING);
    }

    PageView {
        session_id: session.id(),
        page,
        title: page.title(),
        actions: visible_actions(session),
        warnings,
        content,
    }
}

fn visible_actions(session: &StudySession) -> Vec<PageAction> {
    session
        .page()
        .valid_actions()
        .into_iter()
        .filter(|action| *action != PageAction::FinishBrainstorm || session.chat().is_complete())
        .collect()
}

fn render_welcome() -> PageContent {
    PageContent::Welcome {
        consent_text: CONSENT_TEXT,
        consent_label: CONSENT_CHECKBOX_LABEL,
    }
}

fn render_demographics() -> PageContent {
    let prompt = |key: &str| {
        DEMOGRAPHIC_QUESTIONS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, p)| *p)
            .unwrap_or_default()
    };
    let sam = |key: &'static str| RangeQuestion {
        key,
        prompt: prompt(key),
        min: SamRating::MIN as u32,
        max: SamRating::MAX as u32,
    };
    let choice = |key: &'static str, options: Vec<&'static str>| ChoiceQuestion {
        key,
        prompt: prompt(key),
        options,
    };

    PageContent::Demographics {
        ranges: vec![
            RangeQuestion {
                key: "age",
                prompt: prompt("age"),
                min: MIN_AGE,
                max: MAX_AGE,
            },
            sam("valence"),
            sam("arousal"),
        ],
        choices: vec![
            choice("gender", Gender::ALL.iter().map(|g| g.label()).collect()),
            choice("education", Education::ALL.iter().map(|e| e.label()).collect()),
            choice(
                "experience_with_ai",
                AiFamiliarity::ALL.iter().map(|f| f.label()).collect(),
            ),
            choice(
                "creative_writing_frequency",
                WritingFrequency::ALL.iter().map(|f| f.label()).collect(),
            ),
        ],
        free_text: vec![choice("education_other", vec![]), choice("religion", vec![])],
    }
}

fn likert_scale() -> Vec<&'static str> {
    LikertChoice::ALL.iter().map(|c| c.label()).collect()
}

fn render_personality() -> PageContent {
    PageContent::Personality {
        scale: likert_scale(),
        sections: PERSONALITY_SECTIONS,
    }
}

fn render_instructions() -> PageContent {
    PageContent::Instructions {
        topic: TOPIC,
        text: INSTRUCTIONS_TEXT,
    }
}

fn render_brainstorm(session: &StudySession) -> PageContent {
    let chat = session.chat();
    let complete = chat.is_complete();
    PageContent::Brainstorm {
        messages: chat.visible_entries().cloned().collect(),
        turns_used: chat.turns_used(),
        turn_limit: chat.limit(),
        input_enabled: !complete,
        notice: complete.then_some(COMPLETION_NOTICE),
        can_advance: complete,
    }
}

fn render_summary(session: &StudySession) -> PageContent {
    PageContent::Summary {
        prompt: SUMMARY_PROMPT,
        text: session.summary_text().to_string(),
    }
}

fn render_feedback() -> PageContent {
    PageContent::Feedback {
        scale: likert_scale(),
        sections: FEEDBACK_SECTIONS,
        ratings: FEEDBACK_SAM_QUESTIONS
            .iter()
            .map(|&(key, prompt)| RangeQuestion {
                key,
                prompt,
                min: SamRating::MIN as u32,
                max: SamRating::MAX as u32,
            })
            .collect(),
    }
}

fn render_thank_you() -> PageContent {
    PageContent::ThankYou {
        message: THANK_YOU_MESSAGE,
    }
}

fn render_admin_dashboard() -> PageContent {
    PageContent::AdminDashboard {
        search_hint: "Search by Prolific ID (leave empty for all)",
    }
}

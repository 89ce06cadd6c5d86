//! Page tags and the page transition table.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// One screen of the study flow.
///
/// The page number is the wire representation. Any number that does not name
/// a page resolves to `Welcome`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum Page {
    #[default]
    Welcome,
    Demographics,
    Personality,
    Instructions,
    Brainstorm,
    Summary,
    Feedback,
    ThankYou,
    AdminDashboard,
}

impl Page {
    pub fn number(&self) -> u32 {
        match self {
            Page::Welcome => 0,
            Page::Demographics => 1,
            Page::Personality => 2,
            Page::Instructions => 3,
            Page::Brainstorm => 4,
            Page::Summary => 5,
            Page::Feedback => 6,
            Page::ThankYou => 7,
            Page::AdminDashboard => 99,
        }
    }

    pub fn from_number(number: u32) -> Self {
        match number {
            1 => Page::Demographics,
            2 => Page::Personality,
            3 => Page::Instructions,
            4 => Page::Brainstorm,
            5 => Page::Summary,
            6 => Page::Feedback,
            7 => Page::ThankYou,
            99 => Page::AdminDashboard,
            _ => Page::Welcome,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Welcome => "Welcome to the Study",
            Page::Demographics => "Demographic Questions",
            Page::Personality => "Personality and Preferences",
            Page::Instructions => "Instructions for the Brainstorming Task",
            Page::Brainstorm => "Brainstorming Session",
            Page::Summary => "Summary",
            Page::Feedback => "Feedback",
            Page::ThankYou => "Thank You!",
            Page::AdminDashboard => "Admin Dashboard",
        }
    }
}

impl From<u32> for Page {
    fn from(number: u32) -> Self {
        Page::from_number(number)
    }
}

impl From<Page> for u32 {
    fn from(page: Page) -> Self {
        page.number()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Action that moves the session from one page to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageAction {
    StartParticipant,
    AdminLogin,
    SubmitDemographics,
    SubmitPersonality,
    StartBrainstorm,
    FinishBrainstorm,
    SubmitSummary,
    SubmitFeedback,
    Logout,
}

const TRANSITIONS: &[(Page, PageAction, Page)] = &[
    (Page::Welcome, PageAction::StartParticipant, Page::Demographics),
    (Page::Welcome, PageAction::AdminLogin, Page::AdminDashboard),
    (Page::Demographics, PageAction::SubmitDemographics, Page::Personality),
    (Page::Personality, PageAction::SubmitPersonality, Page::Instructions),
    (Page::Instructions, PageAction::StartBrainstorm, Page::Brainstorm),
    (Page::Brainstorm, PageAction::FinishBrainstorm, Page::Summary),
    (Page::Summary, PageAction::SubmitSummary, Page::Feedback),
    (Page::Feedback, PageAction::SubmitFeedback, Page::ThankYou),
    (Page::AdminDashboard, PageAction::Logout, Page::Welcome),
];

/// Returns the complete transition table.
pub fn transitions() -> &'static [(Page, PageAction, Page)] {
    TRANSITIONS
}

impl StateMachine for Page {
    type Action = PageAction;

    fn next(&self, action: PageAction) -> Option<Self> {
        TRANSITIONS
            .iter()
            .find(|(from, a, _)| from == self && *a == action)
            .map(|(_, _, to)| *to)
    }

    fn valid_actions(&self) -> Vec<PageAction> {
        TRANSITIONS
            .iter()
            .filter(|(from, _, _)| from == self)
            .map(|(_, action, _)| *action)
            .collect()
    }
}

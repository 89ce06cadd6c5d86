//! Study module - Page flow, session state and page views.

mod page;
mod session;
mod view;

pub use page::{transitions, Page, PageAction};
pub use session::{SessionError, StudySession};
pub use view::{
    render, ChoiceQuestion, PageContent, PageView, RangeQuestion, RenderContext,
    CHAT_DISABLED_WARNING, THANK_YOU_MESSAGE,
};

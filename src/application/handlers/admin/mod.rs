//! Administrator queries over persisted submissions.
//!
//! Both queries require the requesting session to be on the admin dashboard.

mod export_submissions;
mod list_submissions;

pub use export_submissions::{
    ExportSubmissionsHandler, ExportSubmissionsQuery, ExportSubmissionsResult,
};
pub use list_submissions::{ListSubmissionsHandler, ListSubmissionsQuery, ListSubmissionsResult};

use crate::application::handlers::{load_session, StudyError};
use crate::domain::foundation::SessionId;
use crate::domain::study::Page;
use crate::ports::SessionRepository;

async fn require_admin(
    repository: &dyn SessionRepository,
    session_id: SessionId,
) -> Result<(), StudyError> {
    let session = load_session(repository, session_id).await?;
    if session.page() != Page::AdminDashboard {
        tracing::warn!(%session_id, page = %session.page(), "Admin query refused");
        return Err(StudyError::Forbidden);
    }
    Ok(())
}

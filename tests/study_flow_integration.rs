//! End-to-end study flow through the application handlers.
//!
//! Uses the in-memory session repository, the mock completion provider and a
//! JSON submission store in a temporary directory.

use std::sync::Arc;

use secrecy::Secret;
use tempfile::TempDir;

use cocreate_study::adapters::ai::MockAIProvider;
use cocreate_study::adapters::storage::{InMemorySessionRepository, JsonSubmissionStore};
use cocreate_study::application::{
    ChatFailure, CreateSessionHandler, ExportSubmissionsHandler, ExportSubmissionsQuery,
    ListSubmissionsHandler, ListSubmissionsQuery, PageSubmission, SendChatMessageCommand,
    SendChatMessageHandler, StudyError, SubmitPageCommand, SubmitPageHandler,
};
use cocreate_study::domain::conversation::prompts::{FINAL_INSTRUCTION, WRAP_UP_INSTRUCTION};
use cocreate_study::domain::conversation::Role;
use cocreate_study::domain::foundation::SessionId;
use cocreate_study::domain::study::{Page, StudySession};
use cocreate_study::domain::survey::catalog::{
    ATTENTION_CHECK_STATEMENT, FEEDBACK_SECTIONS, PERSONALITY_SECTIONS,
};
use cocreate_study::domain::survey::{
    AdminLoginForm, AiFamiliarity, ConsentForm, DemographicsForm, Education, FeedbackForm,
    Gender, LikertChoice, PersonalityForm, SummaryForm, WritingFrequency,
};
use cocreate_study::ports::{AIError, AIProvider, MessageRole, SubmissionReader};

const TURNS: u32 = 10;

struct Harness {
    _dir: TempDir,
    store: Arc<JsonSubmissionStore>,
    create: CreateSessionHandler,
    submit: SubmitPageHandler,
    chat: SendChatMessageHandler,
    list: ListSubmissionsHandler,
    export: ExportSubmissionsHandler,
}

fn harness(provider: Option<Arc<dyn AIProvider>>) -> Harness {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(JsonSubmissionStore::new(dir.path().join("chat_logs")));
    let sessions = Arc::new(InMemorySessionRepository::new());

    Harness {
        create: CreateSessionHandler::new(sessions.clone(), TURNS),
        submit: SubmitPageHandler::new(
            sessions.clone(),
            store.clone(),
            Secret::new("admin123".to_string()),
        ),
        chat: SendChatMessageHandler::new(sessions.clone(), provider, 150),
        list: ListSubmissionsHandler::new(sessions.clone(), store.clone()),
        export: ExportSubmissionsHandler::new(sessions, store.clone()),
        store,
        _dir: dir,
    }
}

fn demographics() -> DemographicsForm {
    DemographicsForm {
        age: Some(27),
        gender: Some(Gender::NonBinary),
        education: Some(Education::Other),
        education_other: Some("Trade school".into()),
        religion: Some("  ".into()),
        experience_with_ai: Some(AiFamiliarity::SomewhatFamiliar),
        creative_writing_frequency: Some(WritingFrequency::Often),
        valence: Some(7),
        arousal: Some(2),
    }
}

fn personality() -> PersonalityForm {
    PersonalityForm {
        responses: PERSONALITY_SECTIONS
            .iter()
            .flat_map(|s| s.statements.iter())
            .map(|s| {
                let choice = if *s == ATTENTION_CHECK_STATEMENT {
                    LikertChoice::SomewhatAgree
                } else {
                    LikertChoice::SomewhatDisagree
                };
                (s.to_string(), Some(choice))
            })
            .collect(),
    }
}

fn feedback() -> FeedbackForm {
    FeedbackForm {
        responses: FEEDBACK_SECTIONS
            .iter()
            .flat_map(|s| s.statements.iter())
            .map(|s| (s.to_string(), Some(LikertChoice::StronglyAgree)))
            .collect(),
        arousal_post: Some(5),
        valence_post: Some(8),
    }
}

impl Harness {
    async fn submit(
        &self,
        session_id: SessionId,
        submission: PageSubmission,
    ) -> Result<StudySession, StudyError> {
        self.submit
            .handle(SubmitPageCommand {
                session_id,
                submission,
            })
            .await
            .map(|r| r.session)
    }

    async fn say(&self, session_id: SessionId, message: &str) -> Option<ChatFailure> {
        self.chat
            .handle(SendChatMessageCommand {
                session_id,
                message: message.to_string(),
            })
            .await
            .unwrap()
            .failure
    }

    /// Creates a session and walks it to the brainstorm page.
    async fn brainstorming(&self, participant: &str) -> SessionId {
        let id = self.create.handle().await.unwrap().id();
        let consent = PageSubmission::StartParticipant(ConsentForm {
            consent: true,
            participant_id: Some(participant.to_string()),
        });
        self.submit(id, consent).await.unwrap();
        self.submit(id, PageSubmission::SubmitDemographics(demographics()))
            .await
            .unwrap();
        self.submit(id, PageSubmission::SubmitPersonality(personality()))
            .await
            .unwrap();
        let session = self
            .submit(id, PageSubmission::StartBrainstorm)
            .await
            .unwrap();
        assert_eq!(session.page(), Page::Brainstorm);
        id
    }

    async fn finish(&self, id: SessionId) {
        self.submit(id, PageSubmission::FinishBrainstorm)
            .await
            .unwrap();
        self.submit(
            id,
            PageSubmission::SubmitSummary(SummaryForm {
                summary: "  Cities grew upward.  ".into(),
            }),
        )
        .await
        .unwrap();
        let session = self
            .submit(id, PageSubmission::SubmitFeedback(feedback()))
            .await
            .unwrap();
        assert_eq!(session.page(), Page::ThankYou);
    }

    async fn admin_session(&self) -> SessionId {
        let id = self.create.handle().await.unwrap().id();
        self.submit(
            id,
            PageSubmission::AdminLogin(AdminLoginForm {
                password: "admin123".into(),
            }),
        )
        .await
        .unwrap();
        id
    }
}

#[tokio::test]
async fn ten_turn_session_is_recorded_in_full() {
    let mut mock = MockAIProvider::new();
    for i in 1..=TURNS {
        mock = mock.with_response(format!("reply {i}"));
    }
    let mock = Arc::new(mock);
    let h = harness(Some(mock.clone()));
    let id = h.brainstorming("PROLIFIC-42").await;

    for i in 1..=TURNS {
        assert!(h.say(id, &format!("idea {i}")).await.is_none());
    }

    let calls = mock.get_calls();
    assert_eq!(calls.len(), TURNS as usize);
    assert_eq!(
        calls[TURNS as usize - 2].messages.last().unwrap().content,
        WRAP_UP_INSTRUCTION
    );
    assert_eq!(
        calls[TURNS as usize - 1].messages.last().unwrap().content,
        FINAL_INSTRUCTION
    );
    assert!(calls[0]
        .messages
        .iter()
        .all(|m| m.content != WRAP_UP_INSTRUCTION && m.content != FINAL_INSTRUCTION));
    assert_eq!(calls[0].messages[0].role, MessageRole::System);

    let extra = h
        .chat
        .handle(SendChatMessageCommand {
            session_id: id,
            message: "one more".into(),
        })
        .await;
    assert!(extra.is_err());
    assert_eq!(mock.call_count(), TURNS as usize);

    h.finish(id).await;

    let listing = h.store.list().await.unwrap();
    assert_eq!(listing.entries.len(), 1);
    assert!(listing.failures.is_empty());

    let stored = &listing.entries[0];
    assert!(stored.file_name.starts_with("chat_PROLIFIC-42_"));
    let record = &stored.record;
    assert_eq!(record.prolific_id.as_str(), "PROLIFIC-42");
    assert_eq!(record.summary, "Cities grew upward.");
    assert_eq!(record.survey_responses["education_other"], "Trade school");
    assert_eq!(record.survey_responses["religion"], "");
    assert_eq!(record.survey_responses[ATTENTION_CHECK_STATEMENT], "Somewhat Agree");
    assert_eq!(record.feedback["valence_post"], 8);

    // system prompt + 10 user + 10 assistant, no injected instructions
    assert_eq!(record.chat_history.len(), 1 + 2 * TURNS as usize);
    assert_eq!(record.chat_history[0].role, Role::System);
    assert!(record
        .chat_history
        .iter()
        .all(|e| e.content != WRAP_UP_INSTRUCTION && e.content != FINAL_INSTRUCTION));
}

#[tokio::test]
async fn failing_completion_consumes_the_turn() {
    let mock = Arc::new(
        MockAIProvider::new()
            .with_error(AIError::unavailable("upstream down"))
            .with_response("back again"),
    );
    let h = harness(Some(mock));
    let id = h.brainstorming("P1").await;

    let failure = h.say(id, "first").await;
    assert!(matches!(failure, Some(ChatFailure::Provider(AIError::Unavailable { .. }))));

    assert!(h.say(id, "second").await.is_none());

    for i in 3..=TURNS {
        h.say(id, &format!("idea {i}")).await;
    }
    h.finish(id).await;

    let listing = h.store.list().await.unwrap();
    let history = &listing.entries[0].record.chat_history;
    let user_turns = history.iter().filter(|e| e.role == Role::User).count();
    assert_eq!(user_turns, TURNS as usize);
    // The failed turn has no assistant reply.
    assert_eq!(history[1].role, Role::User);
    assert_eq!(history[2].role, Role::User);
    assert_eq!(history[3].content, "back again");
}

#[tokio::test]
async fn disabled_chat_still_completes_the_study() {
    let h = harness(None);
    let id = h.brainstorming("offline").await;

    for i in 1..=TURNS {
        assert_eq!(h.say(id, &format!("idea {i}")).await, Some(ChatFailure::Unavailable));
    }
    h.finish(id).await;

    let listing = h.store.list().await.unwrap();
    assert_eq!(listing.entries.len(), 1);
}

#[tokio::test]
async fn admin_sees_filtered_submissions_and_export() {
    let h = harness(Some(Arc::new(MockAIProvider::new())));
    for participant in ["ALPHA-1", "alpha-2", "beta-3"] {
        let id = h.brainstorming(participant).await;
        for i in 1..=TURNS {
            h.say(id, &format!("{participant} idea {i}")).await;
        }
        h.finish(id).await;
    }
    let admin = h.admin_session().await;

    let all = h
        .list
        .handle(ListSubmissionsQuery {
            session_id: admin,
            participant_filter: String::new(),
        })
        .await
        .unwrap();
    assert_eq!(all.total, 3);
    assert_eq!(all.displayed(), 3);

    let alphas = h
        .list
        .handle(ListSubmissionsQuery {
            session_id: admin,
            participant_filter: "Alpha".into(),
        })
        .await
        .unwrap();
    assert_eq!(alphas.displayed(), 2);

    let export = h
        .export
        .handle(ExportSubmissionsQuery {
            session_id: admin,
            participant_filter: "beta".into(),
        })
        .await
        .unwrap();
    assert_eq!(export.rows, 1);
    let text = String::from_utf8(export.csv.unwrap()).unwrap();
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(&headers[0], "prolific_id");
    assert_eq!(&headers[headers.len() - 1], "chat_history");
    let row = reader.records().next().unwrap().unwrap();
    assert_eq!(&row[0], "beta-3");
    assert!(!row[headers.len() - 1].contains("[system]"));
}

#[tokio::test]
async fn zero_match_admin_search_is_empty() {
    let h = harness(None);
    let admin = h.admin_session().await;

    let listing = h
        .list
        .handle(ListSubmissionsQuery {
            session_id: admin,
            participant_filter: "nobody".into(),
        })
        .await
        .unwrap();
    assert_eq!(listing.displayed(), 0);
    assert_eq!(listing.total, 0);

    let export = h
        .export
        .handle(ExportSubmissionsQuery {
            session_id: admin,
            participant_filter: "nobody".into(),
        })
        .await
        .unwrap();
    assert!(export.csv.is_none());
}

#[tokio::test]
async fn wrong_attention_answer_blocks_personality_page() {
    let h = harness(None);
    let id = h.create.handle().await.unwrap().id();
    h.submit(
        id,
        PageSubmission::StartParticipant(ConsentForm {
            consent: true,
            participant_id: Some("P".into()),
        }),
    )
    .await
    .unwrap();
    h.submit(id, PageSubmission::SubmitDemographics(demographics()))
        .await
        .unwrap();

    let mut form = personality();
    form.responses.insert(
        ATTENTION_CHECK_STATEMENT.to_string(),
        Some(LikertChoice::StronglyAgree),
    );
    let err = h
        .submit(id, PageSubmission::SubmitPersonality(form))
        .await
        .unwrap_err();

    match err {
        StudyError::Validation(errors) => {
            assert!(errors.has_attention_failure());
            assert_eq!(errors.len(), 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

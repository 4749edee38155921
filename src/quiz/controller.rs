use std::sync::Arc;

use tokio::sync::Mutex;

use crate::backend::{ApiError, NextQuestionRequest, PortfolioBackend, VisitReport};
use crate::content::ContentSource;
use crate::quiz::Quiz;
use crate::visitor::Visitor;

/// What the portfolio says about itself when the live page text cannot be
/// fetched.
const FALLBACK_PAGE_DESCRIPTION: &str = "A Engineering student's portfolio website";

/// Outcome of an answer submission. Everything except `Advanced` leaves
/// the quiz untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The answer was recorded and the next question is ready.
    Advanced,
    /// The visit was never recorded, so answers cannot be attributed yet.
    NotReady,
    /// Another submission is still in flight; this one was dropped.
    InFlight,
    /// There is no question left to answer.
    Finished,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("recording the answer failed: {0}")]
    RecordResponse(#[source] ApiError),
    #[error("generating the next question failed: {0}")]
    NextQuestion(#[source] ApiError),
}

/// Drives the visitor flow against the portfolio backend. One instance is
/// shared across all chat handlers.
pub struct QuizController {
    backend: Arc<dyn PortfolioBackend>,
    content: Arc<dyn ContentSource>,
    quiz_source_url: String,
    in_flight: Mutex<()>,
}

impl QuizController {
    pub fn new(
        backend: Arc<dyn PortfolioBackend>,
        content: Arc<dyn ContentSource>,
        quiz_source_url: String,
    ) -> Self {
        Self {
            backend,
            content,
            quiz_source_url,
            in_flight: Mutex::new(()),
        }
    }

    /// Reports the visit the first time both identity values are known.
    /// At most one report is ever attempted per visitor; a failed report
    /// is logged and not retried, which leaves answer recording blocked
    /// for the rest of the session.
    pub async fn track_visit(&self, visitor: &mut Visitor) {
        if visitor.visit_reported {
            return;
        }
        let (Some(fingerprint), Some(ip_address)) = (&visitor.fingerprint, &visitor.ip_address)
        else {
            return;
        };

        let report = VisitReport {
            fingerprint: fingerprint.clone(),
            user_agent: visitor.user_agent.clone(),
            ip_address: ip_address.clone(),
        };
        visitor.visit_reported = true;

        match self.backend.record_visit(&report).await {
            Ok(visitor_id) => {
                log::info!("Visit recorded, visitor id {}", visitor_id);
                visitor.visitor_id = Some(visitor_id);
            }
            Err(err) => log::error!("Error recording visit: {}", err),
        }
    }

    /// Runs one answer round-trip: fetch the quiz-source page text, record
    /// the answer, ask for the next question, then advance the quiz. The
    /// quiz is only mutated once both backend calls have succeeded; a
    /// failure in either leaves it on the unanswered question.
    pub async fn submit(
        &self,
        quiz: &mut Quiz,
        visitor: &Visitor,
        answer: &str,
    ) -> Result<Submission, SubmitError> {
        let Ok(_guard) = self.in_flight.try_lock() else {
            return Ok(Submission::InFlight);
        };
        let (Some(fingerprint), Some(_visitor_id)) = (&visitor.fingerprint, &visitor.visitor_id)
        else {
            return Ok(Submission::NotReady);
        };
        let Some(question) = quiz.current() else {
            return Ok(Submission::Finished);
        };
        let question_text = question.text.clone();

        let content = match self.content.page_text(&self.quiz_source_url).await {
            Ok(text) => text,
            Err(err) => {
                log::error!("Error fetching website content: {}", err);
                FALLBACK_PAGE_DESCRIPTION.to_string()
            }
        };

        self.backend
            .record_response(fingerprint, &question_text, answer)
            .await
            .map_err(SubmitError::RecordResponse)?;

        let next = self
            .backend
            .next_question(&NextQuestionRequest {
                content,
                fingerprint: fingerprint.clone(),
                user_agent: visitor.user_agent.clone(),
                ip_address: visitor.ip_address.clone(),
            })
            .await
            .map_err(SubmitError::NextQuestion)?;

        quiz.advance_with(next);
        Ok(Submission::Advanced)
    }
}

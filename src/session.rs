//! Per-user assessment progress, owned by the calling application and passed
//! explicitly into each step. The pipeline functions it drives stay pure.

use crate::analysis::{analyze, GapAnalysis};
use crate::assessment::{score, AnswerSet, QuizComposer, QuizItem, ScoreReport};
use crate::bank::{Level, QuestionRepository};
use crate::error::AssessmentError;
use crate::workspace::QuizSettings;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Self-assessed level a new session starts with.
pub const DEFAULT_SELF_ASSESSED_LEVEL: Level = Level::ALL[2];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    SelectingCourse,
    SelfAssessing,
    InProgress,
    Completed,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub session_id: Uuid,
    pub course: Option<String>,
    pub self_assessed_level: Level,
    pub quiz: Vec<QuizItem>,
    pub answers: AnswerSet,
    pub current_index: usize,
    pub phase: SessionPhase,
    pub results: Option<ScoreReport>,
    pub gap_analysis: Option<GapAnalysis>,
    pub started_at: Option<DateTime<Utc>>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            course: None,
            self_assessed_level: DEFAULT_SELF_ASSESSED_LEVEL,
            quiz: Vec::new(),
            answers: AnswerSet::new(),
            current_index: 0,
            phase: SessionPhase::SelectingCourse,
            results: None,
            gap_analysis: None,
            started_at: None,
        }
    }

    fn expect_phase(&self, phase: SessionPhase, action: &str) -> Result<(), AssessmentError> {
        if self.phase != phase {
            return Err(AssessmentError::session(format!(
                "cannot {action} while session is {:?}",
                self.phase
            )));
        }
        Ok(())
    }

    pub fn select_course(&mut self, course: impl Into<String>) -> Result<(), AssessmentError> {
        if matches!(self.phase, SessionPhase::InProgress | SessionPhase::Completed) {
            return Err(AssessmentError::session(
                "cannot change course after the quiz has started",
            ));
        }
        self.course = Some(course.into());
        self.phase = SessionPhase::SelfAssessing;
        Ok(())
    }

    pub fn set_self_assessed_level(&mut self, level: u8) -> Result<(), AssessmentError> {
        self.expect_phase(SessionPhase::SelfAssessing, "set the self-assessed level")?;
        self.self_assessed_level = Level::new(level)?;
        Ok(())
    }

    /// Composes the quiz and moves to the first question.
    pub fn start_quiz<R: Rng + ?Sized>(
        &mut self,
        repository: &QuestionRepository,
        settings: &QuizSettings,
        rng: &mut R,
    ) -> Result<&[QuizItem], AssessmentError> {
        self.expect_phase(SessionPhase::SelfAssessing, "start the quiz")?;
        let course = self.course.as_deref().unwrap_or_default();
        self.quiz = QuizComposer::new(repository).compose(
            course,
            self.self_assessed_level,
            settings.questions_per_level,
            settings.max_questions,
            rng,
        );
        self.answers.clear();
        self.current_index = 0;
        self.phase = SessionPhase::InProgress;
        self.started_at = Some(Utc::now());
        Ok(self.quiz.as_slice())
    }

    pub fn current_item(&self) -> Option<&QuizItem> {
        match self.phase {
            SessionPhase::InProgress => self.quiz.get(self.current_index),
            _ => None,
        }
    }

    /// `(answered, total)` for progress display.
    pub fn progress(&self) -> (usize, usize) {
        (self.answers.len(), self.quiz.len())
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.quiz.len()
    }

    pub fn answer_current(&mut self, option: u8) -> Result<(), AssessmentError> {
        self.expect_phase(SessionPhase::InProgress, "answer")?;
        let sequence_number = self
            .current_item()
            .map(|item| item.sequence_number)
            .ok_or_else(|| AssessmentError::session("quiz has no questions to answer"))?;
        self.answers.record(sequence_number, option)
    }

    /// Moves forward one question; returns false at the last question.
    pub fn next(&mut self) -> bool {
        if self.phase == SessionPhase::InProgress && !self.is_last_question() {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    /// Moves back one question; returns false at the first question.
    pub fn previous(&mut self) -> bool {
        if self.phase == SessionPhase::InProgress && self.current_index > 0 {
            self.current_index -= 1;
            true
        } else {
            false
        }
    }

    /// Scores the quiz and runs the gap analysis. Unanswered items count as
    /// incorrect; an empty quiz still submits.
    pub fn submit(&mut self) -> Result<&GapAnalysis, AssessmentError> {
        self.expect_phase(SessionPhase::InProgress, "submit")?;
        let report = score(&self.quiz, &self.answers);
        let gap = analyze(&report, self.self_assessed_level);
        self.results = Some(report);
        self.phase = SessionPhase::Completed;
        Ok(&*self.gap_analysis.insert(gap))
    }

    /// Discards all progress and starts a fresh session.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

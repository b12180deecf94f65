use super::Answer;
use crate::catalog;

/// Transient per-session quiz state: just the ordered answer sequence.
/// Owned by a single view for its lifetime; restarting drops everything.
#[derive(Debug, Default)]
pub struct QuizSession {
    answers: Vec<Answer>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a swipe. Unknown question ids are recorded as given; the
    /// match engine skips them at scoring time.
    pub fn submit_answer(&mut self, question_id: impl Into<String>, liked: bool) {
        self.answers.push(Answer::new(question_id, liked));
    }

    pub fn restart(&mut self) {
        self.answers.clear();
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    pub fn total_questions(&self) -> usize {
        catalog::quiz_questions().len()
    }

    pub fn is_complete(&self) -> bool {
        self.answered() >= self.total_questions()
    }

    /// Share of the quiz answered so far, rounded to whole percent.
    pub fn progress_pct(&self) -> u8 {
        let total = self.total_questions();
        if total == 0 {
            return 0;
        }
        let answered = self.answered().min(total);
        ((answered as f32 / total as f32) * 100.0).round() as u8
    }
}

//! Question/answer exchange state.

#[cfg(test)]
#[path = "qa_test.rs"]
mod qa_test;

#[derive(Clone, Debug, Default)]
pub struct QaState {
    pub question: String,
    pub answer: Option<String>,
    pub loading: bool,
}

impl QaState {
    /// Start a query: clears the previous answer. Returns the trimmed
    /// question, or `None` when it is blank or a query is already running.
    pub fn begin(&mut self) -> Option<String> {
        let question = self.question.trim();
        if question.is_empty() || self.loading {
            return None;
        }
        let question = question.to_owned();
        self.answer = None;
        self.loading = true;
        Some(question)
    }

    /// Finish a query; `None` records a failure.
    pub fn finish(&mut self, answer: Option<String>) {
        self.answer = answer;
        self.loading = false;
    }

    /// Answer to display; hidden while a query runs.
    pub fn visible_answer(&self) -> Option<&str> {
        if self.loading { None } else { self.answer.as_deref().filter(|a| !a.is_empty()) }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading { "Getting Answer..." } else { "Get Answer" }
    }
}

use rag_client::{QueryResult, QueryService, DEFAULT_TOP_K};
use std::io::{self, Write};

/// Where the view is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    Idle,
    Loading,
    Resolved,
}

/// Presentation state: the current input text, the last result, and the
/// loading status. One result at a time; each submission replaces the last.
pub struct QueryView {
    input: String,
    last: Option<QueryResult>,
    status: ViewStatus,
}

impl QueryView {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            last: None,
            status: ViewStatus::Idle,
        }
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn status(&self) -> ViewStatus {
        self.status
    }

    pub fn last(&self) -> Option<&QueryResult> {
        self.last.as_ref()
    }

    /// Submit the current input and store whatever comes back. The service
    /// always resolves to a result, so the view never sees a failure.
    pub async fn submit(&mut self, service: &QueryService) {
        self.status = ViewStatus::Loading;
        let result = service.query(&self.input, DEFAULT_TOP_K).await;
        self.last = Some(result);
        self.status = ViewStatus::Resolved;
    }
}

impl Default for QueryView {
    fn default() -> Self {
        Self::new()
    }
}

/// Render one result: the answer if it has content, otherwise the error
/// with its fallback line, and then any context snippets in order.
pub fn render_result(result: &QueryResult, out: &mut impl Write) -> io::Result<()> {
    if let Some(answer) = result.answer_text() {
        writeln!(out, "AI Response:")?;
        writeln!(out, "{}", answer)?;
    } else if let Some(error) = &result.error {
        writeln!(out, "Error: {}", error)?;
        if let Some(fallback) = &result.fallback {
            writeln!(out, "{}", fallback)?;
        }
    }

    if let Some(context) = &result.context {
        if !context.is_empty() {
            writeln!(out, "Context:")?;
            for snippet in context {
                writeln!(out, "- {}", snippet)?;
            }
        }
    }

    Ok(())
}

// tests/support/mocks/sinks.rs
use codepulse::presentation::forms::SubmitSink;
use codepulse::presentation::http::controllers::categories::CreateCategoryRequest;
use std::sync::Mutex;

/// Records every payload emitted by a form.
#[derive(Debug, Default)]
pub struct CapturingSink {
    pub emitted: Mutex<Vec<CreateCategoryRequest>>,
}

impl CapturingSink {
    pub fn payloads(&self) -> Vec<CreateCategoryRequest> {
        self.emitted.lock().unwrap().clone()
    }
}

impl SubmitSink for CapturingSink {
    fn emit(&self, payload: &CreateCategoryRequest) {
        self.emitted.lock().unwrap().push(payload.clone());
    }
}

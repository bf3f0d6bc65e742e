// src/presentation/forms/add_category.rs
use super::control::FormControl;
use crate::presentation::http::controllers::categories::CreateCategoryRequest;
use std::sync::Arc;

/// Receives the payload produced when the form is submitted.
pub trait SubmitSink: Send + Sync {
    fn emit(&self, payload: &CreateCategoryRequest);
}

/// Writes submitted payloads to the log as a structured event.
#[derive(Debug, Default, Clone)]
pub struct LogSink;

impl SubmitSink for LogSink {
    fn emit(&self, payload: &CreateCategoryRequest) {
        tracing::info!(
            name = %payload.name,
            url_handle = %payload.url_handle,
            "add category form submitted"
        );
    }
}

/// View-model behind the "add category" screen.
pub struct AddCategoryForm {
    name: FormControl<String>,
    url_handle: FormControl<String>,
    sink: Arc<dyn SubmitSink>,
}

impl AddCategoryForm {
    pub fn new() -> Self {
        Self::with_sink(Arc::new(LogSink))
    }

    pub fn with_sink(sink: Arc<dyn SubmitSink>) -> Self {
        Self {
            name: FormControl::default(),
            url_handle: FormControl::default(),
            sink,
        }
    }

    pub fn name(&self) -> &FormControl<String> {
        &self.name
    }

    pub fn url_handle(&self) -> &FormControl<String> {
        &self.url_handle
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name.set_value(name.into());
    }

    pub fn set_url_handle(&mut self, url_handle: impl Into<String>) {
        self.url_handle.set_value(url_handle.into());
    }

    pub fn reset(&mut self) {
        self.name.reset();
        self.url_handle.reset();
    }

    /// Snapshot of the current field values.
    pub fn raw_value(&self) -> CreateCategoryRequest {
        CreateCategoryRequest {
            name: self.name.value().clone(),
            url_handle: self.url_handle.value().clone(),
        }
    }

    /// Emit the current values to the sink. The form itself is left as is.
    pub fn on_submit(&self) -> CreateCategoryRequest {
        let payload = self.raw_value();
        self.sink.emit(&payload);
        payload
    }
}

impl Default for AddCategoryForm {
    fn default() -> Self {
        Self::new()
    }
}

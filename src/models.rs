use serde::Serialize;
use serde_json::Value;

// Record field names as served by the tasks endpoint
pub const TITLE_FIELD: &str = "titulo";
pub const DONE_FIELD: &str = "concluida";

// Shown in place of a missing title
pub const MISSING_TITLE: &str = "undefined";

/// One record of the fetched collection.
///
/// The record is kept as the raw JSON value so that unknown fields (and their
/// order) survive into the persisted output untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Task(Value);

impl Task {
    pub fn new(value: Value) -> Self {
        Task(value)
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }

    pub fn into_raw(self) -> Value {
        self.0
    }

    fn field(&self, name: &str) -> Option<&Value> {
        self.0.as_object().and_then(|fields| fields.get(name))
    }

    pub fn title(&self) -> Option<&Value> {
        self.field(TITLE_FIELD)
    }

    pub fn completion(&self) -> Option<&Value> {
        self.field(DONE_FIELD)
    }

    /// Title as printed on the console. Never fails: strings are shown
    /// verbatim, other values as JSON text, absence as `undefined`.
    pub fn display_title(&self) -> String {
        match self.title() {
            Some(Value::String(text)) => text.clone(),
            None | Some(Value::Null) => MISSING_TITLE.to_string(),
            Some(other) => other.to_string(),
        }
    }

    pub fn is_done(&self) -> bool {
        is_done_flag(self.completion())
    }
}

impl From<Value> for Task {
    fn from(value: Value) -> Self {
        Task(value)
    }
}

/// Normalizes a raw completion indicator: only `true`, `"true"`, `1` and `"1"`
/// count as done.
pub fn is_done_flag(raw: Option<&Value>) -> bool {
    match raw {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) => text == "true" || text == "1",
        Some(Value::Number(number)) => number.as_f64() == Some(1.0),
        Some(Value::Null) | Some(Value::Array(_)) | Some(Value::Object(_)) | None => false,
    }
}

/// Review outcome reported by the API for a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Approved,
    Reviewing,
    Rejected,
}

impl Verdict {
    /// Map an API status key to a verdict. Only the exact lowercase keys match.
    pub fn from_status(status: &str) -> Option<Self> {
        match status {
            "approved" => Some(Verdict::Approved),
            "reviewing" => Some(Verdict::Reviewing),
            "rejected" => Some(Verdict::Rejected),
            _ => None,
        }
    }

    /// Human-readable phrase used in status notifications.
    pub fn phrase(&self) -> &'static str {
        match self {
            Verdict::Approved => "review complete, reviewer is happy",
            Verdict::Reviewing => "taken up for review",
            Verdict::Rejected => "review complete, reviewer has comments",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Approved => write!(f, "approved"),
            Verdict::Reviewing => write!(f, "reviewing"),
            Verdict::Rejected => write!(f, "rejected"),
        }
    }
}

/// A validated homework review record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub homework_name: String,
    pub verdict: Verdict,
}

impl Submission {
    /// Render the status-change message relayed to the chat.
    pub fn notification(&self) -> String {
        format!(
            "Status check changed: \"{}\", {}",
            self.homework_name,
            self.verdict.phrase()
        )
    }
}

/// Lower bound (unix seconds) of the next review API query window.
///
/// Only moves forward through [`PollCursor::advance_to`]; failed cycles leave
/// it where it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PollCursor(i64);

impl PollCursor {
    pub fn new(timestamp: i64) -> Self {
        Self(timestamp)
    }

    pub fn timestamp(&self) -> i64 {
        self.0
    }

    /// Move the cursor to `now` after a completed cycle.
    pub fn advance_to(&mut self, now: i64) {
        self.0 = now;
    }
}

/// Short name of a JSON value's type, for shape error messages.
pub fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

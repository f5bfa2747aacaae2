use serde_json::Value;

use herald_common::error::{PollError, ShapeError};
use herald_common::types::{Submission, Verdict, json_kind};

/// Turn a raw submission record into a typed [`Submission`].
///
/// Render the notification with [`Submission::notification`].
pub fn interpret(submission: &Value) -> Result<Submission, PollError> {
    let record = submission.as_object().ok_or(ShapeError::NotAnObject {
        what: "submission",
        found: json_kind(submission),
    })?;

    let name = record.get("homework_name").ok_or(ShapeError::MissingKey {
        what: "submission",
        key: "homework_name",
    })?;
    let status = record.get("status").ok_or(ShapeError::MissingKey {
        what: "submission",
        key: "status",
    })?;

    let verdict = match status {
        Value::String(s) => Verdict::from_status(s),
        _ => None,
    }
    .ok_or_else(|| PollError::UnknownStatus {
        status: match status {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
    })?;

    let homework_name = name.as_str().ok_or(ShapeError::WrongType {
        key: "homework_name",
        expected: "a string",
        found: json_kind(name),
    })?;

    Ok(Submission {
        homework_name: homework_name.to_string(),
        verdict,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_every_verdict_renders() {
        let cases = [
            ("approved", "review complete, reviewer is happy"),
            ("reviewing", "taken up for review"),
            ("rejected", "review complete, reviewer has comments"),
        ];
        for (status, phrase) in cases {
            let submission =
                interpret(&json!({"homework_name": "hw1", "status": status})).unwrap();
            assert_eq!(
                submission.notification(),
                format!("Status check changed: \"hw1\", {phrase}")
            );
        }
    }

    #[test]
    fn test_extra_fields_ignored() {
        let submission = interpret(&json!({
            "id": 7,
            "homework_name": "user__project.zip",
            "status": "approved",
            "reviewer_comment": "nice"
        }))
        .unwrap();
        assert_eq!(submission.homework_name, "user__project.zip");
        assert_eq!(submission.verdict, Verdict::Approved);
    }

    #[test]
    fn test_missing_homework_name() {
        let err = interpret(&json!({"status": "approved"})).unwrap_err();
        assert_eq!(
            err,
            PollError::Shape(ShapeError::MissingKey {
                what: "submission",
                key: "homework_name"
            })
        );
    }

    #[test]
    fn test_missing_status() {
        let err = interpret(&json!({"homework_name": "hw1"})).unwrap_err();
        assert_eq!(
            err,
            PollError::Shape(ShapeError::MissingKey {
                what: "submission",
                key: "status"
            })
        );
    }

    #[test]
    fn test_unknown_status() {
        let err = interpret(&json!({"homework_name": "hw1", "status": "lost"})).unwrap_err();
        assert_eq!(
            err,
            PollError::UnknownStatus {
                status: "lost".into()
            }
        );
    }

    #[test]
    fn test_non_string_status_is_unknown() {
        let err = interpret(&json!({"homework_name": "hw1", "status": 3})).unwrap_err();
        assert_eq!(err, PollError::UnknownStatus { status: "3".into() });
    }

    #[test]
    fn test_non_object_submission() {
        let err = interpret(&json!("hw1")).unwrap_err();
        assert!(matches!(
            err,
            PollError::Shape(ShapeError::NotAnObject { found: "a string", .. })
        ));
    }

    #[test]
    fn test_non_string_name() {
        let err = interpret(&json!({"homework_name": 12, "status": "approved"})).unwrap_err();
        assert!(matches!(
            err,
            PollError::Shape(ShapeError::WrongType { key: "homework_name", .. })
        ));
    }
}

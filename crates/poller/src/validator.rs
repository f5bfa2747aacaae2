use serde_json::Value;

use herald_common::error::ShapeError;
use herald_common::types::json_kind;

/// Keys every status response must carry, checked in this order.
const REQUIRED_KEYS: [&str; 2] = ["current_date", "homeworks"];

/// Assert the response shape and return its `homeworks` array (possibly empty).
///
/// `current_date` is only checked for presence.
pub fn validate(response: Value) -> Result<Vec<Value>, ShapeError> {
    tracing::info!("API check");

    let mut body = match response {
        Value::Object(body) => body,
        other => {
            return Err(ShapeError::NotAnObject {
                what: "API response",
                found: json_kind(&other),
            });
        }
    };

    for key in REQUIRED_KEYS {
        if !body.contains_key(key) {
            return Err(ShapeError::MissingKey {
                what: "API response",
                key,
            });
        }
    }

    match body.remove("homeworks") {
        Some(Value::Array(homeworks)) => Ok(homeworks),
        other => Err(ShapeError::WrongType {
            key: "homeworks",
            expected: "an array",
            found: other.as_ref().map_or("nothing", json_kind),
        }),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_returns_homeworks_unchanged() {
        let homeworks = validate(json!({
            "current_date": 2000,
            "homeworks": [
                {"homework_name": "hw2", "status": "reviewing"},
                {"homework_name": "hw1", "status": "approved"}
            ]
        }))
        .unwrap();
        assert_eq!(homeworks.len(), 2);
        assert_eq!(homeworks[0]["homework_name"], "hw2");
    }

    #[test]
    fn test_empty_homeworks_allowed() {
        let homeworks = validate(json!({"current_date": 2000, "homeworks": []})).unwrap();
        assert!(homeworks.is_empty());
    }

    #[test]
    fn test_not_an_object() {
        let err = validate(json!([{"homework_name": "hw1"}])).unwrap_err();
        assert_eq!(
            err,
            ShapeError::NotAnObject {
                what: "API response",
                found: "an array"
            }
        );
    }

    #[test]
    fn test_missing_current_date() {
        let err = validate(json!({"homeworks": []})).unwrap_err();
        assert_eq!(
            err,
            ShapeError::MissingKey {
                what: "API response",
                key: "current_date"
            }
        );
    }

    #[test]
    fn test_missing_homeworks() {
        let err = validate(json!({"current_date": 2000})).unwrap_err();
        assert_eq!(
            err,
            ShapeError::MissingKey {
                what: "API response",
                key: "homeworks"
            }
        );
    }

    #[test]
    fn test_homeworks_not_an_array() {
        let err = validate(json!({
            "current_date": 2000,
            "homeworks": {"homework_name": "hw1", "status": "approved"}
        }))
        .unwrap_err();
        assert_eq!(
            err,
            ShapeError::WrongType {
                key: "homeworks",
                expected: "an array",
                found: "an object"
            }
        );
    }

    #[test]
    fn test_current_date_type_not_checked() {
        assert!(validate(json!({"current_date": "yesterday", "homeworks": []})).is_ok());
    }
}

use std::str::FromStr;

use crate::server::error::AppError;

/// Parses a required POST parameter.
///
/// # Arguments
/// - `value` - The raw form value, `None` when the client did not send it
/// - `name` - Parameter name used in the error message
///
/// # Returns
/// - `Ok(T)` - Successfully parsed value
/// - `Err(AppError::InvalidArgument)` - The parameter is missing or cannot be parsed as `T`
pub fn require_param<T: FromStr>(value: Option<String>, name: &str) -> Result<T, AppError> {
    let Some(value) = value else {
        return Err(AppError::InvalidArgument(format!(
            "Post parameter {} is not set !",
            name
        )));
    };

    value
        .trim()
        .parse::<T>()
        .map_err(|_| AppError::InvalidArgument(format!("Post parameter {} is not valid !", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_present_value() {
        let id: i64 = require_param(Some("42".to_string()), "user_id").unwrap();
        let longitude: f64 = require_param(Some(" 6.5668 ".to_string()), "longitude").unwrap();

        assert_eq!(id, 42);
        assert_eq!(longitude, 6.5668);
    }

    #[test]
    fn rejects_missing_value() {
        let result = require_param::<i64>(None, "user_id");

        assert!(matches!(
            result,
            Err(AppError::InvalidArgument(message)) if message == "Post parameter user_id is not set !"
        ));
    }

    #[test]
    fn rejects_unparsable_value() {
        let result = require_param::<i64>(Some("abc".to_string()), "friend_id");

        assert!(matches!(
            result,
            Err(AppError::InvalidArgument(message)) if message == "Post parameter friend_id is not valid !"
        ));
    }
}

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ApiError;
use crate::models::BookingRequest;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("regex compiles"));

pub fn validate_booking_request(request: &BookingRequest) -> Result<(), ApiError> {
    if !EMAIL_RE.is_match(&request.user_email) {
        return Err(ApiError::Unprocessable(
            "user_email must be a valid email address".into(),
        ));
    }
    let name_len = request.user_name.chars().count();
    if !(1..=100).contains(&name_len) {
        return Err(ApiError::Unprocessable(
            "user_name must be between 1 and 100 characters".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, name: &str) -> BookingRequest {
        BookingRequest {
            class_id: 1,
            user_email: email.to_string(),
            user_name: name.to_string(),
        }
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_booking_request(&request("jane.doe@example.com", "Jane")).is_ok());
        assert!(validate_booking_request(&request("jane-doe@mail.example.io", "Jane")).is_ok());
        assert!(validate_booking_request(&request("not-an-email", "Jane")).is_err());
        assert!(validate_booking_request(&request("missing@tld", "Jane")).is_err());
        assert!(validate_booking_request(&request("@example.com", "Jane")).is_err());
    }

    #[test]
    fn test_validate_user_name_length() {
        assert!(validate_booking_request(&request("a@b.com", "")).is_err());
        assert!(validate_booking_request(&request("a@b.com", "J")).is_ok());
        assert!(validate_booking_request(&request("a@b.com", &"x".repeat(100))).is_ok());
        assert!(validate_booking_request(&request("a@b.com", &"x".repeat(101))).is_err());
    }
}

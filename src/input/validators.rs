use regex::Regex;

pub type Validator = Box<dyn Fn(&str) -> Result<(), String> + Send>;

pub fn required(field: &str) -> Validator {
    let message = format!("{field} is a required field");
    Box::new(move |value: &str| {
        if value.trim().is_empty() {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

pub fn min_length(field: &str, min: usize) -> Validator {
    let message = format!("{field} must have at least {min} characters");
    Box::new(move |value: &str| {
        if value.chars().count() < min {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

pub fn matching(pattern: &str, message: impl Into<String>) -> Validator {
    let re = Regex::new(pattern).expect("Invalid regex pattern");
    let message = message.into();
    Box::new(move |value: &str| {
        if re.is_match(value) {
            Ok(())
        } else {
            Err(message.clone())
        }
    })
}

pub fn email(field: &str) -> Validator {
    matching(
        r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$",
        format!("{field} must be a valid email address"),
    )
}

#[cfg(test)]
mod tests {
    use super::{email, min_length, required};

    #[test]
    fn required_rejects_empty_and_whitespace() {
        let validator = required("lastName");
        assert_eq!(
            validator("").unwrap_err(),
            "lastName is a required field"
        );
        assert!(validator("   ").is_err());
        assert!(validator("Brog").is_ok());
    }

    #[test]
    fn min_length_counts_chars_not_bytes() {
        let validator = min_length("firstName", 5);
        assert_eq!(
            validator("Amy").unwrap_err(),
            "firstName must have at least 5 characters"
        );
        assert!(validator("Hann").is_err());
        assert!(validator("Hannah").is_ok());
        // five two-byte chars pass
        assert!(validator("ÀÉÎÕÜ").is_ok());
    }

    #[test]
    fn email_checks_address_shape() {
        let validator = email("email");
        assert_eq!(
            validator("hello").unwrap_err(),
            "email must be a valid email address"
        );
        assert!(validator("").is_err());
        assert!(validator("han@gmail").is_err());
        assert!(validator("han@gmail.com").is_ok());
        assert!(validator("first.last+tag@sub.example.org").is_ok());
    }
}

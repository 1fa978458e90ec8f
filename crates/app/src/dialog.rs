use dioxus::prelude::*;

/// Fixed dialog text for a successful registration.
pub const REGISTRATION_SUCCESS: &str = "Registration successful!";

/// Fixed dialog text when the request itself failed.
pub const REGISTRATION_ERROR_GENERIC: &str = "An error occurred during registration.";

/// Dialog text for a rejection the endpoint explained.
pub fn registration_failed(message: &str) -> String {
    format!("Registration failed: {message}")
}

/// Show a blocking browser dialog and wait until it is dismissed.
///
/// Drives the native `alert()` through `document::eval`. The returned
/// future resolves once the dialog is closed, so callers can order
/// follow-up work (like clearing the form) after dismissal.
pub async fn alert(message: &str) {
    let _ = document::eval(&alert_script(message)).await;
}

fn alert_script(message: &str) -> String {
    format!("alert({});", js_string_literal(message))
}

/// Encode arbitrary text as a JavaScript string literal.
///
/// JSON string encoding is a strict subset of the JS literal syntax, which
/// keeps quotes, backslashes and newlines in server-provided messages from
/// terminating the generated script.
fn js_string_literal(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| String::from("\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn failure_text_interpolates_the_server_message() {
        assert_eq!(
            registration_failed("Email already exists"),
            "Registration failed: Email already exists"
        );
    }

    #[test]
    fn plain_text_becomes_a_quoted_literal() {
        assert_eq!(js_string_literal("hello"), r#""hello""#);
    }

    #[test]
    fn quotes_and_newlines_are_escaped() {
        assert_eq!(
            js_string_literal("He said \"no\"\nbye"),
            r#""He said \"no\"\nbye""#
        );
    }

    #[test]
    fn backslashes_cannot_break_out_of_the_literal() {
        assert_eq!(js_string_literal(r"C:\temp"), r#""C:\\temp""#);
    }

    #[test]
    fn alert_script_wraps_the_literal() {
        assert_eq!(
            alert_script("Registration successful!"),
            r#"alert("Registration successful!");"#
        );
    }
}

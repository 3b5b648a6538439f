//! Cleanup of backend error details before they are shown to the user.
//!
//! The backend's IMAP layer leaks raw Python bytes reprs such as
//! `b'[AUTHENTICATIONFAILED] Invalid credentials (Failure)'` into its error
//! payloads. Sanitizers are plain functions so the chain can be swapped if
//! the backend's error serialization changes.

/// Returns the cleaned message, or `None` when the sanitizer does not apply.
pub type MessageSanitizer = fn(&str) -> Option<String>;

pub const DEFAULT_SANITIZERS: &[MessageSanitizer] = &[strip_byte_string_repr];

pub const AUTH_REMEDIATION_HINT: &str = "Invalid credentials. For Gmail: use an App Password, \
    not your regular password. Enable 2FA, then create one at Google Account → Security → App passwords.";

/// Runs `message` through each sanitizer in order, keeping the last rewrite.
pub fn clean(message: &str, sanitizers: &[MessageSanitizer]) -> String {
    let mut cleaned = message.trim().to_string();
    for sanitizer in sanitizers {
        if let Some(rewritten) = sanitizer(&cleaned) {
            cleaned = rewritten;
        }
    }
    cleaned
}

/// Unwraps a message that is entirely a bytes repr, `b'...'` or `b"..."`.
pub fn strip_byte_string_repr(message: &str) -> Option<String> {
    let quoted = message.strip_prefix('b')?;
    let inner = quoted
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .or_else(|| {
            quoted
                .strip_prefix('"')
                .and_then(|rest| rest.strip_suffix('"'))
        })?;

    if inner.is_empty() {
        return None;
    }

    Some(inner.trim().to_string())
}

pub fn is_auth_failure(message: &str) -> bool {
    let lowered = message.to_ascii_lowercase();
    lowered.contains("authenticationfailed") || lowered.contains("invalid credentials")
}

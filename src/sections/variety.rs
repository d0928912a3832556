//! Character variety section - checks for uppercase, lowercase, digits and symbols.
//!
//! Only ASCII letters and digits count as letters and digits. Everything
//! else, including spaces and letters from other scripts, is a symbol.

/// Returns `true` if any character is in `[A-Z]`.
pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

/// Returns `true` if any character is in `[a-z]`.
pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

/// Returns `true` if any character is in `[0-9]`.
pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// Returns `true` if any character falls outside `[A-Za-z0-9]`.
pub fn has_symbol(password: &str) -> bool {
    password.chars().any(|c| !c.is_ascii_alphanumeric())
}

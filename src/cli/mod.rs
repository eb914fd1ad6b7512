//! Command-line parsing and password prompt.
pub mod args;
pub mod prompt;

pub use args::{parse_invocation, usage_text, ArgsError, Flag, Invocation, PublishArgs};
pub use prompt::{read_line_from, read_password, KeyOutcome, MaskedInput, MASK_GLYPH};

/// Prompt shown before the password is read.
pub fn password_prompt(user: &str) -> String {
    format!("Enter password for user '{user}': ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_the_user() {
        assert_eq!(
            password_prompt("alice"),
            "Enter password for user 'alice': "
        );
    }
}

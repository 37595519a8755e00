use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use weather_report_core::{PromptError, Prompter};

/// Terminal prompts rendered by `inquire`. The API key is masked while typed.
#[derive(Debug, Clone, Copy, Default)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn ask(&mut self, message: &str) -> Result<String, PromptError> {
        Text::new(message).prompt().map_err(map_inquire_error)
    }

    fn ask_secret(&mut self, message: &str) -> Result<String, PromptError> {
        Password::new(message)
            .without_confirmation()
            .with_display_mode(PasswordDisplayMode::Masked)
            .prompt()
            .map_err(map_inquire_error)
    }
}

fn map_inquire_error(err: InquireError) -> PromptError {
    match err {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            PromptError::Cancelled
        }
        InquireError::IO(io) => PromptError::Io(io),
        other => PromptError::Backend(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn escape_and_ctrl_c_cancel_the_prompt() {
        assert!(matches!(
            map_inquire_error(InquireError::OperationCanceled),
            PromptError::Cancelled
        ));
        assert!(matches!(
            map_inquire_error(InquireError::OperationInterrupted),
            PromptError::Cancelled
        ));
    }

    #[test]
    fn io_failures_keep_their_source() {
        let err = InquireError::IO(io::Error::new(io::ErrorKind::UnexpectedEof, "eof"));
        match map_inquire_error(err) {
            PromptError::Io(io) => assert_eq!(io.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn other_failures_are_described() {
        let err = map_inquire_error(InquireError::NotTTY);
        assert!(matches!(err, PromptError::Backend(_)));
        assert!(err.to_string().starts_with("prompt failed: "));
    }
}

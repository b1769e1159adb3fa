//! Prompting seam for author information.
//!
//! The generator only prompts when the configuration still carries a
//! placeholder value. Automation contexts (dry runs, tests) use
//! [`SilentPrompt`] and never block on input.

use std::io::{self, BufRead, Write};

/// Source of interactively supplied values.
pub trait Prompt: Send + Sync {
    /// Ask for a value, returning `default` when the answer is empty or
    /// input is unavailable.
    fn ask(&self, label: &str, default: &str) -> String;
}

/// Prompts on stdin/stdout.
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&self, label: &str, default: &str) -> String {
        print!("{label}: ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(_) => {
                let value = line.trim();
                if value.is_empty() {
                    default.to_string()
                } else {
                    value.to_string()
                }
            }
            Err(_) => default.to_string(),
        }
    }
}

/// Never asks; always returns the default.
#[derive(Debug, Default)]
pub struct SilentPrompt;

impl Prompt for SilentPrompt {
    fn ask(&self, _label: &str, default: &str) -> String {
        default.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_prompt_returns_default() {
        let prompt = SilentPrompt;
        assert_eq!(prompt.ask("Author name", "Your Name"), "Your Name");
    }
}

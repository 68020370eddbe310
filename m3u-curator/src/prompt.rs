use std::path::PathBuf;

use anyhow::Result;
use inquire::{Confirm, Text};

/// The questions asked while curating a playlist
pub trait Prompter {
    fn playlist_path(&mut self) -> Result<PathBuf>;
    fn confirm_filter(&mut self, allowlist_file: &str) -> Result<bool>;
    fn confirm_already_edited(&mut self, allowlist_file: &str) -> Result<bool>;
    /// Block until the user has finished editing the allow-list
    fn wait_for_edit(&mut self) -> Result<()>;
}

/// Asks on the terminal
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn playlist_path(&mut self) -> Result<PathBuf> {
        let path = Text::new("Enter the path to your extended m3u file:")
            .with_validator(inquire::required!())
            .prompt()?;
        Ok(PathBuf::from(path.trim()))
    }

    fn confirm_filter(&mut self, allowlist_file: &str) -> Result<bool> {
        Ok(Confirm::new(&format!(
            "Would you like to filter the M3U file by the {} file?",
            allowlist_file
        ))
        .with_default(false)
        .prompt()?)
    }

    fn confirm_already_edited(&mut self, allowlist_file: &str) -> Result<bool> {
        Ok(
            Confirm::new(&format!("Have you already modified '{}'?", allowlist_file))
                .with_default(true)
                .prompt()?,
        )
    }

    fn wait_for_edit(&mut self) -> Result<()> {
        Text::new("Press Enter when you're ready to proceed...").prompt()?;
        Ok(())
    }
}

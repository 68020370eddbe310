use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use log::{debug, info};
use m3u_groups_rs::{AllowList, load_playlist, save_filtered, titles_path, write_titles};

use crate::{Config, Prompter, Report, Reporter};

/// How a curating session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Titles were exported, filtering was declined
    Exported { titles_path: PathBuf },
    /// Filtering was requested but the allow-list file was gone
    AllowlistMissing { titles_path: PathBuf },
    Filtered { path: PathBuf },
}

/// Drives a playlist through export, allow-list editing and filtering
pub struct Curator<P, R> {
    config: Config,
    prompter: P,
    reporter: R,
}

impl<P: Prompter, R: Reporter> Curator<P, R> {
    pub fn new(config: Config, prompter: P, reporter: R) -> Self {
        Self {
            config,
            prompter,
            reporter,
        }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn run(&mut self, playlist_path: Option<PathBuf>) -> Result<Outcome> {
        let playlist_path = match playlist_path {
            Some(v) => v,
            None => self.prompter.playlist_path()?,
        };

        let playlist = load_playlist(&playlist_path)
            .with_context(|| format!("Failed to load playlist {}", playlist_path.display()))?;
        info!(
            "Parsed {} entries in {} groups from {}",
            playlist.entry_count(),
            playlist.len(),
            playlist_path.display()
        );

        // export
        let file_name = self.config.allowlist_file().to_owned();
        let titles_path = titles_path(&playlist_path, &file_name);
        write_titles(playlist.titles(), &titles_path)
            .with_context(|| format!("Failed to export titles to {}", titles_path.display()))?;
        self.reporter.report(Report::TitlesExported {
            path: titles_path.clone(),
            count: playlist.len(),
        });
        self.reporter.report(Report::EditReminder {
            file_name: file_name.clone(),
        });

        if !self.prompter.confirm_filter(&file_name)? {
            return Ok(Outcome::Exported { titles_path });
        }

        if !titles_path.exists() {
            self.reporter.report(Report::AllowlistMissing {
                file_name,
                directory: titles_path.parent().unwrap_or(Path::new("")).to_owned(),
            });
            return Ok(Outcome::AllowlistMissing { titles_path });
        }

        if !self.prompter.confirm_already_edited(&file_name)? {
            self.reporter.report(Report::EditInstruction { file_name });
            self.prompter.wait_for_edit()?;
        }

        // filter
        let allowed = if self.config.skip_export_header() {
            AllowList::read_skipping_header(&titles_path)
        } else {
            AllowList::read(&titles_path)
        }
        .with_context(|| format!("Failed to read allow-list {}", titles_path.display()))?;
        self.reporter.report(Report::AllowlistLoaded {
            path: titles_path,
            count: allowed.len(),
        });

        let filtered = playlist.filter(&allowed);
        debug!("Kept {} of {} groups", filtered.len(), playlist.len());

        let path = save_filtered(
            &filtered,
            &playlist_path,
            self.config.filtered_tag(),
            &Local::now().naive_local(),
        )
        .context("Failed to save filtered playlist")?;
        self.reporter.report(Report::FilteredSaved {
            path: path.clone(),
            groups: filtered.len(),
            entries: filtered.entry_count(),
        });

        Ok(Outcome::Filtered { path })
    }
}

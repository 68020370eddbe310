use std::{fmt::Display, path::PathBuf};

/// Something the user should hear about while curating
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    TitlesExported { path: PathBuf, count: usize },
    EditReminder { file_name: String },
    AllowlistMissing { file_name: String, directory: PathBuf },
    EditInstruction { file_name: String },
    AllowlistLoaded { path: PathBuf, count: usize },
    FilteredSaved { path: PathBuf, groups: usize, entries: usize },
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitlesExported { path, count } => {
                write!(f, "Exported {} group-titles to {}", count, path.display())
            }
            Self::EditReminder { file_name } => write!(
                f,
                "Reminder: You can now go ahead and modify '{}' with the group titles you want to keep.",
                file_name
            ),
            Self::AllowlistMissing {
                file_name,
                directory,
            } => write!(f, "{} not found in {}.", file_name, directory.display()),
            Self::EditInstruction { file_name } => write!(
                f,
                "Please go ahead and modify '{}' with the group titles you want to keep.",
                file_name
            ),
            Self::AllowlistLoaded { path, count } => write!(
                f,
                "Loaded {} allowed group titles from {}.",
                count,
                path.display()
            ),
            Self::FilteredSaved {
                path,
                groups,
                entries,
            } => write!(
                f,
                "Filtered playlist saved as {} ({} groups, {} entries)",
                path.display(),
                groups,
                entries
            ),
        }
    }
}

pub trait Reporter {
    fn report(&mut self, report: Report);
}

/// Prints every report on its own line to stdout
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, report: Report) {
        println!("{}", report);
    }
}

/// Collects reports, e.g. to inspect them afterwards
impl Reporter for Vec<Report> {
    fn report(&mut self, report: Report) {
        self.push(report);
    }
}

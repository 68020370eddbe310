use std::{
    ffi::OsStr,
    fmt::Display,
    fs, io,
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;

use crate::format::{Entry, Playlist, directives};

/// Infix placed between the original file stem and the timestamp
pub const FILTERED_TAG: &str = "_filtered_";
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const M3U_EXTENSION: &str = ".m3u";

impl Display for Playlist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // header
        writeln!(f, "{}", directives::EXTM3U)?;

        // groups are already sorted by title
        for it in self.entries() {
            it.fmt(f)?;
        }

        Ok(())
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.metadata())?;
        writeln!(f, "{}", self.location())
    }
}

impl Playlist {
    /// Write the playlist to `path`, replacing any existing file
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, self.to_string())
    }
}

/// Name of the filtered copy of `original`, in the same directory.
///
/// `channels.m3u` becomes `channels<tag><timestamp>.m3u`; names without the
/// `.m3u` extension keep their full name as the stem.
pub fn filtered_path(original: impl AsRef<Path>, tag: &str, timestamp: &NaiveDateTime) -> PathBuf {
    let original = original.as_ref();
    let file_name = original.file_name().unwrap_or_default();
    let stem = match file_name.to_str() {
        Some(name) => OsStr::new(name.strip_suffix(M3U_EXTENSION).unwrap_or(name)),
        // not UTF-8, keep the raw bytes of the name
        None if Path::new(file_name).extension() == Some(OsStr::new(&M3U_EXTENSION[1..])) => {
            Path::new(file_name).file_stem().unwrap_or(file_name)
        }
        None => file_name,
    };

    let mut name = stem.to_os_string();
    name.push(tag);
    name.push(timestamp.format(TIMESTAMP_FORMAT).to_string());
    name.push(M3U_EXTENSION);
    original.with_file_name(name)
}

/// Save `playlist` next to `original` under its filtered name, returning the written path
pub fn save_filtered(
    playlist: &Playlist,
    original: impl AsRef<Path>,
    tag: &str,
    timestamp: &NaiveDateTime,
) -> io::Result<PathBuf> {
    let path = filtered_path(original, tag, timestamp);
    playlist.save(&path)?;
    Ok(path)
}

use std::{
    collections::BTreeSet,
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::format::Playlist;

pub const ALLOWLIST_FILE_NAME: &str = "GroupTitles.txt";
pub const HEADER_TITLE: &str = "Unique Group-title List";
pub const HEADER_RULE: &str = "========================================";

/// Path of the title list named `file_name`, next to the playlist
pub fn titles_path(playlist_path: impl AsRef<Path>, file_name: &str) -> PathBuf {
    playlist_path
        .as_ref()
        .parent()
        .unwrap_or(Path::new(""))
        .join(file_name)
}

/// Write the header followed by every distinct title, sorted, one per line
pub fn write_titles<'a>(
    titles: impl IntoIterator<Item = &'a str>,
    path: impl AsRef<Path>,
) -> io::Result<()> {
    let titles: BTreeSet<&str> = titles.into_iter().collect();

    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{}", HEADER_TITLE)?;
    writeln!(writer, "{}", HEADER_RULE)?;
    for title in titles {
        writeln!(writer, "{}", title)?;
    }

    writer.flush()
}

/// Export the group titles of `playlist` to `GroupTitles.txt` next to the playlist file
pub fn export_titles(playlist: &Playlist, playlist_path: impl AsRef<Path>) -> io::Result<PathBuf> {
    let path = titles_path(playlist_path, ALLOWLIST_FILE_NAME);
    write_titles(playlist.titles(), &path)?;
    Ok(path)
}

use std::{collections::HashSet, fs, io, path::Path};

use smol_str::SmolStr;

use crate::{HEADER_RULE, HEADER_TITLE, parser::split_lines};

/// Group titles a user chose to keep
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList(HashSet<SmolStr>);

impl AllowList {
    /// Every non-blank line, trimmed, is an allowed title
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        lines
            .into_iter()
            .map(str::trim)
            .filter(|x| !x.is_empty())
            .map(SmolStr::new)
            .collect()
    }

    /// Read an allow-list file. Fails with [`io::ErrorKind::NotFound`] when the file is missing.
    pub fn read(path: impl AsRef<Path>) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_lines(split_lines(&content)))
    }

    /// Like [`AllowList::read`], but drops the header written by
    /// [`crate::write_titles`] if the file still starts with it.
    pub fn read_skipping_header(path: impl AsRef<Path>) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut lines = split_lines(&content).filter(|x| !x.is_empty()).peekable();

        if lines.peek() == Some(&HEADER_TITLE) {
            lines.next();
            if lines.peek() == Some(&HEADER_RULE) {
                lines.next();
            }
        }

        Ok(Self::from_lines(lines))
    }

    pub fn contains(&self, title: &str) -> bool {
        self.0.contains(title)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(SmolStr::as_str)
    }
}

impl FromIterator<SmolStr> for AllowList {
    fn from_iter<T: IntoIterator<Item = SmolStr>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, io};

    use crate::AllowList;

    #[test]
    fn test_from_lines() {
        let allowed = AllowList::from_lines(["  News ", "", "Sports", "   ", "News"]);

        assert_eq!(allowed.len(), 2);
        assert!(allowed.contains("News"));
        assert!(allowed.contains("Sports"));
        assert!(!allowed.contains("news"));
    }

    #[test]
    fn test_read_keeps_header_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("GroupTitles.txt");
        fs::write(
            &path,
            "Unique Group-title List\n========================================\nNews\n\n",
        )
        .unwrap();

        let allowed = AllowList::read(&path).unwrap();
        assert_eq!(allowed.len(), 3);
        assert!(allowed.contains("Unique Group-title List"));
        assert!(allowed.contains("News"));
    }

    #[test]
    fn test_read_skipping_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("GroupTitles.txt");
        fs::write(
            &path,
            "\nUnique Group-title List\n========================================\nNews\nSports\n",
        )
        .unwrap();

        let allowed = AllowList::read_skipping_header(&path).unwrap();
        assert_eq!(allowed, AllowList::from_lines(["News", "Sports"]));
    }

    #[test]
    fn test_read_skipping_header_without_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("GroupTitles.txt");
        fs::write(&path, "News\nUnique Group-title List\n").unwrap();

        let allowed = AllowList::read_skipping_header(&path).unwrap();
        assert_eq!(allowed.len(), 2);
        assert!(allowed.contains("Unique Group-title List"));
    }

    #[test]
    fn test_read_cr_only_line_endings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("GroupTitles.txt");
        fs::write(&path, "News\rSports\r\rKids\r\n").unwrap();

        let allowed = AllowList::read(&path).unwrap();
        let mut titles = allowed.iter().collect::<Vec<_>>();
        titles.sort();
        assert_eq!(titles, ["Kids", "News", "Sports"]);
    }

    #[test]
    fn test_read_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = AllowList::read(dir.path().join("GroupTitles.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}

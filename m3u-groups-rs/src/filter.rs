use crate::{AllowList, format::Playlist};

impl Playlist {
    /// A new playlist holding only the groups whose title is allowed.
    ///
    /// Titles are compared exactly, case included. `self` is left untouched.
    pub fn filter(&self, allowed: &AllowList) -> Playlist {
        let mut result = Playlist::default();
        for group in self.groups().filter(|x| allowed.contains(&x.title)) {
            result.insert_group(group.clone());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::{AllowList, parse_str};

    const DATA: &str = r#"#EXTM3U
#EXTINF:-1 group-title="Sports",Channel A
http://example.com/a
#EXTINF:-1 group-title="News",Channel B
http://example.com/b
#EXTINF:-1 group-title="News",Channel C
http://example.com/c
"#;

    #[test]
    fn test_filter_keeps_allowed_groups() {
        let playlist = parse_str(DATA);
        let filtered = playlist.filter(&AllowList::from_lines(["News", "Weather"]));

        assert_eq!(filtered.titles().collect::<Vec<_>>(), ["News"]);
        assert_eq!(filtered.get("News"), playlist.get("News"));
        // source is untouched
        assert_eq!(playlist.len(), 2);
    }

    #[test]
    fn test_filter_by_own_titles_is_identity() {
        let playlist = parse_str(DATA);
        let allowed = AllowList::from_lines(playlist.titles());

        assert_eq!(playlist.filter(&allowed), playlist);
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let playlist = parse_str(DATA);
        assert!(playlist.filter(&AllowList::from_lines(["news"])).is_empty());
    }

    #[test]
    fn test_filter_empty_title_group() {
        let playlist = parse_str("#EXTINF:-1,Untitled\nhttp://example.com/u\n");

        assert!(playlist.filter(&AllowList::default()).is_empty());
        assert_eq!(playlist.filter(&AllowList::from_lines([""])).len(), 0);
    }
}

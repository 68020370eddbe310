use std::{
    error::Error,
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader, Read},
    mem::{replace, take},
    path::Path,
};

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use smol_str::SmolStr;

use crate::format::{Entry, Playlist, directives};

pub struct Parser<'a>(Box<dyn ParserImplTrait + 'a>);

impl<'a> Parser<'a> {
    pub fn new<T: BufRead + 'a>(reader: T) -> Self {
        Self(Box::new(ParserImpl::new(reader)))
    }

    pub fn parse(&mut self) -> Result<(), ParseError> {
        self.0.parse()
    }

    pub fn get_result(&mut self) -> Playlist {
        self.0.get_result()
    }
}

#[derive(Debug)]
pub enum ParseError {
    IoError(io::Error),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::IoError(e) => e.fmt(f),
        }
    }
}
impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self {
            Self::IoError(e) => Some(e),
        }
    }
}
impl From<io::Error> for ParseError {
    fn from(value: io::Error) -> Self {
        Self::IoError(value)
    }
}

/// Trimmed lines of `text`. `\n`, `\r\n` and a lone `\r` all end a line.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\r', '\n']).map(str::trim)
}

/// Parse a whole playlist held in memory
pub fn parse_str(text: &str) -> Playlist {
    let mut grouper = Grouper::default();
    for line in split_lines(text) {
        grouper.feed(line);
    }
    grouper.finish()
}

/// Read and parse the playlist at `path`
pub fn load_playlist(path: impl AsRef<Path>) -> Result<Playlist, ParseError> {
    let file = File::open(path.as_ref())?;
    let mut parser = Parser::new(BufReader::new(file));
    parser.parse()?;
    Ok(parser.get_result())
}

lazy_static! {
    /// Text after the first `group-title="`, up to the closing quote or the end of line
    static ref GROUP_TITLE_REGEX: Regex =
        Regex::new(&format!("{}([^\"]*)", directives::GROUP_TITLE))
            .expect("Regular expression error");
}

/// Extract the `group-title` attribute of a `#EXTINF` line.
///
/// Only the first occurrence counts. A line without the attribute yields an
/// empty title rather than an error.
pub fn extract_group_title(metadata: &str) -> &str {
    GROUP_TITLE_REGEX
        .captures(metadata)
        .and_then(|x| x.get(1))
        .map(|x| x.as_str())
        .unwrap_or_default()
}

trait ParserImplTrait {
    fn parse(&mut self) -> Result<(), ParseError>;
    fn get_result(&mut self) -> Playlist;
}

#[derive(Debug, Default, PartialEq)]
enum ParseState {
    #[default]
    AwaitingMetadata,
    AwaitingMedia(SmolStr),
}

/// Pairs metadata lines with media lines and sorts the pairs into groups
#[derive(Default)]
struct Grouper {
    state: ParseState,
    playlist: Playlist,
}

impl Grouper {
    /// Feed one already trimmed line
    fn feed(&mut self, line: &str) {
        if line.starts_with(directives::EXTINF) {
            if let ParseState::AwaitingMedia(dropped) = &self.state {
                debug!("Dropping metadata without media: {}", dropped);
            }
            self.state = ParseState::AwaitingMedia(line.into());
            return;
        }

        // blank lines and other directives
        if line.is_empty() || line.starts_with('#') {
            return;
        }

        match replace(&mut self.state, ParseState::AwaitingMetadata) {
            ParseState::AwaitingMedia(metadata) => self.playlist.push(Entry::new(metadata, line)),
            ParseState::AwaitingMetadata => debug!("Ignoring media without metadata: {}", line),
        }
    }

    fn finish(&mut self) -> Playlist {
        if let ParseState::AwaitingMedia(dropped) = take(&mut self.state) {
            debug!("Dropping trailing metadata without media: {}", dropped);
        }
        take(&mut self.playlist)
    }
}

struct ParserImpl<T: BufRead> {
    reader: T,
    buffer: String,
    grouper: Grouper,
}

impl<T: BufRead> ParserImpl<T> {
    pub fn new(reader: T) -> Self {
        Self {
            reader,
            buffer: String::new(),
            grouper: Grouper::default(),
        }
    }
}

impl<T: BufRead> ParserImplTrait for ParserImpl<T> {
    fn parse(&mut self) -> Result<(), ParseError> {
        self.buffer.clear();
        self.reader.read_to_string(&mut self.buffer)?;
        for line in split_lines(&self.buffer) {
            self.grouper.feed(line);
        }

        Ok(())
    }

    fn get_result(&mut self) -> Playlist {
        self.grouper.finish()
    }
}

impl From<&str> for Playlist {
    fn from(value: &str) -> Self {
        parse_str(value)
    }
}

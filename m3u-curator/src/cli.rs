use clap::Parser;
use std::path::PathBuf;

use crate::DEFAULT_CONFIG_PATH;

#[derive(Parser, Debug)]
#[command(
    name = "m3u-curator",
    about = "Keep only the wanted group-titles of an extended m3u playlist",
    version
)]
pub struct Args {
    /// Path to the extended m3u file, asked for when omitted
    pub playlist: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, env = "M3U_CURATOR_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use std::path::Path;

    use crate::Args;

    #[test]
    fn test_command() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_args() {
        let args = Args::parse_from(["m3u-curator", "-v", "--config", "my.yml", "list.m3u"]);
        assert!(args.verbose);
        assert_eq!(args.config, Path::new("my.yml"));
        assert_eq!(args.playlist.as_deref(), Some(Path::new("list.m3u")));
    }
}

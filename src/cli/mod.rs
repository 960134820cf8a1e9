use crate::constants::{LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use clap::Parser;

/// A mood check-in companion with AI reflections and PHQ-2 screening
#[derive(Parser, Debug)]
#[clap(name = "mind-oasis", about = "A mood check-in companion with AI reflections and PHQ-2 screening")]
#[clap(author, version, long_about = None)]
pub struct ServerArgs {
    /// Port to listen on (overrides the PORT environment variable)
    #[clap(short = 'p', long)]
    pub port: Option<u16>,

    /// Log output format (text or json)
    #[clap(long, default_value = LOG_FORMAT_TEXT, value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON])]
    pub log_format: String,

    /// Print verbose output
    #[clap(short = 'v', long)]
    pub verbose: bool,
}

impl ServerArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        ServerArgs::parse_from(std::env::args())
    }
}

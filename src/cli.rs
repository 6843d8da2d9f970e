use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "configs/downloader.json";

#[derive(Parser, Debug)]
#[command(
    name = "segments-mirror",
    version,
    about = "Mirror the files of a directory-listing page (e.g. BRouter segments4) to a local directory."
)]
pub struct Args {
    #[arg(
        long,
        default_value = DEFAULT_CONFIG_PATH,
        help = "JSON config file with Segments4URL and FilePath"
    )]
    pub config: PathBuf,
    #[arg(
        long,
        help = "Treat non-2xx HTTP responses as errors instead of saving the body anyway"
    )]
    pub strict_status: bool,
    #[arg(long, value_name = "SECS", help = "Per-request timeout, none by default")]
    pub timeout: Option<u64>,
    #[arg(short, long, help = "Hide download progress bars")]
    pub quiet: bool,
    #[arg(short, long, help = "Enable debug logging")]
    pub verbose: bool,
}

pub fn parse_args() -> Args {
    Args::parse()
}

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(name = "logtally")]
#[clap(about = "Logtally: count log lines by severity level", long_about = None)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Log file to analyze
    // Optional here so a missing path exits with our usage text and code 1
    pub file: Option<String>,

    /// Show the entries for this level (ERROR, WARN, INFO, etc.), case-insensitive
    pub level: Option<String>,

    /// Output results in JSON format
    #[clap(long)]
    pub json: bool,

    /// Don't report lines that fail to parse
    #[clap(short, long)]
    pub quiet: bool,
}

use camino::Utf8PathBuf;
use clap::Parser;

/// Command line for the one-shot layout migration.
#[derive(Parser, Debug)]
#[command(
    name = "relayout",
    version,
    about = "Migrate a project to the app/tools/tests layout"
)]
pub struct Cli {
    /// Project root to migrate (defaults to the built-in project path).
    #[arg(short = 'C', long = "root", env = "RELAYOUT_ROOT")]
    pub root: Option<Utf8PathBuf>,
    /// Print the step log as JSON instead of the text summary.
    #[arg(long = "json")]
    pub json: bool,
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}

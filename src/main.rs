use std::path::PathBuf;

use atlas_apply_action::ActionOptions;
use clap::Parser;

#[derive(Parser)]
#[command(name = "atlas-apply-action")]
#[command(version)]
#[command(
    about = "Apply database migrations with atlas from a GitHub workflow",
    long_about = "Reads the action inputs from INPUT_* environment variables, runs \
                  `atlas migrate apply` and writes the result to GITHUB_OUTPUT."
)]
struct Cli {
    /// atlas executable to run
    #[arg(long, env = "ATLAS_BIN", default_value = "atlas")]
    atlas_bin: PathBuf,
    /// Directory to run atlas in (defaults to the current directory)
    #[arg(long, env = "ATLAS_WORKING_DIR")]
    working_dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let options = ActionOptions { atlas_bin: cli.atlas_bin, working_dir: cli.working_dir };
    if atlas_apply_action::migrate_apply(options).is_err() {
        std::process::exit(1);
    }
}

use clap::Parser;

/// The bundle is fully determined by the built-in allow-list and ignore list,
/// so the only flags are clap's own `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Bundle the project sources under the current directory into full_project_code.txt"
)]
pub struct Cli {}

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "kan", about = "a three-column task board for the terminal", version)]
struct Cli {
    /// Keep tasks in a different directory (default: ~/.kanso)
    #[arg(short = 'd', long = "data-dir")]
    data_dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = kanso::tui::run(cli.data_dir) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

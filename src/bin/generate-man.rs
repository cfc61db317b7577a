// Writes the stickerboard(1) man page to stdout

use clap::CommandFactory;
use stickerboard::cli::Cli;

fn main() -> std::io::Result<()> {
    let man = clap_mangen::Man::new(Cli::command());
    man.render(&mut std::io::stdout())
}

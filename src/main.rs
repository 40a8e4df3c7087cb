use clap::Parser;

use blockgen::{io_utils::cli_hint, write_files, BlockgenError, Template};

/// Generate numbered binary parameter blocks from a hex template.
#[derive(Parser)]
#[command(
    name = "blockgen",
    version,
    about = "Generate numbered binary parameter blocks from a hex template",
    long_about = "Produces COUNT small binary files whose contents are the \
decoded hex TEMPLATE. A single run of NN markers inside the template is \
replaced by the file's sequence number, little-endian, one byte per marker. \
Files are named <BASENAME>-<4-digit index>.bin and are typically fed to a \
downstream converter.",
    after_help = "Example:\n  blockgen gametitle 4 NNNNNNNNa0380408\n  \
Created gametitle-0000.bin\n  Created gametitle-0001.bin\n  \
Created gametitle-0002.bin\n  Created gametitle-0003.bin\n\n\
The first four bytes of gametitle-0002.bin are 02 00 00 00."
)]
struct Args {
    /// Output file name prefix
    basename: String,
    /// Number of files to produce
    count: u32,
    /// Hex template with an optional NN sequence field
    template: String,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", cli_hint(&e));
        std::process::exit(1);
    }
}

fn run() -> Result<(), BlockgenError> {
    let args = Args::parse();
    let template = Template::parse(&args.template)?;
    write_files(&template, &args.basename, args.count)
}

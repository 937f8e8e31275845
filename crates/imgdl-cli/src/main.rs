use imgdl_core::logging;

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible.
    if let Err(err) = logging::init_logging() {
        eprintln!("imgdl: {:#}", err);
    }

    if let Err(err) = Cli::run_from_args().await {
        eprintln!("imgdl error: {:#}", err);
        std::process::exit(1);
    }
}

//! jsonsearch CLI - search JSON documents from the command line
//!
//! # Examples
//!
//! ```bash
//! # Find organization 101 and everything related to it
//! jsonsearch --dir data --index-by organizations._id \
//!     --relationships organizations._id:tickets.organization_id \
//!     search organizations _id 101
//!
//! # List loaded documents
//! jsonsearch --files data/users.json list-documents
//!
//! # Show configuration
//! jsonsearch show-config
//! ```

use clap::Parser;
use jsonsearch::cli::output::print_error;
use jsonsearch::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

fn init_logging(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jsonsearch=warn"));

    // stdout carries results; logs go to stderr
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_json);

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

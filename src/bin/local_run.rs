//! local-run - run a PyCascading script on the local machine

use clap::Parser;

use pycascading_launch::cli::LocalArgs;
use pycascading_launch::commands;

fn main() {
    let args = LocalArgs::parse();
    let code = commands::local::run(&args);
    std::process::exit(code);
}

//! remote-deploy - ship a PyCascading job to a Hadoop server

use clap::Parser;
use clap::error::ErrorKind;

use pycascading_launch::cli::DeployArgs;
use pycascading_launch::commands;
use pycascading_launch::exit::ExitCode;

fn main() -> std::process::ExitCode {
    let args = match DeployArgs::try_parse() {
        Ok(args) => args,
        Err(e) if e.kind() == ErrorKind::DisplayVersion => e.exit(),
        Err(e) => {
            let _ = e.print();
            println!("{}", DeployArgs::usage());
            return ExitCode::Usage.into();
        }
    };
    commands::deploy::run(&args).into()
}

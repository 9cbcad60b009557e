//! `html5prescan`: prescan standard input and print what encoding it declares.

use std::io::Read;
use std::process::ExitCode;

use log::error;
use prescan_core::Prescanner;

const USAGE: &str = "\
Prescan a byte stream and print its WHATWG encoding.

Usage: html5prescan < FILE

Reads standard input and prints the encoding label, encoding name,
decoder name, and the matched span and text:

    $ printf '<meta charset=greek>' | html5prescan
    label=greek name=ISO-8859-7 decoder=ISO-8859-7 start=0 end=20 match=\"<meta charset=greek>\"

Set RUST_LOG=debug to see scanning decisions on stderr.";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if std::env::args_os().len() > 1 {
        println!("{USAGE}");
        return ExitCode::from(2);
    }

    let mut input = Vec::new();
    if let Err(e) = std::io::stdin().lock().read_to_end(&mut input) {
        error!("failed to read standard input: {e}");
        return ExitCode::FAILURE;
    }

    match Prescanner::builtin() {
        Ok(prescanner) => {
            let (result, _) = prescanner.scan(&input);
            println!("{result}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

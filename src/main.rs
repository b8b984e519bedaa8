// SPDX-License-Identifier: MPL-2.0
use gallery_lens::{cli, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", cli::USAGE);
        return ExitCode::SUCCESS;
    }

    let flags = match cli::parse(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{}", cli::USAGE);
            return ExitCode::from(2);
        }
    };

    logging::init(flags.verbose);
    cli::run(flags)
}

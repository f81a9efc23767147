use std::io;
use std::process;

use todo_report::{logging, run, Config, ReportError, UreqTransport};
use tracing::debug;

fn main() {
    logging::init();

    let config = match Config::try_from_args(std::env::args_os()) {
        Ok(config) => config,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            debug!(error = %e, "invalid arguments");
            exit_with(&ReportError::usage(&e));
        }
    };

    let transport = UreqTransport::new(config.timeout());
    if let Err(e) = run(&config, &transport, &mut io::stdout().lock()) {
        exit_with(&e);
    }
}

fn exit_with(err: &ReportError) -> ! {
    println!("{err}");
    process::exit(err.exit_code());
}

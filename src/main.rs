use rask_logger::app;
use std::process::ExitCode;

fn main() -> ExitCode {
    app::main()
}

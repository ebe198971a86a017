use std::process::ExitCode;

fn main() -> ExitCode {
    ctok_drv::main_entry()
}

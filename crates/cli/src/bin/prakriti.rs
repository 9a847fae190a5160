use std::process::ExitCode;

fn main() -> ExitCode {
    prakriti_cli::main_entry()
}

//! Entry point for the `pulse` command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = pulse_cli::run() {
        eprintln!("pulse: {err}");
        std::process::exit(1);
    }
}

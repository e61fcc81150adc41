use std::fs;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

pub const DEFAULT_OUTPUT: &str = ".tx_temp_output.ts";
pub const DEFAULT_RUNNER: &str = "npx tsx";

pub fn write_output(code: &str, path: &Path) -> io::Result<()> {
    fs::write(path, code)
}

/// Writes `code` to `path` and executes it with `command`, a program followed by
/// its arguments; the file path is appended last. Waits for the child to exit.
pub fn run(code: &str, path: &Path, command: &str) -> io::Result<ExitStatus> {
    let mut parts = command.split_whitespace();
    let Some(program) = parts.next() else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "runner command is empty",
        ));
    };

    write_output(code, path)?;
    Command::new(program).args(parts).arg(path).status()
}

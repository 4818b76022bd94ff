use std::io::{self, Write as _};
use std::time::Instant;

/// Runs `task` inside a collapsible CI log group and reports how long it took.
pub(crate) fn step<T>(name: &str, task: impl FnOnce() -> anyhow::Result<T>) -> anyhow::Result<T> {
    flush();
    eprintln!("::group::{name}");
    let start = Instant::now();

    let result = task();

    flush();
    match &result {
        Ok(_) => eprintln!("{name}: ok in {:.2?}", start.elapsed()),
        Err(error) => eprintln!("{name}: failed after {:.2?}: {error:#}", start.elapsed()),
    }
    eprintln!("::endgroup::");

    result
}

fn flush() {
    // Keep the group markers ordered with the output of the commands.
    let _ = io::stdout().flush();
    let _ = io::stderr().flush();
}

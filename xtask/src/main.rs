#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

mod cli;
mod fuzz;
mod step;
mod tasks;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::{env, fmt};

use xshell::Shell;

use crate::cli::{FuzzOptions, Task};

const CARGO: &str = env!("CARGO");
const LOCAL_CARGO_ROOT: &str = "./target/local_root/";

/// Crate that must keep building without `std`.
const CORE_CRATE: &str = "bounded-view";

const FUZZ_TARGETS: &[&str] = &["view_slicing", "view_writes"];

static VERBOSE: AtomicBool = AtomicBool::new(false);

fn main() -> anyhow::Result<()> {
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            cli::print_help();
            return Err(e);
        }
    };

    VERBOSE.store(args.verbose, Ordering::Relaxed);

    let sh = Shell::new()?;
    let root = project_root()?;
    sh.change_dir(&root);

    // Binaries installed by the tasks take precedence over the system ones.
    let mut paths = vec![root.join(LOCAL_CARGO_ROOT).join("bin")];
    paths.extend(env::split_paths(&env::var_os("PATH").unwrap_or_default()));
    sh.set_var("PATH", env::join_paths(paths)?);

    match args.task {
        Task::Help => cli::print_help(),
        Task::Fmt => tasks::fmt(&sh)?,
        Task::Lints => tasks::lints(&sh)?,
        Task::NoStd => tasks::no_std(&sh)?,
        Task::Test { no_run } => tasks::test(&sh, no_run)?,
        Task::Fuzz(options) => fuzz::run(&sh, options)?,
        Task::Ci => {
            tasks::fmt(&sh)?;
            tasks::lints(&sh)?;
            tasks::no_std(&sh)?;
            tasks::test(&sh, false)?;
            fuzz::run(&sh, FuzzOptions::default())?;
        }
        Task::Clean => tasks::clean(&sh)?,
    }

    Ok(())
}

/// Prints `message` when running with `--verbose`.
fn trace(message: fmt::Arguments<'_>) {
    if VERBOSE.load(Ordering::Relaxed) {
        eprintln!("{message}");
    }
}

fn project_root() -> anyhow::Result<PathBuf> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .ok_or_else(|| anyhow::anyhow!("xtask manifest has no parent directory"))?;
    Ok(root.to_path_buf())
}

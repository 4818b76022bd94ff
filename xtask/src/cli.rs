const HELP: &str = "\
cargo xtask

USAGE:
  cargo xtask [-v] <TASK> [TASK OPTIONS]

FLAGS:
  -h, --help      Prints help information
  -v, --verbose   Prints additional execution traces

TASKS:
  fmt                     Check formatting
  lints                   Run clippy on every target, warnings are errors
  nostd                   Build-check bounded-view without std, with and without alloc
  test [--no-run]         Run the workspace tests (compile-fail cases included)
  fuzz [--duration <SECONDS>] [--target <NAME>]
                          Fuzz one target, or each of them, for a limited time (default is 5s)
  ci                      fmt, lints, nostd, test and a short fuzzing session
  clean                   Remove build and fuzzing artifacts
";

pub(crate) fn print_help() {
    println!("{HELP}");
}

pub(crate) struct Args {
    pub(crate) verbose: bool,
    pub(crate) task: Task,
}

pub(crate) enum Task {
    Help,
    Fmt,
    Lints,
    NoStd,
    Test { no_run: bool },
    Fuzz(FuzzOptions),
    Ci,
    Clean,
}

#[derive(Default)]
pub(crate) struct FuzzOptions {
    pub(crate) duration: Option<u32>,
    pub(crate) target: Option<String>,
}

pub(crate) fn parse_args() -> anyhow::Result<Args> {
    let mut args = pico_args::Arguments::from_env();

    let verbose = args.contains(["-v", "--verbose"]);

    let task = if args.contains(["-h", "--help"]) {
        Task::Help
    } else {
        match args.subcommand()?.as_deref() {
            None => Task::Help,
            Some("fmt") => Task::Fmt,
            Some("lints") => Task::Lints,
            Some("nostd") => Task::NoStd,
            Some("test") => Task::Test {
                no_run: args.contains("--no-run"),
            },
            Some("fuzz") => Task::Fuzz(FuzzOptions {
                duration: args.opt_value_from_str("--duration")?,
                target: args.opt_value_from_str("--target")?,
            }),
            Some("ci") => Task::Ci,
            Some("clean") => Task::Clean,
            Some(unknown) => anyhow::bail!("unknown task: {unknown}"),
        }
    };

    let leftover = args.finish();
    if !leftover.is_empty() {
        anyhow::bail!("unexpected arguments: {leftover:?}");
    }

    Ok(Args { verbose, task })
}

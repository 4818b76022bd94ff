//! Bounds violations are post-monomorphization errors: `cargo check` accepts them and only a real
//! build reports them. Every file under `tests/compile_fail/` is built as a binary of a scratch
//! crate depending on `bounded-view`. A file starting with `// error: <message>` must fail to
//! build with that message, any other file must build.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const CASES_FOLDER: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/compile_fail");
const ERROR_PREFIX: &str = "// error: ";

struct Case {
    name: String,
    source: String,
    error: Option<String>,
}

fn read_cases() -> Vec<Case> {
    let mut cases: Vec<Case> = fs::read_dir(CASES_FOLDER)
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();
            let name = path.file_stem().unwrap().to_str().unwrap().to_owned();
            let source = fs::read_to_string(&path).unwrap();
            let error = source
                .lines()
                .next()
                .and_then(|line| line.strip_prefix(ERROR_PREFIX))
                .map(str::to_owned);

            Case { name, source, error }
        })
        .collect();

    cases.sort_by(|a, b| a.name.cmp(&b.name));
    cases
}

struct ScratchCrate {
    root: PathBuf,
}

impl ScratchCrate {
    fn new(name: &str, cases: &[Case]) -> Self {
        let root = Path::new(env!("CARGO_TARGET_TMPDIR")).join(name);
        let bin_folder = root.join("src/bin");

        if bin_folder.exists() {
            fs::remove_dir_all(&bin_folder).unwrap();
        }
        fs::create_dir_all(&bin_folder).unwrap();

        let library = Path::new(env!("CARGO_MANIFEST_DIR")).join("../bounded-view");
        let manifest = format!(
            "[package]\nname = \"{name}\"\nversion = \"0.0.0\"\nedition = \"2021\"\npublish = false\n\n\
             [dependencies]\nbounded-view = {{ path = {library:?} }}\n\n[workspace]\n",
            library = library.display().to_string(),
        );
        fs::write(root.join("Cargo.toml"), manifest).unwrap();

        for case in cases {
            fs::write(bin_folder.join(format!("{}.rs", case.name)), &case.source).unwrap();
        }

        Self { root }
    }

    fn build(&self, bin: &str) -> Output {
        Command::new(env!("CARGO"))
            .args(["build", "--quiet", "--offline", "--bin", bin])
            .current_dir(&self.root)
            .env("CARGO_TARGET_DIR", self.root.join("target"))
            .output()
            .unwrap()
    }
}

#[test]
fn bounds_violations_fail_to_build() {
    let cases = read_cases();
    assert!(cases.iter().any(|case| case.error.is_some()));
    assert!(cases.iter().any(|case| case.error.is_none()));

    let scratch = ScratchCrate::new("bounded_view_compile_fail", &cases);

    for case in &cases {
        println!("Build {}", case.name);

        let output = scratch.build(&case.name);
        let stderr = String::from_utf8_lossy(&output.stderr);

        match &case.error {
            None => assert!(output.status.success(), "{} failed to build:\n{stderr}", case.name),
            Some(error) => {
                assert!(!output.status.success(), "{} built successfully", case.name);
                assert!(
                    stderr.contains(error.as_str()),
                    "{} did not fail with `{error}`:\n{stderr}",
                    case.name
                );
            }
        }
    }
}

//! Built-in task catalog
//!
//! The chores the tool exists to run: toolchain setup, release build, test
//! suite, nightly clippy and cleanup for the envvars library, grouped into
//! `build`, `test`, `clippy` and `clean` namespaces. Aggregate tasks
//! sequence their namespace and flush the report.

use crate::reporter::{JobKind, JobOwner};
use crate::runner::TaskRunner;
use crate::shell;
use crate::task::Task;

/// Name of the task run when no task is named on the command line.
pub const DEFAULT_TASK: &str = "default";

const TARGET_DIR: &str = "./target";
const CLIPPY_NIGHTLY: &str = "cargo +nightly clippy --all --all-features -- -D warnings";

/// Build the standard catalog. Tasks are registered once here, at process
/// start, and never mutated afterwards.
pub fn standard() -> TaskRunner {
    let mut runner = TaskRunner::new();

    runner.register(Task::new(
        "build:rust",
        "Install and select the stable toolchain",
        &[],
        |_| {
            shell::sh("rustup install stable")?;
            shell::sh("rustup default stable")
        },
    ));
    runner.register(Task::new(
        "build:lib",
        "Build the library in release mode",
        &[],
        |reporter| {
            shell::sh("cargo build --release")?;
            reporter.record(JobKind::Building, JobOwner::Lib, "built");
            Ok(())
        },
    ));
    runner.register(Task::new(
        "build:envvars",
        "Toolchain setup and release build",
        &["build:rust", "build:lib"],
        |reporter| {
            reporter.flush();
            Ok(())
        },
    ));

    runner.register(Task::new(
        "test:lib",
        "Run the library test suite",
        &[],
        |reporter| {
            shell::sh("cargo test -- --nocapture")?;
            reporter.record(JobKind::Test, JobOwner::Lib, "tested");
            Ok(())
        },
    ));
    runner.register(Task::new(
        "test:packing",
        "Dry-run publish check",
        &["build:rust"],
        |reporter| {
            shell::sh("cargo publish --dry-run")?;
            reporter.record(JobKind::Test, JobOwner::Lib, "cargo publish has been checked");
            Ok(())
        },
    ));
    runner.register(Task::new(
        "test:envvars",
        "Build, then run tests and the publish check",
        &["build:envvars", "test:lib", "test:packing"],
        |reporter| {
            reporter.flush();
            Ok(())
        },
    ));

    runner.register(Task::new(
        "clippy:nightly",
        "Install the nightly toolchain with clippy",
        &[],
        |_| {
            shell::sh("rustup install nightly")?;
            shell::sh("rustup default nightly")?;
            shell::sh("rustup component add --toolchain=nightly clippy-preview")
        },
    ));
    runner.register(Task::new(
        "clippy:lib",
        "Lint the library on nightly",
        &[],
        |reporter| {
            shell::sh(CLIPPY_NIGHTLY)?;
            reporter.record(JobKind::Clippy, JobOwner::Lib, "checked");
            Ok(())
        },
    ));
    runner.register(Task::new(
        "clippy:envvars",
        "Nightly toolchain setup and lint",
        &["clippy:nightly", "clippy:lib"],
        |reporter| {
            reporter.flush();
            Ok(())
        },
    ));

    runner.register(Task::new(
        "clean:lib",
        "Remove build output",
        &[],
        |reporter| {
            shell::rm_rf(TARGET_DIR)?;
            reporter.record(
                JobKind::Clearing,
                JobOwner::Lib,
                format!("removed: {TARGET_DIR}"),
            );
            Ok(())
        },
    ));
    runner.register(Task::new(
        "clean:envvars",
        "Remove all build output",
        &["clean:lib"],
        |reporter| {
            reporter.flush();
            Ok(())
        },
    ));

    // test:envvars already pulls in build:envvars, so the default chain
    // runs the release build twice.
    runner.register(Task::new(
        DEFAULT_TASK,
        "Lint, test and build",
        &["clippy:envvars", "test:envvars", "build:envvars"],
        |_| Ok(()),
    ));

    runner
}

//! git integration for the bookmark file
//!
//! Everything runs the `git` binary in the directory holding the bookmark
//! file, so the user's own git configuration (identity, hooks, signing)
//! applies.

use log::debug;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use thiserror::Error;

/// Message used for automatic commits
pub const AUTO_COMMIT_MESSAGE: &str = "markr auto commit";

/// Errors that can occur while running git
#[derive(Debug, Error)]
pub enum VcsError {
    /// git could not be started
    #[error("Failed to run git: {0}")]
    Spawn(#[from] std::io::Error),

    /// git ran but reported failure
    #[error("git {command} failed: {stderr}")]
    Failed { command: String, stderr: String },

    /// The path has no file name to commit
    #[error("Not a file: {0}")]
    NotAFile(PathBuf),
}

fn git(dir: &Path) -> Command {
    let mut cmd = Command::new("git");
    cmd.arg("-C").arg(dir);
    cmd
}

fn check(command: &str, output: Output) -> Result<Output, VcsError> {
    if output.status.success() {
        Ok(output)
    } else {
        Err(VcsError::Failed {
            command: command.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

/// Whether `dir` is inside a git work tree
///
/// Any failure to ask git counts as "no".
#[must_use]
pub fn is_in_repository(dir: &Path) -> bool {
    git(dir)
        .args(["rev-parse", "--is-inside-work-tree"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .is_some_and(|o| String::from_utf8_lossy(&o.stdout).trim() == "true")
}

/// Stage and commit `file`, leaving anything else in the index alone
///
/// Returns `false` when the file had no changes to commit.
///
/// # Errors
///
/// Returns `VcsError` if git cannot be run or refuses the add or commit.
pub fn commit_file(file: &Path) -> Result<bool, VcsError> {
    let name = file
        .file_name()
        .ok_or_else(|| VcsError::NotAFile(file.to_path_buf()))?;
    let dir = match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    check("add", git(dir).arg("add").arg("--").arg(name).output()?)?;

    let unchanged = git(dir)
        .args(["diff", "--cached", "--quiet", "--"])
        .arg(name)
        .status()?
        .success();
    if unchanged {
        debug!("No changes to {} to commit", file.display());
        return Ok(false);
    }

    check(
        "commit",
        git(dir)
            .args(["commit", "--quiet", "-m", AUTO_COMMIT_MESSAGE, "--"])
            .arg(name)
            .output()?,
    )?;
    debug!("Committed {}", file.display());
    Ok(true)
}

/// Run git in `dir` with the user's arguments and the terminal attached
///
/// Returns git's exit code.
///
/// # Errors
///
/// Returns `VcsError::Spawn` if git cannot be started.
pub fn run_git<I, S>(dir: &Path, args: I) -> Result<i32, VcsError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let status = git(dir).args(args).status()?;
    Ok(status.code().unwrap_or(1))
}

//! Actions applied to matching entries
//!
//! Each match is acted on as soon as it is found. Output lines echo the
//! match details reported by the filter.

use std::ffi::OsStr;
use std::fs;
use std::io::{self, Write};
use log::debug;

use crate::errors::{FindError, FindResult};
use super::filter::Match;
use super::path;
use super::walker::Entry;

/// What to do with a matching entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Print a line describing the match
    Print,
    /// Remove the entry and report the outcome
    Delete,
}

/// Result of applying an operation to one entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Printed,
    Deleted,
    DeleteFailed,
}

impl Operation {
    /// Apply the operation to `entry`. Only errors writing to `out` are returned;
    /// a failed removal is reported on `out` and traversal goes on.
    pub fn execute(
        &self,
        entry: &Entry<'_>,
        found: Match,
        out: &mut dyn Write,
    ) -> FindResult<Outcome> {
        let path = entry.display_path();
        match self {
            Operation::Print => {
                write_line(out, print_line(found), &path)?;
                Ok(Outcome::Printed)
            }
            Operation::Delete => match fs::remove_file(entry.path()) {
                Ok(()) => {
                    write_line(out, deleted_line(found), &path)?;
                    Ok(Outcome::Deleted)
                }
                Err(source) => {
                    let err = FindError::DeleteFailed {
                        path: entry.path().to_path_buf(),
                        source,
                    };
                    debug!("{}", err);
                    write_line(out, ("Failed to delete file : ", String::new()), &path)?;
                    Ok(Outcome::DeleteFailed)
                }
            },
        }
    }
}

/// Text printed before and after the path of one output line
type Line = (&'static str, String);

fn write_line(out: &mut dyn Write, (prefix, suffix): Line, display: &OsStr) -> io::Result<()> {
    out.write_all(prefix.as_bytes())?;
    path::write_path(out, display)?;
    out.write_all(suffix.as_bytes())?;
    out.write_all(b"\n")
}

fn print_line(found: Match) -> Line {
    match found {
        Match::Name => ("", String::new()),
        Match::Modified { minutes } => {
            ("File: ", format!(", was modified {} minutes ago.", minutes))
        }
        Match::Inode { number } => ("File: ", format!(", has the i-node number {}.", number)),
    }
}

fn deleted_line(found: Match) -> Line {
    match found {
        Match::Name => ("Following path has been deleted : ", String::new()),
        Match::Modified { minutes } => (
            "File Deleted: ",
            format!(", was modified {} minutes ago.", minutes),
        ),
        Match::Inode { number } => (
            "File: ",
            format!(", with the i-node number {} has been deleted.", number),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    use crate::finder::options::FindOptions;
    use crate::finder::walker::TreeWalker;

    fn apply_to(
        dir: &TempDir,
        name: &str,
        operation: Operation,
        found: Match,
    ) -> FindResult<(Vec<Outcome>, String)> {
        let options = FindOptions::new();
        let root = dir.path().to_string_lossy().into_owned();
        let mut out = Vec::new();
        let mut outcomes = Vec::new();
        TreeWalker::new(&options).walk(&root, |entry| {
            if entry.name() == std::ffi::OsStr::new(name) {
                outcomes.push(operation.execute(entry, found, &mut out)?);
            }
            Ok(())
        })?;
        Ok((outcomes, String::from_utf8_lossy(&out).into_owned()))
    }

    fn render(line: Line) -> String {
        let mut out = Vec::new();
        write_line(&mut out, line, OsStr::new("r/a")).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_print_lines() {
        assert_eq!(render(print_line(Match::Name)), "r/a\n");
        assert_eq!(
            render(print_line(Match::Modified { minutes: 7 })),
            "File: r/a, was modified 7 minutes ago.\n"
        );
        assert_eq!(
            render(print_line(Match::Inode { number: 5_000_000_000 })),
            "File: r/a, has the i-node number 5000000000.\n"
        );
    }

    #[test]
    fn test_deleted_lines() {
        assert_eq!(
            render(deleted_line(Match::Name)),
            "Following path has been deleted : r/a\n"
        );
        assert_eq!(
            render(deleted_line(Match::Modified { minutes: 3 })),
            "File Deleted: r/a, was modified 3 minutes ago.\n"
        );
        assert_eq!(
            render(deleted_line(Match::Inode { number: 9 })),
            "File: r/a, with the i-node number 9 has been deleted.\n"
        );
    }

    #[test]
    fn test_print_leaves_file_in_place() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        File::create(temp_dir.path().join("keep.txt"))?;

        let (outcomes, out) = apply_to(&temp_dir, "keep.txt", Operation::Print, Match::Name)?;
        assert_eq!(outcomes, vec![Outcome::Printed]);
        assert!(out.ends_with("/keep.txt\n"));
        assert!(temp_dir.path().join("keep.txt").exists());

        Ok(())
    }

    #[test]
    fn test_delete_removes_file() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        File::create(temp_dir.path().join("gone.txt"))?;

        let (outcomes, out) = apply_to(&temp_dir, "gone.txt", Operation::Delete, Match::Name)?;
        assert_eq!(outcomes, vec![Outcome::Deleted]);
        assert!(out.starts_with("Following path has been deleted : "));
        assert!(!temp_dir.path().join("gone.txt").exists());

        Ok(())
    }

    #[test]
    fn test_delete_failure_is_reported() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        fs::create_dir(temp_dir.path().join("adir"))?;

        // remove_file refuses directories, which gives a portable failure
        let (outcomes, out) = apply_to(&temp_dir, "adir", Operation::Delete, Match::Name)?;
        assert_eq!(outcomes, vec![Outcome::DeleteFailed]);
        assert!(out.starts_with("Failed to delete file : "));
        assert!(temp_dir.path().join("adir").exists());

        Ok(())
    }
}

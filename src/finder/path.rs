//! Path joining
//!
//! Printed paths are built from the root string exactly as the user typed it,
//! followed by one `/` and the entry name per level. Names are kept as raw
//! `OsStr`s and written out byte for byte.

use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::path::{Component, Path};

/// Separator placed between a parent path and a child name
pub const SEPARATOR: &str = "/";

/// Join a parent path and a single child name.
pub fn join(parent: &OsStr, name: &OsStr) -> OsString {
    let mut joined = OsString::with_capacity(parent.len() + name.len() + 1);
    joined.push(parent);
    joined.push(SEPARATOR);
    joined.push(name);
    joined
}

/// Join `root` with every normal component of `relative`, in order.
pub fn join_relative(root: &str, relative: &Path) -> OsString {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name),
            _ => None,
        })
        .fold(OsString::from(root), |parent, name| join(&parent, name))
}

/// Write a path without any re-encoding.
#[cfg(unix)]
pub fn write_path(out: &mut dyn Write, path: &OsStr) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;
    out.write_all(path.as_bytes())
}

/// Write a path; names that are not valid Unicode are rendered lossily.
#[cfg(not(unix))]
pub fn write_path(out: &mut dyn Write, path: &OsStr) -> io::Result<()> {
    out.write_all(path.to_string_lossy().as_bytes())
}

//! Filesystem helpers.

// std imports
use std::fs::{self, FileTimes, Metadata, OpenOptions};
use std::io;
use std::path::Path;

// third-party imports
use log::debug;

// local imports
use crate::error::Result;

// ---

/// Returns true if `path` refers to an existing regular file, false if it
/// refers to a directory.
///
/// The underlying I/O error is propagated unchanged, including the case
/// where `path` refers to nothing.
pub fn file_exists(path: impl AsRef<Path>) -> Result<bool> {
    Ok(!fs::metadata(path)?.is_dir())
}

/// Returns true if `path` refers to a directory, false if it refers to a
/// file.
///
/// The underlying I/O error is propagated unchanged, including the case
/// where `path` refers to nothing.
pub fn is_directory(path: impl AsRef<Path>) -> Result<bool> {
    Ok(fs::metadata(path)?.is_dir())
}

/// Copies `src` to `dest` and returns the number of bytes written.
///
/// Permission bits and access/modification timestamps of `src` are carried
/// over to `dest`. If anything fails once the destination has been
/// created, the partial destination file is removed before the error is
/// propagated.
pub fn copy_file(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<u64> {
    let (src, dest) = (src.as_ref(), dest.as_ref());

    // Resolve the source before touching the destination.
    let meta = fs::metadata(src)?;

    let bytes = match fs::copy(src, dest) {
        Ok(bytes) => bytes,
        Err(err) => {
            discard(dest);
            return Err(err.into());
        }
    };

    if let Err(err) = replicate_times(&meta, dest) {
        discard(dest);
        return Err(err.into());
    }

    Ok(bytes)
}

fn replicate_times(meta: &Metadata, dest: &Path) -> io::Result<()> {
    let mut times = FileTimes::new().set_modified(meta.modified()?);
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    OpenOptions::new().write(true).open(dest)?.set_times(times)
}

fn discard(dest: &Path) {
    if let Err(err) = fs::remove_file(dest) {
        if err.kind() != io::ErrorKind::NotFound {
            debug!("failed to remove partial copy {dest:?}: {err}");
        }
    }
}

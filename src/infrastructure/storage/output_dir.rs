//! Output directory provisioning

use std::fs::{self, DirBuilder};
use std::io;
use std::path::Path;

use crate::domain::error::ConfigError;

/// Permission bits for directories we create
#[cfg(unix)]
const DIR_MODE: u32 = 0o775;

/// Prefix of the temporary write-probe file
const WRITE_PROBE_PREFIX: &str = ".write_check-";

/// Make sure `path` exists, is a directory, and is writable.
///
/// Missing components are created (mode 0775 on Unix). Writability is
/// proven by creating and removing a probe file inside the directory.
pub fn prepare_output(path: &Path) -> Result<(), ConfigError> {
    let fail = |reason: String| ConfigError::OutputDir {
        path: path.to_path_buf(),
        reason,
    };

    if path.as_os_str().is_empty() {
        return Err(fail("path is empty".to_string()));
    }

    ensure_dir(path).map_err(|e| fail(e.to_string()))?;
    probe_writable(path).map_err(|e| fail(format!("not writable: {}", e)))
}

fn ensure_dir(path: &Path) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    match builder.create(path) {
        Ok(()) => {}
        // recursive create reports an existing non-directory as AlreadyExists
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
        Err(e) => return Err(e),
    }

    if fs::metadata(path)?.is_dir() {
        Ok(())
    } else {
        Err(io::Error::new(io::ErrorKind::Other, "Not a directory"))
    }
}

fn probe_writable(path: &Path) -> io::Result<()> {
    let probe = tempfile::Builder::new()
        .prefix(WRITE_PROBE_PREFIX)
        .tempfile_in(path)?;
    probe.close()
}

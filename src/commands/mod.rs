pub mod capture;
pub mod example;
pub mod render;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{FsTreeError, Result};

/// Write `text` to `path`, or to stdout when the path is absent or `-`.
pub(crate) fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(p) if p != Path::new("-") => fs::write(p, text).map_err(|e| FsTreeError::Io {
            path: p.to_path_buf(),
            source: e,
        }),
        _ => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| FsTreeError::Io {
                    path: "<stdout>".into(),
                    source: e,
                })
        }
    }
}

pub(crate) fn is_stdout(path: &Path) -> bool {
    path == Path::new("-")
}

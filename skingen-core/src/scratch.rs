use crate::tree;
use std::{
    io,
    path::{Path, PathBuf},
};

/// Staging directory owned by a single combination.
///
/// The directory is removed when the guard is dropped, so a failed
/// combination never leaves its files behind for the next one.
#[derive(Debug)]
pub struct ScratchDir {
    path: PathBuf,
    released: bool,
}

impl ScratchDir {
    /// Claims `path`, removing whatever an earlier run left there.
    pub fn acquire(path: impl Into<PathBuf>) -> io::Result<ScratchDir> {
        let path = path.into();
        tree::remove_tree(&path)?;
        Ok(ScratchDir {
            path,
            released: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copies `src` into place; this creates the scratch directory and fails
    /// if it already exists.
    pub fn seed_from(&self, src: &Path) -> io::Result<usize> {
        tree::copy_tree(src, &self.path)
    }

    pub fn ensure_created(&self) -> io::Result<()> {
        std::fs::create_dir_all(&self.path)
    }

    /// Copies the staged files into `output_dir`, replacing existing ones.
    pub fn publish_into(&self, output_dir: &Path) -> io::Result<usize> {
        tree::merge_tree(&self.path, output_dir)
    }

    /// Removes the directory, reporting failures instead of logging them.
    pub fn release(mut self) -> io::Result<()> {
        self.released = true;
        tree::remove_tree(&self.path)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Err(err) = tree::remove_tree(&self.path) {
            tracing::warn!(
                path = %self.path.display(),
                "failed to remove scratch directory: {}",
                err
            );
        }
    }
}

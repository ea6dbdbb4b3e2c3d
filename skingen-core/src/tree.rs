use std::{io, path::Path};

/// Recursively copies `src` to `dest`, which must not exist yet.
///
/// Returns the number of files copied.
pub fn copy_tree(src: &Path, dest: &Path) -> io::Result<usize> {
    if dest.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("destination {} already exists", dest.display()),
        ));
    }
    std::fs::create_dir_all(dest)?;
    merge_tree(src, dest)
}

/// Recursively copies the contents of `src` into the existing directory
/// `dest`, overwriting files that are already there.
///
/// Returns the number of files copied.
pub fn merge_tree(src: &Path, dest: &Path) -> io::Result<usize> {
    let mut copied = 0;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let from = entry.path();
        let to = dest.join(entry.file_name());
        if std::fs::metadata(&from)?.is_dir() {
            std::fs::create_dir_all(&to)?;
            copied += merge_tree(&from, &to)?;
        } else {
            tracing::trace!(from = %from.display(), to = %to.display(), "copying file");
            std::fs::copy(&from, &to)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Removes `path` recursively, doing nothing if it does not exist.
pub fn remove_tree(path: &Path) -> io::Result<()> {
    match std::fs::remove_dir_all(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        result => result,
    }
}

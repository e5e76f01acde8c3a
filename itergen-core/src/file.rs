use std::{fs, io, path::Path};

/// Remove `path` if it exists. A missing file is not an error.
pub fn delete_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

/// Write `content` to `path`, replacing any previous file.
///
/// The old file is removed before the new one is created so that a failed
/// write never leaves the previous output in place looking current.
pub fn write(path: &Path, content: &[u8]) -> io::Result<()> {
    delete_if_exists(path)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_delete_if_exists_removes_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");
        fs::write(&path, "hi").unwrap();

        delete_if_exists(&path).unwrap();
        assert!(!path.exists());

        // Second call on a missing file is a no-op
        delete_if_exists(&path).unwrap();
    }

    #[test]
    fn test_write_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("float64_iter.go");

        write(&path, b"package foo\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "package foo\n");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");
        fs::write(&path, "a much longer original content").unwrap();

        write(&path, b"Hello").unwrap();
        write(&path, b"Hello").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Hello");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("gen").join("iters").join("int_iter.go");

        write(&path, b"nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }
}

//! Recursive directory copy with per-file text transform

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Result, ScaffoldError};
use crate::placeholder::is_binary_file;

/// Counts gathered while copying
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Regular files written
    pub files: usize,
    /// Files whose text the transform changed
    pub transformed: usize,
}

/// Mirror `src` under `dest`, passing every text file through `transform`.
///
/// Directories are created as needed and existing ones are reused. Files are
/// overwritten in full. Binary and non-UTF-8 files are copied byte-for-byte.
/// The first I/O failure aborts the copy and leaves what was written so far.
pub fn copy_tree<F>(src: &Path, dest: &Path, transform: F) -> Result<CopyStats>
where
    F: Fn(&str) -> String,
{
    fs::create_dir_all(dest).map_err(|e| ScaffoldError::io(dest, e))?;

    let mut stats = CopyStats::default();

    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            ScaffoldError::io(path, io::Error::from(e))
        })?;
        let src_path = entry.path();

        let rel_path = src_path
            .strip_prefix(src)
            .map_err(|e| ScaffoldError::io(src_path, io::Error::new(io::ErrorKind::Other, e)))?;
        let dest_path = dest.join(rel_path);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest_path).map_err(|e| ScaffoldError::io(&dest_path, e))?;
            continue;
        }

        // Ensure parent directory exists
        if let Some(parent) = dest_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
        }

        let content = fs::read(src_path).map_err(|e| ScaffoldError::io(src_path, e))?;

        let changed = match std::str::from_utf8(&content) {
            Ok(text) if !is_binary_file(&content) => {
                let output = transform(text);
                let changed = output != text;
                fs::write(&dest_path, output).map_err(|e| ScaffoldError::io(&dest_path, e))?;
                changed
            }
            _ => {
                fs::write(&dest_path, &content).map_err(|e| ScaffoldError::io(&dest_path, e))?;
                false
            }
        };

        copy_exec_bits(src_path, &dest_path)?;

        debug!(
            src = %src_path.display(),
            dest = %dest_path.display(),
            changed,
            "copied template file"
        );

        stats.files += 1;
        if changed {
            stats.transformed += 1;
        }
    }

    Ok(stats)
}

#[cfg(unix)]
fn copy_exec_bits(src: &Path, dest: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let src_mode = fs::metadata(src)
        .map_err(|e| ScaffoldError::io(src, e))?
        .permissions()
        .mode();
    if src_mode & 0o111 != 0 {
        fs::set_permissions(dest, fs::Permissions::from_mode(src_mode))
            .map_err(|e| ScaffoldError::io(dest, e))?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn copy_exec_bits(_src: &Path, _dest: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder::Placeholder;
    use std::collections::BTreeMap;
    use std::path::PathBuf;
    use tempfile::tempdir;

    /// Relative path -> bytes for every file under `root`
    fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
        WalkDir::new(root)
            .into_iter()
            .map(|e| e.unwrap())
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                let rel = e.path().strip_prefix(root).unwrap().to_path_buf();
                (rel, fs::read(e.path()).unwrap())
            })
            .collect()
    }

    fn write(root: &Path, rel: &str, content: &[u8]) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_mirrors_nested_tree() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("template");
        let dest = temp.path().join("out");

        write(&src, "Cargo.toml", b"[package]\nname = \"rust_app_template\"\n");
        write(&src, "cmd/server/main.rs", b"use rust_app_template::common;\n");
        write(&src, "common/utils/error.rs", b"pub enum AppError {}\n");
        write(&src, "common/infrastructure/redis.rs", b"// redis\n");
        write(&src, "assets/logo.bin", b"\x89PNG\x00rust_app_template\x00");
        write(&src, "latin1.txt", b"caf\xe9 rust_app_template");
        fs::create_dir_all(src.join("empty/dir")).unwrap();

        let placeholder = Placeholder::new("rust_app_template", "my_app");
        let stats = copy_tree(&src, &dest, |text| placeholder.apply(text).into_owned()).unwrap();

        assert_eq!(stats, CopyStats { files: 6, transformed: 2 });
        assert!(dest.join("empty/dir").is_dir());

        let before = snapshot(&src);
        let after = snapshot(&dest);
        assert_eq!(
            before.keys().collect::<Vec<_>>(),
            after.keys().collect::<Vec<_>>()
        );

        for (rel, src_bytes) in &before {
            let dest_bytes = &after[rel];
            match rel.to_str().unwrap() {
                "Cargo.toml" => assert_eq!(dest_bytes, b"[package]\nname = \"my_app\"\n"),
                "cmd/server/main.rs" => assert_eq!(dest_bytes, b"use my_app::common;\n"),
                _ => assert_eq!(dest_bytes, src_bytes, "{} changed", rel.display()),
            }
        }
    }

    #[test]
    fn test_existing_dest_dirs_are_reused() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("template");
        let dest = temp.path().join("out");

        write(&src, "a/b.txt", b"new");
        write(&dest, "a/b.txt", b"old content that is longer");

        copy_tree(&src, &dest, |t| t.to_string()).unwrap();

        assert_eq!(fs::read(dest.join("a/b.txt")).unwrap(), b"new");
    }

    #[test]
    fn test_missing_source_is_io_error() {
        let temp = tempdir().unwrap();
        let err = copy_tree(&temp.path().join("nope"), &temp.path().join("out"), |t| {
            t.to_string()
        })
        .unwrap_err();

        assert!(matches!(err, ScaffoldError::Io { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_preserves_exec_bit() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        let src = temp.path().join("template");
        let dest = temp.path().join("out");

        write(&src, "run.sh", b"#!/bin/sh\necho rust_app_template\n");
        fs::set_permissions(src.join("run.sh"), fs::Permissions::from_mode(0o755)).unwrap();

        copy_tree(&src, &dest, |t| t.to_string()).unwrap();

        let mode = fs::metadata(dest.join("run.sh")).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}

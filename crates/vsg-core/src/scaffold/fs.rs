use std::fs;
use std::io;
use std::path::Path;

/// The filesystem operations the scaffold writer needs.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;
    fn create_dir(&self, path: &Path, recursive: bool) -> io::Result<()>;
    fn write_file(&self, path: &Path, content: &str) -> io::Result<()>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn create_dir(&self, path: &Path, recursive: bool) -> io::Result<()> {
        (**self).create_dir(path, recursive)
    }

    fn write_file(&self, path: &Path, content: &str) -> io::Result<()> {
        (**self).write_file(path, content)
    }
}

/// `std::fs` backed implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir(&self, path: &Path, recursive: bool) -> io::Result<()> {
        if recursive {
            fs::create_dir_all(path)
        } else {
            fs::create_dir(path)
        }
    }

    fn write_file(&self, path: &Path, content: &str) -> io::Result<()> {
        fs::write(path, content)
    }
}

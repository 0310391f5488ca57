#![forbid(unsafe_code)]

use crate::Error;
use std::path::{Path, PathBuf};

/// Handle to an icon resource. Decoding is left to whoever draws it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    path: PathBuf,
}

impl Icon {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub trait IconLoader: Send + Sync {
    /// Resolve an icon resource name.
    ///
    /// `Ok(None)` means icons are unavailable; it is not cached.
    fn load(&self, resource: &str) -> Result<Option<Icon>, Error>;
}

impl<T: IconLoader + ?Sized> IconLoader for Box<T> {
    fn load(&self, resource: &str) -> Result<Option<Icon>, Error> {
        (**self).load(resource)
    }
}

/// Resolves icon names inside a directory.
#[derive(Debug, Clone)]
pub struct DirIconLoader {
    dir: PathBuf,
}

impl DirIconLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Like [`DirIconLoader::new`], but fails unless `dir` is a directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, Error> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(Error::IconDirMissing(dir));
        }
        Ok(Self { dir })
    }
}

impl IconLoader for DirIconLoader {
    fn load(&self, resource: &str) -> Result<Option<Icon>, Error> {
        let path = self.dir.join(resource);
        if !path.is_file() {
            return Err(Error::IconMissing(path));
        }
        Ok(Some(Icon::new(path)))
    }
}

/// Loader used when no icon directory is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopIconLoader;

impl IconLoader for NoopIconLoader {
    fn load(&self, _resource: &str) -> Result<Option<Icon>, Error> {
        Ok(None)
    }
}

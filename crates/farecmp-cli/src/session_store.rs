//! Session store backed by one JSON file per key inside a directory, so the
//! search, results and selection survive between CLI invocations.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use farecmp_core::{CoreError, SessionKey, SessionStore};

#[derive(Debug, Clone)]
pub(crate) struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub(crate) fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub(crate) fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: SessionKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }
}

fn session_io(key: SessionKey, source: std::io::Error) -> CoreError {
    CoreError::SessionIo {
        key: key.as_str().to_owned(),
        source,
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: SessionKey) -> Result<Option<String>, CoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(session_io(key, e)),
        }
    }

    fn set(&mut self, key: SessionKey, value: String) -> Result<(), CoreError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| session_io(key, e))?;
        std::fs::write(self.path_for(key), value).map_err(|e| session_io(key, e))?;
        tracing::debug!(key = %key, dir = %self.dir.display(), "session value written");
        Ok(())
    }

    fn remove(&mut self, key: SessionKey) -> Result<(), CoreError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(session_io(key, e)),
        }
    }
}

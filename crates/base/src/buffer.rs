use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::ops::Deref;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("could not open {path:?}: {source}")]
    Open { path: PathBuf, source: io::Error },
    #[error("could not read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("short read from {path:?}: expected {expected} bytes, got {got}")]
    ShortRead {
        path: PathBuf,
        expected: usize,
        got: usize,
    },
}

/// An owned, fully loaded file.
#[derive(Clone, PartialEq, Eq)]
pub struct Buffer {
    data: Vec<u8>,
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer").field("len", &self.data.len()).finish()
    }
}

impl Buffer {
    /// Reads the whole file at `path` into memory.
    ///
    /// Only regular files are accepted. The length is probed by seeking to
    /// the end and back, then exactly that many bytes are read. A file that yields fewer bytes than probed is an
    /// error; no partial buffer is ever returned.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BufferError> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|source| BufferError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let read_error = |source| BufferError::Read {
            path: path.to_path_buf(),
            source,
        };

        let metadata = file.metadata().map_err(read_error)?;
        if !metadata.is_file() {
            return Err(read_error(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }

        let length = file.seek(SeekFrom::End(0)).map_err(read_error)?;
        file.seek(SeekFrom::Start(0)).map_err(read_error)?;
        let expected = usize::try_from(length).map_err(|_| {
            read_error(io::Error::new(
                io::ErrorKind::OutOfMemory,
                "file does not fit in memory",
            ))
        })?;

        let mut data = Vec::new();
        data.try_reserve_exact(expected).map_err(|e| {
            read_error(io::Error::new(io::ErrorKind::OutOfMemory, e.to_string()))
        })?;
        data.resize(expected, 0u8);
        let mut got = 0;
        while got < expected {
            match file.read(&mut data[got..]) {
                Ok(0) => break,
                Ok(n) => got += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(read_error(e)),
            }
        }
        if got != expected {
            return Err(BufferError::ShortRead {
                path: path.to_path_buf(),
                expected,
                got,
            });
        }

        log::debug!("loaded {} bytes from {:?}", expected, path);
        Ok(Self { data })
    }

    pub fn from_vec(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl Deref for Buffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

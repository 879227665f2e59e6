//! Read-only byte storage for a whole GSF file.
//!
//! [`ByteSource`] memory-maps the file once; every record view handed out by
//! a [`RecordFramer`] borrows from it, so nothing can outlive the mapping.

use std::fs::File;
use std::io;
use std::path::Path;

use memmap2::Mmap;

use crate::codec::checked_slice;
use crate::error::{GsfError, OutOfBounds, Result};
use crate::reader::{FramerConfig, RecordFramer};

enum Backing {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

/// Immutable contents of one GSF file.
pub struct ByteSource {
    backing: Backing,
}

impl ByteSource {
    /// Memory-map the file at `path`.
    ///
    /// Fails if the file cannot be opened, is empty, or cannot be mapped.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let io_err = |source| GsfError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let len = file.metadata().map_err(io_err)?.len();
        if len == 0 {
            let empty = io::Error::new(io::ErrorKind::InvalidData, "empty file");
            return Err(io_err(empty));
        }

        // SAFETY: the map is read-only and never handed out mutably. Another
        // process truncating the file while it is mapped is outside what we
        // can guard against, as with any mmap-based reader.
        let map = unsafe { Mmap::map(&file) }.map_err(io_err)?;
        log::debug!("mapped {} ({} bytes)", path.display(), map.len());

        Ok(Self {
            backing: Backing::Mapped(map),
        })
    }

    /// Wrap bytes already held in memory.
    pub fn from_vec(data: Vec<u8>) -> Self {
        Self {
            backing: Backing::Owned(data),
        }
    }

    /// The whole file contents.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.backing {
            Backing::Mapped(map) => &map[..],
            Backing::Owned(data) => &data[..],
        }
    }

    /// Length of the source in bytes.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow `size` bytes starting at `offset`.
    pub fn slice(&self, offset: usize, size: usize) -> std::result::Result<&[u8], OutOfBounds> {
        checked_slice(self.as_bytes(), offset, size)
    }

    /// Iterate over the records in this source with the default layout.
    pub fn framer(&self) -> RecordFramer<'_> {
        RecordFramer::new(self.as_bytes())
    }

    /// Iterate over the records in this source with an explicit layout.
    pub fn framer_with(&self, config: FramerConfig) -> RecordFramer<'_> {
        RecordFramer::with_config(self.as_bytes(), config)
    }
}

impl From<Vec<u8>> for ByteSource {
    fn from(data: Vec<u8>) -> Self {
        Self::from_vec(data)
    }
}

impl std::fmt::Debug for ByteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.backing {
            Backing::Mapped(_) => "mapped",
            Backing::Owned(_) => "owned",
        };
        f.debug_struct("ByteSource")
            .field("backing", &kind)
            .field("len", &self.len())
            .finish()
    }
}

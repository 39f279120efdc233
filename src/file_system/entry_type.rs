use std::fs::{self, DirEntry, FileType};
use std::path::Path;

use crate::error::{EntryError, Stage};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Regular,
    Directory,
    Symlink,
    Special(SpecialKind),
    /// The type could not be read
    Inaccessible,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SpecialKind {
    BlockDevice,
    CharDevice,
    Fifo,
    Socket,
    Unknown,
}

impl EntryKind {
    /// Kind of an entry from a file type that was read without following symlinks.
    pub fn from_file_type(ft: FileType) -> Self {
        if ft.is_symlink() {
            Self::Symlink
        } else if ft.is_dir() {
            Self::Directory
        } else if ft.is_file() {
            Self::Regular
        } else {
            Self::Special(SpecialKind::from_file_type(ft))
        }
    }
}

impl SpecialKind {
    #[cfg(unix)]
    fn from_file_type(ft: FileType) -> Self {
        use std::os::unix::fs::FileTypeExt;

        if ft.is_block_device() {
            Self::BlockDevice
        } else if ft.is_char_device() {
            Self::CharDevice
        } else if ft.is_fifo() {
            Self::Fifo
        } else if ft.is_socket() {
            Self::Socket
        } else {
            Self::Unknown
        }
    }

    #[cfg(not(unix))]
    fn from_file_type(_ft: FileType) -> Self {
        Self::Unknown
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::BlockDevice => "a block device",
            Self::CharDevice => "a character device",
            Self::Fifo => "a named pipe",
            Self::Socket => "a socket",
            Self::Unknown => "of unknown type",
        }
    }
}

/// A root path after classification. `size` is zero unless `kind` is `Regular`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Classified {
    pub kind: EntryKind,
    pub size: u64,
}

impl Classified {
    pub const INACCESSIBLE: Self = Self {
        kind: EntryKind::Inaccessible,
        size: 0,
    };
}

/// Classify a caller-supplied path without dereferencing it.
pub fn classify_path(path: &Path) -> Result<Classified, EntryError> {
    let metadata =
        fs::symlink_metadata(path).map_err(|err| EntryError::classify(path, Stage::Path, err))?;
    let kind = EntryKind::from_file_type(metadata.file_type());
    let size = match kind {
        EntryKind::Regular => metadata.len(),
        _ => 0,
    };
    Ok(Classified { kind, size })
}

/// Classify a directory entry without dereferencing it.
///
/// On most platforms this comes from the directory listing itself and needs no
/// extra metadata call.
pub fn classify_entry(entry: &DirEntry) -> Result<EntryKind, EntryError> {
    entry
        .file_type()
        .map(EntryKind::from_file_type)
        .map_err(|err| EntryError::classify(entry.path(), Stage::FileType, err))
}

/// Byte size of a regular file found in a directory listing.
pub fn entry_size(entry: &DirEntry) -> Result<u64, EntryError> {
    // DirEntry::metadata does not traverse symlinks
    entry
        .metadata()
        .map(|m| m.len())
        .map_err(|err| EntryError::classify(entry.path(), Stage::Child, err))
}

//! Entry codec over the locked index file
//!
//! Every byte read or written passes through a running SHA-1, so the trailer
//! is produced or checked once the last entry is done.

use crate::artifacts::index::index_header::IndexHeader;
use crate::artifacts::index::{CHECKSUM_SIZE, HEADER_SIZE};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::{Context, anyhow};
use byteorder::{ByteOrder, WriteBytesExt};
use file_guard::FileGuard;
use sha1::{Digest, Sha1};
use std::fs::File;
use std::io::{Cursor, Read, Write};
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

const PATH_LENGTH_SIZE: usize = 2;
const RAW_OID_SIZE: usize = 20;

pub(crate) struct EntryStream<'f> {
    file: FileGuard<&'f mut File>,
    digest: Sha1,
}

impl<'f> EntryStream<'f> {
    pub(crate) fn new(file: FileGuard<&'f mut File>) -> Self {
        EntryStream {
            file,
            digest: Sha1::new(),
        }
    }

    fn take(&mut self, size: usize) -> anyhow::Result<Vec<u8>> {
        let mut buffer = vec![0; size];
        self.file
            .deref_mut()
            .read_exact(&mut buffer)
            .map_err(|_| anyhow!("Unexpected end-of-file while reading index"))?;

        self.digest.update(&buffer);
        Ok(buffer)
    }

    fn put(&mut self, data: &[u8]) -> anyhow::Result<()> {
        self.file
            .deref_mut()
            .write_all(data)
            .context("Failed to write index entry")?;
        self.digest.update(data);

        Ok(())
    }

    pub(crate) fn read_header(&mut self) -> anyhow::Result<IndexHeader> {
        IndexHeader::deserialize(&self.take(HEADER_SIZE)?)
    }

    pub(crate) fn write_header(&mut self, header: &IndexHeader) -> anyhow::Result<()> {
        self.put(&header.serialize()?)
    }

    /// Staged removals are stored as `u16 length | path`
    pub(crate) fn read_path(&mut self) -> anyhow::Result<PathBuf> {
        let length = byteorder::NetworkEndian::read_u16(&self.take(PATH_LENGTH_SIZE)?);
        let path = String::from_utf8(self.take(length as usize)?)
            .context("Invalid path in index entry")?;

        Ok(PathBuf::from(path))
    }

    pub(crate) fn write_path(&mut self, path: &Path) -> anyhow::Result<()> {
        let path = path.to_string_lossy();
        let length = u16::try_from(path.len())
            .map_err(|_| anyhow!("Path too long for the index: {}", path))?;

        let mut bytes = Vec::with_capacity(PATH_LENGTH_SIZE + path.len());
        bytes.write_u16::<byteorder::NetworkEndian>(length)?;
        bytes.extend_from_slice(path.as_bytes());

        self.put(&bytes)
    }

    /// Staged additions are stored as `raw oid | u16 length | path`
    pub(crate) fn read_addition(&mut self) -> anyhow::Result<(PathBuf, ObjectId)> {
        let oid = ObjectId::read_h40_from(&mut Cursor::new(self.take(RAW_OID_SIZE)?))?;
        let path = self.read_path()?;

        Ok((path, oid))
    }

    pub(crate) fn write_addition(&mut self, path: &Path, oid: &ObjectId) -> anyhow::Result<()> {
        let mut oid_bytes = Vec::with_capacity(RAW_OID_SIZE);
        oid.write_h40_to(&mut oid_bytes)?;
        self.put(&oid_bytes)?;

        self.write_path(path)
    }

    /// Append the trailer covering everything written so far
    pub(crate) fn finish(mut self) -> anyhow::Result<()> {
        let trailer = self.digest.clone().finalize();
        self.file
            .deref_mut()
            .write_all(trailer.as_slice())
            .context("Failed to write checksum to index file")
    }

    /// Compare the stored trailer against everything read so far
    pub(crate) fn verify(mut self) -> anyhow::Result<()> {
        let mut stored = [0u8; CHECKSUM_SIZE];
        self.file
            .deref_mut()
            .read_exact(&mut stored)
            .map_err(|_| anyhow!("Index file is missing its checksum"))?;

        if stored != self.digest.clone().finalize().as_slice() {
            return Err(anyhow!("Checksum does not match value stored on disk"));
        }

        Ok(())
    }
}

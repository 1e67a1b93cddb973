use super::ext::ReadExt;
use byteorder::{ReadBytesExt, LE};
use std::io::{Read, Seek, SeekFrom};

/// Size of the `nisasyst` trailer.
pub const TRAILER_SIZE: u64 = 8;

/// An encrypted file: ciphertext followed by the magic trailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    ciphertext: Vec<u8>,
}

impl Container {
    pub fn read<R: Read + Seek>(reader: &mut R) -> Result<Self, super::Error> {
        let len = reader.seek(SeekFrom::End(0))?;
        if len < TRAILER_SIZE {
            return Err(super::Error::TooShort(len));
        }
        let ciphertext_len = len - TRAILER_SIZE;
        reader.seek(SeekFrom::Start(ciphertext_len))?;
        let magic = reader.read_u64::<LE>()?;
        if super::MAGIC != magic {
            return Err(super::Error::Magic(magic));
        }
        log::debug!("found nisasyst trailer, {ciphertext_len} bytes of ciphertext");
        reader.seek(SeekFrom::Start(0))?;
        let ciphertext = reader.read_len(ciphertext_len as usize)?;
        Ok(Self { ciphertext })
    }

    pub fn parse(bytes: &[u8]) -> Result<Self, super::Error> {
        Self::read(&mut std::io::Cursor::new(bytes))
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    pub fn into_ciphertext(self) -> Vec<u8> {
        self.ciphertext
    }
}

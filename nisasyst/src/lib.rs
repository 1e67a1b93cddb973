//! Decryption of `nisasyst` containers, the encrypted data files shipped with
//! Splatoon 2.
//!
//! Each container is encrypted with AES-128-CBC under a key and IV that are
//! expanded from the CRC-32 of the file's game path (for example
//! `Mush/ActorDb.release.byml`). Knowing that path is enough to decrypt it.
//!
//! ```no_run
//! let file = std::fs::File::open("ActorDb.release.byml")?;
//! let plaintext = nisasyst::decrypt(
//!     "Mush/ActorDb.release.byml",
//!     &mut std::io::BufReader::new(file),
//! )?;
//! # Ok::<(), nisasyst::Error>(())
//! ```
mod cipher;
mod container;
mod crc;
mod error;
mod ext;
mod key;
mod rand;

pub use {
    cipher::BLOCK_SIZE,
    container::{Container, TRAILER_SIZE},
    crc::checksum,
    error::*,
    key::{derive_sequence, seed, KeyIv, KEY_SIZE},
    rand::SeadRand,
};

use std::io::{Read, Seek};

/// `"nisasyst"` read as a little endian `u64`.
pub const MAGIC: u64 = 0x747379736173696E;

/// Reads a container from `reader` and decrypts it with the key derived from `game_path`.
pub fn decrypt<R: Read + Seek>(game_path: &str, reader: &mut R) -> Result<Vec<u8>, Error> {
    let container = Container::read(reader)?;
    decrypt_container(game_path, &container)
}

/// Same as [`decrypt`] for a container already in memory.
pub fn decrypt_bytes(game_path: &str, bytes: &[u8]) -> Result<Vec<u8>, Error> {
    let container = Container::parse(bytes)?;
    decrypt_container(game_path, &container)
}

pub fn decrypt_container(game_path: &str, container: &Container) -> Result<Vec<u8>, Error> {
    let seed = seed(game_path)?;
    log::debug!("seed for {game_path}: {seed:08X}");
    let key_iv = KeyIv::from_seed(seed)?;
    log::trace!("{key_iv:?}");
    let plaintext = cipher::decrypt(container.ciphertext(), &key_iv)?;
    log::debug!(
        "decrypted {} bytes into {} bytes",
        container.ciphertext().len(),
        plaintext.len()
    );
    Ok(plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magic() {
        assert_eq!(MAGIC.to_le_bytes(), *b"nisasyst");
    }

    #[test]
    fn test_format_error_before_key_derivation() {
        assert!(matches!(
            decrypt_bytes("Mush/ActorDb.リリース.byml", b"not a container"),
            Err(Error::Magic(_))
        ));
    }

    #[test]
    fn test_non_ascii_game_path() {
        assert!(matches!(
            decrypt_bytes("Mush/ActorDb.リリース.byml", b"nisasyst"),
            Err(Error::NonAsciiGamePath(_))
        ));
    }
}

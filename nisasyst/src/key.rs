//! Expansion of generator output into the AES key and IV.

use crate::{crc, rand::SeadRand, Error};

/// Hex digits indexed by the top byte of a generator draw.
static KEY_MATERIAL: &[u8; 256] = b"\
    e413645fa69cafe34a76192843e48cbd\
    691d1f9fba87e8a23d40e02ce13b0d53\
    4d10301576f31bc70b763a60cf07149c\
    fca50e2a6b3955b98f26ca84a5844a8a\
    eca7318f8d7dba406af4e45c4806fa4d\
    7b736d51cceaaf0e96f657bb3a8af9b1\
    75d51b9bddc1ed475677260f33c41ddb\
    c1ee30b46c4df1b24a25cf7cb6019794";

pub const KEY_SIZE: usize = 16;

/// Builds one 16 byte sequence, consuming 32 draws from `rand`.
///
/// Each output byte is two hex digits picked from the key material by the high
/// byte of consecutive draws, the first draw giving the high nibble.
pub fn derive_sequence(rand: &mut SeadRand) -> Result<[u8; KEY_SIZE], Error> {
    let mut sequence = [0; KEY_SIZE];
    for byte in sequence.iter_mut() {
        let digits = [
            KEY_MATERIAL[(rand.next_u32() >> 24) as usize],
            KEY_MATERIAL[(rand.next_u32() >> 24) as usize],
        ];
        let digits = std::str::from_utf8(&digits)
            .map_err(|_| Error::KeyMaterial(String::from_utf8_lossy(&digits).into_owned()))?;
        *byte = u8::from_str_radix(digits, 16)
            .map_err(|_| Error::KeyMaterial(digits.to_string()))?;
    }
    Ok(sequence)
}

/// AES-128 key and CBC IV for one container.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KeyIv {
    pub key: [u8; KEY_SIZE],
    pub iv: [u8; KEY_SIZE],
}

impl KeyIv {
    /// Key first, then IV, from a single generator stream.
    pub fn from_seed(seed: u32) -> Result<Self, Error> {
        let mut rand = SeadRand::new(seed);
        let key = derive_sequence(&mut rand)?;
        let iv = derive_sequence(&mut rand)?;
        Ok(Self { key, iv })
    }

    pub fn derive(game_path: &str) -> Result<Self, Error> {
        Self::from_seed(seed(game_path)?)
    }
}

impl std::fmt::Debug for KeyIv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyIv")
            .field("key", &Hex(&self.key))
            .field("iv", &Hex(&self.iv))
            .finish()
    }
}

struct Hex<'a>(&'a [u8]);
impl std::fmt::Debug for Hex<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.iter().try_for_each(|b| write!(f, "{b:02x}"))
    }
}

/// Checksum seed of a game path such as `Mush/ActorDb.release.byml`.
///
/// Only ASCII paths are accepted, each character contributing one byte.
pub fn seed(game_path: &str) -> Result<u32, Error> {
    if !game_path.is_ascii() {
        return Err(Error::NonAsciiGamePath(game_path.to_string()));
    }
    Ok(crc::checksum(game_path.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_key_material_is_hex() {
        assert_eq!(KEY_MATERIAL.len(), 256);
        assert!(KEY_MATERIAL.iter().all(|c| c.is_ascii_hexdigit()));
        assert!(KEY_MATERIAL.iter().all(|c| !c.is_ascii_uppercase()));
        assert_eq!(&KEY_MATERIAL[..8], b"e413645f");
        assert_eq!(&KEY_MATERIAL[248..], b"b6019794");
    }

    #[test]
    fn test_derive_from_seed() {
        let mut rand = SeadRand::new(42);
        assert_eq!(
            derive_sequence(&mut rand).unwrap(),
            hex!("cfad045fa49b1787350d20be0eedaae9")
        );
        assert_eq!(
            derive_sequence(&mut rand).unwrap(),
            hex!("e5a044441967cd7a4a6a7864aeeacff1")
        );
    }

    #[test]
    fn test_sequence_consumes_32_draws() {
        let mut derived = SeadRand::new(42);
        derive_sequence(&mut derived).unwrap();
        let mut skipped = SeadRand::new(42);
        for _ in 0..32 {
            skipped.next_u32();
        }
        assert_eq!(derived.next_u32(), skipped.next_u32());
    }

    #[test]
    fn test_key_before_iv() {
        let derived = KeyIv::from_seed(42).unwrap();
        assert_eq!(derived.key, hex!("cfad045fa49b1787350d20be0eedaae9"));
        assert_eq!(derived.iv, hex!("e5a044441967cd7a4a6a7864aeeacff1"));
    }

    #[test]
    fn test_derive_game_path() {
        let derived = KeyIv::derive("Mush/ActorDb.release.byml").unwrap();
        assert_eq!(derived.key, hex!("fcf8bf8bacb36722818b7c45a1aabbbf"));
        assert_eq!(derived.iv, hex!("bd3a91d71c484fcd46b5ce8d851bc3d6"));
        assert_eq!(
            format!("{derived:?}"),
            "KeyIv { key: fcf8bf8bacb36722818b7c45a1aabbbf, iv: bd3a91d71c484fcd46b5ce8d851bc3d6 }"
        );
    }

    #[test]
    fn test_seed() {
        assert_eq!(seed("Mush/ActorDb.release.byml").unwrap(), 0x616EDBB5);
        assert_eq!(seed("").unwrap(), 0);
        assert!(matches!(
            seed("Mush/ActorDb.リリース.byml"),
            Err(Error::NonAsciiGamePath(_))
        ));
    }
}

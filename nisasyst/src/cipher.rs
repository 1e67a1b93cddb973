use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, KeyIvInit};

use crate::key::KeyIv;

type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

pub const BLOCK_SIZE: usize = 16;

/// Decrypts AES-128-CBC `ciphertext` and strips its PKCS#7 padding.
///
/// A ciphertext that isn't a whole number of blocks, or whose final block
/// doesn't unpad, fails with [`Error::Decrypt`](crate::Error::Decrypt).
pub fn decrypt(ciphertext: &[u8], key_iv: &KeyIv) -> Result<Vec<u8>, crate::Error> {
    let mut buf = ciphertext.to_vec();
    let len = Aes128CbcDec::new(&key_iv.key.into(), &key_iv.iv.into())
        .decrypt_padded_mut::<Pkcs7>(&mut buf)
        .map_err(|_| crate::Error::Decrypt)?
        .len();
    buf.truncate(len);
    Ok(buf)
}

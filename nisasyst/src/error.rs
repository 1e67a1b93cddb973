#[derive(thiserror::Error)]
pub enum Error {
    // std errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // crate errors
    #[error("input is {0} bytes, too short to hold the nisasyst trailer")]
    TooShort(u64),

    #[error("found magic of {0:#x} instead of {:#x}, this file isn't a nisasyst container", super::MAGIC)]
    Magic(u64),

    #[error("game path \"{0}\" contains non-ASCII characters, which are unsupported")]
    NonAsciiGamePath(String),

    #[error("key material produced \"{0}\", which is not a hex byte")]
    KeyMaterial(String),

    #[error("decryption failed (wrong game path or corrupted file)")]
    Decrypt,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

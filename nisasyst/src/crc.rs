//! Reflected CRC-32 (polynomial `0xEDB88320`), the same checksum zlib uses.

const POLYNOMIAL: u32 = 0xEDB88320;

const TABLE: [u32; 256] = build_table();

const fn build_table() -> [u32; 256] {
    let mut table = [0; 256];
    let mut i = 0;
    while i < 256 {
        let mut entry = i as u32;
        let mut bit = 0;
        while bit < 8 {
            entry = if entry & 1 != 0 {
                POLYNOMIAL ^ (entry >> 1)
            } else {
                entry >> 1
            };
            bit += 1;
        }
        table[i] = entry;
        i += 1;
    }
    table
}

/// Computes the CRC-32 of `input`.
pub fn checksum(input: &[u8]) -> u32 {
    !input.iter().fold(0xFFFFFFFF, |crc, &b| {
        TABLE[((crc & 0xFF) as u8 ^ b) as usize] ^ (crc >> 8)
    })
}

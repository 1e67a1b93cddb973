//! The sead engine's four word xorshift generator.

#[derive(Debug)]
pub struct SeadRand {
    state: [u32; 4],
}

impl SeadRand {
    pub fn new(seed: u32) -> Self {
        let mut state = [0; 4];
        let mut seed = seed;
        for (i, word) in (1..).zip(state.iter_mut()) {
            seed = 0x6C078965u32
                .wrapping_mul(seed ^ (seed >> 30))
                .wrapping_add(i);
            *word = seed;
        }
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        let [w0, w1, w2, w3] = self.state;
        let a = w0 ^ (w0 << 11);
        let next = a ^ (a >> 8) ^ w3 ^ (w3 >> 19);
        self.state = [w1, w2, w3, next];
        next
    }
}

impl Iterator for SeadRand {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(self.next_u32())
    }
}

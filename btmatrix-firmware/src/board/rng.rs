use btmatrix_hal::RandomSource;

/// xorshift32 generator for the animation
pub struct XorShiftRng {
    state: u32,
}

impl XorShiftRng {
    pub fn new(seed: u32) -> Self {
        // Zero is a fixed point of xorshift
        Self {
            state: if seed == 0 { 0x9E37_79B9 } else { seed },
        }
    }
}

impl RandomSource for XorShiftRng {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

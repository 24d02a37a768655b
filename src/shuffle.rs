use rand::{Rng, SeedableRng, XorShiftRng};

/// Produce a uniformly random permutation of `source`.
///
/// Works by repeatedly drawing a uniformly random remaining element from the
/// source and appending it to the output. Each draw is uniform over the
/// elements still present, so the result is distributed exactly as a
/// Fisher-Yates shuffle. Nothing is duplicated or dropped.
pub fn shuffle<R: Rng, T>(rng: &mut R, mut source: Vec<T>) -> Vec<T> {
    let mut shuffled = Vec::with_capacity(source.len());
    while !source.is_empty() {
        let draw_index = rng.gen_range(0, source.len());
        shuffled.push(source.swap_remove(draw_index));
    }
    shuffled
}

// The xorshift default seed, still non-zero after mixing in any u64.
const SEED_BASE: [u32; 4] = [0x193a_6754, 0xa8a7_d469, 0x9783_0e05, 0x113b_a7bb];

/// A deterministic rng for reproducible mazes. `XorShiftRng` rejects the
/// all-zero seed, hence the mix with a fixed non-zero base.
pub fn seeded_rng(seed: u64) -> XorShiftRng {
    let low_word = seed as u32;
    let high_word = (seed >> 32) as u32;
    XorShiftRng::from_seed([SEED_BASE[0] ^ low_word,
                            SEED_BASE[1] ^ high_word,
                            SEED_BASE[2],
                            SEED_BASE[3]])
}

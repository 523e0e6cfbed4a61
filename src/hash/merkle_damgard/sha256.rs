#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use damgard_util::{read_words, WordOrder};

use super::padding::Block;
use super::BLOCK_LENGTH_DOUBLE_WORDS;

/// number of rounds per block, which is also the length of the message schedule
pub const ROUND_COUNT: usize = 64;

/// The initial state of SHA-256: first 32 bits of the fractional parts of the square roots of the
/// first eight primes.
pub const INITIAL_256: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// The initial state of SHA-224: second 32 bits of the fractional parts of the square roots of the
/// ninth through sixteenth primes.
pub const INITIAL_224: [u32; 8] = [
    0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939, 0xffc00b31, 0x68581511, 0x64f98fa7, 0xbefa4fa4,
];

/// first 32 bits of the fractional parts of the cube roots of the first 64 primes
pub static ROUND_CONSTANTS: [u32; ROUND_COUNT] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

fn choose(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

fn majority(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Σ0
fn big_sigma_0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

/// Σ1
fn big_sigma_1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// σ0
fn small_sigma_0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

/// σ1
fn small_sigma_1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Expand the 16 block words into the 64 word message schedule.
fn message_schedule(block: &Block) -> [u32; ROUND_COUNT] {
    let mut schedule = [0u32; ROUND_COUNT];
    read_words(WordOrder::Big, block.as_bytes(), &mut schedule[..BLOCK_LENGTH_DOUBLE_WORDS]);

    for t in BLOCK_LENGTH_DOUBLE_WORDS..ROUND_COUNT {
        schedule[t] = small_sigma_1(schedule[t - 2])
            .wrapping_add(schedule[t - 7])
            .wrapping_add(small_sigma_0(schedule[t - 15]))
            .wrapping_add(schedule[t - 16]);
    }

    schedule
}

/// Compute the SHA-256 compression of one block and add it to ``state``. SHA-224 uses the same
/// function on its own initial state.
pub fn compress(state: &mut [u32; 8], block: &Block) {
    let schedule = message_schedule(block);

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for (constant, word) in ROUND_CONSTANTS.iter().zip(schedule.iter()) {
        let t1 = h
            .wrapping_add(big_sigma_1(e))
            .wrapping_add(choose(e, f, g))
            .wrapping_add(*constant)
            .wrapping_add(*word);
        let t2 = big_sigma_0(a).wrapping_add(majority(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (word, register) in state.iter_mut().zip([a, b, c, d, e, f, g, h].iter()) {
        *word = word.wrapping_add(*register);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_message_block() -> Block {
        let mut block_bytes = [0u8; 64];
        block_bytes[0] = 0x80;
        Block::from_bytes(block_bytes)
    }

    #[test]
    fn test_schedule_is_extended() {
        let schedule = message_schedule(&empty_message_block());

        assert_eq!(schedule[0], 0x8000_0000);
        assert!(schedule[1..16].iter().all(|word| *word == 0));
        // W[16] = σ1(0) + 0 + σ0(0) + W[0]
        assert_eq!(schedule[16], 0x8000_0000);
        // W[17] = σ1(0) + 0 + σ0(0) + 0, W[18] = σ1(W[16]) + 0 + 0 + 0
        assert_eq!(schedule[17], 0);
        assert_eq!(schedule[18], small_sigma_1(0x8000_0000));
        assert!(schedule[18..].iter().any(|word| *word != 0));
    }

    #[test]
    fn test_compress_empty_message_block() {
        let mut state = INITIAL_256;
        compress(&mut state, &empty_message_block());

        assert_eq!(state, [
            0xe3b0c442, 0x98fc1c14, 0x9afbf4c8, 0x996fb924, 0x27ae41e4, 0x649b934c, 0xa495991b, 0x7852b855,
        ]);
    }

    #[test]
    fn test_every_register_feeds_its_own_word() {
        // a state with distinct words: a cross-wired add-back would duplicate a word
        let mut state = INITIAL_224;
        compress(&mut state, &empty_message_block());

        assert_eq!(&state[..7], &[
            0xd14a028c, 0x2a3a2bc9, 0x476102bb, 0x288234c4, 0x15a2b01f, 0x828ea62a, 0xc5b3e42f,
        ]);
    }

    #[test]
    fn test_round_functions() {
        assert_eq!(choose(0xFFFF_0000, 0x1234_5678, 0x9ABC_DEF0), 0x1234_DEF0);
        assert_eq!(majority(0b1100, 0b1010, 0b0110), 0b1110);
        assert_eq!(small_sigma_0(1), 1u32.rotate_right(7) ^ 1u32.rotate_right(18));
        assert_eq!(small_sigma_1(1 << 10), (1u32 << 10).rotate_right(17) ^ (1u32 << 10).rotate_right(19) ^ 1);
    }
}

#![allow(clippy::unreadable_literal)]
#![allow(clippy::zero_prefixed_literal)]

use damgard_util::{read_words, WordOrder};

use super::padding::Block;
use super::BLOCK_LENGTH_DOUBLE_WORDS;

/// number of rounds per block
pub const ROUND_COUNT: usize = 64;

/// The initial state for any MD5 hash. From here, all blocks are applied.
pub const INITIAL: [u32; 4] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476];

/// Constant data driving the 64 MD5 rounds.
pub struct RoundTable {
    /// binary floored values of |sin(i + 1)| * 2^32 where i is the round index
    pub constants: [u32; ROUND_COUNT],
    /// bits rotated per round
    pub rotations: [u32; ROUND_COUNT],
    /// index of the message word consumed by each round
    pub message_index: [usize; ROUND_COUNT],
    /// which state registers play the roles ``(a, b, c, d)``, indexed by round mod 4
    pub register_roles: [[usize; 4]; 4],
}

pub static ROUND_TABLE: RoundTable = RoundTable {
    constants: [
        0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee,
        0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
        0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be,
        0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
        0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa,
        0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
        0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed,
        0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
        0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c,
        0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
        0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05,
        0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
        0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039,
        0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
        0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1,
        0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391],
    rotations: [
        07, 12, 17, 22, 07, 12, 17, 22, 07, 12, 17, 22, 07, 12, 17, 22,
        05, 09, 14, 20, 05, 09, 14, 20, 05, 09, 14, 20, 05, 09, 14, 20,
        04, 11, 16, 23, 04, 11, 16, 23, 04, 11, 16, 23, 04, 11, 16, 23,
        06, 10, 15, 21, 06, 10, 15, 21, 06, 10, 15, 21, 06, 10, 15, 21],
    message_index: [
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
        1, 6, 11, 0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12,
        5, 8, 11, 14, 1, 4, 7, 10, 13, 0, 3, 6, 9, 12, 15, 2,
        0, 7, 14, 5, 12, 3, 10, 1, 8, 15, 6, 13, 4, 11, 2, 9],
    register_roles: [
        [0, 1, 2, 3],
        [3, 0, 1, 2],
        [2, 3, 0, 1],
        [1, 2, 3, 0]],
};

/// The nonlinear function of round group ``group`` (F, G, H and I of RFC 1321).
fn scramble(group: usize, x: u32, y: u32, z: u32) -> u32 {
    match group {
        0 => (x & y) | (!x & z),
        1 => (x & z) | (y & !z),
        2 => x ^ y ^ z,
        3 => y ^ (x | !z),
        _ => unreachable!(),
    }
}

/// Compute the MD5 compression of one block and add it to ``state``.
///
/// # Parameters
/// ``state`` the chaining state ``(A, B, C, D)``
/// ``block`` a 64 byte block of padded input data, read as 16 little endian words
pub fn compress(state: &mut [u32; 4], block: &Block) {
    let mut input_block = [0u32; BLOCK_LENGTH_DOUBLE_WORDS];
    read_words(WordOrder::Little, block.as_bytes(), &mut input_block);

    let table = &ROUND_TABLE;
    let mut registers = *state;

    for i in 0..ROUND_COUNT {
        let [a, b, c, d] = table.register_roles[i % 4];

        let scrambled_data = scramble(i / 16, registers[b], registers[c], registers[d]);
        registers[a] = registers[b].wrapping_add(
            registers[a]
                .wrapping_add(scrambled_data)
                .wrapping_add(input_block[table.message_index[i]])
                .wrapping_add(table.constants[i])
                .rotate_left(table.rotations[i]),
        );
    }

    for (word, register) in state.iter_mut().zip(registers.iter()) {
        *word = word.wrapping_add(*register);
    }
}

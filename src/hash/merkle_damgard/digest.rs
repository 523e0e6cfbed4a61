use damgard_util::{write_words, WordOrder};

use super::{ChainingState, MAX_STATE_WORDS};
use crate::hash::HashValue;

/// The final output of a hash computation: up to eight chaining words serialized in the byte
/// order of the algorithm.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Digest {
    bytes: [u8; MAX_STATE_WORDS * 4],
    len: usize,
}

impl Digest {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl std::fmt::Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Digest").field(&self.as_bytes()).finish()
    }
}

impl HashValue for Digest {
    fn raw(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

/// Serialize the first ``digest_words`` words of ``state`` in state order, each word in
/// ``word_order``.
pub fn assemble(state: &ChainingState, word_order: WordOrder, digest_words: usize) -> Digest {
    let words = &state.words()[..digest_words];
    let mut bytes = [0u8; MAX_STATE_WORDS * 4];
    write_words(word_order, words, &mut bytes[..digest_words * 4]);

    Digest { bytes, len: digest_words * 4 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_words_are_little_endian() {
        let state = ChainingState::Md5([0xd98c1dd4, 0x04b2008f, 0x980980e9, 0x7e42f8ec]);
        let digest = assemble(&state, WordOrder::Little, 4);

        assert_eq!(hex::encode(digest.as_bytes()), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_sha_words_are_big_endian() {
        let state = ChainingState::Sha256([1, 2, 3, 4, 5, 6, 7, 0xAABBCCDD]);
        let digest = assemble(&state, WordOrder::Big, 8);

        assert_eq!(digest.len(), 32);
        assert_eq!(&digest.as_bytes()[..8], &[0, 0, 0, 1, 0, 0, 0, 2]);
        assert_eq!(&digest.as_bytes()[28..], &[0xAA, 0xBB, 0xCC, 0xDD]);
    }

    #[test]
    fn test_truncated_digest() {
        let state = ChainingState::Sha256([1, 2, 3, 4, 5, 6, 7, 8]);
        let digest = assemble(&state, WordOrder::Big, 7);

        assert_eq!(digest.len(), 28);
        assert_eq!(digest.raw(), digest.as_bytes().to_vec());
        assert_eq!(&digest.as_bytes()[24..], &[0, 0, 0, 7]);
    }
}

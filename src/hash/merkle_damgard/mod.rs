//! Hashes generated from a Merkle-Damgård construction. The message is padded to a multiple of
//! the block size, and a compression function folds every block into a chaining state. The final
//! chaining state is serialized into the digest.
//!
//! Both supported transforms share the driver in [`engine`], the padding in [`padding`] and the
//! serialization in [`digest`]. They are selected through an [`Algorithm`] descriptor.

use std::convert::TryFrom;

use damgard_util::WordOrder;

use crate::error::HashError;

pub mod digest;
pub mod engine;
pub mod md5;
pub mod padding;
pub mod sha256;
pub mod source;
pub mod stream;

/// the hash block length in bytes
pub const BLOCK_LENGTH_BYTES: usize = 64;

/// the hash block length in 32 bit integers
pub const BLOCK_LENGTH_DOUBLE_WORDS: usize = BLOCK_LENGTH_BYTES / 4;

/// The largest chaining state of all transforms, in 32 bit words.
pub const MAX_STATE_WORDS: usize = 8;

/// The compression functions this crate knows.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Transform {
    /// RFC 1321 compression over a four word state.
    Md5,
    /// FIPS 180-4 SHA-256 compression over an eight word state. Also used by SHA-224.
    Sha256,
}

impl Transform {
    /// Number of 32 bit words in the chaining state this transform operates on.
    pub fn state_words(self) -> usize {
        match self {
            Transform::Md5 => 4,
            Transform::Sha256 => 8,
        }
    }

    /// The byte order in which this transform reads block words and writes its length field.
    pub fn word_order(self) -> WordOrder {
        match self {
            Transform::Md5 => WordOrder::Little,
            Transform::Sha256 => WordOrder::Big,
        }
    }
}

/// Everything a digest computation needs to know about its hash algorithm. The descriptor is
/// checked once when a computation starts, so a mismatched table never reaches a block.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Algorithm {
    pub name: &'static str,
    pub transform: Transform,
    pub initial_state: &'static [u32],
    /// Number of chaining words that make up the digest. Truncated variants use less than the
    /// full state.
    pub digest_words: usize,
}

/// RFC 1321 MD5
pub const MD5: Algorithm = Algorithm {
    name: "MD5",
    transform: Transform::Md5,
    initial_state: &md5::INITIAL,
    digest_words: 4,
};

/// FIPS 180-4 SHA-256
pub const SHA256: Algorithm = Algorithm {
    name: "SHA-256",
    transform: Transform::Sha256,
    initial_state: &sha256::INITIAL_256,
    digest_words: 8,
};

/// FIPS 180-4 SHA-224: the SHA-256 transform with its own initial state, truncated to 7 words.
pub const SHA224: Algorithm = Algorithm {
    name: "SHA-224",
    transform: Transform::Sha256,
    initial_state: &sha256::INITIAL_224,
    digest_words: 7,
};

impl Algorithm {
    /// Checks that the descriptor is consistent with its transform.
    pub fn validate(&self) -> Result<(), HashError> {
        let state_words = self.transform.state_words();

        if self.initial_state.len() != state_words {
            return Err(self.invalid(format!(
                "initial state has {} words, but the {:?} transform needs {}",
                self.initial_state.len(),
                self.transform,
                state_words
            )));
        }

        if self.digest_words == 0 || self.digest_words > state_words {
            return Err(self.invalid(format!(
                "digest length of {} words does not fit a state of {} words",
                self.digest_words, state_words
            )));
        }

        Ok(())
    }

    /// The byte order of block words, length field and digest, fixed by the transform.
    pub fn word_order(&self) -> WordOrder {
        self.transform.word_order()
    }

    fn invalid(&self, reason: String) -> HashError {
        HashError::InvalidConfiguration { algorithm: self.name, reason }
    }
}

/// The accumulator carried from one block to the next. Each variant holds exactly the words its
/// transform works on, so a state can only ever be compressed by its own transform.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChainingState {
    Md5([u32; 4]),
    Sha256([u32; 8]),
}

impl ChainingState {
    /// Create the initial chaining state of ``algorithm``.
    pub fn initial(algorithm: &Algorithm) -> Result<Self, HashError> {
        algorithm.validate()?;

        let mismatch = |_| algorithm.invalid("initial state does not match the transform".to_string());
        Ok(match algorithm.transform {
            Transform::Md5 => ChainingState::Md5(<[u32; 4]>::try_from(algorithm.initial_state).map_err(mismatch)?),
            Transform::Sha256 => {
                ChainingState::Sha256(<[u32; 8]>::try_from(algorithm.initial_state).map_err(mismatch)?)
            }
        })
    }

    /// Fold one block into the state.
    pub fn compress(&mut self, block: &padding::Block) {
        match self {
            ChainingState::Md5(words) => md5::compress(words, block),
            ChainingState::Sha256(words) => sha256::compress(words, block),
        }
    }

    pub fn words(&self) -> &[u32] {
        match self {
            ChainingState::Md5(words) => &words[..],
            ChainingState::Sha256(words) => &words[..],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_algorithms_are_valid() {
        for algorithm in &[MD5, SHA256, SHA224] {
            assert!(algorithm.validate().is_ok(), "{} rejected", algorithm.name);
        }
    }

    #[test]
    fn test_state_size_mismatch() {
        let broken = Algorithm { initial_state: &md5::INITIAL, ..SHA256 };

        match ChainingState::initial(&broken) {
            Err(HashError::InvalidConfiguration { algorithm, .. }) => assert_eq!(algorithm, "SHA-256"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_word_order_follows_transform() {
        assert_eq!(MD5.word_order(), WordOrder::Little);
        assert_eq!(SHA256.word_order(), WordOrder::Big);
        assert_eq!(SHA224.word_order(), WordOrder::Big);
    }

    #[test]
    fn test_digest_length_bounds() {
        assert!(Algorithm { digest_words: 0, ..SHA224 }.validate().is_err());
        assert!(Algorithm { digest_words: 9, ..SHA256 }.validate().is_err());
        assert!(Algorithm { digest_words: 5, ..MD5 }.validate().is_err());
    }

    #[test]
    fn test_initial_state_variant() {
        assert_eq!(ChainingState::initial(&MD5).unwrap().words(), &md5::INITIAL[..]);
        assert_eq!(ChainingState::initial(&SHA224).unwrap().words(), &sha256::INITIAL_224[..]);
    }
}

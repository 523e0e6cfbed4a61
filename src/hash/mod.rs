use crate::error::HashError;

pub mod merkle_damgard;

/// A finished digest that can be copied out as plain bytes.
pub trait HashValue {
    /// The digest bytes in output order.
    fn raw(&self) -> Vec<u8>;
}

/// A hash that is fed its message in arbitrary pieces. Pieces are glued together before hashing,
/// so the split of the message never changes the digest.
pub trait HashFunction {
    /// Selects the algorithm. Only `init_hash` looks at it; the state carries whatever it needs
    /// from there on.
    type Context;

    /// The chaining state plus the buffered tail of the message that does not fill a block yet.
    type HashState;

    type HashData: HashValue;

    /// Start a new message. Returns `HashError::InvalidConfiguration` if `ctx` describes an
    /// algorithm that cannot be run, before any state is built.
    fn init_hash(ctx: &Self::Context) -> Result<Self::HashState, HashError>;

    /// Append ``input`` to the message. Every block completed by it is compressed right away.
    fn update_hash(hash: &mut Self::HashState, ctx: &Self::Context, input: &[u8]);

    /// Pad the message and compress the final blocks. Takes the state by value; clone it first to
    /// keep hashing a longer message with the same prefix.
    fn finish_hash(hash: Self::HashState, ctx: &Self::Context) -> Self::HashData;

    /// Hash a message that is completely in memory.
    fn digest_message(ctx: &Self::Context, input: &[u8]) -> Result<Self::HashData, HashError> {
        let mut hash_state = Self::init_hash(ctx)?;
        Self::update_hash(&mut hash_state, ctx, input);
        Ok(Self::finish_hash(hash_state, ctx))
    }
}

/// Sizes of a hash that compresses fixed-size blocks.
pub trait BlockHashFunction: HashFunction {
    /// Bytes per compressed block.
    fn block_size(ctx: &Self::Context) -> usize;

    /// Bytes in the finished digest.
    fn output_size(ctx: &Self::Context) -> usize;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::merkle_damgard::stream::MerkleDamgard;
    use super::merkle_damgard::{MD5, SHA224, SHA256};
    use super::*;

    pub const EMPTY_MESSAGE: &str = "";

    pub const SOME_TEXT: &str = "a-very-long-message-that-can-be-digested-at-once";

    pub const STREAM_TEXT: [&str; 3] = [
        "The quick brown fox ",
        "jumps over ",
        "the lazy dog",
    ];

    #[test]
    fn test_md5() {
        assert_eq!(
            hex::encode(&MerkleDamgard::digest_message(&MD5, EMPTY_MESSAGE.as_bytes()).unwrap().raw()),
            "d41d8cd98f00b204e9800998ecf8427e"
        );

        assert_eq!(
            hex::encode(&MerkleDamgard::digest_message(&MD5, SOME_TEXT.as_bytes()).unwrap().raw()),
            "9cf653b21b12797c80f769c8a753c360"
        );
    }

    #[test]
    fn test_md5_stream() {
        let mut hash_state = MerkleDamgard::init_hash(&MD5).unwrap();
        for part in STREAM_TEXT.iter() {
            MerkleDamgard::update_hash(&mut hash_state, &MD5, part.as_bytes());
        }

        let hash = MerkleDamgard::finish_hash(hash_state, &MD5);
        assert_eq!(hex::encode(hash.raw()), "9e107d9d372bb6826bd81d3542a419d6");
    }

    #[test]
    fn test_sha256_stream() {
        let mut hash_state = MerkleDamgard::init_hash(&SHA256).unwrap();
        for part in STREAM_TEXT.iter() {
            MerkleDamgard::update_hash(&mut hash_state, &SHA256, part.as_bytes());
        }

        let hash = MerkleDamgard::finish_hash(hash_state, &SHA256);
        assert_eq!(hex::encode(hash.raw()), "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592");
    }

    #[test]
    fn test_sizes() {
        assert_eq!(MerkleDamgard::block_size(&MD5), 64);
        assert_eq!(MerkleDamgard::output_size(&MD5), 16);
        assert_eq!(MerkleDamgard::output_size(&SHA256), 32);
        assert_eq!(MerkleDamgard::output_size(&SHA224), 28);
    }
}

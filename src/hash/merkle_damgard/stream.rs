use tracing::trace;

use super::digest::{assemble, Digest};
use super::padding::{Block, Padder};
use super::{Algorithm, ChainingState, BLOCK_LENGTH_BYTES};
use crate::error::HashError;
use crate::hash::{BlockHashFunction, HashFunction};

/// Incremental access to the Merkle-Damgård hashes. The algorithm is selected by the context
/// passed to `init_hash`; the hash state remembers it, so the context of later calls is not
/// consulted.
pub struct MerkleDamgard;

/// A partially computed hash. Full blocks are compressed as soon as they are complete, only the
/// tail of the message that does not fill a block yet is buffered.
#[derive(Debug, Clone)]
pub struct StreamState {
    algorithm: Algorithm,
    chaining_state: ChainingState,
    /// bits compressed so far
    message_length: u64,
    remaining_data_buffer: [u8; BLOCK_LENGTH_BYTES],
    remaining_data_length: usize,
}

impl StreamState {
    fn compress_block(&mut self, block: &Block) {
        self.chaining_state.compress(block);
        self.message_length = self.message_length.wrapping_add(BLOCK_LENGTH_BYTES as u64 * 8);
    }
}

impl HashFunction for MerkleDamgard {
    type Context = Algorithm;
    type HashState = StreamState;
    type HashData = Digest;

    fn init_hash(ctx: &Self::Context) -> Result<Self::HashState, HashError> {
        Ok(StreamState {
            algorithm: *ctx,
            chaining_state: ChainingState::initial(ctx)?,
            message_length: 0,
            remaining_data_buffer: [0u8; BLOCK_LENGTH_BYTES],
            remaining_data_length: 0,
        })
    }

    fn update_hash(hash: &mut Self::HashState, _ctx: &Self::Context, input: &[u8]) {
        let mut input = input;

        // complete the buffered block first, if there is one
        if hash.remaining_data_length > 0 {
            let free = BLOCK_LENGTH_BYTES - hash.remaining_data_length;
            let taken = free.min(input.len());
            hash.remaining_data_buffer[hash.remaining_data_length..hash.remaining_data_length + taken]
                .copy_from_slice(&input[..taken]);
            hash.remaining_data_length += taken;
            input = &input[taken..];

            if hash.remaining_data_length < BLOCK_LENGTH_BYTES {
                return;
            }

            let block = Block::from_bytes(hash.remaining_data_buffer);
            hash.compress_block(&block);
            hash.remaining_data_length = 0;
        }

        let mut blocks = input.chunks_exact(BLOCK_LENGTH_BYTES);
        for chunk in &mut blocks {
            let mut bytes = [0u8; BLOCK_LENGTH_BYTES];
            bytes.copy_from_slice(chunk);
            hash.compress_block(&Block::from_bytes(bytes));
        }

        let remainder = blocks.remainder();
        hash.remaining_data_buffer[..remainder.len()].copy_from_slice(remainder);
        hash.remaining_data_length = remainder.len();
        trace!(bits = hash.message_length, buffered = hash.remaining_data_length, "updated hash state");
    }

    fn finish_hash(hash: Self::HashState, _ctx: &Self::Context) -> Self::HashData {
        let algorithm = hash.algorithm;
        let remaining_data = &hash.remaining_data_buffer[..hash.remaining_data_length];
        let mut padder = Padder::resume(remaining_data, algorithm.word_order(), hash.message_length);
        let mut chaining_state = hash.chaining_state;

        loop {
            match padder.next_block() {
                Ok(Some(block)) => chaining_state.compress(&block),
                Ok(None) => break,
                Err(never) => match never {},
            }
        }

        assemble(&chaining_state, algorithm.word_order(), algorithm.digest_words)
    }
}

impl BlockHashFunction for MerkleDamgard {
    fn block_size(_ctx: &Self::Context) -> usize {
        BLOCK_LENGTH_BYTES
    }

    fn output_size(ctx: &Self::Context) -> usize {
        ctx.digest_words * 4
    }
}

//! Length padding of the Merkle-Damgård construction. The padder pulls the message from a
//! [`ByteSource`] one block at a time and appends a single 1-bit (the ``0x80`` marker byte), zero
//! bytes and the message length in bits, so that the padded stream is a multiple of 512 bits.

use std::mem::size_of;

use damgard_util::{read_u64, write_u64, WordOrder};
use tracing::trace;

use super::source::ByteSource;
use super::BLOCK_LENGTH_BYTES;

/// the byte inserted directly after the message: a single 1-bit followed by seven 0-bits
pub const MARKER_BYTE: u8 = 0x80;

/// offset of the 64 bit length field in the final block
pub const LENGTH_FIELD_OFFSET: usize = BLOCK_LENGTH_BYTES - size_of::<u64>();

/// One 64 byte block of the padded message.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Block([u8; BLOCK_LENGTH_BYTES]);

impl Block {
    pub fn zeroed() -> Self {
        Block([0u8; BLOCK_LENGTH_BYTES])
    }

    pub fn from_bytes(bytes: [u8; BLOCK_LENGTH_BYTES]) -> Self {
        Block(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; BLOCK_LENGTH_BYTES] {
        &self.0
    }

    /// Decode the trailing 64 bit length field. Only meaningful for the final block.
    pub fn length_field(&self, order: WordOrder) -> u64 {
        read_u64(order, &self.0[LENGTH_FIELD_OFFSET..])
    }

    fn set_length_field(&mut self, order: WordOrder, bit_count: u64) {
        write_u64(order, bit_count, &mut self.0[LENGTH_FIELD_OFFSET..]);
    }
}

impl std::fmt::Debug for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Block").field(&&self.0[..]).finish()
    }
}

/// Progress of the padding. Transitions only depend on the previous state and on how many bytes
/// the last read produced.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PadState {
    /// The message has not ended yet, the next block is read from the source.
    Reading,
    /// The message ended exactly on a block boundary. Marker and length both still need to be
    /// emitted and fit together into the next block.
    MarkerPending,
    /// The marker was emitted, but there was no room left for the length. The next block is all
    /// zeros except for the length.
    LengthPending,
    /// The length has been emitted; no further blocks follow.
    Done,
}

impl PadState {
    /// The state after a read of ``read`` bytes in state `Reading`. ``exhausted`` is the source's
    /// own report of whether it has any bytes left.
    pub fn after_read(read: usize, exhausted: bool) -> PadState {
        match read {
            BLOCK_LENGTH_BYTES if exhausted => PadState::MarkerPending,
            BLOCK_LENGTH_BYTES => PadState::Reading,
            n if n < LENGTH_FIELD_OFFSET => PadState::Done,
            _ => PadState::LengthPending,
        }
    }
}

/// Pulls the message from a byte source and emits it as padded blocks.
#[derive(Debug)]
pub struct Padder<S> {
    source: S,
    word_order: WordOrder,
    bit_count: u64,
    state: PadState,
}

impl<S: ByteSource> Padder<S> {
    /// Create a padder for a fresh message.
    pub fn new(source: S, word_order: WordOrder) -> Self {
        Self::resume(source, word_order, 0)
    }

    /// Create a padder for the tail of a message of which ``bit_count`` bits have already been
    /// compressed in full blocks.
    pub fn resume(source: S, word_order: WordOrder, bit_count: u64) -> Self {
        Padder { source, word_order, bit_count, state: PadState::Reading }
    }

    /// Number of message bits consumed so far.
    pub fn bit_count(&self) -> u64 {
        self.bit_count
    }

    pub fn state(&self) -> PadState {
        self.state
    }

    /// Produce the next padded block, or `None` once the length field has been emitted. Errors
    /// of the source are passed through; the bytes of a partially read block are lost.
    pub fn next_block(&mut self) -> Result<Option<Block>, S::Error> {
        let mut block = Block::zeroed();

        match self.state {
            PadState::Done => return Ok(None),
            PadState::LengthPending => {
                block.set_length_field(self.word_order, self.bit_count);
                self.state = PadState::Done;
            }
            PadState::MarkerPending => {
                block.0[0] = MARKER_BYTE;
                block.set_length_field(self.word_order, self.bit_count);
                self.state = PadState::Done;
            }
            PadState::Reading => {
                let read = self.fill(&mut block)?;
                // the length is defined modulo 2^64
                self.bit_count = self.bit_count.wrapping_add(8 * read as u64);

                self.state = PadState::after_read(read, self.source.is_exhausted());
                match self.state {
                    PadState::Done => {
                        block.0[read] = MARKER_BYTE;
                        block.set_length_field(self.word_order, self.bit_count);
                    }
                    PadState::LengthPending => block.0[read] = MARKER_BYTE,
                    PadState::Reading | PadState::MarkerPending => {}
                }

                trace!(read, bit_count = self.bit_count, state = ?self.state, "read message block");
                return Ok(Some(block));
            }
        }

        trace!(bit_count = self.bit_count, "emitted padding block");
        Ok(Some(block))
    }

    /// Read from the source until the block is full or the source is exhausted. Sources may hand
    /// out fewer bytes than requested, so a single read is not enough.
    fn fill(&mut self, block: &mut Block) -> Result<usize, S::Error> {
        let mut filled = 0;

        while filled < BLOCK_LENGTH_BYTES {
            let read = self.source.read_bytes(&mut block.0[filled..])?;
            if read == 0 {
                break;
            }
            filled += read;
        }

        Ok(filled)
    }
}

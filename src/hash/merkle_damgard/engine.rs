use std::io::Read;

use tracing::{debug, trace};

use super::digest::{assemble, Digest};
use super::padding::Padder;
use super::source::{ByteSource, ReaderSource};
use super::{Algorithm, ChainingState};
use crate::error::HashError;

/// Progress of a digest computation. Construction performs the initialization, so a fresh engine
/// is already reading.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EngineState {
    Reading,
    Finished,
}

/// Drives one digest computation: pulls padded blocks from the source, folds them into the
/// chaining state and serializes the result once the padding is complete. An engine owns all state
/// of its computation, so independent engines can run on different threads.
#[derive(Debug)]
pub struct Engine<S> {
    algorithm: Algorithm,
    chaining_state: ChainingState,
    padder: Padder<S>,
    state: EngineState,
    blocks: u64,
}

impl<S: ByteSource> Engine<S> {
    /// Set up a computation of ``algorithm`` over the bytes of ``source``. Fails if the algorithm
    /// descriptor is inconsistent; no byte is read in that case.
    pub fn new(algorithm: Algorithm, source: S) -> Result<Self, HashError> {
        let chaining_state = ChainingState::initial(&algorithm)?;
        debug!(algorithm = algorithm.name, "starting digest computation");

        Ok(Engine {
            algorithm,
            chaining_state,
            padder: Padder::new(source, algorithm.word_order()),
            state: EngineState::Reading,
            blocks: 0,
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Process the next padded block. Returns `false` once the padding is complete.
    fn step(&mut self) -> Result<bool, HashError> {
        let block = match self.padder.next_block() {
            Ok(block) => block,
            Err(err) => {
                let err: HashError = err.into();
                debug!(algorithm = self.algorithm.name, blocks = self.blocks, error = %err,
                       "abandoning digest computation");
                return Err(err);
            }
        };

        match block {
            Some(block) => {
                self.chaining_state.compress(&block);
                self.blocks += 1;
                trace!(algorithm = self.algorithm.name, block = self.blocks, "compressed block");
                Ok(true)
            }
            None => {
                self.state = EngineState::Finished;
                Ok(false)
            }
        }
    }

    /// Run the computation to the end and return the digest. A read error aborts the computation;
    /// no partial digest is produced.
    pub fn finish(mut self) -> Result<Digest, HashError> {
        while self.state == EngineState::Reading {
            self.step()?;
        }

        debug!(algorithm = self.algorithm.name, bits = self.padder.bit_count(), blocks = self.blocks,
               "digest computation finished");
        Ok(assemble(&self.chaining_state, self.algorithm.word_order(), self.algorithm.digest_words))
    }
}

/// Digest a message held in memory.
pub fn digest_bytes(algorithm: &Algorithm, input: &[u8]) -> Result<Digest, HashError> {
    Engine::new(*algorithm, input)?.finish()
}

/// Digest everything ``reader`` yields until its end.
pub fn digest_reader<R: Read>(algorithm: &Algorithm, reader: R) -> Result<Digest, HashError> {
    Engine::new(*algorithm, ReaderSource::new(reader))?.finish()
}

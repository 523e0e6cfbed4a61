//! Software implementations of the Merkle-Damgård hashes MD5, SHA-256 and SHA-224 over a common
//! streaming engine. Input is pulled block by block from a [`ByteSource`], so messages of any
//! length are hashed with a single 64 byte buffer.
//!
//! ```
//! use damgard::{digest_bytes, SHA256};
//!
//! let digest = digest_bytes(&SHA256, b"abc").unwrap();
//! assert_eq!(&digest.as_bytes()[..4], &[0xba, 0x78, 0x16, 0xbf]);
//! ```

pub mod error;
pub mod hash;

pub use error::HashError;
pub use hash::merkle_damgard::digest::Digest;
pub use hash::merkle_damgard::engine::{digest_bytes, digest_reader, Engine};
pub use hash::merkle_damgard::source::{ByteSource, ReaderSource};
pub use hash::merkle_damgard::{Algorithm, MD5, SHA224, SHA256};
pub use hash::{BlockHashFunction, HashFunction, HashValue};

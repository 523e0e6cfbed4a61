//! Byte-order helpers shared by the hash implementations. Blocks and digests are plain byte
//! arrays; these functions pack and unpack them as 32 bit words or 64 bit lengths with an
//! explicitly declared endianness, so no hash depends on the endianness of the host.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// The order in which the bytes of a multi-byte integer are laid out in a block or digest.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WordOrder {
    /// least significant byte first (MD5)
    Little,
    /// most significant byte first (SHA-2)
    Big,
}

/// Reads ``dest.len()`` 32 bit words from ``source``. ``source`` must be exactly four times as long
/// as ``dest``.
pub fn read_words(order: WordOrder, source: &[u8], dest: &mut [u32]) {
    assert_eq!(source.len(), dest.len() * 4);

    match order {
        WordOrder::Little => LittleEndian::read_u32_into(source, dest),
        WordOrder::Big => BigEndian::read_u32_into(source, dest),
    }
}

/// Writes all words of ``source`` into ``dest``, which must be exactly four times as long as
/// ``source``.
pub fn write_words(order: WordOrder, source: &[u32], dest: &mut [u8]) {
    assert_eq!(dest.len(), source.len() * 4);

    match order {
        WordOrder::Little => LittleEndian::write_u32_into(source, dest),
        WordOrder::Big => BigEndian::write_u32_into(source, dest),
    }
}

/// Decodes a 64 bit integer from the first eight bytes of ``source``.
pub fn read_u64(order: WordOrder, source: &[u8]) -> u64 {
    match order {
        WordOrder::Little => LittleEndian::read_u64(source),
        WordOrder::Big => BigEndian::read_u64(source),
    }
}

/// Encodes ``value`` into the first eight bytes of ``dest``.
pub fn write_u64(order: WordOrder, value: u64, dest: &mut [u8]) {
    match order {
        WordOrder::Little => LittleEndian::write_u64(dest, value),
        WordOrder::Big => BigEndian::write_u64(dest, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_words_le() {
        let mut dest = [0u32; 2];
        read_words(WordOrder::Little, &[0x78, 0x56, 0x34, 0x12, 0xFF, 0x00, 0xFF, 0x00], &mut dest);
        assert_eq!([0x1234_5678u32, 0x00FF_00FFu32], dest)
    }

    #[test]
    fn test_read_words_be() {
        let mut dest = [0u32; 2];
        read_words(WordOrder::Big, &[0x12, 0x34, 0x56, 0x78, 0x00, 0xFF, 0x00, 0xFF], &mut dest);
        assert_eq!([0x1234_5678u32, 0x00FF_00FFu32], dest)
    }

    #[test]
    fn test_write_words() {
        let mut little = [0u8; 4];
        let mut big = [0u8; 4];
        write_words(WordOrder::Little, &[0xDEAD_BEEF], &mut little);
        write_words(WordOrder::Big, &[0xDEAD_BEEF], &mut big);

        assert_eq!([0xEF, 0xBE, 0xAD, 0xDE], little);
        assert_eq!([0xDE, 0xAD, 0xBE, 0xEF], big);
    }

    #[test]
    fn test_u64_layout() {
        let mut little = [0u8; 8];
        let mut big = [0u8; 8];
        write_u64(WordOrder::Little, 0x18, &mut little);
        write_u64(WordOrder::Big, 0x18, &mut big);

        assert_eq!([0x18, 0, 0, 0, 0, 0, 0, 0], little);
        assert_eq!([0, 0, 0, 0, 0, 0, 0, 0x18], big);
        assert_eq!(read_u64(WordOrder::Little, &little), 0x18);
        assert_eq!(read_u64(WordOrder::Big, &big), 0x18);
    }

    #[test]
    #[should_panic]
    fn test_mismatched_lengths() {
        let mut dest = [0u32; 2];
        read_words(WordOrder::Big, &[0u8; 7], &mut dest);
    }
}

use core::fmt;
use core::str::FromStr;

use byteorder::{BigEndian, ByteOrder};
use log::trace;
use rand::RngCore;

use crate::error::ParseError;
use crate::parsers;

/// Byte length of a full MAC address.
pub const ADDR_LEN: usize = 6;
/// Byte length of an OUI or other upper-half value.
pub const OUI_LEN: usize = 3;

/// An IEEE 802 hardware address: six octets for a full MAC address, three
/// for an OUI or other upper-half value.
///
/// Logically a big-endian unsigned integer of 48 or 24 bits. There is no
/// type tag beyond the length; operations that only make sense for one
/// length check it and panic otherwise. All operations are read-only and
/// produce new values.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Address {
    bytes: heapless::Vec<u8, ADDR_LEN>,
}

/// Named textual dialects for [`Address::format_as`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// `15-EF-2E-91-97-7A`
    Ieee,
    /// `15:EF:2E:91:97:7A`
    ColonSeparated,
    /// `15EF2E91977A`
    Plain,
    /// `15ef.2e91.977a`; defined for 6-byte addresses only.
    Cisco,
    /// `21.239.46.145.151.122`; also goes by "oid".
    DottedDecimal,
}

impl FromStr for Style {
    type Err = ();

    fn from_str(s: &str) -> Result<Style, ()> {
        match s {
            "ieee" => Ok(Style::Ieee),
            "colon_separated" => Ok(Style::ColonSeparated),
            "plain" => Ok(Style::Plain),
            "cisco" => Ok(Style::Cisco),
            "dotted_decimal" | "oid" => Ok(Style::DottedDecimal),
            _ => Err(()),
        }
    }
}

/// Input dialects for [`Address::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Lenient hex: non-hex-digit characters are stripped before decoding.
    #[default]
    Hex,
    /// Strict dotted decimal; also goes by "oid".
    DottedDecimal,
}

impl FromStr for InputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<InputFormat, ()> {
        match s {
            "hex" => Ok(InputFormat::Hex),
            "dotted_decimal" | "oid" => Ok(InputFormat::DottedDecimal),
            _ => Err(()),
        }
    }
}

impl Address {
    /// Construct an address from a sequence of octets, in big-endian.
    ///
    /// # Panics
    /// The function panics if `data` is not three or six octets long.
    pub fn from_bytes(data: &[u8]) -> Address {
        assert!(
            data.len() == OUI_LEN || data.len() == ADDR_LEN,
            "address must be {} or {} bytes, got {}",
            OUI_LEN,
            ADDR_LEN,
            data.len()
        );
        Address {
            bytes: heapless::Vec::from_slice(data).unwrap(),
        }
    }

    /// Encode `value mod 2^bits` as a big-endian address of `bits / 8` octets.
    ///
    /// # Panics
    /// `bits` must be 24 or 48.
    pub fn from_integer(value: u64, bits: u32) -> Address {
        match bits {
            24 => {
                let mut buf = [0u8; OUI_LEN];
                BigEndian::write_u24(&mut buf, (value & 0x00ff_ffff) as u32);
                Address::from_bytes(&buf)
            }
            48 => {
                let mut buf = [0u8; ADDR_LEN];
                BigEndian::write_u48(&mut buf, value & 0xffff_ffff_ffff);
                Address::from_bytes(&buf)
            }
            _ => panic!("address width must be 24 or 48 bits, got {bits}"),
        }
    }

    /// Reinterpret the octets as a single big-endian unsigned integer.
    pub fn to_integer(&self) -> u64 {
        match self.len() {
            OUI_LEN => u64::from(BigEndian::read_u24(&self.bytes)),
            _ => BigEndian::read_u48(&self.bytes),
        }
    }

    /// The all-ones broadcast address.
    pub fn broadcast() -> Address {
        Address::from_bytes(&[u8::MAX; ADDR_LEN])
    }

    /// Six octets from a cryptographically secure random source.
    pub fn random() -> Address {
        Address::random_with_prefix(&[])
    }

    /// `prefix` followed by cryptographically random octets up to six bytes
    /// total. Conventionally `prefix` is a 3-byte OUI, giving a random
    /// address within one manufacturer's block.
    ///
    /// # Panics
    /// `prefix` must not exceed six bytes.
    pub fn random_with_prefix(prefix: &[u8]) -> Address {
        assert!(
            prefix.len() <= ADDR_LEN,
            "prefix must be at most {} bytes, got {}",
            ADDR_LEN,
            prefix.len()
        );
        let mut buf = [0u8; ADDR_LEN];
        buf[..prefix.len()].copy_from_slice(prefix);
        rand::thread_rng().fill_bytes(&mut buf[prefix.len()..]);
        Address::from_bytes(&buf)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Bit width of the address: 48 or 24.
    pub fn bits(&self) -> u32 {
        8 * self.len() as u32
    }

    /// Split into big-endian chunks of `chunk_bits` each, most significant
    /// chunk first.
    ///
    /// # Panics
    /// `chunk_bits` must be 8, 16 or 24 and must divide the address's bit
    /// width; asking for the 16-bit words of a 3-byte value is a
    /// programming error, not a recoverable one.
    pub fn split(&self, chunk_bits: u32) -> heapless::Vec<u32, ADDR_LEN> {
        assert!(
            matches!(chunk_bits, 8 | 16 | 24),
            "chunk size must be 8, 16 or 24 bits, got {chunk_bits}"
        );
        assert!(
            self.bits() % chunk_bits == 0,
            "cannot split a {}-bit address into {}-bit chunks",
            self.bits(),
            chunk_bits
        );
        let step = (chunk_bits / 8) as usize;
        let mut chunks = heapless::Vec::new();
        for piece in self.bytes.chunks(step) {
            let chunk = match step {
                1 => u32::from(piece[0]),
                2 => u32::from(BigEndian::read_u16(piece)),
                _ => BigEndian::read_u24(piece),
            };
            chunks.push(chunk).unwrap();
        }
        chunks
    }

    /// Split into `chunk_bits`-sized chunks, render each with `chunk_fmt`
    /// and join the pieces with `separator`. The named styles are all
    /// special cases of this.
    pub fn format<F>(&self, chunk_bits: u32, chunk_fmt: F, separator: &str) -> String
    where
        F: Fn(u32) -> String,
    {
        let parts: Vec<String> = self.split(chunk_bits).iter().map(|&c| chunk_fmt(c)).collect();
        parts.join(separator)
    }

    /// Render in one of the named styles.
    ///
    /// # Panics
    /// [`Style::Cisco`] splits into 16-bit words and therefore panics for
    /// a 3-byte address.
    pub fn format_as(&self, style: Style) -> String {
        match style {
            Style::Ieee => self.format(8, |c| format!("{c:02X}"), "-"),
            Style::ColonSeparated => self.format(8, |c| format!("{c:02X}"), ":"),
            Style::Plain => self.format(8, |c| format!("{c:02X}"), ""),
            Style::Cisco => self.format(16, |c| format!("{c:04x}"), "."),
            Style::DottedDecimal => self.format(8, |c| c.to_string(), "."),
        }
    }

    /// Parse `text` in the given input dialect.
    ///
    /// Hex parsing is deliberately lenient: every character that is not an
    /// ASCII hex digit is stripped before decoding, so `"15-EF-2E-91-97-7A"`,
    /// `"15ef.2e91.977a"` and `"15 EF 2E 91 97 7A"` all parse. So does any
    /// other text that happens to leave exactly 6 or 12 hex digits behind,
    /// whether or not it was meant as an address. Use
    /// [`InputFormat::DottedDecimal`] when strictness matters.
    pub fn parse(text: &str, format: InputFormat) -> Result<Address, ParseError> {
        match format {
            InputFormat::Hex => Address::parse_hex(text),
            InputFormat::DottedDecimal => Address::parse_dotted(text),
        }
    }

    fn parse_hex(text: &str) -> Result<Address, ParseError> {
        let mut digits = 0usize;
        let mut stripped = 0usize;
        let mut value = 0u64;
        for ch in text.chars() {
            match ch.to_digit(16) {
                Some(d) => {
                    digits += 1;
                    // 12 digits fill the 48-bit width; anything past that
                    // fails the count check below, so stop accumulating.
                    if digits <= 12 {
                        value = (value << 4) | u64::from(d);
                    }
                }
                None => stripped += 1,
            }
        }
        if stripped > 0 {
            trace!("hex parse of {text:?} ignored {stripped} non-hex characters");
        }
        if digits != 6 && digits != 12 {
            return Err(ParseError::HexDigitCount { found: digits });
        }
        Ok(Address::from_integer(value, 4 * digits as u32))
    }

    fn parse_dotted(text: &str) -> Result<Address, ParseError> {
        let groups = parsers::parse_dotted(text)?;
        if groups.len() != OUI_LEN && groups.len() != ADDR_LEN {
            return Err(ParseError::GroupCount {
                found: groups.len(),
            });
        }
        let mut buf = [0u8; ADDR_LEN];
        for (slot, &group) in buf.iter_mut().zip(groups.iter()) {
            if group > u64::from(u8::MAX) {
                return Err(ParseError::OctetOutOfRange { value: group });
            }
            *slot = group as u8;
        }
        Ok(Address::from_bytes(&buf[..groups.len()]))
    }

    /// Value of the I/G bit (bit 0 of the first octet): 0 for unicast,
    /// 1 for multicast.
    pub fn ig_bit(&self) -> u8 {
        self.bytes[0] & 0x01
    }

    /// Value of the U/L bit (bit 1 of the first octet), normalized: 0 for
    /// universally administered, 1 for locally administered.
    pub fn ul_bit(&self) -> u8 {
        (self.bytes[0] & 0x02) >> 1
    }

    /// Query whether the "group" bit is set.
    pub fn is_multicast(&self) -> bool {
        self.ig_bit() != 0
    }

    /// Query whether the "group" bit is clear. The broadcast address has
    /// it set, so it counts as multicast here.
    pub fn is_unicast(&self) -> bool {
        !self.is_multicast()
    }

    /// Query whether the address is universally administered.
    pub fn is_universal(&self) -> bool {
        self.ul_bit() == 0
    }

    /// Query whether the "locally administered" bit is set.
    pub fn is_local(&self) -> bool {
        !self.is_universal()
    }

    /// Query whether this is the all-ones broadcast address. Always false
    /// for a 3-byte value.
    pub fn is_broadcast(&self) -> bool {
        self.len() == ADDR_LEN && *self == Address::broadcast()
    }

    /// The first three octets, regardless of the administration bit.
    pub fn most_significant_24_bits(&self) -> Address {
        Address::from_bytes(&self.bytes[..OUI_LEN])
    }

    /// The Organizationally Unique Identifier, if the address has one.
    /// Locally administered addresses carry no manufacturer identifier, so
    /// this is `None` for them; [`Address::most_significant_24_bits`] is
    /// the unconditional counterpart.
    pub fn oui(&self) -> Option<Address> {
        if self.is_universal() {
            Some(self.most_significant_24_bits())
        } else {
            None
        }
    }

    /// Add `delta` modulo the address's own bit width. Wraps silently;
    /// `delta` may be negative.
    pub fn add(&self, delta: i64) -> Address {
        self.offset(i128::from(delta))
    }

    /// Subtract `delta` modulo the address's own bit width. Wraps silently;
    /// `delta` may be negative.
    pub fn subtract(&self, delta: i64) -> Address {
        self.offset(-i128::from(delta))
    }

    /// The next address in the space, wrapping at the top.
    pub fn succ(&self) -> Address {
        self.add(1)
    }

    /// The previous address in the space, wrapping at zero.
    pub fn pred(&self) -> Address {
        self.subtract(1)
    }

    fn offset(&self, delta: i128) -> Address {
        let modulus = 1i128 << self.bits();
        let value = (i128::from(self.to_integer()) + delta).rem_euclid(modulus);
        Address::from_integer(value as u64, self.bits())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_as(Style::Ieee))
    }
}

impl FromStr for Address {
    type Err = ParseError;

    /// Parse with the default (lenient hex) dialect.
    fn from_str(s: &str) -> Result<Address, ParseError> {
        Address::parse(s, InputFormat::Hex)
    }
}

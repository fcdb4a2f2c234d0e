use super::error::BencodeError;
use super::options::DecodeOptions;
use super::value::Value;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::io::{self, Read};
use tracing::{debug, trace};

/// Longest digit run accepted. 20 digits cover both `i64::MIN` and `u64::MAX`.
const MAX_DIGITS: usize = 20;

/// Upper bound on the buffer reserved up front for a byte string payload.
/// Longer payloads grow as bytes actually arrive.
const PREALLOC_LIMIT: usize = 64 * 1024;

/// Decodes a single value from a byte slice.
///
/// Bytes following the first complete value are ignored; use
/// [`decode_exact`] to reject them.
///
/// # Examples
///
/// ```
/// use rbencode::decode;
///
/// assert_eq!(decode(b"i-69e").unwrap().as_integer(), Some(-69));
/// assert_eq!(decode(b"6:rosebphaha").unwrap().as_str(), Some("rosebp"));
/// ```
pub fn decode(data: &[u8]) -> Result<Value, BencodeError> {
    decode_from(data)
}

/// Decodes a single value from text.
pub fn decode_str(text: &str) -> Result<Value, BencodeError> {
    decode(text.as_bytes())
}

/// Decodes a single value from a reader using the default [`DecodeOptions`].
///
/// At most one byte past the end of the value is consumed from `reader`.
pub fn decode_from<R: Read>(reader: R) -> Result<Value, BencodeError> {
    Decoder::new(reader).decode()
}

/// Decodes a value that must span all of `data`.
///
/// # Examples
///
/// ```
/// use rbencode::{decode_exact, BencodeError};
///
/// assert!(decode_exact(b"i42e").is_ok());
/// assert!(matches!(
///     decode_exact(b"i42eextra"),
///     Err(BencodeError::TrailingData { offset: 4 })
/// ));
/// ```
pub fn decode_exact(data: &[u8]) -> Result<Value, BencodeError> {
    let mut decoder = Decoder::new(data);
    let value = decoder.decode()?;
    decoder.finish()?;
    Ok(value)
}

/// A pull decoder over any [`Read`] source.
///
/// The decoder keeps a single byte of lookahead. After an error the reader
/// is left wherever decoding stopped and should not be reused.
pub struct Decoder<R> {
    reader: R,
    peeked: Option<u8>,
    pos: usize,
    options: DecodeOptions,
}

impl<R: Read> Decoder<R> {
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, DecodeOptions::default())
    }

    pub fn with_options(reader: R, options: DecodeOptions) -> Self {
        Self {
            reader,
            peeked: None,
            pos: 0,
            options,
        }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Decodes the next value from the stream.
    ///
    /// Values can be decoded back to back from the same stream:
    ///
    /// ```
    /// use rbencode::Decoder;
    ///
    /// let mut decoder = Decoder::new(&b"i1e3:two"[..]);
    /// assert_eq!(decoder.decode().unwrap().as_integer(), Some(1));
    /// assert_eq!(decoder.decode().unwrap().as_str(), Some("two"));
    /// assert!(decoder.finish().is_ok());
    /// ```
    pub fn decode(&mut self) -> Result<Value, BencodeError> {
        let start = self.pos;
        let result = self.decode_value(0);
        if let Err(err) = &result {
            debug!(start, offset = self.pos, error = %err, "bencode decode failed");
        }
        result
    }

    /// Checks that the stream holds no further bytes.
    pub fn finish(&mut self) -> Result<(), BencodeError> {
        match self.peek()? {
            Some(_) => Err(BencodeError::TrailingData { offset: self.pos }),
            None => Ok(()),
        }
    }

    /// Returns the underlying reader. A byte held as lookahead is dropped.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn decode_value(&mut self, depth: usize) -> Result<Value, BencodeError> {
        match self.peek()? {
            None => Err(self.eof()),
            Some(b'i') => self.decode_integer(),
            Some(b'l') => self.decode_list(depth + 1),
            Some(b'd') => self.decode_dict(depth + 1),
            Some(b) if b.is_ascii_digit() => Ok(Value::Bytes(self.decode_bytes()?)),
            Some(_) => Err(BencodeError::invalid(self.pos, "unexpected byte")),
        }
    }

    fn decode_integer(&mut self) -> Result<Value, BencodeError> {
        self.next_byte()?;

        let negative = self.peek()? == Some(b'-');
        if negative {
            self.next_byte()?;
        }

        let start = self.pos;
        let mut digits = [0u8; MAX_DIGITS];
        let len = self.read_digits(b'e', &mut digits)?;
        let digits = &digits[..len];

        match digits {
            [] => return Err(BencodeError::invalid(start, "empty integer")),
            [b'0'] if negative => return Err(BencodeError::invalid(start, "negative zero")),
            [b'0', _, ..] => return Err(BencodeError::invalid(start, "leading zero")),
            _ => {}
        }

        // Accumulate towards negative so i64::MIN is representable.
        let out_of_range = || BencodeError::invalid(start, "integer out of range");
        let mut value: i64 = 0;
        for &d in digits {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_sub(i64::from(d - b'0')))
                .ok_or_else(out_of_range)?;
        }
        if !negative {
            value = value.checked_neg().ok_or_else(out_of_range)?;
        }

        Ok(Value::Integer(value))
    }

    fn decode_bytes(&mut self) -> Result<Bytes, BencodeError> {
        let start = self.pos;
        let mut digits = [0u8; MAX_DIGITS];
        let len = self.read_digits(b':', &mut digits)?;
        let digits = &digits[..len];

        match digits {
            [] => return Err(BencodeError::invalid(start, "empty string length")),
            [b'0', _, ..] => return Err(BencodeError::invalid(start, "leading zero in string length")),
            _ => {}
        }

        let mut length: usize = 0;
        for &d in digits {
            length = length
                .checked_mul(10)
                .and_then(|l| l.checked_add(usize::from(d - b'0')))
                .ok_or_else(|| BencodeError::invalid(start, "string length out of range"))?;
        }

        // The ':' was consumed through next_byte, so no lookahead is pending.
        debug_assert!(self.peeked.is_none());
        let mut payload = Vec::with_capacity(length.min(PREALLOC_LIMIT));
        let read = self
            .reader
            .by_ref()
            .take(length as u64)
            .read_to_end(&mut payload)?;
        self.pos += read;

        if read < length {
            return Err(self.eof());
        }

        Ok(Bytes::from(payload))
    }

    fn decode_list(&mut self, depth: usize) -> Result<Value, BencodeError> {
        self.check_depth(depth)?;
        self.next_byte()?;

        let mut list = Vec::new();
        loop {
            match self.peek()? {
                None => return Err(self.eof()),
                Some(b'e') => break,
                Some(_) => list.push(self.decode_value(depth)?),
            }
        }

        self.next_byte()?;
        Ok(Value::List(list))
    }

    fn decode_dict(&mut self, depth: usize) -> Result<Value, BencodeError> {
        self.check_depth(depth)?;
        self.next_byte()?;

        let mut dict = BTreeMap::new();
        loop {
            let key_offset = self.pos;
            match self.peek()? {
                None => return Err(self.eof()),
                Some(b'e') => break,
                Some(b) if b.is_ascii_digit() => {}
                Some(_) => {
                    return Err(BencodeError::invalid(
                        key_offset,
                        "dictionary key must be a byte string",
                    ))
                }
            }

            let key = self.decode_bytes()?;
            if self.options.strict_key_order {
                if let Some((prev, _)) = dict.last_key_value() {
                    if key == *prev {
                        return Err(BencodeError::invalid(key_offset, "duplicate dictionary key"));
                    }
                    if key < *prev {
                        return Err(BencodeError::invalid(
                            key_offset,
                            "dictionary keys not in ascending order",
                        ));
                    }
                }
            }

            let value = self.decode_value(depth)?;
            if dict.insert(key, value).is_some() {
                trace!(offset = key_offset, "duplicate dictionary key replaced");
            }
        }

        self.next_byte()?;
        Ok(Value::Dict(dict))
    }

    /// Reads ASCII digits up to and including `terminator`, which is not stored.
    fn read_digits(
        &mut self,
        terminator: u8,
        buf: &mut [u8; MAX_DIGITS],
    ) -> Result<usize, BencodeError> {
        let mut len = 0;
        loop {
            let offset = self.pos;
            let b = self.next_byte()?;
            if b == terminator {
                return Ok(len);
            }
            if !b.is_ascii_digit() {
                return Err(BencodeError::invalid(offset, "expected decimal digit"));
            }
            if len == buf.len() {
                return Err(BencodeError::invalid(offset, "number too long"));
            }
            buf[len] = b;
            len += 1;
        }
    }

    fn check_depth(&self, depth: usize) -> Result<(), BencodeError> {
        match self.options.max_depth {
            Some(max) if depth > max => Err(BencodeError::NestingTooDeep { depth: max }),
            _ => Ok(()),
        }
    }

    fn peek(&mut self) -> Result<Option<u8>, BencodeError> {
        if self.peeked.is_none() {
            let mut buf = [0u8; 1];
            loop {
                match self.reader.read(&mut buf) {
                    Ok(0) => return Ok(None),
                    Ok(_) => {
                        self.peeked = Some(buf[0]);
                        break;
                    }
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e.into()),
                }
            }
        }
        Ok(self.peeked)
    }

    fn next_byte(&mut self) -> Result<u8, BencodeError> {
        let b = self.peek()?.ok_or_else(|| self.eof())?;
        self.peeked = None;
        self.pos += 1;
        Ok(b)
    }

    fn eof(&self) -> BencodeError {
        BencodeError::UnexpectedEof { offset: self.pos }
    }
}

/// Decoder configuration.
///
/// The defaults accept only canonical input: dictionary keys must appear in
/// strictly ascending byte order, which also rules out duplicates.
///
/// # Examples
///
/// ```
/// use rbencode::{decode_from, DecodeOptions, Decoder};
///
/// // Out of order keys are rejected by default...
/// assert!(decode_from(&b"d1:bi2e1:ai1ee"[..]).is_err());
///
/// // ...but accepted in lenient mode.
/// let mut decoder = Decoder::with_options(&b"d1:bi2e1:ai1ee"[..], DecodeOptions::lenient());
/// let value = decoder.decode().unwrap();
/// assert_eq!(value.get(b"a").and_then(|v| v.as_integer()), Some(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Require dictionary keys in strictly ascending order.
    ///
    /// When disabled, keys may appear in any order and a repeated key
    /// replaces the earlier entry.
    pub strict_key_order: bool,

    /// Maximum list/dictionary nesting depth. `None` means unbounded.
    pub max_depth: Option<usize>,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            strict_key_order: true,
            max_depth: None,
        }
    }
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that accept dictionary keys in any order.
    pub fn lenient() -> Self {
        Self::default().with_strict_key_order(false)
    }

    pub fn with_strict_key_order(mut self, strict: bool) -> Self {
        self.strict_key_order = strict;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}

//! Bencode encoding and decoding ([BEP-3]).
//!
//! # Data Types
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! Decoding is strict about canonical form: integers may not carry leading
//! zeros or a negative zero, string lengths may not be zero padded, and by
//! default dictionary keys must be unique and sorted. Encoding always
//! produces canonical output.
//!
//! # Examples
//!
//! ```
//! use rbencode::{decode, decode_str, encode, Value};
//!
//! let value = decode_str("l4:arun3:abii356ed4:name4:arunee").unwrap();
//! let list = value.as_list().unwrap();
//! assert_eq!(list[0].as_str(), Some("arun"));
//! assert_eq!(list[2].as_integer(), Some(356));
//! assert_eq!(list[3].get(b"name").and_then(Value::as_str), Some("arun"));
//!
//! let bytes = encode(&value).unwrap();
//! assert_eq!(decode(&bytes).unwrap(), value);
//! ```
//!
//! Plain Rust values encode directly through [`ToBencode`]:
//!
//! ```
//! use rbencode::encode;
//! use std::collections::BTreeMap;
//!
//! let mut sub = BTreeMap::new();
//! sub.insert("subfield", vec!["one", "two"]);
//!
//! let encoded = encode(&sub).unwrap();
//! assert_eq!(encoded, b"d8:subfieldl3:one3:twoee");
//! ```
//!
//! # Error Handling
//!
//! - [`BencodeError::UnexpectedEof`] - Input ended inside a value
//! - [`BencodeError::InvalidFormat`] - Grammar or canonical form violated
//! - [`BencodeError::UnsupportedType`] - Value has no bencode form (e.g. `f64`)
//! - [`BencodeError::NestingTooDeep`] - Configured depth limit exceeded
//! - [`BencodeError::TrailingData`] - Extra data after the value
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod encode;
mod error;
mod options;
mod value;

pub use decode::{decode, decode_exact, decode_from, decode_str, Decoder};
pub use encode::{encode, encode_to, ToBencode};
pub use error::{BencodeError, ErrorKind};
pub use options::DecodeOptions;
pub use value::{Value, ValueKind};

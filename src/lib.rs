//! rbencode - strict, canonical bencode for Rust
//!
//! Bencode is the serialization format BitTorrent uses for `.torrent` files,
//! tracker responses and DHT messages. This crate decodes it from any
//! [`std::io::Read`] source into a closed [`Value`] tree, and encodes a
//! [`Value`] or plain Rust data back into canonical bytes.
//!
//! See [`bencode`] for the format overview and examples.

pub mod bencode;

pub use bencode::{
    decode, decode_exact, decode_from, decode_str, encode, encode_to, BencodeError,
    DecodeOptions, Decoder, ErrorKind, ToBencode, Value, ValueKind,
};

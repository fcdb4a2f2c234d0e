//! Encodes a small nested value, prints the bytes, and decodes them back.

use std::collections::HashMap;

use rbencode::{decode, encode, BencodeError, Value};

fn main() -> Result<(), BencodeError> {
    let mut sub = HashMap::new();
    sub.insert("subfield", vec!["one", "two"]);

    let value = Value::from_dict([
        ("names", Value::from_list([Value::string("rose"), Value::string("arun")])),
        ("num", Value::Integer(20)),
        ("sub", encode(&sub).and_then(|bytes| decode(&bytes))?),
    ]);

    let encoded = encode(&value)?;
    println!("encoded: {}", String::from_utf8_lossy(&encoded));

    let decoded = decode(&encoded)?;
    println!("decoded: {:?}", decoded);

    Ok(())
}

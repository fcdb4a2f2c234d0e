use std::collections::BTreeMap;

use bytes::Bytes;
use rbencode::{decode, decode_exact, decode_from, encode, ErrorKind, Value};

fn torrent_like() -> Value {
    let mut info = BTreeMap::new();
    info.insert(Bytes::from_static(b"name"), Value::string("example.txt"));
    info.insert(Bytes::from_static(b"length"), Value::Integer(1024));
    info.insert(Bytes::from_static(b"piece length"), Value::Integer(16384));
    info.insert(
        Bytes::from_static(b"pieces"),
        Value::from_bytes((0u8..=255).collect::<Vec<_>>()),
    );

    Value::from_dict([
        ("announce", Value::string("http://tracker.example.com/announce")),
        ("creation date", Value::Integer(-1)),
        ("info", Value::Dict(info)),
        (
            "url-list",
            Value::from_list([Value::string("http://a"), Value::List(vec![])]),
        ),
        ("", Value::Dict(BTreeMap::new())),
    ])
}

#[test]
fn roundtrip_preserves_structure() {
    let values = [
        Value::Integer(0),
        Value::Integer(i64::MIN),
        Value::Integer(i64::MAX),
        Value::string(""),
        Value::from_bytes(vec![0u8, b'e', b':', 0xff]),
        Value::List(vec![]),
        Value::Dict(BTreeMap::new()),
        torrent_like(),
    ];

    for value in values {
        let encoded = encode(&value).unwrap();
        assert_eq!(decode_exact(&encoded).unwrap(), value, "{:?}", value);
    }
}

#[test]
fn encoded_output_is_canonical() {
    let encoded = encode(&torrent_like()).unwrap();
    // Re-encoding the decoded value must give the same bytes.
    assert_eq!(encode(&decode(&encoded).unwrap()).unwrap(), encoded);
    assert!(encoded.starts_with(b"d0:de8:announce"));
}

#[test]
fn decode_from_reader_leaves_rest_of_stream() {
    let mut input: &[u8] = b"4:spamrest";
    let value = decode_from(&mut input).unwrap();

    assert_eq!(value, Value::string("spam"));
    // One byte of lookahead is never taken for a byte string.
    assert_eq!(input, b"rest");
}

#[test]
fn truncated_encodings_fail() {
    let encoded = encode(&torrent_like()).unwrap();
    for cut in 0..encoded.len() {
        let err = decode(&encoded[..cut]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof, "cut at {}", cut);
    }
}

use super::error::BencodeError;
use super::value::Value;
use bytes::Bytes;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::io::Write;

/// Conversion of a Rust value into a bencode [`Value`].
///
/// The conversion happens once, before any bytes are written, so the
/// encoder itself only ever walks a [`Value`]. A [`Value`] converts to a
/// borrowed `Cow` and is never copied.
///
/// `u8` is intentionally not implemented: raw byte strings are passed as
/// [`Bytes`] (or [`Value::from_bytes`]) so `[u8]` is never mistaken for a
/// list of integers.
///
/// Floating point numbers, `bool` and `char` have no bencode form; they
/// implement the trait only to report [`BencodeError::UnsupportedType`].
pub trait ToBencode {
    fn to_bencode(&self) -> Result<Cow<'_, Value>, BencodeError>;
}

/// Encodes a value into its canonical bencode bytes.
///
/// Dictionary keys are always written in ascending byte order.
///
/// # Errors
///
/// Returns [`BencodeError::UnsupportedType`] if `value`, or anything nested
/// in it, has no bencode representation.
///
/// # Examples
///
/// ```
/// use rbencode::{encode, BencodeError, Value};
/// use std::collections::HashMap;
///
/// assert_eq!(encode(&Value::Integer(-78)).unwrap(), b"i-78e");
/// assert_eq!(encode("rose").unwrap(), b"4:rose");
///
/// let mut dict = HashMap::new();
/// dict.insert("name", vec!["one"]);
/// assert_eq!(encode(&dict).unwrap(), b"d4:namel3:oneee");
///
/// assert!(matches!(encode(&78.9), Err(BencodeError::UnsupportedType(_))));
/// ```
pub fn encode<T: ToBencode + ?Sized>(value: &T) -> Result<Vec<u8>, BencodeError> {
    let mut buf = Vec::new();
    encode_to(value, &mut buf)?;
    Ok(buf)
}

/// Encodes a value into `writer`.
///
/// Nothing is written if the value cannot be converted.
pub fn encode_to<T, W>(value: &T, mut writer: W) -> Result<(), BencodeError>
where
    T: ToBencode + ?Sized,
    W: Write,
{
    let value = value.to_bencode()?;
    encode_value(&value, &mut writer)
}

fn encode_value<W: Write>(value: &Value, writer: &mut W) -> Result<(), BencodeError> {
    match value {
        Value::Integer(i) => {
            write!(writer, "i{}e", i)?;
        }
        Value::Bytes(b) => encode_bytes(b, writer)?,
        Value::List(l) => {
            writer.write_all(b"l")?;
            for item in l {
                encode_value(item, writer)?;
            }
            writer.write_all(b"e")?;
        }
        Value::Dict(d) => {
            writer.write_all(b"d")?;
            for (key, val) in d {
                encode_bytes(key, writer)?;
                encode_value(val, writer)?;
            }
            writer.write_all(b"e")?;
        }
    }
    Ok(())
}

fn encode_bytes<W: Write>(bytes: &[u8], writer: &mut W) -> Result<(), BencodeError> {
    write!(writer, "{}:", bytes.len())?;
    writer.write_all(bytes)?;
    Ok(())
}

fn owned(value: Value) -> Result<Cow<'static, Value>, BencodeError> {
    Ok(Cow::Owned(value))
}

impl ToBencode for Value {
    fn to_bencode(&self) -> Result<Cow<'_, Value>, BencodeError> {
        Ok(Cow::Borrowed(self))
    }
}

impl<T: ToBencode + ?Sized> ToBencode for &T {
    fn to_bencode(&self) -> Result<Cow<'_, Value>, BencodeError> {
        (**self).to_bencode()
    }
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl ToBencode for $t {
            fn to_bencode(&self) -> Result<Cow<'_, Value>, BencodeError> {
                owned(Value::Integer(*self as i64))
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl ToBencode for $t {
            fn to_bencode(&self) -> Result<Cow<'_, Value>, BencodeError> {
                let i = i64::try_from(*self)
                    .map_err(|_| BencodeError::UnsupportedType(concat!(stringify!($t), " above i64::MAX")))?;
                owned(Value::Integer(i))
            }
        }
    )*};
}

macro_rules! impl_unsupported {
    ($($t:ty),*) => {$(
        impl ToBencode for $t {
            fn to_bencode(&self) -> Result<Cow<'_, Value>, BencodeError> {
                Err(BencodeError::UnsupportedType(stringify!($t)))
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u16, u32, u64, usize);
impl_unsupported!(f32, f64, bool, char);

impl ToBencode for str {
    fn to_bencode(&self) -> Result<Cow<'_, Value>, BencodeError> {
        owned(Value::string(self))
    }
}

impl ToBencode for String {
    fn to_bencode(&self) -> Result<Cow<'_, Value>, BencodeError> {
        self.as_str().to_bencode()
    }
}

impl ToBencode for Bytes {
    fn to_bencode(&self) -> Result<Cow<'_, Value>, BencodeError> {
        owned(Value::Bytes(self.clone()))
    }
}

impl<T: ToBencode> ToBencode for [T] {
    fn to_bencode(&self) -> Result<Cow<'_, Value>, BencodeError> {
        let list = self
            .iter()
            .map(|item| item.to_bencode().map(Cow::into_owned))
            .collect::<Result<Vec<_>, _>>()?;
        owned(Value::List(list))
    }
}

impl<T: ToBencode> ToBencode for Vec<T> {
    fn to_bencode(&self) -> Result<Cow<'_, Value>, BencodeError> {
        self.as_slice().to_bencode()
    }
}

fn dict_from<'a, K, V, I>(entries: I) -> Result<Cow<'static, Value>, BencodeError>
where
    K: AsRef<[u8]> + 'a,
    V: ToBencode + 'a,
    I: Iterator<Item = (&'a K, &'a V)>,
{
    let mut dict = BTreeMap::new();
    for (key, value) in entries {
        dict.insert(
            Bytes::copy_from_slice(key.as_ref()),
            value.to_bencode()?.into_owned(),
        );
    }
    owned(Value::Dict(dict))
}

impl<K: AsRef<[u8]>, V: ToBencode> ToBencode for BTreeMap<K, V> {
    fn to_bencode(&self) -> Result<Cow<'_, Value>, BencodeError> {
        dict_from(self.iter())
    }
}

impl<K: AsRef<[u8]>, V: ToBencode, S> ToBencode for HashMap<K, V, S> {
    fn to_bencode(&self) -> Result<Cow<'_, Value>, BencodeError> {
        dict_from(self.iter())
    }
}

use std::str::FromStr;
use std::str::Utf8Error;

use thiserror::Error;

/// Consumes the slice until a non-ascii whitespace character is reached.
pub fn take_ws(bytes: &[u8]) -> &[u8] {
    let i = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());

    &bytes[i..]
}

/// Returns the next character of the slice without consuming it
pub fn peek_1(bytes: &[u8]) -> Option<u8> {
    let [b, _bytes @ ..] = bytes else { return None };

    Some(*b)
}

/// Advance the slice until `P` is satisfied, without consuming the byte that satisfied it. If `P`
/// is never satisfied, the whole slice is taken.
///
/// Returns `None` when nothing was taken.
#[inline]
pub fn take_until_fn<P>(p: P, bytes: &[u8]) -> (Option<&[u8]>, &[u8])
where
    P: Fn(u8) -> bool,
{
    let i = bytes.iter().position(|&a| p(a)).unwrap_or(bytes.len());

    if i == 0 {
        (None, bytes)
    } else {
        let (res, bytes) = bytes.split_at(i);

        (Some(res), bytes)
    }
}

/// Like `take_until_fn`, but stops at the first ascii whitespace character found, without
/// consuming it.
pub fn take_until_ws(bytes: &[u8]) -> (Option<&[u8]>, &[u8]) {
    take_until_fn(|a| a.is_ascii_whitespace(), bytes)
}

/// Skips whitespace, then takes the next whitespace delimited token.
pub fn take_token(bytes: &[u8]) -> (Option<&[u8]>, &[u8]) {
    take_until_ws(take_ws(bytes))
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Error parsing bytes from UTF-8: {0}")]
    InvalidUTF8(#[from] Utf8Error),

    #[error("Failed to convert \"{str}\"")]
    ParseError { str: String },
}

/// Converts `&[u8]` to `T` if `T: FromStr`.
pub fn convert<T: FromStr>(bytes: &[u8]) -> Result<T, ConvertError> {
    let str = std::str::from_utf8(bytes)?;

    let Ok(res) = str.parse::<T>() else {
        return Err(ConvertError::ParseError {
            str: str.to_string(),
        });
    };

    Ok(res)
}

//! Bijective conversion between identifiers and short codes.
//!
//! [`encode_number`] and [`decode_number`] implement positional base-`b`
//! conversion over an [`Alphabet`]. [`ShortCodec`] layers the optional
//! salt-derived decimal prefix on top, so consecutive identifiers do not
//! produce visibly consecutive codes.

use crate::utils::alphabet::Alphabet;
use crate::utils::seed::seed_digits;

/// Errors produced when turning a short code back into an identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("Character '{0}' is not part of the configured alphabet")]
    InvalidCharacter(char),

    #[error("Code does not decode to a valid identifier")]
    MalformedCode,
}

/// Encodes a non-negative integer as the shortest base-`b` string over
/// `alphabet`.
///
/// Values below the base map to the single character at that position,
/// which is what makes the mapping a bijection: no multi-character code
/// starts with the zeroth character.
pub fn encode_number(n: u128, alphabet: &Alphabet) -> String {
    let b = alphabet.base() as u128;

    if n < b {
        return alphabet.char_at(n as usize).to_string();
    }

    let mut n = n;
    let mut m = n % b;
    let mut code = String::new();

    while m > 0 || n > 0 {
        code.insert(0, alphabet.char_at(m as usize));
        n = (n - m) / b;
        m = n % b;
    }

    code
}

/// Decodes a base-`b` string back into an integer.
///
/// This inverts [`encode_number`] for every string that function produces.
/// Arbitrary strings also decode to a well-defined value, but that value
/// is untrusted input: callers must validate it against the store.
///
/// # Errors
///
/// [`CodecError::InvalidCharacter`] when a character is not in the
/// alphabet; [`CodecError::MalformedCode`] when the accumulated value
/// exceeds the supported integer range.
pub fn decode_number(code: &str, alphabet: &Alphabet) -> Result<u128, CodecError> {
    let b = alphabet.base() as u128;
    let mut n: u128 = 0;

    for c in code.chars() {
        let position = alphabet
            .position(c)
            .ok_or(CodecError::InvalidCharacter(c))?;

        n = n
            .checked_mul(b)
            .and_then(|n| n.checked_add(position as u128))
            .ok_or(CodecError::MalformedCode)?;
    }

    Ok(n)
}

/// Immutable codec configuration, shared read-only across requests.
///
/// With an empty salt or zero padding, identifiers encode directly. With
/// salting enabled, the seed digits are prepended to the decimal form of
/// the identifier before encoding. Prefixing is string concatenation, not
/// addition: the decode side recovers the identifier by slicing off a
/// fixed number of leading digits, independent of the seed value.
#[derive(Debug, Clone)]
pub struct ShortCodec {
    alphabet: Alphabet,
    salt: String,
    padding: u32,
}

impl ShortCodec {
    pub fn new(alphabet: Alphabet, salt: impl Into<String>, padding: u32) -> Self {
        Self {
            alphabet,
            salt: salt.into(),
            padding,
        }
    }

    fn salting_enabled(&self) -> bool {
        !self.salt.is_empty() && self.padding > 0
    }

    /// Renders a store identifier as a short code.
    pub fn encode_id(&self, id: u64) -> String {
        if self.salting_enabled() {
            let digits = seed_digits(id, &self.salt, self.padding);

            // Up to 16 seed digits plus 20 identifier digits stays within
            // the 38 decimal digits a u128 can hold.
            let composite: u128 = format!("{digits}{id}")
                .parse()
                .expect("seed digits and id form a decimal number");

            encode_number(composite, &self.alphabet)
        } else {
            encode_number(u128::from(id), &self.alphabet)
        }
    }

    /// Recovers a store identifier from a short code.
    ///
    /// # Errors
    ///
    /// [`CodecError::InvalidCharacter`] for characters outside the
    /// alphabet. [`CodecError::MalformedCode`] when, after removing the
    /// seed prefix, no digits remain or the remainder does not fit an
    /// identifier.
    pub fn decode_code(&self, code: &str) -> Result<u64, CodecError> {
        let raw = decode_number(code, &self.alphabet)?;

        if self.salting_enabled() {
            let digits = raw.to_string();
            let id = digits
                .get(self.padding as usize..)
                .filter(|rest| !rest.is_empty())
                .ok_or(CodecError::MalformedCode)?;

            id.parse().map_err(|_| CodecError::MalformedCode)
        } else {
            u64::try_from(raw).map_err(|_| CodecError::MalformedCode)
        }
    }
}

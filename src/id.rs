use std::{fmt, str};

use fstr::FStr;

use crate::{hex, LengthError, ParseError};

/// Represents a Universally Unique IDentifier.
///
/// Equality, ordering, and hashing are defined over all 16 bytes, so two values with identical
/// bytes are interchangeable, including as keys of maps and sets.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

/// Letter case of the hexadecimal digits in the 8-4-4-4-12 representation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Case {
    /// `0123456789abcdef`
    #[default]
    Lower,

    /// `0123456789ABCDEF`
    Upper,
}

/// The variant field of a UUID, read from the most significant bits of byte 8.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// `0xxx`: reserved for NCS backward compatibility.
    Var0,

    /// `10xx`: the RFC 4122 layout.
    Var10,

    /// `110x`: reserved for Microsoft backward compatibility.
    Var110,

    /// `111x`: reserved for future definition.
    Var111,
}

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates a UUIDv4 from arbitrary bytes, overwriting the version nibble with `0100` and the
    /// two most significant bits of byte 8 with `10` while keeping the other bits.
    pub const fn coerce_v4(mut bytes: [u8; 16]) -> Self {
        bytes[6] = 0x40 | (bytes[6] & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Self(bytes)
    }

    /// Creates a UUIDv4 from a 16-byte slice, coercing the version and variant bits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4::Uuid;
    ///
    /// let bytes = [
    ///     0x10, 0x91, 0x56, 0xbe, 0xc4, 0xfb, 0xc1, 0xea, 0x71, 0xb4, 0xef, 0xe1, 0x67, 0x1c, 0x58,
    ///     0x36,
    /// ];
    /// let uuid = Uuid::from_slice(&bytes)?;
    /// assert_eq!(uuid.to_string(), "109156be-c4fb-41ea-b1b4-efe1671c5836");
    /// assert!(Uuid::from_slice(&bytes[..15]).is_err());
    /// # Ok::<(), uuid4::LengthError>(())
    /// ```
    pub fn from_slice(src: &[u8]) -> Result<Self, LengthError> {
        Self::from_slice_raw(src).map(|e| Self::coerce_v4(e.0))
    }

    /// Creates a UUID from a 16-byte slice as is, without touching the version and variant bits.
    ///
    /// The result may fail [`Uuid::is_valid`].
    pub fn from_slice_raw(src: &[u8]) -> Result<Self, LengthError> {
        <[u8; 16]>::try_from(src)
            .map(Self)
            .map_err(|_| LengthError { len: src.len() })
    }

    /// Parses the 8-4-4-4-12 hexadecimal string representation, accepting both letter cases.
    ///
    /// This is the same as [`str::parse`], except that a rejected input is reported to the `log`
    /// facade at the debug level.
    pub fn try_parse(src: &str) -> Result<Self, ParseError> {
        hex::decode(src).map(Self).map_err(|err| {
            log::debug!("rejected UUID string {:?}: {}", src, err);
            err
        })
    }

    /// Parses an optional string, treating `None` as [`ParseError::Missing`].
    pub fn parse_opt(src: Option<&str>) -> Result<Self, ParseError> {
        match src {
            Some(src) => Self::try_parse(src),
            None => {
                log::debug!("rejected missing UUID string");
                Err(ParseError::Missing)
            }
        }
    }

    /// Parses a string, returning `default` if it is invalid.
    pub fn parse_or(src: &str, default: Self) -> Self {
        Self::try_parse(src).unwrap_or(default)
    }

    /// Parses a string, handing the offending string and the error to `recover` if it is invalid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4::Uuid;
    ///
    /// let mut rejected = Vec::new();
    /// let uuid = Uuid::parse_or_else("not-a-uuid", |src, _| {
    ///     rejected.push(src.to_owned());
    ///     Uuid::NIL
    /// });
    /// assert_eq!(uuid, Uuid::NIL);
    /// assert_eq!(rejected, ["not-a-uuid"]);
    /// ```
    pub fn parse_or_else<F>(src: &str, recover: F) -> Self
    where
        F: FnOnce(&str, ParseError) -> Self,
    {
        Self::try_parse(src).unwrap_or_else(|err| recover(src, err))
    }

    /// Tests if `src` is a well-formed 8-4-4-4-12 string without creating a UUID.
    ///
    /// If `version` is given, the version digit must also equal it, and for versions 3 and 4 the
    /// variant digit must be one of `8`, `9`, `a`, or `b` (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4::Uuid;
    ///
    /// assert!(Uuid::is_valid_str("2ca4b2ce-6c13-40d4-bccf-37d222820f6f", Some(4)));
    /// assert!(!Uuid::is_valid_str("2ca4b2ce-6c13-70d4-bccf-37d222820f6f", Some(4)));
    /// assert!(!Uuid::is_valid_str("foo", None));
    /// ```
    pub fn is_valid_str(src: &str, version: Option<u8>) -> bool {
        hex::is_valid_str(src, version)
    }

    /// Tests if the version nibble reads `0100` and the variant bits read `10`.
    pub const fn is_valid(&self) -> bool {
        self.0[6] >> 4 == 4 && self.0[8] >> 6 == 0b10
    }

    /// Reports the variant field value of the UUID.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 4 {
            0x0..=0x7 => Variant::Var0,
            0x8..=0xb => Variant::Var10,
            0xc | 0xd => Variant::Var110,
            _ => Variant::Var111,
        }
    }

    /// Returns the version field value of the UUID or `None` if the UUID does not have the
    /// variant field value of `10`.
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation in the specified letter case,
    /// stored in a stack-allocated string that can be dereferenced as `str` and
    /// [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4::{Case, Uuid};
    ///
    /// let x = "97A90793-4898-4ABE-b255-E8DC6967ED40".parse::<Uuid>()?;
    /// assert_eq!(&x.encode(Case::Lower) as &str, "97a90793-4898-4abe-b255-e8dc6967ed40");
    /// assert_eq!(&x.encode(Case::Upper) as &str, "97A90793-4898-4ABE-B255-E8DC6967ED40");
    /// # Ok::<(), uuid4::ParseError>(())
    /// ```
    pub fn encode(&self, case: Case) -> FStr<36> {
        let table = match case {
            Case::Lower => &hex::LOWER,
            Case::Upper => &hex::UPPER,
        };

        let mut buffer = [b'-'; 36];
        for (e, &pos) in self.0.iter().zip(hex::DIGIT_POSITIONS.iter()) {
            buffer[pos..pos + 2].copy_from_slice(&table[*e as usize]);
        }
        debug_assert!(buffer.is_ascii());
        unsafe { FStr::from_bytes_unchecked(buffer) }
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode(Case::Lower))
    }
}

impl fmt::LowerHex for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode(Case::Lower))
    }
}

impl fmt::UpperHex for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode(Case::Upper))
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::try_parse(src)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = LengthError;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice_raw(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Case, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode(Case::Lower))
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Uuid::try_parse(value).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Uuid::from_slice_raw(value).map_err(de::Error::custom)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::{Case, Uuid, Variant};
    use crate::ParseError;

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [([u8; 16], &'static str)] {
        &[
            (
                [
                    0x10, 0x91, 0x56, 0xbe, 0xc4, 0xfb, 0x41, 0xea, 0xb1, 0xb4, 0xef, 0xe1, 0x67,
                    0x1c, 0x58, 0x36,
                ],
                "109156be-c4fb-41ea-b1b4-efe1671c5836",
            ),
            (
                [
                    0x97, 0xa9, 0x07, 0x93, 0x48, 0x98, 0x4a, 0xbe, 0xb2, 0x55, 0xe8, 0xdc, 0x69,
                    0x67, 0xed, 0x40,
                ],
                "97a90793-4898-4abe-b255-e8dc6967ed40",
            ),
            (
                [
                    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0x00, 0x80, 0x00, 0x00, 0x00, 0x00,
                    0x00, 0x00, 0x00,
                ],
                "00000000-0000-4000-8000-000000000000",
            ),
            (
                [
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x4f, 0xff, 0xbf, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff,
                ],
                "ffffffff-ffff-4fff-bfff-ffffffffffff",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for (bytes, text) in prepare_cases() {
            let from_bytes = Uuid::from(*bytes);
            assert!(from_bytes.is_valid());
            assert_eq!(Ok(from_bytes), text.parse());
            assert_eq!(Ok(from_bytes), text.to_uppercase().parse());
            assert_eq!(&from_bytes.encode(Case::Lower) as &str, *text);
            assert_eq!(&from_bytes.encode(Case::Upper) as &str, text.to_uppercase());
            assert_eq!(&from_bytes.to_string(), text);
            assert_eq!(format!("{:x}", from_bytes), *text);
            assert_eq!(format!("{:X}", from_bytes), text.to_uppercase());
            #[cfg(feature = "uuid")]
            assert_eq!(&uuid::Uuid::from(from_bytes).to_string(), text);
        }
    }

    /// Coerces version and variant bits of arbitrary bytes
    #[test]
    fn coerces_version_and_variant_bits_of_arbitrary_bytes() {
        let bytes = [
            0x10, 0x91, 0x56, 0xbe, 0xc4, 0xfb, 0xc1, 0xea, 0x71, 0xb4, 0xef, 0xe1, 0x67, 0x1c,
            0x58, 0x36,
        ];

        let coerced = Uuid::from_slice(&bytes).unwrap();
        assert_eq!(coerced.to_string(), "109156be-c4fb-41ea-b1b4-efe1671c5836");
        assert!(coerced.is_valid());
        assert_eq!(coerced, Uuid::coerce_v4(bytes));

        let raw = Uuid::from_slice_raw(&bytes).unwrap();
        assert_eq!(raw.to_string(), "109156be-c4fb-c1ea-71b4-efe1671c5836");
        assert!(!raw.is_valid());
        assert_eq!(raw.variant(), Variant::Var0);
        assert_eq!(raw.version(), None);

        assert!(Uuid::coerce_v4([0x00; 16]).is_valid());
        assert!(Uuid::coerce_v4([0xff; 16]).is_valid());
    }

    /// Returns error to slices of wrong length
    #[test]
    fn returns_error_to_slices_of_wrong_length() {
        for len in [0, 1, 15, 17, 32] {
            let bytes = vec![0x42u8; len];
            assert_eq!(Uuid::from_slice(&bytes).unwrap_err().len, len);
            assert_eq!(Uuid::from_slice_raw(&bytes).unwrap_err().len, len);
            assert!(Uuid::try_from(&bytes[..]).is_err());
        }
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let cases = [
            "",
            "foo",
            " 109156be-c4fb-41ea-b1b4-efe1671c5836",
            "109156be-c4fb-41ea-b1b4-efe1671c5836 ",
            " 109156be-c4fb-41ea-b1b4-efe1671c583 ",
            "+109156be-c4fb-41ea-b1b4-efe1671c583",
            "-109156be-c4fb-41ea-b1b4-efe1671c583",
            "+09156be-c4fb-41ea-b1b4-efe1671c5836",
            "109156bec4fb41eab1b4efe1671c5836",
            "109156be-c4fb41ea-b1b4-efe1671c58360",
            "{109156be-c4fb-41ea-b1b4-efe1671c58}",
            "109156be-c4fb-41 a-b1b4-efe1671c5836",
            "109156ge-c4fb-41ea-b1b4-efe1671c5836",
            "109156be-c4fb-41ea-b1b4_efe1671c5836",
            "109156be-c4fb-41ea-b1b4-efe1671c583g",
            "109156be-c4fb-41ea-b1b4-efe1671c58３",
        ];

        for e in cases {
            assert!(e.parse::<Uuid>().is_err(), "{:?}", e);
            assert!(!Uuid::is_valid_str(e, None), "{:?}", e);
        }
    }

    /// Parses case-insensitively
    #[test]
    fn parses_case_insensitively() {
        let upper = "97A90793-4898-4ABE-b255-E8DC6967ED40".parse::<Uuid>();
        let lower = "97a90793-4898-4abe-b255-e8dc6967ed40".parse::<Uuid>();
        assert!(upper.is_ok());
        assert_eq!(upper, lower);
    }

    /// Falls back to caller-supplied values on error
    #[test]
    fn falls_back_to_caller_supplied_values_on_error() {
        let valid = "97a90793-4898-4abe-b255-e8dc6967ed40";
        let expected: Uuid = valid.parse().unwrap();

        assert_eq!(Uuid::parse_or(valid, Uuid::MAX), expected);
        assert_eq!(Uuid::parse_or("97a90793", Uuid::MAX), Uuid::MAX);

        let mut calls = Vec::new();
        let recovered = Uuid::parse_or_else("97a90793-4898-4abe-b255-e8dc6967ed4x", |src, err| {
            calls.push((src.to_owned(), err));
            Uuid::NIL
        });
        assert_eq!(recovered, Uuid::NIL);
        assert_eq!(
            calls,
            [(
                "97a90793-4898-4abe-b255-e8dc6967ed4x".to_owned(),
                ParseError::InvalidDigit {
                    index: 35,
                    found: 'x'
                }
            )]
        );

        let untouched = Uuid::parse_or_else(valid, |_, _| unreachable!());
        assert_eq!(untouched, expected);
    }

    /// Treats absent string as parse error
    #[test]
    fn treats_absent_string_as_parse_error() {
        assert_eq!(Uuid::parse_opt(None), Err(ParseError::Missing));
        assert_eq!(
            Uuid::parse_opt(Some("00000000-0000-4000-8000-000000000000")),
            Ok(Uuid::coerce_v4([0; 16]))
        );
    }

    /// Validates version and variant bits
    #[test]
    fn validates_version_and_variant_bits() {
        assert!(!Uuid::NIL.is_valid());
        assert!(!Uuid::MAX.is_valid());
        assert_eq!(Uuid::NIL.variant(), Variant::Var0);
        assert_eq!(Uuid::MAX.variant(), Variant::Var111);

        let cases = [
            ("2ca4b2ce-6c13-40d4-bccf-37d222820f6f", true),
            ("2ca4b2ce-6c13-40d4-8ccf-37d222820f6f", true),
            ("2ca4b2ce-6c13-70d4-bccf-37d222820f6f", false),
            ("2ca4b2ce-6c13-30d4-bccf-37d222820f6f", false),
            ("2ca4b2ce-6c13-40d4-cccf-37d222820f6f", false),
            ("2ca4b2ce-6c13-40d4-7ccf-37d222820f6f", false),
        ];
        for (text, expected) in cases {
            let e: Uuid = text.parse().unwrap();
            assert_eq!(e.is_valid(), expected, "{}", text);
            assert_eq!(Uuid::is_valid_str(text, Some(4)), expected, "{}", text);
        }

        let v7: Uuid = "017f22e2-79b0-7cc3-98c4-dc0c0c07398f".parse().unwrap();
        assert_eq!(v7.version(), Some(7));
        assert_eq!(v7.variant(), Variant::Var10);
    }

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(
            &Uuid::NIL.encode(Case::Lower) as &str,
            "00000000-0000-0000-0000-000000000000"
        );

        assert_eq!(
            &Uuid::MAX.encode(Case::Upper) as &str,
            "FFFFFFFF-FFFF-FFFF-FFFF-FFFFFFFFFFFF"
        );
    }

    /// Serves as hash key by byte content
    #[test]
    fn serves_as_hash_key_by_byte_content() {
        use std::collections::HashSet;

        let text = "97a90793-4898-4abe-b255-e8dc6967ed40";
        let e: Uuid = text.parse().unwrap();
        let mut s = HashSet::new();
        s.insert(e);
        s.insert(text.to_uppercase().parse::<Uuid>().unwrap());
        s.insert(Uuid::from_slice(e.as_bytes()).unwrap());
        assert_eq!(s.len(), 1);
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (bytes, _) in prepare_cases() {
            let e = Uuid::from(*bytes);
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(Uuid::from_slice(e.as_ref()), Ok(e));
            assert_eq!(e.encode(Case::Lower).parse(), Ok(e));
            assert_eq!(e.encode(Case::Upper).parse(), Ok(e));
            assert_eq!(Uuid::try_from(String::from(e)), Ok(e));
            assert_eq!(Uuid::try_from(e.to_string().to_uppercase()), Ok(e));
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_u128(), u128::from(e));
        }
    }
}

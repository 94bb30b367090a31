//! Generator selection and formatting options.

use std::{fmt, str};

use crate::{Case, ModeError};

/// Selects the random number generator a codec draws from.
///
/// The string form is `secure`, `pseudo`, or `seeded:<u64>`.
///
/// # Examples
///
/// ```rust
/// use uuid4::RngMode;
///
/// assert_eq!("seeded:42".parse::<RngMode>()?, RngMode::Seeded(42));
/// assert_eq!(RngMode::Seeded(42).to_string(), "seeded:42");
/// # Ok::<(), uuid4::ModeError>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum RngMode {
    /// Cryptographically strong generator reseeded from the OS.
    #[default]
    Secure,

    /// Fast, non-secure generator seeded from the OS.
    Pseudo,

    /// Fast, non-secure generator that produces the same sequence for the same seed.
    Seeded(u64),
}

impl fmt::Display for RngMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Secure => f.write_str("secure"),
            Self::Pseudo => f.write_str("pseudo"),
            Self::Seeded(seed) => write!(f, "seeded:{}", seed),
        }
    }
}

impl str::FromStr for RngMode {
    type Err = ModeError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        match src {
            "secure" => Ok(Self::Secure),
            "pseudo" => Ok(Self::Pseudo),
            _ => src
                .strip_prefix("seeded:")
                .and_then(|seed| seed.parse().ok())
                .map(Self::Seeded)
                .ok_or_else(|| ModeError(src.to_owned())),
        }
    }
}

/// Configuration of a [`Codec`](crate::Codec).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Config {
    /// Random number generator to draw from.
    pub mode: RngMode,

    /// Formats with uppercase hexadecimal digits if true.
    pub uppercase: bool,
}

impl Config {
    /// Secure generator, lowercase output. This is the default.
    pub const SECURE: Self = Self {
        mode: RngMode::Secure,
        uppercase: false,
    };

    /// Fast, non-secure generator, lowercase output.
    pub const FAST: Self = Self {
        mode: RngMode::Pseudo,
        uppercase: false,
    };

    /// Generator seeded with zero for reproducible fixtures, lowercase output.
    pub const FIXTURE: Self = Self {
        mode: RngMode::Seeded(0),
        uppercase: false,
    };

    /// Returns a copy with the random number generator replaced.
    pub const fn with_mode(self, mode: RngMode) -> Self {
        Self { mode, ..self }
    }

    /// Returns a copy with the uppercase flag replaced.
    pub const fn with_uppercase(self, uppercase: bool) -> Self {
        Self { uppercase, ..self }
    }

    /// Returns the letter case the configuration selects.
    pub const fn case(&self) -> Case {
        if self.uppercase {
            Case::Upper
        } else {
            Case::Lower
        }
    }
}

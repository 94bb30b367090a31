//! An implementation of RFC 4122 UUID version 4 with pluggable random sources
//!
//! ```rust
//! use uuid4::uuid4;
//!
//! let uuid = uuid4();
//! println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte array
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! This implementation produces identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            random                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |            random             |  ver  |        random         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                         random                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            random                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where the 4-bit `ver` field is set at `0100`, the 2-bit `var` field is set at `10`, and the
//! remaining 122 bits are drawn from the random number generator.
//!
//! # Random number generators
//!
//! [`RngMode`] selects the generator behind a [`Codec`] or a [`V4Generator`]:
//!
//! | Mode              | Generator                           | Secure | Reproducible |
//! | ----------------- | ----------------------------------- | ------ | ------------ |
//! | `Secure`          | ChaCha12 reseeded from the OS       | Yes    | No           |
//! | `Pseudo`          | `SmallRng` seeded from the OS       | No     | No           |
//! | `Seeded(seed)`    | ChaCha8 seeded with `seed`          | No     | Yes          |
//!
//! ```rust
//! use uuid4::{Codec, Config, RngMode};
//!
//! let mut a = Codec::new(Config::SECURE.with_mode(RngMode::Seeded(42)));
//! let mut b = Codec::new(Config::SECURE.with_mode(RngMode::Seeded(42)));
//! assert_eq!(a.generate(), b.generate());
//! ```
//!
//! # Crate features
//!
//! - `global_gen` (default): enables [`uuid4()`] and the other functions backed by the
//!   process-wide codec.
//! - `serde`: enables serialization of [`Uuid`] and [`Config`].
//! - `uuid`: enables conversion from and into `uuid::Uuid`.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod codec;
pub use codec::Codec;

mod config;
pub use config::{Config, RngMode};

mod error;
pub use error::{Error, InitError, LengthError, ModeError, ParseError};

mod hex;

mod id;
pub use id::{Case, Uuid, Variant};

pub mod generator;
#[doc(inline)]
pub use generator::V4Generator;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{config, format, init, uuid4};

//! A configurable UUIDv4 codec.

use fstr::FStr;

use crate::{generator::with_mode::ModeRng, Config, ParseError, Uuid, V4Generator};

/// Owns a [`Config`] and the generator it selects, and formats UUIDs in the configured case.
///
/// Each codec carries its own generator state, so independent codecs never interfere with each
/// other. Wrap a codec in a lock to share it across threads.
///
/// # Examples
///
/// ```rust
/// use uuid4::{Codec, Config};
///
/// let mut codec = Codec::new(Config::FIXTURE.with_uppercase(true));
/// let uuid = codec.generate();
/// assert_eq!(codec.format(&uuid), "A79A3B6C-B585-4F67-AED8-C0377746A55F");
/// assert_eq!(codec.parse(&codec.format(&uuid)), Ok(uuid));
/// ```
#[derive(Clone, Debug)]
pub struct Codec {
    config: Config,
    generator: V4Generator<ModeRng>,
}

impl Codec {
    /// Creates a codec with the generator `config` selects.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            generator: V4Generator::with_mode(config.mode),
        }
    }

    /// Returns the configuration of the codec.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Generates a new UUIDv4 object.
    pub fn generate(&mut self) -> Uuid {
        self.generator.generate()
    }

    /// Returns the 8-4-4-4-12 representation of `uuid` in the configured case on the stack.
    pub fn encode(&self, uuid: &Uuid) -> FStr<36> {
        uuid.encode(self.config.case())
    }

    /// Returns the 8-4-4-4-12 representation of `uuid` in the configured case.
    pub fn format(&self, uuid: &Uuid) -> String {
        self.encode(uuid).to_string()
    }

    /// Parses the 8-4-4-4-12 representation in either case.
    pub fn parse(&self, src: &str) -> Result<Uuid, ParseError> {
        Uuid::try_parse(src)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

//! Default codec and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::{Config, InitError, Uuid};
use inner::GlobalCodec;

static G: sync::OnceLock<GlobalCodec> = sync::OnceLock::new();

/// Returns the process-wide global codec, creating one with the default configuration if none
/// exists.
fn global_codec() -> &'static GlobalCodec {
    G.get_or_init(|| GlobalCodec::new(Config::default()))
}

/// Initializes the process-wide global codec with `config`.
///
/// The global codec is otherwise created with [`Config::default()`] on first use. Call this once
/// at startup before any other thread generates or formats UUIDs through the functions of this
/// module.
///
/// # Errors
///
/// Returns [`InitError::AlreadyInitialized`] if the global codec already exists, in which case the
/// existing configuration is kept.
///
/// # Examples
///
/// ```rust
/// use uuid4::Config;
///
/// uuid4::init(Config::FIXTURE.with_uppercase(true))?;
/// assert_eq!(uuid4::format(&uuid4::uuid4()), "A79A3B6C-B585-4F67-AED8-C0377746A55F");
/// assert!(uuid4::init(Config::SECURE).is_err());
/// # Ok::<(), uuid4::InitError>(())
/// ```
pub fn init(config: Config) -> Result<(), InitError> {
    let mut created = false;
    let codec = G.get_or_init(|| {
        created = true;
        GlobalCodec::new(config)
    });
    if created {
        log::debug!("initialized global UUID codec with {:?}", config);
        Ok(())
    } else {
        log::warn!(
            "ignored configuration {:?}; global UUID codec already initialized with {:?}",
            config,
            codec.config()
        );
        Err(InitError::AlreadyInitialized)
    }
}

/// Returns the configuration of the process-wide global codec, creating the codec if needed.
pub fn config() -> Config {
    *global_codec().config()
}

/// Generates a UUIDv4 object.
///
/// This function employs the process-wide global codec. On Unix, unless the codec is seeded, this
/// function resets the generator when the process ID changes (i.e., upon process forks) to
/// prevent collisions across processes.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid4::uuid4();
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte array
///
/// let uuid_string: String = uuid4::uuid4().to_string();
/// ```
pub fn uuid4() -> Uuid {
    global_codec().generate()
}

/// Returns the 8-4-4-4-12 representation of `uuid` in the case the global codec is configured
/// with.
pub fn format(uuid: &Uuid) -> String {
    global_codec().format(uuid)
}

mod inner {
    use std::sync;

    use crate::{Codec, Config, Uuid};

    /// A thin wrapper to share a [`Codec`] across threads and to reset the state when the process
    /// ID changes (i.e., upon Unix forks).
    #[derive(Debug)]
    pub struct GlobalCodec {
        config: Config,
        state: sync::Mutex<State>,
    }

    #[derive(Debug)]
    struct State {
        #[cfg(unix)]
        pid: u32,
        codec: Codec,
    }

    impl State {
        fn new(config: Config) -> Self {
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                codec: Codec::new(config),
            }
        }
    }

    impl GlobalCodec {
        pub fn new(config: Config) -> Self {
            Self {
                config,
                state: sync::Mutex::new(State::new(config)),
            }
        }

        pub const fn config(&self) -> &Config {
            &self.config
        }

        /// Generates a UUID, recreating the generator on Unix if the process ID has changed and
        /// the generator is not seeded.
        pub fn generate(&self) -> Uuid {
            let mut state = self
                .state
                .lock()
                .expect("uuid4: could not lock global codec");
            #[cfg(unix)]
            if state.pid != std::process::id()
                && !matches!(self.config.mode, crate::RngMode::Seeded(_))
            {
                log::debug!("process ID changed; recreating global UUID generator");
                *state = State::new(self.config);
            }
            state.codec.generate()
        }

        pub fn format(&self, uuid: &Uuid) -> String {
            uuid.encode(self.config.case()).to_string()
        }
    }
}

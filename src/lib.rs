//! Sealconf - layered configuration with encrypted values.
//!
//! Fills a typed configuration struct from three layers, each overriding the
//! one before it:
//!
//! 1. defaults compiled into the struct declaration,
//! 2. the first usable configuration file from an ordered list,
//! 3. environment variables.
//!
//! Any value may be sealed with AES-128-GCM so that neither the binary nor
//! the deployment files carry it in plaintext. Values written as `(text)` are
//! taken literally.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # `sealconf` helper binary
//! │   ├── encrypt       # Seal a value into a token
//! │   ├── decrypt       # Open a token
//! │   ├── keygen        # Generate a key
//! │   └── completions   # Shell completions
//! └── core/             # Resolution engine
//!     ├── cipher/       # Token format and AES-GCM backend
//!     ├── env           # Environment sources
//!     ├── key           # Key type and KEY<program> lookup
//!     ├── record        # Field descriptors and typed binding
//!     └── resolver      # Defaults → file → environment
//! ```
//!
//! # Example
//!
//! ```no_run
//! sealconf::record! {
//!     #[derive(Debug, Default)]
//!     pub struct Config {
//!         #[tags(default = "(8080)", file_key = "port", env_name = "APP_PORT")]
//!         pub port: i64,
//!         #[tags(file_key = "db.password", env_name = "APP_DB_PASSWORD")]
//!         pub db_password: String,
//!     }
//! }
//!
//! let mut config = Config::default();
//! sealconf::parse_files(&mut config, ["/etc/app.conf", "app.conf"])?;
//! # Ok::<(), sealconf::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::cipher::{decrypt, encrypt, AesGcm, Cipher, Token};
pub use crate::core::env::{EnvSource, MockEnv, StdEnv};
pub use crate::core::key::{
    generate_key, program_name, sanitize_program_name, Key, KeyProvider, KeyResolver,
};
pub use crate::core::record::{
    fields, set_field, set_field_by_tag, FieldDescriptor, FieldKind, FieldSlot, Reflect, Scalar,
    Shape,
};
pub use crate::core::resolver::{
    parse_file_layer, parse_files, parse_readers, set_defaults, set_from_env, Resolver, Source,
};
pub use crate::error::{Error, ErrorKind, Result};

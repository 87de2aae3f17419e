//! Layered configuration resolution.
//!
//! A record is filled in three phases, each overriding the previous:
//!
//! 1. **defaults** from each field's `default` tag;
//! 2. **file layer** from the first usable reader, matching keys against the
//!    `file_key` tag;
//! 3. **environment** from the variable named by each field's `env_name` tag.
//!
//! Every value passes through [`cipher::decrypt`], so it may be a sealed token
//! or a `(literal)`. The first error aborts resolution; fields bound before
//! it keep their new values.
//!
//! ```text
//! # app.conf
//! db.host = (db.internal)
//! db.password = <token printed by `sealconf encrypt`>
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::core::cipher;
use crate::core::constants::{TAG_DEFAULT, TAG_ENV_NAME, TAG_FILE_KEY};
use crate::core::env::{EnvSource, StdEnv};
use crate::core::key::{Key, KeyProvider, KeyResolver};
use crate::core::record::{self, Reflect};
use crate::error::{Error, Result};

/// Where a value comes from; selects the tag that identifies a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Default,
    File,
    Env,
}

impl Source {
    /// Tag key consulted for this source.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Default => TAG_DEFAULT,
            Self::File => TAG_FILE_KEY,
            Self::Env => TAG_ENV_NAME,
        }
    }
}

/// Runs the three resolution phases with an injected environment and key
/// provider.
#[derive(Debug, Clone)]
pub struct Resolver<E = StdEnv, K = KeyResolver> {
    env: E,
    keys: K,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    /// Resolver over the process environment, keyed by `KEY<program>`.
    pub fn new() -> Self {
        Self {
            env: StdEnv,
            keys: KeyResolver::new(),
        }
    }
}

impl<E: EnvSource, K: KeyProvider> Resolver<E, K> {
    /// Replace the environment source.
    pub fn with_env<E2: EnvSource>(self, env: E2) -> Resolver<E2, K> {
        Resolver {
            env,
            keys: self.keys,
        }
    }

    /// Replace the key provider.
    pub fn with_keys<K2: KeyProvider>(self, keys: K2) -> Resolver<E, K2> {
        Resolver {
            env: self.env,
            keys,
        }
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Resolve the key this resolver would use.
    ///
    /// # Errors
    ///
    /// Propagates the key provider's error.
    pub fn key(&self) -> Result<Key> {
        self.keys.key(&self.env)
    }

    /// Resolve a record from defaults, the first usable reader, and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotStructPointer` for non-record targets, the key
    /// provider's error, or the first error of any phase.
    pub fn parse_readers<T, R, I>(&self, record: &mut T, readers: I) -> Result<()>
    where
        T: Reflect,
        R: Read,
        I: IntoIterator<Item = R>,
    {
        record::fields::<T>()?;
        let key = self.key()?;

        set_defaults(record, key.as_bytes())?;
        parse_file_layer(record, key.as_bytes(), readers)?;
        set_from_env(record, key.as_bytes(), &self.env)
    }

    /// Resolve a record using the given files as the file layer.
    ///
    /// Files that cannot be opened are skipped; if none opens, only defaults
    /// and the environment apply.
    ///
    /// # Errors
    ///
    /// See [`Resolver::parse_readers`].
    pub fn parse_files<T, P, I>(&self, record: &mut T, paths: I) -> Result<()>
    where
        T: Reflect,
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        let files = open_existing(paths);
        self.parse_readers(record, files)
    }

    /// Apply environment overrides only.
    ///
    /// # Errors
    ///
    /// See [`set_from_env`].
    pub fn set_from_env<T: Reflect>(&self, record: &mut T, key: &[u8]) -> Result<()> {
        set_from_env(record, key, &self.env)
    }
}

/// Open every path that can be opened, in order.
fn open_existing<P, I>(paths: I) -> Vec<File>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = P>,
{
    paths
        .into_iter()
        .filter_map(|path| {
            let path = path.as_ref();
            match File::open(path) {
                Ok(file) => Some(file),
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "skipping config file");
                    None
                }
            }
        })
        .collect()
}

/// Bind every field's `default` tag, decrypted, by field name.
///
/// # Errors
///
/// Returns `Error::NotStructPointer` for non-record targets, or the first
/// decryption or binding error.
pub fn set_defaults<T: Reflect>(record: &mut T, key: &[u8]) -> Result<()> {
    let fields = record::fields::<T>()?;

    let mut applied = 0usize;
    for field in fields {
        let Some(token) = field.tag(Source::Default.tag()).filter(|t| !t.is_empty()) else {
            continue;
        };
        let value = cipher::decrypt(key, token)?;
        record::set_field(record, field.name, &value)?;
        applied += 1;
    }

    debug!(applied, "defaults applied");
    Ok(())
}

/// Bind `key=value` lines from the first usable reader.
///
/// Readers are scanned in order. Blank lines and `#` comments are skipped;
/// every other line must contain `=`. A reader is used once it yields a
/// valid line, and no later reader is read after it. Returns whether a reader
/// was used.
///
/// # Errors
///
/// - `Error::BadFileFormat` for a line without `=`, in any reader scanned
/// - `Error::Io` if a reader fails or is not valid UTF-8
/// - decryption and binding errors for the values
pub fn parse_file_layer<T, R, I>(record: &mut T, key: &[u8], readers: I) -> Result<bool>
where
    T: Reflect,
    R: Read,
    I: IntoIterator<Item = R>,
{
    record::fields::<T>()?;

    for (index, reader) in readers.into_iter().enumerate() {
        let mut processed = false;

        for (number, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (name, token) = line.split_once('=').ok_or_else(|| {
                Error::BadFileFormat(format!("reader {}, line {}", index + 1, number + 1))
            })?;
            let name = name.trim();

            let value = cipher::decrypt(key, token.trim())?;
            record::set_field_by_tag(record, Source::File.tag(), name, &value)?;
            processed = true;
        }

        if processed {
            debug!(reader = index + 1, "file layer applied");
            return Ok(true);
        }
        debug!(reader = index + 1, "reader has no settings, trying next");
    }

    debug!("no usable file layer");
    Ok(false)
}

/// Bind fields whose `env_name` variable is set, decrypted, by field name.
///
/// Unset variables are skipped.
///
/// # Errors
///
/// Returns `Error::NotStructPointer` for non-record targets, or the first
/// decryption or binding error.
pub fn set_from_env<T: Reflect>(record: &mut T, key: &[u8], env: &dyn EnvSource) -> Result<()> {
    let fields = record::fields::<T>()?;

    let mut applied = 0usize;
    for field in fields {
        let Some(var) = field.tag(Source::Env.tag()).filter(|v| !v.is_empty()) else {
            continue;
        };
        let Some(token) = env.get(var) else {
            continue;
        };
        let value = cipher::decrypt(key, &token)?;
        record::set_field(record, field.name, &value)?;
        applied += 1;
    }

    debug!(applied, "environment overrides applied");
    Ok(())
}

/// Resolve a record with the default [`Resolver`].
///
/// # Errors
///
/// See [`Resolver::parse_readers`].
pub fn parse_readers<T, R, I>(record: &mut T, readers: I) -> Result<()>
where
    T: Reflect,
    R: Read,
    I: IntoIterator<Item = R>,
{
    Resolver::new().parse_readers(record, readers)
}

/// Resolve a record from files with the default [`Resolver`].
///
/// # Errors
///
/// See [`Resolver::parse_files`].
pub fn parse_files<T, P, I>(record: &mut T, paths: I) -> Result<()>
where
    T: Reflect,
    P: AsRef<Path>,
    I: IntoIterator<Item = P>,
{
    Resolver::new().parse_files(record, paths)
}

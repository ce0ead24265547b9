//! Error types for `ItemInfo`
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `ItemInfo` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A table file expected in the snapshot directory does not exist.
    #[error("snapshot table not found: {path}")]
    TableNotFound {
        /// The expected path to the table file.
        path: PathBuf,
    },

    // ==================== Parsing Errors ====================
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A JSON table failed to parse; carries the file for context.
    #[error("failed to parse {path}: {source}")]
    TableParse {
        /// The table file.
        path: PathBuf,
        /// The underlying parse error.
        source: serde_json::Error,
    },

    /// TOML configuration could not be parsed.
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML configuration could not be serialized.
    #[error("TOML serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    // ==================== Configuration Errors ====================
    /// The tier table is inconsistent.
    #[error("invalid tier table: {message}")]
    InvalidTierTable {
        /// Description of what is invalid.
        message: String,
    },

    /// No locale dictionary was loaded for the requested language.
    #[error("locale not loaded: {0}")]
    LocaleNotLoaded(String),

    // ==================== Barter Resolution Errors ====================
    /// An assortment entry that a barter chain resolved to has no usable scheme.
    #[error("trader {trader} has no barter scheme for assortment entry {entry}")]
    BarterScheme {
        /// The trader owning the assortment.
        trader: String,
        /// The assortment entry id the chain terminated at.
        entry: String,
    },
}

/// A specialized Result type for `ItemInfo` operations.
pub type Result<T> = std::result::Result<T, Error>;

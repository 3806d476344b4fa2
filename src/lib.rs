//! Glot Codemod - react-i18next codemod for JSX/TSX sources
//!
//! Replaces literal user-facing text in JSX markup, attributes, expression
//! containers and call arguments with `t('key')` calls, then brings `t` into
//! scope for the default export (via `useTranslation` or `withTranslation`)
//! and adds the matching `react-i18next` import.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, output, logging)
//! - `config`: Configuration file loading and parsing
//! - `core`: File scanning and swc parsing
//! - `keys`: Stable key derivation
//! - `transform`: Matchers, rewrite engine, export wiring and import synthesis
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod keys;
pub mod transform;
pub mod utils;

pub use transform::{TransformOptions, TransformOutcome, TransformResult, transform_source};

//! Core infrastructure shared by the transform pipeline and the CLI.
//!
//! ## Module Structure
//!
//! - `file_scanner`: Discovers source files under the configured includes
//! - `parsers`: swc-based JSX/TSX parsing

pub mod file_scanner;
pub mod parsers;

pub use file_scanner::{IgnoreRules, ScanResult, scan_files};
pub use parsers::jsx::{ParsedJSX, parse_jsx_source};

//! Sanitizing Parser Module
//!
//! Converts a raw queue item (text) into a `SanitizedRecord` ready for the document store.
//!
//! ## Pipeline
//! 1. **Normalization**: Rewrites `NaN` (and, in grammar mode, `Infinity` / `-Infinity`)
//!    tokens that producers emit but JSON does not allow into `null`.
//! 2. **Parsing**: Parses the normalized text as JSON and converts it into the document
//!    store's value model (`Bson`), keeping object key order.
//! 3. **Sanitization**: Walks the value tree and replaces every non-finite number with `null`.
//!
//! ## Submodules
//! - **`normalize`**: Token normalization (grammar-aware scanner and the textual compatibility mode).
//! - **`parser`**: JSON parsing, conversion into `Bson` and the recursive sanitization walk.
//! - **`types`**: `SanitizedRecord`, `NormalizationMode` and `ParseError`.

pub mod normalize;
pub mod parser;
pub mod types;

pub use parser::{parse_record, sanitize};
pub use types::{NormalizationMode, ParseError, SanitizedRecord};

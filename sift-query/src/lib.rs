//! Parse search-box strings such as `hello world tag:foo,bar author:"jane doe"`
//! into named filters and the leftover free text.
//!
//! ```
//! let q = sift_query::parse(r#"hello world tag:foo,bar author:"jane doe""#);
//! assert_eq!(q.raw(), "hello world");
//! assert_eq!(q.get("tag"), Some(&["foo".to_string(), "bar".to_string()][..]));
//! assert_eq!(q.get_one("Author"), "jane doe");
//! ```

pub mod config;
pub mod cutset;
pub mod error;
pub mod parser;
pub mod query;
pub mod scanner;
pub mod token;

pub use config::{CutPolicy, Options, ParserConfig};
pub use cutset::{Cutset, DefaultCut};
pub use error::{ConfigError, ConfigResult};
pub use parser::{parse, parse_with, Parser};
pub use query::{Query, QueryBuilder};
pub use scanner::{tokenize, Scanner};
pub use token::{Token, TokenKind};

//! Declarative command-line argument parsing.
//!
//! Describe the options a program understands with [`OptionSpec`], hand the
//! raw arguments to [`parse`], and get back typed positionals plus a map of
//! options keyed by their canonical alias.
//!
//! ```
//! use quarrel::{OptionSpec, ParseConfig, ParseOutcome, ValueKind};
//!
//! let specs = vec![
//!     OptionSpec::new(["-s", "--silent"]).help("Don't print anything"),
//!     OptionSpec::new(["-j", "--jobs"]).kind(ValueKind::Int).help("Parallel jobs"),
//!     OptionSpec::new(["-h", "--help"]).kind(ValueKind::Help).help("Show this help"),
//! ];
//!
//! let argv = ["--jobs", "4", "src", "-s", "dst"];
//! let ParseOutcome::Matches(m) = quarrel::parse(&argv, &specs, &ParseConfig::default())? else {
//!     unreachable!("no help option given");
//! };
//! assert_eq!(m.get("-j").and_then(|v| v.as_int()), Some(4));
//! assert!(m.contains("-s"));
//! assert_eq!(m.positionals().len(), 2);
//! # Ok::<(), quarrel::Error>(())
//! ```
//!
//! There is no short flag clustering (`-xvf`), no `--key=value` splitting and
//! no environment or config file merging. Unknown tokens that look like flags
//! are rejected unless they follow the end-of-options marker.

mod config;
mod error;
pub mod help;
mod kind;
mod lookup;
mod scan;
mod spec;
mod value;
mod version;

pub use config::{DEFAULT_BAD_PREFIXES, DEFAULT_END_OF_OPTIONS, ParseConfig};
pub use error::{Error, Result};
pub use kind::ValueKind;
pub use lookup::AliasLookup;
pub use scan::{Matches, ParseOutcome, parse, parse_default};
pub use spec::{Callback, OptionSpec};
pub use value::{ParsedValue, coerce, parse_bool};
pub use version::{Version, version};

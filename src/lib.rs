//! sbomcmp - Maven component comparison for CycloneDX SBOMs.
//!
//! This library compares the Maven library components of two
//! CycloneDX-style SBOM JSON documents and reports version mismatches
//! and one-sided components.
//!
//! # Example
//!
//! ```no_run
//! use sbomcmp::{compare, format_report, load_components, OutputFormat, OutputOptions};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Index the Maven libraries of both files
//! let first = load_components(Path::new("old-bom.json"))?;
//! let second = load_components(Path::new("new-bom.json"))?;
//!
//! // Compare the indices
//! let report = compare(&first, &second);
//!
//! // Format the output
//! let output = format_report(
//!     &report,
//!     "old-bom.json",
//!     "new-bom.json",
//!     &OutputFormat::Terminal,
//!     &OutputOptions::default(),
//! )?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod compare;
pub mod error;
pub mod loader;
pub mod model;
pub mod output;

// Re-export commonly used types for convenience
pub use compare::{compare, CompareReport, CompareStats, Finding, FindingKind};
pub use error::{OutputError, ParseError, SbomCmpError};
pub use loader::{load_components, parse_components};
pub use model::{Component, ComponentIndex};
pub use output::{format_report, OutputFormat, OutputOptions};

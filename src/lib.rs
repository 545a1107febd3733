//! # Deposit Crosswalk
//!
//! Maps deposit metadata documents onto a repository's nested attribute model
//! and assembles METS exchange packages for repository works.
//!
//! ## Architecture Layers
//!
//! - **Domain**: deposit document views, the attribute tree, target groups
//! - **Application**: the attribute crosswalk, the METS assembler, ports and use cases
//! - **Infrastructure**: owned XML model (quick-xml) and the JSON work manifest
//!
//! ## Example Usage
//!
//! ```no_run
//! use deposit_crosswalk::application::crosswalk::AttributeCrosswalk;
//! use deposit_crosswalk::value_objects::{DepositDocument, WorkModel};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let document = DepositDocument::from_json_str(r#"{"title": ["On Crosswalks"]}"#)?;
//! let tree = AttributeCrosswalk::new(WorkModel::Article).map(&document)?;
//! println!("{}", tree.to_json());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};

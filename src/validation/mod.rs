//! Validation of registry layouts.
//!
//! Registry problems are collected with Stillwater's `Validation` type, so a
//! broken registry reports every duplicate key and dangling exit in one pass
//! instead of one per build attempt.
//!
//! # Example
//!
//! ```rust
//! use screenflip::validation::{LayoutEntry, RegistryLayout, ValidationBuilder};
//!
//! let rules = ValidationBuilder::new()
//!     .require_pred(
//!         |layout| layout.contains(&"MAIN".into()),
//!         "A MAIN state is required".to_string(),
//!     )
//!     .build();
//!
//! let layout = RegistryLayout {
//!     entries: vec![LayoutEntry {
//!         key: "MAIN".into(),
//!         state: "MainMenu".to_string(),
//!         exits: vec!["SCENE".into()],
//!     }],
//! };
//!
//! // SCENE is not registered
//! assert!(rules.enforce(&layout).is_failure());
//! ```

pub mod builder;
pub mod context;
pub mod rules;
pub mod violations;

pub use builder::ValidationBuilder;
pub use context::{LayoutEntry, RegistryLayout};
pub use rules::ValidationRules;
pub use violations::RegistryViolation;

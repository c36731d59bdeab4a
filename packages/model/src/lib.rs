//! # Blockpage Model
//!
//! Page blocks and the collaborators the editor needs to create them.
//!
//! - [`Component`]: one typed content block on a page
//! - [`TemplateCatalog`]: default content per block type
//! - [`IdGenerator`]: fresh component ids

pub mod catalog;
pub mod component;
pub mod ids;

pub use catalog::{CatalogError, Template, TemplateCatalog};
pub use component::{Component, ComponentType, Content, ParseComponentTypeError, Styles};
pub use ids::{IdGenerator, SequentialIds, UuidGenerator};

//! Directives: named inventories that can be rendered on their own or
//! expanded in place inside documents.

mod expand;
mod registry;

pub use expand::{expand, DocumentKind};
pub use registry::{qualify, DirectiveRegistry, BIN_OPTION, PREFIX};

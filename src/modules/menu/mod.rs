//! Role-scoped navigation.

mod data;
pub mod model;
pub mod service;

pub use model::ResolvedMenu;
pub use service::{MenuService, RoleMenuResolver};

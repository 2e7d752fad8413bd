pub mod model;
pub mod service;

pub use model::{ActionOutcome, ConsoleState};
pub use service::ConsoleService;

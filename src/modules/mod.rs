pub mod approvals;
pub mod console;
pub mod dashboard;
pub mod directory;
pub mod menu;

pub use self::approvals::ApprovalWorkflow;
pub use self::dashboard::{DashboardAggregator, DashboardView};
pub use self::directory::UserDirectoryService;
pub use self::menu::{MenuService, RoleMenuResolver};

//! # Campusboard
//!
//! The administrative core of the Campusboard console: role-scoped navigation,
//! the teacher approval workflow and dashboard summaries, driven through a
//! remote user directory.
//!
//! ## Overview
//!
//! ```text
//! UserDirectoryService (HTTP or in-memory)
//!    ├─> DashboardAggregator   derives counts
//!    └─> ApprovalWorkflow      approve/reject, pending snapshot, processing ids
//! KeyValueStore (file, Redis or memory)
//!    └─> RoleMenuResolver      last role, compact-menu preference
//! ```
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── modules/
//! │   ├── approvals/   # ApprovalWorkflow, ProcessingSet
//! │   ├── console/     # ConsoleService, ConsoleState (catch-log-ignore policy)
//! │   ├── dashboard/   # DashboardAggregator, DashboardView
//! │   ├── directory/   # UserDirectoryService, HttpDirectory, InMemoryDirectory
//! │   └── menu/        # MenuService, RoleMenuResolver, static menus
//! └── state.rs         # AppState
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `service.rs`: Business logic
//! - `model.rs`: Types owned by the module
//!
//! ## Roles
//!
//! | Role | Landing page | Menu sections |
//! |------|--------------|---------------|
//! | Admin | `/admin/dashboard` | Main, Management, Account |
//! | Teacher | `/teacher/dashboard` | Main, Teaching, Account |
//! | Student | `/student/dashboard` | Main, Learning, Account |
//!
//! Unrecognized role names resolve to the Admin menu.
//!
//! ## Teacher approval
//!
//! ```text
//! Pending ──approve──> Approved
//!    └────reject────> Rejected
//! ```
//!
//! Decisions are sent to the user directory; the pending list is re-fetched
//! afterwards and the directory's answer is authoritative.
//!
//! ## Error handling
//!
//! Workflow operations return [`campusboard_core::AppResult`]. The
//! [`modules::console::ConsoleService`] layer logs errors and keeps going,
//! which is what an interactive front-end wants.
//!
//! ## Quick Start
//!
//! ### Environment Variables
//!
//! ```bash
//! CAMPUSBOARD_API_URL=http://localhost:3000/api
//! CAMPUSBOARD_API_TOKEN=secret
//! CAMPUSBOARD_ACTION_TIMEOUT_SECS=15
//! CAMPUSBOARD_STORE=file
//! CAMPUSBOARD_STORE_PATH=storage/preferences.json
//! ```
//!
//! ### Running the console
//!
//! ```bash
//! cargo run --bin campusboard-cli -- --demo dashboard
//! ```

pub mod modules;
pub mod state;

// Re-export workspace crates for convenience
pub use campusboard_config;
pub use campusboard_core;
pub use campusboard_models;
pub use campusboard_store;

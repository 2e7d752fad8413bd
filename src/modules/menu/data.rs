//! Static navigation tables, one per role.

use campusboard_models::{MenuEntry, MenuItem};

const ADMIN_USER_CHILDREN: &[MenuItem] = &[
    MenuItem::new("users", "All Users", "/admin/users"),
    MenuItem::new("user-plus", "Add User", "/admin/users/new"),
];

const ADMIN_COURSE_CHILDREN: &[MenuItem] = &[
    MenuItem::new("book", "All Courses", "/admin/courses"),
    MenuItem::new("layers", "Categories", "/admin/courses/categories"),
];

pub(super) const ADMIN_MENU: &[MenuEntry] = &[
    MenuEntry::header("Main"),
    MenuEntry::item(MenuItem::new("home", "Dashboard", "/admin/dashboard")),
    MenuEntry::header("Management"),
    MenuEntry::item(
        MenuItem::new("users", "Users", "/admin/users").with_children(ADMIN_USER_CHILDREN),
    ),
    MenuEntry::item(MenuItem::new(
        "user-check",
        "Pending Teachers",
        "/admin/teachers/pending",
    )),
    MenuEntry::item(
        MenuItem::new("book", "Courses", "/admin/courses").with_children(ADMIN_COURSE_CHILDREN),
    ),
    MenuEntry::item(MenuItem::new("bar-chart", "Reports", "/admin/reports")),
    MenuEntry::header("Account"),
    MenuEntry::item(MenuItem::new("settings", "Settings", "/admin/settings")),
    MenuEntry::item(MenuItem::new("user", "Profile", "/admin/profile")),
    MenuEntry::item(MenuItem::new("log-out", "Logout", "/logout").ignored()),
];

const TEACHER_COURSE_CHILDREN: &[MenuItem] = &[
    MenuItem::new("book", "All Courses", "/teacher/courses"),
    MenuItem::new("plus", "Create Course", "/teacher/courses/new"),
];

pub(super) const TEACHER_MENU: &[MenuEntry] = &[
    MenuEntry::header("Main"),
    MenuEntry::item(MenuItem::new("home", "Dashboard", "/teacher/dashboard")),
    MenuEntry::header("Teaching"),
    MenuEntry::item(
        MenuItem::new("book", "My Courses", "/teacher/courses")
            .with_children(TEACHER_COURSE_CHILDREN),
    ),
    MenuEntry::item(MenuItem::new("users", "Students", "/teacher/students")),
    MenuEntry::item(MenuItem::new("clipboard", "Assignments", "/teacher/assignments")),
    MenuEntry::header("Account"),
    MenuEntry::item(MenuItem::new("user", "Profile", "/teacher/profile")),
    MenuEntry::item(MenuItem::new("log-out", "Logout", "/logout").ignored()),
];

pub(super) const STUDENT_MENU: &[MenuEntry] = &[
    MenuEntry::header("Main"),
    MenuEntry::item(MenuItem::new("home", "Dashboard", "/student/dashboard")),
    MenuEntry::header("Learning"),
    MenuEntry::item(MenuItem::new("book", "My Courses", "/student/courses")),
    MenuEntry::item(MenuItem::new("search", "Browse Courses", "/student/browse")),
    MenuEntry::item(MenuItem::new("award", "Grades", "/student/grades")),
    MenuEntry::header("Account"),
    MenuEntry::item(MenuItem::new("user", "Profile", "/student/profile")),
    MenuEntry::item(MenuItem::new("log-out", "Logout", "/logout").ignored()),
];

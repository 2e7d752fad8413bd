//! Configuration for demo directory seeding.

/// How many directory entries to generate.
///
/// Teachers are split into `pending_teachers` open applications and already
/// approved ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedConfig {
    pub admins: usize,
    pub teachers: usize,
    pub pending_teachers: usize,
    pub students: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            admins: 2,
            teachers: 6,
            pending_teachers: 3,
            students: 20,
        }
    }
}

impl SeedConfig {
    pub fn with_admins(mut self, admins: usize) -> Self {
        self.admins = admins;
        self
    }

    /// Sets the number of teachers and how many of them are still pending.
    /// `pending` is capped at `teachers`.
    pub fn with_teachers(mut self, teachers: usize, pending: usize) -> Self {
        self.teachers = teachers;
        self.pending_teachers = pending.min(teachers);
        self
    }

    pub fn with_students(mut self, students: usize) -> Self {
        self.students = students;
        self
    }

    /// Total users in the generated directory, teachers included.
    pub fn total_users(&self) -> usize {
        self.admins + self.teachers + self.students
    }
}

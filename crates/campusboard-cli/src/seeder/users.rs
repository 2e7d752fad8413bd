//! User and teacher generation.
//!
//! Ids are deterministic (`a1`, `t1`, `s1`, ...) so a demo run can be
//! driven from the command line; names, emails and dates are fake.

use campusboard_models::{ApprovalStatus, Email, Role, Teacher, User, UserId};
use chrono::{DateTime, Utc};
use fake::Fake;
use fake::faker::chrono::en::DateTimeBefore;
use fake::faker::name::en::*;

const QUALIFICATIONS: &[&str] = &[
    "B.Ed Mathematics",
    "M.Ed Curriculum Studies",
    "PGCE Secondary Science",
    "BA English Literature",
    "MSc Computer Science",
];

fn id_prefix(role: Role) -> &'static str {
    match role {
        Role::Admin => "a",
        Role::Teacher => "t",
        Role::Student => "s",
    }
}

/// Generates `count` users with the given role.
pub fn generate_users(role: Role, count: usize) -> Vec<User> {
    (0..count).map(|idx| generate_user(role, idx)).collect()
}

/// Generates `count` teachers; the first `pending` are still awaiting a
/// decision, the rest are approved.
pub fn generate_teachers(count: usize, pending: usize) -> Vec<Teacher> {
    (0..count)
        .map(|idx| {
            let created_at: DateTime<Utc> = DateTimeBefore(Utc::now()).fake();
            Teacher {
                user: generate_user(Role::Teacher, idx),
                qualification: (idx % 4 != 3)
                    .then(|| QUALIFICATIONS[idx % QUALIFICATIONS.len()].to_string()),
                approval_status: if idx < pending {
                    ApprovalStatus::Pending
                } else {
                    ApprovalStatus::Approved
                },
                created_at,
            }
        })
        .collect()
}

fn generate_user(role: Role, idx: usize) -> User {
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();
    let prefix = id_prefix(role);

    let email = format!(
        "{}.{}+{}{}@example.com",
        email_part(&first_name),
        email_part(&last_name),
        prefix,
        idx + 1
    );

    User {
        id: UserId::new(format!("{}{}", prefix, idx + 1)),
        display_name: format!("{} {}", first_name, last_name),
        email: Email::new_unchecked(email),
        role,
    }
}

fn email_part(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase()
}

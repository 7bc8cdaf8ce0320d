//! Roommate profile model and attribute search.

use serde::{Deserialize, Serialize};

use super::value_object::{Timestamp, UserId};

/// Maximum number of profiles returned by one search
pub const SEARCH_RESULT_LIMIT: usize = 20;

/// A user's roommate-finder profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: UserId,
    pub name: String,
    pub college_name: String,
    pub branch: String,
    pub year: String,
    pub gender: String,
    pub course: String,
    pub location: String,
    /// Derived on every save, see [`Profile::is_complete`]
    pub is_profile_complete: bool,
    pub updated_at: Timestamp,
}

impl Profile {
    /// Create an empty profile for `user_id`
    pub fn new(user_id: UserId, updated_at: Timestamp) -> Self {
        Self {
            user_id,
            name: String::new(),
            college_name: String::new(),
            branch: String::new(),
            year: String::new(),
            gender: String::new(),
            course: String::new(),
            location: String::new(),
            is_profile_complete: false,
            updated_at,
        }
    }

    /// Apply the provided fields and recompute completeness
    pub fn apply(&mut self, update: ProfileUpdate, at: Timestamp) {
        let ProfileUpdate {
            name,
            college_name,
            branch,
            year,
            gender,
            course,
            location,
        } = update;

        let fields = [
            (&mut self.name, name),
            (&mut self.college_name, college_name),
            (&mut self.branch, branch),
            (&mut self.year, year),
            (&mut self.gender, gender),
            (&mut self.course, course),
            (&mut self.location, location),
        ];
        for (slot, value) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }

        self.is_profile_complete = self.is_complete();
        self.updated_at = at;
    }

    /// All searchable attributes are filled in (ignoring surrounding whitespace).
    pub fn is_complete(&self) -> bool {
        [
            &self.college_name,
            &self.branch,
            &self.year,
            &self.gender,
            &self.course,
            &self.location,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}

/// Partial profile update; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub college_name: Option<String>,
    pub branch: Option<String>,
    pub year: Option<String>,
    pub gender: Option<String>,
    pub course: Option<String>,
    pub location: Option<String>,
}

/// Attribute filters for profile search.
///
/// Blank filters are ignored. `location`, `college_name`, `branch` and
/// `course` match as case-insensitive substrings; `year` and `gender` match
/// exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileQuery {
    pub location: Option<String>,
    pub college_name: Option<String>,
    pub year: Option<String>,
    pub branch: Option<String>,
    pub gender: Option<String>,
    pub course: Option<String>,
}

impl ProfileQuery {
    /// Whether `profile` satisfies every non-blank filter
    pub fn matches(&self, profile: &Profile) -> bool {
        contains_ci(&self.location, &profile.location)
            && contains_ci(&self.college_name, &profile.college_name)
            && contains_ci(&self.branch, &profile.branch)
            && contains_ci(&self.course, &profile.course)
            && equals(&self.year, &profile.year)
            && equals(&self.gender, &profile.gender)
    }
}

fn active(filter: &Option<String>) -> Option<&str> {
    filter.as_deref().map(str::trim).filter(|f| !f.is_empty())
}

fn contains_ci(filter: &Option<String>, value: &str) -> bool {
    match active(filter) {
        Some(needle) => value.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}

fn equals(filter: &Option<String>, value: &str) -> bool {
    match active(filter) {
        Some(expected) => value == expected,
        None => true,
    }
}

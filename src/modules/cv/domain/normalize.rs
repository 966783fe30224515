//! Pre-persist pass applied to every CV write.
//!
//! Strings are trimmed, and the row-based sections `education`,
//! `work_experience` and `projects` always keep at least one row so that
//! clients can render an editable entry.

use super::entities::{About, CvContent, Education, PersonalDetails, Project, WorkExperience};

fn trim(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_string()
    }
}

fn at_least_one_row<T: Default>(rows: Vec<T>) -> Vec<T> {
    if rows.is_empty() {
        vec![T::default()]
    } else {
        rows
    }
}

impl PersonalDetails {
    fn trimmed(self) -> Self {
        Self {
            full_name: trim(self.full_name),
            phone: trim(self.phone),
            email: trim(self.email),
            address: trim(self.address),
        }
    }
}

impl About {
    fn trimmed(self) -> Self {
        Self {
            profile: trim(self.profile),
        }
    }
}

impl Education {
    fn trimmed(self) -> Self {
        Self {
            institution: trim(self.institution),
            qualification: trim(self.qualification),
            time: trim(self.time),
        }
    }
}

impl WorkExperience {
    fn trimmed(self) -> Self {
        Self {
            company: trim(self.company),
            position: trim(self.position),
            time: trim(self.time),
        }
    }
}

impl Project {
    fn trimmed(self) -> Self {
        Self {
            name: trim(self.name),
            description: trim(self.description),
            languages: trim(self.languages),
        }
    }
}

impl CvContent {
    /// The all-default document created for a user without a CV.
    pub fn initial() -> Self {
        Self::default().normalized()
    }

    /// Returns the content exactly as it must be stored.
    pub fn normalized(self) -> Self {
        Self {
            personal_details: self.personal_details.trimmed(),
            about: self.about.trimmed(),
            education: at_least_one_row(
                self.education.into_iter().map(Education::trimmed).collect(),
            ),
            work_experience: at_least_one_row(
                self.work_experience
                    .into_iter()
                    .map(WorkExperience::trimmed)
                    .collect(),
            ),
            skills: self.skills.into_iter().map(trim).collect(),
            interests: self.interests.into_iter().map(trim).collect(),
            projects: at_least_one_row(self.projects.into_iter().map(Project::trimmed).collect()),
        }
    }
}

use serde::{Deserialize, Serialize};

/// Profile as typed into the form, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    /// Comma or semicolon separated
    #[serde(default)]
    pub skills: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    #[serde(default, rename = "areasInteresse")]
    pub areas_of_interest: Vec<String>,
}

impl ProfileDraft {
    /// Append an area unless it is already selected. Returns true if added.
    pub fn add_area(&mut self, area: &str) -> bool {
        let area = area.trim();
        if area.is_empty() || self.areas_of_interest.iter().any(|a| a == area) {
            return false;
        }
        self.areas_of_interest.push(area.to_string());
        true
    }

    /// Returns true if the area was selected
    pub fn remove_area(&mut self, area: &str) -> bool {
        let before = self.areas_of_interest.len();
        self.areas_of_interest.retain(|a| a != area.trim());
        self.areas_of_interest.len() != before
    }

    pub fn apply_edit(&mut self, edit: ProfileEdit) {
        if let Some(name) = edit.name {
            self.name = name;
        }
        if let Some(role) = edit.role {
            self.role = role;
        }
        if let Some(skills) = edit.skills {
            self.skills = skills;
        }
        if let Some(progress) = edit.progress {
            self.progress = progress;
        }
    }
}

/// Field changes requested for a draft; `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileEdit {
    pub name: Option<String>,
    pub role: Option<String>,
    pub skills: Option<String>,
    /// `Some(None)` unsets progress
    pub progress: Option<Option<f64>>,
}

/// Normalized profile, the form that gets persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub skills: Vec<String>,
    pub progress: f64,
    #[serde(rename = "areasInteresse")]
    pub areas_of_interest: Vec<String>,
}

impl From<&Profile> for ProfileDraft {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            role: profile.role.clone(),
            skills: profile.skills.join(", "),
            progress: Some(profile.progress),
            areas_of_interest: profile.areas_of_interest.clone(),
        }
    }
}

use super::types::{Profile, ProfileDraft};
use serde::Serialize;

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 50;
pub const ROLE_MIN_LEN: usize = 3;
pub const SKILLS_MIN: usize = 1;
pub const SKILLS_MAX: usize = 10;
pub const AREAS_MIN: usize = 1;
pub const AREAS_MAX: usize = 5;

/// Normalized progress never drops below this. A stored profile always shows
/// some progress; "no profile yet" is represented by having no profile at all.
pub const PROGRESS_FLOOR: f64 = 0.1;
pub const PROGRESS_CEIL: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProfileField {
    Name,
    Role,
    Skills,
    AreasOfInterest,
    Progress,
}

impl ProfileField {
    pub fn label(self) -> &'static str {
        match self {
            ProfileField::Name => "Name",
            ProfileField::Role => "Role",
            ProfileField::Skills => "Skills",
            ProfileField::AreasOfInterest => "Areas of interest",
            ProfileField::Progress => "Progress",
        }
    }

    /// Critical fields block a clean save; the rest are advisory
    pub fn is_critical(self) -> bool {
        !matches!(self, ProfileField::Progress)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldCheck {
    pub field: ProfileField,
    pub passed: bool,
    pub message: String,
    pub critical: bool,
}

impl FieldCheck {
    fn pass(field: ProfileField, message: String) -> Self {
        Self {
            field,
            passed: true,
            message,
            critical: field.is_critical(),
        }
    }

    fn fail(field: ProfileField, message: &str) -> Self {
        Self {
            field,
            passed: false,
            message: message.to_string(),
            critical: field.is_critical(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// One check per field: name, role, skills, areas, progress
    pub checks: Vec<FieldCheck>,
    /// True when no critical check failed
    pub valid: bool,
    /// Best-effort normalized record, computed even when invalid
    pub normalized: Profile,
}

impl ValidationReport {
    pub fn check(&self, field: ProfileField) -> Option<&FieldCheck> {
        self.checks.iter().find(|c| c.field == field)
    }

    pub fn failures(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed).count()
    }

    pub fn critical_failures(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed && c.critical).count()
    }

    pub fn advisory_failures(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed && !c.critical).count()
    }
}

/// Split on `,` or `;`, trim, drop empty tokens and exact duplicates
pub fn normalize_skills(raw: &str) -> Vec<String> {
    dedup_trimmed(raw.split([',', ';']))
}

/// Absent or non-numeric progress maps to the floor; anything else is clamped
/// into `[PROGRESS_FLOOR, PROGRESS_CEIL]`.
pub fn normalize_progress(progress: Option<f64>) -> f64 {
    match progress {
        Some(p) if p.is_finite() => p.clamp(PROGRESS_FLOOR, PROGRESS_CEIL),
        _ => PROGRESS_FLOOR,
    }
}

fn dedup_trimmed<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        let item = item.trim();
        if !item.is_empty() && !out.iter().any(|seen| seen == item) {
            out.push(item.to_string());
        }
    }
    out
}

/// Validate a profile draft.
///
/// Every rule runs, so the report lists all problems at once. The draft is not
/// modified; the cleaned-up version is returned in `normalized`.
pub fn validate_profile(draft: &ProfileDraft) -> ValidationReport {
    let name = draft.name.trim();
    let role = draft.role.trim();
    let skills = normalize_skills(&draft.skills);
    let areas = dedup_trimmed(draft.areas_of_interest.iter().map(String::as_str));

    let checks = vec![
        check_name(name),
        check_role(role),
        check_skills(skills.len()),
        check_areas(areas.len()),
        check_progress(draft.progress),
    ];

    let valid = !checks.iter().any(|c| !c.passed && c.critical);

    let normalized = Profile {
        name: name.to_string(),
        role: role.to_string(),
        skills: skills.into_iter().take(SKILLS_MAX).collect(),
        progress: normalize_progress(draft.progress),
        areas_of_interest: areas.into_iter().take(AREAS_MAX).collect(),
    };

    ValidationReport {
        checks,
        valid,
        normalized,
    }
}

fn check_name(name: &str) -> FieldCheck {
    let len = name.chars().count();
    if len == 0 {
        FieldCheck::fail(ProfileField::Name, "Name is required")
    } else if len < NAME_MIN_LEN {
        FieldCheck::fail(ProfileField::Name, "Name must have at least 2 characters")
    } else if len > NAME_MAX_LEN {
        FieldCheck::fail(ProfileField::Name, "Name must have at most 50 characters")
    } else {
        FieldCheck::pass(ProfileField::Name, format!("OK ({}/{})", len, NAME_MAX_LEN))
    }
}

fn check_role(role: &str) -> FieldCheck {
    let len = role.chars().count();
    if len == 0 {
        FieldCheck::fail(ProfileField::Role, "Role is required")
    } else if len < ROLE_MIN_LEN {
        FieldCheck::fail(ProfileField::Role, "Role must have at least 3 characters")
    } else {
        FieldCheck::pass(ProfileField::Role, format!("OK ({})", len))
    }
}

fn check_skills(count: usize) -> FieldCheck {
    if count < SKILLS_MIN {
        FieldCheck::fail(ProfileField::Skills, "Add at least 1 skill")
    } else if count > SKILLS_MAX {
        FieldCheck::fail(ProfileField::Skills, "At most 10 skills allowed")
    } else {
        FieldCheck::pass(ProfileField::Skills, format!("OK ({})", count))
    }
}

// Over-selection is capped during normalization instead of failing.
fn check_areas(count: usize) -> FieldCheck {
    if count < AREAS_MIN {
        FieldCheck::fail(
            ProfileField::AreasOfInterest,
            "Select at least 1 area of interest",
        )
    } else if count > AREAS_MAX {
        FieldCheck::pass(
            ProfileField::AreasOfInterest,
            format!("OK ({}, capped from {})", AREAS_MAX, count),
        )
    } else {
        FieldCheck::pass(ProfileField::AreasOfInterest, format!("OK ({})", count))
    }
}

fn check_progress(progress: Option<f64>) -> FieldCheck {
    match progress {
        None => FieldCheck::pass(ProfileField::Progress, "not set".to_string()),
        Some(p) if !p.is_finite() => {
            FieldCheck::fail(ProfileField::Progress, "Progress must be a number")
        }
        Some(p) if !(0.0..=1.0).contains(&p) => {
            FieldCheck::fail(ProfileField::Progress, "Progress must be between 0 and 1")
        }
        Some(p) if p < PROGRESS_FLOOR => FieldCheck::fail(
            ProfileField::Progress,
            "Progress below the 10% floor; saved as 10%",
        ),
        Some(p) => FieldCheck::pass(
            ProfileField::Progress,
            format!("{}%", (p * 100.0).round() as i64),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn good_draft() -> ProfileDraft {
        ProfileDraft {
            name: "  Lana Andrade ".to_string(),
            role: "DevOps / Mainframe".to_string(),
            skills: "React, Java; COBOL, DevOps".to_string(),
            progress: Some(0.75),
            areas_of_interest: vec!["DevOps".to_string(), "Cloud Computing".to_string()],
        }
    }

    #[test]
    fn test_valid_draft() {
        let report = validate_profile(&good_draft());
        assert!(report.valid);
        assert_eq!(report.failures(), 0);
        assert_eq!(report.checks.len(), 5);
        assert_eq!(report.normalized.name, "Lana Andrade");
        assert_eq!(report.normalized.skills, vec!["React", "Java", "COBOL", "DevOps"]);
        assert_eq!(report.normalized.progress, 0.75);
        assert_eq!(report.check(ProfileField::Name).unwrap().message, "OK (12/50)");
        assert_eq!(report.check(ProfileField::Progress).unwrap().message, "75%");
    }

    #[test]
    fn test_check_order_and_criticality() {
        let report = validate_profile(&ProfileDraft::default());
        let fields: Vec<ProfileField> = report.checks.iter().map(|c| c.field).collect();
        assert_eq!(
            fields,
            vec![
                ProfileField::Name,
                ProfileField::Role,
                ProfileField::Skills,
                ProfileField::AreasOfInterest,
                ProfileField::Progress,
            ]
        );
        let critical: Vec<bool> = report.checks.iter().map(|c| c.critical).collect();
        assert_eq!(critical, vec![true, true, true, true, false]);
    }

    #[test]
    fn test_empty_draft_reports_every_critical_field() {
        let report = validate_profile(&ProfileDraft::default());
        assert!(!report.valid);
        assert_eq!(report.critical_failures(), 4);
        assert_eq!(report.advisory_failures(), 0);
        assert_eq!(report.normalized.progress, PROGRESS_FLOOR);
    }

    #[test]
    fn test_missing_name_scenario() {
        let draft = ProfileDraft {
            name: String::new(),
            role: "Dev".to_string(),
            skills: "x".to_string(),
            progress: None,
            areas_of_interest: vec!["AI".to_string()],
        };
        let report = validate_profile(&draft);

        let name = report.check(ProfileField::Name).unwrap();
        assert!(!name.passed);
        assert!(name.critical);
        assert_eq!(name.message, "Name is required");
        assert!(!report.valid);
        assert_eq!(report.critical_failures(), 1);

        assert_eq!(report.normalized.name, "");
        assert_eq!(report.normalized.role, "Dev");
        assert_eq!(report.normalized.skills, vec!["x"]);
        assert_eq!(report.normalized.areas_of_interest, vec!["AI"]);
    }

    #[test]
    fn test_name_length_bounds() {
        let mut draft = good_draft();

        draft.name = " A ".to_string();
        let check = validate_profile(&draft).check(ProfileField::Name).cloned().unwrap();
        assert_eq!(check.message, "Name must have at least 2 characters");

        draft.name = "Jo".to_string();
        assert!(validate_profile(&draft).valid);

        draft.name = "x".repeat(50);
        assert!(validate_profile(&draft).valid);

        draft.name = "x".repeat(51);
        let report = validate_profile(&draft);
        assert!(!report.valid);
        assert_eq!(
            report.check(ProfileField::Name).unwrap().message,
            "Name must have at most 50 characters"
        );
    }

    #[test]
    fn test_name_length_counts_chars_not_bytes() {
        let mut draft = good_draft();
        draft.name = "é".repeat(50);
        assert!(validate_profile(&draft).valid);
    }

    #[test]
    fn test_role_min_length() {
        let mut draft = good_draft();
        draft.role = " QA ".to_string();
        let report = validate_profile(&draft);
        assert!(!report.valid);
        assert_eq!(
            report.check(ProfileField::Role).unwrap().message,
            "Role must have at least 3 characters"
        );

        draft.role = "Dev".to_string();
        assert!(validate_profile(&draft).valid);
    }

    #[test]
    fn test_normalize_skills() {
        assert_eq!(normalize_skills("a,, b ;c"), vec!["a", "b", "c"]);
        assert_eq!(normalize_skills(" ; , "), Vec::<String>::new());
        assert_eq!(normalize_skills("Rust, Go, Rust"), vec!["Rust", "Go"]);
    }

    #[test]
    fn test_skills_bounds() {
        let mut draft = good_draft();

        draft.skills = ",;,".to_string();
        let report = validate_profile(&draft);
        assert_eq!(report.check(ProfileField::Skills).unwrap().message, "Add at least 1 skill");

        draft.skills = (1..=10).map(|i| format!("s{}", i)).collect::<Vec<_>>().join(",");
        assert!(validate_profile(&draft).valid);

        draft.skills = (1..=12).map(|i| format!("s{}", i)).collect::<Vec<_>>().join(",");
        let report = validate_profile(&draft);
        assert!(!report.valid);
        assert_eq!(
            report.check(ProfileField::Skills).unwrap().message,
            "At most 10 skills allowed"
        );
        assert_eq!(report.normalized.skills.len(), SKILLS_MAX);
        assert_eq!(report.normalized.skills[9], "s10");
    }

    #[test]
    fn test_duplicate_skills_count_once() {
        let mut draft = good_draft();
        // 11 tokens but only 10 distinct
        draft.skills = (1..=10)
            .map(|i| format!("s{}", i))
            .chain(std::iter::once("s1".to_string()))
            .collect::<Vec<_>>()
            .join(";");
        assert!(validate_profile(&draft).valid);
    }

    #[test]
    fn test_areas_required() {
        let mut draft = good_draft();
        draft.areas_of_interest.clear();
        let report = validate_profile(&draft);
        assert!(!report.valid);
        assert_eq!(
            report.check(ProfileField::AreasOfInterest).unwrap().message,
            "Select at least 1 area of interest"
        );
    }

    #[test]
    fn test_areas_over_selection_is_capped_not_failed() {
        let mut draft = good_draft();
        draft.areas_of_interest = ["A", "B", "C", "D", "E", "F", "G"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let report = validate_profile(&draft);

        assert!(report.valid);
        let check = report.check(ProfileField::AreasOfInterest).unwrap();
        assert!(check.passed);
        assert_eq!(check.message, "OK (5, capped from 7)");
        assert_eq!(report.normalized.areas_of_interest, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_areas_deduplicated_keeping_order() {
        let mut draft = good_draft();
        draft.areas_of_interest = vec![
            "DevOps".to_string(),
            " DevOps ".to_string(),
            "".to_string(),
            "Cybersecurity".to_string(),
        ];
        let report = validate_profile(&draft);
        assert_eq!(report.normalized.areas_of_interest, vec!["DevOps", "Cybersecurity"]);
    }

    #[test]
    fn test_progress_clamping() {
        assert_eq!(normalize_progress(Some(0.05)), 0.1);
        assert_eq!(normalize_progress(Some(1.5)), 1.0);
        assert_eq!(normalize_progress(Some(0.0)), 0.1);
        assert_eq!(normalize_progress(Some(-3.0)), 0.1);
        assert_eq!(normalize_progress(Some(0.42)), 0.42);
        assert_eq!(normalize_progress(None), 0.1);
        assert_eq!(normalize_progress(Some(f64::NAN)), 0.1);
    }

    #[test]
    fn test_progress_is_advisory() {
        let mut draft = good_draft();
        draft.progress = Some(1.5);
        let report = validate_profile(&draft);

        assert!(report.valid);
        assert_eq!(report.advisory_failures(), 1);
        assert_eq!(report.critical_failures(), 0);
        let check = report.check(ProfileField::Progress).unwrap();
        assert!(!check.critical);
        assert_eq!(check.message, "Progress must be between 0 and 1");
        assert_eq!(report.normalized.progress, 1.0);
    }

    #[test]
    fn test_progress_not_a_number() {
        let mut draft = good_draft();
        draft.progress = Some(f64::INFINITY);
        let report = validate_profile(&draft);
        assert!(report.valid);
        assert_eq!(
            report.check(ProfileField::Progress).unwrap().message,
            "Progress must be a number"
        );
        assert_eq!(report.normalized.progress, PROGRESS_FLOOR);
    }

    #[test]
    fn test_progress_below_floor_is_advisory_failure() {
        let mut draft = good_draft();
        draft.progress = Some(0.05);
        let report = validate_profile(&draft);

        let check = report.check(ProfileField::Progress).unwrap();
        assert!(!check.passed);
        assert!(!check.critical);
        assert_eq!(check.message, "Progress below the 10% floor; saved as 10%");
        assert!(report.valid);
        assert_eq!(report.normalized.progress, 0.1);
    }

    #[test]
    fn test_progress_at_floor_passes() {
        let mut draft = good_draft();
        draft.progress = Some(PROGRESS_FLOOR);
        let check = validate_profile(&draft)
            .check(ProfileField::Progress)
            .cloned()
            .unwrap();
        assert!(check.passed);
        assert_eq!(check.message, "10%");
    }

    #[test]
    fn test_idempotent_on_normalized_record() {
        let drafts = vec![
            good_draft(),
            ProfileDraft::default(),
            ProfileDraft {
                name: "  Ana ".to_string(),
                role: "Analyst".to_string(),
                skills: "a,, b ;c; a".to_string(),
                progress: Some(1.7),
                areas_of_interest: (0..8).map(|i| format!("area{}", i)).collect(),
            },
        ];

        for draft in drafts {
            let first = validate_profile(&draft).normalized;
            let second = validate_profile(&ProfileDraft::from(&first)).normalized;
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_draft_not_mutated() {
        let draft = good_draft();
        let before = draft.clone();
        let _ = validate_profile(&draft);
        assert_eq!(draft, before);
    }
}

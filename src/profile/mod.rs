pub mod areas;
pub mod types;
pub mod validation;

pub use areas::{find_area, AREAS_OF_INTEREST};
pub use types::{Profile, ProfileDraft, ProfileEdit};
pub use validation::{
    normalize_progress, normalize_skills, validate_profile, FieldCheck, ProfileField,
    ValidationReport,
};

use crate::notifications::NotificationCenter;
use crate::routes::Route;
use crate::store::{KvStore, PROFILE_DRAFT_KEY, PROFILE_KEY};
use anyhow::Result;

/// What happened when the user asked to save their profile
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Saved(Profile),
    /// Nothing was written; the report explains why and `route` is where the
    /// user goes to fix it
    NeedsCorrection {
        report: ValidationReport,
        route: Route,
    },
    /// The normalized record was written even though critical checks failed
    SavedWithWarnings { profile: Profile, critical: usize },
}

/// Stored profile. An unreadable record is reported and treated as absent.
pub fn load_profile(store: &KvStore, notices: &mut NotificationCenter) -> Option<Profile> {
    match store.get_json::<Profile>(PROFILE_KEY) {
        Ok(profile) => profile,
        Err(e) => {
            notices.warn("Could not read saved profile", format!("{:#}", e));
            None
        }
    }
}

/// Draft being edited, falling back to the saved profile, then to an empty form
pub fn load_draft(store: &KvStore, notices: &mut NotificationCenter) -> ProfileDraft {
    match store.get_json::<ProfileDraft>(PROFILE_DRAFT_KEY) {
        Ok(Some(draft)) => return draft,
        Ok(None) => {}
        Err(e) => notices.warn("Could not read profile draft", format!("{:#}", e)),
    }
    load_profile(store, notices)
        .map(|p| ProfileDraft::from(&p))
        .unwrap_or_default()
}

pub fn save_draft(store: &mut KvStore, draft: &ProfileDraft) -> Result<()> {
    store.set_json(PROFILE_DRAFT_KEY, draft)
}

/// Validate `draft` and persist the normalized profile when it is valid.
///
/// A saved profile supersedes the draft, so the draft is cleared on success.
pub fn save_profile(store: &mut KvStore, draft: &ProfileDraft) -> Result<SaveOutcome> {
    let report = validate_profile(draft);
    if !report.valid {
        return Ok(SaveOutcome::NeedsCorrection {
            report,
            route: Route::ValidateProfile {
                draft: draft.clone(),
            },
        });
    }

    store.set_json(PROFILE_KEY, &report.normalized)?;
    store.remove(PROFILE_DRAFT_KEY)?;
    Ok(SaveOutcome::Saved(report.normalized))
}

/// Persist the normalized record whatever the report says.
///
/// Returns `Saved` for a valid draft and `SavedWithWarnings` carrying the
/// number of critical failures otherwise. The draft is cleared either way.
pub fn apply_corrections(store: &mut KvStore, draft: &ProfileDraft) -> Result<SaveOutcome> {
    let report = validate_profile(draft);
    let critical = report.critical_failures();

    store.set_json(PROFILE_KEY, &report.normalized)?;
    store.remove(PROFILE_DRAFT_KEY)?;

    if critical == 0 {
        Ok(SaveOutcome::Saved(report.normalized))
    } else {
        Ok(SaveOutcome::SavedWithWarnings {
            profile: report.normalized,
            critical,
        })
    }
}

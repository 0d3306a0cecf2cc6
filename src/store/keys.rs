//! Fixed keys of the local key-value store.
//!
//! Each key holds an independent JSON blob. Nothing enforces integrity across
//! keys: every reader decides what it trusts.

/// Raw quiz answers (question id -> option key).
pub const ANSWERS_KEY: &str = "answers";

/// Career result label computed on quiz submission.
pub const RESULT_KEY: &str = "result";

/// Normalized profile record.
pub const PROFILE_KEY: &str = "profile";

/// Profile form state while it is being edited.
pub const PROFILE_DRAFT_KEY: &str = "profileDraft";

/// Session marker written on login.
pub const USER_TOKEN_KEY: &str = "userToken";

/// Logged-in user details.
pub const USER_DATA_KEY: &str = "userData";

/// Ids of completed microcourses.
pub const SAVED_RECS_KEY: &str = "savedRecs";

/// In-app notices.
pub const NOTIFICATIONS_KEY: &str = "notifications";

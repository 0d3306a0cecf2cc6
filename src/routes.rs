//! Navigation targets with typed parameters.

use crate::auth;
use crate::profile::ProfileDraft;
use crate::store::KvStore;

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Splash,
    Login,
    Home,
    Profile,
    /// Validation report for a draft that could not be saved
    ValidateProfile { draft: ProfileDraft },
    Quiz,
    Recommendations,
    MicroCourses,
    Progress,
    About,
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Splash => "Splash",
            Route::Login => "Login",
            Route::Home => "Home",
            Route::Profile => "Profile",
            Route::ValidateProfile { .. } => "ValidateProfile",
            Route::Quiz => "Quiz",
            Route::Recommendations => "Recommendations",
            Route::MicroCourses => "MicroCourses",
            Route::Progress => "Progress",
            Route::About => "About",
        }
    }

    pub fn requires_login(&self) -> bool {
        !matches!(self, Route::Splash | Route::Login | Route::About)
    }

    /// CLI invocation that shows this route
    pub fn command_hint(&self) -> &'static str {
        match self {
            Route::Splash | Route::Home => "career-match dashboard",
            Route::Login => "career-match login",
            Route::Profile => "career-match profile show",
            Route::ValidateProfile { .. } => "career-match profile validate",
            Route::Quiz => "career-match quiz show",
            Route::Recommendations => "career-match recs",
            Route::MicroCourses => "career-match courses list",
            Route::Progress => "career-match progress",
            Route::About => "career-match about",
        }
    }
}

/// Where a fresh start lands: the login screen unless a session exists
pub fn initial_route(store: &KvStore) -> Route {
    if auth::is_logged_in(store) {
        Route::Home
    } else {
        Route::Login
    }
}

/// Resolve `target`, redirecting to login when it needs a session
pub fn guard(store: &KvStore, target: Route) -> Route {
    if target.requires_login() && !auth::is_logged_in(store) {
        Route::Login
    } else {
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::USER_TOKEN_KEY;

    #[test]
    fn test_initial_route() {
        let mut store = KvStore::in_memory();
        assert_eq!(initial_route(&store), Route::Login);

        store.set(USER_TOKEN_KEY, "authenticated").unwrap();
        assert_eq!(initial_route(&store), Route::Home);
    }

    #[test]
    fn test_guard_redirects_when_logged_out() {
        let mut store = KvStore::in_memory();
        assert_eq!(guard(&store, Route::Quiz), Route::Login);
        assert_eq!(guard(&store, Route::About), Route::About);

        store.set(USER_TOKEN_KEY, "authenticated").unwrap();
        assert_eq!(guard(&store, Route::Quiz), Route::Quiz);
    }

    #[test]
    fn test_validate_profile_carries_draft() {
        let draft = ProfileDraft {
            name: "X".to_string(),
            ..ProfileDraft::default()
        };
        let route = Route::ValidateProfile { draft: draft.clone() };
        assert_eq!(route.name(), "ValidateProfile");
        assert!(route.requires_login());
        match route {
            Route::ValidateProfile { draft: carried } => assert_eq!(carried, draft),
            _ => unreachable!(),
        }
    }
}

use crate::auth;
use crate::career::CareerCategory;
use crate::courses::CourseProgress;
use crate::notifications::NotificationCenter;
use crate::profile::load_profile;
use crate::quiz::{load_answers, load_result};
use crate::store::KvStore;

/// Name the profile form starts with before the user edits it
const PLACEHOLDER_NAME: &str = "Novo Usuário";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    TakeQuiz,
    CompleteProfile,
    StartCourse,
}

impl PendingAction {
    pub fn description(self) -> &'static str {
        match self {
            PendingAction::TakeQuiz => "Take the career quiz",
            PendingAction::CompleteProfile => "Complete your profile",
            PendingAction::StartCourse => "Finish your first microcourse",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub first_name: String,
    /// Profile progress, 0 when there is no profile
    pub progress: f64,
    pub completed_courses: usize,
    pub total_xp: u32,
    pub career: Option<CareerCategory>,
    pub pending: Vec<PendingAction>,
}

pub fn build_summary(store: &KvStore, notices: &mut NotificationCenter) -> DashboardSummary {
    let user = auth::current_user(store);
    let profile = load_profile(store, notices);
    let answers = load_answers(store, notices);
    let courses = CourseProgress::load(store, notices);

    let mut pending = Vec::new();
    if answers.is_empty() {
        pending.push(PendingAction::TakeQuiz);
    }
    let profile_incomplete = profile
        .as_ref()
        .map(|p| p.name.is_empty() || p.name == PLACEHOLDER_NAME)
        .unwrap_or(true);
    if profile_incomplete {
        pending.push(PendingAction::CompleteProfile);
    }
    if courses.completed_count() == 0 {
        pending.push(PendingAction::StartCourse);
    }

    let first_name = user
        .as_ref()
        .map(|u| u.first_name().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "User".to_string());

    DashboardSummary {
        first_name,
        progress: profile.map(|p| p.progress).unwrap_or(0.0),
        completed_courses: courses.completed_count(),
        total_xp: courses.total_xp(),
        career: load_result(store),
        pending,
    }
}

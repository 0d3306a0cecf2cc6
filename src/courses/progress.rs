use super::catalogue::{find_course, CourseArea, COURSES};
use crate::career::CareerCategory;
use crate::notifications::NotificationCenter;
use crate::store::{KvStore, SAVED_RECS_KEY};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseError {
    UnknownCourse(String),
}

impl fmt::Display for CourseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseError::UnknownCourse(id) => write!(f, "No course with id '{}'", id),
        }
    }
}

impl std::error::Error for CourseError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Completed { xp: u32 },
    AlreadyDone,
}

/// Completed course ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseProgress {
    completed: BTreeSet<String>,
}

impl CourseProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored progress. An unreadable list is reported and treated as empty.
    pub fn load(store: &KvStore, notices: &mut NotificationCenter) -> Self {
        match store.get_json::<CourseProgress>(SAVED_RECS_KEY) {
            Ok(Some(progress)) => progress,
            Ok(None) => Self::new(),
            Err(e) => {
                notices.warn("Could not read course progress", format!("{:#}", e));
                Self::new()
            }
        }
    }

    pub fn save(&self, store: &mut KvStore) -> Result<()> {
        store.set_json(SAVED_RECS_KEY, self)
    }

    pub fn complete(&mut self, id: &str) -> Result<Completion, CourseError> {
        let course = find_course(id).ok_or_else(|| CourseError::UnknownCourse(id.to_string()))?;
        if self.completed.insert(course.id.to_string()) {
            Ok(Completion::Completed { xp: course.xp })
        } else {
            Ok(Completion::AlreadyDone)
        }
    }

    pub fn is_done(&self, id: &str) -> bool {
        self.completed.contains(id)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// XP earned from completed catalogue courses; stale ids count for nothing
    pub fn total_xp(&self) -> u32 {
        self.completed
            .iter()
            .filter_map(|id| find_course(id))
            .map(|c| c.xp)
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackProgress {
    pub area: CourseArea,
    pub completed: usize,
    pub total: usize,
}

impl TrackProgress {
    /// Completed fraction in [0, 1]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

/// Completion per area, careers in declared order followed by general courses
pub fn track_progress(progress: &CourseProgress) -> Vec<TrackProgress> {
    CareerCategory::ALL
        .into_iter()
        .map(CourseArea::Career)
        .chain(std::iter::once(CourseArea::General))
        .map(|area| {
            let in_area = COURSES.iter().filter(|c| c.area == area);
            let total = in_area.clone().count();
            let completed = in_area.filter(|c| progress.is_done(c.id)).count();
            TrackProgress {
                area,
                completed,
                total,
            }
        })
        .collect()
}

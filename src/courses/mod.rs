pub mod catalogue;
pub mod filter;
pub mod progress;

pub use catalogue::{find_course, recommended_titles, Course, CourseArea, COURSES};
pub use filter::{courses_for_career, recommendations, Recommendation};
pub use progress::{track_progress, Completion, CourseError, CourseProgress, TrackProgress};

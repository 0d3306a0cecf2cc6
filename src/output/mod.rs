pub mod formatter;

pub use formatter::{
    format_age, format_bar, format_course_list, format_dashboard, format_draft,
    format_notifications, format_outcome, format_percent, format_profile, format_questions,
    format_recommendation, format_report, format_tracks, should_use_colors,
};

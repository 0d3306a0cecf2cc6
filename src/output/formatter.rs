use chrono::Duration;
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::career::QuizOutcome;
use crate::courses::{Course, CourseProgress, Recommendation, TrackProgress};
use crate::dashboard::DashboardSummary;
use crate::notifications::{badge_text, Notice, NoticeLevel};
use crate::profile::{FieldCheck, Profile, ProfileDraft, ValidationReport};
use crate::quiz::{AnswerSet, Question};

const BAR_WIDTH: usize = 20;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate title to fit available width, accounting for Unicode
fn truncate_title(title: &str, max_width: usize) -> String {
    let chars: Vec<char> = title.chars().collect();
    if chars.len() <= max_width {
        title.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Fit `title` into whatever the terminal leaves after `fixed_width` columns
fn fit_title(title: &str, fixed_width: usize) -> String {
    match get_terminal_width() {
        Some(width) if width > fixed_width + 10 => truncate_title(title, width - fixed_width),
        Some(_) => truncate_title(title, 20),
        None => title.to_string(),
    }
}

/// Format a fraction in [0, 1] as a rounded percentage
pub fn format_percent(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round() as i64)
}

/// Fixed-width progress bar; out-of-range fractions are clamped
pub fn format_bar(fraction: f64, width: usize) -> String {
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (fraction * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a duration into a human-readable age string
/// "2h" for hours, "3d" for days, "1w" for weeks
pub fn format_age(duration: Duration) -> String {
    let hours = duration.num_hours();
    let days = duration.num_days();
    let weeks = days / 7;

    if weeks >= 1 {
        format!("{}w", weeks)
    } else if days >= 1 {
        format!("{}d", days)
    } else if hours >= 1 {
        format!("{}h", hours)
    } else {
        let minutes = duration.num_minutes();
        if minutes >= 1 {
            format!("{}m", minutes)
        } else {
            "now".to_string()
        }
    }
}

/// Questions with their options, marking the current selection
pub fn format_questions(questions: &[Question], answers: &AnswerSet, use_colors: bool) -> String {
    let mut lines = Vec::new();
    for question in questions {
        let heading = format!("{}. {}", question.id, question.text);
        lines.push(if use_colors {
            heading.bold().to_string()
        } else {
            heading
        });

        let selected = answers.get(question.id);
        for option in question.options {
            let marker = if selected == Some(option.key) { "[x]" } else { "[ ]" };
            let line = format!("  {} {:<12} {}", marker, option.key, option.label);
            lines.push(if use_colors && selected == Some(option.key) {
                line.green().to_string()
            } else {
                line
            });
        }
    }
    lines.join("\n")
}

/// Career result with the per-category tally behind it
pub fn format_outcome(outcome: &QuizOutcome, use_colors: bool) -> String {
    let mut lines = Vec::new();
    let label = outcome.result.label();
    lines.push(format!(
        "Suggested area: {}",
        if use_colors {
            label.bold().cyan().to_string()
        } else {
            label.to_string()
        }
    ));

    let answered = outcome.answered.max(1) as f64;
    for (category, count) in outcome.tally.iter() {
        let bar = format_bar(count as f64 / answered, BAR_WIDTH);
        lines.push(format!("  {:<24} {} {}", category.label(), bar, count));
    }

    if outcome.unmapped > 0 {
        lines.push(format!(
            "  ({} answer{} did not count toward any area)",
            outcome.unmapped,
            if outcome.unmapped == 1 { "" } else { "s" }
        ));
    }
    lines.join("\n")
}

fn status_text(check: &FieldCheck) -> &'static str {
    if check.passed {
        "OK"
    } else if check.critical {
        "CRITICAL"
    } else {
        "WARNING"
    }
}

/// Per-field validation results plus a one-line summary
pub fn format_report(report: &ValidationReport, use_colors: bool) -> String {
    let mut lines = Vec::new();
    for check in &report.checks {
        let status = format!("{:<8}", status_text(check));
        let status = if !use_colors {
            status
        } else if check.passed {
            status.green().to_string()
        } else if check.critical {
            status.red().bold().to_string()
        } else {
            status.yellow().to_string()
        };
        lines.push(format!("{} {:<18} {}", status, check.field.label(), check.message));
    }

    let state = if report.valid { "VALIDATED" } else { "PENDING" };
    lines.push(String::new());
    lines.push(format!(
        "Status: {} · Errors: {} · Critical: {}",
        state,
        report.failures(),
        report.critical_failures()
    ));
    if !report.valid {
        lines.push("Fix the critical fields before saving.".to_string());
    }
    lines.join("\n")
}

pub fn format_profile(profile: &Profile, use_colors: bool) -> String {
    let name = if use_colors {
        profile.name.bold().to_string()
    } else {
        profile.name.clone()
    };
    format!(
        "{}\n  Role: {}\n  Skills: {}\n  Areas of interest: {}\n  Progress: {} {}",
        name,
        profile.role,
        profile.skills.join(", "),
        profile.areas_of_interest.join(", "),
        format_bar(profile.progress, BAR_WIDTH),
        format_percent(profile.progress)
    )
}

pub fn format_draft(draft: &ProfileDraft) -> String {
    let progress = draft
        .progress
        .map(|p| p.to_string())
        .unwrap_or_else(|| "(not set)".to_string());
    format!(
        "Draft\n  Name: {}\n  Role: {}\n  Skills: {}\n  Areas of interest: {}\n  Progress: {}",
        draft.name,
        draft.role,
        draft.skills,
        draft.areas_of_interest.join(", "),
        progress
    )
}

/// Course rows: id, XP, title and a done marker
pub fn format_course_list(courses: &[&Course], progress: &CourseProgress, use_colors: bool) -> String {
    if courses.is_empty() {
        return "No courses found.".to_string();
    }

    // "id" (3) + "xp" (7) + area tag (24) + separators
    let fixed_width = 3 + 1 + 7 + 2 + 24 + 2 + 4;

    courses
        .iter()
        .map(|course| {
            let done = progress.is_done(course.id);
            let marker = if done { "[x]" } else { "[ ]" };
            let title = fit_title(course.title, fixed_width);
            let line = format!(
                "{} {:>3} {:>4} XP  {:<24}  {}",
                marker,
                course.id,
                course.xp,
                course.area.to_string(),
                title
            );
            if use_colors && done {
                line.dimmed().to_string()
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_recommendation(recommendation: Option<&Recommendation>, use_colors: bool) -> String {
    let Some(rec) = recommendation else {
        return "No recommendation yet. Take the career quiz to get a suggestion.".to_string();
    };

    let label = rec.career.label();
    let mut lines = vec![format!(
        "Suggested area: {}",
        if use_colors {
            label.bold().cyan().to_string()
        } else {
            label.to_string()
        }
    )];
    lines.push("Recommended microcourses:".to_string());
    for title in rec.titles {
        lines.push(format!("  • {}", title));
    }
    lines.join("\n")
}

pub fn format_tracks(tracks: &[TrackProgress], progress: &CourseProgress) -> String {
    let mut lines: Vec<String> = tracks
        .iter()
        .map(|t| {
            format!(
                "{:<24} {} {:>4}  ({}/{})",
                t.area.to_string(),
                format_bar(t.fraction(), BAR_WIDTH),
                format_percent(t.fraction()),
                t.completed,
                t.total
            )
        })
        .collect();
    lines.push(String::new());
    lines.push(format!(
        "Completed: {} course{} · {} XP",
        progress.completed_count(),
        if progress.completed_count() == 1 { "" } else { "s" },
        progress.total_xp()
    ));
    lines.join("\n")
}

pub fn format_dashboard(summary: &DashboardSummary, unread: usize, use_colors: bool) -> String {
    let greeting = format!("Hello, {}!", summary.first_name);
    let mut lines = vec![if use_colors {
        greeting.bold().to_string()
    } else {
        greeting
    }];

    if let Some(badge) = badge_text(unread) {
        lines.push(format!("Notifications: {}", badge));
    }

    lines.push(String::new());
    lines.push(format!(
        "Profile progress:   {} {}",
        format_bar(summary.progress, BAR_WIDTH),
        format_percent(summary.progress)
    ));
    lines.push(format!(
        "Completed courses:  {} ({} XP)",
        summary.completed_courses, summary.total_xp
    ));
    lines.push(format!(
        "Suggested area:     {}",
        summary.career.map(|c| c.label()).unwrap_or("-")
    ));
    lines.push(String::new());

    if summary.pending.is_empty() {
        lines.push("You're on track. Keep exploring new tracks and microcourses.".to_string());
    } else {
        let n = summary.pending.len();
        lines.push(format!(
            "You have {} pending action{}:",
            n,
            if n == 1 { "" } else { "s" }
        ));
        for action in &summary.pending {
            lines.push(format!("  - {}", action.description()));
        }
    }
    lines.join("\n")
}

pub fn format_notifications(notices: &[Notice], use_colors: bool) -> String {
    if notices.is_empty() {
        return "No notifications.".to_string();
    }

    let now = chrono::Utc::now();
    notices
        .iter()
        .rev()
        .map(|n| {
            let tag = match n.level {
                NoticeLevel::Info => "info",
                NoticeLevel::Success => "done",
                NoticeLevel::Warning => "warn",
            };
            let tag = format!("{:<4}", tag);
            let tag = match (use_colors, n.level) {
                (false, _) => tag,
                (true, NoticeLevel::Warning) => tag.yellow().to_string(),
                (true, NoticeLevel::Success) => tag.green().to_string(),
                (true, NoticeLevel::Info) => tag.cyan().to_string(),
            };
            let unread = if n.read { " " } else { "*" };
            let age = format_age(now - n.created_at);
            if n.body.is_empty() {
                format!("{}{} {:>4}  {}", unread, tag, age, n.title)
            } else {
                format!("{}{} {:>4}  {}: {}", unread, tag, age, n.title, n.body)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

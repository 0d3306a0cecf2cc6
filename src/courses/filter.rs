use super::catalogue::{recommended_titles, Course, CourseArea, COURSES};
use crate::career::CareerCategory;

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub career: CareerCategory,
    pub titles: &'static [&'static str],
}

pub fn recommendations(result: Option<CareerCategory>) -> Option<Recommendation> {
    result.map(|career| Recommendation {
        career,
        titles: recommended_titles(career),
    })
}

/// Courses to show for a career result.
///
/// With a result: the recommended titles plus general courses, or, when a
/// career has no recommendation list, its own area plus general courses.
/// Without a result, or if the filter leaves nothing, the whole catalogue.
pub fn courses_for_career(result: Option<CareerCategory>) -> Vec<&'static Course> {
    let Some(career) = result else {
        return COURSES.iter().collect();
    };

    let titles = recommended_titles(career);
    let filtered: Vec<&'static Course> = if titles.is_empty() {
        COURSES
            .iter()
            .filter(|c| c.area == CourseArea::Career(career) || c.area == CourseArea::General)
            .collect()
    } else {
        COURSES
            .iter()
            .filter(|c| titles.contains(&c.title) || c.area == CourseArea::General)
            .collect()
    };

    if filtered.is_empty() {
        COURSES.iter().collect()
    } else {
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(courses: &[&Course]) -> Vec<&'static str> {
        courses.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_no_result_shows_everything() {
        assert_eq!(courses_for_career(None).len(), COURSES.len());
    }

    #[test]
    fn test_software_courses() {
        let courses = courses_for_career(Some(CareerCategory::Software));
        // Catalogue order: CI/CD, the three general courses, then the rest
        assert_eq!(ids(&courses), vec!["5", "11", "12", "13", "17", "18", "19", "20"]);
    }

    #[test]
    fn test_recommended_course_from_other_area_included() {
        // "Lógica de Programação" is a software course recommended for data
        let courses = courses_for_career(Some(CareerCategory::DataScience));
        assert!(courses.iter().any(|c| c.id == "17"));
        assert!(courses.iter().all(|c| c.id != "6"));
    }

    #[test]
    fn test_general_courses_always_present() {
        for career in CareerCategory::ALL {
            let courses = courses_for_career(Some(career));
            for id in ["11", "12", "13"] {
                assert!(courses.iter().any(|c| c.id == id));
            }
        }
    }

    #[test]
    fn test_recommendations() {
        assert!(recommendations(None).is_none());
        let rec = recommendations(Some(CareerCategory::UxDesign)).unwrap();
        assert_eq!(rec.titles.len(), 4);
        assert_eq!(rec.titles[0], "Fundamentos de UX Design");
    }
}

use crate::career::CareerCategory;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseArea {
    Career(CareerCategory),
    General,
}

impl fmt::Display for CourseArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseArea::Career(category) => f.write_str(category.label()),
            CourseArea::General => f.write_str("Geral"),
        }
    }
}

#[derive(Debug)]
pub struct Course {
    pub id: &'static str,
    pub title: &'static str,
    pub xp: u32,
    pub area: CourseArea,
}

macro_rules! course {
    ($id:literal, $title:literal, $xp:literal, General) => {
        Course {
            id: $id,
            title: $title,
            xp: $xp,
            area: CourseArea::General,
        }
    };
    ($id:literal, $title:literal, $xp:literal, $category:ident) => {
        Course {
            id: $id,
            title: $title,
            xp: $xp,
            area: CourseArea::Career(CareerCategory::$category),
        }
    };
}

pub static COURSES: &[Course] = &[
    course!("1", "Introdução à IA Generativa", 150, DataScience),
    course!("2", "Fundamentos de Machine Learning", 180, DataScience),
    course!("3", "Pensamento Analítico para Dados", 120, DataScience),
    course!("4", "O que é DevOps?", 140, Software),
    course!("5", "Ciclo CI/CD em 15 minutos", 160, Software),
    course!("6", "Introdução ao Docker", 180, Software),
    course!("7", "Noções básicas de Cloud AWS", 150, Software),
    course!("8", "Fundamentos de UX Design", 130, UxDesign),
    course!("9", "UI para iniciantes: Tipografia", 110, UxDesign),
    course!("10", "Criando Wireframes Rápidos", 150, UxDesign),
    course!("11", "Comunicação Empática", 120, General),
    course!("12", "Produtividade para Devs", 100, General),
    course!("13", "Resolução de Problemas", 130, General),
    course!("14", "Introdução à Gestão de Projetos", 180, ProjectManagement),
    course!("15", "Liderança para Iniciantes", 170, ProjectManagement),
    course!("16", "Métodos Ágeis e Scrum", 160, ProjectManagement),
    course!("17", "Lógica de Programação", 140, Software),
    course!("18", "Git e GitHub em 30 min", 160, Software),
    course!("19", "Introdução ao JavaScript", 150, Software),
    course!("20", "APIs para Iniciantes", 150, Software),
];

pub fn find_course(id: &str) -> Option<&'static Course> {
    COURSES.iter().find(|c| c.id == id.trim())
}

/// Course titles recommended for each career, in display order
pub fn recommended_titles(category: CareerCategory) -> &'static [&'static str] {
    match category {
        CareerCategory::Software => &[
            "Git e GitHub em 30 min",
            "Lógica de Programação",
            "Ciclo CI/CD em 15 minutos",
            "Introdução ao JavaScript",
            "APIs para Iniciantes",
        ],
        CareerCategory::UxDesign => &[
            "Fundamentos de UX Design",
            "UI para iniciantes: Tipografia",
            "Criando Wireframes Rápidos",
            "Comunicação Empática",
        ],
        CareerCategory::DataScience => &[
            "Fundamentos de Machine Learning",
            "Pensamento Analítico para Dados",
            "Introdução à IA Generativa",
            "Lógica de Programação",
        ],
        CareerCategory::ProjectManagement => &[
            "Introdução à Gestão de Projetos",
            "Métodos Ágeis e Scrum",
            "Comunicação Empática",
            "Resolução de Problemas",
        ],
    }
}

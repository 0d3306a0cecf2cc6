/// Areas offered by the profile picker
pub const AREAS_OF_INTEREST: &[&str] = &[
    "Inteligência Artificial",
    "Desenvolvimento Web",
    "Desenvolvimento Mobile",
    "Ciência de Dados",
    "DevOps",
    "UX/UI Design",
    "Gestão de Projetos",
    "Marketing Digital",
    "Sustentabilidade",
    "Soft Skills",
    "Cloud Computing",
    "Cybersecurity",
];

/// Catalogue entry matching `area` case-insensitively
pub fn find_area(area: &str) -> Option<&'static str> {
    let wanted = area.trim().to_lowercase();
    AREAS_OF_INTEREST
        .iter()
        .copied()
        .find(|a| a.to_lowercase() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_area() {
        assert_eq!(find_area("devops"), Some("DevOps"));
        assert_eq!(find_area(" inteligência artificial "), Some("Inteligência Artificial"));
        assert_eq!(find_area("Astrology"), None);
    }
}

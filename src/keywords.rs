//! Placeholder keyword source
//!
//! No collection pipeline exists; this static set stands in for raw Google
//! Trends keywords from the Angola region until one does.

/// Seed keywords representative of current Angolan search trends.
pub const SEED_KEYWORDS: &[&str] = &[
    "iphone 15 pro max luanda",
    "preço de fuba de milho",
    "venda de carros usados angola",
    "roupas de fardo atacado",
    "perucas humanas baratas",
    "melhores paineis solares",
    "venda de geradores a diesel",
    "cremes clareadores para pele",
    "cursos de marketing digital angola",
    "smart tv samsung 55 polegadas",
    "sapatilhas nike originais",
    "materiais de construção preços",
];

/// Owned copy of the seed keyword list.
pub fn seed_keywords() -> Vec<String> {
    SEED_KEYWORDS.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_keywords_non_empty() {
        let keywords = seed_keywords();
        assert_eq!(keywords.len(), SEED_KEYWORDS.len());
        assert!(keywords.iter().all(|k| !k.is_empty()));
    }
}

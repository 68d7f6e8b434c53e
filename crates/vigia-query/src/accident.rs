//! Accident-type extraction.

use std::sync::LazyLock;

use regex::Regex;
use vigia_core::{AccidentType, KeywordGroup};

use crate::error::QueryError;
use crate::normalize::normalize;
use crate::tables;

static BUILTIN: LazyLock<AccidentMatcher> = LazyLock::new(|| {
    AccidentMatcher::from_groups(&tables::accident_keywords())
        .expect("built-in keyword table compiles")
});

/// Ordered `(pattern, category)` rules, evaluated first-match-wins.
#[derive(Debug, Clone)]
pub struct AccidentMatcher {
    rules: Vec<(Regex, AccidentType)>,
}

impl Default for AccidentMatcher {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

impl AccidentMatcher {
    /// Compile keyword groups into whole-word patterns.
    ///
    /// Keywords are normalized and escaped, so `"Colisión"` and `"colision"`
    /// are the same keyword.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyKeywordGroup`] if a group has no non-blank
    /// keyword, or [`QueryError::Regex`] if the compiled pattern is rejected.
    pub fn from_groups(groups: &[KeywordGroup]) -> Result<Self, QueryError> {
        let rules = groups
            .iter()
            .map(|group| {
                let alternatives = group
                    .keywords
                    .iter()
                    .map(|keyword| normalize(keyword.trim()))
                    .filter(|keyword| !keyword.is_empty())
                    .map(|keyword| regex::escape(&keyword))
                    .collect::<Vec<_>>();

                if alternatives.is_empty() {
                    return Err(QueryError::EmptyKeywordGroup {
                        category: group.category.to_string(),
                    });
                }

                let pattern = format!(r"\b(?:{})\b", alternatives.join("|"));
                Ok((Regex::new(&pattern)?, group.category))
            })
            .collect::<Result<Vec<_>, QueryError>>()?;

        Ok(Self { rules })
    }

    /// Category of the first matching keyword group, if any.
    #[must_use]
    pub fn find(&self, text: &str) -> Option<AccidentType> {
        let normalized = normalize(text);
        self.rules
            .iter()
            .find(|(pattern, _)| pattern.is_match(&normalized))
            .map(|(_, category)| *category)
    }

    /// Category of the first matching keyword group, else `colision`.
    #[must_use]
    pub fn classify(&self, text: &str) -> AccidentType {
        self.find(text).unwrap_or_default()
    }
}

/// Classify `text` with the built-in keyword table.
#[must_use]
pub fn extract_accident_type(text: &str) -> AccidentType {
    BUILTIN.classify(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Choque en Alameda", AccidentType::Colision)]
    #[case("una colisión múltiple", AccidentType::Colision)]
    #[case("COLISION frontal", AccidentType::Colision)]
    #[case("atropello de peatón", AccidentType::Atropello)]
    #[case("riesgo de ATROPELLAR ciclistas", AccidentType::Atropello)]
    #[case("Volcamiento de camión", AccidentType::Volcamiento)]
    #[case("puede volcar el bus", AccidentType::Volcamiento)]
    #[case("incendio vehicular", AccidentType::Incendio)]
    #[case("despiste en curva", AccidentType::Despiste)]
    #[case("salida de vía en la ruta 68", AccidentType::Despiste)]
    fn recognizes_keywords(#[case] text: &str, #[case] expected: AccidentType) {
        assert_eq!(extract_accident_type(text), expected);
    }

    #[test]
    fn defaults_to_colision() {
        assert_eq!(extract_accident_type("riesgo en Maipú mañana"), AccidentType::Colision);
        assert_eq!(extract_accident_type(""), AccidentType::Colision);
    }

    #[test]
    fn requires_whole_words() {
        // "incendios" is not the keyword "incendio".
        assert_eq!(AccidentMatcher::default().find("incendios forestales"), None);
        assert_eq!(AccidentMatcher::default().find("choques"), None);
    }

    #[test]
    fn earlier_group_wins() {
        let text = "incendio tras un atropello";
        assert_eq!(extract_accident_type(text), AccidentType::Atropello);
    }

    #[test]
    fn custom_groups_are_additive() {
        let mut groups = tables::accident_keywords();
        groups.push(KeywordGroup::new(AccidentType::Despiste, &["derrape"]));
        let matcher = AccidentMatcher::from_groups(&groups).unwrap();
        assert_eq!(matcher.classify("un derrape en la costanera"), AccidentType::Despiste);
        assert_eq!(matcher.classify("choque"), AccidentType::Colision);
    }

    #[test]
    fn keywords_are_escaped() {
        let groups = vec![KeywordGroup::new(AccidentType::Despiste, &["km.5"])];
        let matcher = AccidentMatcher::from_groups(&groups).unwrap();
        assert_eq!(matcher.find("en el km.5 de la ruta"), Some(AccidentType::Despiste));
        assert_eq!(matcher.find("en el km45 de la ruta"), None);
    }

    #[test]
    fn empty_group_is_rejected() {
        let groups = vec![KeywordGroup::new(AccidentType::Incendio, &["  "])];
        let err = AccidentMatcher::from_groups(&groups).unwrap_err();
        assert!(matches!(err, QueryError::EmptyKeywordGroup { ref category } if category == "incendio"));
    }
}

//! Comuna / region extraction.

use std::sync::LazyLock;

use vigia_core::ComunaAlias;

use crate::error::QueryError;
use crate::normalize::normalize;
use crate::tables;

static BUILTIN: LazyLock<PlaceMatcher> = LazyLock::new(|| {
    PlaceMatcher::from_aliases(&tables::comuna_aliases(), Location::default())
        .expect("built-in alias table compiles")
});

/// Canonical `(comuna, region)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub comuna: String,
    pub region: String,
}

impl Location {
    #[must_use]
    pub fn new(comuna: &str, region: &str) -> Self {
        Self {
            comuna: comuna.to_string(),
            region: region.to_string(),
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new(tables::DEFAULT_COMUNA, tables::METROPOLITANA)
    }
}

/// Ordered alias table, evaluated first-match-wins by substring containment.
#[derive(Debug, Clone)]
pub struct PlaceMatcher {
    aliases: Vec<(String, Location)>,
    fallback: Location,
}

impl Default for PlaceMatcher {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

impl PlaceMatcher {
    /// Build a matcher from alias entries. Alias keys are normalized.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyAlias`] if an alias normalizes to the empty
    /// string, which would match every query.
    pub fn from_aliases(entries: &[ComunaAlias], fallback: Location) -> Result<Self, QueryError> {
        let aliases = entries
            .iter()
            .map(|entry| {
                let key = normalize(entry.alias.trim());
                if key.is_empty() {
                    return Err(QueryError::EmptyAlias {
                        comuna: entry.comuna.clone(),
                    });
                }
                Ok((key, Location::new(&entry.comuna, &entry.region)))
            })
            .collect::<Result<Vec<_>, QueryError>>()?;

        Ok(Self { aliases, fallback })
    }

    /// Location of the first alias contained in `text`, if any.
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Location> {
        let normalized = normalize(text);
        self.aliases
            .iter()
            .find(|(key, _)| normalized.contains(key.as_str()))
            .map(|(_, location)| location)
    }

    /// Location of the first alias contained in `text`, else the fallback.
    #[must_use]
    pub fn locate(&self, text: &str) -> Location {
        self.find(text).unwrap_or(&self.fallback).clone()
    }

    #[must_use]
    pub const fn fallback(&self) -> &Location {
        &self.fallback
    }
}

/// Locate `text` with the built-in alias table.
#[must_use]
pub fn extract_comuna_region(text: &str) -> Location {
    BUILTIN.locate(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("accidentes en Alameda", "SANTIAGO")]
    #[case("Santiago Centro de noche", "SANTIAGO")]
    #[case("avenida Providencia", "PROVIDENCIA")]
    #[case("LAS CONDES", "LAS CONDES")]
    #[case("en Maipú", "MAIPU")]
    #[case("plaza Ñuñoa", "NUÑOA")]
    #[case("La Florida", "LA FLORIDA")]
    #[case("Curacaví", "CURACAVI")]
    #[case("Tiltil", "TILTIL")]
    #[case("Isla de Maipo", "ISLA DE MAIPO")]
    fn resolves_aliases(#[case] text: &str, #[case] comuna: &str) {
        assert_eq!(
            extract_comuna_region(text),
            Location::new(comuna, "METROPOLITANA")
        );
    }

    #[test]
    fn unknown_place_uses_default() {
        assert_eq!(extract_comuna_region("Valparaíso"), Location::default());
        assert_eq!(extract_comuna_region(""), Location::default());
    }

    #[test]
    fn declaration_order_wins() {
        // "santiago" precedes "providencia" in the table.
        let location = extract_comuna_region("Providencia, Santiago");
        assert_eq!(location.comuna, "SANTIAGO");
    }

    #[test]
    fn containment_is_substring_based() {
        // No word boundary: "pirquen" still contains "pirque".
        assert_eq!(extract_comuna_region("pirquen").comuna, "PIRQUE");
    }

    #[test]
    fn custom_fallback_and_aliases() {
        let aliases = vec![ComunaAlias::new("Viña", "VIÑA DEL MAR", "VALPARAISO")];
        let matcher =
            PlaceMatcher::from_aliases(&aliases, Location::new("VALPARAISO", "VALPARAISO")).unwrap();
        assert_eq!(matcher.locate("playa en viña"), Location::new("VIÑA DEL MAR", "VALPARAISO"));
        assert_eq!(matcher.locate("Alameda"), Location::new("VALPARAISO", "VALPARAISO"));
    }

    #[test]
    fn blank_alias_is_rejected() {
        let aliases = vec![ComunaAlias::new(" ", "NADA", "METROPOLITANA")];
        assert!(matches!(
            PlaceMatcher::from_aliases(&aliases, Location::default()),
            Err(QueryError::EmptyAlias { .. })
        ));
    }
}

//! Built-in lookup tables.
//!
//! Declaration order is evaluation order. More specific aliases must come
//! before the shorter ones they contain (`"santiago centro"` before
//! `"santiago"`).

use vigia_core::{AccidentType, ComunaAlias, KeywordGroup};

/// Region every built-in alias resolves to.
pub const METROPOLITANA: &str = "METROPOLITANA";

/// Comuna used when no alias matches.
pub const DEFAULT_COMUNA: &str = "SANTIAGO";

/// Accident keyword groups, in priority order.
#[must_use]
pub fn accident_keywords() -> Vec<KeywordGroup> {
    vec![
        KeywordGroup::new(AccidentType::Colision, &["choque", "colision"]),
        KeywordGroup::new(AccidentType::Atropello, &["atropello", "atropellar"]),
        KeywordGroup::new(AccidentType::Volcamiento, &["volcamiento", "volcar"]),
        KeywordGroup::new(AccidentType::Incendio, &["incendio"]),
        KeywordGroup::new(AccidentType::Despiste, &["despiste", "salida de via"]),
    ]
}

/// Place-name aliases, in priority order.
#[must_use]
pub fn comuna_aliases() -> Vec<ComunaAlias> {
    [
        ("alameda", "SANTIAGO"),
        ("santiago centro", "SANTIAGO"),
        ("santiago", "SANTIAGO"),
        ("providencia", "PROVIDENCIA"),
        ("las condes", "LAS CONDES"),
        ("maipu", "MAIPU"),
        ("nunoa", "NUÑOA"),
        ("la florida", "LA FLORIDA"),
        ("lo espejo", "LO ESPEJO"),
        ("curacavi", "CURACAVI"),
        ("pirque", "PIRQUE"),
        ("tiltil", "TILTIL"),
        ("isla de maipo", "ISLA DE MAIPO"),
    ]
    .into_iter()
    .map(|(alias, comuna)| ComunaAlias::new(alias, comuna, METROPOLITANA))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accident_groups_cover_every_category_in_order() {
        let categories = accident_keywords()
            .into_iter()
            .map(|group| group.category)
            .collect::<Vec<_>>();
        assert_eq!(categories, AccidentType::ALL.to_vec());
    }

    #[test]
    fn aliases_are_already_normalized() {
        for entry in comuna_aliases() {
            assert_eq!(crate::normalize(&entry.alias), entry.alias);
            assert_eq!(entry.region, METROPOLITANA);
        }
    }
}

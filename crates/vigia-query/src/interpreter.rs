use chrono::{NaiveDate, Utc};
use vigia_core::StructuredRequest;

use crate::accident::AccidentMatcher;
use crate::date::extract_date_or;
use crate::place::PlaceMatcher;

/// Composes the field extractors into a [`StructuredRequest`].
///
/// Always produces a complete request: a field that cannot be read from the
/// text takes its extractor's fallback.
#[derive(Debug, Clone, Default)]
pub struct QueryInterpreter {
    accidents: AccidentMatcher,
    places: PlaceMatcher,
}

impl QueryInterpreter {
    #[must_use]
    pub const fn new(accidents: AccidentMatcher, places: PlaceMatcher) -> Self {
        Self { accidents, places }
    }

    /// Interpret `raw`, falling back to today's UTC date.
    #[must_use]
    pub fn interpret(&self, raw: &str) -> StructuredRequest {
        self.interpret_on(raw, Utc::now().date_naive())
    }

    /// Interpret `raw`, falling back to `today` when no date is written.
    #[must_use]
    pub fn interpret_on(&self, raw: &str, today: NaiveDate) -> StructuredRequest {
        let location = self.places.locate(raw);
        StructuredRequest {
            comuna: location.comuna,
            region: location.region,
            tipo_accidente: self.accidents.classify(raw),
            fecha: extract_date_or(raw, today),
            prompt: raw.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vigia_core::AccidentType;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    #[test]
    fn interprets_dashboard_sample_query() {
        let raw = "  Quiero saber el riesgo de accidentes en Alameda el 23/09/2025 ";
        let request = QueryInterpreter::default().interpret_on(raw, today());
        assert_eq!(
            request,
            StructuredRequest {
                comuna: "SANTIAGO".into(),
                region: "METROPOLITANA".into(),
                tipo_accidente: AccidentType::Colision,
                fecha: "2025-09-23".into(),
                prompt: "Quiero saber el riesgo de accidentes en Alameda el 23/09/2025".into(),
            }
        );
    }

    #[test]
    fn empty_query_degrades_to_defaults() {
        let request = QueryInterpreter::default().interpret_on("", today());
        assert_eq!(request.comuna, "SANTIAGO");
        assert_eq!(request.region, "METROPOLITANA");
        assert_eq!(request.tipo_accidente, AccidentType::Colision);
        assert_eq!(request.fecha, "2026-10-14");
        assert_eq!(request.prompt, "");
    }

    #[test]
    fn each_field_is_extracted_independently() {
        let raw = "atropellos no, pero ¿incendio en Ñuñoa el 2025-12-31?";
        let request = QueryInterpreter::default().interpret_on(raw, today());
        assert_eq!(request.comuna, "NUÑOA");
        assert_eq!(request.tipo_accidente, AccidentType::Incendio);
        assert_eq!(request.fecha, "2025-12-31");
    }
}

use anyhow::Context;
use vigia_advisor::Advisor;
use vigia_client::RiskClient;
use vigia_config::{ApiConfig, QueryConfig, VigiaConfig};
use vigia_query::{AccidentMatcher, Location, PlaceMatcher, QueryInterpreter, tables};
use vigia_session::Session;

use crate::cli::GlobalFlags;

/// Load layered configuration, applying `--api-url` on top.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<VigiaConfig> {
    let mut config =
        VigiaConfig::load_with_dotenv().context("failed to load vigia configuration")?;

    if let Some(url) = &flags.api_url {
        config.api.base_url.clone_from(url);
        config
            .validate()
            .context("invalid --api-url override")?;
    }

    tracing::debug!(
        origin = config.api.origin(),
        timeout_secs = config.api.timeout_secs,
        ranking_limit = ?config.api.ranking_limit,
        "configuration loaded"
    );
    Ok(config)
}

/// Compile the configured lookup tables; empty tables mean the built-in ones.
pub fn interpreter(config: &QueryConfig) -> anyhow::Result<QueryInterpreter> {
    let accidents = if config.uses_builtin_keywords() {
        AccidentMatcher::default()
    } else {
        AccidentMatcher::from_groups(&config.accident_keywords)
            .context("invalid query.accident_keywords")?
    };

    let fallback = Location::new(&config.default_comuna, &config.default_region);
    let places = if config.uses_builtin_aliases() {
        PlaceMatcher::from_aliases(&tables::comuna_aliases(), fallback)
    } else {
        PlaceMatcher::from_aliases(&config.comuna_aliases, fallback)
    }
    .context("invalid query.comuna_aliases")?;

    Ok(QueryInterpreter::new(accidents, places))
}

pub fn client(config: &ApiConfig) -> anyhow::Result<RiskClient> {
    let client = RiskClient::new(config.origin(), config.timeout())
        .context("failed to build scoring service client")?;
    Ok(client.with_ranking_limit(config.ranking_limit))
}

/// Assemble a session from configuration.
pub fn session(config: &VigiaConfig) -> anyhow::Result<Session<RiskClient>> {
    Ok(Session::new(client(&config.api)?)
        .with_interpreter(interpreter(&config.query)?)
        .with_advisor(Advisor::new(config.advisor.max_drivers)))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use vigia_core::{AccidentType, ComunaAlias, KeywordGroup};

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    #[test]
    fn default_tables_are_builtin() {
        let interpreter = interpreter(&QueryConfig::default()).unwrap();
        let request = interpreter.interpret_on("volcamiento en Las Condes", today());
        assert_eq!(request.comuna, "LAS CONDES");
        assert_eq!(request.tipo_accidente, AccidentType::Volcamiento);
    }

    #[test]
    fn configured_tables_replace_builtin() {
        let config = QueryConfig {
            comuna_aliases: vec![ComunaAlias::new("costanera", "VITACURA", "METROPOLITANA")],
            accident_keywords: vec![KeywordGroup::new(AccidentType::Atropello, &["peaton"])],
            ..QueryConfig::default()
        };
        let interpreter = interpreter(&config).unwrap();

        let request = interpreter.interpret_on("peaton en Costanera", today());
        assert_eq!(request.comuna, "VITACURA");
        assert_eq!(request.tipo_accidente, AccidentType::Atropello);

        // Built-in aliases are no longer consulted.
        let request = interpreter.interpret_on("choque en Providencia", today());
        assert_eq!(request.comuna, "SANTIAGO");
        assert_eq!(request.tipo_accidente, AccidentType::Colision);
    }

    #[test]
    fn configured_fallback_location_is_used() {
        let config = QueryConfig {
            default_comuna: "VALPARAISO".into(),
            default_region: "VALPARAISO".into(),
            ..QueryConfig::default()
        };
        let request = interpreter(&config).unwrap().interpret_on("riesgo hoy", today());
        assert_eq!(request.comuna, "VALPARAISO");
        assert_eq!(request.region, "VALPARAISO");
    }

    #[test]
    fn empty_alias_is_rejected() {
        let config = QueryConfig {
            comuna_aliases: vec![ComunaAlias::new("  ", "SANTIAGO", "METROPOLITANA")],
            ..QueryConfig::default()
        };
        assert!(interpreter(&config).is_err());
    }

    #[test]
    fn client_uses_configured_origin() {
        let config = ApiConfig {
            base_url: "http://98.95.87.20/".into(),
            ..ApiConfig::default()
        };
        assert_eq!(client(&config).unwrap().origin(), "http://98.95.87.20");
    }
}

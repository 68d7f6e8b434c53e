//! Dashboard views over [`SessionState`].
//!
//! JSON and raw output serialize the state as-is. The table view renders one
//! section per panel.

use vigia_core::{ComunaRanking, Kpi, Proposal, TemporalSeries};
use vigia_session::{CallState, SessionState};

use super::table::{TableOptions, render_table};
use super::{render, table_options};
use crate::cli::OutputFormat;

/// Render the prediction panels: KPI, proposals and temporal series.
pub fn render_advisory(state: &SessionState, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(advisory_sections(state, table_options()).join("\n\n")),
        OutputFormat::Json | OutputFormat::Raw => render(state, format),
    }
}

/// Render the ranking panel.
pub fn render_ranking(state: &SessionState, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(ranking_section(state, table_options())),
        OutputFormat::Json | OutputFormat::Raw => render(&state.ranking, format),
    }
}

/// Render every panel.
pub fn render_dashboard(state: &SessionState, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => {
            let options = table_options();
            let mut sections = advisory_sections(state, options);
            sections.push(ranking_section(state, options));
            Ok(sections.join("\n\n"))
        }
        OutputFormat::Json | OutputFormat::Raw => render(state, format),
    }
}

fn advisory_sections(state: &SessionState, options: TableOptions) -> Vec<String> {
    let mut sections = Vec::with_capacity(4);
    if !state.query.is_empty() {
        sections.push(format!("Consulta: {}", state.query));
    }
    if let Some(status) = call_status(&state.prediction) {
        sections.push(status);
    }
    sections.push(titled("KPI", kpi_table(&state.kpi, options)));
    sections.push(titled("Propuestas", proposals_table(&state.proposals, options)));
    if let Some(temporal) = &state.temporal {
        sections.push(titled("Serie temporal", series_table(temporal, options)));
    }
    sections
}

fn ranking_section(state: &SessionState, options: TableOptions) -> String {
    let table = titled("Ranking de comunas", ranking_table(&state.ranking, options));
    match call_status(&state.ranking_call) {
        Some(status) => format!("{status}\n{table}"),
        None => table,
    }
}

fn call_status(call: &CallState) -> Option<String> {
    if call.loading {
        Some(String::from("Cargando..."))
    } else {
        call.error.as_ref().map(|error| format!("Error: {error}"))
    }
}

fn titled(title: &str, body: String) -> String {
    format!("{title}\n{body}")
}

fn kpi_table(kpi: &Kpi, options: TableOptions) -> String {
    let rows = [
        ("accidentes", kpi.accidents),
        ("victimas", kpi.victims),
        ("mejoras", kpi.improvements),
    ]
    .into_iter()
    .map(|(name, value)| {
        vec![
            name.to_string(),
            value.value.to_string(),
            format!("{:.1}", value.delta_pct),
        ]
    })
    .collect::<Vec<_>>();
    render_table(&["indicador", "valor", "delta_pct"], &rows, options)
}

fn proposals_table(proposals: &[Proposal], options: TableOptions) -> String {
    if proposals.is_empty() {
        return String::from("(sin propuestas)");
    }
    let rows = proposals
        .iter()
        .map(|proposal| {
            vec![
                proposal.id.clone(),
                proposal.title.clone(),
                proposal.priority.to_string(),
                format!("{}%", proposal.expected_impact_pct),
                proposal.eta.clone(),
                proposal.cost.clone(),
            ]
        })
        .collect::<Vec<_>>();
    render_table(
        &["id", "titulo", "prioridad", "impacto", "plazo", "costo"],
        &rows,
        options,
    )
}

fn series_table(series: &TemporalSeries, options: TableOptions) -> String {
    let rows = series
        .score_series
        .iter()
        .map(|point| vec![point.t.clone(), format!("{:.3}", point.v)])
        .collect::<Vec<_>>();
    render_table(&["t", "score"], &rows, options)
}

fn ranking_table(ranking: &[ComunaRanking], options: TableOptions) -> String {
    if ranking.is_empty() {
        return String::from("(sin datos)");
    }
    let rows = ranking
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            vec![
                (index + 1).to_string(),
                entry.comuna.clone(),
                format!("{:.3}", entry.auroc),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&["#", "comuna", "auroc"], &rows, options)
}

#[cfg(test)]
mod tests {
    use vigia_core::{KpiValue, Priority, ScorePoint};

    use super::*;

    fn populated() -> SessionState {
        SessionState {
            query: "choque en Maipu".into(),
            kpi: Kpi {
                accidents: KpiValue::flat(64),
                victims: KpiValue::flat(16),
                improvements: KpiValue::flat(0),
            },
            proposals: vec![Proposal {
                id: "p0".into(),
                title: "Comuna".into(),
                description: "Comuna: MAIPU".into(),
                priority: Priority::Alta,
                expected_impact_pct: 64,
                eta: "2-4 semanas".into(),
                cost: "$1000".into(),
                tech_details: "Análisis técnico preliminar".into(),
            }],
            temporal: Some(TemporalSeries {
                score_series: vec![ScorePoint {
                    t: "2025-09-23T10:00:00".into(),
                    v: 0.64,
                }],
            }),
            ranking: vec![ComunaRanking {
                comuna: "CURACAVI".into(),
                auroc: 0.99,
            }],
            ..SessionState::default()
        }
    }

    #[test]
    fn table_dashboard_has_every_panel() {
        let out = render_dashboard(&populated(), OutputFormat::Table).unwrap();
        assert!(out.starts_with("Consulta: choque en Maipu"));
        for title in ["KPI", "Propuestas", "Serie temporal", "Ranking de comunas"] {
            assert!(out.contains(title), "missing section {title}");
        }
        assert!(out.contains("accidentes"));
        assert!(out.contains("CURACAVI"));
        assert!(out.contains("64%"));
    }

    #[test]
    fn empty_state_shows_placeholders() {
        let out = render_dashboard(&SessionState::default(), OutputFormat::Table).unwrap();
        assert!(out.contains("(sin propuestas)"));
        assert!(out.contains("(sin datos)"));
        assert!(!out.contains("Serie temporal"));
    }

    #[test]
    fn errors_are_shown_per_panel() {
        let mut state = populated();
        state.ranking_call.error = Some("No se pudo obtener el ranking de comunas.".into());
        let out = render_ranking(&state, OutputFormat::Table).unwrap();
        assert!(out.starts_with("Error: No se pudo obtener el ranking de comunas."));
        // The stale list stays visible below the error.
        assert!(out.contains("CURACAVI"));
    }

    #[test]
    fn json_ranking_is_the_list() {
        let out = render_ranking(&populated(), OutputFormat::Raw).unwrap();
        assert_eq!(out, r#"[{"comuna":"CURACAVI","auroc":0.99}]"#);
    }
}

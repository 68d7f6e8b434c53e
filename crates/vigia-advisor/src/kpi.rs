//! KPI and temporal derivations.

use chrono::{DateTime, SecondsFormat, Utc};
use vigia_core::{Kpi, KpiValue, ScorePoint, TemporalSeries};

use crate::rounding::round_half_up;

/// Risk level that counts as one applied improvement.
pub const HIGH_RISK_LEVEL: &str = "Alto";

/// KPI snapshot for one prediction. Deltas are not computed from history.
///
/// The level comparison is exact: `"ALTO"` does not count as `"Alto"`.
#[must_use]
pub fn derive_kpi(score: f64, level: &str) -> Kpi {
    Kpi {
        accidents: KpiValue::flat(round_half_up(score * 100.0)),
        victims: KpiValue::flat(round_half_up(score * 25.0)),
        improvements: KpiValue::flat(i64::from(level == HIGH_RISK_LEVEL)),
    }
}

/// Single-point series at the response timestamp, or `now` if it has none.
#[must_use]
pub fn score_series(timestamp: Option<&str>, score: f64, now: DateTime<Utc>) -> TemporalSeries {
    let t = timestamp.map_or_else(
        || now.to_rfc3339_opts(SecondsFormat::Millis, true),
        str::to_string,
    );
    TemporalSeries {
        score_series: vec![ScorePoint { t, v: score }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn kpi_scales_score() {
        let kpi = derive_kpi(0.72, "Alto");
        assert_eq!(kpi.accidents, KpiValue::flat(72));
        assert_eq!(kpi.victims, KpiValue::flat(18));
        assert_eq!(kpi.improvements, KpiValue::flat(1));
    }

    #[test]
    fn improvements_need_exact_level() {
        assert_eq!(derive_kpi(0.9, "ALTO").improvements.value, 0);
        assert_eq!(derive_kpi(0.9, "Medio").improvements.value, 0);
    }

    #[test]
    fn kpi_rounds_half_up() {
        // 0.1 * 25 = 2.5
        assert_eq!(derive_kpi(0.1, "Bajo").victims.value, 3);
        assert_eq!(derive_kpi(0.0, "Bajo"), Kpi::default());
    }

    #[test]
    fn series_prefers_response_timestamp() {
        let now = Utc.with_ymd_and_hms(2026, 10, 14, 12, 0, 0).unwrap();
        let series = score_series(Some("2025-09-23T10:00:00"), 0.4, now);
        assert_eq!(
            series.score_series,
            vec![ScorePoint { t: "2025-09-23T10:00:00".into(), v: 0.4 }]
        );
    }

    #[test]
    fn series_falls_back_to_now() {
        let now = Utc.with_ymd_and_hms(2026, 10, 14, 12, 0, 0).unwrap();
        let series = score_series(None, 0.4, now);
        assert_eq!(series.score_series[0].t, "2026-10-14T12:00:00.000Z");
    }
}

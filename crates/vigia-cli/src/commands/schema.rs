use schemars::schema_for;
use vigia_core::{
    ComunaRanking, CriticalPoint, CriticalRoute, Kpi, PredictionResponse, Proposal,
    ServiceStatus, StructuredRequest, TemporalSeries,
};

use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `vigia schema`. Schemas are always printed as JSON.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name {
        SchemaType::Request => schema_for!(StructuredRequest),
        SchemaType::Prediction => schema_for!(PredictionResponse),
        SchemaType::Ranking => schema_for!(Vec<ComunaRanking>),
        SchemaType::Status => schema_for!(ServiceStatus),
        SchemaType::Proposal => schema_for!(Proposal),
        SchemaType::Kpi => schema_for!(Kpi),
        SchemaType::Temporal => schema_for!(TemporalSeries),
        SchemaType::Point => schema_for!(CriticalPoint),
        SchemaType::Route => schema_for!(CriticalRoute),
    };

    let format = match flags.format {
        OutputFormat::Raw => OutputFormat::Raw,
        OutputFormat::Json | OutputFormat::Table => OutputFormat::Json,
    };
    output(&schema, format)
}

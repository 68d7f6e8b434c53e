use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Ask one risk question and print the resulting advisory.
    Ask(AskArgs),
    /// Show the structured request a question would produce (no network).
    Interpret(InterpretArgs),
    /// Fetch the comuna ranking.
    Ranking,
    /// Probe the scoring service status.
    Status,
    /// Interactive session: one question per line.
    Session(SessionArgs),
    /// Print the JSON Schema of a wire type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AskArgs {
    /// Free-text question, e.g. "riesgo en Alameda el 23/09/2025".
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

impl AskArgs {
    #[must_use]
    pub fn query(&self) -> String {
        self.text.join(" ")
    }
}

#[derive(Clone, Debug, Args)]
pub struct InterpretArgs {
    /// Free-text question.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Date used when the question names none (defaults to today, UTC).
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,
}

impl InterpretArgs {
    #[must_use]
    pub fn query(&self) -> String {
        self.text.join(" ")
    }
}

#[derive(Clone, Debug, Args)]
pub struct SessionArgs {
    /// Question submitted together with the initial ranking fetch.
    #[arg(long)]
    pub query: Option<String>,
}

/// Wire types with an exported schema.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Request,
    Prediction,
    Ranking,
    Status,
    Proposal,
    Kpi,
    Temporal,
    Point,
    Route,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub type_name: SchemaType,
}

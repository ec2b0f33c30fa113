/// Errors surfaced by the parsing and lookup entry points.
///
/// Everything past parsing (eligibility, reducer, grid generation) is total
/// and never returns one of these.
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Unknown locale '{0}'")]
    UnknownLocale(String),
    #[error("Invalid calendar configuration: {0}")]
    Config(#[from] serde_json::Error),
}

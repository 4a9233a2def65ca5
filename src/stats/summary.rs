//! Roster Summary Module
//! Aggregates shown on the metric cards.

use crate::data::loader::is_numeric_dtype;
use crate::data::schema;
use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Missing column: {0}")]
    MissingColumn(String),
    #[error("Column {0} is not numeric")]
    NotNumeric(String),
}

/// Headline figures for the whole roster.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterSummary {
    pub players: usize,
    pub mean_age: f64,
    pub mean_height: f64,
    pub total_matches: i64,
    pub total_points: i64,
}

impl RosterSummary {
    pub fn age_label(&self) -> String {
        format!("{:.1} years", self.mean_age)
    }

    pub fn height_label(&self) -> String {
        format!("{:.1} cm", self.mean_height)
    }
}

/// Fetch a column and make sure it holds numbers.
fn numeric_series<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Series, StatsError> {
    let column = df
        .column(name)
        .map_err(|_| StatsError::MissingColumn(name.to_string()))?;
    if !is_numeric_dtype(column.dtype()) {
        return Err(StatsError::NotNumeric(name.to_string()));
    }
    Ok(column.as_materialized_series())
}

/// Arithmetic mean of a numeric column, NaN when every cell is null.
pub fn column_mean(df: &DataFrame, name: &str) -> Result<f64, StatsError> {
    Ok(numeric_series(df, name)?.mean().unwrap_or(f64::NAN))
}

/// Integer sum of a numeric column; fractional values are truncated.
pub fn column_sum(df: &DataFrame, name: &str) -> Result<i64, StatsError> {
    let series = numeric_series(df, name)?.cast(&DataType::Int64)?;
    Ok(series.i64()?.sum().unwrap_or(0))
}

/// Compute the metric-card aggregates.
pub fn summarize(df: &DataFrame) -> Result<RosterSummary, StatsError> {
    Ok(RosterSummary {
        players: df.height(),
        mean_age: column_mean(df, schema::AGE)?,
        mean_height: column_mean(df, schema::HEIGHT)?,
        total_matches: column_sum(df, schema::MATCHES_PLAYED)?,
        total_points: column_sum(df, schema::POINTS_SCORED)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> DataFrame {
        df!(
            "idade" => [20i64, 22, 24],
            "altura_cm" => [190.0f64, 185.0, 201.0],
            "partidas_jogadas" => [12i64, 10, 15],
            "pontos_marcados" => [80i64, 95, 120],
            "posicao" => ["Levantador", "Ponteiro", "Central"]
        )
        .unwrap()
    }

    #[test]
    fn aggregates_match_hand_computation() {
        let summary = summarize(&roster()).unwrap();
        assert_eq!(summary.players, 3);
        assert!((summary.mean_age - 22.0).abs() < 1e-12);
        assert!((summary.mean_height - 192.0).abs() < 1e-12);
        assert_eq!(summary.total_matches, 37);
        assert_eq!(summary.total_points, 295);
    }

    #[test]
    fn labels_use_one_decimal() {
        let summary = summarize(&roster()).unwrap();
        assert_eq!(summary.age_label(), "22.0 years");
        assert_eq!(summary.height_label(), "192.0 cm");
    }

    #[test]
    fn nulls_are_skipped() {
        let df = df!("idade" => [Some(20i64), None, Some(30)]).unwrap();
        assert!((column_mean(&df, "idade").unwrap() - 25.0).abs() < 1e-12);
        assert_eq!(column_sum(&df, "idade").unwrap(), 50);
    }

    #[test]
    fn text_column_is_not_numeric() {
        let err = column_mean(&roster(), "posicao").unwrap_err();
        assert!(matches!(err, StatsError::NotNumeric(_)));
    }

    #[test]
    fn absent_column_is_reported() {
        let err = column_sum(&roster(), "saques").unwrap_err();
        assert!(matches!(err, StatsError::MissingColumn(ref c) if c == "saques"));
    }
}

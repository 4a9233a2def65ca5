//! Category Statistics Module
//! Value counts and box-plot summaries behind the four roster charts.

use crate::data::schema;
use crate::stats::summary::StatsError;
use polars::prelude::*;
use rayon::prelude::*;

/// How the bars of a count chart are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountOrder {
    /// Order in which each value first appears in the table
    FirstSeen,
    /// Most frequent first, ties keep first-seen order
    Frequency,
}

/// Counts per value of one categorical column.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCounts {
    pub column: String,
    pub entries: Vec<(String, usize)>,
}

impl CategoryCounts {
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|(label, _)| label.clone()).collect()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, n)| *n)
    }
}

/// Five-number summary plus outliers for one group.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    pub group: String,
    pub count: usize,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_low: f64,
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

/// Everything the chart grid needs.
#[derive(Debug, Clone)]
pub struct RosterCharts {
    pub by_position: CategoryCounts,
    pub by_shift: CategoryCounts,
    pub by_result: CategoryCounts,
    pub height_by_position: Vec<BoxSummary>,
}

/// Read a column as strings, casting numeric categories if needed.
fn string_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, StatsError> {
    let column = df
        .column(name)
        .map_err(|_| StatsError::MissingColumn(name.to_string()))?;
    let column = column.cast(&DataType::String)?;
    let ca = column.str()?;
    Ok(ca
        .into_iter()
        .map(|v| v.map(|s| s.trim().to_string()))
        .collect())
}

/// Count occurrences of each non-null value of `name`.
pub fn count_values(
    df: &DataFrame,
    name: &str,
    order: CountOrder,
) -> Result<CategoryCounts, StatsError> {
    let mut entries: Vec<(String, usize)> = Vec::new();

    for value in string_values(df, name)?.into_iter().flatten() {
        match entries.iter_mut().find(|(label, _)| *label == value) {
            Some((_, n)) => *n += 1,
            None => entries.push((value, 1)),
        }
    }

    if order == CountOrder::Frequency {
        // stable sort keeps first-seen order among ties
        entries.sort_by(|a, b| b.1.cmp(&a.1));
    }

    Ok(CategoryCounts {
        column: name.to_string(),
        entries,
    })
}

/// Calculate percentile using linear interpolation (NumPy compatible).
pub fn percentile(sorted_values: &[f64], p: f64) -> f64 {
    let n = sorted_values.len();
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return sorted_values[0];
    }

    let rank = (p / 100.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (rank.ceil() as usize).min(n - 1);
    let frac = rank - lower as f64;

    if lower == upper {
        sorted_values[lower]
    } else {
        sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
    }
}

/// Box-plot summary with whiskers at the furthest points inside 1.5 IQR.
pub fn box_summary(group: &str, values: &[f64]) -> Option<BoxSummary> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let q1 = percentile(&sorted, 25.0);
    let median = percentile(&sorted, 50.0);
    let q3 = percentile(&sorted, 75.0);
    let iqr = q3 - q1;
    let low_fence = q1 - 1.5 * iqr;
    let high_fence = q3 + 1.5 * iqr;

    let whisker_low = sorted
        .iter()
        .copied()
        .find(|&v| v >= low_fence)
        .unwrap_or(q1);
    let whisker_high = sorted
        .iter()
        .rev()
        .copied()
        .find(|&v| v <= high_fence)
        .unwrap_or(q3);
    let outliers = sorted
        .iter()
        .copied()
        .filter(|&v| v < low_fence || v > high_fence)
        .collect();

    Some(BoxSummary {
        group: group.to_string(),
        count: sorted.len(),
        q1,
        median,
        q3,
        whisker_low,
        whisker_high,
        outliers,
    })
}

/// Get numeric values of `value_col` for rows where `group_col` equals `group`.
pub fn values_for_group(
    df: &DataFrame,
    group_col: &str,
    value_col: &str,
    group: &str,
) -> Result<Vec<f64>, StatsError> {
    let groups = string_values(df, group_col)?;
    let values = df
        .column(value_col)
        .map_err(|_| StatsError::MissingColumn(value_col.to_string()))?
        .cast(&DataType::Float64)?;

    Ok(groups
        .iter()
        .zip(values.f64()?.into_iter())
        .filter_map(|(g, v)| match (g, v) {
            (Some(g), Some(v)) if g == group => Some(v),
            _ => None,
        })
        .collect())
}

/// Box summaries of `value_col`, one per group in first-seen order.
pub fn grouped_boxes(
    df: &DataFrame,
    group_col: &str,
    value_col: &str,
) -> Result<Vec<BoxSummary>, StatsError> {
    let groups = count_values(df, group_col, CountOrder::FirstSeen)?.labels();
    let mut boxes = Vec::with_capacity(groups.len());
    for group in groups {
        let values = values_for_group(df, group_col, value_col, &group)?;
        if let Some(summary) = box_summary(&group, &values) {
            boxes.push(summary);
        }
    }
    Ok(boxes)
}

impl RosterCharts {
    /// Compute all four chart datasets in parallel.
    pub fn compute(df: &DataFrame) -> Result<Self, StatsError> {
        let specs = [
            (schema::POSITION, CountOrder::FirstSeen),
            (schema::TRAINING_SHIFT, CountOrder::Frequency),
            (schema::LAST_RESULT, CountOrder::FirstSeen),
        ];

        let (counts, boxes) = rayon::join(
            || {
                specs
                    .par_iter()
                    .map(|(name, order)| count_values(df, name, *order))
                    .collect::<Result<Vec<_>, _>>()
            },
            || grouped_boxes(df, schema::POSITION, schema::HEIGHT),
        );

        let mut counts = counts?.into_iter();
        match (counts.next(), counts.next(), counts.next()) {
            (Some(by_position), Some(by_shift), Some(by_result)) => Ok(Self {
                by_position,
                by_shift,
                by_result,
                height_by_position: boxes?,
            }),
            _ => Err(StatsError::MissingColumn(schema::POSITION.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> DataFrame {
        df!(
            "idade" => [20i64, 22, 24, 19, 27],
            "altura_cm" => [190.0f64, 185.0, 201.0, 188.0, 199.0],
            "partidas_jogadas" => [12i64, 10, 15, 3, 20],
            "pontos_marcados" => [80i64, 95, 120, 10, 150],
            "posicao" => ["Levantador", "Ponteiro", "Central", "Ponteiro", "Central"],
            "turno_treino" => ["Tarde", "Manhã", "Manhã", "Noite", "Manhã"],
            "resultado_ultimo_jogo" => ["Vitória", "Derrota", "Vitória", "Empate", "Vitória"]
        )
        .unwrap()
    }

    #[test]
    fn first_seen_order_is_kept() {
        let counts = count_values(&roster(), "posicao", CountOrder::FirstSeen).unwrap();
        assert_eq!(
            counts.entries,
            vec![
                ("Levantador".to_string(), 1),
                ("Ponteiro".to_string(), 2),
                ("Central".to_string(), 2)
            ]
        );
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn frequency_order_breaks_ties_by_first_seen() {
        let counts = count_values(&roster(), "turno_treino", CountOrder::Frequency).unwrap();
        assert_eq!(counts.labels(), vec!["Manhã", "Tarde", "Noite"]);
        assert_eq!(counts.get("Manhã"), Some(3));
    }

    #[test]
    fn null_categories_are_skipped() {
        let df = df!("posicao" => [Some("Líbero"), None, Some("Líbero")]).unwrap();
        let counts = count_values(&df, "posicao", CountOrder::FirstSeen).unwrap();
        assert_eq!(counts.entries, vec![("Líbero".to_string(), 2)]);
    }

    #[test]
    fn percentile_matches_numpy_linear() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert!((percentile(&sorted, 25.0) - 1.75).abs() < 1e-12);
        assert!((percentile(&sorted, 50.0) - 2.5).abs() < 1e-12);
        assert!((percentile(&sorted, 75.0) - 3.25).abs() < 1e-12);
        assert!(percentile(&[], 50.0).is_nan());
    }

    #[test]
    fn box_summary_flags_outliers() {
        let values = [180.0, 182.0, 184.0, 186.0, 230.0];
        let summary = box_summary("Central", &values).unwrap();
        assert_eq!(summary.count, 5);
        assert!((summary.median - 184.0).abs() < 1e-12);
        assert!((summary.q1 - 182.0).abs() < 1e-12);
        assert!((summary.q3 - 186.0).abs() < 1e-12);
        assert_eq!(summary.whisker_low, 180.0);
        assert_eq!(summary.whisker_high, 186.0);
        assert_eq!(summary.outliers, vec![230.0]);
    }

    #[test]
    fn empty_group_has_no_box() {
        assert!(box_summary("Oposto", &[]).is_none());
    }

    #[test]
    fn heights_grouped_by_position() {
        let boxes = grouped_boxes(&roster(), "posicao", "altura_cm").unwrap();
        let groups: Vec<&str> = boxes.iter().map(|b| b.group.as_str()).collect();
        assert_eq!(groups, vec!["Levantador", "Ponteiro", "Central"]);
        assert!((boxes[2].median - 200.0).abs() < 1e-12);
    }

    #[test]
    fn computes_all_charts() {
        let charts = RosterCharts::compute(&roster()).unwrap();
        assert_eq!(charts.by_position.total(), 5);
        assert_eq!(charts.by_shift.labels()[0], "Manhã");
        assert_eq!(charts.by_result.get("Vitória"), Some(3));
        assert_eq!(charts.height_by_position.len(), 3);
    }
}

//! Binomial Win Model
//! Empirical win rate and the binomial distribution of wins over n matches.

use crate::data::schema;
use crate::stats::summary::StatsError;
use polars::prelude::*;
use statrs::distribution::{Binomial, Discrete};

/// Fraction of rows whose last-match result equals `victory_label`.
///
/// Surrounding whitespace in the cell is ignored; nulls count as non-wins.
pub fn win_rate(df: &DataFrame, victory_label: &str) -> Result<f64, StatsError> {
    let rows = df.height();
    if rows == 0 {
        return Ok(0.0);
    }

    let outcomes = df
        .column(schema::LAST_RESULT)
        .map_err(|_| StatsError::MissingColumn(schema::LAST_RESULT.to_string()))?
        .cast(&DataType::String)?;
    let victories = outcomes
        .str()?
        .into_iter()
        .filter(|v| v.is_some_and(|s| s.trim() == victory_label))
        .count();

    Ok(victories as f64 / rows as f64)
}

/// Binomial model of wins with a fixed success probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WinModel {
    p: f64,
}

impl WinModel {
    /// Build a model; `p` is clamped into [0, 1] and NaN becomes 0.
    pub fn new(p: f64) -> Self {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        Self { p }
    }

    pub fn p(&self) -> f64 {
        self.p
    }

    fn distribution(&self, trials: u64) -> Option<Binomial> {
        Binomial::new(self.p, trials).ok()
    }

    /// P(X = k) for `trials` matches; zero when `k > trials`.
    pub fn pmf(&self, trials: u64, k: u64) -> f64 {
        if k > trials {
            return 0.0;
        }
        self.distribution(trials).map(|d| d.pmf(k)).unwrap_or(0.0)
    }

    /// P(X = k) for every k in 0..=trials.
    pub fn distribution_over(&self, trials: u64) -> Vec<f64> {
        match self.distribution(trials) {
            Some(dist) => (0..=trials).map(|k| dist.pmf(k)).collect(),
            None => Vec::new(),
        }
    }

    /// Expected wins, round(n * p), always inside [0, n].
    pub fn default_successes(&self, trials: u64) -> u64 {
        let expected = (trials as f64 * self.p).round();
        (expected.max(0.0) as u64).min(trials)
    }
}

/// State of the two binomial sliders.
#[derive(Debug, Clone, PartialEq)]
pub struct BinomialControls {
    pub trials: u64,
    pub successes: u64,
    pub max_trials: u64,
}

impl BinomialControls {
    pub fn new(model: &WinModel, trials: u64, max_trials: u64) -> Self {
        let max_trials = max_trials.max(1);
        let trials = trials.clamp(1, max_trials);
        Self {
            trials,
            successes: model.default_successes(trials),
            max_trials,
        }
    }

    /// Change n; k resets to the expected wins for the new n.
    pub fn set_trials(&mut self, model: &WinModel, trials: u64) {
        self.trials = trials.clamp(1, self.max_trials);
        self.successes = model.default_successes(self.trials);
    }

    /// Change k, clamped into [0, n].
    pub fn set_successes(&mut self, successes: u64) {
        self.successes = successes.min(self.trials);
    }

    /// Probability of exactly the selected number of wins.
    pub fn probability(&self, model: &WinModel) -> f64 {
        model.pmf(self.trials, self.successes)
    }

    pub fn probability_label(&self, model: &WinModel) -> String {
        format!(
            "Probability of exactly {} wins in {} matches: {:.4}",
            self.successes,
            self.trials,
            self.probability(model)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(values: &[&str]) -> DataFrame {
        df!(schema::LAST_RESULT => values).unwrap()
    }

    #[test]
    fn pmf_of_fair_coin() {
        let model = WinModel::new(0.5);
        assert!((model.pmf(10, 5) - 0.2461).abs() < 1e-4);
    }

    #[test]
    fn distribution_sums_to_one() {
        for &p in &[0.0, 0.1, 0.37, 0.5, 0.9, 1.0] {
            let model = WinModel::new(p);
            for n in [1u64, 7, 10, 50] {
                let dist = model.distribution_over(n);
                assert_eq!(dist.len() as u64, n + 1);
                let total: f64 = dist.iter().sum();
                assert!((total - 1.0).abs() < 1e-9, "p={p} n={n} total={total}");
            }
        }
    }

    #[test]
    fn degenerate_rates_put_all_mass_at_the_ends() {
        assert_eq!(WinModel::new(0.0).pmf(10, 0), 1.0);
        assert_eq!(WinModel::new(1.0).pmf(10, 10), 1.0);
        assert_eq!(WinModel::new(1.0).pmf(10, 3), 0.0);
    }

    #[test]
    fn k_above_n_has_no_mass() {
        assert_eq!(WinModel::new(0.5).pmf(4, 5), 0.0);
    }

    #[test]
    fn default_successes_rounds_and_clamps() {
        assert_eq!(WinModel::new(0.6).default_successes(10), 6);
        assert_eq!(WinModel::new(0.25).default_successes(10), 3);
        assert_eq!(WinModel::new(0.24).default_successes(10), 2);
        assert_eq!(WinModel::new(1.0).default_successes(7), 7);
        assert_eq!(WinModel::new(0.0).default_successes(50), 0);
    }

    #[test]
    fn model_clamps_bad_rates() {
        assert_eq!(WinModel::new(f64::NAN).p(), 0.0);
        assert_eq!(WinModel::new(1.5).p(), 1.0);
        assert_eq!(WinModel::new(-0.2).p(), 0.0);
    }

    #[test]
    fn win_rate_counts_victories() {
        let df = results(&["Victory", "Defeat", "Victory", " Victory ", "Defeat"]);
        assert!((win_rate(&df, "Victory").unwrap() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn win_rate_extremes() {
        let none = results(&["Defeat", "Defeat"]);
        assert_eq!(win_rate(&none, "Victory").unwrap(), 0.0);
        let all = results(&["Victory", "Victory", "Victory"]);
        assert_eq!(win_rate(&all, "Victory").unwrap(), 1.0);
    }

    #[test]
    fn win_rate_needs_result_column() {
        let df = df!("idade" => [20i64]).unwrap();
        assert!(matches!(
            win_rate(&df, "Vitória"),
            Err(StatsError::MissingColumn(_))
        ));
    }

    #[test]
    fn controls_start_at_expected_wins() {
        let model = WinModel::new(0.5);
        let controls = BinomialControls::new(&model, 10, 50);
        assert_eq!(controls.trials, 10);
        assert_eq!(controls.successes, 5);
        assert_eq!(
            controls.probability_label(&model),
            "Probability of exactly 5 wins in 10 matches: 0.2461"
        );
    }

    #[test]
    fn changing_trials_resets_successes() {
        let model = WinModel::new(0.4);
        let mut controls = BinomialControls::new(&model, 10, 50);
        controls.set_successes(9);
        assert_eq!(controls.successes, 9);

        controls.set_trials(&model, 5);
        assert_eq!(controls.trials, 5);
        assert_eq!(controls.successes, 2);

        controls.set_trials(&model, 80);
        assert_eq!(controls.trials, 50);
        controls.set_trials(&model, 0);
        assert_eq!(controls.trials, 1);
    }

    #[test]
    fn successes_never_exceed_trials() {
        let model = WinModel::new(0.5);
        let mut controls = BinomialControls::new(&model, 3, 50);
        controls.set_successes(10);
        assert_eq!(controls.successes, 3);
    }
}

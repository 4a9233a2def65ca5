//! Loaded roster and everything derived from it.
//! Built once per load and owned by the application.

use crate::config::{AppConfig, ConfigError};
use crate::data::{DataLoader, LoaderError};
use crate::stats::{summarize, win_rate, RosterCharts, RosterSummary, StatsError, WinModel};
use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Stats(#[from] StatsError),
}

/// The roster table with its aggregates, chart data and win model.
#[derive(Clone)]
pub struct LoadedRoster {
    pub df: DataFrame,
    pub summary: RosterSummary,
    pub charts: RosterCharts,
    pub model: WinModel,
}

impl LoadedRoster {
    /// Derive everything the dashboard shows from a validated table.
    pub fn from_frame(df: DataFrame, config: &AppConfig) -> Result<Self, RosterError> {
        let summary = summarize(&df)?;
        let charts = RosterCharts::compute(&df)?;
        let model = WinModel::new(win_rate(&df, &config.victory_label)?);
        Ok(Self {
            df,
            summary,
            charts,
            model,
        })
    }

    /// Read `config.data_path` and derive the dashboard data.
    pub fn load(config: &AppConfig) -> Result<Self, RosterError> {
        let loader = DataLoader::new(config.separator_byte()?);
        let df = loader.load_csv(&config.data_path)?;
        Self::from_frame(df, config)
    }

    pub fn row_count(&self) -> usize {
        self.df.height()
    }

    pub fn column_count(&self) -> usize {
        self.df.width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_roster_from_configured_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "idade;altura_cm;partidas_jogadas;pontos_marcados;posicao;turno_treino;resultado_ultimo_jogo\n\
             20;190;12;80;Levantador;Manhã;Vitória\n\
             22;185;10;95;Ponteiro;Tarde;Derrota\n\
             24;201;15;120;Central;Manhã;Vitória\n\
             26;194;8;40;Central;Noite;Vitória\n"
        )
        .unwrap();

        let config = AppConfig {
            data_path: file.path().to_path_buf(),
            ..AppConfig::default()
        };
        let roster = LoadedRoster::load(&config).unwrap();
        assert_eq!(roster.row_count(), 4);
        assert_eq!(roster.column_count(), 7);
        assert!((roster.summary.mean_age - 23.0).abs() < 1e-12);
        assert_eq!(roster.summary.total_points, 335);
        assert!((roster.model.p() - 0.75).abs() < 1e-12);
        assert_eq!(roster.charts.by_position.get("Central"), Some(2));
    }

    #[test]
    fn missing_file_surfaces_loader_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            data_path: dir.path().join("tecnico_volei.csv"),
            ..AppConfig::default()
        };
        let err = LoadedRoster::load(&config).err().unwrap();
        assert!(matches!(err, RosterError::Load(LoaderError::Io { .. })));
    }
}

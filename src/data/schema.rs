//! Roster column names as they appear after label normalization.

pub const AGE: &str = "idade";
pub const HEIGHT: &str = "altura_cm";
pub const MATCHES_PLAYED: &str = "partidas_jogadas";
pub const POINTS_SCORED: &str = "pontos_marcados";
pub const POSITION: &str = "posicao";
pub const TRAINING_SHIFT: &str = "turno_treino";
pub const LAST_RESULT: &str = "resultado_ultimo_jogo";

/// Columns that must hold numbers.
pub const NUMERIC_COLUMNS: [&str; 4] = [AGE, HEIGHT, MATCHES_PLAYED, POINTS_SCORED];

/// Columns treated as categories.
pub const CATEGORICAL_COLUMNS: [&str; 3] = [POSITION, TRAINING_SHIFT, LAST_RESULT];

/// Every column the dashboard reads.
pub fn required_columns() -> impl Iterator<Item = &'static str> {
    NUMERIC_COLUMNS.into_iter().chain(CATEGORICAL_COLUMNS)
}

/// Normalize a raw header label: trim whitespace, lower-case.
pub fn normalize_label(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(normalize_label("  Idade "), "idade");
        assert_eq!(normalize_label("ALTURA_CM\t"), "altura_cm");
    }

    #[test]
    fn seven_required_columns() {
        assert_eq!(required_columns().count(), 7);
    }
}

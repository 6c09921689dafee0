// Normalización de horas de reloj a horas fraccionarias.
use chrono::{NaiveTime, Timelike};

/// Parsea una hora textual a horas fraccionarias (`hh + mm/60`).
/// Acepta 24h ("14:30") y 12h con sufijo ("02:30 PM", "12:00 AM" -> 0.0).
/// Devuelve `None` si la cadena viene vacía o no se puede interpretar;
/// la política legado de colapsar a 0 vive sólo en `parse_time`.
pub fn parse_time_opt(raw: &str) -> Option<f64> {
    let t = raw.trim().to_uppercase();
    if t.is_empty() {
        return None;
    }
    // Primero la forma del portal (12h con AM/PM), luego 24h.
    for fmt in ["%I:%M %p", "%H:%M"] {
        if let Ok(parsed) = NaiveTime::parse_from_str(&t, fmt) {
            return Some(parsed.hour() as f64 + parsed.minute() as f64 / 60.0);
        }
    }
    None
}

/// Frontera legado: hora inválida == 0.0. Los bloques con bound 0 se
/// descartan después en el builder del catálogo, así que el 0 nunca
/// llega a competir en el scoring.
pub fn parse_time(raw: &str) -> f64 {
    parse_time_opt(raw).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_24h() {
        assert_eq!(parse_time_opt("08:30"), Some(8.5));
        assert_eq!(parse_time_opt("14:00"), Some(14.0));
        assert_eq!(parse_time_opt("00:15"), Some(0.25));
    }

    #[test]
    fn test_parse_12h() {
        assert_eq!(parse_time_opt("08:30 AM"), Some(8.5));
        assert_eq!(parse_time_opt("02:30 PM"), Some(14.5));
        // 12 AM es medianoche, 12 PM mediodía
        assert_eq!(parse_time_opt("12:00 AM"), Some(0.0));
        assert_eq!(parse_time_opt("12:00 PM"), Some(12.0));
        // minúsculas y espacios sobrantes también
        assert_eq!(parse_time_opt(" 9:15 am "), Some(9.25));
    }

    #[test]
    fn test_parse_invalido() {
        assert_eq!(parse_time_opt(""), None);
        assert_eq!(parse_time_opt("   "), None);
        assert_eq!(parse_time_opt("TBA"), None);
        assert_eq!(parse_time_opt("25:00"), None);
        // la frontera legado colapsa todo eso a 0.0
        assert_eq!(parse_time("TBA"), 0.0);
        assert_eq!(parse_time("10:45"), 10.75);
    }
}

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::models::PreferenceConfig;

/// Parámetros de entrada para la generación de horarios
///
/// # Estructura del JSON esperado:
/// ```json
/// {
///   "selectedCourseCodes": ["CS101", "MA201"],
///   "preferences": {
///     "noBefore": true,
///     "beforeCutoff": 11.0,
///     "noAfter": false,
///     "afterCutoff": 17.0,
///     "avoidFriday": true,
///     "avoidBackToBack": false,
///     "minimizeDays": false
///   },
///   "catalog": "course_offerings.csv"
/// }
/// ```
///
/// # Campos:
/// - `selectedCourseCodes`: códigos base de los cursos deseados (requerido)
/// - `preferences`: preferencias del estudiante; los campos ausentes
///   toman el estado "sin marcar" del formulario (flags en false,
///   cutoffs 0.0 / 24.0)
/// - `catalog`: nombre del CSV de oferta a usar (opcional; por defecto
///   el que escribe el scraper)
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub selected_course_codes: Vec<String>,
    #[serde(default)]
    pub preferences: PreferenceConfig,
    #[serde(default)]
    pub catalog: Option<String>,
}

pub fn parse_json_input(json_str: &str) -> Result<ScheduleRequest, serde_json::Error> {
    serde_json::from_str::<ScheduleRequest>(json_str)
}

/// Normaliza los códigos seleccionados: trim, mayúsculas y dedupe
/// conservando el orden de llegada (los códigos del portal son siempre
/// mayúsculas, así el usuario puede escribir "cs101").
pub fn normalize_codes(codes: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    codes
        .iter()
        .map(|c| c.trim().to_uppercase())
        .filter(|c| !c.is_empty())
        .filter(|c| seen.insert(c.clone()))
        .collect()
}

/// Busca el código del catálogo más parecido a uno desconocido, para
/// responder "¿quisiste decir X?". Jaro-Winkler sobre los códigos base;
/// sólo se sugiere con similitud alta para no inventar cursos.
pub fn suggest_code(catalog: &Catalog, unknown: &str) -> Option<String> {
    let mut best: Option<(f64, &String)> = None;
    for code in catalog.course_codes() {
        let sim = strsim::jaro_winkler(&unknown.to_uppercase(), &code.to_uppercase());
        match best {
            None => best = Some((sim, code)),
            Some((b, _)) if sim > b => best = Some((sim, code)),
            _ => {}
        }
    }
    match best {
        Some((sim, code)) if sim >= 0.85 => Some(code.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_catalog;
    use crate::models::MeetingRow;

    #[test]
    fn test_parse_json_completo() {
        let json_data = r#"
        {
            "selectedCourseCodes": ["CS101", "MA201"],
            "preferences": {
                "noBefore": true,
                "beforeCutoff": 11.0,
                "noAfter": true,
                "afterCutoff": 17.0,
                "avoidFriday": true,
                "avoidBackToBack": true,
                "minimizeDays": true
            },
            "catalog": "oferta_fa2025.csv"
        }
        "#;

        let req = parse_json_input(json_data).expect("debe parsear JSON completo");
        assert_eq!(req.selected_course_codes, vec!["CS101", "MA201"]);
        assert!(req.preferences.no_before);
        assert_eq!(req.preferences.before_cutoff, 11.0);
        assert!(req.preferences.avoid_back_to_back);
        assert_eq!(req.catalog.as_deref(), Some("oferta_fa2025.csv"));
    }

    #[test]
    fn test_parse_json_minimo_aplica_defaults() {
        // sólo los cursos: preferencias en estado "sin marcar"
        let json_data = r#"{ "selectedCourseCodes": ["CS101"] }"#;
        let req = parse_json_input(json_data).expect("debe parsear JSON mínimo");
        assert_eq!(req.selected_course_codes, vec!["CS101"]);
        assert!(!req.preferences.no_before);
        assert_eq!(req.preferences.before_cutoff, 0.0);
        assert_eq!(req.preferences.after_cutoff, 24.0);
        assert!(req.catalog.is_none());
    }

    #[test]
    fn test_parse_json_sin_cursos_falla() {
        assert!(parse_json_input(r#"{ "preferences": {} }"#).is_err());
    }

    #[test]
    fn test_normalize_codes() {
        let codes = vec![
            " cs101 ".to_string(),
            "MA201".to_string(),
            "CS101".to_string(),
            "".to_string(),
        ];
        assert_eq!(normalize_codes(&codes), vec!["CS101", "MA201"]);
    }

    #[test]
    fn test_suggest_code() {
        let catalog = build_catalog(&[
            MeetingRow {
                course: "CS101-01".to_string(),
                days: "M".to_string(),
                start_time: "10:00".to_string(),
                end_time: "11:00".to_string(),
                ..Default::default()
            },
            MeetingRow {
                course: "MA201-01".to_string(),
                days: "T".to_string(),
                start_time: "10:00".to_string(),
                end_time: "11:00".to_string(),
                ..Default::default()
            },
        ])
        .catalog;

        // error de tipeo cercano: se sugiere
        assert_eq!(suggest_code(&catalog, "CS110"), Some("CS101".to_string()));
        // nada razonablemente parecido: no se inventa
        assert_eq!(suggest_code(&catalog, "ZZ999"), None);
    }
}

use std::collections::HashSet;

use crate::algorithm::conflict::conflicts_with_any;
use crate::catalog::Catalog;
use crate::models::Section;

/// Resultado de la enumeración. `missing` trae los códigos seleccionados
/// que no tienen ninguna sección en el catálogo: así el caller puede
/// distinguir "curso sin secciones" de "todas las combinaciones chocaron"
/// (ambos terminan con `schedules` vacío).
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub schedules: Vec<Vec<Section>>,
    pub missing: Vec<String>,
}

/// Enumera todas las formas de elegir exactamente una sección por curso
/// seleccionado, descartando combinaciones con algún par en conflicto.
///
/// Estrategia: backtracking en el orden en que llegaron los códigos,
/// probando cada sección de un curso contra las ya elegidas antes de
/// descender — poda ramas muertas temprano pero produce exactamente el
/// mismo conjunto, y en el mismo orden, que el producto cartesiano
/// filtrado a posteriori.
///
/// Códigos repetidos en la selección se ignoran (vale la primera
/// aparición). Nunca falla: selección vacía o inválida devuelve listas
/// vacías, no errores.
pub fn generate_schedules(catalog: &Catalog, selected: &[String]) -> GenerationResult {
    // dedupe conservando orden de llegada
    let mut seen: HashSet<&str> = HashSet::new();
    let codes: Vec<&String> = selected.iter().filter(|c| seen.insert(c.as_str())).collect();

    let mut missing: Vec<String> = Vec::new();
    let mut groups: Vec<&[Section]> = Vec::new();
    for code in &codes {
        match catalog.sections_for(code.as_str()) {
            Some(secs) if !secs.is_empty() => groups.push(secs),
            _ => missing.push((*code).clone()),
        }
    }
    if !missing.is_empty() {
        return GenerationResult { schedules: Vec::new(), missing };
    }

    fn backtrack(
        groups: &[&[Section]],
        pos: usize,
        chosen: &mut Vec<Section>,
        out: &mut Vec<Vec<Section>>,
    ) {
        if pos == groups.len() {
            out.push(chosen.clone());
            return;
        }
        for sect in groups[pos] {
            if conflicts_with_any(chosen, sect) {
                continue;
            }
            chosen.push(sect.clone());
            backtrack(groups, pos + 1, chosen, out);
            chosen.pop();
        }
    }

    let mut out: Vec<Vec<Section>> = Vec::new();
    let mut chosen: Vec<Section> = Vec::with_capacity(groups.len());
    backtrack(&groups, 0, &mut chosen, &mut out);

    GenerationResult { schedules: out, missing }
}

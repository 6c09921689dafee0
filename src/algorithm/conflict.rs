// Detección de conflictos entre secciones.
use crate::models::Section;

/// True si ambas secciones comparten algún bloque solapado: mismo día y
/// intervalos abiertos que se pisan (`a.end > b.start && b.end > a.start`).
/// Bordes que se tocan (termina 11:00, empieza 11:00) NO son conflicto:
/// eso lo penaliza el scorer como back-to-back, no se prohíbe aquí.
pub fn sections_conflict(a: &Section, b: &Section) -> bool {
    for t1 in &a.timeslots {
        for t2 in &b.timeslots {
            if t1.day == t2.day && t1.end > t2.start && t2.end > t1.start {
                return true;
            }
        }
    }
    false
}

/// True si `candidate` choca con alguna sección ya elegida.
pub fn conflicts_with_any(chosen: &[Section], candidate: &Section) -> bool {
    chosen.iter().any(|c| sections_conflict(c, candidate))
}

//! Caché simple en memoria para catálogos ya construidos
//!
//! Leer y agrupar el CSV por cada request sería trabajo repetido: el
//! catálogo sólo cambia cuando el scraper sube un archivo nuevo, y en ese
//! momento se invalida la entrada.

use std::collections::HashMap;
use std::error::Error;
use std::sync::{Arc, Mutex, OnceLock};

use crate::catalog::csv_io::{read_catalog_csv, resolve_catalog_path};
use crate::catalog::{build_catalog, CatalogBuild};

// Caché global: ruta resuelta -> Arc<CatalogBuild>
static CATALOG_CACHE: OnceLock<Mutex<HashMap<String, Arc<CatalogBuild>>>> = OnceLock::new();

/// Devuelve el catálogo construido para el archivo pedido, usando el
/// caché si ya está; en caso contrario lee el CSV, construye y almacena.
///
/// La clave es la ruta resuelta a string, así dos nombres que apuntan al
/// mismo archivo no duplican la entrada. El Mutex se mantiene poco rato
/// (sólo consulta/inserción); el resultado viaja como Arc para
/// compartirlo entre handlers sin clonar el catálogo entero.
pub fn catalog_cached(name: &str) -> Result<Arc<CatalogBuild>, Box<dyn Error>> {
    let cache = CATALOG_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let path = resolve_catalog_path(name)?;
    let key = path.to_string_lossy().to_string();

    {
        let guard = cache.lock().expect("catalog cache mutex poisoned");
        if let Some(existing) = guard.get(&key) {
            return Ok(Arc::clone(existing));
        }
    }

    let rows = read_catalog_csv(&path)
        .map_err(|e| format!("failed to read catalog '{}': {}", key, e))?;
    let build = Arc::new(build_catalog(&rows));

    let mut guard = cache.lock().expect("catalog cache mutex poisoned");
    guard.insert(key, Arc::clone(&build));
    Ok(build)
}

/// Borra la entrada de un archivo (tras un upload o refresh). Nombre
/// irresoluble se ignora en silencio: no había nada que invalidar.
pub fn invalidate(name: &str) {
    let path = match resolve_catalog_path(name) {
        Ok(p) => p,
        Err(_) => return,
    };
    let key = path.to_string_lossy().to_string();
    if let Some(cache) = CATALOG_CACHE.get() {
        let mut guard = cache.lock().expect("catalog cache mutex poisoned");
        guard.remove(&key);
    }
}

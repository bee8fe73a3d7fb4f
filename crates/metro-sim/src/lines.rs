//! Built-in line definitions.
//!
//! Both lines run through the same parameterized [`LineSim`]; the only
//! thing that differs is this data.

use metro_core::{LineConfig, StationDef};

/// Línea 1, Observatorio ↔ Pantitlán.
pub fn line_1() -> LineConfig {
    LineConfig {
        id: "line1".to_owned(),
        name: "Línea 1".to_owned(),
        route: "Observatorio ↔ Pantitlán".to_owned(),
        train_prefix: "T1".to_owned(),
        stations: vec![
            StationDef::new("observatorio", "Observatorio", 19.3986, -99.2009),
            StationDef::new("tacubaya", "Tacubaya", 19.4033, -99.1876),
            StationDef::new("juanacatlan", "Juanacatlán", 19.4121, -99.1826),
            StationDef::new("chapultepec", "Chapultepec", 19.4206, -99.1676),
            StationDef::new("sevilla", "Sevilla", 19.4218, -99.1607),
            StationDef::new("insurgentes", "Insurgentes", 19.4237, -99.1628),
            StationDef::new("cuauhtemoc", "Cuauhtémoc", 19.4254, -99.1547),
            StationDef::new("balderas", "Balderas", 19.4272, -99.1495),
            StationDef::new("salto_del_agua", "Salto del Agua", 19.4274, -99.1428),
            StationDef::new("isabel_la_catolica", "Isabel la Católica", 19.4261, -99.1379),
            StationDef::new("pino_suarez", "Pino Suárez", 19.4257, -99.1330),
            StationDef::new("merced", "Merced", 19.4254, -99.1201),
            StationDef::new("candelaria", "Candelaria", 19.4290, -99.1153),
            StationDef::new("san_lazaro", "San Lázaro", 19.4306, -99.1154),
            StationDef::new("moctezuma", "Moctezuma", 19.4277, -99.1126),
            StationDef::new("balbuena", "Balbuena", 19.4234, -99.1013),
            StationDef::new("boulevard_puerto_aereo", "Boulevard Puerto Aéreo", 19.4195, -99.0962),
            StationDef::new("gomez_farias", "Gómez Farías", 19.4162, -99.0903),
            StationDef::new("zaragoza", "Zaragoza", 19.4122, -99.0825),
            StationDef::new("pantitlan", "Pantitlán", 19.4153, -99.0733),
        ],
    }
}

/// Línea 2, Cuatro Caminos ↔ Tasqueña.
pub fn line_2() -> LineConfig {
    LineConfig {
        id: "line2".to_owned(),
        name: "Línea 2".to_owned(),
        route: "Cuatro Caminos ↔ Tasqueña".to_owned(),
        train_prefix: "T2".to_owned(),
        stations: vec![
            StationDef::new("cuatro_caminos", "Cuatro Caminos", 19.4595, -99.2157),
            StationDef::new("panteones", "Panteones", 19.4585, -99.2032),
            StationDef::new("tacuba", "Tacuba", 19.4593, -99.1879),
            StationDef::new("cuitlahuac", "Cuitláhuac", 19.4573, -99.1817),
            StationDef::new("popotla", "Popotla", 19.4525, -99.1753),
            StationDef::new("colegio_militar", "Colegio Militar", 19.4487, -99.1719),
            StationDef::new("normal", "Normal", 19.4443, -99.1676),
            StationDef::new("san_cosme", "San Cosme", 19.4419, -99.1626),
            StationDef::new("revolucion", "Revolución", 19.4392, -99.1546),
            StationDef::new("hidalgo", "Hidalgo", 19.4373, -99.1471),
            StationDef::new("bellas_artes", "Bellas Artes", 19.4363, -99.1417),
            StationDef::new("allende", "Allende", 19.4357, -99.1367),
            StationDef::new("zocalo", "Zócalo", 19.4326, -99.1332),
            StationDef::new("pino_suarez", "Pino Suárez", 19.4254, -99.1330),
            StationDef::new("san_antonio_abad", "San Antonio Abad", 19.4158, -99.1345),
            StationDef::new("chabacano", "Chabacano", 19.4089, -99.1354),
            StationDef::new("viaducto", "Viaducto", 19.4009, -99.1368),
            StationDef::new("xola", "Xola", 19.3954, -99.1377),
            StationDef::new("villa_de_cortes", "Villa de Cortés", 19.3876, -99.1386),
            StationDef::new("nativitas", "Nativitas", 19.3796, -99.1395),
            StationDef::new("portales", "Portales", 19.3697, -99.1415),
            StationDef::new("ermita", "Ermita", 19.3619, -99.1425),
            StationDef::new("general_anaya", "General Anaya", 19.3532, -99.1448),
            StationDef::new("tasquena", "Tasqueña", 19.3440, -99.1402),
        ],
    }
}

/// All lines the service runs by default.
pub fn builtin_lines() -> Vec<LineConfig> {
    vec![line_1(), line_2()]
}

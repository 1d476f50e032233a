//! Zentrale Konfiguration für den QuestMap Editor.
//!
//! `AppOptions` enthält alle beim Start geladenen Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::LatLng;
use crate::store::FirestoreConfig;
use serde::{Deserialize, Serialize};

// ── Karte ───────────────────────────────────────────────────────────

/// Standard-Kartenmittelpunkt (Lwiw).
pub const MAP_DEFAULT_CENTER: LatLng = LatLng::new(49.84336818523409, 24.026482528084973);
/// Standard-Zoomstufe.
pub const MAP_DEFAULT_ZOOM: f64 = 10.0;
/// Minimale Zoomstufe.
pub const MAP_ZOOM_MIN: f64 = 2.0;
/// Maximale Zoomstufe.
pub const MAP_ZOOM_MAX: f64 = 20.0;
/// Zoom-Änderung pro Mausrad-Raste.
pub const MAP_SCROLL_ZOOM_STEP: f64 = 0.5;
/// Feste Höhe der Kartenfläche in Pixeln.
pub const MAP_HEIGHT_PX: f32 = 700.0;
/// Kachel-Quelle (Slippy-Map-Schema `{z}/{x}/{y}`).
pub const MAP_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

// ── Overlay ─────────────────────────────────────────────────────────

/// Grid-Größe fürs Clustering in Pixeln.
pub const CLUSTER_GRID_PX: f32 = 60.0;
/// Ab dieser Zoomstufe wird nicht mehr geclustert.
pub const CLUSTER_MAX_ZOOM: f64 = 15.0;
/// Zoom-Schritte beim Klick auf einen Cluster.
pub const CLUSTER_CLICK_ZOOM_STEPS: f64 = 2.0;
/// Marker-Radius in Pixeln.
pub const MARKER_RADIUS_PX: f32 = 11.0;
/// Füllfarbe der Marker (RGBA: Rot).
pub const MARKER_COLOR: [f32; 4] = [0.9, 0.2, 0.15, 1.0];
/// Füllfarbe des selektierten Markers (RGBA: Orange).
pub const MARKER_COLOR_SELECTED: [f32; 4] = [1.0, 0.6, 0.0, 1.0];
/// Füllfarbe noch nicht persistierter Marker (RGBA: Grau).
pub const MARKER_COLOR_PENDING: [f32; 4] = [0.55, 0.55, 0.55, 1.0];
/// Füllfarbe der Cluster (RGBA: Blau).
pub const CLUSTER_COLOR: [f32; 4] = [0.15, 0.45, 0.9, 0.9];

/// Umgebungsvariable, die den Firestore-API-Key überschreibt.
pub const API_KEY_ENV: &str = "QUEST_MAP_FIRESTORE_API_KEY";

// ── Remote-Store ────────────────────────────────────────────────────

/// Auswahl des Remote-Store-Backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Prozessinterner Speicher (nichts überlebt einen Neustart)
    #[default]
    Memory,
    /// Firestore über REST
    Firestore,
}

/// Remote-Store-Einstellungen.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    /// Aktives Backend
    pub backend: StoreBackend,
    /// Firestore-Verbindungsdaten (nur für `backend = "firestore"`)
    pub firestore: FirestoreConfig,
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle beim Start geladenen Optionen.
/// Wird als `quest_map_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    // ── Karte ───────────────────────────────────────────────────
    /// Zoomstufe beim Start
    pub map_zoom: f64,
    /// Minimale Zoomstufe
    pub map_zoom_min: f64,
    /// Maximale Zoomstufe
    pub map_zoom_max: f64,
    /// Zoom-Änderung pro Mausrad-Raste
    pub map_scroll_zoom_step: f64,
    /// Höhe der Kartenfläche in Pixeln
    pub map_height_px: f32,
    /// Kachel-URL-Vorlage; leer = nur Gitternetz zeichnen
    pub tile_url_template: String,

    // ── Overlay ─────────────────────────────────────────────────
    /// Grid-Größe fürs Clustering in Pixeln
    pub cluster_grid_px: f32,
    /// Ab dieser Zoomstufe kein Clustering
    pub cluster_max_zoom: f64,
    /// Marker-Radius in Pixeln
    pub marker_radius_px: f32,
    /// Markerfarbe
    pub marker_color: [f32; 4],
    /// Farbe des selektierten Markers
    pub marker_color_selected: [f32; 4],
    /// Farbe nicht persistierter Marker
    pub marker_color_pending: [f32; 4],
    /// Clusterfarbe
    pub cluster_color: [f32; 4],

    // ── Tabellen (in TOML nach den einfachen Werten) ────────────
    /// Kartenmittelpunkt beim Start
    pub map_center: LatLng,
    /// Store-Einstellungen
    pub store: StoreOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            map_zoom: MAP_DEFAULT_ZOOM,
            map_zoom_min: MAP_ZOOM_MIN,
            map_zoom_max: MAP_ZOOM_MAX,
            map_scroll_zoom_step: MAP_SCROLL_ZOOM_STEP,
            map_height_px: MAP_HEIGHT_PX,
            tile_url_template: MAP_TILE_URL.to_string(),

            cluster_grid_px: CLUSTER_GRID_PX,
            cluster_max_zoom: CLUSTER_MAX_ZOOM,
            marker_radius_px: MARKER_RADIUS_PX,
            marker_color: MARKER_COLOR,
            marker_color_selected: MARKER_COLOR_SELECTED,
            marker_color_pending: MARKER_COLOR_PENDING,
            cluster_color: CLUSTER_COLOR,

            map_center: MAP_DEFAULT_CENTER,
            store: StoreOptions::default(),
        }
    }
}

impl AppOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML-Text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let options: Self = toml::from_str(content)?;
        log::info!("Optionen geladen (Backend: {:?})", options.store.backend);
        Ok(options)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("quest_map_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("quest_map_editor.toml")
    }

    /// Übernimmt einen API-Key aus der Umgebung, falls gesetzt.
    pub fn apply_api_key_override(&mut self, api_key: Option<String>) {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            log::info!("Firestore-API-Key aus {} übernommen", API_KEY_ENV);
            self.store.firestore.api_key = Some(key);
        }
    }
}

//! Line-level service incidents.
//!
//! Incident lifetime is memoryless: every tick runs one Bernoulli trial
//! with the configured probability, and a success *toggles* the state —
//! quiet lines gain an incident (uniform category, uniform message from
//! that category's pool), troubled lines clear.  Expected incident
//! duration is therefore geometric in the toggle probability; there is no
//! timer.

use metro_core::SimRng;

// ── IncidentKind ──────────────────────────────────────────────────────────────

/// Category of the current line-level incident, if any.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentKind {
    #[default]
    None,
    Delay,
    Incident,
    Maintenance,
}

impl IncidentKind {
    /// The three active categories an incident can take.
    pub const ACTIVE: [IncidentKind; 3] = [
        IncidentKind::Delay,
        IncidentKind::Incident,
        IncidentKind::Maintenance,
    ];

    #[inline]
    pub fn is_active(self) -> bool {
        self != IncidentKind::None
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IncidentKind::None        => "none",
            IncidentKind::Delay       => "delay",
            IncidentKind::Incident    => "incident",
            IncidentKind::Maintenance => "maintenance",
        }
    }

    /// The fixed announcement pool for this category.
    ///
    /// Empty for `None` — a cleared line has no message.
    pub fn message_pool(self) -> &'static [&'static str] {
        match self {
            IncidentKind::None => &[],
            IncidentKind::Delay => &[
                "Retraso de 5 minutos por afluencia",
                "Demora temporal por alta demanda de usuarios",
                "Servicio lento por sobrecupo en estaciones",
            ],
            IncidentKind::Incident => &[
                "Revisión técnica en progreso",
                "Atención de usuario en andén",
                "Inspección de vías en curso",
            ],
            IncidentKind::Maintenance => &[
                "Mantenimiento programado en estación",
                "Trabajos de mantenimiento preventivo",
                "Revisión de sistemas de señalización",
            ],
        }
    }
}

impl std::fmt::Display for IncidentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── IncidentState ─────────────────────────────────────────────────────────────

/// The line's current incident, updated once per tick.
#[derive(Clone, Debug, Default)]
pub struct IncidentState {
    pub kind: IncidentKind,
    pub message: Option<String>,
}

impl IncidentState {
    /// A quiet line: no incident, no message.
    pub fn new() -> IncidentState {
        IncidentState::default()
    }

    /// Run one Bernoulli(`p`) trial; on success toggle the state.
    ///
    /// Also used as the one-shot seed at line construction, where the
    /// state is `None` and a success produces the initial incident.
    pub fn maybe_toggle(&mut self, p: f64, rng: &mut SimRng) {
        if !rng.gen_bool(p) {
            return;
        }
        if self.kind.is_active() {
            self.kind = IncidentKind::None;
            self.message = None;
        } else {
            // `ACTIVE` and every pool are non-empty; choose cannot fail.
            let kind = *rng
                .choose(&IncidentKind::ACTIVE)
                .unwrap_or(&IncidentKind::Delay);
            self.kind = kind;
            self.message = rng.choose(kind.message_pool()).map(|m| (*m).to_owned());
        }
    }
}

//! Meteor-shower overlay: fetch-driven marker batches keyed to a month
//! selection.
//!
//! The overlay is a small state machine. Month selection produces a request
//! descriptor carrying a generation token; the bridge performs the fetch and
//! feeds the outcome back through [`MeteorOverlay::complete`]. A completion
//! whose generation is no longer current is dropped, so the latest selection
//! always wins even when responses arrive out of order.

use glam::Vec3;
use orrery_engine::{EngineContext, Entity, EntityId, MeshColor, SphereMesh};
use serde::Deserialize;
use thiserror::Error;

pub const MARKER_TAG: &str = "meteor";
pub const MARKER_RADIUS: f32 = 0.5;
const MARKER_COLOR: (u8, u8, u8) = (0xff, 0x55, 0x55);

/// Upper bound on markers per batch; keeps the sphere section of the shared
/// buffer from overflowing on an oversized response.
pub const MAX_MARKERS: usize = 128;

/// One plotted meteor: world-space coordinates.
/// This flat record is the canonical wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MeteorRecord {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Display-only record from the legacy response shape
/// `{ month, predictions: [...] }`. Carries no coordinates, so it never
/// produces markers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MeteorPrediction {
    pub mass: f64,
    pub location: String,
    pub date: String,
}

/// Failures while fetching or decoding meteor data. All recoverable:
/// surfaced as the overlay message, never fatal to the visualization.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeteorError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned HTTP {0}")]
    BadStatus(u16),
    #[error("unexpected content type {0:?}")]
    BadContentType(String),
    #[error("could not decode meteor data: {0}")]
    Decode(String),
}

impl From<orrery_web::FetchError> for MeteorError {
    fn from(err: orrery_web::FetchError) -> Self {
        match err {
            orrery_web::FetchError::Network(msg) => MeteorError::Network(msg),
            orrery_web::FetchError::BadStatus(status) => MeteorError::BadStatus(status),
            orrery_web::FetchError::BadContentType(ct) => MeteorError::BadContentType(ct),
        }
    }
}

/// Overlay lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    /// No month selected.
    Idle,
    /// A request is in flight.
    Loading,
    /// Markers (or a "no data" notice) are on screen.
    Displayed,
    /// The last fetch failed; no markers are on screen.
    Error,
}

impl OverlayState {
    /// Numeric code for the event stream.
    pub fn code(self) -> f32 {
        match self {
            OverlayState::Idle => 0.0,
            OverlayState::Loading => 1.0,
            OverlayState::Displayed => 2.0,
            OverlayState::Error => 3.0,
        }
    }
}

/// A pending fetch, handed to the bridge by [`MeteorOverlay::select_month`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeteorRequest {
    /// Generation token; completions carry it back for staleness checks.
    pub generation: u64,
    pub month: String,
}

impl MeteorRequest {
    pub fn url(&self) -> String {
        format!("/get-meteors?month={}", self.month)
    }
}

/// Decoded response body.
enum ParsedBody {
    Markers(Vec<MeteorRecord>),
    Predictions(Vec<MeteorPrediction>),
}

pub struct MeteorOverlay {
    state: OverlayState,
    /// Monotonically increasing; bumped on every selection change so that
    /// in-flight responses from older selections can be identified.
    generation: u64,
    markers: Vec<EntityId>,
    message: String,
}

impl MeteorOverlay {
    pub fn new() -> Self {
        Self {
            state: OverlayState::Idle,
            generation: 0,
            markers: Vec::new(),
            message: String::from("no month selected"),
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Human-readable panel message for the current state.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Handle a month-selector change. An empty selection clears the overlay
    /// and returns `None`; otherwise the caller must perform the returned
    /// request and report back via [`complete`](Self::complete).
    pub fn select_month(
        &mut self,
        ctx: &mut EngineContext,
        month: &str,
    ) -> Option<MeteorRequest> {
        // Any selection change invalidates whatever is still in flight.
        self.generation += 1;

        let month = month.trim();
        if month.is_empty() {
            self.clear_markers(ctx);
            self.state = OverlayState::Idle;
            self.message = String::from("no month selected");
            return None;
        }

        self.state = OverlayState::Loading;
        self.message = format!("loading meteors for month {month}");
        Some(MeteorRequest {
            generation: self.generation,
            month: month.to_string(),
        })
    }

    /// Feed a fetch outcome back into the overlay. Outcomes for a superseded
    /// generation are discarded, so the latest selection always wins.
    pub fn complete(
        &mut self,
        ctx: &mut EngineContext,
        generation: u64,
        result: Result<String, MeteorError>,
    ) {
        if generation != self.generation {
            log::warn!(
                "discarding stale meteor response (generation {generation}, current {})",
                self.generation
            );
            return;
        }

        match result.and_then(|body| parse_meteor_body(&body)) {
            Ok(ParsedBody::Markers(records)) => self.show_markers(ctx, &records),
            Ok(ParsedBody::Predictions(predictions)) => {
                self.clear_markers(ctx);
                self.state = OverlayState::Displayed;
                self.message = if predictions.is_empty() {
                    String::from("no meteor data for this month")
                } else {
                    format!(
                        "{} predicted falls (legacy data, nothing to plot)",
                        predictions.len()
                    )
                };
            }
            Err(err) => {
                // Stale markers are worse than none: clear first, then report.
                self.clear_markers(ctx);
                self.state = OverlayState::Error;
                self.message = err.to_string();
                log::warn!("meteor fetch failed: {err}");
            }
        }
    }

    /// Remove and release every displayed marker. Idempotent.
    pub fn clear_markers(&mut self, ctx: &mut EngineContext) {
        for id in self.markers.drain(..) {
            ctx.despawn(id);
        }
    }

    fn show_markers(&mut self, ctx: &mut EngineContext, records: &[MeteorRecord]) {
        // The old batch must be fully released before the new one spawns.
        self.clear_markers(ctx);

        if records.is_empty() {
            self.state = OverlayState::Displayed;
            self.message = String::from("no meteor data for this month");
            return;
        }

        if records.len() > MAX_MARKERS {
            log::warn!(
                "meteor response has {} records, plotting first {MAX_MARKERS}",
                records.len()
            );
        }
        for record in records.iter().take(MAX_MARKERS) {
            let id = ctx.next_id();
            let (r, g, b) = MARKER_COLOR;
            ctx.spawn_sphere(
                Entity::new(id)
                    .with_tag(MARKER_TAG)
                    .with_pos(Vec3::new(record.x, record.y, record.z)),
                SphereMesh::new(MARKER_RADIUS, MeshColor::rgb8(r, g, b)),
            );
            self.markers.push(id);
        }

        self.state = OverlayState::Displayed;
        self.message = format!("{} meteors displayed", self.markers.len());
    }
}

impl Default for MeteorOverlay {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a response body. Tolerates both wire shapes but never mixes them:
/// a JSON array is the canonical coordinate list, an object with a
/// `predictions` field is the legacy display-only shape, anything else is a
/// decode error. Individual malformed records are logged and skipped rather
/// than failing the batch.
fn parse_meteor_body(body: &str) -> Result<ParsedBody, MeteorError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| MeteorError::Decode(e.to_string()))?;

    match value {
        serde_json::Value::Array(items) => {
            let mut records = Vec::with_capacity(items.len());
            for item in items {
                match serde_json::from_value::<MeteorRecord>(item) {
                    Ok(record) => records.push(record),
                    Err(e) => log::warn!("skipping malformed meteor record: {e}"),
                }
            }
            Ok(ParsedBody::Markers(records))
        }
        serde_json::Value::Object(mut map) => match map.remove("predictions") {
            Some(serde_json::Value::Array(items)) => {
                let mut predictions = Vec::with_capacity(items.len());
                for item in items {
                    match serde_json::from_value::<MeteorPrediction>(item) {
                        Ok(prediction) => predictions.push(prediction),
                        Err(e) => log::warn!("skipping malformed prediction: {e}"),
                    }
                }
                Ok(ParsedBody::Predictions(predictions))
            }
            _ => Err(MeteorError::Decode(String::from(
                "expected a coordinate array or a predictions object",
            ))),
        },
        _ => Err(MeteorError::Decode(String::from(
            "expected a coordinate array or a predictions object",
        ))),
    }
}

//! Interactive solar-system orrery for the browser.
//!
//! Compiled to WebAssembly; the TypeScript layer reads sphere, path, point,
//! and event data straight out of linear memory each frame and forwards UI
//! input through the exported functions below.

use wasm_bindgen::prelude::*;

use orrery_engine::*;

pub mod game;
pub mod meteors;
pub mod orbit;
pub mod planets;

pub use game::Orrery;
pub use meteors::{MeteorOverlay, MeteorRecord, MeteorRequest, OverlayState};

orrery_web::export_game!(Orrery, "orrery");

// ---- App-specific exports ----

/// Set the animation speed from the UI's raw text input. Malformed input
/// pauses the animation instead of erroring.
#[wasm_bindgen]
pub fn game_set_time_scale(raw: &str) {
    let scale = orbit::parse_time_scale(raw);
    with_runner(|r| {
        r.push_input(InputEvent::Custom {
            kind: game::CUSTOM_SET_TIME_SCALE,
            a: scale,
            b: 0.0,
            c: 0.0,
        })
    });
}

/// Select a planet for the info panel; any out-of-range index deselects.
#[wasm_bindgen]
pub fn game_select_planet(index: i32) {
    with_runner(|r| {
        r.push_input(InputEvent::Custom {
            kind: game::CUSTOM_SELECT_PLANET,
            a: index as f32,
            b: 0.0,
            c: 0.0,
        })
    });
}

#[wasm_bindgen]
pub fn planet_count() -> u32 {
    planets::PLANET_COUNT as u32
}

#[wasm_bindgen]
pub fn planet_name(index: u32) -> String {
    planets::PLANETS
        .get(index as usize)
        .map(|p| p.name.to_string())
        .unwrap_or_default()
}

#[wasm_bindgen]
pub fn planet_info(index: u32) -> String {
    planets::PLANETS
        .get(index as usize)
        .map(|p| p.info.to_string())
        .unwrap_or_default()
}

/// Current overlay panel text (loading notice, meteor count, or error).
#[wasm_bindgen]
pub fn overlay_message() -> String {
    with_runner(|r| r.with_parts(|game, _| game.overlay().message().to_string()))
}

/// Select a meteor month and fetch its data. An empty month clears the
/// overlay without fetching. Responses that arrive after a newer selection
/// are discarded inside the overlay, so rapid re-selection is safe.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn game_select_month(month: String) {
    let request = with_runner(|r| r.with_parts(|game, ctx| game.select_month(ctx, &month)));
    let Some(request) = request else {
        return;
    };

    wasm_bindgen_futures::spawn_local(async move {
        let result = orrery_web::net::fetch_json_text(&request.url())
            .await
            .map_err(Into::into);
        with_runner(|r| {
            r.with_parts(|game, ctx| game.complete_meteors(ctx, request.generation, result))
        });
    });
}

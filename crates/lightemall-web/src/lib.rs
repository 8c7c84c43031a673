//! `#[wasm_bindgen]` exports for the Light-Em-All engine.
//!
//! wasm-bindgen cannot hand a Rust-owned game to JS by reference, so the
//! runner lives in a `thread_local!` and every export borrows it through
//! `with_runner()`.

pub mod runner;

pub use runner::GameRunner;

use std::cell::RefCell;

use glam::Vec2;
use lightemall::{Board, Difficulty, GameConfig, InputEvent, Intent, PROTOCOL_VERSION};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<GameRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut GameRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Game not initialized. Call game_init() first.");
        f(runner)
    })
}

fn install(config: GameConfig) -> bool {
    match GameRunner::new(config) {
        Ok(runner) => {
            RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));
            true
        }
        Err(e) => {
            log::warn!("lightemall: {}", e);
            false
        }
    }
}

/// Seed from the browser clock and Math.random so every page load differs.
fn browser_seed() -> u64 {
    let now = js_sys::Date::now() as u64;
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    now ^ (noise << 32)
}

/// Signed JS coordinates to a cell, `None` if negative.
fn cell(row: i32, col: i32) -> Option<(usize, usize)> {
    Some((usize::try_from(row).ok()?, usize::try_from(col).ok()?))
}

#[wasm_bindgen]
pub fn game_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = GameConfig {
        seed: browser_seed(),
        ..GameConfig::default()
    };
    if install(config) {
        log::info!("lightemall: initialized");
    }
}

/// Replace the running game with one built from a JSON `GameConfig`.
/// Fields left out use defaults. With `randomize_seed` the seed comes from
/// the browser instead of the JSON.
#[wasm_bindgen]
pub fn game_configure(json: &str, randomize_seed: bool) -> bool {
    let mut config = match GameConfig::from_json(json) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("lightemall: {}", e);
            return false;
        }
    };
    if randomize_seed {
        config.seed = browser_seed();
    }
    install(config)
}

#[wasm_bindgen]
pub fn game_tick() -> u32 {
    with_runner(|r| r.tick() as u32)
}

/// Place the board at (origin_x, origin_y) and size cells to fit
/// `available_width`. Cell size follows later resizes automatically.
#[wasm_bindgen]
pub fn game_set_layout(origin_x: f32, origin_y: f32, available_width: f32) {
    with_runner(|r| r.fit_layout(Vec2::new(origin_x, origin_y), available_width));
}

// ---- Queued input ----

#[wasm_bindgen]
pub fn game_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn game_key_down(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
}

#[wasm_bindgen]
pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
    with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
}

// ---- Direct commands ----

#[wasm_bindgen]
pub fn game_rotate(row: i32, col: i32) -> bool {
    match cell(row, col) {
        Some((row, col)) => with_runner(|r| r.apply(Intent::Rotate { row, col })),
        None => false,
    }
}

#[wasm_bindgen]
pub fn game_move_power_source(row: i32, col: i32) -> bool {
    match cell(row, col) {
        Some((row, col)) => with_runner(|r| r.apply(Intent::MoveSource { row, col })),
        None => false,
    }
}

#[wasm_bindgen]
pub fn game_toggle_radius() -> bool {
    with_runner(|r| r.apply(Intent::ToggleRadius))
}

#[wasm_bindgen]
pub fn game_toggle_extended_mode() -> bool {
    with_runner(|r| r.apply(Intent::ToggleExtendedMode))
}

#[wasm_bindgen]
pub fn game_set_difficulty(level: u32) -> bool {
    match Difficulty::from_level(level) {
        Some(difficulty) => with_runner(|r| r.apply(Intent::SetDifficulty(difficulty))),
        None => {
            log::warn!("lightemall: ignoring difficulty level {}", level);
            false
        }
    }
}

#[wasm_bindgen]
pub fn game_resize(width: i32, height: i32) -> bool {
    let result = match (usize::try_from(width), usize::try_from(height)) {
        (Ok(w), Ok(h)) => with_runner(|r| r.resize(w, h)),
        // Negative sizes are rejected as empty.
        _ => Board::check_dimensions(
            usize::try_from(width).unwrap_or(0),
            usize::try_from(height).unwrap_or(0),
        ),
    };
    if let Err(e) = &result {
        log::warn!("lightemall: {}", e);
    }
    result.is_ok()
}

#[wasm_bindgen]
pub fn game_reset() -> bool {
    with_runner(|r| r.apply(Intent::Reset))
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_snapshot_json() -> String {
    with_runner(|r| r.snapshot_json())
}

#[wasm_bindgen]
pub fn get_cells_ptr() -> *const u8 {
    with_runner(|r| r.cells_ptr())
}

#[wasm_bindgen]
pub fn get_cell_count() -> u32 {
    with_runner(|r| r.cell_count())
}

#[wasm_bindgen]
pub fn get_game_events_ptr() -> *const f32 {
    with_runner(|r| r.game_events_ptr())
}

#[wasm_bindgen]
pub fn get_game_events_len() -> u32 {
    with_runner(|r| r.game_events_len())
}

#[wasm_bindgen]
pub fn get_protocol_version() -> u32 {
    PROTOCOL_VERSION
}

#[wasm_bindgen]
pub fn get_width() -> u32 {
    with_runner(|r| r.game().width() as u32)
}

#[wasm_bindgen]
pub fn get_height() -> u32 {
    with_runner(|r| r.game().height() as u32)
}

#[wasm_bindgen]
pub fn get_move_count() -> u32 {
    with_runner(|r| r.game().moves())
}

#[wasm_bindgen]
pub fn is_won() -> bool {
    with_runner(|r| r.game().is_won())
}

#[wasm_bindgen]
pub fn get_radius() -> u32 {
    with_runner(|r| r.game().radius())
}

#[wasm_bindgen]
pub fn is_radius_enabled() -> bool {
    with_runner(|r| r.game().radius_enabled())
}

#[wasm_bindgen]
pub fn is_extended_mode() -> bool {
    with_runner(|r| r.game().is_extended_mode())
}

#[wasm_bindgen]
pub fn get_difficulty() -> u32 {
    with_runner(|r| r.game().difficulty().level())
}

#[wasm_bindgen]
pub fn get_power_source_row() -> u32 {
    with_runner(|r| r.game().board().power_source().0 as u32)
}

#[wasm_bindgen]
pub fn get_power_source_col() -> u32 {
    with_runner(|r| r.game().board().power_source().1 as u32)
}

#[wasm_bindgen]
pub fn get_cell_size() -> f32 {
    with_runner(|r| r.layout().cell_size)
}

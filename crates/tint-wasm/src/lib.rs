//! WebAssembly bindings for the tint engine.
//!
//! ## Example
//!
//! ```js
//! import { recolorize, findNearest } from 'tint-wasm';
//!
//! const bytes = new Uint8Array(await (await fetch('shirt.png')).arrayBuffer());
//! img.src = recolorize(bytes, '#B22222', 'natural');
//!
//! const matches = findNearest('#C0392B', catalog, 3, 'delta-e2000');
//! console.log(matches[0].name, matches[0].confidence);
//! ```

use wasm_bindgen::prelude::*;

use tint_codec::CodecError;
use tint_core::{hex_to_rgb, Rgb, TintError};
use tint_match::{CatalogColor, ColorMatcher, DEFAULT_LIMIT};
use tint_recolor::{recolorize_raw, LuminanceMethod};

mod types;

pub use types::*;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// Version of the engine.
#[wasm_bindgen(js_name = version)]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Names accepted for the `method` argument.
#[wasm_bindgen(js_name = luminanceMethods)]
pub fn luminance_methods() -> Vec<String> {
    LuminanceMethod::ALL
        .iter()
        .map(|m| m.name().to_string())
        .collect()
}

/// Recolor encoded image bytes and return a `data:image/png;base64,` URL.
///
/// `method` defaults to `"natural"`; `enhance` is an optional luminance
/// exponent (0.8 lifts midtones).
#[wasm_bindgen]
pub fn recolorize(
    bytes: &[u8],
    hex: &str,
    method: Option<String>,
    enhance: Option<f32>,
) -> Result<String, JsError> {
    recolorize_bytes(bytes, hex, RecolorOptionsJs::new(method, enhance))
        .map_err(|e| JsError::new(&format!("Recolorization error: {}", e)))
}

/// Recolor a raw RGBA buffer (e.g. `ImageData.data`) and return a new buffer.
#[wasm_bindgen(js_name = recolorizeRgba)]
pub fn recolorize_rgba(
    width: u32,
    height: u32,
    rgba: &[u8],
    hex: &str,
    method: Option<String>,
) -> Result<Vec<u8>, JsError> {
    recolorize_rgba_buffer(width, height, rgba, hex, RecolorOptionsJs::new(method, None))
        .map_err(|e| JsError::new(&format!("Recolorization error: {}", e)))
}

/// Recolor one image onto many colors; returns one data URL per hex, in order.
#[wasm_bindgen(js_name = recolorizeBatch)]
pub fn recolorize_batch(
    bytes: &[u8],
    hexes: Vec<String>,
    method: Option<String>,
) -> Result<Vec<String>, JsError> {
    recolorize_bytes_batch(bytes, &hexes, RecolorOptionsJs::new(method, None))
        .map_err(|e| JsError::new(&format!("Recolorization error: {}", e)))
}

/// Find the nearest catalog colors to `hex`.
///
/// `catalog` is an array of `{ hex, name, family?, tags? }` objects. Returns
/// `{ hex, name, family, distance, confidence }` objects, best first.
#[wasm_bindgen(js_name = findNearest)]
pub fn find_nearest(
    hex: &str,
    catalog: JsValue,
    limit: Option<usize>,
    policy: Option<String>,
) -> Result<JsValue, JsError> {
    let catalog: Vec<CatalogColor> = serde_wasm_bindgen::from_value(catalog)
        .map_err(|e| JsError::new(&format!("Invalid catalog: {}", e)))?;

    let matches = nearest(hex, &catalog, limit.unwrap_or(DEFAULT_LIMIT), policy.as_deref())
        .map_err(|e| JsError::new(&format!("Match error: {}", e)))?;

    serde_wasm_bindgen::to_value(&matches)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Parse a hex color into `{ r, g, b }`.
#[wasm_bindgen(js_name = hexToRgb)]
pub fn hex_to_rgb_js(hex: &str) -> Result<JsValue, JsError> {
    let rgb = hex_to_rgb(hex).map_err(|e| JsError::new(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&RgbJs::from(rgb))
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Format channels as `#RRGGBB`.
#[wasm_bindgen(js_name = rgbToHex)]
pub fn rgb_to_hex_js(r: u8, g: u8, b: u8) -> String {
    Rgb::new(r, g, b).to_hex()
}

fn recolorize_bytes(bytes: &[u8], hex: &str, options: RecolorOptionsJs) -> Result<String, CodecError> {
    let target = hex_to_rgb(hex).map_err(TintError::from)?;
    let options = options.into_core().map_err(TintError::from)?;
    tint_codec::recolorize_to_data_url(bytes, target, &options)
}

fn recolorize_bytes_batch(
    bytes: &[u8],
    hexes: &[String],
    options: RecolorOptionsJs,
) -> Result<Vec<String>, CodecError> {
    let targets = hexes
        .iter()
        .map(|hex| hex_to_rgb(hex))
        .collect::<Result<Vec<_>, _>>()
        .map_err(TintError::from)?;
    let options = options.into_core().map_err(TintError::from)?;
    tint_codec::recolorize_batch_to_data_urls(bytes, &targets, &options)
}

fn recolorize_rgba_buffer(
    width: u32,
    height: u32,
    rgba: &[u8],
    hex: &str,
    options: RecolorOptionsJs,
) -> Result<Vec<u8>, TintError> {
    let target = hex_to_rgb(hex)?;
    let options = options.into_core()?;
    recolorize_raw(width, height, rgba, target, &options)
}

fn nearest(
    hex: &str,
    catalog: &[CatalogColor],
    limit: usize,
    policy: Option<&str>,
) -> Result<Vec<MatchResultJs>, TintError> {
    let matcher = ColorMatcher::new(parse_policy(policy)?);
    let matches = matcher.find_nearest_hex(hex, catalog, limit)?;
    Ok(matches.into_iter().map(MatchResultJs::from).collect())
}

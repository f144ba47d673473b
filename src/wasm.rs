//! WASM bindings for spectable
//!
//! JavaScript-accessible rendering. Input data is passed as JSON text, the
//! way the content pipeline already stores it; options are plain objects.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::features::html::{to_html, HtmlOptions};
#[cfg(feature = "wasm")]
use crate::{ComparisonOptions, ComparisonSpec, DatasheetOptions, Grid, RenderOutput};

/// Options accepted by every render function (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WasmRenderOptions {
    pub datasheet: DatasheetOptions,
    pub comparison: ComparisonOptions,
    pub html: HtmlOptions,
}

/// Render result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct RenderResult {
    /// HTML table, or the table model as JSON
    pub output: String,
    /// Whether rendering was successful
    pub success: bool,
    /// Error message if the input could not be read
    pub error: Option<String>,
    /// Warnings during rendering
    pub warnings: Vec<String>,
}

#[cfg(feature = "wasm")]
impl RenderResult {
    fn failed(error: String) -> Self {
        RenderResult {
            output: String::new(),
            success: false,
            error: Some(error),
            warnings: vec![],
        }
    }

    fn from_output(rendered: RenderOutput, as_html: bool, html: &HtmlOptions) -> Self {
        let output = if as_html {
            Ok(to_html(&rendered.table, html))
        } else {
            serde_json::to_string(&rendered.table)
        };
        match output {
            Ok(output) => RenderResult {
                output,
                success: true,
                error: None,
                warnings: rendered.warnings.iter().map(ToString::to_string).collect(),
            },
            Err(e) => Self::failed(e.to_string()),
        }
    }
}

#[cfg(feature = "wasm")]
fn read_options(options: JsValue) -> WasmRenderOptions {
    if options.is_undefined() || options.is_null() {
        WasmRenderOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).unwrap_or_default()
    }
}

#[cfg(feature = "wasm")]
fn to_js(result: &RenderResult) -> JsValue {
    serde_wasm_bindgen::to_value(result).unwrap_or(JsValue::NULL)
}

#[cfg(feature = "wasm")]
fn render_datasheet_result(input: &str, options: JsValue, as_html: bool) -> JsValue {
    let opts = read_options(options);
    let result = match serde_json::from_str::<Grid>(input) {
        Ok(grid) => RenderResult::from_output(
            crate::render_datasheet_with_diagnostics(&grid, &opts.datasheet),
            as_html,
            &opts.html,
        ),
        Err(e) => RenderResult::failed(format!("Invalid datasheet: {}", e)),
    };
    to_js(&result)
}

#[cfg(feature = "wasm")]
fn render_comparison_result(input: &str, options: JsValue, as_html: bool) -> JsValue {
    let opts = read_options(options);
    let result = match serde_json::from_str::<ComparisonSpec>(input) {
        Ok(spec) => RenderResult::from_output(
            crate::render_comparison_with_diagnostics(&spec, &opts.comparison),
            as_html,
            &opts.html,
        ),
        Err(e) => RenderResult::failed(format!("Invalid comparison spec: {}", e)),
    };
    to_js(&result)
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render a datasheet grid (JSON) to an HTML table
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderDatasheetHtml")]
pub fn render_datasheet_html_wasm(input: &str, options: JsValue) -> JsValue {
    render_datasheet_result(input, options, true)
}

/// Render a datasheet grid (JSON) to a table model (JSON)
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderDatasheetJson")]
pub fn render_datasheet_json_wasm(input: &str, options: JsValue) -> JsValue {
    render_datasheet_result(input, options, false)
}

/// Render a comparison spec (JSON) to an HTML table
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderComparisonHtml")]
pub fn render_comparison_html_wasm(input: &str, options: JsValue) -> JsValue {
    render_comparison_result(input, options, true)
}

/// Render a comparison spec (JSON) to a table model (JSON)
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderComparisonJson")]
pub fn render_comparison_json_wasm(input: &str, options: JsValue) -> JsValue {
    render_comparison_result(input, options, false)
}

/// Orientation a grid (JSON) would be read in
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "detectOrientation")]
pub fn detect_orientation_wasm(input: &str) -> String {
    serde_json::from_str::<Grid>(input)
        .map(|g| g.orientation.to_string())
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

//! WASM Bridge crate for the radar chart plugin
//! Exposes the plugin to the JavaScript data-grid host. Tables and attributes
//! cross the boundary as JSON; errors come back as `ErrorResponse` JSON.

use radar_chart_config::{AttributeFormat, AttributeParser};
use radar_chart_data::ChronoLocalizer;
use radar_chart_shared::{ErrorResponse, RadarChartError, TableSnapshot};
use wasm_bindgen::prelude::*;

pub mod plugin;

pub use plugin::RadarChartPlugin;

#[wasm_bindgen]
pub struct RadarChart {
    plugin: RadarChartPlugin,
}

#[wasm_bindgen]
impl RadarChart {
    #[wasm_bindgen(constructor)]
    pub fn new(id: &str) -> RadarChart {
        RadarChart {
            plugin: RadarChartPlugin::new(id),
        }
    }

    /// Resolve the plugin attributes, given as a JSON object of scalars
    #[wasm_bindgen]
    pub fn initialize(&mut self, attributes_json: &str) -> Result<(), JsValue> {
        self.initialize_json(attributes_json)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Render a JSON table snapshot; returns the element as JSON
    #[wasm_bindgen]
    pub fn render(&self, table_json: &str, locale: &str) -> Result<String, JsValue> {
        self.render_json(table_json, locale)
            .map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen(getter)]
    pub fn initialized(&self) -> bool {
        self.plugin.is_initialized()
    }
}

impl RadarChart {
    fn initialize_json(&mut self, attributes_json: &str) -> Result<(), String> {
        let attributes = AttributeParser::parse_string(attributes_json, AttributeFormat::Json)
            .map_err(|e| self.error_json(e, "initialize"))?;

        self.plugin
            .initialize(&attributes)
            .map_err(|e| self.error_json(e, "initialize"))
    }

    fn render_json(&self, table_json: &str, locale: &str) -> Result<String, String> {
        let table =
            TableSnapshot::from_json(table_json).map_err(|e| self.error_json(e, "render"))?;
        let localizer = ChronoLocalizer::new(locale);

        self.plugin
            .render(&table, &localizer)
            .map(|element| element.to_json())
            .map_err(|e| self.error_json(e, "render"))
    }

    fn error_json(&self, error: RadarChartError, operation: &str) -> String {
        log::error!("Radar chart {:?} {operation} failed: {error}", self.plugin.id());
        ErrorResponse::new(error)
            .with_context("RadarChart", operation)
            .to_json()
    }
}

/// Initialize the WASM module
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // a second module instance finds the logger already installed
    let _ = console_log::init_with_level(log::Level::Info);
}

//! Section plugin lifecycle: initialize once, render on every data refresh

use radar_chart_config::{AttributeMap, PluginConfiguration};
use radar_chart_data::{DatasetBuilder, Localizer};
use radar_chart_renderer::RenderedElement;
use radar_chart_shared::{DataView, RadarChartResult};

/// Radar chart section plugin
#[derive(Debug, Default)]
pub struct RadarChartPlugin {
    id: String,
    config: Option<PluginConfiguration>,
}

impl RadarChartPlugin {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            config: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Resolve the plugin attributes. A failure leaves the plugin
    /// uninitialized.
    pub fn initialize(&mut self, attributes: &AttributeMap) -> RadarChartResult<()> {
        let config = PluginConfiguration::from_attributes(attributes)?;
        log::info!(
            "Radar chart plugin {:?} initialized with {} value fields",
            self.id,
            config.series_value_fields.len()
        );
        self.config = Some(config);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.config.is_some()
    }

    pub fn configuration(&self) -> Option<&PluginConfiguration> {
        self.config.as_ref()
    }

    /// Build the element for the current table contents
    pub fn render<V, L>(&self, table: &V, localizer: &L) -> RadarChartResult<RenderedElement>
    where
        V: DataView,
        L: Localizer + ?Sized,
    {
        let Some(config) = self.configuration() else {
            return Ok(RenderedElement::Empty);
        };

        let outcome = DatasetBuilder::new(config, localizer).build_chart(table)?;
        if outcome.is_no_data() {
            log::debug!(
                "Radar chart plugin {:?}: no rows to plot under locale {}",
                self.id(),
                localizer.locale()
            );
        }
        Ok(RenderedElement::from_outcome(outcome, config))
    }
}

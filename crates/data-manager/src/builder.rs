//! Maps table rows onto radar chart series

use radar_chart_config::PluginConfiguration;
use radar_chart_renderer::SeriesColor;
use radar_chart_shared::{
    CellValue, ChartData, ChartOutcome, DataView, Property, RadarChartResult, SeriesDataset,
};

use crate::labels::{LabelFormatter, LabelTracker};
use crate::localizer::Localizer;

pub const SERIES_BORDER_WIDTH: u32 = 1;

/// Builds chart data for one render
pub struct DatasetBuilder<'a, L: Localizer + ?Sized> {
    config: &'a PluginConfiguration,
    localizer: &'a L,
}

impl<'a, L: Localizer + ?Sized> DatasetBuilder<'a, L> {
    pub fn new(config: &'a PluginConfiguration, localizer: &'a L) -> Self {
        Self { config, localizer }
    }

    /// Resolve the value fields to column descriptors, in declared order
    pub fn resolve_value_properties<'t, V: DataView>(
        &self,
        table: &'t V,
    ) -> RadarChartResult<Vec<&'t Property>> {
        self.config
            .series_value_fields
            .iter()
            .map(|id| table.find_property(id))
            .collect()
    }

    /// Build axis labels and one dataset per row passing the filter.
    ///
    /// The value, label and filter columns are all resolved before any row
    /// is read, so an unknown identifier fails even on an empty table.
    /// A row's color comes from its index in the unfiltered table.
    pub fn build_chart<V: DataView>(&self, table: &V) -> RadarChartResult<ChartOutcome> {
        let properties = self.resolve_value_properties(table)?;
        let label_property = table.find_property(&self.config.series_label_field)?;
        let filter_field = match self.config.active_filter_field() {
            Some(field) => Some(table.find_property(field)?.id.as_str()),
            None => None,
        };

        let formatter = LabelFormatter::new(self.localizer, self.config.label_format.as_deref());
        let mut tracker = LabelTracker::new();

        let datasets: Vec<SeriesDataset> = table
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| match filter_field {
                Some(field) => table
                    .cell_value(row, field)
                    .is_some_and(CellValue::is_truthy),
                None => true,
            })
            .map(|(series_number, row)| {
                let label = tracker.unique(formatter.format_label(table, row, label_property));
                let color = SeriesColor::by_series_number(series_number);

                SeriesDataset {
                    label,
                    data: properties
                        .iter()
                        .map(|prop| table.cell_value(row, &prop.id).and_then(CellValue::as_number))
                        .collect(),
                    background_color: color.background(),
                    border_color: color.border(),
                    border_width: SERIES_BORDER_WIDTH,
                }
            })
            .collect();

        log::debug!(
            "Built {} of {} rows into series",
            datasets.len(),
            table.rows().len()
        );

        if datasets.is_empty() {
            return Ok(ChartOutcome::NoData {
                message: self.config.no_data_message.clone(),
            });
        }

        Ok(ChartOutcome::Chart(ChartData {
            labels: properties.iter().map(|prop| prop.name.clone()).collect(),
            datasets,
        }))
    }
}

/// Build chart data for `table` under `config`
pub fn build_chart<V, L>(
    config: &PluginConfiguration,
    table: &V,
    localizer: &L,
) -> RadarChartResult<ChartOutcome>
where
    V: DataView,
    L: Localizer + ?Sized,
{
    DatasetBuilder::new(config, localizer).build_chart(table)
}

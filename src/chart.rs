use serde::{Deserialize, Serialize};

use crate::color::species_hex;
use crate::data::model::{IrisDataset, NumericColumn, Species};
use crate::theme::ThemeName;

// ---------------------------------------------------------------------------
// Chart specification
// ---------------------------------------------------------------------------

/// One scatter series: every record of one species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub species: Species,
    /// `#RRGGBB`, fixed per species.
    pub color: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<Vec<f64>>,
}

/// Declarative description of a scatter chart, handed to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x: NumericColumn,
    pub y: NumericColumn,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<NumericColumn>,
    pub theme: ThemeName,
    pub traces: Vec<Trace>,
}

impl ChartSpec {
    pub fn is_3d(&self) -> bool {
        self.z.is_some()
    }
}

/// Build a scatter chart of `x` against `y` (and `z` when given), one trace per species.
pub fn build_chart(
    dataset: &IrisDataset,
    x: NumericColumn,
    y: NumericColumn,
    z: Option<NumericColumn>,
    theme: &ThemeName,
) -> ChartSpec {
    let traces = Species::ALL
        .into_iter()
        .map(|species| {
            let group = dataset.group(species);
            Trace {
                species,
                color: species_hex(species).to_string(),
                x: group.values(x).collect(),
                y: group.values(y).collect(),
                z: z.map(|z| group.values(z).collect()),
            }
        })
        .collect();

    ChartSpec {
        title: default_title(x, y, z),
        x,
        y,
        z,
        theme: theme.clone(),
        traces,
    }
}

fn default_title(x: NumericColumn, y: NumericColumn, z: Option<NumericColumn>) -> String {
    match z {
        Some(z) => format!("{} / {} / {}", x.label(), y.label(), z.label()),
        None => format!("{} vs {}", x.label(), y.label()),
    }
}

// ---------------------------------------------------------------------------
// Chart sets per app variant
// ---------------------------------------------------------------------------

/// Which set of charts the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppVariant {
    /// Three 2D scatter plots.
    Planar,
    /// Two 2D scatter plots and one 3D scatter plot.
    #[default]
    Spatial,
}

impl AppVariant {
    pub const ALL: [AppVariant; 2] = [AppVariant::Planar, AppVariant::Spatial];

    pub fn label(self) -> &'static str {
        match self {
            AppVariant::Planar => "2D",
            AppVariant::Spatial => "2D + 3D",
        }
    }
}

/// Build every chart shown for a variant, all sharing one theme.
pub fn chart_set(dataset: &IrisDataset, variant: AppVariant, theme: &ThemeName) -> Vec<ChartSpec> {
    use NumericColumn::*;

    let mut sepal = build_chart(dataset, SepalLength, SepalWidth, None, theme);
    sepal.title = "Sepal: Length vs Width".to_string();
    let mut petal = build_chart(dataset, PetalLength, PetalWidth, None, theme);
    petal.title = "Petal: Length vs Width".to_string();

    let third = match variant {
        AppVariant::Planar => {
            let mut chart = build_chart(dataset, SepalLength, PetalLength, None, theme);
            chart.title = "Sepal Length vs Petal Length".to_string();
            chart
        }
        AppVariant::Spatial => {
            let mut chart =
                build_chart(dataset, PetalLength, PetalWidth, Some(SepalLength), theme);
            chart.title = "Three-Dimensional View".to_string();
            chart
        }
    };

    vec![sepal, petal, third]
}

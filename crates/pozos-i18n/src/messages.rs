//! Per-chart label sets resolved from the catalogues.

use crate::error::I18nResult;
use crate::manager::I18nManager;

/// Message layout of one chart: `<prefix>-title`, `<prefix>-x`, `<prefix>-y`,
/// optionally `<prefix>-z`, plus one `<prefix>-<legend>` per legend entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartMessages {
    pub prefix: &'static str,
    pub has_z: bool,
    pub legends: &'static [&'static str],
}

pub const VIOLIN: ChartMessages = ChartMessages {
    prefix: "violin",
    has_z: false,
    legends: &[],
};

pub const CUMULATIVE: ChartMessages = ChartMessages {
    prefix: "cumulative",
    has_z: false,
    legends: &[],
};

pub const DISTRIBUTION: ChartMessages = ChartMessages {
    prefix: "distribution",
    has_z: false,
    legends: &["gas", "oil"],
};

pub const AVERAGE: ChartMessages = ChartMessages {
    prefix: "average",
    has_z: false,
    legends: &["overall"],
};

pub const SCATTER: ChartMessages = ChartMessages {
    prefix: "scatter",
    has_z: false,
    legends: &[],
};

pub const DAILY: ChartMessages = ChartMessages {
    prefix: "daily",
    has_z: false,
    legends: &["series"],
};

pub const SURFACE: ChartMessages = ChartMessages {
    prefix: "surface",
    has_z: true,
    legends: &[],
};

pub const SCATTER_3D: ChartMessages = ChartMessages {
    prefix: "scatter3d",
    has_z: true,
    legends: &["series"],
};

/// Every chart's message layout, in report order.
pub const ALL_CHARTS: [ChartMessages; 8] = [
    VIOLIN,
    CUMULATIVE,
    DISTRIBUTION,
    AVERAGE,
    SCATTER,
    DAILY,
    SURFACE,
    SCATTER_3D,
];

impl ChartMessages {
    /// Every message id this chart needs.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = vec![
            format!("{}-title", self.prefix),
            format!("{}-x", self.prefix),
            format!("{}-y", self.prefix),
        ];
        if self.has_z {
            keys.push(format!("{}-z", self.prefix));
        }
        keys.extend(self.legends.iter().map(|l| format!("{}-{}", self.prefix, l)));
        keys
    }
}

/// Resolved texts of one chart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChartLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub z_label: Option<String>,
    /// Legend entries in the order declared by [`ChartMessages::legends`].
    pub legend: Vec<String>,
}

impl ChartLabels {
    /// Resolve a chart's labels; `well` fills the `$well` placeholders.
    pub fn resolve(i18n: &I18nManager, chart: ChartMessages, well: &str) -> I18nResult<Self> {
        let get = |suffix: &str| i18n.get_well_message(&format!("{}-{}", chart.prefix, suffix), well);

        let z_label = if chart.has_z { Some(get("z")?) } else { None };
        let legend = chart
            .legends
            .iter()
            .map(|l| get(*l))
            .collect::<I18nResult<Vec<_>>>()?;

        Ok(Self {
            title: get("title")?,
            x_label: get("x")?,
            y_label: get("y")?,
            z_label,
            legend,
        })
    }

    /// Legend entry at `index`, or an empty string.
    pub fn legend_at(&self, index: usize) -> &str {
        self.legend.get(index).map(String::as_str).unwrap_or_default()
    }
}

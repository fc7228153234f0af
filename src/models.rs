use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chart types understood by the spec builder.
///
/// Serialized with the tags the charting library expects (`"polarArea"`, not `"polar_area"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    Bar,
    Line,
    Pie,
    Doughnut,
    Radar,
    PolarArea,
}

impl ChartType {
    pub const ALL: [ChartType; 6] = [
        ChartType::Bar,
        ChartType::Line,
        ChartType::Pie,
        ChartType::Doughnut,
        ChartType::Radar,
        ChartType::PolarArea,
    ];

    /// Tag used on the wire and on the command line.
    pub fn tag(self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Pie => "pie",
            ChartType::Doughnut => "doughnut",
            ChartType::Radar => "radar",
            ChartType::PolarArea => "polarArea",
        }
    }

    pub fn descriptor(self) -> &'static ChartTypeDescriptor {
        // CHART_TYPES is declared in ALL order.
        &CHART_TYPES[self as usize]
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ChartType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartType::ALL
            .into_iter()
            .find(|t| t.tag() == s.trim())
            .ok_or_else(|| Error::UnknownChartType(s.to_string()))
    }
}

/// Static presentation data for a chart type picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartTypeDescriptor {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub name: &'static str,
    /// Font Awesome icon class.
    pub icon: &'static str,
    pub description: &'static str,
}

pub const CHART_TYPES: [ChartTypeDescriptor; 6] = [
    ChartTypeDescriptor {
        chart_type: ChartType::Bar,
        name: "柱状图",
        icon: "fas fa-chart-bar",
        description: "显示数据的大小对比关系",
    },
    ChartTypeDescriptor {
        chart_type: ChartType::Line,
        name: "折线图",
        icon: "fas fa-chart-line",
        description: "展示数据随时间的变化趋势",
    },
    ChartTypeDescriptor {
        chart_type: ChartType::Pie,
        name: "饼图",
        icon: "fas fa-chart-pie",
        description: "展示数据的占比情况",
    },
    ChartTypeDescriptor {
        chart_type: ChartType::Doughnut,
        name: "环形图",
        icon: "fas fa-circle",
        description: "类似饼图，中间有空白",
    },
    ChartTypeDescriptor {
        chart_type: ChartType::Radar,
        name: "雷达图",
        icon: "fas fa-spider",
        description: "多维度数据比较",
    },
    ChartTypeDescriptor {
        chart_type: ChartType::PolarArea,
        name: "极区图",
        icon: "fas fa-sun",
        description: "结合饼图和雷达图特点",
    },
];

/// Dataset label used when the user left the field empty.
pub const DEFAULT_DATASET_LABEL: &str = "数据集";

/// Parsed, typed input for one chart build.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRequest {
    pub chart_type: ChartType,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// User-supplied colors; `None` selects the default palette.
    pub colors: Option<Vec<String>>,
    pub dataset_label: String,
    pub x_title: String,
    pub y_title: String,
}

impl ChartRequest {
    /// Minimal request with no colors and empty axis titles.
    pub fn new(chart_type: ChartType, labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            chart_type,
            labels,
            values,
            colors: None,
            dataset_label: DEFAULT_DATASET_LABEL.to_string(),
            x_title: String::new(),
            y_title: String::new(),
        }
    }
}

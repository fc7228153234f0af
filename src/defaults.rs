//! Sample data offered when a chart type is selected.

use crate::app::FormState;
use crate::models::ChartType;

/// Sample field values for one chart type. `None` leaves that field alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub labels: &'static str,
    pub values: &'static str,
    pub colors: Option<&'static str>,
    pub dataset_label: Option<&'static str>,
    pub x_axis_label: Option<&'static str>,
    pub y_axis_label: Option<&'static str>,
}

const MONTHLY_SALES: Sample = Sample {
    labels: "一月,二月,三月,四月,五月,六月",
    values: "12,19,3,17,28,24",
    colors: None,
    dataset_label: Some("销售数据"),
    x_axis_label: Some("月份"),
    y_axis_label: Some("销售额"),
};

const TEAM_SHARE: Sample = Sample {
    labels: "红队,蓝队,绿队,黄队",
    values: "25,40,20,15",
    colors: Some("#FF6384,#36A2EB,#4BC0C0,#FFCE56"),
    dataset_label: None,
    x_axis_label: None,
    y_axis_label: None,
};

const ATTRIBUTES: Sample = Sample {
    labels: "攻击,防御,速度,生命,魔法",
    values: "65,59,90,81,56",
    colors: None,
    dataset_label: Some("能力值"),
    x_axis_label: None,
    y_axis_label: None,
};

const KPIS: Sample = Sample {
    labels: "市场份额,用户满意度,增长率,投资回报",
    values: "70,85,65,90",
    colors: Some(
        "rgba(255,99,132,0.7),rgba(54,162,235,0.7),rgba(255,206,86,0.7),rgba(75,192,192,0.7)",
    ),
    dataset_label: None,
    x_axis_label: None,
    y_axis_label: None,
};

pub fn sample_for(chart_type: ChartType) -> &'static Sample {
    match chart_type {
        ChartType::Bar | ChartType::Line => &MONTHLY_SALES,
        ChartType::Pie | ChartType::Doughnut => &TEAM_SHARE,
        ChartType::Radar => &ATTRIBUTES,
        ChartType::PolarArea => &KPIS,
    }
}

/// Fill the empty fields of `form` with the sample for `chart_type`.
///
/// A field holding any text, even whitespace, is never overwritten.
pub fn apply_defaults(form: &mut FormState, chart_type: ChartType) {
    let sample = sample_for(chart_type);
    fill(&mut form.labels, Some(sample.labels));
    fill(&mut form.values, Some(sample.values));
    fill(&mut form.colors, sample.colors);
    fill(&mut form.dataset_label, sample.dataset_label);
    fill(&mut form.x_axis_label, sample.x_axis_label);
    fill(&mut form.y_axis_label, sample.y_axis_label);
}

fn fill(field: &mut String, sample: Option<&str>) {
    if let Some(s) = sample
        && field.is_empty()
    {
        *field = s.to_string();
    }
}

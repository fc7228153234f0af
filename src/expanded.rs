//! Expanded (fullscreen) presentation of an already-built chart.

use crate::spec::{
    ChartSpec, Font, Layout, Legend, LegendLabels, LegendPosition, Padding, Plugins, Title,
};

/// Title used when the dataset label field is empty.
pub const FALLBACK_TITLE: &str = "数据图表";

/// Deep-copy `spec` and overlay the expanded presentation.
///
/// `dataset_label` is the raw form field; an empty label selects [`FALLBACK_TITLE`].
/// The input spec is never modified.
pub fn expanded(spec: &ChartSpec, dataset_label: &str) -> ChartSpec {
    let mut out = spec.clone();
    let options = &mut out.options;
    options.responsive = true;
    options.maintain_aspect_ratio = false;
    options.layout = Some(Layout {
        padding: Padding::uniform(10),
    });

    let text = if dataset_label.is_empty() {
        FALLBACK_TITLE
    } else {
        dataset_label
    };
    let plugins = options.plugins.get_or_insert_with(Plugins::default);
    plugins.legend = Some(Legend {
        position: LegendPosition::Top,
        labels: Some(LegendLabels {
            font: Font {
                size: 14,
                weight: None,
            },
            padding: 20,
        }),
    });
    plugins.title = Some(Title {
        display: true,
        text: text.to_string(),
        font: Font {
            size: 18,
            weight: Some("bold".into()),
        },
        padding: Padding {
            top: Some(10),
            bottom: Some(30),
            ..Padding::default()
        },
    });
    out
}

use formchart::error::RenderError;
use formchart::models::{ChartRequest, ChartType};
use formchart::render::{HtmlRenderer, html_page};
use formchart::spec::{self, ChartSpec};
use formchart::{ChartSlot, Renderer, Surface, SurfaceId, SurfaceSize};
use std::collections::BTreeMap;
use std::fs;

/// Renderer that records lifecycle calls and refuses double use of a surface.
#[derive(Default)]
struct Recorder {
    next: u32,
    live: BTreeMap<SurfaceId, u32>,
    log: Vec<String>,
}

impl Renderer for Recorder {
    type Chart = (SurfaceId, u32);

    fn create(&mut self, surface: &Surface, _spec: &ChartSpec) -> Result<Self::Chart, RenderError> {
        if self.live.contains_key(&surface.id) {
            return Err(RenderError::SurfaceInUse(surface.id));
        }
        self.next += 1;
        self.live.insert(surface.id, self.next);
        self.log.push(format!("create {} #{}", surface.id, self.next));
        Ok((surface.id, self.next))
    }

    fn destroy(&mut self, chart: Self::Chart) {
        self.live.remove(&chart.0);
        self.log.push(format!("destroy {} #{}", chart.0, chart.1));
    }
}

fn bar() -> ChartSpec {
    spec::build(&ChartRequest::new(
        ChartType::Bar,
        vec!["a".into()],
        vec![1.0],
    ))
}

#[test]
fn mount_destroys_before_replacing() {
    let mut r = Recorder::default();
    let mut slot = ChartSlot::new(SurfaceId::Primary);
    slot.mount(&mut r, None, &bar()).unwrap();
    slot.mount(&mut r, None, &bar()).unwrap();
    assert_eq!(
        r.log,
        vec!["create primary #1", "destroy primary #1", "create primary #2"]
    );
    assert_eq!(slot.chart(), Some(&(SurfaceId::Primary, 2)));
    assert_eq!(r.live.len(), 1);
}

#[test]
fn release_is_idempotent() {
    let mut r = Recorder::default();
    let mut slot = ChartSlot::new(SurfaceId::Expanded);
    assert!(!slot.release(&mut r));
    slot.mount(&mut r, None, &bar()).unwrap();
    assert!(slot.release(&mut r));
    assert!(!slot.release(&mut r));
    assert!(!slot.is_live());
    assert!(r.live.is_empty());
}

#[test]
fn slots_on_different_surfaces_are_independent() {
    let mut r = Recorder::default();
    let mut a = ChartSlot::new(SurfaceId::Primary);
    let mut b = ChartSlot::new(SurfaceId::Expanded);
    a.mount(&mut r, None, &bar()).unwrap();
    b.mount(&mut r, None, &bar()).unwrap();
    b.release(&mut r);
    assert!(a.is_live());
    assert_eq!(r.live.keys().collect::<Vec<_>>(), vec![&SurfaceId::Primary]);
}

#[test]
fn html_renderer_writes_pages_and_guards_surfaces() {
    let dir = tempfile::tempdir().unwrap();
    let mut r = HtmlRenderer::new(dir.path().join("out"));
    let surface = Surface {
        id: SurfaceId::Primary,
        size: None,
    };
    let chart = r.create(&surface, &bar()).unwrap();
    assert_eq!(chart.path, dir.path().join("out").join("primary.html"));
    let page = fs::read_to_string(&chart.path).unwrap();
    assert!(page.contains("chart.js"));
    assert!(page.contains("id=\"chartCanvas\""));
    assert!(page.contains("\"type\": \"bar\""));

    let err = r.create(&surface, &bar()).unwrap_err();
    assert!(matches!(err, RenderError::SurfaceInUse(SurfaceId::Primary)));

    r.destroy(chart);
    assert!(!r.is_live(SurfaceId::Primary));
    r.create(&surface, &bar()).unwrap();
}

#[test]
fn html_page_sizes_canvas_to_surface() {
    let surface = Surface {
        id: SurfaceId::Expanded,
        size: Some(SurfaceSize {
            width: 1200,
            height: 700,
        }),
    };
    let page = html_page(&surface, &bar()).unwrap();
    assert!(page.contains("<canvas id=\"fullscreenChartCanvas\" width=\"1200\" height=\"700\">"));
    assert!(page.contains("width:1200px;height:700px;"));
}

#[test]
fn html_page_keeps_markup_out_of_the_script_block() {
    let req = ChartRequest::new(
        ChartType::Bar,
        vec!["</script>".into(), "<!--<script>".into()],
        vec![1.0, 2.0],
    );
    let page = html_page(
        &Surface {
            id: SurfaceId::Primary,
            size: None,
        },
        &spec::build(&req),
    )
    .unwrap();
    assert_eq!(page.matches("</script>").count(), 2);
    assert!(!page.contains("<!--"));
    assert!(page.contains("\\u003c/script>"));
    assert!(page.contains("\\u003c!--\\u003cscript>"));
}

/// Creates `budget` charts, then fails every further creation.
struct Flaky {
    budget: usize,
    destroyed: usize,
}

impl Renderer for Flaky {
    type Chart = ();

    fn create(&mut self, surface: &Surface, _spec: &ChartSpec) -> Result<(), RenderError> {
        if self.budget == 0 {
            return Err(RenderError::SurfaceInUse(surface.id));
        }
        self.budget -= 1;
        Ok(())
    }

    fn destroy(&mut self, _chart: ()) {
        self.destroyed += 1;
    }
}

#[test]
fn failed_mount_releases_old_chart_and_leaves_slot_empty() {
    let mut r = Flaky {
        budget: 1,
        destroyed: 0,
    };
    let mut slot = ChartSlot::new(SurfaceId::Primary);
    slot.mount(&mut r, None, &bar()).unwrap();
    assert!(slot.is_live());

    let err = slot.mount(&mut r, None, &bar()).unwrap_err();
    assert!(matches!(err, RenderError::SurfaceInUse(SurfaceId::Primary)));
    assert!(!slot.is_live());
    assert_eq!(r.destroyed, 1);
    assert!(!slot.release(&mut r));
}

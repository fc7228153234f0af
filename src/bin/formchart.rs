use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use formchart::render::HtmlRenderer;
use formchart::{Action, App, CHART_TYPES, ChartType, Field, SurfaceSize, storage};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "formchart",
    version,
    about = "Turn delimited labels/values into Chart.js charts and summary statistics"
)]
struct Cli {
    /// Log debug output (otherwise RUST_LOG decides).
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the supported chart types.
    Types,
    /// Build a chart (and optionally its expanded view, spec JSON, and stats).
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Chart type: bar, line, pie, doughnut, radar, polarArea
    #[arg(short = 't', long = "type", value_parser = parse_chart_type)]
    chart_type: ChartType,
    /// Labels separated by `,` or `，`. Sample data is used when omitted.
    #[arg(short, long)]
    labels: Option<String>,
    /// Values separated by `,` or `，`. Sample data is used when omitted.
    #[arg(short = 'd', long)]
    values: Option<String>,
    /// Slice colors separated by `,` or `，` (pie, doughnut, polarArea).
    #[arg(short, long)]
    colors: Option<String>,
    /// Dataset label (also the expanded view's title).
    #[arg(long)]
    dataset_label: Option<String>,
    /// X axis title (bar, line).
    #[arg(long)]
    x_label: Option<String>,
    /// Y axis title (bar, line).
    #[arg(long)]
    y_label: Option<String>,
    /// Directory receiving primary.html (and expanded.html).
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Also render the expanded (fullscreen) view.
    #[arg(long, default_value_t = false)]
    expanded: bool,
    /// Width of the expanded container (default 1600).
    #[arg(long, default_value_t = 1600)]
    width: u32,
    /// Height of the expanded container (default 900).
    #[arg(long, default_value_t = 900)]
    height: u32,
    /// Save the primary chart spec as JSON.
    #[arg(long)]
    spec_json: Option<PathBuf>,
    /// Print the summary statistics to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn parse_chart_type(s: &str) -> Result<ChartType, String> {
    s.parse::<ChartType>().map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.cmd {
        Command::Types => cmd_types(),
        Command::Generate(args) => cmd_generate(args),
    }
}

fn cmd_types() -> Result<()> {
    for d in CHART_TYPES.iter() {
        println!(
            "{:<10} {}  [{}]  {}",
            d.chart_type.tag(),
            d.name,
            d.icon,
            d.description
        );
    }
    Ok(())
}

fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let mut app = App::new(HtmlRenderer::new(&args.out_dir));

    // User input first, so the type's sample data only fills what was left empty.
    let edits = [
        (Field::Labels, args.labels),
        (Field::Values, args.values),
        (Field::Colors, args.colors),
        (Field::DatasetLabel, args.dataset_label),
        (Field::XAxisLabel, args.x_label),
        (Field::YAxisLabel, args.y_label),
    ];
    for (field, text) in edits {
        if let Some(text) = text {
            app.dispatch(Action::Edit(field, text))?;
        }
    }
    app.dispatch(Action::SelectType(args.chart_type))?;
    app.dispatch(Action::Generate)
        .context("failed to generate chart")?;
    eprintln!(
        "Wrote chart to {}",
        app.renderer().path_for(formchart::SurfaceId::Primary).display()
    );

    if let Some(path) = args.spec_json.as_ref() {
        let spec = app
            .spec()
            .ok_or_else(|| anyhow::anyhow!("no chart spec was built"))?;
        storage::save_spec_json(spec, path)?;
        eprintln!("Saved chart spec to {}", path.display());
    }

    if args.expanded {
        app.dispatch(Action::ToggleFullscreen)?;
        let size = SurfaceSize {
            width: args.width,
            height: args.height,
        };
        if app.layout_settled(size)? {
            eprintln!(
                "Wrote expanded chart to {}",
                app.renderer().path_for(formchart::SurfaceId::Expanded).display()
            );
        }
    }

    if args.stats {
        let s = app.state().statistics;
        println!("sum={:.2}", s.sum);
        println!("average={:.2}", s.average);
        println!("max={:.2}", s.max);
        println!("min={:.2}", s.min);
        println!("median={:.2}", s.median);
        println!("stdDev={:.2}", s.std_dev);
    }

    app.shutdown();
    Ok(())
}

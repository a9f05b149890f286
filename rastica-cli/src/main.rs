use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "rastica", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a scene JSON to a PNG.
    Render(RenderArgs),
    /// Convert a color between color models.
    Convert(ConvertArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Color to convert: `#RRGGBB[AA]` hex, or any JSON color form the scene
    /// format accepts (`{"r":..}`, `{"h":..}`, `[r,g,b]`).
    #[arg(long)]
    color: String,

    /// Target color model, or `all`.
    #[arg(long, value_enum, default_value = "all")]
    space: SpaceArg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SpaceArg {
    All,
    Hsl,
    Hsv,
    Cmy,
    Cmyk,
    Xyz,
    Lab,
    Ycbcr,
    Yuv,
    Yiq,
    Ypbpr,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Convert(args) => cmd_convert(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read scene '{}'", args.in_path.display()))?;
    let scene = rastica::Scene::from_json(&json)?;
    let surface = rastica::render_scene(&scene)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        surface.data(),
        surface.width(),
        surface.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let spec = parse_color_arg(&args.color)?;
    let color = spec.rgba8();

    let mut report = serde_json::Map::new();
    report.insert("rgba".into(), serde_json::to_value(spec)?);

    let mut put = |key: &str, value: serde_json::Value| {
        report.insert(key.to_owned(), value);
    };
    let want = |s: SpaceArg| args.space == SpaceArg::All || args.space == s;

    if want(SpaceArg::Hsl) {
        put("hsl", serde_json::to_value(color.to_hsl())?);
    }
    if want(SpaceArg::Hsv) {
        put("hsv", serde_json::to_value(color.to_hsv())?);
    }
    if want(SpaceArg::Cmy) {
        put("cmy", serde_json::to_value(color.to_cmy())?);
    }
    if want(SpaceArg::Cmyk) {
        put("cmyk", serde_json::to_value(color.to_cmyk())?);
    }
    if want(SpaceArg::Xyz) {
        put("xyz", serde_json::to_value(color.to_xyz())?);
    }
    if want(SpaceArg::Lab) {
        put("lab", serde_json::to_value(color.to_lab())?);
    }
    if want(SpaceArg::Ycbcr) {
        put("ycbcr", serde_json::to_value(color.to_ycbcr())?);
    }
    if want(SpaceArg::Yuv) {
        put("yuv", serde_json::to_value(color.to_yuv())?);
    }
    if want(SpaceArg::Yiq) {
        put("yiq", serde_json::to_value(color.to_yiq())?);
    }
    if want(SpaceArg::Ypbpr) {
        put("ypbpr", serde_json::to_value(color.to_ypbpr())?);
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn parse_color_arg(s: &str) -> anyhow::Result<rastica::ColorSpec> {
    let trimmed = s.trim();
    let value = if trimmed.starts_with('#') {
        serde_json::Value::String(trimmed.to_owned())
    } else {
        serde_json::from_str(trimmed).with_context(|| format!("parse color '{trimmed}'"))?
    };
    serde_json::from_value(value).with_context(|| format!("invalid color '{trimmed}'"))
}

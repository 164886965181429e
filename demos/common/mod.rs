use std::env;
use std::path::PathBuf;

use statplot::style::Theme;
use statplot::{Style, data, des, drawing};
use statplot_svg::{DrawingParams, SaveSvg};

/// Get a predictable random number generator
#[allow(dead_code)]
pub fn predictable_rng(seed: Option<u64>) -> impl rand::Rng {
    use rand::SeedableRng;
    let seed = seed.unwrap_or(586350478348);
    rand_chacha::ChaCha8Rng::seed_from_u64(seed)
}

#[derive(Debug, Clone)]
struct Args {
    out: Option<PathBuf>,
    theme: Theme,
    scale: f32,
}

impl Default for Args {
    fn default() -> Self {
        Args {
            out: None,
            theme: Theme::default(),
            scale: 1.0,
        }
    }
}

fn parse_args() -> Args {
    let mut args = Args::default();

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "light" => args.theme = Theme::Light,
            "dark" => args.theme = Theme::Dark,
            _ if arg.starts_with("svg=") => {
                let filename = arg.trim_start_matches("svg=");
                args.out = Some(PathBuf::from(filename));
            }
            _ if arg.starts_with("scale=") => {
                let scale = arg.trim_start_matches("scale=");
                match scale.parse() {
                    Ok(scale) => args.scale = scale,
                    Err(_) => eprintln!("Invalid scale: {}", scale),
                }
            }
            _ => {
                eprintln!("Unknown argument: {}", arg);
            }
        }
    }

    args
}

/// Prepare the figure against the source and save it as SVG.
///
/// Recognized command line arguments: `svg=FILE`, `scale=N`, `light`,
/// `dark`. Without `svg=`, the output lands in `<default_name>.svg`.
pub fn save_figure<D>(fig: &des::Figure, data_source: &D, default_name: &str)
where
    D: data::Source,
{
    let args = parse_args();

    let drawing = drawing::Figure::prepare(fig, data_source).unwrap();
    let style: Style = Style {
        theme: args.theme,
        ..Style::default()
    };
    let params = DrawingParams {
        style,
        scale: args.scale,
    };

    let file = args
        .out
        .unwrap_or_else(|| PathBuf::from(format!("{}.svg", default_name)));
    drawing.save_svg(&file, &params).unwrap();
    println!("saved {}", file.display());
}

use std::fs;
use std::path::PathBuf;

use globe_engine::render::{default_filename, export_png, ExportOptions, OutputSurface};
use globe_engine::scene::assemble;
use globe_engine::Config;

const USAGE: &str = r#"globe_cli (globe-engine)

USAGE:
  globe_cli render [options]
  globe_cli bundle [options]
  globe_cli list-defaults

COMMANDS:
  render           Generate the scene and export a framed PNG
  bundle           Generate the scene and print the bundle summary as JSON
  list-defaults    Print the default configuration as JSON

OPTIONS:
  --config <path>    Read configuration JSON from this file
  --out <path>       Output PNG path (render only; default globe-<timestamp>.png)
  --resolution <px>  Square export resolution (render only; default 2048)
  -h, --help         Show this help
"#;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("globe_cli error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut args = Args::new(args);

    let Some(command) = args.next() else {
        print_usage();
        return Ok(());
    };

    match command.as_str() {
        "render" => cmd_render(&mut args),
        "bundle" => cmd_bundle(&mut args),
        "list-defaults" => {
            let json = serde_json::to_string_pretty(&Config::default())
                .map_err(|err| err.to_string())?;
            println!("{json}");
            Ok(())
        }
        "-h" | "--help" | "help" => {
            print_usage();
            Ok(())
        }
        other => Err(format!("unknown command `{other}`\n\n{USAGE}")),
    }
}

fn print_usage() {
    println!("{USAGE}");
}

fn cmd_render(args: &mut Args) -> Result<(), String> {
    let mut config_path: Option<PathBuf> = None;
    let mut out_path: Option<PathBuf> = None;
    let mut options = ExportOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config_path = Some(PathBuf::from(args.value("--config")?)),
            "--out" => out_path = Some(PathBuf::from(args.value("--out")?)),
            "--resolution" => {
                options.resolution = args
                    .value("--resolution")?
                    .parse()
                    .map_err(|err| format!("invalid --resolution: {err}"))?;
            }
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            other => return Err(format!("unknown option `{other}`\n\n{USAGE}")),
        }
    }

    let config = load_config(config_path.as_deref())?;
    let bundle = assemble(&config);

    let out = out_path.unwrap_or_else(|| PathBuf::from(default_filename()));
    let surface = OutputSurface::new(options.resolution, options.resolution);
    export_png(&bundle, &surface, &options, &out).map_err(|err| err.to_string())?;
    println!("wrote {}", out.display());
    Ok(())
}

fn cmd_bundle(args: &mut Args) -> Result<(), String> {
    let mut config_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config_path = Some(PathBuf::from(args.value("--config")?)),
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            other => return Err(format!("unknown option `{other}`\n\n{USAGE}")),
        }
    }

    let config = load_config(config_path.as_deref())?;
    let bundle = assemble(&config);
    let summary = serde_json::json!({
        "rings": bundle.rings.len(),
        "nodes": bundle.nodes.len(),
        "peerConnections": bundle.peer_connections.len(),
        "radialConnections": bundle.radial_connections.len(),
        "outerSphere": bundle.outer_sphere.is_some(),
        "innerSphere": bundle.inner_sphere.is_some(),
        "boundingRadius": bundle.bounding_radius(),
    });
    println!("{}", serde_json::to_string_pretty(&summary).map_err(|err| err.to_string())?);
    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config, String> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = fs::read_to_string(path)
        .map_err(|err| format!("failed to read {}: {err}", path.display()))?;
    serde_json::from_str(&text).map_err(|err| format!("invalid config JSON: {err}"))
}

struct Args {
    args: Vec<String>,
    pos: usize,
}

impl Args {
    fn new(args: Vec<String>) -> Self {
        Self { args, pos: 0 }
    }

    fn next(&mut self) -> Option<String> {
        let arg = self.args.get(self.pos)?.clone();
        self.pos += 1;
        Some(arg)
    }

    fn value(&mut self, flag: &str) -> Result<String, String> {
        self.next()
            .ok_or_else(|| format!("missing value for {flag}"))
    }
}

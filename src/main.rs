use anyhow::{bail, Context};
use routerjig::{init_logging, Config, JointDesign, JointParams, JointReport, SpacingKind};
use std::path::PathBuf;
use tracing::{debug, info};

const USAGE: &str = "Usage: routerjig [--config FILE] [--design FILE] \
                     [--spacing equal|variable] [--json]";

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    design: Option<PathBuf>,
    spacing: Option<SpacingKind>,
    json: bool,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> anyhow::Result<Option<Self>> {
        let mut parsed = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => parsed.config = Some(value(&mut args, &arg)?.into()),
                "--design" => parsed.design = Some(value(&mut args, &arg)?.into()),
                "--spacing" => {
                    let kind: SpacingKind = value(&mut args, &arg)?
                        .parse()
                        .map_err(anyhow::Error::msg)?;
                    if kind == SpacingKind::Edit {
                        bail!("--spacing accepts equal or variable");
                    }
                    parsed.spacing = Some(kind);
                }
                "--json" => parsed.json = true,
                "-h" | "--help" => return Ok(None),
                other => bail!("unknown argument '{}'\n{}", other, USAGE),
            }
        }
        Ok(Some(parsed))
    }
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> anyhow::Result<String> {
    args.next()
        .with_context(|| format!("{} needs a value\n{}", flag, USAGE))
}

fn load_design(args: &Args, config: &Config) -> anyhow::Result<JointDesign> {
    let margins = config.margins()?;
    let spacing = config.spacing_config()?;

    let mut design = match &args.design {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading design {}", path.display()))?;
            let params = JointParams::from_json(&text)
                .with_context(|| format!("parsing design {}", path.display()))?;
            JointDesign::from_params(&params, &spacing, margins)?
        }
        None => {
            let mut design = JointDesign::new(
                &spacing,
                spacing.units,
                config.router_bit()?,
                config.board()?,
                margins,
            )?;
            design.select_spacing(config.spacing.strategy, false)?;
            design
        }
    };

    if let Some(kind) = args.spacing {
        // asked for on the command line, so edited cuts may be replaced
        design.select_spacing(kind, true)?;
    }
    Ok(design)
}

fn main() -> anyhow::Result<()> {
    let Some(args) = Args::parse(std::env::args().skip(1))? else {
        println!("routerjig {} ({})\n{}", routerjig::VERSION, routerjig::BUILD_DATE, USAGE);
        return Ok(());
    };

    let config = Config::load_or_default(args.config.as_deref())?;
    init_logging(config.debug)?;
    debug!(?args, "starting");

    let design = load_design(&args, &config)?;
    let report = JointReport::new(&design)?;
    info!(
        kind = %design.kind(),
        a_cuts = report.geometry.a_cuts().len(),
        b_cuts = report.geometry.b_cuts().len(),
        "joint computed"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text(design.units()));
    }
    Ok(())
}

// ABOUTME: Command handlers for the tinct binary
// ABOUTME: Merges config with flags, runs the palette engines and writes results to stdout

use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tincture_core::conversions::{rgb_to_hsl, rgb_to_hsv};
use tincture_core::{
    ExportOptions, PaletteGenerator, TracingObserver, audit_palette, export_palette, to_oklch,
};
use tincture_logging::{PerfTimer, info, perf_span, timed};
use tincture_types::{HarmonyMode, LockedColors, LockedRoles, Palette, Rgb, TinctureConfig};

use crate::{Commands, GenerationArgs, OutputArgs};

const SLOW_DERIVATION: Duration = Duration::from_millis(50);

pub fn run(command: Commands, config: &TinctureConfig) -> Result<()> {
    match command {
        Commands::Derive {
            seed,
            generation,
            output,
        } => {
            let settings = Settings::resolve(config, &generation);
            let _timer = PerfTimer::new("derive").with_warn_threshold(SLOW_DERIVATION);
            let palette =
                settings
                    .generator
                    .derive(seed, settings.is_dark, &settings.locked, settings.harmony);
            print_palette(&palette, config, &output)
        }
        Commands::Random {
            seed,
            generation,
            output,
        } => {
            let settings = Settings::resolve(config, &generation);
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let _timer = PerfTimer::new("regenerate").with_warn_threshold(SLOW_DERIVATION);
            let (base, palette) = settings.generator.regenerate(
                settings.is_dark,
                &settings.locked,
                settings.harmony,
                &mut rng,
            );
            info!(base = %base, "Regenerated palette");
            print_palette(&palette, config, &output)
        }
        Commands::Adapt {
            palette,
            dark,
            light,
            locks,
            output,
        } => {
            let current = read_palette(&palette)?;
            let target_is_dark = if dark || light {
                dark
            } else {
                !config.generator.dark_mode
            };
            let locked: LockedRoles = locks
                .into_iter()
                .chain(config.locks.roles())
                .collect();
            let adapted = timed!("adapt", budget: SLOW_DERIVATION, {
                generator(config).adapt(&current, target_is_dark, &locked)
            });
            print_palette(&adapted, config, &output)
        }
        Commands::Audit { palette } => audit(&read_palette(&palette)?),
        Commands::Export { palette, output } => {
            print_palette(&read_palette(&palette)?, config, &output)
        }
        Commands::Convert { color } => {
            convert(color);
            Ok(())
        }
    }
}

/// Flags layered over the config file
struct Settings {
    generator: PaletteGenerator,
    is_dark: bool,
    harmony: HarmonyMode,
    locked: LockedColors,
}

impl Settings {
    fn resolve(config: &TinctureConfig, args: &GenerationArgs) -> Self {
        let mut locked = config.locks.clone();
        for (role, color) in &args.locks {
            locked.insert(*role, *color);
        }
        Self {
            generator: generator(config),
            is_dark: args.dark || config.generator.dark_mode,
            harmony: args.harmony.unwrap_or(config.generator.harmony),
            locked,
        }
    }
}

fn generator(config: &TinctureConfig) -> PaletteGenerator {
    PaletteGenerator::from_config(&config.generator).with_observer(Arc::new(TracingObserver))
}

fn export_options(config: &TinctureConfig, output: &OutputArgs) -> ExportOptions {
    let options = ExportOptions::from(&config.export);
    match output.format {
        Some(format) => options.with_format(format),
        None => options,
    }
}

fn print_palette(palette: &Palette, config: &TinctureConfig, output: &OutputArgs) -> Result<()> {
    let rendered = export_palette(palette, &export_options(config, output))?;
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn read_palette(path: &Path) -> Result<Palette> {
    let contents = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read palette from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read palette {}", path.display()))?
    };
    serde_json::from_str(&contents)
        .with_context(|| format!("Invalid palette JSON in {}", path.display()))
}

fn audit(palette: &Palette) -> Result<()> {
    let report = perf_span!("audit").in_scope(|| audit_palette(palette));
    for check in &report.checks {
        println!(
            "{:<4} {:>12} on {:<11} {:>5.2} (needs {})",
            if check.passes { "ok" } else { "FAIL" },
            check.foreground.as_str(),
            check.background.as_str(),
            check.ratio,
            check.required,
        );
    }

    let failures = report.failures().count();
    if failures > 0 {
        bail!("{failures} of {} contrast checks failed", report.checks.len());
    }
    Ok(())
}

fn convert(color: Rgb) {
    let lch = to_oklch(color);
    println!("hex    {color}");
    println!("rgb    rgb({} {} {})", color.r, color.g, color.b);
    println!("hsl    {}", rgb_to_hsl(color).rounded());
    println!("hsv    {}", rgb_to_hsv(color).rounded());
    match lch.h {
        Some(h) => println!("oklch  oklch({:.3} {:.3} {:.1})", lch.l, lch.c, h),
        None => println!("oklch  oklch({:.3} {:.3} none)", lch.l, lch.c),
    }
}

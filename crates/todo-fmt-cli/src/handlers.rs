use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{Read, Write};
use std::path::Path;
use todo_fmt_config::Config;
use todo_fmt_engine::{FormatMode, Formatter, HostError, HostSettings, RopeBuffer, TextSpan, TodoCommands};

use crate::cli::FormatArgs;
use crate::line_range::LineRange;

/// Loads the config named on the command line, or the default one. Only an
/// explicitly named file has to exist.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("Config file {} not found", path.display())),
        None => {
            let config = Config::load()?;
            if config.is_none() {
                debug!(
                    "No config at {}, using defaults",
                    Config::config_path().display()
                );
            }
            Ok(config.unwrap_or_default())
        }
    }
}

/// Runs `format`. Returns false when `--check` found something to change.
pub fn format(config: &Config, formatter: &Formatter, args: &FormatArgs) -> Result<bool> {
    let forced = if args.notes {
        Some(FormatMode::Notes)
    } else if args.todo {
        Some(FormatMode::Todo)
    } else {
        None
    };

    let mut settings = config.host_settings();
    // The save-time toggles belong to editor hosts; here only the flags count
    settings
        .set(HostSettings::FORMAT_ON_SAVE, true)
        .set(HostSettings::REMOVE_COMPLETED_ON_SAVE, args.prune_done);

    if args.files.is_empty() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        let mode = forced.unwrap_or(FormatMode::for_path(None));
        let formatted = format_text(formatter, mode, &settings, &text)?;
        if args.check {
            return Ok(formatted == text);
        }
        print!("{formatted}");
        return Ok(true);
    }

    let mut clean = true;
    for file in &args.files {
        let text = read_file(file)?;
        let mode = match forced {
            Some(mode) => mode,
            None => config.mode_for_path(file)?,
        };
        let formatted = format_text(formatter, mode, &settings, &text)?;
        let changed = formatted != text;

        if args.check {
            if changed {
                println!("Would reformat {}", file.display());
                clean = false;
            }
        } else if args.stdout {
            print!("{formatted}");
        } else if changed {
            write_file(file, &formatted)?;
            info!("Formatted {} as {:?}", file.display(), mode);
        } else {
            debug!("{} already formatted", file.display());
        }
    }
    Ok(clean)
}

pub fn mark(
    config: &Config,
    formatter: &Formatter,
    style: &str,
    file: &Path,
    lines: LineRange,
) -> Result<()> {
    edit_file(config, formatter, file, lines, |commands, buffer, span| {
        commands.mark_as(buffer, &[span], style)
    })
}

pub fn promote(
    config: &Config,
    formatter: &Formatter,
    file: &Path,
    lines: LineRange,
    down: bool,
) -> Result<()> {
    edit_file(config, formatter, file, lines, |commands, buffer, span| {
        commands.promote(buffer, &[span], down)
    })
}

pub fn bullets(formatter: &Formatter) -> Result<()> {
    let mut out = std::io::stdout().lock();
    for (i, bullet) in formatter.catalog().iter().enumerate() {
        writeln!(out, "{:>2}  {}  {}", i + 1, bullet.symbol, bullet.name)?;
    }
    Ok(())
}

fn format_text(
    formatter: &Formatter,
    mode: FormatMode,
    settings: &HostSettings,
    text: &str,
) -> Result<String> {
    let mut buffer = RopeBuffer::new(text);
    TodoCommands::new(formatter, mode).on_pre_save(&mut buffer, settings)?;
    Ok(buffer.text())
}

fn edit_file<F>(
    config: &Config,
    formatter: &Formatter,
    file: &Path,
    lines: LineRange,
    edit: F,
) -> Result<()>
where
    F: FnOnce(&TodoCommands<'_>, &mut RopeBuffer, TextSpan) -> Result<(), HostError>,
{
    let text = read_file(file)?;
    let span = lines.span_in(&text)?;
    let commands = TodoCommands::new(formatter, config.mode_for_path(file)?);

    let mut buffer = RopeBuffer::new(&text);
    edit(&commands, &mut buffer, span)?;

    let edited = buffer.text();
    if edited != text {
        write_file(file, &edited)?;
        info!("Updated {}", file.display());
    }
    Ok(())
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn write_file(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}

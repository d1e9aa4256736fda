use std::{ffi::OsString, io::Write};

use config::{Config, OutputFormat};
use edit_distance::{
    report::{Snapshot, TableView},
    EditDistance,
};
use error::{CliError, Result};

pub mod config;
pub mod error;

pub const EXPECTED_ARGUMENTS: usize = 2;

/// Converts raw positional arguments, rejecting any that are not UTF-8.
pub fn collect_args<I>(args: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            arg.into_string()
                .map_err(|_| CliError::InvalidArgument { index: i + 1 })
        })
        .collect()
}

/// Compares `<from> <to>` and writes the report(s) to `out`.
pub fn run<W: Write>(args: &[String], config: &Config, out: &mut W) -> Result<()> {
    let [from, to] = args else {
        return Err(CliError::ArgumentCount {
            actual: args.len(),
            expected: EXPECTED_ARGUMENTS,
        });
    };

    let mut engine = EditDistance::new(from, to);
    engine.calculate();
    log::info!("distance {:?} -> {:?}: {}", from, to, engine.distance());
    report(&engine, config, out)?;

    if let Some(recompare) = &config.recompare {
        engine.set_from(recompare);
        engine.calculate();
        log::info!(
            "distance {:?} -> {:?}: {}",
            recompare,
            to,
            engine.distance()
        );
        report(&engine, config, out)?;
    }

    Ok(())
}

fn report<W: Write>(engine: &EditDistance, config: &Config, out: &mut W) -> Result<()> {
    match config.format {
        OutputFormat::Text => {
            write!(out, "{}", TableView::new(engine))?;
            if config.trace {
                for edit in engine.edit_script().unwrap_or_default() {
                    writeln!(out, "{}", edit)?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &Snapshot::new(engine, config.trace))?;
            writeln!(out)?;
        }
    }
    Ok(())
}

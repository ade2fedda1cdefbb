use anyhow::Result;
use graycode::cs::combinatorial::gray_transition_positions;
use log::{debug, LevelFilter};

/// Bit width of the printed sequence.
const DEFAULT_BITS: usize = 4;

const LOG_LEVEL_FILTER_DEBUG: LevelFilter = LevelFilter::Debug;
const LOG_LEVEL_FILTER_RELEASE: LevelFilter = LevelFilter::Warn;

// stdout is reserved for the sequence itself
fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] <{}> {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level_filter)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

fn main() -> Result<()> {
    match cfg!(debug_assertions) {
        true => init_logger(LOG_LEVEL_FILTER_DEBUG)?,
        false => init_logger(LOG_LEVEL_FILTER_RELEASE)?,
    }

    let positions = gray_transition_positions(DEFAULT_BITS)?;
    debug!("n={} yields {} transitions", DEFAULT_BITS, positions.len());
    println!("{:?}", positions);
    Ok(())
}

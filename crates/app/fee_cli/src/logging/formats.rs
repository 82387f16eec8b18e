use std::io::Write;

use flexi_logger::DeferredNow;
use log::Record;

/// `HH:MM:SS LEVEL message`, with the level colored by severity.
pub fn cli_format(w: &mut dyn Write, now: &mut DeferredNow, record: &Record) -> std::io::Result<()> {
    let level = record.level();
    write!(
        w,
        "{} {} {}",
        now.format("%H:%M:%S"),
        flexi_logger::style(level).paint(level.to_string()),
        record.args()
    )
}

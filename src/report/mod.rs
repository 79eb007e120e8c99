pub mod row;
pub mod table;
pub mod tsv;
pub mod xlsx;

pub use row::{ADDRESS_PLACEHOLDER, HEADER, ResultRow};
pub use table::{print_table, render_table};
pub use tsv::write_tsv;
pub use xlsx::write_xlsx;

use crate::{
    error::CloudIpError,
    job::{OutputFormat, Sink},
};

/// Deliver rows to every destination the sink names
pub fn emit(rows: &[ResultRow], sink: &Sink) -> Result<(), CloudIpError> {
    if sink.print {
        print_table(rows);
    }

    if let Some(target) = sink.file.as_ref() {
        match target.format {
            OutputFormat::Xlsx => write_xlsx(&target.path, rows)?,
            OutputFormat::Tsv => write_tsv(&target.path, rows)?,
        }
        log::info!("Wrote {} rows to {}", rows.len(), target.path.display());
    }

    Ok(())
}

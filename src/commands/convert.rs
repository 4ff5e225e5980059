use crate::catalog::Catalog;
use crate::config::RunConfig;
use crate::error::Result;
use crate::output::{self, Format};
use crate::runner;
use crate::store;

pub fn run(config: RunConfig, dry_run: bool, format: Format) -> Result<()> {
    let document = store::read_document(&config.input)?;
    let catalog = Catalog::builtin();
    let report = runner::run_conversion(document, &catalog, &config.rules);

    if dry_run {
        return output::print_report(&report, &[], true, format);
    }

    let written = store::write_outputs(&report.converted, &config.out_dir, config.combined)?;
    output::print_report(&report, &written, false, format)
}

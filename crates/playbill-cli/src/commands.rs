use anyhow::Result;
use chrono::Utc;
use comfy_table::Table;
use tracing::{info, info_span};

use playbill_model::Column;
use playbill_normalization::{GENRE_DELIMITERS, TRUTHY_TOKENS};

use crate::cli::BuildArgs;
use crate::summary::apply_table_style;
use playbill_cli::pipeline::{BuildConfig, run_pipeline};
use playbill_cli::types::BuildResult;

pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Column", "Field", "Description"]);
    apply_table_style(&mut table);
    for column in Column::ALL {
        table.add_row(vec![
            column.header_name(),
            column.field_name(),
            column.description(),
        ]);
    }
    println!("{table}");
    let delimiters: Vec<String> = GENRE_DELIMITERS.iter().map(char::to_string).collect();
    println!("Boolean true tokens: {}", TRUTHY_TOKENS.join(", "));
    println!("Genre delimiters: {}", delimiters.join(" "));
    Ok(())
}

pub fn run_build(args: &BuildArgs) -> Result<BuildResult> {
    let generated_at = Utc::now();
    let config = BuildConfig {
        input: args.input.clone(),
        output: args.output.clone(),
        source: args.source.clone(),
        compact: args.compact,
        dry_run: args.dry_run,
    };
    let build_span = info_span!("build", input = %config.input.display());
    let _build_guard = build_span.enter();
    let result = run_pipeline(&config, generated_at)?;
    info!(
        shows = result.emitted,
        skipped = result.skipped(),
        "build finished"
    );
    Ok(result)
}

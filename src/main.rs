mod cli;
mod config;
mod console_format;
mod error;
mod report;
mod source;
mod style;
mod types;
mod ui;

use log::{debug, info};

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    // Set console width override if specified
    if let Some(width) = args.console_width {
        console_format::set_console_width(width);
    }

    // Resolve configuration
    let config = match config::build_report_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    // Load records
    let source = config.source.clone().into_source();
    info!("Loading records from {}", source.describe());
    let records = match source.fetch_records() {
        Ok(r) => r,
        Err(e) => {
            ui::print_error(&format!("Failed to load records from {}: {}", source.describe(), e));
            std::process::exit(1);
        }
    };
    debug!("Loaded {} records", records.len());

    // Aggregate
    let model = match report::aggregate(&records) {
        Ok(m) => m,
        Err(e) => {
            ui::print_error(&format!("Cannot build report: {}", e));
            std::process::exit(1);
        }
    };

    let options = config.document_options();
    let headline = report::headline_stats(&records, &model, options.headline_mode);

    if config.print_json {
        let value = report::json_report(&records, &model, &headline, &options.generated_at);
        match serde_json::to_string_pretty(&value) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                ui::print_error(&format!("Failed to serialize JSON report: {}", e));
                std::process::exit(1);
            }
        }
    } else if !config.quiet {
        ui::status(&format!("{} events from {}", records.len(), source.describe()));
        report::print_records_table(&records);
        report::print_breakdown(&model);
        report::print_headline(&headline, model.total);
    }

    // Export documents; a failed export is reported but doesn't stop the other
    let mut export_failed = false;

    if let Some(ref path) = config.output_html {
        match report::write_html_report(path, &records, &model, &options) {
            Ok(_) => {
                if !config.print_json {
                    println!("\nHTML report saved to: {}", path.display());
                }
            }
            Err(e) => {
                ui::print_error(&e.to_string());
                export_failed = true;
            }
        }
    }

    if let Some(ref path) = config.output_json {
        match report::export_json_report(path, &records, &model, &headline, &options.generated_at) {
            Ok(_) => {
                if !config.print_json {
                    println!("JSON report saved to: {}", path.display());
                }
            }
            Err(e) => {
                ui::print_error(&e.to_string());
                export_failed = true;
            }
        }
    }

    std::process::exit(if export_failed { 1 } else { 0 });
}

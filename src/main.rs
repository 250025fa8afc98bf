//! Month grid CLI application.
//!
//! # Usage
//! ```ignore
//! monthgrid                    // Current month
//! monthgrid 2 2024             // February 2024
//! monthgrid -m feb 2024        // Monday-first columns
//! monthgrid --summary 2 2024   // Raw values
//! ```

use monthgrid::args::{Args, get_display_month};
use monthgrid::formatter::print_month;
use monthgrid::logging;
use monthgrid::types::GridContext;

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("monthgrid: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    let ctx = GridContext::new(args)?;
    let month = get_display_month(args)?;

    tracing::info!(year = month.year, month = month.month, locale = %ctx.locale, "rendering month");
    print_month(&ctx, month).map_err(|e| e.to_string())
}

//! rstaffhours main entrypoint.

use rstaffhours::run;
use rstaffhours::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}

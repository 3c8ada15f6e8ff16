//! bookholder main entrypoint.

use bookholder::run;
use bookholder::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}

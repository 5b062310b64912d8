//! bizdesk main entrypoint.

use bizdesk::run;
use bizdesk::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

//! timeledger main entrypoint.

use timeledger::run;
use timeledger::ui::messages::report;

fn main() {
    if let Err(e) = run() {
        report(&e);
        std::process::exit(1);
    }
}

//! shiftledger main entrypoint.

use shiftledger::run;
use shiftledger::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(&e);
        std::process::exit(1);
    }
}

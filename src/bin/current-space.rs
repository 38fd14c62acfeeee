//! Prints the number of the focused space, or -1 when it cannot be determined.

use current_space::common::log::init_logging;
use current_space::sys::{WindowServer, query_space_info};

fn main() {
    sigpipe::reset();
    init_logging();

    let info = query_space_info(&WindowServer::new());
    match info.display_number() {
        Some(number) => println!("{number}"),
        None => println!("-1"),
    }
}

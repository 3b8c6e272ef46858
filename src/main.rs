use crate::cli::run;

pub mod cli;
pub mod domain;
pub mod playlist;
pub mod report;

fn main() {
    run();
}

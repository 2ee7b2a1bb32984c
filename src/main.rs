//! TB Screening - CLI wrapper
//!
//! Thin front over the screening pipeline: one JSON argument in, one JSON
//! object out on stdout. Pipeline failures are reported in-band as
//! `{"error": ...}`; only argument parsing exits non-zero.

use clap::Parser;

use tb_screening_core::constants::{APP_NAME, APP_VERSION};

#[derive(Parser)]
#[command(name = "tb-predict", version, about = "TB screening verdict from a patient record")]
struct Cli {
    /// Patient record as a JSON object string
    input: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    log::info!("{} v{}", APP_NAME, APP_VERSION);

    let verdict = tb_screening_core::screen_json(&cli.input);
    println!("{}", verdict);
}

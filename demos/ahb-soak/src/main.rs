// Copyright (c) 2025 The OMNIBUS developers. All rights reserved.

//! Soak an AHB bus driver with generated stimulus.
//!
//! Builds one single-beat generator and one burst generator, each feeding
//! its own bus driver, and runs both streams to completion.

use clap::Parser;
use omnibus_ahb::connect_port;
use omnibus_ahb::driver::BusDriver;
use omnibus_ahb::sequence::{BurstSequence, SingleSequence};
use omnibus_ahb::transfer::TransferSize;
use omnibus_engine::engine::Engine;
use omnibus_engine::run_simulation;
use omnibus_engine::types::SimError;
use omnibus_track::Tracker;
use omnibus_track::builder::{TrackerConfig, TrackersConfig, setup_trackers};
use omnibus_track::info;

/// Command-line arguments.
#[derive(Parser)]
#[command(about = "AHB stimulus soak application")]
struct Cli {
    /// Enable logging to the console.
    #[arg(long, default_value = "false")]
    stdout: bool,

    /// Level of log message to display.
    #[arg(long, default_value = "Info")]
    stdout_level: log::Level,

    /// Set a regular expression for which entites should have logging level set
    /// to `--stdout-level`. Others will have level set to `Error`.
    #[arg(long, default_value = "")]
    stdout_filter_regex: String,

    /// Enable logging to a text trace file.
    #[arg(long, default_value = "false")]
    logfile: bool,

    /// Level of trace events to record in the text trace file.
    #[arg(long, default_value = "Trace")]
    logfile_level: log::Level,

    /// Set a regular expression for which entites should have trace file
    /// level set to `--logfile-level`. Others will have level set to `Error`.
    #[arg(long, default_value = "")]
    logfile_filter_regex: String,

    /// The filename text trace output is written to.
    #[arg(long, default_value = "trace.txt")]
    logfile_file: String,

    /// The number of single-beat transfers to generate.
    #[arg(long, default_value = "15")]
    num_singles: usize,

    /// The number of bursts to generate.
    #[arg(long, default_value = "10")]
    num_bursts: usize,

    /// Seed for the randomized transfer fields.
    #[arg(long, default_value = "1")]
    seed: u64,

    /// Beat count used when the variable-length Incr burst code is drawn.
    #[arg(long, default_value = "8")]
    incr_beats: u8,

    /// HCLK frequency in MHz.
    #[arg(long, default_value = "100.0")]
    hclk_mhz: f64,
}

fn setup_all_trackers(args: &Cli) -> Tracker {
    let config = TrackersConfig {
        stdout: TrackerConfig {
            enable: args.stdout,
            level: args.stdout_level,
            filter_regex: &args.stdout_filter_regex,
            file: None,
        },
        logfile: TrackerConfig {
            enable: args.logfile,
            level: args.logfile_level,
            filter_regex: &args.logfile_filter_regex,
            file: Some(&args.logfile_file),
        },
    };
    setup_trackers(&config).unwrap()
}

fn main() -> Result<(), SimError> {
    let args = Cli::parse();

    let tracker = setup_all_trackers(&args);

    let mut engine = Engine::new(&tracker);
    let hclk = engine.clock_mhz(args.hclk_mhz);
    let top = engine.top().clone();

    info!(top ;
        "Soaking with {} singles and {} bursts (seed {}, Incr beats {}, HCLK {}MHz)",
        args.num_singles,
        args.num_bursts,
        args.seed,
        args.incr_beats,
        args.hclk_mhz
    );

    let single_gen = SingleSequence::new_and_register(
        &engine,
        &top,
        "single_gen",
        args.seed,
        args.num_singles,
        &TransferSize::ALL,
    )?;
    let single_driver = BusDriver::new_and_register(&engine, &hclk, &top, "single_driver")?;
    connect_port!(single_gen, tx => single_driver, rx)?;

    let burst_gen = BurstSequence::new_and_register(
        &engine,
        &top,
        "burst_gen",
        args.seed,
        args.num_bursts,
        &TransferSize::ALL,
        args.incr_beats,
    )?;
    let burst_driver = BusDriver::new_and_register(&engine, &hclk, &top, "burst_driver")?;
    connect_port!(burst_gen, tx => burst_driver, rx)?;

    run_simulation!(engine);

    info!(top ;
        "Drove {} single-beat and {} burst transfers in {:.2}ns",
        single_driver.num_driven(),
        burst_driver.num_driven(),
        hclk.time_now_ns()
    );

    Ok(())
}

// plot_signal_at_orf.rs - Plot mean signal by position for one or two profile tables

use clap::{Arg, Command};
use signal_at_orf::output::format_elapsed;
use signal_at_orf::plot::{plot_files, PlotOptions};
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("plot-signal-at-orf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Plots ChIP-seq signal at ORFs genome-wide from signal-at-orf output")
        .arg_required_else_help(true)
        .arg(Arg::new("input-data-a")
            .short('a')
            .long("input-data-a")
            .value_name("FILE")
            .help("Profile table (.tsv) with position and signal columns")
            .required(true))
        .arg(Arg::new("input-data-b")
            .short('b')
            .long("input-data-b")
            .value_name("FILE")
            .help("Optional second profile table to plot alongside the first"))
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .value_name("FILE")
            .help("Output SVG plot (default: signal_at_orf.svg)")
            .default_value("signal_at_orf.svg"))
        .arg(Arg::new("title")
            .long("title")
            .value_name("TEXT")
            .help("Plot title"))
        .arg(Arg::new("means-output")
            .long("means-output")
            .value_name("FILE")
            .help("Also write the mean signal table(s) (.tsv)"))
        .get_matches();

    let input_a = matches
        .get_one::<String>("input-data-a")
        .ok_or("--input-data-a is required")?;
    let input_b = matches.get_one::<String>("input-data-b").map(String::as_str);
    let output = matches
        .get_one::<String>("output")
        .map(String::as_str)
        .unwrap_or("signal_at_orf.svg");
    let means_output = matches.get_one::<String>("means-output").map(String::as_str);

    let options = PlotOptions {
        title: matches.get_one::<String>("title").cloned(),
        ..PlotOptions::default()
    };

    let start = Instant::now();
    println!("🎨 ChIP-seq signal at ORFs");
    println!("==========================");

    if let Err(e) = plot_files(input_a, input_b, output, &options, means_output) {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }

    println!();
    println!("🎉 Completed in {}", format_elapsed(start.elapsed().as_secs_f64()));
    Ok(())
}

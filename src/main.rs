// main.rs - CLI entry point

use argh::FromArgs;
use signal_at_orf::cli::Config;
use signal_at_orf::data::ReferenceGenome;
use signal_at_orf::output::write_run_summary;
use signal_at_orf::prelude::*;
use std::path::Path;
use std::time::Instant;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

/// Parse arguments, printing help when none are given
fn parse_args() -> Args {
    let raw: Vec<String> = std::env::args().collect();
    if raw.len() == 1 {
        let command = raw[0].as_str();
        if let Err(early_exit) = Args::from_args(&[command], &["--help"]) {
            println!("{}", early_exit.output);
        }
        std::process::exit(1);
    }
    argh::from_env()
}

fn run_main() -> Result<(), String> {
    let mut args = parse_args();

    if args.version {
        println!("{}", signal_at_orf::get_info());
        return Ok(());
    }

    if args.generate_config {
        println!("{}", Config::generate_sample());
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    let validation = validate_args(&args)?;
    let wiggle_path = args.wiggle.clone().unwrap_or_default();
    let gff_path = args.gff.clone().unwrap_or_default();

    println!("🚀 signal-at-orf v{}", env!("CARGO_PKG_VERSION"));

    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("🧵 Threads: {}", n);
    } else {
        println!("🧵 Threads: {} (auto-detected)", rayon::current_num_threads());
    }

    let total_start = Instant::now();

    // Load inputs
    let track = SignalTrack::load(Path::new(&wiggle_path), validation.settings.quiet)?;
    let mut annotation = OrfAnnotation::from_gff(Path::new(&gff_path), &validation.feature_types)?;
    annotation.filter_chromosomes(
        validation.include_chroms_regex.as_ref(),
        validation.exclude_chroms_regex.as_ref(),
    );
    println!("⏱️  Inputs loaded in {}", format_elapsed(total_start.elapsed().as_secs_f64()));

    // Reference genome consistency
    let track_reference = ReferenceGenome::detect_many(track.chromosomes());
    let annotation_reference = ReferenceGenome::detect_many(annotation.chromosomes());
    println!(
        "🧬 Reference genome: wiggle {}, gff {}",
        track_reference, annotation_reference
    );
    if track_reference != annotation_reference {
        eprintln!(
            "⚠️  Warning: wiggle chromosomes look like {} but gff chromosomes look like {}",
            track_reference, annotation_reference
        );
    }

    let missing_chromosomes: Vec<String> = annotation
        .chromosomes()
        .into_iter()
        .filter(|chrom| !track.has_chromosome(chrom))
        .map(str::to_string)
        .collect();
    if !missing_chromosomes.is_empty() {
        eprintln!(
            "⚠️  Warning: {} gff chromosome(s) have no signal: {}",
            missing_chromosomes.len(),
            missing_chromosomes.join(", ")
        );
    }

    if args.dry_run {
        println!("✅ Dry run completed successfully");
        println!(
            "📊 {} ORFs on {} chromosomes, {} wiggle records",
            annotation.len(),
            annotation.chromosomes().len(),
            track.total_records()
        );
        return Ok(());
    }

    if annotation.is_empty() {
        return Err("No ORFs left after chromosome filtering".to_string());
    }

    // Extract and rescale
    let profiles = compute_profiles(&track, &annotation.orfs, &validation.settings);
    let skipped = &profiles.skipped;
    if skipped.total() > 0 {
        println!("📌 Skipped ORFs: {} total", skipped.total());
        println!("  • chromosome not in wiggle: {}", skipped.missing_chromosome);
        println!("  • no signal in window: {}", skipped.no_signal);
        println!("  • below minimum coverage: {}", skipped.low_coverage);
        println!("  • shorter than minimum length: {}", skipped.too_short);
    }
    if profiles.truncated > 0 {
        println!(
            "📌 {} ORF window(s) run past the chromosome start",
            profiles.truncated
        );
    }
    if profiles.is_empty() {
        eprintln!("⚠️  Warning: no ORF produced a profile; output will only hold a header");
    }

    // Write outputs
    let output_path = args.output.as_deref().ok_or("--output is required")?;
    write_profiles(output_path, &profiles)?;

    if let Some(mean_path) = args.mean_output.as_deref() {
        let mean = MeanProfile::from_profiles(&profiles);
        write_means(mean_path, &mean)?;
    }

    let elapsed = total_start.elapsed().as_secs_f64();
    if let Some(summary_path) = args.summary.as_deref() {
        let summary = RunSummary::new(
            &wiggle_path,
            &gff_path,
            annotation.len(),
            &profiles,
            track_reference,
            annotation_reference,
            missing_chromosomes,
            elapsed,
        );
        write_run_summary(summary_path, &summary)?;
    }

    println!("\n⏱️  Total execution time: {}", format_elapsed(elapsed));
    Ok(())
}

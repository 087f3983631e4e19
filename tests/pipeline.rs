// pipeline.rs - End-to-end run: wiggle + GFF -> profiles -> means -> plot

use signal_at_orf::data::ReferenceGenome;
use signal_at_orf::plot::load_profile_table;
use signal_at_orf::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const GFF: &str = "\
##gff-version 3
chrI\tSGD\tgene\t501\t1000\t.\t+\t.\tID=YAL001W;Name=TEST1
chrI\tSGD\tgene\t1201\t1400\t.\t-\t.\tID=YAL002C
chrI\tSGD\tCDS\t501\t1000\t.\t+\t.\tID=YAL001W_CDS
chrIII\tSGD\tgene\t100\t300\t.\t+\t.\tID=YCL001W
";

/// chrI holds a ramp where the signal equals the position
fn write_inputs(dir: &TempDir) -> (String, String) {
    let wiggle_dir = dir.path().join("wiggle");
    fs::create_dir_all(&wiggle_dir).unwrap();

    let mut ramp = String::from("track type=wiggle_0 name=Red1\nvariableStep chrom=chrI\n");
    for pos in 1..=2000 {
        ramp.push_str(&format!("{}\t{}\n", pos, pos));
    }
    fs::write(wiggle_dir.join("Red1_chrI.wig"), ramp).unwrap();
    fs::write(wiggle_dir.join("Red1_all.wig"), "ignored\n").unwrap();

    let gff = dir.path().join("genes.gff");
    fs::write(&gff, GFF).unwrap();

    (
        wiggle_dir.display().to_string(),
        gff.display().to_string(),
    )
}

fn quiet_settings(bins: usize) -> ProfileSettings {
    ProfileSettings {
        bins,
        quiet: true,
        ..ProfileSettings::default()
    }
}

#[test]
fn test_profiles_from_directory_and_gff() {
    let dir = tempfile::tempdir().unwrap();
    let (wiggle, gff) = write_inputs(&dir);

    let track = SignalTrack::load(Path::new(&wiggle), true).unwrap();
    let annotation = OrfAnnotation::from_gff(Path::new(&gff), &["gene".to_string()]).unwrap();
    assert_eq!(annotation.len(), 3);
    assert_eq!(ReferenceGenome::detect_many(track.chromosomes()), ReferenceGenome::S288C);

    let set = compute_profiles(&track, &annotation.orfs, &quiet_settings(40));
    assert_eq!(set.len(), 2);
    assert_eq!(set.skipped.missing_chromosome, 1);
    assert_eq!(set.row_count(), 80);

    // Watson rises along the ramp, Crick is read from its own 5' end
    let watson = &set.profiles[0];
    let crick = &set.profiles[1];
    assert_eq!(watson.orf_id, "YAL001W");
    assert!(watson.values[0] < watson.values[39]);
    assert!(crick.values[0] > crick.values[39]);

    // Window 251..1250 sampled at bin centres
    assert!((watson.values[0] - 263.0).abs() < 1.0);
    assert!((watson.values[39] - 1238.0).abs() < 1.0);
}

#[test]
fn test_written_tables_and_plot() {
    let dir = tempfile::tempdir().unwrap();
    let (wiggle, gff) = write_inputs(&dir);
    let bins = 20;

    let track = SignalTrack::load(Path::new(&wiggle), true).unwrap();
    let annotation = OrfAnnotation::from_gff(Path::new(&gff), &["gene".to_string()]).unwrap();
    let set = compute_profiles(&track, &annotation.orfs, &quiet_settings(bins));

    let profiles_path = dir.path().join("out/signal.tsv").display().to_string();
    let rows = write_profiles(&profiles_path, &set).unwrap();
    assert_eq!(rows, bins * 2);

    let content = fs::read_to_string(&profiles_path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("gene\tposition\tsignal"));
    assert_eq!(lines.count(), bins * 2);

    let table = load_profile_table(Path::new(&profiles_path)).unwrap();
    assert_eq!(table.len(), bins * 2);
    assert_eq!(table.first().map(|r| r.0), Some(1));
    assert_eq!(table.last().map(|r| r.0), Some(bins as u32));

    let mean = MeanProfile::from_profiles(&set);
    assert_eq!(mean.len(), bins);
    assert!(mean.counts.iter().all(|&n| n == 2));

    let svg_path = dir.path().join("plot.svg").display().to_string();
    let means_path = dir.path().join("means.tsv").display().to_string();
    plot_files(
        &profiles_path,
        Some(&profiles_path),
        &svg_path,
        &PlotOptions::default(),
        Some(&means_path),
    )
    .unwrap();

    let svg = fs::read_to_string(&svg_path).unwrap();
    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches("<polyline").count(), 2);

    let means = fs::read_to_string(&means_path).unwrap();
    assert!(means.starts_with("position\tsignal\tn"));
    assert_eq!(means.lines().count(), bins + 1);
    assert!(dir.path().join("means.b.tsv").exists());
}

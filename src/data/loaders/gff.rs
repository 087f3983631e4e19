// gff.rs - GFF3 loader for ORF coordinates

use crate::data::annotation::{Orf, OrfAnnotation, Strand};
use bio::io::gff;
use std::path::Path;

/// Attributes tried, in order, for the ORF identifier
const ID_ATTRIBUTES: [&str; 4] = ["ID", "Name", "gene", "Alias"];

/// Feature type that keeps every record
pub const ANY_FEATURE: &str = "*";

impl OrfAnnotation {
    /// Load ORFs from a GFF3 file, keeping records whose feature type is listed
    pub fn from_gff(path: &Path, feature_types: &[String]) -> Result<Self, String> {
        println!("📂 Reading gff file: {}", path.display());

        let mut reader = gff::Reader::from_file(path, gff::GffType::GFF3)
            .map_err(|e| format!("Failed to open GFF file '{}': {}", path.display(), e))?;

        let keep_all = feature_types.iter().any(|f| f == ANY_FEATURE);
        let mut orfs = Vec::new();
        let mut ignored = 0;

        for (idx, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                format!(
                    "Failed to parse GFF record {} in '{}': {}",
                    idx + 1,
                    path.display(),
                    e
                )
            })?;

            if !keep_all && !feature_types.iter().any(|f| f == record.feature_type()) {
                ignored += 1;
                continue;
            }

            let start = *record.start();
            let end = *record.end();
            if end < start {
                return Err(format!(
                    "Invalid GFF record {} in '{}': end {} is before start {}",
                    idx + 1,
                    path.display(),
                    end,
                    start
                ));
            }

            let strand = record
                .strand()
                .map(|s| Strand::from_symbol(s.strand_symbol()))
                .unwrap_or(Strand::Watson);

            let attributes = record.attributes();
            let id = ID_ATTRIBUTES
                .iter()
                .find_map(|key| attributes.get(*key))
                .cloned()
                .unwrap_or_else(|| format!("{}:{}-{}", record.seqname(), start, end));

            orfs.push(Orf::new(&id, record.seqname(), start, end, strand));
        }

        if orfs.is_empty() {
            return Err(format!(
                "No features of type {} found in '{}'",
                feature_types.join(", "),
                path.display()
            ));
        }

        let annotation = OrfAnnotation::new(orfs);
        println!(
            "✅ GFF loaded: {} ORFs on {} chromosomes ({} other features ignored)",
            annotation.len(),
            annotation.chromosomes().len(),
            ignored
        );
        Ok(annotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const GFF: &str = "\
##gff-version 3
chrI\tSGD\tgene\t335\t649\t.\t+\t.\tID=YAL069W;Name=YAL069W
chrI\tSGD\tCDS\t335\t649\t.\t+\t0\tParent=YAL069W
chrI\tSGD\tgene\t1807\t2169\t.\t-\t.\tID=YAL068C;Name=PAU8
chrII\tSGD\tgene\t9000\t9500\t.\t.\t.\tNote=unnamed
";

    fn write_gff(content: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), content).unwrap();
        file
    }

    #[test]
    fn test_load_genes() {
        let file = write_gff(GFF);
        let annotation = OrfAnnotation::from_gff(file.path(), &["gene".to_string()]).unwrap();
        assert_eq!(annotation.len(), 3);

        let first = &annotation.orfs[0];
        assert_eq!(first.id, "YAL069W");
        assert_eq!(first.chrom, "chrI");
        assert_eq!((first.start, first.end), (335, 649));
        assert_eq!(first.strand, Strand::Watson);

        assert_eq!(annotation.orfs[1].strand, Strand::Crick);
    }

    #[test]
    fn test_id_falls_back_to_coordinates() {
        let file = write_gff(GFF);
        let annotation = OrfAnnotation::from_gff(file.path(), &["gene".to_string()]).unwrap();
        assert_eq!(annotation.orfs[2].id, "chrII:9000-9500");
    }

    #[test]
    fn test_any_feature() {
        let file = write_gff(GFF);
        let annotation = OrfAnnotation::from_gff(file.path(), &[ANY_FEATURE.to_string()]).unwrap();
        assert_eq!(annotation.len(), 4);
    }

    #[test]
    fn test_no_matching_features_is_error() {
        let file = write_gff(GFF);
        let err = OrfAnnotation::from_gff(file.path(), &["tRNA".to_string()]).unwrap_err();
        assert!(err.contains("tRNA"));
    }

    #[test]
    fn test_end_before_start_is_error() {
        let file = write_gff("chrI\tSGD\tgene\t500\t400\t.\t+\t.\tID=BAD1\n");
        let err = OrfAnnotation::from_gff(file.path(), &["gene".to_string()]).unwrap_err();
        assert!(err.contains("record 1"));
        assert!(err.contains("end 400 is before start 500"));
    }

    #[test]
    fn test_missing_file() {
        assert!(OrfAnnotation::from_gff(Path::new("/nonexistent.gff"), &["gene".to_string()]).is_err());
    }
}

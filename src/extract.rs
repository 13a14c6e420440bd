//! Gene observation extraction from pasted report text.
//!
//! Lab reports arrive as plain text, one finding per line. A line yields an
//! observation for a panel marker when it mentions the marker and contains a
//! phenotype keyword. Matching is case-sensitive throughout; reports print
//! marker names and phenotype labels in a fixed house style.

use std::sync::LazyLock;

use regex::Regex;

use crate::reference::KnowledgeBase;
use crate::types::{GeneObservation, NOT_REPORTED};

/// Allele markers tolerate separator drift: PDF extraction turns
/// "HLA-B*15:02" into "HLA-B 1502", "HLAB*1502", or leaves a mangled byte
/// where the asterisk was. Up to two junk characters may sit between the
/// gene prefix and the allele digits; the colon is optional.
static RE_HLA_B_1502: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"HLA-?B.{0,2}15:?02").unwrap());
static RE_HLA_A_3101: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"HLA-?A.{0,2}31:?01").unwrap());

fn line_mentions_marker(line: &str, marker: &str) -> bool {
    match marker {
        "HLA-B*15:02" => RE_HLA_B_1502.is_match(line),
        "HLA-A*31:01" => RE_HLA_A_3101.is_match(line),
        _ => line.contains(marker),
    }
}

/// Scan report text for panel markers. Every line is checked against every
/// marker; a hit records the first phenotype keyword (vocabulary order, so
/// "Not Detected" wins over its "Detected" substring) contained in the line.
/// A gene may yield several observations when it appears on several lines.
/// Markers never seen in the text are appended afterwards, in panel order,
/// with the "Not Reported" sentinel, so the result always covers the full
/// panel.
pub fn extract_gene_observations(text: &str, kb: &KnowledgeBase) -> Vec<GeneObservation> {
    let mut observations: Vec<GeneObservation> = Vec::new();

    for line in text.lines() {
        for gene in &kb.gene_panel {
            if !line_mentions_marker(line, gene) {
                continue;
            }
            if let Some(phenotype) = kb
                .phenotype_vocabulary
                .iter()
                .find(|p| line.contains(p.as_str()))
            {
                observations.push(GeneObservation::new(gene, phenotype));
            }
        }
    }

    for gene in &kb.gene_panel {
        if !observations.iter().any(|o| &o.gene == gene) {
            observations.push(GeneObservation::new(gene, NOT_REPORTED));
        }
    }

    observations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_full_sentinel_panel() {
        let kb = KnowledgeBase::builtin();
        let observations = extract_gene_observations("", &kb);
        assert_eq!(observations.len(), kb.gene_panel.len());
        for (observation, gene) in observations.iter().zip(&kb.gene_panel) {
            assert_eq!(&observation.gene, gene);
            assert_eq!(observation.phenotype, NOT_REPORTED);
        }
    }

    #[test]
    fn single_finding_is_extracted() {
        let kb = KnowledgeBase::builtin();
        let observations =
            extract_gene_observations("CYP2D6: Poor Metabolizer (*4/*4)", &kb);
        assert_eq!(observations.len(), 14);
        assert_eq!(observations[0].gene, "CYP2D6");
        assert_eq!(observations[0].phenotype, "Poor Metabolizer");
        assert!(observations[1..].iter().all(|o| !o.is_reported()));
    }

    #[test]
    fn not_detected_wins_over_detected() {
        let kb = KnowledgeBase::builtin();
        let observations = extract_gene_observations("MTHFR variant Not Detected", &kb);
        let mthfr = observations.iter().find(|o| o.gene == "MTHFR").unwrap();
        assert_eq!(mthfr.phenotype, "Not Detected");
    }

    #[test]
    fn repeated_marker_keeps_every_observation() {
        let kb = KnowledgeBase::builtin();
        let text = "CYP2C19: Normal Metabolizer\nAddendum CYP2C19: Poor Metabolizer";
        let observations = extract_gene_observations(text, &kb);
        let hits: Vec<_> = observations
            .iter()
            .filter(|o| o.gene == "CYP2C19")
            .collect();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].phenotype, "Normal Metabolizer");
        assert_eq!(hits[1].phenotype, "Poor Metabolizer");
    }

    #[test]
    fn text_order_precedes_sentinel_backfill() {
        let kb = KnowledgeBase::builtin();
        let text = "SLC6A4: S/S\nCYP2D6: Poor Metabolizer";
        let observations = extract_gene_observations(text, &kb);
        assert_eq!(observations[0].gene, "SLC6A4");
        assert_eq!(observations[1].gene, "CYP2D6");
        assert_eq!(observations.len(), 14);
        assert!(observations[2..].iter().all(|o| !o.is_reported()));
    }

    #[test]
    fn allele_markers_match_loose_separators() {
        let kb = KnowledgeBase::builtin();
        for text in [
            "HLA-B*15:02 Positive",
            "HLA-B 1502 Positive",
            "HLAB*1502 Positive",
            "HLA-B?15:02 Positive",
        ] {
            let observations = extract_gene_observations(text, &kb);
            let hla = observations
                .iter()
                .find(|o| o.gene == "HLA-B*15:02")
                .unwrap();
            assert_eq!(hla.phenotype, "Positive", "failed for {text:?}");
        }
    }

    #[test]
    fn marker_without_keyword_is_not_reported() {
        let kb = KnowledgeBase::builtin();
        let observations = extract_gene_observations("CYP2D6 see addendum", &kb);
        let cyp2d6 = observations.iter().find(|o| o.gene == "CYP2D6").unwrap();
        assert_eq!(cyp2d6.phenotype, NOT_REPORTED);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let kb = KnowledgeBase::builtin();
        let observations = extract_gene_observations("cyp2d6: poor metabolizer", &kb);
        let cyp2d6 = observations.iter().find(|o| o.gene == "CYP2D6").unwrap();
        assert_eq!(cyp2d6.phenotype, NOT_REPORTED);
    }

    #[test]
    fn two_markers_on_one_line_both_hit() {
        let kb = KnowledgeBase::builtin();
        let observations =
            extract_gene_observations("CYP2D6 and CYP2C19: Intermediate Metabolizer", &kb);
        assert_eq!(observations[0].gene, "CYP2D6");
        assert_eq!(observations[0].phenotype, "Intermediate Metabolizer");
        assert_eq!(observations[1].gene, "CYP2C19");
        assert_eq!(observations[1].phenotype, "Intermediate Metabolizer");
    }
}

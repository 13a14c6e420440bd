//! Every sentence the engine emits, in one place.
//!
//! Wording is part of the clinical contract: hosts snapshot these strings
//! into notes and audit trails, so changes here are breaking changes.
//! Nothing in this module decides anything; callers pass in facts, this
//! module phrases them.

/// Format templates for engine output.
pub struct MessageTemplates;

impl MessageTemplates {
    /// Phenoconversion audit line. `meds` are the interacting generics in
    /// the order they appear on the active list; `strength` is one of
    /// "strong inhibitor", "moderate inhibitor", "inducer".
    pub fn adjustment(
        gene: &str,
        genotype: &str,
        adjusted_to: &str,
        meds: &[String],
        strength: &str,
    ) -> String {
        format!(
            "{}: Genotype = {}, adjusted to {} due to {} ({}).",
            gene,
            genotype,
            adjusted_to,
            meds.join(", "),
            strength,
        )
    }

    /// Recommendation narrative. The percentage truncates toward zero, so
    /// 0.299 reads as 29%. An absent comment leaves the sentence bare.
    pub fn narrative(risk: f64, gene: &str, phenotype: &str, comment: &str) -> String {
        format!(
            "Estimated risk: {}%. [{} metabolism: {}]. {}",
            (risk * 100.0) as u32,
            gene,
            phenotype,
            comment,
        )
    }

    /// One bullet of the copy-paste note block.
    pub fn smart_note_line(label: &str, narrative: &str) -> String {
        format!("- {}: {}", label, narrative)
    }

    /// Shared-enzyme polypharmacy warning. `displays` are display labels.
    pub fn enzyme_polypharmacy(displays: &[String], gene: &str) -> String {
        format!(
            "Polypharmacy alert: {} all metabolized by {}. Increased risk of drug-drug \
             interaction and toxicity.",
            displays.join(", "),
            gene,
        )
    }

    /// Same-class polypharmacy warning.
    pub fn class_polypharmacy(displays: &[String], class_name: &str) -> String {
        format!(
            "Polypharmacy alert: {} are all {} agents. Review for therapeutic duplication.",
            displays.join(", "),
            class_name,
        )
    }

    /// One flowsheet documentation prompt, tagged with its medication.
    pub fn flowsheet_prompt(display: &str, prompt: &str) -> String {
        format!("{}: {}", display, prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjustment_reads_as_audit_line() {
        let msg = MessageTemplates::adjustment(
            "CYP2D6",
            "Normal Metabolizer",
            "Poor Metabolizer",
            &["paroxetine".to_string(), "bupropion".to_string()],
            "strong inhibitor",
        );
        assert_eq!(
            msg,
            "CYP2D6: Genotype = Normal Metabolizer, adjusted to Poor Metabolizer \
             due to paroxetine, bupropion (strong inhibitor).",
        );
    }

    #[test]
    fn narrative_truncates_percentage() {
        let msg = MessageTemplates::narrative(0.299, "CYP2D6", "Poor Metabolizer", "Comment.");
        assert!(msg.starts_with("Estimated risk: 29%."), "got {msg:?}");
    }

    #[test]
    fn narrative_survives_float_noise() {
        // 0.1 * 3.0 carries binary noise; the display must still read 30%.
        let risk = 0.1_f64 * 3.0;
        let msg = MessageTemplates::narrative(risk, "CYP2D6", "Poor Metabolizer", "");
        assert!(msg.starts_with("Estimated risk: 30%."), "got {msg:?}");
    }

    #[test]
    fn narrative_without_comment_stays_well_formed() {
        let msg = MessageTemplates::narrative(0.05, "CYP2C19", "Not Reported", "");
        assert_eq!(msg, "Estimated risk: 5%. [CYP2C19 metabolism: Not Reported]. ");
    }

    #[test]
    fn smart_note_line_is_a_bullet() {
        let msg = MessageTemplates::smart_note_line(
            "CYP2D6 (Poor Metabolizer) + risperidone (Risperdal)",
            "Estimated risk: 30%.",
        );
        assert!(msg.starts_with("- CYP2D6 (Poor Metabolizer)"));
        assert!(msg.ends_with("Estimated risk: 30%."));
    }

    #[test]
    fn enzyme_warning_names_every_medication() {
        let msg = MessageTemplates::enzyme_polypharmacy(
            &[
                "risperidone (Risperdal)".to_string(),
                "aripiprazole (Abilify)".to_string(),
            ],
            "CYP2D6",
        );
        assert_eq!(
            msg,
            "Polypharmacy alert: risperidone (Risperdal), aripiprazole (Abilify) all \
             metabolized by CYP2D6. Increased risk of drug-drug interaction and toxicity.",
        );
    }

    #[test]
    fn class_warning_names_the_class() {
        let msg = MessageTemplates::class_polypharmacy(
            &[
                "escitalopram (Lexapro)".to_string(),
                "sertraline (Zoloft)".to_string(),
            ],
            "SSRI",
        );
        assert!(msg.contains("are all SSRI agents"));
        assert!(msg.contains("escitalopram (Lexapro), sertraline (Zoloft)"));
    }

    #[test]
    fn warnings_avoid_decoration() {
        // Plain prose only; hosts add their own severity styling.
        let enzyme =
            MessageTemplates::enzyme_polypharmacy(&["a".to_string(), "b".to_string()], "CYP2D6");
        let class =
            MessageTemplates::class_polypharmacy(&["a".to_string(), "b".to_string()], "SSRI");
        for msg in [enzyme, class] {
            assert!(msg.is_ascii(), "decoration crept in: {msg:?}");
        }
    }

    #[test]
    fn prompt_is_tagged_with_display() {
        let msg =
            MessageTemplates::flowsheet_prompt("risperidone (Risperdal)", "Monitor for tremor");
        assert_eq!(msg, "risperidone (Risperdal): Monitor for tremor");
    }
}

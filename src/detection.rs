//! Polypharmacy detection.
//!
//! Two independent lenses over the same regimen. The enzyme lens fires when
//! two or more actionable medications share a gene and functional phenotype
//! group; it works off the scoring pass's groups, so only rule-backed pairs
//! count. The class lens fires when two or more active medications share a
//! therapeutic class, genetics aside. Both always run; neither suppresses
//! the other, and a pair of SSRIs sharing CYP2C19 can legitimately surface
//! twice.

use crate::messages::MessageTemplates;
use crate::normalize::display_label;
use crate::reference::KnowledgeBase;
use crate::types::{ActiveMedication, ClassFinding, EnzymeFinding, EnzymeGroup};

/// Report every enzyme group with at least two member medications.
pub fn detect_enzyme_polypharmacy(
    groups: &[EnzymeGroup],
    kb: &KnowledgeBase,
) -> Vec<EnzymeFinding> {
    groups
        .iter()
        .filter(|g| g.medications.len() >= 2)
        .map(|g| {
            let displays: Vec<String> = g
                .medications
                .iter()
                .map(|generic| display_label(kb, generic))
                .collect();
            let message = MessageTemplates::enzyme_polypharmacy(&displays, &g.gene);
            EnzymeFinding {
                gene: g.gene.clone(),
                phenotype: g.phenotype.clone(),
                medications: displays,
                message,
            }
        })
        .collect()
}

/// Report every therapeutic class holding at least two active medications.
/// Classes appear in first-encounter order over the active list.
pub fn detect_class_polypharmacy(
    active: &[ActiveMedication],
    kb: &KnowledgeBase,
) -> Vec<ClassFinding> {
    let mut grouped: Vec<(String, Vec<String>)> = Vec::new();
    for med in active {
        let Some(class_name) = kb.class_of(&med.generic) else {
            continue;
        };
        match grouped.iter_mut().find(|(name, _)| name == class_name) {
            Some((_, displays)) => displays.push(med.display.clone()),
            None => grouped.push((class_name.to_string(), vec![med.display.clone()])),
        }
    }

    grouped
        .into_iter()
        .filter(|(_, displays)| displays.len() >= 2)
        .map(|(class, displays)| {
            let message = MessageTemplates::class_polypharmacy(&displays, &class);
            ClassFinding {
                class,
                medications: displays,
                message,
            }
        })
        .collect()
}

//! Phenoconversion: adjusting genotype-predicted phenotypes for the
//! patient's actual medication list.
//!
//! A genotype says what the enzyme could do; co-medications decide what it
//! does today. Strong inhibitors force the functional phenotype to Poor
//! Metabolizer, moderate inhibitors pull anyone not already Poor down to
//! Intermediate, and inducers push to Ultra-rapid. Inducers are applied
//! last and unconditionally, so an inducer on top of an inhibitor lands on
//! Ultra-rapid; downstream risk rules key off that final value. Every
//! adjustment is logged for the audit trail.

use crate::messages::MessageTemplates;
use crate::reference::KnowledgeBase;
use crate::types::{
    ActiveMedication, GeneObservation, GeneState, INTERMEDIATE_METABOLIZER, NOT_REPORTED,
    POOR_METABOLIZER, ULTRA_RAPID_METABOLIZER,
};

/// Gene states after adjustment plus the audit log of what moved and why.
#[derive(Debug, Clone)]
pub struct PhenoconversionOutcome {
    pub states: Vec<GeneState>,
    pub log: Vec<String>,
}

/// Active-list generics that appear in a profile medication list, preserving
/// active-list order.
fn interacting(active: &[ActiveMedication], listed: &[String]) -> Vec<String> {
    active
        .iter()
        .filter(|m| listed.contains(&m.generic))
        .map(|m| m.generic.clone())
        .collect()
}

/// Fold observations into per-gene states, then run the adjustment pass.
///
/// Seeding: one state per gene, at the position of the gene's first
/// observation; a later observation of the same gene overwrites the
/// phenotype (an addendum line supersedes the original result). Sentinel
/// states are never adjusted: a gene absent from the report text keeps
/// "Not Reported" as its functional phenotype and matches no rule
/// downstream.
pub fn phenoconvert(
    observations: &[GeneObservation],
    active: &[ActiveMedication],
    kb: &KnowledgeBase,
) -> PhenoconversionOutcome {
    let mut states: Vec<GeneState> = Vec::new();
    for observation in observations {
        match states.iter_mut().find(|s| s.gene == observation.gene) {
            Some(state) => {
                state.genotype = observation.phenotype.clone();
                state.functional = observation.phenotype.clone();
            }
            None => states.push(GeneState::new(&observation.gene, &observation.phenotype)),
        }
    }

    let mut log = Vec::new();
    for state in &mut states {
        if state.genotype == NOT_REPORTED {
            continue;
        }
        let Some(profile) = kb.phenoconversion_profile(&state.gene) else {
            continue;
        };

        let strong = interacting(active, &profile.strong_inhibitors);
        if !strong.is_empty() {
            state.functional = POOR_METABOLIZER.to_string();
            log.push(MessageTemplates::adjustment(
                &state.gene,
                &state.genotype,
                POOR_METABOLIZER,
                &strong,
                "strong inhibitor",
            ));
            state.caused_by.extend(strong);
        }

        let moderate = interacting(active, &profile.moderate_inhibitors);
        if !moderate.is_empty() && state.functional != POOR_METABOLIZER {
            state.functional = INTERMEDIATE_METABOLIZER.to_string();
            log.push(MessageTemplates::adjustment(
                &state.gene,
                &state.genotype,
                INTERMEDIATE_METABOLIZER,
                &moderate,
                "moderate inhibitor",
            ));
            state.caused_by.extend(moderate);
        }

        let inducers = interacting(active, &profile.inducers);
        if !inducers.is_empty() {
            state.functional = ULTRA_RAPID_METABOLIZER.to_string();
            log.push(MessageTemplates::adjustment(
                &state.gene,
                &state.genotype,
                ULTRA_RAPID_METABOLIZER,
                &inducers,
                "inducer",
            ));
            state.caused_by.extend(inducers);
        }
    }

    PhenoconversionOutcome { states, log }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::resolve_medication;

    fn meds(kb: &KnowledgeBase, names: &[&str]) -> Vec<ActiveMedication> {
        names.iter().map(|n| resolve_medication(n, kb)).collect()
    }

    #[test]
    fn later_observation_overwrites_earlier_in_place() {
        let kb = KnowledgeBase::builtin();
        let observations = vec![
            GeneObservation::new("CYP2D6", "Normal Metabolizer"),
            GeneObservation::new("CYP2C19", "Poor Metabolizer"),
            GeneObservation::new("CYP2D6", "Poor Metabolizer"),
        ];
        let outcome = phenoconvert(&observations, &[], &kb);
        assert_eq!(outcome.states.len(), 2);
        assert_eq!(outcome.states[0].gene, "CYP2D6");
        assert_eq!(outcome.states[0].genotype, "Poor Metabolizer");
        assert_eq!(outcome.states[1].gene, "CYP2C19");
    }

    #[test]
    fn strong_inhibitor_forces_poor() {
        let kb = KnowledgeBase::builtin();
        let observations = vec![GeneObservation::new("CYP2D6", "Normal Metabolizer")];
        let outcome = phenoconvert(&observations, &meds(&kb, &["paroxetine"]), &kb);
        let state = &outcome.states[0];
        assert_eq!(state.genotype, "Normal Metabolizer");
        assert_eq!(state.functional, POOR_METABOLIZER);
        assert_eq!(state.caused_by, vec!["paroxetine".to_string()]);
        assert_eq!(
            outcome.log,
            vec![
                "CYP2D6: Genotype = Normal Metabolizer, adjusted to Poor Metabolizer \
                 due to paroxetine (strong inhibitor)."
                    .to_string()
            ],
        );
    }

    #[test]
    fn strong_inhibitor_logs_even_when_already_poor() {
        let kb = KnowledgeBase::builtin();
        let observations = vec![GeneObservation::new("CYP2D6", "Poor Metabolizer")];
        let outcome = phenoconvert(&observations, &meds(&kb, &["fluoxetine"]), &kb);
        let state = &outcome.states[0];
        assert_eq!(state.functional, POOR_METABOLIZER);
        assert!(state.was_adjusted());
        assert_eq!(outcome.log.len(), 1);
        assert!(outcome.log[0].contains("due to fluoxetine (strong inhibitor)"));
    }

    #[test]
    fn moderate_inhibitor_spares_poor_metabolizers() {
        let kb = KnowledgeBase::builtin();
        let observations = vec![GeneObservation::new("CYP3A4", "Poor Metabolizer")];
        let outcome = phenoconvert(&observations, &meds(&kb, &["fluvoxamine"]), &kb);
        let state = &outcome.states[0];
        assert_eq!(state.functional, POOR_METABOLIZER);
        assert!(!state.was_adjusted());
        assert!(outcome.log.is_empty());
    }

    #[test]
    fn moderate_inhibitor_pulls_normal_to_intermediate() {
        let kb = KnowledgeBase::builtin();
        let observations = vec![GeneObservation::new("CYP3A4", "Normal Metabolizer")];
        let outcome = phenoconvert(&observations, &meds(&kb, &["fluvoxamine"]), &kb);
        assert_eq!(outcome.states[0].functional, INTERMEDIATE_METABOLIZER);
        assert!(outcome.log[0].contains("(moderate inhibitor)"));
    }

    #[test]
    fn inducer_overrides_inhibitor_result() {
        let kb = KnowledgeBase::builtin();
        let observations = vec![GeneObservation::new("CYP2C19", "Normal Metabolizer")];
        let outcome = phenoconvert(
            &observations,
            &meds(&kb, &["fluvoxamine", "carbamazepine"]),
            &kb,
        );
        let state = &outcome.states[0];
        assert_eq!(state.functional, ULTRA_RAPID_METABOLIZER);
        assert_eq!(
            state.caused_by,
            vec!["fluvoxamine".to_string(), "carbamazepine".to_string()],
        );
        assert_eq!(outcome.log.len(), 2);
        assert!(outcome.log[0].contains("(strong inhibitor)"));
        assert!(outcome.log[1].contains("(inducer)"));
    }

    #[test]
    fn sentinel_states_are_never_adjusted() {
        let kb = KnowledgeBase::builtin();
        let observations = vec![GeneObservation::new("CYP2C19", "Not Reported")];
        let outcome = phenoconvert(
            &observations,
            &meds(&kb, &["fluvoxamine", "carbamazepine"]),
            &kb,
        );
        let state = &outcome.states[0];
        assert_eq!(state.genotype, "Not Reported");
        assert_eq!(state.functional, "Not Reported");
        assert!(!state.was_adjusted());
        assert!(outcome.log.is_empty());
    }

    #[test]
    fn gene_without_profile_is_untouched() {
        let kb = KnowledgeBase::builtin();
        let observations = vec![GeneObservation::new("HTR2A", "A/A")];
        let outcome = phenoconvert(&observations, &meds(&kb, &["fluvoxamine"]), &kb);
        let state = &outcome.states[0];
        assert_eq!(state.functional, "A/A");
        assert!(!state.was_adjusted());
        assert!(outcome.log.is_empty());
    }

    #[test]
    fn interacting_medications_follow_active_list_order() {
        let kb = KnowledgeBase::builtin();
        let observations = vec![GeneObservation::new("CYP2D6", "Normal Metabolizer")];
        let outcome = phenoconvert(
            &observations,
            &meds(&kb, &["bupropion", "paroxetine"]),
            &kb,
        );
        assert_eq!(
            outcome.states[0].caused_by,
            vec!["bupropion".to_string(), "paroxetine".to_string()],
        );
        assert!(outcome.log[0].contains("due to bupropion, paroxetine"));
    }

    #[test]
    fn no_active_medications_means_no_adjustments() {
        let kb = KnowledgeBase::builtin();
        let observations = vec![
            GeneObservation::new("CYP2D6", "Normal Metabolizer"),
            GeneObservation::new("CYP2C19", "Ultra-rapid Metabolizer"),
        ];
        let outcome = phenoconvert(&observations, &[], &kb);
        assert!(outcome.log.is_empty());
        assert!(outcome.states.iter().all(|s| !s.was_adjusted()));
    }
}

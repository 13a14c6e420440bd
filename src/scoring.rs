//! Drug-gene interaction scoring.
//!
//! Every (gene state, active medication) pair is checked against the rule
//! table on the functional phenotype. A hit scores
//!
//! ```text
//! risk = min(prior * multiplier * symptom_factor, 1.0)
//! ```
//!
//! and yields one labeled recommendation with its narrative, one note
//! bullet, and membership in a shared-enzyme group. Flowsheet prompts are
//! collected for every pair the prompt table knows, whether or not a risk
//! rule exists for it.

use std::collections::HashSet;

use crate::messages::MessageTemplates;
use crate::reference::KnowledgeBase;
use crate::types::{
    ActiveMedication, EnzymeGroup, GeneState, InteractionKey, ObservedSymptom, Recommendation,
};

/// Everything the scoring pass produces. Recommendations are in generation
/// order (gene state order, then active list order); prompts are sorted and
/// deduplicated for direct flowsheet use.
#[derive(Debug, Clone, Default)]
pub struct ScoringOutcome {
    pub recommendations: Vec<Recommendation>,
    pub flowsheet_prompts: Vec<String>,
    pub smart_note: Vec<String>,
    pub enzyme_groups: Vec<EnzymeGroup>,
}

pub fn score_interactions(
    states: &[GeneState],
    active: &[ActiveMedication],
    symptom: ObservedSymptom,
    kb: &KnowledgeBase,
) -> ScoringOutcome {
    let mut outcome = ScoringOutcome::default();
    let mut seen_labels: HashSet<String> = HashSet::new();

    for state in states {
        for med in active {
            let key = InteractionKey::new(&state.gene, &state.functional, &med.generic);

            for prompt in kb.prompts_for(&key) {
                outcome
                    .flowsheet_prompts
                    .push(MessageTemplates::flowsheet_prompt(&med.display, prompt));
            }

            let Some(multiplier) = kb.risk_multiplier(&key) else {
                continue;
            };

            let label = format!("{} ({}) + {}", state.gene, state.functional, med.display);
            if !seen_labels.insert(label.clone()) {
                continue;
            }

            let risk =
                (kb.prior_risk(&med.generic) * multiplier * symptom.risk_factor()).min(1.0);
            let comment = kb.clinical_comment(&key).unwrap_or("");
            let narrative =
                MessageTemplates::narrative(risk, &state.gene, &state.functional, comment);

            outcome
                .smart_note
                .push(MessageTemplates::smart_note_line(&label, &narrative));

            match outcome
                .enzyme_groups
                .iter_mut()
                .find(|g| g.gene == state.gene && g.phenotype == state.functional)
            {
                Some(group) => {
                    if !group.medications.contains(&med.generic) {
                        group.medications.push(med.generic.clone());
                    }
                }
                None => outcome.enzyme_groups.push(EnzymeGroup {
                    gene: state.gene.clone(),
                    phenotype: state.functional.clone(),
                    medications: vec![med.generic.clone()],
                }),
            }

            outcome.recommendations.push(Recommendation {
                risk,
                label,
                narrative,
            });
        }
    }

    outcome.flowsheet_prompts.sort();
    outcome.flowsheet_prompts.dedup();
    outcome
}

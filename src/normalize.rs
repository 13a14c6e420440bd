//! Medication name normalization.
//!
//! Hosts hand us free-form medication strings: brand names, generics, picker
//! labels like "risperidone (Risperdal)", arbitrary case and padding. All of
//! it funnels through here into `ActiveMedication` values with a canonical
//! lowercase generic and a stable display label. Unknown names pass through
//! rather than erroring; the engine simply has no rules for them.

use crate::reference::KnowledgeBase;
use crate::types::ActiveMedication;

/// First character uppercased, remainder lowercased.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Display label for a canonical generic: "generic (Brand)" when the alias
/// table knows it, otherwise the capitalized generic.
pub fn display_label(kb: &KnowledgeBase, generic: &str) -> String {
    kb.display_name(generic)
        .unwrap_or_else(|| capitalize(generic))
}

/// Resolve one raw medication string. Total: unknown names become their own
/// lowercase generic.
pub fn resolve_medication(raw: &str, kb: &KnowledgeBase) -> ActiveMedication {
    let token = raw.trim().to_lowercase();
    let generic = match kb.resolve_generic(&token) {
        Some(g) => g.to_string(),
        None => token,
    };
    let display = display_label(kb, &generic);
    ActiveMedication { generic, display }
}

/// Resolve a host selection list. Each entry contributes its first
/// whitespace token (picker labels carry the generic first); blank entries
/// are skipped. Duplicate generics collapse to one entry keeping the first
/// occurrence's position.
pub fn resolve_selection(entries: &[String], kb: &KnowledgeBase) -> Vec<ActiveMedication> {
    let mut out: Vec<ActiveMedication> = Vec::new();
    for entry in entries {
        let Some(token) = entry.split_whitespace().next() else {
            continue;
        };
        let med = resolve_medication(token, kb);
        match out.iter_mut().find(|m| m.generic == med.generic) {
            Some(existing) => existing.display = med.display,
            None => out.push(med),
        }
    }
    out
}

/// Sorted display labels for every medication the alias table knows. Hosts
/// use this to build their picker.
pub fn selection_options(kb: &KnowledgeBase) -> Vec<String> {
    let mut options: Vec<String> = kb
        .medication_aliases
        .iter()
        .map(|a| display_label(kb, &a.generic))
        .collect();
    options.sort();
    options.dedup();
    options
}

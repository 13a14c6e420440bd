use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Phenotype labels
// ---------------------------------------------------------------------------

/// Sentinel phenotype for a panel gene never matched in the report text.
pub const NOT_REPORTED: &str = "Not Reported";

/// Functional phenotype assigned by a strong-inhibitor adjustment.
pub const POOR_METABOLIZER: &str = "Poor Metabolizer";

/// Functional phenotype assigned by a moderate-inhibitor adjustment.
pub const INTERMEDIATE_METABOLIZER: &str = "Intermediate Metabolizer";

/// Functional phenotype assigned by an inducer adjustment.
pub const ULTRA_RAPID_METABOLIZER: &str = "Ultra-rapid Metabolizer";

// ---------------------------------------------------------------------------
// ObservedSymptom
// ---------------------------------------------------------------------------

/// The symptom selected alongside the medication list. A fixed set: the
/// high-relevance members double the computed risk, the rest leave it
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservedSymptom {
    None,
    Tremor,
    Agitation,
    Sedation,
    QtProlongation,
    Toxicity,
    OrthostaticHypotension,
}

impl ObservedSymptom {
    /// Every selectable value, in presentation order.
    pub const ALL: [ObservedSymptom; 7] = [
        Self::None,
        Self::Tremor,
        Self::Agitation,
        Self::Sedation,
        Self::QtProlongation,
        Self::Toxicity,
        Self::OrthostaticHypotension,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Tremor => "tremor",
            Self::Agitation => "agitation",
            Self::Sedation => "sedation",
            Self::QtProlongation => "QT prolongation",
            Self::Toxicity => "toxicity",
            Self::OrthostaticHypotension => "orthostatic hypotension",
        }
    }

    /// Risk weight applied during scoring. Only the high-relevance symptoms
    /// double; sedation and "None" weigh 1.
    pub fn risk_factor(&self) -> f64 {
        match self {
            Self::Tremor
            | Self::Agitation
            | Self::QtProlongation
            | Self::Toxicity
            | Self::OrthostaticHypotension => 2.0,
            Self::None | Self::Sedation => 1.0,
        }
    }
}

impl Default for ObservedSymptom {
    fn default() -> Self {
        Self::None
    }
}

impl fmt::Display for ObservedSymptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObservedSymptom {
    type Err = CdsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "None" => Ok(Self::None),
            "tremor" => Ok(Self::Tremor),
            "agitation" => Ok(Self::Agitation),
            "sedation" => Ok(Self::Sedation),
            "QT prolongation" => Ok(Self::QtProlongation),
            "toxicity" => Ok(Self::Toxicity),
            "orthostatic hypotension" => Ok(Self::OrthostaticHypotension),
            other => Err(CdsError::UnknownSymptom(other.to_string())),
        }
    }
}

// Serialized as the display string ("QT prolongation"), not the variant
// name, so the JSON snapshot carries the same vocabulary the host shows.
impl Serialize for ObservedSymptom {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ObservedSymptom {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Gene observations and states
// ---------------------------------------------------------------------------

/// One (gene, phenotype label) pair read from the report text, or the
/// "Not Reported" sentinel for a panel gene the text never mentioned.
/// Immutable once extracted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneObservation {
    pub gene: String,
    pub phenotype: String,
}

impl GeneObservation {
    pub fn new(gene: impl Into<String>, phenotype: impl Into<String>) -> Self {
        Self {
            gene: gene.into(),
            phenotype: phenotype.into(),
        }
    }

    pub fn is_reported(&self) -> bool {
        self.phenotype != NOT_REPORTED
    }
}

/// Per-gene phenoconversion state. `genotype` is the reported lab label and
/// never changes; `functional` is the effective label after inhibitor/inducer
/// adjustments; `caused_by` lists the medications responsible, in the order
/// the rules fired.
///
/// When extraction yields several observations for one gene, the state keeps
/// the gene's first-appearance position but the last observation's label:
/// last observation wins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneState {
    pub gene: String,
    pub genotype: String,
    pub functional: String,
    pub caused_by: Vec<String>,
}

impl GeneState {
    pub fn new(gene: impl Into<String>, phenotype: impl Into<String>) -> Self {
        let phenotype = phenotype.into();
        Self {
            gene: gene.into(),
            genotype: phenotype.clone(),
            functional: phenotype,
            caused_by: Vec::new(),
        }
    }

    /// True when any phenoconversion rule fired for this gene. A strong
    /// inhibitor on an already-Poor genotype leaves the labels equal but
    /// still records its cause, so `caused_by` is part of the check.
    pub fn was_adjusted(&self) -> bool {
        self.functional != self.genotype || !self.caused_by.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Medications
// ---------------------------------------------------------------------------

/// A normalized active medication: canonical generic name plus the
/// brand-augmented display label ("risperidone (Risperdal)").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActiveMedication {
    pub generic: String,
    pub display: String,
}

// ---------------------------------------------------------------------------
// InteractionKey
// ---------------------------------------------------------------------------

/// The (gene, functional phenotype, medication generic) triple joining the
/// risk-multiplier, clinical-comment, and flowsheet-prompt tables. Absence
/// from the risk table means "no actionable rule", not zero risk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct InteractionKey {
    pub gene: String,
    pub phenotype: String,
    pub medication: String,
}

impl InteractionKey {
    pub fn new(
        gene: impl Into<String>,
        phenotype: impl Into<String>,
        medication: impl Into<String>,
    ) -> Self {
        Self {
            gene: gene.into(),
            phenotype: phenotype.into(),
            medication: medication.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Recommendations and polypharmacy findings
// ---------------------------------------------------------------------------

/// One scored drug-gene recommendation. At most one per display label per
/// evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    /// Bounded heuristic product, `min(prior × multiplier × symptom, 1.0)`.
    pub risk: f64,
    /// `"<gene> (<phenotype>) + <medication display>"`, also the dedup key.
    pub label: String,
    pub narrative: String,
}

impl Recommendation {
    /// Fixed surfacing threshold; risks above it count as high-risk findings.
    pub const HIGH_RISK_THRESHOLD: f64 = 0.2;

    pub fn is_high_risk(&self) -> bool {
        self.risk > Self::HIGH_RISK_THRESHOLD
    }
}

/// Scoring-time tracking group: the medications (generic names, insertion
/// order, deduplicated) that produced an accepted recommendation for one
/// (gene, functional phenotype) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnzymeGroup {
    pub gene: String,
    pub phenotype: String,
    pub medications: Vec<String>,
}

/// Enzyme-based polypharmacy finding: ≥2 medications scored against the same
/// functional gene/phenotype pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnzymeFinding {
    pub gene: String,
    pub phenotype: String,
    /// Display labels, insertion order.
    pub medications: Vec<String>,
    pub message: String,
}

/// Class-based polypharmacy finding: ≥2 active medications in one
/// therapeutic class, independent of any gene state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassFinding {
    pub class: String,
    /// Display labels, active-list order.
    pub medications: Vec<String>,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Request & report
// ---------------------------------------------------------------------------

/// One evaluation request: decoded report text, raw medication selections
/// (display strings or bare tokens), and the observed symptom.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CdsRequest {
    pub report_text: String,
    pub medications: Vec<String>,
    pub symptom: ObservedSymptom,
}

/// Headline counts for the dashboard metrics row.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportSummary {
    /// Recommendations with risk above the fixed threshold.
    pub high_risk_count: usize,
    /// Enzyme findings plus class findings.
    pub polypharmacy_alert_count: usize,
    /// Distinct reported (gene, phenotype) pairs; sentinels excluded.
    pub markers_detected: usize,
}

/// The full output of one evaluation. Every field is a plain structured
/// value; `to_json` renders the audit snapshot verbatim from this struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CdsReport {
    pub report_id: Uuid,
    pub generated_at: NaiveDateTime,
    /// Raw extraction output, hits in text order then sentinels.
    pub observations: Vec<GeneObservation>,
    /// Post-phenoconversion states, one per distinct gene.
    pub gene_states: Vec<GeneState>,
    pub medications: Vec<ActiveMedication>,
    pub symptom: ObservedSymptom,
    /// Sorted by descending risk; ties keep generation order.
    pub recommendations: Vec<Recommendation>,
    pub enzyme_warnings: Vec<EnzymeFinding>,
    pub class_warnings: Vec<ClassFinding>,
    /// Sorted and deduplicated `"<medication display>: <prompt>"` lines.
    pub flowsheet_prompts: Vec<String>,
    /// One entry per triggered phenoconversion rule, in firing order.
    pub phenoconversion_log: Vec<String>,
    /// Copy-to-chart note lines, generation order.
    pub smart_note: Vec<String>,
    pub summary: ReportSummary,
    pub processing_time_ms: u64,
}

impl CdsReport {
    /// Pretty JSON snapshot for audit/export.
    pub fn to_json(&self) -> Result<String, CdsError> {
        serde_json::to_string_pretty(self).map_err(|e| CdsError::Serialization(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// CdsError
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum CdsError {
    #[error("Reference data load failed ({0}): {1}")]
    ReferenceDataLoad(String, String),

    #[error("Reference data parse failed ({0}): {1}")]
    ReferenceDataParse(String, String),

    #[error("Unknown symptom: {0}")]
    UnknownSymptom(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn symptom_round_trips_through_display_string() {
        for symptom in ObservedSymptom::ALL {
            let parsed: ObservedSymptom = symptom.as_str().parse().unwrap();
            assert_eq!(parsed, symptom);
        }
    }

    #[test]
    fn symptom_rejects_unknown_value() {
        let err = "dizziness".parse::<ObservedSymptom>().unwrap_err();
        assert!(matches!(err, CdsError::UnknownSymptom(ref s) if s == "dizziness"));
    }

    #[test]
    fn symptom_serializes_as_display_string() {
        let json = serde_json::to_string(&ObservedSymptom::QtProlongation).unwrap();
        assert_eq!(json, "\"QT prolongation\"");
        let back: ObservedSymptom = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ObservedSymptom::QtProlongation);
    }

    #[test]
    fn sedation_and_none_do_not_double_risk() {
        assert_eq!(ObservedSymptom::Sedation.risk_factor(), 1.0);
        assert_eq!(ObservedSymptom::None.risk_factor(), 1.0);
        assert_eq!(ObservedSymptom::Tremor.risk_factor(), 2.0);
        assert_eq!(ObservedSymptom::QtProlongation.risk_factor(), 2.0);
    }

    #[test]
    fn interaction_key_value_equality() {
        let a = InteractionKey::new("CYP2D6", "Poor Metabolizer", "risperidone");
        let b = InteractionKey::new("CYP2D6", "Poor Metabolizer", "risperidone");
        let c = InteractionKey::new("CYP2D6", "Poor Metabolizer", "aripiprazole");
        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut seen = HashSet::new();
        seen.insert(a);
        assert!(seen.contains(&b));
        assert!(!seen.contains(&c));
    }

    #[test]
    fn gene_state_starts_unadjusted() {
        let state = GeneState::new("CYP2D6", "Poor Metabolizer");
        assert_eq!(state.genotype, state.functional);
        assert!(!state.was_adjusted());
    }

    #[test]
    fn gene_state_with_cause_counts_as_adjusted() {
        // Strong inhibitor on an already-Poor genotype: labels stay equal
        // but the cause is recorded.
        let mut state = GeneState::new("CYP2D6", POOR_METABOLIZER);
        state.caused_by.push("paroxetine".to_string());
        assert!(state.was_adjusted());
    }

    #[test]
    fn high_risk_threshold_is_exclusive() {
        let at = Recommendation {
            risk: 0.2,
            label: "x".into(),
            narrative: "y".into(),
        };
        let above = Recommendation {
            risk: 0.21,
            label: "x".into(),
            narrative: "y".into(),
        };
        assert!(!at.is_high_risk());
        assert!(above.is_high_risk());
    }

    #[test]
    fn observation_sentinel_is_not_reported() {
        let obs = GeneObservation::new("MTHFR", NOT_REPORTED);
        assert!(!obs.is_reported());
        assert!(GeneObservation::new("MTHFR", "C/T").is_reported());
    }
}

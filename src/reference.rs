//! Reference knowledge base: every static table the engine reads.
//!
//! The dataset ships compiled in (`builtin`); hosts that maintain their own
//! rule set can load the same structure from a JSON file instead (`load`).
//! Either way the knowledge base is constructed once, shared by reference,
//! and never mutated.

use serde::{Deserialize, Serialize};

use crate::types::{CdsError, InteractionKey};

/// Prior adverse-event risk assumed for a medication with no table entry.
pub const DEFAULT_PRIOR_RISK: f64 = 0.05;

// ---------------------------------------------------------------------------
// Table row types
// ---------------------------------------------------------------------------

/// Brand-to-generic medication mapping. The brand is stored in display case
/// and also feeds the "generic (Brand)" display label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicationAlias {
    pub generic: String,
    pub brand: String,
}

/// Therapeutic class membership, generic names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrugClass {
    pub name: String,
    pub members: Vec<String>,
}

/// Per-gene inhibitor/inducer lists for phenoconversion. A gene absent from
/// the table behaves as all-empty lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhenoconversionProfile {
    pub gene: String,
    pub strong_inhibitors: Vec<String>,
    pub moderate_inhibitors: Vec<String>,
    pub inducers: Vec<String>,
}

/// One actionable drug-gene rule: the key and its risk multiplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskRule {
    pub key: InteractionKey,
    pub multiplier: f64,
}

/// Narrative guidance attached to a key. Comments may exist for keys with no
/// risk rule; they surface only when the rule does.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicalComment {
    pub key: InteractionKey,
    pub text: String,
}

/// Flowsheet documentation prompts attached to a key. Collected whenever the
/// key's gene state and medication are both present, rule or no rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptSet {
    pub key: InteractionKey,
    pub prompts: Vec<String>,
}

/// Baseline adverse-event risk per medication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorRisk {
    pub medication: String,
    pub risk: f64,
}

// ---------------------------------------------------------------------------
// KnowledgeBase
// ---------------------------------------------------------------------------

/// The complete, immutable reference dataset. Lookups are linear scans over
/// small tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    /// Gene/marker panel, fixed order. The two HLA entries are allele-style
    /// names matched tolerantly by the extractor.
    pub gene_panel: Vec<String>,
    /// Phenotype keyword vocabulary, ordered; the extractor records the
    /// first keyword contained in a line. "Not Detected" must precede
    /// "Detected" (containment).
    pub phenotype_vocabulary: Vec<String>,
    pub medication_aliases: Vec<MedicationAlias>,
    pub drug_classes: Vec<DrugClass>,
    pub phenoconversion_profiles: Vec<PhenoconversionProfile>,
    pub risk_rules: Vec<RiskRule>,
    pub clinical_comments: Vec<ClinicalComment>,
    pub flowsheet_prompts: Vec<PromptSet>,
    pub prior_risks: Vec<PriorRisk>,
}

impl KnowledgeBase {
    /// Load a knowledge base from a JSON file (the serialization of this
    /// struct). Used by hosts that maintain their own rule set.
    pub fn load(path: &std::path::Path) -> Result<Self, CdsError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            CdsError::ReferenceDataLoad(path.display().to_string(), e.to_string())
        })?;
        serde_json::from_str(&json).map_err(|e| {
            CdsError::ReferenceDataParse(path.display().to_string(), e.to_string())
        })
    }

    /// Resolve a raw token to a canonical generic name. Brands resolve to
    /// their generic, known generics to themselves, case-insensitively.
    pub fn resolve_generic(&self, token: &str) -> Option<&str> {
        let lower = token.to_lowercase();
        self.medication_aliases
            .iter()
            .find(|a| a.brand.to_lowercase() == lower)
            .map(|a| a.generic.as_str())
            .or_else(|| {
                self.medication_aliases
                    .iter()
                    .find(|a| a.generic == lower)
                    .map(|a| a.generic.as_str())
            })
    }

    /// "generic (Brand)" display label for a known generic.
    pub fn display_name(&self, generic: &str) -> Option<String> {
        self.medication_aliases
            .iter()
            .find(|a| a.generic == generic)
            .map(|a| format!("{} ({})", a.generic, a.brand))
    }

    /// First therapeutic class containing the generic.
    pub fn class_of(&self, generic: &str) -> Option<&str> {
        self.drug_classes
            .iter()
            .find(|c| c.members.iter().any(|m| m == generic))
            .map(|c| c.name.as_str())
    }

    pub fn phenoconversion_profile(&self, gene: &str) -> Option<&PhenoconversionProfile> {
        self.phenoconversion_profiles.iter().find(|p| p.gene == gene)
    }

    pub fn risk_multiplier(&self, key: &InteractionKey) -> Option<f64> {
        self.risk_rules
            .iter()
            .find(|r| r.key == *key)
            .map(|r| r.multiplier)
    }

    pub fn clinical_comment(&self, key: &InteractionKey) -> Option<&str> {
        self.clinical_comments
            .iter()
            .find(|c| c.key == *key)
            .map(|c| c.text.as_str())
    }

    /// Prompts for a key; empty when the table has none.
    pub fn prompts_for(&self, key: &InteractionKey) -> &[String] {
        self.flowsheet_prompts
            .iter()
            .find(|p| p.key == *key)
            .map(|p| p.prompts.as_slice())
            .unwrap_or(&[])
    }

    pub fn prior_risk(&self, generic: &str) -> f64 {
        self.prior_risks
            .iter()
            .find(|p| p.medication == generic)
            .map(|p| p.risk)
            .unwrap_or(DEFAULT_PRIOR_RISK)
    }
}

// ---------------------------------------------------------------------------
// Builtin dataset
// ---------------------------------------------------------------------------

fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn alias(brand: &str, generic: &str) -> MedicationAlias {
    MedicationAlias {
        generic: generic.into(),
        brand: brand.into(),
    }
}

fn class(name: &str, members: &[&str]) -> DrugClass {
    DrugClass {
        name: name.into(),
        members: strings(members),
    }
}

fn profile(
    gene: &str,
    strong: &[&str],
    moderate: &[&str],
    inducers: &[&str],
) -> PhenoconversionProfile {
    PhenoconversionProfile {
        gene: gene.into(),
        strong_inhibitors: strings(strong),
        moderate_inhibitors: strings(moderate),
        inducers: strings(inducers),
    }
}

fn rule(gene: &str, phenotype: &str, medication: &str, multiplier: f64) -> RiskRule {
    RiskRule {
        key: InteractionKey::new(gene, phenotype, medication),
        multiplier,
    }
}

fn comment(gene: &str, phenotype: &str, medication: &str, text: &str) -> ClinicalComment {
    ClinicalComment {
        key: InteractionKey::new(gene, phenotype, medication),
        text: text.into(),
    }
}

fn prompts(gene: &str, phenotype: &str, medication: &str, list: &[&str]) -> PromptSet {
    PromptSet {
        key: InteractionKey::new(gene, phenotype, medication),
        prompts: strings(list),
    }
}

fn prior(medication: &str, risk: f64) -> PriorRisk {
    PriorRisk {
        medication: medication.into(),
        risk,
    }
}

impl KnowledgeBase {
    /// The compiled-in dataset: behavioral-health panel, psychiatric
    /// medication aliases and classes, CPIC-derived interaction rules.
    pub fn builtin() -> Self {
        Self {
            gene_panel: strings(&[
                "CYP2D6",
                "CYP2C19",
                "CYP2C9",
                "CYP3A4",
                "CYP3A5",
                "CYP1A2",
                "CYP2B6",
                "UGT1A4",
                "COMT",
                "HTR2A",
                "SLC6A4",
                "MTHFR",
                "HLA-B*15:02",
                "HLA-A*31:01",
            ]),
            phenotype_vocabulary: strings(&[
                "Ultra-rapid Metabolizer",
                "Rapid Metabolizer",
                "Normal Metabolizer",
                "Intermediate Metabolizer",
                "Poor Metabolizer",
                "Increased Function",
                "Normal Function",
                "Decreased Function",
                "Not Detected",
                "Detected",
                "Positive",
                "Negative",
                "A/A",
                "A/G",
                "G/G",
                "S/S",
                "S/L",
                "L/L",
                "Val/Val",
                "Val/Met",
                "Met/Met",
                "C/C",
                "C/T",
                "T/T",
            ]),
            medication_aliases: vec![
                // SSRIs / SNRIs
                alias("Lexapro", "escitalopram"),
                alias("Celexa", "citalopram"),
                alias("Paxil", "paroxetine"),
                alias("Prozac", "fluoxetine"),
                alias("Zoloft", "sertraline"),
                alias("Luvox", "fluvoxamine"),
                alias("Effexor", "venlafaxine"),
                alias("Cymbalta", "duloxetine"),
                // Antipsychotics
                alias("Abilify", "aripiprazole"),
                alias("Risperdal", "risperidone"),
                alias("Zyprexa", "olanzapine"),
                alias("Seroquel", "quetiapine"),
                alias("Geodon", "ziprasidone"),
                alias("Haldol", "haloperidol"),
                alias("Clozaril", "clozapine"),
                // Mood stabilizers
                alias("Lamictal", "lamotrigine"),
                alias("Tegretol", "carbamazepine"),
                alias("Depakote", "valproate"),
                // Anxiolytics / sleep
                alias("Ativan", "lorazepam"),
                alias("Klonopin", "clonazepam"),
                alias("Xanax", "alprazolam"),
                alias("Valium", "diazepam"),
                alias("Onfi", "clobazam"),
                alias("Ambien", "zolpidem"),
                alias("Buspar", "buspirone"),
                // Other psych / interacting agents
                alias("Wellbutrin", "bupropion"),
                alias("Norvir", "ritonavir"),
                alias("Nizoral", "ketoconazole"),
            ],
            drug_classes: vec![
                class(
                    "SSRI",
                    &[
                        "citalopram",
                        "escitalopram",
                        "fluoxetine",
                        "fluvoxamine",
                        "paroxetine",
                        "sertraline",
                    ],
                ),
                class("SNRI", &["venlafaxine", "duloxetine"]),
                class(
                    "atypical antipsychotic",
                    &[
                        "aripiprazole",
                        "risperidone",
                        "olanzapine",
                        "quetiapine",
                        "ziprasidone",
                        "clozapine",
                    ],
                ),
                class("typical antipsychotic", &["haloperidol"]),
                class("mood stabilizer", &["lamotrigine", "carbamazepine", "valproate"]),
                class(
                    "benzodiazepine",
                    &["lorazepam", "clonazepam", "alprazolam", "diazepam", "clobazam"],
                ),
                class("sedative-hypnotic", &["zolpidem"]),
                class("NDRI", &["bupropion"]),
            ],
            phenoconversion_profiles: vec![
                profile("CYP2D6", &["paroxetine", "fluoxetine", "bupropion"], &[], &[]),
                profile("CYP2C19", &["fluvoxamine", "fluoxetine"], &[], &["carbamazepine"]),
                profile(
                    "CYP3A4",
                    &["ritonavir", "ketoconazole"],
                    &["fluvoxamine"],
                    &["carbamazepine"],
                ),
                // "smoking" is a pseudo-medication token: hosts pass it in
                // the active list to model smoker induction.
                profile("CYP1A2", &["fluvoxamine"], &[], &["carbamazepine", "smoking"]),
                profile(
                    "CYP2B6",
                    &["clopidogrel", "ticlopidine"],
                    &["voriconazole"],
                    &["carbamazepine", "rifampin"],
                ),
            ],
            risk_rules: vec![
                // Antipsychotics
                rule("CYP2D6", "Poor Metabolizer", "risperidone", 3.0),
                rule("CYP2D6", "Poor Metabolizer", "aripiprazole", 2.5),
                rule("CYP2D6", "Poor Metabolizer", "haloperidol", 2.5),
                rule("CYP3A4", "Decreased Function", "quetiapine", 2.0),
                rule("CYP3A4", "Intermediate Metabolizer", "quetiapine", 1.5),
                rule("CYP3A5", "Normal Metabolizer", "quetiapine", 0.7),
                rule("CYP1A2", "Ultra-rapid Metabolizer", "olanzapine", 0.5),
                rule("CYP1A2", "Poor Metabolizer", "olanzapine", 1.5),
                rule("CYP1A2", "Ultra-rapid Metabolizer", "clozapine", 0.5),
                rule("CYP1A2", "Poor Metabolizer", "clozapine", 1.8),
                // SSRIs / SNRIs
                rule("CYP2C19", "Ultra-rapid Metabolizer", "citalopram", 0.4),
                rule("CYP2C19", "Poor Metabolizer", "citalopram", 2.0),
                rule("CYP2C19", "Ultra-rapid Metabolizer", "escitalopram", 0.5),
                rule("CYP2C19", "Poor Metabolizer", "escitalopram", 1.8),
                rule("CYP2D6", "Poor Metabolizer", "paroxetine", 2.0),
                rule("CYP2D6", "Poor Metabolizer", "fluoxetine", 1.5),
                rule("CYP2D6", "Poor Metabolizer", "venlafaxine", 2.0),
                rule("CYP2D6", "Poor Metabolizer", "duloxetine", 1.5),
                // Mood stabilizers
                rule("CYP2C19", "Poor Metabolizer", "lamotrigine", 1.2),
                rule("UGT1A4", "Decreased Function", "lamotrigine", 1.5),
                rule("CYP2C9", "Poor Metabolizer", "valproate", 1.4),
                rule("HLA-B*15:02", "Positive", "carbamazepine", 5.0),
                rule("HLA-A*31:01", "Positive", "carbamazepine", 3.0),
                // Other psych
                rule("CYP2B6", "Poor Metabolizer", "bupropion", 1.6),
                // Anxiolytics / sleep
                rule("CYP3A4", "Decreased Function", "alprazolam", 1.7),
                rule("CYP3A4", "Intermediate Metabolizer", "alprazolam", 1.3),
                rule("CYP2C19", "Poor Metabolizer", "diazepam", 1.6),
                rule("CYP3A4", "Decreased Function", "zolpidem", 1.5),
                // Pharmacodynamic / transporter markers
                rule("HTR2A", "A/A", "sertraline", 0.7),
                rule("SLC6A4", "S/S", "sertraline", 0.7),
                rule("COMT", "Val/Val", "bupropion", 0.8),
            ],
            clinical_comments: vec![
                // Antipsychotics
                comment(
                    "CYP2D6",
                    "Poor Metabolizer",
                    "risperidone",
                    "CYP2D6 Poor Metabolizer status reduces risperidone clearance, causing the \
                     drug to accumulate in the bloodstream. This increases the risk of \
                     extrapyramidal side effects (EPS), sedation, and toxicity. Consider \
                     lowering the dose or switching to a medication less dependent on CYP2D6 \
                     metabolism. [CPIC]",
                ),
                comment(
                    "CYP2D6",
                    "Poor Metabolizer",
                    "aripiprazole",
                    "Poor CYP2D6 metabolism slows aripiprazole clearance, raising blood \
                     concentrations and increasing risk of side effects such as akathisia, \
                     sedation, and QT prolongation. A dose reduction or alternative therapy \
                     may be appropriate.",
                ),
                comment(
                    "CYP2D6",
                    "Poor Metabolizer",
                    "haloperidol",
                    "Reduced CYP2D6 function decreases haloperidol metabolism, which can lead \
                     to higher blood levels and increased risk of EPS, neurotoxicity, or \
                     cardiac adverse events. Careful monitoring or dose adjustment is \
                     recommended.",
                ),
                comment(
                    "CYP3A4",
                    "Decreased Function",
                    "quetiapine",
                    "Quetiapine is primarily metabolized by CYP3A4. Decreased function can \
                     lead to elevated quetiapine concentrations, increasing sedation, \
                     orthostatic hypotension, and risk of toxicity. Dose reduction may be \
                     needed.",
                ),
                comment(
                    "CYP3A4",
                    "Intermediate Metabolizer",
                    "quetiapine",
                    "Intermediate CYP3A4 function modestly raises quetiapine exposure, most \
                     often from a concurrent moderate inhibitor. Monitor for sedation and \
                     orthostasis.",
                ),
                comment(
                    "CYP3A5",
                    "Normal Metabolizer",
                    "quetiapine",
                    "CYP3A5 expressers clear quetiapine more quickly, which can lower trough \
                     concentrations and reduce efficacy. Assess response and consider dose or \
                     agent adjustment.",
                ),
                comment(
                    "CYP1A2",
                    "Ultra-rapid Metabolizer",
                    "olanzapine",
                    "Ultra-rapid CYP1A2 metabolism increases olanzapine clearance, potentially \
                     resulting in subtherapeutic levels and decreased efficacy, especially in \
                     smokers. Consider higher doses or alternate agents.",
                ),
                comment(
                    "CYP1A2",
                    "Poor Metabolizer",
                    "olanzapine",
                    "Poor CYP1A2 metabolism raises olanzapine concentrations, increasing \
                     sedation and metabolic side effects. A lower dose may be sufficient.",
                ),
                comment(
                    "CYP1A2",
                    "Ultra-rapid Metabolizer",
                    "clozapine",
                    "Ultra-rapid metabolism leads to low clozapine levels, risking therapeutic \
                     failure. Monitor response and consider dose adjustment.",
                ),
                comment(
                    "CYP1A2",
                    "Poor Metabolizer",
                    "clozapine",
                    "Reduced CYP1A2 activity raises clozapine levels, increasing the risk of \
                     sedation, seizures, and cardiometabolic adverse effects. Level monitoring \
                     and dose adjustment recommended.",
                ),
                // SSRIs / SNRIs
                comment(
                    "CYP2C19",
                    "Ultra-rapid Metabolizer",
                    "citalopram",
                    "CYP2C19 ultra-rapid metabolism clears citalopram more quickly, which can \
                     result in subtherapeutic plasma concentrations and poor antidepressant \
                     response. Consider an SSRI less affected by CYP2C19 or increase the dose \
                     if clinically appropriate.",
                ),
                comment(
                    "CYP2C19",
                    "Poor Metabolizer",
                    "citalopram",
                    "Poor CYP2C19 metabolism raises citalopram levels, increasing the risk of \
                     QT prolongation and other side effects. Dose reduction or close \
                     monitoring is recommended.",
                ),
                comment(
                    "CYP2C19",
                    "Ultra-rapid Metabolizer",
                    "escitalopram",
                    "Faster metabolism of escitalopram may cause lower drug levels and reduced \
                     antidepressant effect. Monitor for lack of response.",
                ),
                comment(
                    "CYP2C19",
                    "Poor Metabolizer",
                    "escitalopram",
                    "Reduced metabolism raises escitalopram blood levels, increasing the risk \
                     of side effects, including QT prolongation. Consider lower doses or more \
                     frequent monitoring.",
                ),
                comment(
                    "CYP2D6",
                    "Poor Metabolizer",
                    "paroxetine",
                    "CYP2D6 Poor Metabolizer status leads to slow paroxetine clearance, \
                     resulting in drug accumulation and a higher risk of anticholinergic \
                     effects, sedation, and sexual dysfunction. Dose reduction or switching \
                     medications may be needed.",
                ),
                comment(
                    "CYP2D6",
                    "Poor Metabolizer",
                    "fluoxetine",
                    "Reduced CYP2D6 activity increases fluoxetine levels, elevating risk of \
                     side effects such as insomnia, GI upset, and serotonin syndrome. Monitor \
                     and consider dose reduction.",
                ),
                comment(
                    "CYP2D6",
                    "Poor Metabolizer",
                    "venlafaxine",
                    "Venlafaxine is metabolized to its active metabolite by CYP2D6. Poor \
                     metabolism may cause higher venlafaxine and lower active metabolite \
                     levels, leading to reduced efficacy and increased side effects. Adjust \
                     therapy as needed.",
                ),
                comment(
                    "CYP2D6",
                    "Poor Metabolizer",
                    "duloxetine",
                    "Slow CYP2D6 metabolism raises duloxetine concentrations, increasing the \
                     risk of side effects such as nausea, hypertension, and liver toxicity. \
                     Lower doses or alternative therapy may be appropriate.",
                ),
                // Mood stabilizers / other psych
                comment(
                    "CYP2C19",
                    "Poor Metabolizer",
                    "lamotrigine",
                    "Poor CYP2C19 metabolism may result in higher lamotrigine levels, which \
                     can increase the risk of rash and other adverse effects. Monitor \
                     closely.",
                ),
                comment(
                    "UGT1A4",
                    "Decreased Function",
                    "lamotrigine",
                    "Decreased UGT1A4 activity reduces lamotrigine glucuronidation, raising \
                     serum levels and the risk of rash and CNS side effects. Slower titration \
                     or dose reduction may be appropriate.",
                ),
                comment(
                    "CYP2C9",
                    "Poor Metabolizer",
                    "valproate",
                    "Valproate clearance is reduced in CYP2C9 poor metabolizers, raising blood \
                     levels and risk of toxicity, including liver damage and \
                     thrombocytopenia. Dose adjustment and monitoring recommended.",
                ),
                comment(
                    "HLA-B*15:02",
                    "Positive",
                    "carbamazepine",
                    "HLA-B*15:02 carriers have a markedly increased risk of \
                     carbamazepine-induced Stevens-Johnson syndrome and toxic epidermal \
                     necrolysis. Carbamazepine should generally be avoided; select an \
                     alternative mood stabilizer. [CPIC]",
                ),
                comment(
                    "HLA-A*31:01",
                    "Positive",
                    "carbamazepine",
                    "HLA-A*31:01 carriage increases the risk of carbamazepine \
                     hypersensitivity reactions ranging from maculopapular rash to DRESS and \
                     SJS/TEN. Weigh alternatives or monitor closely for rash.",
                ),
                comment(
                    "CYP2C19",
                    "Ultra-rapid Metabolizer",
                    "clobazam",
                    "Faster metabolism may result in lower clobazam levels, possibly reducing \
                     efficacy in seizure control or anxiety treatment.",
                ),
                comment(
                    "CYP2B6",
                    "Poor Metabolizer",
                    "bupropion",
                    "Reduced CYP2B6 activity slows conversion of bupropion to \
                     hydroxybupropion, raising parent drug levels and the risk of agitation, \
                     insomnia, and seizures at higher doses. Consider a lower dose or \
                     alternative agent.",
                ),
                // Anxiety / sleep
                comment(
                    "CYP3A4",
                    "Decreased Function",
                    "alprazolam",
                    "Decreased CYP3A4 activity leads to slower alprazolam metabolism, \
                     increasing sedation, confusion, and fall risk, especially in older \
                     adults.",
                ),
                comment(
                    "CYP3A4",
                    "Intermediate Metabolizer",
                    "alprazolam",
                    "Intermediate CYP3A4 function slows alprazolam clearance somewhat, \
                     increasing sedation and fall risk in susceptible patients.",
                ),
                comment(
                    "CYP2C19",
                    "Poor Metabolizer",
                    "diazepam",
                    "Poor metabolism of diazepam leads to drug accumulation, prolonging \
                     sedation and increasing risk of adverse effects.",
                ),
                comment(
                    "CYP3A4",
                    "Decreased Function",
                    "zolpidem",
                    "Zolpidem is cleared by CYP3A4. Decreased function can result in \
                     prolonged sedation and next-day drowsiness. Lower doses or alternate \
                     sleep aids may be needed.",
                ),
                // Transporter / pharmacodynamic markers
                comment(
                    "HTR2A",
                    "A/A",
                    "sertraline",
                    "HTR2A A/A genotype may reduce SSRI efficacy, possibly requiring dose \
                     escalation or alternative antidepressants.",
                ),
                comment(
                    "SLC6A4",
                    "S/S",
                    "sertraline",
                    "S/S genotype of SLC6A4 (5-HTTLPR) is associated with poorer SSRI \
                     tolerance and reduced likelihood of response. Consider alternative \
                     therapy if ineffective or poorly tolerated.",
                ),
                comment(
                    "COMT",
                    "Val/Val",
                    "bupropion",
                    "COMT Val/Val may increase dopamine breakdown, possibly reducing \
                     bupropion efficacy in treating depression or ADHD. Clinical significance \
                     varies.",
                ),
            ],
            flowsheet_prompts: vec![
                // Antipsychotics
                prompts(
                    "CYP2D6",
                    "Poor Metabolizer",
                    "risperidone",
                    &["Monitor for tremor", "Assess for EPS", "Check for sedation"],
                ),
                prompts(
                    "CYP2D6",
                    "Poor Metabolizer",
                    "aripiprazole",
                    &["Monitor for akathisia", "Check for restlessness"],
                ),
                prompts(
                    "CYP2D6",
                    "Poor Metabolizer",
                    "haloperidol",
                    &["Assess for rigidity", "Monitor for neurotoxicity"],
                ),
                prompts(
                    "CYP3A4",
                    "Decreased Function",
                    "quetiapine",
                    &["Check for sedation", "Monitor blood pressure (orthostasis)"],
                ),
                prompts(
                    "CYP3A4",
                    "Intermediate Metabolizer",
                    "quetiapine",
                    &["Check for sedation"],
                ),
                prompts(
                    "CYP3A5",
                    "Normal Metabolizer",
                    "quetiapine",
                    &["Assess for decreased efficacy", "Review sleep quality"],
                ),
                prompts(
                    "CYP1A2",
                    "Ultra-rapid Metabolizer",
                    "olanzapine",
                    &["Assess for decreased efficacy", "Monitor weight/appetite"],
                ),
                prompts(
                    "CYP1A2",
                    "Poor Metabolizer",
                    "olanzapine",
                    &["Monitor weight/appetite", "Check morning sedation"],
                ),
                prompts(
                    "CYP1A2",
                    "Poor Metabolizer",
                    "clozapine",
                    &["Monitor clozapine level", "Assess sedation and drooling"],
                ),
                // SSRIs / SNRIs
                prompts(
                    "CYP2C19",
                    "Ultra-rapid Metabolizer",
                    "citalopram",
                    &["Assess for lack of effect", "Monitor mood symptoms"],
                ),
                prompts(
                    "CYP2C19",
                    "Poor Metabolizer",
                    "citalopram",
                    &["Monitor for QT prolongation", "Check for GI upset"],
                ),
                prompts(
                    "CYP2C19",
                    "Poor Metabolizer",
                    "escitalopram",
                    &["Monitor for QT prolongation"],
                ),
                prompts(
                    "CYP2D6",
                    "Poor Metabolizer",
                    "paroxetine",
                    &["Assess for anticholinergic effects", "Monitor for sedation"],
                ),
                prompts(
                    "CYP2D6",
                    "Poor Metabolizer",
                    "fluoxetine",
                    &["Check for insomnia", "Monitor for GI side effects"],
                ),
                prompts(
                    "CYP2D6",
                    "Poor Metabolizer",
                    "venlafaxine",
                    &["Monitor blood pressure", "Assess for serotonin syndrome"],
                ),
                prompts(
                    "CYP2D6",
                    "Poor Metabolizer",
                    "duloxetine",
                    &["Monitor LFTs", "Check blood pressure"],
                ),
                // Mood stabilizers
                prompts(
                    "CYP2C19",
                    "Poor Metabolizer",
                    "lamotrigine",
                    &["Monitor for rash", "Assess for dizziness"],
                ),
                prompts(
                    "UGT1A4",
                    "Decreased Function",
                    "lamotrigine",
                    &["Monitor for rash", "Review titration schedule"],
                ),
                prompts(
                    "CYP2C9",
                    "Poor Metabolizer",
                    "valproate",
                    &["Monitor LFTs", "Check for thrombocytopenia"],
                ),
                prompts(
                    "HLA-B*15:02",
                    "Positive",
                    "carbamazepine",
                    &["Inspect skin each shift", "Educate on rash warning signs"],
                ),
                prompts(
                    "HLA-A*31:01",
                    "Positive",
                    "carbamazepine",
                    &["Inspect skin each shift", "Review for fever or lymphadenopathy"],
                ),
                // Other psych
                prompts(
                    "CYP2B6",
                    "Poor Metabolizer",
                    "bupropion",
                    &["Monitor for agitation/insomnia", "Assess seizure risk factors"],
                ),
                // Anxiolytics / sleep
                prompts(
                    "CYP3A4",
                    "Decreased Function",
                    "alprazolam",
                    &["Monitor for sedation", "Assess fall risk"],
                ),
                prompts("CYP3A4", "Intermediate Metabolizer", "alprazolam", &["Assess fall risk"]),
                prompts(
                    "CYP2C19",
                    "Poor Metabolizer",
                    "diazepam",
                    &["Check for prolonged sedation", "Assess confusion"],
                ),
                prompts(
                    "CYP3A4",
                    "Decreased Function",
                    "zolpidem",
                    &["Monitor for next-day drowsiness"],
                ),
                // Pharmacodynamic / transporter markers
                prompts("HTR2A", "A/A", "sertraline", &["Monitor for lack of SSRI effect"]),
                prompts("SLC6A4", "S/S", "sertraline", &["Assess for SSRI intolerance"]),
                prompts(
                    "COMT",
                    "Val/Val",
                    "bupropion",
                    &["Monitor for low response", "Check for irritability"],
                ),
            ],
            prior_risks: vec![
                prior("risperidone", 0.1),
                prior("aripiprazole", 0.07),
                prior("haloperidol", 0.12),
                prior("quetiapine", 0.07),
                prior("olanzapine", 0.05),
                prior("clozapine", 0.04),
                prior("ziprasidone", 0.06),
                prior("citalopram", 0.08),
                prior("escitalopram", 0.07),
                prior("paroxetine", 0.09),
                prior("fluoxetine", 0.06),
                prior("fluvoxamine", 0.06),
                prior("sertraline", 0.05),
                prior("venlafaxine", 0.09),
                prior("duloxetine", 0.06),
                prior("lamotrigine", 0.03),
                prior("carbamazepine", 0.08),
                prior("valproate", 0.1),
                prior("clobazam", 0.03),
                prior("alprazolam", 0.05),
                prior("diazepam", 0.04),
                prior("lorazepam", 0.04),
                prior("clonazepam", 0.04),
                prior("zolpidem", 0.03),
                prior("buspirone", 0.02),
                prior("bupropion", 0.05),
            ],
        }
    }
}

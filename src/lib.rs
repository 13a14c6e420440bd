//! Rules-based pharmacogenomic decision support for behavioral-health
//! medication management.
//!
//! Feed `CdsEngine::evaluate` a pasted lab report, the active medication
//! list, and an observed symptom; get back a structured `CdsReport` with
//! scored drug-gene recommendations, phenoconversion audit lines,
//! polypharmacy warnings, flowsheet prompts, and a copy-to-chart note.
//! All reference data is injected as an immutable `KnowledgeBase`, either
//! the compiled-in dataset or one loaded from JSON.

pub mod types; // shared value types, error enum, report shape
pub mod reference; // knowledge base tables and lookups
pub mod normalize; // medication name resolution
pub mod extract; // gene observation extraction from report text
pub mod messages; // every emitted sentence
pub mod phenoconvert; // inhibitor/inducer phenotype adjustment
pub mod scoring; // drug-gene risk rules
pub mod detection; // enzyme and class polypharmacy lenses
pub mod engine; // pipeline orchestration

pub use engine::CdsEngine;
pub use reference::KnowledgeBase;
pub use types::{CdsError, CdsReport, CdsRequest, ObservedSymptom};

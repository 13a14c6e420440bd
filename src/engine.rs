//! The evaluation pipeline.
//!
//! One call, five stages: normalize the medication list, extract gene
//! observations from the report text, phenoconvert, score drug-gene pairs,
//! run both polypharmacy detectors. Evaluation is infallible; an empty or
//! unrecognized request produces a quiet report, not an error.

use std::collections::HashSet;
use std::time::Instant;

use uuid::Uuid;

use crate::detection::{detect_class_polypharmacy, detect_enzyme_polypharmacy};
use crate::extract::extract_gene_observations;
use crate::normalize::resolve_selection;
use crate::phenoconvert::phenoconvert;
use crate::reference::KnowledgeBase;
use crate::scoring::score_interactions;
use crate::types::{CdsReport, CdsRequest, ReportSummary};

/// Stateless evaluation engine over an injected knowledge base. Construct
/// once, share by reference; `evaluate` never mutates.
pub struct CdsEngine {
    reference: KnowledgeBase,
}

impl CdsEngine {
    pub fn new(reference: KnowledgeBase) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> &KnowledgeBase {
        &self.reference
    }

    /// Run the full pipeline for one patient context.
    pub fn evaluate(&self, request: &CdsRequest) -> CdsReport {
        let start = Instant::now();
        let kb = &self.reference;

        let medications = resolve_selection(&request.medications, kb);
        let observations = extract_gene_observations(&request.report_text, kb);
        let conversion = phenoconvert(&observations, &medications, kb);
        let mut scoring =
            score_interactions(&conversion.states, &medications, request.symptom, kb);
        let enzyme_warnings = detect_enzyme_polypharmacy(&scoring.enzyme_groups, kb);
        let class_warnings = detect_class_polypharmacy(&medications, kb);

        tracing::debug!(
            observations = observations.len(),
            reported = observations.iter().filter(|o| o.is_reported()).count(),
            active = medications.len(),
            adjustments = conversion.log.len(),
            "pipeline stages complete"
        );

        // Highest risk first; the sort is stable so ties keep generation
        // order.
        scoring
            .recommendations
            .sort_by(|a, b| b.risk.total_cmp(&a.risk));

        let summary = ReportSummary {
            high_risk_count: scoring
                .recommendations
                .iter()
                .filter(|r| r.is_high_risk())
                .count(),
            polypharmacy_alert_count: enzyme_warnings.len() + class_warnings.len(),
            // Distinct reported (gene, phenotype) pairs, counted before
            // states collapse to one entry per gene.
            markers_detected: observations
                .iter()
                .filter(|o| o.is_reported())
                .map(|o| (o.gene.as_str(), o.phenotype.as_str()))
                .collect::<HashSet<_>>()
                .len(),
        };

        let processing_time_ms = start.elapsed().as_millis() as u64;
        let report_id = Uuid::new_v4();

        tracing::info!(
            report_id = %report_id,
            recommendations = scoring.recommendations.len(),
            high_risk = summary.high_risk_count,
            polypharmacy = summary.polypharmacy_alert_count,
            markers = summary.markers_detected,
            processing_ms = processing_time_ms,
            "CDS evaluation complete"
        );

        CdsReport {
            report_id,
            generated_at: chrono::Local::now().naive_local(),
            observations,
            gene_states: conversion.states,
            medications,
            symptom: request.symptom,
            recommendations: scoring.recommendations,
            enzyme_warnings,
            class_warnings,
            flowsheet_prompts: scoring.flowsheet_prompts,
            phenoconversion_log: conversion.log,
            smart_note: scoring.smart_note,
            summary,
            processing_time_ms,
        }
    }
}

//! The sequential belief updater: one mutable `DiseaseState` per disease,
//! refined one answer at a time.
//!
//! Construction seeds every state from an initial scoring pass, so there is
//! no "uninitialized" phase to guard at runtime — an updater that exists is
//! active. From then on `apply_answer` is the only mutation path, and
//! `current_candidates` is a pure read that projects the live state into a
//! fresh ranked snapshot.
//!
//! Calls must be serialized per session (the methods take `&mut self` /
//! `&self` accordingly); the catalog itself is shared read-only across
//! sessions, belief state never is.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use tracing::{debug, warn};

use dxrank_contracts::{
    candidate::{CandidateDiagnosis, ChannelEvidence, UpdateDelta},
    error::{DxrankError, DxrankResult},
    observation::{AnswerSummary, Observation, Polarity},
    profile::DiseaseProfile,
    session::SessionId,
};
use dxrank_evidence::{
    combined_likelihood, disease_seed, normalized_confidence, BetaParams, W_RISK, W_SYMPTOMS,
};

use crate::scorer::{normalize_and_rank, raw_candidate, McConfig};
use crate::traits::AnswerParser;

/// Mutable evidence counters for one disease within one session.
///
/// Invariants: both channels' alpha and beta never drop below the uniform
/// prior floor of 1.0, and alpha+beta never decreases — evidence only
/// accumulates.
#[derive(Debug, Clone)]
pub struct DiseaseState {
    /// Symptom-channel Beta posterior.
    pub sym: BetaParams,
    /// Risk-factor-channel Beta posterior.
    pub rf: BetaParams,
    /// Base prevalence, copied from the profile. Constant.
    pub prior: f64,
    /// Discrete non-skip observations applied (symptoms + risk factors).
    /// Includes `unsure` answers: inconclusive inquiry is still inquiry.
    pub evidence_n: usize,
    /// Symptom phrases with a directional determination so far.
    pub sym_observed: usize,
    /// Risk-factor phrases with a directional determination so far.
    pub rf_observed: usize,
    /// The disease's symptom phrases. Read-only; used for observation
    /// routing here and by external question selection.
    pub sym_profile: HashSet<String>,
    /// The disease's risk-factor phrases. Read-only.
    pub rf_profile: HashSet<String>,
}

enum Channel {
    Symptoms,
    RiskFactors,
}

/// Owns the evolving per-disease belief state for one diagnostic session.
pub struct SequentialUpdater {
    session_id: SessionId,
    started_at: DateTime<Utc>,
    states: IndexMap<String, DiseaseState>,
    parser: Box<dyn AnswerParser>,
    mc: McConfig,
}

impl SequentialUpdater {
    /// Seed a new session from an initial scoring pass.
    ///
    /// Each candidate's per-channel state starts at
    /// `alpha = effective_match + 1`, `beta = max(observed − match, 0) + 1`
    /// — the active-evidence counts, so phrases never asked about carry no
    /// weight into the interview.
    ///
    /// # Errors
    ///
    /// `InvalidState` when `initial_candidates` is empty or a candidate
    /// has no matching profile — both are caller wiring mistakes that must
    /// surface, not runtime conditions to hide.
    pub fn new(
        initial_candidates: &[CandidateDiagnosis],
        profiles: &[DiseaseProfile],
        parser: Box<dyn AnswerParser>,
    ) -> DxrankResult<Self> {
        if initial_candidates.is_empty() {
            return Err(DxrankError::InvalidState {
                reason: "updater constructed with zero candidates; run an initial scoring pass first"
                    .to_string(),
            });
        }

        let by_name: HashMap<&str, &DiseaseProfile> =
            profiles.iter().map(|p| (p.name.as_str(), p)).collect();

        let mut states = IndexMap::with_capacity(initial_candidates.len());
        for candidate in initial_candidates {
            let profile =
                by_name
                    .get(candidate.disease.as_str())
                    .ok_or_else(|| DxrankError::InvalidState {
                        reason: format!(
                            "candidate '{}' has no matching disease profile",
                            candidate.disease
                        ),
                    })?;

            states.insert(
                candidate.disease.clone(),
                DiseaseState {
                    sym: BetaParams::from_observed(
                        candidate.symptoms.effective_match,
                        candidate.symptoms.observed,
                    ),
                    rf: BetaParams::from_observed(
                        candidate.risk_factors.effective_match,
                        candidate.risk_factors.observed,
                    ),
                    prior: candidate.prior,
                    evidence_n: candidate.evidence_n,
                    sym_observed: candidate.symptoms.observed,
                    rf_observed: candidate.risk_factors.observed,
                    sym_profile: profile.symptoms.iter().cloned().collect(),
                    rf_profile: profile.risk_factors.iter().cloned().collect(),
                },
            );
        }

        Ok(Self {
            session_id: SessionId::new(),
            started_at: Utc::now(),
            states,
            parser,
            mc: McConfig::default(),
        })
    }

    /// Override the Monte Carlo sample count and seed (tests, calibration).
    pub fn with_sampling(mut self, samples: usize, seed: u64) -> Self {
        self.mc = McConfig { samples, seed };
        self
    }

    /// This session's unique identifier.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// When this session was seeded.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Number of diseases tracked by this session.
    pub fn disease_count(&self) -> usize {
        self.states.len()
    }

    /// Read-only view of one disease's live state.
    pub fn state(&self, disease: &str) -> Option<&DiseaseState> {
        self.states.get(disease)
    }

    /// Parse one answer and fold its observations into the belief state.
    ///
    /// `target` is the phrase the question asked about, if any; the parser
    /// may additionally surface incidentally mentioned phrases, each of
    /// which updates every disease whose profile contains it — one free-text
    /// sentence can move several diseases at once.
    ///
    /// Per observation, for each disease whose profile contains the phrase:
    ///
    /// - `yes`    → `alpha += strength`
    /// - `no`     → `beta += strength`
    /// - `mild`   → `alpha += 0.5·strength`
    /// - `unsure` → counters untouched, but `evidence_n` still increments
    /// - `skip`   → no state change at all
    ///
    /// Returns the parse summary plus a delta log with true before/after
    /// movements in `probability_raw` and `confidence` per affected
    /// disease. A phrase found in no profile updates nothing and yields an
    /// empty log; a parser failure is logged and degraded to an empty
    /// observation list.
    pub fn apply_answer(
        &mut self,
        target: Option<&str>,
        raw: &str,
    ) -> DxrankResult<(AnswerSummary, Vec<UpdateDelta>)> {
        let summary = self.parse_answer(target, raw);

        let actionable: Vec<&Observation> = summary
            .observations
            .iter()
            .filter(|o| o.polarity != Polarity::Skip)
            .collect();
        if actionable.is_empty() {
            return Ok((summary, Vec::new()));
        }

        let before = self.snapshot()?;

        // Extras collected per affected disease, in state order.
        let mut affected: IndexMap<String, Vec<String>> = IndexMap::new();

        for obs in &actionable {
            for (name, state) in self.states.iter_mut() {
                let channel = if state.sym_profile.contains(&obs.phrase) {
                    Channel::Symptoms
                } else if state.rf_profile.contains(&obs.phrase) {
                    Channel::RiskFactors
                } else {
                    continue;
                };

                let (params, observed) = match channel {
                    Channel::Symptoms => (&mut state.sym, &mut state.sym_observed),
                    Channel::RiskFactors => (&mut state.rf, &mut state.rf_observed),
                };

                match obs.polarity {
                    Polarity::Yes => {
                        params.add_successes(obs.strength);
                        *observed += 1;
                    }
                    Polarity::No => {
                        params.add_failures(obs.strength);
                        *observed += 1;
                    }
                    Polarity::Mild => {
                        params.add_successes(0.5 * obs.strength);
                        *observed += 1;
                    }
                    // Inconclusive inquiry: volume without direction.
                    Polarity::Unsure => {}
                    Polarity::Skip => unreachable!("skip observations are filtered above"),
                }
                state.evidence_n += 1;

                let extras = affected.entry(name.clone()).or_default();
                if target != Some(obs.phrase.as_str()) {
                    extras.push(obs.phrase.clone());
                }
            }
        }

        if affected.is_empty() {
            debug!(answer = %raw, "no tracked disease mentions any observed phrase");
            return Ok((summary, Vec::new()));
        }

        let after = self.snapshot()?;

        let mut deltas = Vec::with_capacity(affected.len());
        for (disease, extras) in affected {
            let (raw_before, conf_before) = before[&disease];
            let (raw_after, conf_after) = after[&disease];
            let state = &self.states[&disease];
            let in_profile = target
                .map(|t| state.sym_profile.contains(t) || state.rf_profile.contains(t))
                .unwrap_or(false);
            deltas.push(UpdateDelta {
                disease,
                delta_prob_raw: raw_after - raw_before,
                delta_conf: conf_after - conf_before,
                in_profile,
                extras,
            });
        }

        debug!(
            session = %self.session_id.0,
            observations = actionable.len(),
            diseases_moved = deltas.len(),
            "answer applied"
        );
        Ok((summary, deltas))
    }

    /// Rebuild the ranked candidate list from the live belief state.
    ///
    /// Pure read: re-runs the Beta-posterior sampling and cross-disease
    /// normalization over the current alpha/beta values, sorts, truncates.
    /// Never mutates `DiseaseState`.
    ///
    /// # Errors
    ///
    /// `InvalidState` if the updater tracks zero diseases.
    pub fn current_candidates(&self, top_k: usize) -> DxrankResult<Vec<CandidateDiagnosis>> {
        if self.states.is_empty() {
            return Err(DxrankError::InvalidState {
                reason: "updater tracks zero diseases".to_string(),
            });
        }
        let mut candidates = self.evaluate_all()?;
        candidates.truncate(top_k);
        Ok(candidates)
    }

    // ── Internals ────────────────────────────────────────────────────────────

    fn parse_answer(&self, target: Option<&str>, raw: &str) -> AnswerSummary {
        match self.parser.parse(target, raw) {
            Ok(observations) => {
                let extra_phrases: Vec<String> = observations
                    .iter()
                    .filter(|o| target != Some(o.phrase.as_str()))
                    .map(|o| o.phrase.clone())
                    .collect();
                let explanation = describe(&observations, &extra_phrases);
                AnswerSummary {
                    raw: raw.to_string(),
                    observations,
                    extra_phrases,
                    explanation,
                }
            }
            Err(e) => {
                // Parser failure degrades to "nothing parsed": reduced
                // confidence, keep going.
                warn!(error = %e, "answer parser failed; applying no evidence");
                AnswerSummary {
                    raw: raw.to_string(),
                    observations: Vec::new(),
                    extra_phrases: Vec::new(),
                    explanation: format!("answer parser failed ({}); no evidence applied", e),
                }
            }
        }
    }

    /// Per-disease `(probability_raw, confidence)` for the delta log.
    fn snapshot(&self) -> DxrankResult<HashMap<String, (f64, f64)>> {
        let mut map = HashMap::with_capacity(self.states.len());
        for (index, (name, state)) in self.states.iter().enumerate() {
            let summary = combined_likelihood(
                state.sym,
                state.rf,
                state.prior,
                self.mc.samples,
                disease_seed(self.mc.seed, index),
            )?;
            let confidence = normalized_confidence(state.sym, state.rf, W_SYMPTOMS, W_RISK);
            map.insert(name.clone(), (summary.mean, confidence));
        }
        Ok(map)
    }

    fn evaluate_all(&self) -> DxrankResult<Vec<CandidateDiagnosis>> {
        let mut candidates = Vec::with_capacity(self.states.len());
        for (index, (name, state)) in self.states.iter().enumerate() {
            let summary = combined_likelihood(
                state.sym,
                state.rf,
                state.prior,
                self.mc.samples,
                disease_seed(self.mc.seed, index),
            )?;
            let confidence = normalized_confidence(state.sym, state.rf, W_SYMPTOMS, W_RISK);

            // Pseudo-counts above the uniform floor are the accumulated
            // effective match/miss evidence for this channel.
            let symptoms = ChannelEvidence {
                effective_match: state.sym.alpha - 1.0,
                effective_miss: state.sym.beta - 1.0,
                observed: state.sym_observed,
                total: state.sym_profile.len(),
            };
            let risk_factors = ChannelEvidence {
                effective_match: state.rf.alpha - 1.0,
                effective_miss: state.rf.beta - 1.0,
                observed: state.rf_observed,
                total: state.rf_profile.len(),
            };

            candidates.push(raw_candidate(
                name,
                symptoms,
                risk_factors,
                state.prior,
                summary,
                confidence,
                state.evidence_n,
            ));
        }
        normalize_and_rank(&mut candidates);
        Ok(candidates)
    }
}

fn describe(observations: &[Observation], extras: &[String]) -> String {
    if observations.is_empty() {
        return "nothing parseable in the answer".to_string();
    }
    let parts: Vec<String> = observations
        .iter()
        .map(|o| {
            format!(
                "'{}' {:?} (strength {:.2})",
                o.phrase,
                o.polarity,
                o.strength
            )
        })
        .collect();
    let mut out = format!("parsed {}: {}", observations.len(), parts.join(", "));
    if !extras.is_empty() {
        out.push_str(&format!("; incidental mentions: {}", extras.join(", ")));
    }
    out
}

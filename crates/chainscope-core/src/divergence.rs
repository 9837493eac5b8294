// ── Qualifier divergence classifier ──
//
// Redirects and failovers are both expressed as alternate compound
// identifiers. Comparing a candidate against a base identifier, reversed
// segment by reversed segment, tells us *which* qualifier the alternate
// changes — and that classification drives how the entity is displayed
// (a "dc2" badge vs a "partition2" badge vs a subset chip).

use serde::{Deserialize, Serialize};
use strum::Display;

/// The qualifier positions of a reversed compound identifier, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Qualifier {
    Datacenter,
    Partition,
    Namespace,
    Service,
    Subset,
}

const QUALIFIER_ORDER: [Qualifier; 5] = [
    Qualifier::Datacenter,
    Qualifier::Partition,
    Qualifier::Namespace,
    Qualifier::Service,
    Qualifier::Subset,
];

/// Result of classifying one or more candidate identifiers against a base.
///
/// `targets` holds, per candidate in input order, the value of its first
/// diverging qualifier — or the full identifier when the candidate is
/// identical to the base. `qualifier` is `None` when nothing diverged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Divergence {
    pub qualifier: Option<Qualifier>,
    pub targets: Vec<String>,
}

/// Compare each candidate against `base` and report the diverging
/// qualifier plus the diverging values.
///
/// One `qualifier` slot is shared across all candidates: every diverging
/// candidate overwrites it, so a heterogeneous list reports the
/// last-computed kind. Failover lists observed in practice are homogeneous
/// (all alternate datacenters, or all alternate subsets), which keeps the
/// aggregate meaningful; the per-candidate values in `targets` are exact
/// either way.
pub fn classify_divergence<S: AsRef<str>>(candidates: &[S], base: &str) -> Divergence {
    let base_rev: Vec<&str> = base.split('.').rev().collect();

    let mut qualifier = None;
    let targets = candidates
        .iter()
        .map(|candidate| {
            let candidate = candidate.as_ref();
            for (i, segment) in candidate.split('.').rev().enumerate() {
                if base_rev.get(i).copied() != Some(segment) {
                    qualifier = QUALIFIER_ORDER.get(i).copied();
                    return segment.to_owned();
                }
            }
            // Identical to the base: no divergence to report.
            candidate.to_owned()
        })
        .collect();

    Divergence { qualifier, targets }
}

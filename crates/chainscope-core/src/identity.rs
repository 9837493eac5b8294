// ── Compound identifier codec ──
//
// Node and target identifiers are dot-joined qualifier chains:
// `service.namespace.partition.datacenter`, optionally led by a subset
// discriminator (`v2.web.default.default.dc1`). Service names may contain
// literal dots, so every operation here counts segments from the end of
// the split array, never the start.

use serde::{Deserialize, Serialize};

/// A raw resolver-node name decomposed into its service identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceIdentity {
    /// The bare service name, qualifiers stripped. May contain dots.
    pub service: String,
    /// Subset discriminator, when the name carried one.
    pub subset: Option<String>,
}

/// Strip the qualifier segments from a resolver-node name.
///
/// Splits on `.` and reverses, so the tail qualifiers (datacenter,
/// partition, namespace) sit at known positions regardless of dots in the
/// service name. With more than four segments the original leading segment
/// is a subset discriminator.
pub fn split_qualifiers(name: &str) -> ServiceIdentity {
    let mut parts: Vec<&str> = name.split('.').collect();
    parts.reverse();

    // After the reverse the subset discriminator (the original leading
    // segment) sits at the end.
    let subset = if parts.len() > 4 {
        parts.pop().map(str::to_owned)
    } else {
        None
    };

    // Skip datacenter, partition, namespace; what remains is the service.
    let service = parts
        .get(3..)
        .unwrap_or(&[])
        .iter()
        .rev()
        .copied()
        .collect::<Vec<_>>()
        .join(".");

    ServiceIdentity { service, subset }
}

/// Display name for a splitter: the raw name minus its two trailing
/// qualifier segments. Splitter names never carry a subset discriminator,
/// so this keeps `service.namespace`.
pub fn splitter_display_name(raw_name: &str) -> String {
    let parts: Vec<&str> = raw_name.split('.').collect();
    let keep = parts.len().saturating_sub(2);
    parts.get(..keep).unwrap_or(&[]).join(".")
}

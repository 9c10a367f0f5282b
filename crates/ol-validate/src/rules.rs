//! Compatibility rules: per-component checks and per-net aggregation.

use ol_core::{BlockId, Phase};
use ol_diagram::model::{ConverterRating, LoadRating, Net, Rating};

use crate::finding::Finding;

/// A tolerance is a percentage; absent means exact match.
pub fn is_tolerance_valid(tolerance: Option<f64>) -> bool {
    match tolerance {
        None => true,
        Some(t) => (0.0..=100.0).contains(&t),
    }
}

/// Is `net_voltage` acceptable for a component requiring `required` volts?
///
/// An out-of-range tolerance always yields false: a broken tolerance
/// configuration must never let a voltage pass.
pub fn is_voltage_within_tolerance(
    net_voltage: f64,
    required: f64,
    tolerance_percent: Option<f64>,
) -> bool {
    let tolerance = tolerance_percent.unwrap_or(0.0);
    if !is_tolerance_valid(Some(tolerance)) {
        return false;
    }
    let delta = (net_voltage - required).abs();
    let allowed = required * (tolerance / 100.0);
    delta <= allowed
}

fn check_voltage(net: &Net, required: f64, findings: &mut Vec<Finding>) {
    if !is_tolerance_valid(net.tolerance) {
        findings.push(Finding::error(
            "Net tolerance must be within 0-100%",
            Some(net.id.as_str()),
        ));
        return;
    }
    if !is_voltage_within_tolerance(net.voltage, required, net.tolerance) {
        findings.push(Finding::error(
            format!(
                "Voltage mismatch: net={}V required={}V",
                net.voltage, required
            ),
            Some(net.id.as_str()),
        ));
    }
}

fn check_phase(net: &Net, required: Phase, findings: &mut Vec<Finding>) {
    if net.phase != required {
        findings.push(Finding::error(
            format!("Phase mismatch: net={} required={}", net.phase, required),
            Some(net.id.as_str()),
        ));
    }
}

/// Result of checking one block against the net it is attached to.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockCheck {
    pub findings: Vec<Finding>,
    /// Current the block draws from the net, when derivable. Absent means
    /// unknown, which is propagated, never treated as zero.
    pub derived_current: Option<f64>,
    /// True for a load whose current could not be derived at all.
    pub uncertain: bool,
}

fn check_load(block_id: &BlockId, rating: &LoadRating, net: &Net) -> BlockCheck {
    let mut findings = Vec::new();
    check_voltage(net, rating.v_in, &mut findings);
    check_phase(net, rating.phase, &mut findings);

    // current preferred over power when both are declared
    if let Some(i_in) = rating.i_in {
        if i_in <= 0.0 {
            findings.push(Finding::error(
                "I_in must be positive",
                Some(block_id.as_str()),
            ));
            return BlockCheck {
                findings,
                derived_current: None,
                uncertain: false,
            };
        }
        return BlockCheck {
            findings,
            derived_current: Some(i_in),
            uncertain: false,
        };
    }

    if let Some(p_in) = rating.p_in {
        if p_in <= 0.0 {
            findings.push(Finding::error(
                "P_in must be positive",
                Some(block_id.as_str()),
            ));
            return BlockCheck {
                findings,
                derived_current: None,
                uncertain: false,
            };
        }
        return BlockCheck {
            findings,
            derived_current: Some(p_in / rating.v_in),
            uncertain: false,
        };
    }

    findings.push(Finding::warn(
        "Load current undetermined (I_in and P_in missing)",
        Some(block_id.as_str()),
    ));
    BlockCheck {
        findings,
        derived_current: None,
        uncertain: true,
    }
}

fn check_converter(block_id: &BlockId, rating: &ConverterRating, net: &Net) -> BlockCheck {
    let mut findings = Vec::new();
    // only the input side faces this net; the output side feeds another net
    check_voltage(net, rating.input.v_in, &mut findings);
    check_phase(net, rating.input.phase, &mut findings);

    match rating.eta {
        None => findings.push(Finding::warn(
            "eta is missing; efficiency calculation skipped",
            Some(block_id.as_str()),
        )),
        Some(eta) if eta <= 0.0 || eta > 1.0 => findings.push(Finding::error(
            "eta must be within (0,1]",
            Some(block_id.as_str()),
        )),
        Some(_) => {}
    }

    // input-side current from declared or computed output power
    let out_power = rating.output.p_out_max.or_else(|| {
        rating
            .output
            .i_out_max
            .map(|i_out| i_out * rating.output.v_out)
    });
    let derived_current = match (rating.eta, out_power) {
        // derivation needs a usable divisor; the range finding above already
        // covers eta > 1
        (Some(eta), Some(power)) if eta > 0.0 => Some(power / eta / rating.input.v_in),
        _ => None,
    };

    BlockCheck {
        findings,
        derived_current,
        uncertain: false,
    }
}

/// Check one block against the net it is attached to.
///
/// Passive blocks are pass-through here: their constraint is capacity, which
/// is checked per net once all contributions are known.
pub fn check_block_on_net(block_id: &BlockId, rating: &Rating, net: &Net) -> BlockCheck {
    match rating {
        Rating::Passive(_) => BlockCheck {
            findings: Vec::new(),
            derived_current: None,
            uncertain: false,
        },
        Rating::Load(load) => check_load(block_id, load, net),
        Rating::Converter(converter) => check_converter(block_id, converter, net),
    }
}

/// A typed block attached to a net, as the validator sees it.
#[derive(Debug, Clone, Copy)]
pub struct RatedBlock<'a> {
    pub id: &'a BlockId,
    pub rating: &'a Rating,
}

/// Result of aggregating every block on one net.
#[derive(Debug, Clone, PartialEq)]
pub struct NetCheck {
    pub findings: Vec<Finding>,
    /// Sum of derivable current contributions. Unknown contributions count as
    /// zero here but are reported through `uncertain_loads`.
    pub total_current: f64,
    pub uncertain_loads: usize,
}

/// Aggregate all blocks on a net: sum contributions, then check every passive
/// block's capacity against the total.
///
/// Order-independent: iterating blocks in any order yields the same total and
/// the same finding set (summation is commutative, and no block's check
/// depends on another block).
pub fn check_net(blocks: &[RatedBlock<'_>], net: &Net) -> NetCheck {
    let mut findings = Vec::new();
    let mut total_current = 0.0;
    let mut uncertain_loads = 0;

    for block in blocks {
        let check = check_block_on_net(block.id, block.rating, net);
        findings.extend(check.findings);
        if check.uncertain {
            uncertain_loads += 1;
        }
        if let Some(current) = check.derived_current {
            total_current += current;
        }
    }

    // capacity is per breaker, not per net: several breakers may share a net
    for block in blocks {
        if let Rating::Passive(passive) = block.rating {
            if total_current > passive.i_max {
                findings.push(Finding::error(
                    format!(
                        "I_max exceeded: load={total_current:.2}A limit={}A",
                        passive.i_max
                    ),
                    Some(block.id.as_str()),
                ));
            }
        }
    }

    NetCheck {
        findings,
        total_current,
        uncertain_loads,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Exact match passes for every valid tolerance.
        #[test]
        fn reflexive_for_valid_tolerance(v in 1.0_f64..1000.0, tol in 0.0_f64..=100.0) {
            prop_assert!(is_voltage_within_tolerance(v, v, Some(tol)));
        }

        /// Acceptance is symmetric in the sign of the deviation.
        #[test]
        fn symmetric_in_deviation(
            required in 1.0_f64..1000.0,
            delta in 0.0_f64..500.0,
            tol in 0.0_f64..=100.0,
        ) {
            let up = is_voltage_within_tolerance(required + delta, required, Some(tol));
            let down = is_voltage_within_tolerance(required - delta, required, Some(tol));
            prop_assert_eq!(up, down);
        }

        /// An out-of-range tolerance fails closed regardless of voltages.
        #[test]
        fn invalid_tolerance_never_passes(
            net_v in 0.0_f64..1000.0,
            required in 0.0_f64..1000.0,
            tol in prop_oneof![(-1000.0_f64..0.0).prop_map(|t| t - 1e-9), 100.0_f64..2000.0],
        ) {
            prop_assume!(!(0.0..=100.0).contains(&tol));
            prop_assert!(!is_voltage_within_tolerance(net_v, required, Some(tol)));
        }
    }
}

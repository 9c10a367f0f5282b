//! Rating defaults and normalization.

use ol_core::Phase;

use crate::model::{
    BlockType, ConverterInput, ConverterOutput, ConverterRating, LoadRating, PassiveRating, Rating,
};

/// Default rating assigned when a block is first given a type.
pub fn default_rating(block_type: BlockType) -> Rating {
    match block_type {
        BlockType::Passive => Rating::Passive(PassiveRating {
            v_max: 250.0,
            i_max: 20.0,
            phase: Phase::Single,
        }),
        BlockType::Load => Rating::Load(LoadRating {
            v_in: 200.0,
            phase: Phase::Single,
            i_in: None,
            p_in: None,
        }),
        BlockType::Converter => Rating::Converter(converter_fallback()),
    }
}

fn converter_fallback() -> ConverterRating {
    ConverterRating {
        input: ConverterInput {
            v_in: 200.0,
            phase: Phase::Single,
            i_in_max: None,
            p_in_max: None,
        },
        output: ConverterOutput {
            v_out: 24.0,
            phase: Phase::Dc,
            i_out_max: None,
            p_out_max: None,
        },
        eta: None,
    }
}

/// A converter rating as it exists mid-edit: any field may still be blank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialConverterRating {
    pub v_in: Option<f64>,
    pub phase_in: Option<Phase>,
    pub i_in_max: Option<f64>,
    pub p_in_max: Option<f64>,
    pub v_out: Option<f64>,
    pub phase_out: Option<Phase>,
    pub i_out_max: Option<f64>,
    pub p_out_max: Option<f64>,
    pub eta: Option<f64>,
}

/// Fill a possibly-partial converter rating to a complete one.
///
/// Merges field-by-field against the fixed defaults (input 200 V single-phase,
/// output 24 V DC); fields the user already set are kept. Both sides come back
/// fully populated; optional limit fields stay optional.
pub fn ensure_converter_rating(partial: Option<&PartialConverterRating>) -> ConverterRating {
    let fallback = converter_fallback();
    let Some(partial) = partial else {
        return fallback;
    };
    ConverterRating {
        input: ConverterInput {
            v_in: partial.v_in.unwrap_or(fallback.input.v_in),
            phase: partial.phase_in.unwrap_or(fallback.input.phase),
            i_in_max: partial.i_in_max,
            p_in_max: partial.p_in_max,
        },
        output: ConverterOutput {
            v_out: partial.v_out.unwrap_or(fallback.output.v_out),
            phase: partial.phase_out.unwrap_or(fallback.output.phase),
            i_out_max: partial.i_out_max,
            p_out_max: partial.p_out_max,
        },
        eta: partial.eta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_rating_gets_defaults() {
        let rating = ensure_converter_rating(None);
        assert_eq!(rating.input.v_in, 200.0);
        assert_eq!(rating.input.phase, Phase::Single);
        assert_eq!(rating.output.v_out, 24.0);
        assert_eq!(rating.output.phase, Phase::Dc);
        assert_eq!(rating.eta, None);
        assert_eq!(rating.input.i_in_max, None);
        assert_eq!(rating.output.p_out_max, None);
    }

    #[test]
    fn present_fields_survive_merge() {
        let partial = PartialConverterRating {
            v_in: Some(400.0),
            p_out_max: Some(120.0),
            eta: Some(0.85),
            ..Default::default()
        };
        let rating = ensure_converter_rating(Some(&partial));
        assert_eq!(rating.input.v_in, 400.0);
        // untouched siblings fall back, they are not discarded wholesale
        assert_eq!(rating.input.phase, Phase::Single);
        assert_eq!(rating.output.v_out, 24.0);
        assert_eq!(rating.output.p_out_max, Some(120.0));
        assert_eq!(rating.eta, Some(0.85));
    }

    #[test]
    fn default_ratings_per_type() {
        match default_rating(BlockType::Passive) {
            Rating::Passive(r) => {
                assert_eq!(r.v_max, 250.0);
                assert_eq!(r.i_max, 20.0);
                assert_eq!(r.phase, Phase::Single);
            }
            other => panic!("expected passive, got {other:?}"),
        }
        match default_rating(BlockType::Load) {
            Rating::Load(r) => {
                assert_eq!(r.v_in, 200.0);
                assert_eq!(r.i_in, None);
            }
            other => panic!("expected load, got {other:?}"),
        }
        assert_eq!(
            default_rating(BlockType::Converter).block_type(),
            BlockType::Converter
        );
    }
}

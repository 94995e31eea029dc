use thiserror::Error;

pub type Result<T> = std::result::Result<T, PhraseError>;

/// Errors raised while building the grid or cutting a track into phrases
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhraseError {
    #[error("Resolution must be greater than zero")]
    ZeroResolution,

    #[error("Grid step must be greater than zero")]
    ZeroStep,

    #[error("Resolution {resolution} is not divisible by {divisor}; the grid step would be fractional")]
    FractionalGrid { resolution: u32, divisor: u32 },

    #[error("Track has no time signature events")]
    MissingTimeSignature,

    #[error("Time signature {numerator}/{denominator} does not map to a whole number of sixteenth steps")]
    UnsupportedSignature { numerator: u8, denominator: u8 },

    #[error("Time signature {label} at tick {start} spans {span} ticks, which is not a whole number of {bar_ticks}-tick bars")]
    UnevenSpan {
        label: String,
        start: u64,
        span: u64,
        bar_ticks: u64,
    },

    #[error("Time signature {label} has {steps_per_bar} steps per bar, which cannot be split into one 16-step chunk and a remainder")]
    LongBar { label: String, steps_per_bar: u32 },

    #[error("Time signature at tick {tick} comes after tick {previous} or past the end of track")]
    SignatureOrder { tick: u64, previous: u64 },

    #[error("Tick {tick} is not an instant of the quantization grid")]
    StepOutsideGrid { tick: u64 },
}

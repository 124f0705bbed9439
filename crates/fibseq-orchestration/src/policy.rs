//! Input bounds and the time/memory-risk policy.

use std::fmt;

use fibseq_core::options::EngineOptions;

/// Input rejected before any computation starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Quantity or position was zero or negative.
    #[error("please enter a positive number (got {value})")]
    NotPositive { value: i64 },

    /// Sequence quantity above the hard limit.
    #[error(
        "the quantity must be {limit} or less (got {quantity}); \
         larger runs would consume too much memory and time"
    )]
    QuantityTooLarge { quantity: u64, limit: u64 },

    /// Point position above the hard limit.
    #[error("the position must be {limit} or less for single number lookup (got {position})")]
    PositionTooLarge { position: u64, limit: u64 },
}

/// Advisory duration band for a sequence generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeEstimate {
    Seconds,
    TenToThirtySeconds,
    OneToThreeMinutes,
    ThreeToFiveMinutes,
    FiveToEightMinutes,
}

impl TimeEstimate {
    /// Estimate the generation time for `quantity` numbers.
    #[must_use]
    pub fn for_quantity(quantity: u64) -> Self {
        match quantity {
            0..=5_000 => Self::Seconds,
            5_001..=20_000 => Self::TenToThirtySeconds,
            20_001..=50_000 => Self::OneToThreeMinutes,
            50_001..=80_000 => Self::ThreeToFiveMinutes,
            _ => Self::FiveToEightMinutes,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Seconds => "a few seconds",
            Self::TenToThirtySeconds => "10-30 seconds",
            Self::OneToThreeMinutes => "1-3 minutes",
            Self::ThreeToFiveMinutes => "3-5 minutes",
            Self::FiveToEightMinutes => "5-8 minutes",
        }
    }
}

impl fmt::Display for TimeEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Verdict on a sequence request that passed the hard limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceCheck {
    /// Start right away.
    Proceed(u64),
    /// Start only after the user confirms.
    NeedsConfirmation { quantity: u64, estimate: TimeEstimate },
}

impl SequenceCheck {
    /// The validated quantity.
    #[must_use]
    pub fn quantity(self) -> u64 {
        match self {
            Self::Proceed(quantity) | Self::NeedsConfirmation { quantity, .. } => quantity,
        }
    }
}

/// Bounds policy derived from the engine options.
#[derive(Debug, Clone)]
pub struct BoundsPolicy {
    max_quantity: u64,
    confirmation_threshold: u64,
    max_position: u64,
}

impl BoundsPolicy {
    #[must_use]
    pub fn new(options: &EngineOptions) -> Self {
        Self {
            max_quantity: options.max_quantity,
            confirmation_threshold: options.confirmation_threshold,
            max_position: options.max_position,
        }
    }

    /// Validate a sequence quantity.
    pub fn check_quantity(&self, quantity: i64) -> Result<SequenceCheck, ValidationError> {
        let quantity = positive(quantity)?;
        if quantity > self.max_quantity {
            return Err(ValidationError::QuantityTooLarge {
                quantity,
                limit: self.max_quantity,
            });
        }
        if quantity > self.confirmation_threshold {
            return Ok(SequenceCheck::NeedsConfirmation {
                quantity,
                estimate: TimeEstimate::for_quantity(quantity),
            });
        }
        Ok(SequenceCheck::Proceed(quantity))
    }

    /// Validate a point query position.
    pub fn check_position(&self, position: i64) -> Result<u64, ValidationError> {
        let position = positive(position)?;
        if position > self.max_position {
            return Err(ValidationError::PositionTooLarge {
                position,
                limit: self.max_position,
            });
        }
        Ok(position)
    }
}

impl Default for BoundsPolicy {
    fn default() -> Self {
        Self::new(&EngineOptions::default())
    }
}

fn positive(value: i64) -> Result<u64, ValidationError> {
    match u64::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(ValidationError::NotPositive { value }),
    }
}

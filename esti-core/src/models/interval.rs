use bigdecimal::{BigDecimal, One, RoundingMode, Signed};

/// A team's guessed range for one question
///
/// Estimathon answers span many orders of magnitude, so bounds are
/// arbitrary-precision decimals rather than floats: all comparisons and the
/// tie-break division are exact. A valid interval has two strictly positive
/// bounds with `lower <= upper`. The fields are private so that every value
/// of this type went through validation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "IntervalDto", into = "IntervalDto")
)]
pub struct Interval {
    lower: BigDecimal,
    upper: BigDecimal,
}

impl Interval {
    /// Creates a new interval from two bounds, validating all constraints
    ///
    /// Every failed check is reported, not just the first: an interval with
    /// two non-positive bounds in the wrong order yields three errors.
    pub fn new(lower: BigDecimal, upper: BigDecimal) -> Result<Self, IntervalErrors> {
        Self::try_from(IntervalDto { lower, upper })
    }

    /// Creates a new interval without validating the bounds
    ///
    /// # Safety
    ///
    /// This function bypasses all validation checks. The caller must
    /// guarantee that both bounds are strictly positive and that
    /// `lower <= upper`, as established by [`Interval::try_from`].
    /// Scoring assumes these properties; in particular the tie-break
    /// division requires a positive lower bound.
    pub unsafe fn new_unchecked(lower: BigDecimal, upper: BigDecimal) -> Self {
        Self { lower, upper }
    }

    /// The lower bound of the interval
    pub fn lower(&self) -> &BigDecimal {
        &self.lower
    }

    /// The upper bound of the interval
    pub fn upper(&self) -> &BigDecimal {
        &self.upper
    }

    /// Whether `value` falls within the interval, bounds included
    pub fn contains(&self, value: &BigDecimal) -> bool {
        &self.lower <= value && value <= &self.upper
    }

    /// The tie-break score of the interval: `upper` divided by `lower`,
    /// rounded down to an integer
    ///
    /// This is deliberately coarse: a tighter interval only pays off at
    /// order-of-magnitude granularity. It is only meaningful when the
    /// interval actually contains the answer. The result is an integer but
    /// can exceed any primitive integer range, so it stays a decimal.
    pub fn tie_break_score(&self) -> BigDecimal {
        let mut quotient = (&self.upper / &self.lower).with_scale_round(0, RoundingMode::Floor);

        // Decimal division is carried out at a finite precision, so the
        // floored quotient can be off by one in either direction near an
        // exact multiple. Multiplication is exact, which lets us clamp the
        // quotient against it.
        let one = BigDecimal::one();
        while &quotient * &self.lower > self.upper {
            quotient = &quotient - &one;
        }
        while (&quotient + &one) * &self.lower <= self.upper {
            quotient = &quotient + &one;
        }
        quotient
    }
}

/// Displays the bounds in compressed scientific notation, mirroring how the
/// scoreboard pages render intervals.
impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}]",
            self.lower.with_prec(3).to_scientific_notation(),
            self.upper.with_prec(3).to_scientific_notation()
        )
    }
}

/// DTO to ensure that we always validate when we deserialize from an untrusted source
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntervalDto {
    /// The claimed lower bound
    pub lower: BigDecimal,
    /// The claimed upper bound
    pub upper: BigDecimal,
}

impl From<Interval> for IntervalDto {
    fn from(value: Interval) -> Self {
        IntervalDto {
            lower: value.lower,
            upper: value.upper,
        }
    }
}

impl TryFrom<IntervalDto> for Interval {
    type Error = IntervalErrors;

    /// Attempts to create an Interval from a DTO, validating all constraints
    ///
    /// # Validation
    ///
    /// 1. The lower bound is strictly positive
    /// 2. The upper bound is strictly positive
    /// 3. The interval is not empty (`lower <= upper`)
    ///
    /// All checks run independently and every violation is collected.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalErrors`] listing each failed check.
    fn try_from(value: IntervalDto) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        if !value.lower.is_positive() {
            errors.push(IntervalError::LowerNotPositive);
        }
        if !value.upper.is_positive() {
            errors.push(IntervalError::UpperNotPositive);
        }
        if value.lower > value.upper {
            errors.push(IntervalError::Empty);
        }

        if errors.is_empty() {
            Ok(Self {
                lower: value.lower,
                upper: value.upper,
            })
        } else {
            Err(IntervalErrors(errors))
        }
    }
}

/// A single failed interval check
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IntervalError {
    /// Error when the lower bound is zero or negative
    #[error("Lower bound must be positive")]
    LowerNotPositive,
    /// Error when the upper bound is zero or negative
    #[error("Upper bound must be positive")]
    UpperNotPositive,
    /// Error when the bounds are inverted
    #[error("Interval must not be empty")]
    Empty,
}

impl IntervalError {
    /// The input field this error is attributable to, if any
    ///
    /// [`IntervalError::Empty`] concerns both bounds at once and has no
    /// single field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::LowerNotPositive => Some("lower"),
            Self::UpperNotPositive => Some("upper"),
            Self::Empty => None,
        }
    }
}

/// Every failed check from one interval validation pass
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
pub struct IntervalErrors(pub Vec<IntervalError>);

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> BigDecimal {
        value.parse().unwrap()
    }

    fn interval(lower: &str, upper: &str) -> Interval {
        Interval::new(dec(lower), dec(upper)).unwrap()
    }

    #[test]
    fn test_zero_lower_bound() {
        assert_eq!(
            Interval::new(dec("0"), dec("10")).unwrap_err(),
            IntervalErrors(vec![IntervalError::LowerNotPositive])
        );
    }

    #[test]
    fn test_negative_bounds() {
        // -5 < -3, so the interval is non-empty but both bounds fail
        assert_eq!(
            Interval::new(dec("-5"), dec("-3")).unwrap_err(),
            IntervalErrors(vec![
                IntervalError::LowerNotPositive,
                IntervalError::UpperNotPositive,
            ])
        );
    }

    #[test]
    fn test_inverted_bounds() {
        assert_eq!(
            Interval::new(dec("5"), dec("3")).unwrap_err(),
            IntervalErrors(vec![IntervalError::Empty])
        );
    }

    #[test]
    fn test_all_checks_collected() {
        assert_eq!(
            Interval::new(dec("-3"), dec("-5")).unwrap_err(),
            IntervalErrors(vec![
                IntervalError::LowerNotPositive,
                IntervalError::UpperNotPositive,
                IntervalError::Empty,
            ])
        );
    }

    #[test]
    fn test_degenerate_interval_is_valid() {
        assert!(Interval::new(dec("10"), dec("10")).is_ok());
    }

    #[test]
    fn test_field_attribution() {
        assert_eq!(IntervalError::LowerNotPositive.field(), Some("lower"));
        assert_eq!(IntervalError::UpperNotPositive.field(), Some("upper"));
        assert_eq!(IntervalError::Empty.field(), None);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let interval = interval("1", "10");
        assert!(interval.contains(&dec("1")));
        assert!(interval.contains(&dec("10")));
        assert!(interval.contains(&dec("5.5")));
        assert!(!interval.contains(&dec("0.9999999999999999999999")));
        assert!(!interval.contains(&dec("10.0000000000000000000001")));
    }

    #[test]
    fn test_contains_ignores_scale() {
        let interval = interval("1", "10");
        assert!(interval.contains(&dec("1.000000000000000000000000")));
        assert!(interval.contains(&dec("1e1")));
    }

    #[test]
    fn test_tie_break_floor_division() {
        assert_eq!(interval("3", "10").tie_break_score(), dec("3"));
        assert_eq!(interval("10", "10").tie_break_score(), dec("1"));
        assert_eq!(interval("2.5", "10").tie_break_score(), dec("4"));
        assert_eq!(interval("3", "9").tie_break_score(), dec("3"));
        assert_eq!(interval("0.5", "0.7").tie_break_score(), dec("1"));
    }

    #[test]
    fn test_tie_break_spans_many_orders_of_magnitude() {
        // 1e47 / 1e-20 = 1e67, past what any primitive integer can hold
        let wide = interval(
            "0.00000000000000000001",
            "100000000000000000000000000000000000000000000000",
        );
        assert_eq!(wide.tie_break_score(), dec("1e67"));
    }

    #[test]
    fn test_tie_break_exact_near_integer_quotients() {
        // The quotient here is just below 3 for over a hundred digits; a
        // naive fixed-precision division would round it up before flooring.
        let close = interval(
            "3",
            "8.999999999999999999999999999999999999999999999999999999999999999999999999999999999999999999999999999999",
        );
        assert_eq!(close.tie_break_score(), dec("2"));

        // And exactly 3 must not come out as 2.
        assert_eq!(interval("3", "9.000000000000000000000000").tie_break_score(), dec("3"));
    }

    #[test]
    fn test_display_uses_scientific_notation() {
        assert_eq!(interval("100", "3500").to_string(), "[1.00e2, 3.50e3]");
        assert_eq!(interval("0.01", "2").to_string(), "[1.00e-2, 2.00e0]");
    }

    #[test]
    fn test_serde_round_trip() {
        let original = interval("3.5", "42");
        let encoded = serde_json::to_string(&original).unwrap();
        let decoded: Interval = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_deserialization_validates() {
        let result = serde_json::from_str::<Interval>(r#"{"lower": "5", "upper": "3"}"#);
        assert!(result.is_err());
        let result = serde_json::from_str::<Interval>(r#"{"lower": "0", "upper": "3"}"#);
        assert!(result.is_err());
    }
}

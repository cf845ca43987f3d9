//! Error types for quantity operations.

/// Result type for quantity operations.
pub type QuantityResult<T> = Result<T, QuantityError>;

/// Error type for quantity operations.
///
/// Every variant is a programming error surfaced synchronously at the point
/// of the offending operation. Nothing here is retried or recovered from;
/// callers propagate with `?`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    /// Addition, subtraction or an ordering comparison was attempted on
    /// operands whose dimensions differ (and no zero/dimensionless exception
    /// applied).
    #[error("Cannot {operation} {lhs} and {rhs}.")]
    DimensionMismatch {
        /// Verb of the failed operation ("add", "subtract", "compare").
        operation: &'static str,
        /// Rendered left operand.
        lhs: String,
        /// Rendered right operand.
        rhs: String,
    },

    /// Equality was tested between a dimensioned quantity and a bare numeric
    /// value. No such relation is defined; this is distinct from
    /// [`QuantityError::DimensionMismatch`], which covers two quantities.
    #[error("No equality relation is defined between {quantity} and the bare value {value}.")]
    UnimplementedComparison {
        /// Rendered dimensioned quantity.
        quantity: String,
        /// Rendered bare value.
        value: String,
    },

    /// A narrowing conversion to a bare numeric type was attempted on a
    /// quantity that still carries a dimension.
    #[error("Cannot convert dimensional quantity {quantity} into {target}.")]
    NotConvertible {
        /// Rendered offending quantity.
        quantity: String,
        /// Name of the requested target type.
        target: &'static str,
    },

    /// The operation has no defined dimensional semantics (modulo, floored
    /// division with remainder) and fails regardless of its operands.
    #[error("{operation} is not defined for dimensional quantities.")]
    Unsupported {
        /// Name of the unsupported operation.
        operation: &'static str,
    },

    /// A quantity was asked to render itself in a display unit of a
    /// different dimension.
    #[error("Cannot convert {quantity} to {unit}.")]
    UnitMismatch {
        /// Rendered quantity being formatted.
        quantity: String,
        /// Rendered display unit.
        unit: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_mismatch_message_names_both_operands() {
        let err = QuantityError::DimensionMismatch {
            operation: "add",
            lhs: "1 m".to_string(),
            rhs: "1 s".to_string(),
        };
        assert_eq!(err.to_string(), "Cannot add 1 m and 1 s.");
    }

    #[test]
    fn not_convertible_message_names_target() {
        let err = QuantityError::NotConvertible {
            quantity: "5 m".to_string(),
            target: "f64",
        };
        assert_eq!(
            err.to_string(),
            "Cannot convert dimensional quantity 5 m into f64."
        );
    }

    #[test]
    fn unsupported_is_unconditional_on_operands() {
        let err = QuantityError::Unsupported {
            operation: "remainder",
        };
        assert_eq!(
            err.to_string(),
            "remainder is not defined for dimensional quantities."
        );
    }
}

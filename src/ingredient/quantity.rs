//! Restricted arithmetic for ingredient quantities.
//!
//! Quantity expressions in free-text ingredient lines are sums of
//! non-negative integers, decimals and `a/b` fractions ("4 1/2" style
//! mixed numbers become "4+1/2"). Nothing else is accepted; this is
//! deliberately not a general expression evaluator.

/// Evaluate a quantity expression: `+`-separated terms, each an
/// integer, a decimal or an `a/b` fraction.
///
/// Returns `None` for anything outside that grammar.
pub fn eval_expr(text: &str) -> Option<f64> {
    let mut total = 0.0;
    for term in text.split('+') {
        total += eval_term(term.trim())?;
    }
    Some(total)
}

fn eval_term(term: &str) -> Option<f64> {
    match term.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator = parse_operand(numerator)?;
            let denominator = parse_operand(denominator)?;
            if denominator == 0.0 {
                return None;
            }
            // Division keeps full f64 precision, no rounding here
            Some(numerator / denominator)
        }
        None => parse_operand(term),
    }
}

fn parse_operand(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_and_fractions() {
        assert_eq!(eval_expr("2"), Some(2.0));
        assert_eq!(eval_expr("1/2"), Some(0.5));
        assert_eq!(eval_expr("4+1/2"), Some(4.5));
        assert_eq!(eval_expr("1+1+1"), Some(3.0));
    }

    #[test]
    fn decimals() {
        assert_eq!(eval_expr("1.5"), Some(1.5));
        assert_eq!(eval_expr("0.25+0.25"), Some(0.5));
    }

    #[test]
    fn division_keeps_precision() {
        assert_eq!(eval_expr("1/3"), Some(1.0 / 3.0));
    }

    #[test]
    fn rejects_everything_else() {
        assert_eq!(eval_expr(""), None);
        assert_eq!(eval_expr("half"), None);
        assert_eq!(eval_expr("2*3"), None);
        assert_eq!(eval_expr("-1"), None);
        assert_eq!(eval_expr("1/0"), None);
        assert_eq!(eval_expr("1/2/3"), None);
        assert_eq!(eval_expr("nan"), None);
    }
}

//! `an+b` formulas for the `:nth-*` pseudo-classes.

/// A parsed `an+b` formula.
///
/// Matches position `n` (1-based) when some non-negative integer `k` gives
/// `n = a*k + b`, or simply `n == b` when `a` is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NthFormula {
    /// Step.
    pub a: i64,
    /// Offset.
    pub b: i64,
}

impl NthFormula {
    /// Parse `odd`, `even`, `an+b` or a plain integer.
    ///
    /// Whitespace is ignored and case does not matter. The coefficient may be
    /// omitted (`n+1`) or be just a sign (`-n+3`). Returns `None` for anything
    /// else.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let formula: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();

        match formula.as_str() {
            "odd" => return Some(Self { a: 2, b: 1 }),
            "even" => return Some(Self { a: 2, b: 0 }),
            _ => {}
        }

        let Some((step, offset)) = formula.split_once('n') else {
            return parse_signed(&formula).map(|b| Self { a: 0, b });
        };
        let a = match step {
            "" | "+" => 1,
            "-" => -1,
            _ => parse_signed(step)?,
        };
        let b = if offset.is_empty() {
            0
        } else if offset.starts_with(['+', '-']) {
            parse_signed(offset)?
        } else {
            return None;
        };
        Some(Self { a, b })
    }

    /// Whether 1-based position `n` is selected.
    #[must_use]
    pub const fn matches(self, n: i64) -> bool {
        if self.a == 0 {
            return n == self.b;
        }
        let Some(diff) = n.checked_sub(self.b) else {
            return false;
        };
        matches!(
            (diff.checked_rem(self.a), diff.checked_div(self.a)),
            (Some(0), Some(k)) if k >= 0
        )
    }
}

/// An optionally signed run of ASCII digits.
fn parse_signed(s: &str) -> Option<i64> {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

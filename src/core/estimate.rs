use rust_decimal::Decimal;

/// Casts a raw effort field value into an exact decimal quantity.
///
/// A missing, empty, or whitespace-only value means "no effort" and maps to
/// zero. A value that fails numeric parsing returns `None`, meaning
/// "unknown". The distinction matters for history reconstruction: an unknown
/// value must not overwrite the carried state, while an explicit zero must.
#[must_use]
pub fn cast_estimate(raw: Option<&str>) -> Option<Decimal> {
    let Some(raw) = raw else {
        return Some(Decimal::ZERO);
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(Decimal::ZERO);
    }

    trimmed.parse::<Decimal>().ok()
}

/// Casts a snapshot field value, collapsing "unknown" to zero.
///
/// Only valid outside the reconstruction path, where an unparseable current
/// value simply contributes nothing to a sum.
#[must_use]
pub fn cast_or_zero(raw: Option<&str>) -> Decimal {
    cast_estimate(raw).unwrap_or(Decimal::ZERO)
}

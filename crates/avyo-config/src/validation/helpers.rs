//! Range checks shared by the section validators.

use std::fmt::Display;
use std::ops::RangeInclusive;

/// Record an error unless `value` lies in `range`. NaN never does.
pub(crate) fn check_range<T>(
    errors: &mut Vec<String>,
    key: &str,
    value: T,
    range: RangeInclusive<T>,
) where
    T: PartialOrd + Display,
{
    if !range.contains(&value) {
        errors.push(format!(
            "{key} = {value} is out of range [{}, {}]",
            range.start(),
            range.end()
        ));
    }
}

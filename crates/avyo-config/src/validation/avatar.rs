//! Blink timing validation.

use crate::schema::AvyoConfig;

use super::helpers::check_range;

pub(crate) fn validate_blink(errors: &mut Vec<String>, config: &AvyoConfig) {
    let blink = &config.avatar.blink;

    check_range(errors, "avatar.blink.min_interval", blink.min_interval, 0.5..=30.0);
    check_range(errors, "avatar.blink.max_interval", blink.max_interval, 0.5..=30.0);
    if blink.max_interval < blink.min_interval {
        errors.push(format!(
            "avatar.blink.max_interval = {} is below min_interval = {}",
            blink.max_interval, blink.min_interval
        ));
    }

    check_range(errors, "avatar.blink.close_duration", blink.close_duration, 0.01..=1.0);
    check_range(errors, "avatar.blink.open_duration", blink.open_duration, 0.01..=1.0);
    check_range(errors, "avatar.blink.closed_openness", blink.closed_openness, 0.0..=1.0);
}

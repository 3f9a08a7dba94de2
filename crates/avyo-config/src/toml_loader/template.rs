//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Avyo Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[avatar]
# enabled = true
# skin = "cartoon"        # cartoon, human, robot
# seed = 42               # fixed blink seed; omit for random

[avatar.blink]
# min_interval = 2.0      # seconds between blinks, 0.5-30.0
# max_interval = 6.0      # must be >= min_interval
# close_duration = 0.08   # 0.01-1.0
# open_duration = 0.12    # 0.01-1.0
# closed_openness = 0.05  # 0.0-1.0

[sequence]
# listening = 1.0         # seconds, 0.0-30.0
# thinking = 1.5
# speaking = 2.0
# wave = 2.0
# click_think = 3.0
# click_speak = 2.0
# wave_chance = 0.3       # 0.0-1.0

[chat]
# username = "Friend"
# assistant_name = "Avyo"
# reply_delay_ms = 1000   # 0-10000
# history_limit = 200     # 10-10000

[performance]
# frame_rate = 60         # 1-240

[logging]
# level = "INFO"          # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}

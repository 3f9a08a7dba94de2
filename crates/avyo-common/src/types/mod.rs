mod activity;
mod color;
mod mood;

pub use activity::*;
pub use color::*;
pub use mood::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_hex_6() {
        let c = Color::from_hex("#4ade80").unwrap();
        assert_eq!(c, Color::from_rgba(0x4a, 0xde, 0x80, 255));
    }

    #[test]
    fn color_from_hex_8() {
        let c = Color::from_hex("#ff880080").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 128));
    }

    #[test]
    fn color_from_hex_no_hash() {
        let c = Color::from_hex("00ff00").unwrap();
        assert_eq!(c, Color::from_rgba(0, 255, 0, 255));
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("").is_none());
    }

    #[test]
    fn color_to_hex_opaque() {
        let c = Color::from_rgba(0x89, 0x3f, 0x45, 255);
        assert_eq!(c.to_hex(), "#893f45");
    }

    #[test]
    fn color_to_hex_with_alpha() {
        let c = Color::from_rgba(255, 0, 128, 128);
        assert_eq!(c.to_hex(), "#ff008080");
    }

    #[test]
    fn color_unit_rgb() {
        let c = Color::from_rgba(255, 0, 51, 255);
        let [r, g, b] = c.to_unit_rgb();
        assert!((r - 1.0).abs() < 1e-6);
        assert!(g.abs() < 1e-6);
        assert!((b - 0.2).abs() < 1e-6);
    }

    #[test]
    fn color_serializes_as_hex() {
        let c = Color::from_rgba(0x60, 0xa5, 0xfa, 255);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#60a5fa\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn mood_label_round_trips_through_str() {
        for mood in MoodLabel::ALL {
            let parsed: MoodLabel = mood.as_str().parse().unwrap();
            assert_eq!(parsed, mood);
        }
        assert!("ecstatic".parse::<MoodLabel>().is_err());
    }

    #[test]
    fn mood_label_serialization_is_lowercase() {
        let json = serde_json::to_string(&MoodLabel::Angry).unwrap();
        assert_eq!(json, "\"angry\"");
    }

    #[test]
    fn no_flags_resolve_to_idle() {
        assert_eq!(ActivityFlags::default().resolve(), ActivityState::Idle);
    }

    #[test]
    fn waving_outranks_thinking() {
        let flags = ActivityFlags {
            waving: true,
            thinking: true,
            ..Default::default()
        };
        assert_eq!(flags.resolve(), ActivityState::Waving);
    }

    #[test]
    fn priority_order_is_total() {
        let flags = ActivityFlags {
            listening: true,
            thinking: true,
            speaking: true,
            waving: false,
        };
        assert_eq!(flags.resolve(), ActivityState::Speaking);

        let flags = ActivityFlags {
            listening: true,
            thinking: true,
            ..Default::default()
        };
        assert_eq!(flags.resolve(), ActivityState::Thinking);

        let flags = ActivityFlags {
            listening: true,
            ..Default::default()
        };
        assert_eq!(flags.resolve(), ActivityState::Listening);
    }

    #[test]
    fn activity_priority_ranks() {
        assert!(ActivityState::Waving.priority() > ActivityState::Speaking.priority());
        assert!(ActivityState::Speaking.priority() > ActivityState::Thinking.priority());
        assert!(ActivityState::Thinking.priority() > ActivityState::Listening.priority());
        assert!(ActivityState::Listening.priority() > ActivityState::Idle.priority());
    }

    #[test]
    fn flags_from_single_state() {
        let flags = ActivityFlags::only(ActivityState::Thinking);
        assert!(flags.thinking);
        assert!(!flags.waving && !flags.listening && !flags.speaking);
        assert_eq!(ActivityFlags::only(ActivityState::Idle), ActivityFlags::default());
    }

    #[test]
    fn signal_resolves_activity() {
        let signal = Signal {
            flags: ActivityFlags {
                speaking: true,
                ..Default::default()
            },
            mood: MoodLabel::Happy,
        };
        assert_eq!(signal.activity(), ActivityState::Speaking);
    }
}

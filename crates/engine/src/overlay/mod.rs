//! CSS overlay generation
//!
//! The jackpot overlays and the "New" badge are injected as generated
//! stylesheets targeting the casino's game-thumb elements. This module
//! builds those stylesheet strings from fetched data; injecting them
//! into a document is the embedder's job.

use ambet_core::JackpotStats;

/// Currency displayed by every overlay
pub const OVERLAY_CURRENCY: &str = "GEL";
const CURRENCY_SIGN: char = '₾';

/// One jackpot overlay: which instance feeds it and which game thumbs
/// carry the value badge.
#[derive(Debug, Clone, Copy)]
pub struct JackpotOverlay {
    pub instance_name: &'static str,
    /// id of the injected <style> element, so re-renders can replace it
    pub style_id: &'static str,
    pub game_ids: &'static [&'static str],
    pub icon_url: &'static str,
    pub background: &'static str,
    pub border: Option<&'static str>,
}

const BELL_LINK_GAMES: &[&str] = &[
    "40-lucky-king-bell-link",
    "40-super-fruits-bell-link",
    "40-burning-hot-bell-link",
    "40-zodiac-wheel-bell-link",
    "flaming-hot-extreme-bell-link",
    "40-lucky-king-extreme-bell-link",
    "vampire-night-bell-link",
    "shining-crown-bell-link",
    "burning-hot-bell-link",
    "20-super-hot-bell-link",
    "zodiac-wheel-bell-link",
    "flaming-hot-bell-link",
    "20-super-fruits-bell-link",
    "5-dazzling-hot-bell-link",
    "40-super-hot-bell-link",
    "40-shining-crown-bell-link",
];

const VIP_BELL_LINK_GAMES: &[&str] = &[
    "vip-40-lucky-king-bell-link",
    "vip-40-super-fruits-bell-link",
    "vip-40-burning-hot-bell-link",
    "vip-40-zodiac-wheel-bell-link",
    "vip-flaming-hot-extreme-bell-link",
    "vip-40-lucky-king-extreme-bell-link",
    "vip-vampire-night-bell-link",
    "vip-shining-crown-bell-link",
    "vip-burning-hot-bell-link",
    "vip-20-super-hot-bell-link",
    "vip-zodiac-wheel-bell-link",
    "vip-flaming-hot-bell-link",
    "vip-20-super-fruits-bell-link",
    "vip-5-dazzling-hot-bell-link",
    "vip-40-super-hot-bell-link",
    "vip-40-shining-crown-bell-link",
];

const HIGH_CASH_GAMES: &[&str] = &[
    "princess-cash",
    "leprechance-treasury",
    "dragons-realm",
    "mummy-secret",
];

const TS_IMAGES: &str =
    "https://www.ambassadoribet.com/_internal/ts-images/5da2b4d5-59f6-412a-82c3-f6a272b532be/dev";

pub const BELL_LINK: JackpotOverlay = JackpotOverlay {
    instance_name: "Bell Link",
    style_id: "bell-link-style",
    game_ids: BELL_LINK_GAMES,
    icon_url:
        "https://www.ambassadoribet.com/_internal/ts-images/5da2b4d5-59f6-412a-82c3-f6a272b532be/dev/8228a998-a96c-4939-bedc-51cad1b895d5/vip-bell-link.svg",
    background: "rgb(70 7 104 / 92%)",
    border: Some("solid 2px #cf167d"),
};

pub const VIP_BELL_LINK: JackpotOverlay = JackpotOverlay {
    instance_name: "VIP Bell Link",
    style_id: "vip-bell-link-style",
    game_ids: VIP_BELL_LINK_GAMES,
    icon_url:
        "https://www.ambassadoribet.com/_internal/ts-images/5da2b4d5-59f6-412a-82c3-f6a272b532be/dev/8228a998-a96c-4939-bedc-51cad1b895d5/vip-bell-link.svg",
    background: "rgb(70 7 104 / 92%)",
    border: Some("solid 2px #cf167d"),
};

pub const HIGH_CASH: JackpotOverlay = JackpotOverlay {
    instance_name: "High Cash",
    style_id: "high-cash-style",
    game_ids: HIGH_CASH_GAMES,
    icon_url:
        "https://www.ambassadoribet.com/_internal/ts-images/5da2b4d5-59f6-412a-82c3-f6a272b532be/dev/f7d50df4-859a-4cb8-bc88-ea83e01e1174/HighCash.svg",
    background: "var(--background-background)",
    border: None,
};

/// name → game-id mapping for the progressive overlay
const PROGRESSIVE_GAMES: &[(&str, &str)] = &[
    ("Versailles Gold", "versailles-gold-jp-egt"),
    ("Burning Hot", "burning-hot-jp-egt"),
    ("Rise of Ra", "rise-of-ra-jp-egt"),
    ("40 Super Hot", "40-super-hot-jp-egt"),
    ("20 Super Hot", "20-super-hot-jp-egt"),
];

pub const PROGRESSIVE_STYLE_ID: &str = "progressive-jackpot-style";

/// Format a minor-unit jackpot value for display: round to whole major
/// units, group thousands, append the lari sign.
pub fn format_jackpot_amount(minor_units: f64) -> String {
    let major = (minor_units / 100.0).round() as i64;
    format!("{}{}", group_thousands(major), CURRENCY_SIGN)
}

fn group_thousands(value: i64) -> String {
    // unsigned_abs: the value comes from a saturating f64 cast, so
    // i64::MIN is reachable and must not overflow here
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Stylesheet for one fixed-game-list overlay, or `None` when the feed
/// is missing the instance/level/currency the overlay displays.
pub fn overlay_stylesheet(overlay: &JackpotOverlay, stats: &JackpotStats) -> Option<String> {
    let value = stats.level1_value(overlay.instance_name, OVERLAY_CURRENCY)?;
    let content = format_jackpot_amount(value);

    let selectors = overlay
        .game_ids
        .iter()
        .map(|id| format!("x-casino-game-thumb[data-id=\"{}\"]", id))
        .collect::<Vec<_>>()
        .join(",\n");

    let border = overlay
        .border
        .map(|b| format!("\n        border: {};", b))
        .unwrap_or_default();

    Some(format!(
        r#"{selectors} {{
    &::before {{
        content: "{content}";
        position: absolute;
        bottom: 10px;
        right: 10px;
        font-size: var(--font-size-body);
        background: {background} url("{icon}") no-repeat 5px center;
        padding: 5px 5px 5px 25px;
        border-radius: 7px;
        z-index: 2;
        pointer-events: none;{border}
    }}
}}
"#,
        selectors = selectors,
        content = content,
        background = overlay.background,
        icon = overlay.icon_url,
        border = border,
    ))
}

/// Stylesheet for the progressive overlay: one shared badge rule plus
/// a per-game `content` rule for every instance present in the feed.
pub fn progressive_stylesheet(stats: &JackpotStats) -> String {
    let mut css = format!(
        r#"x-casino-game-thumb[data-id$="-jp-egt"]::before {{
    position: absolute;
    bottom: 10px;
    right: 10px;
    font-size: var(--font-size-body);
    background: rgb(7 20 104 / 92%) url("{TS_IMAGES}/54d869aa-cdfa-4227-a3e7-f52b48a5dc96/Progressive.svg") no-repeat 5px center;
    padding: 5px 5px 5px 25px;
    border-radius: 7px;
    z-index: 2;
    pointer-events: none;
    border: solid 2px #167fcf;
}}
"#
    );

    for (instance_name, game_id) in PROGRESSIVE_GAMES {
        let Some(value) = stats.level1_value(instance_name, OVERLAY_CURRENCY) else {
            continue;
        };
        css.push_str(&format!(
            "x-casino-game-thumb[data-id=\"{}\"]::before {{\n    content: \"{}\";\n}}\n",
            game_id,
            format_jackpot_amount(value)
        ));
    }
    css
}

/// Stylesheet marking the given game ids with a "New" badge.
/// Empty input produces no stylesheet.
pub fn new_badge_stylesheet(game_ids: &[String]) -> Option<String> {
    if game_ids.is_empty() {
        return None;
    }
    let selectors = game_ids
        .iter()
        .map(|id| format!("  &[data-id=\"{}\"]", id))
        .collect::<Vec<_>>()
        .join(",\n");

    Some(format!(
        r#"x-casino-game-thumb {{
{selectors} {{
    &:after {{
        content: 'New';
        position: absolute;
        color: white;
        font-size: 130%;
        font-weight: bold;
        background: #1AAF92;
        top: 7px;
        right: 0;
        transform: translatex(6px);
        border-radius: 5px;
        padding: 2px 5px;
        z-index: 100000;
        font-family: 'Noto Sans Ambassadori' !important;
        pointer-events: none !important;
        background-size: 200% 200%;
    }}
  }}
}}
"#,
        selectors = selectors
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_with(instance: &str, value: f64) -> JackpotStats {
        serde_json::from_value(serde_json::json!({
            "jackpotInstancesStats": {
                "instanceStats": [{
                    "instanceName": instance,
                    "levelStats": [{
                        "levelId": 1,
                        "currentValue": [{"key": "GEL", "value": value}]
                    }]
                }]
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_format_jackpot_amount_rounds_and_groups() {
        assert_eq!(format_jackpot_amount(1234567.0), "12,346₾");
        assert_eq!(format_jackpot_amount(99.0), "1₾");
        assert_eq!(format_jackpot_amount(100000000.0), "1,000,000₾");
        assert_eq!(format_jackpot_amount(0.0), "0₾");
    }

    #[test]
    fn test_format_jackpot_amount_extreme_values() {
        assert_eq!(format_jackpot_amount(-1234567.0), "-12,346₾");
        // A wildly out-of-range feed value saturates instead of
        // panicking
        assert_eq!(
            format_jackpot_amount(f64::MIN),
            "-9,223,372,036,854,775,808₾"
        );
        assert_eq!(
            format_jackpot_amount(f64::MAX),
            "9,223,372,036,854,775,807₾"
        );
    }

    #[test]
    fn test_overlay_stylesheet_includes_value_and_games() {
        let stats = stats_with("High Cash", 1234567.0);
        let css = overlay_stylesheet(&HIGH_CASH, &stats).unwrap();
        assert!(css.contains("content: \"12,346₾\""));
        assert!(css.contains("x-casino-game-thumb[data-id=\"princess-cash\"]"));
        assert!(css.contains("mummy-secret"));
        // High Cash carries no border override
        assert!(!css.contains("border: solid"));
    }

    #[test]
    fn test_overlay_stylesheet_missing_instance_is_none() {
        let stats = stats_with("Bell Link", 500.0);
        assert!(overlay_stylesheet(&HIGH_CASH, &stats).is_none());
        assert!(overlay_stylesheet(&BELL_LINK, &stats).is_some());
    }

    #[test]
    fn test_progressive_stylesheet_skips_absent_instances() {
        let stats = stats_with("Burning Hot", 250000.0);
        let css = progressive_stylesheet(&stats);
        assert!(css.contains("burning-hot-jp-egt"));
        assert!(css.contains("2,500₾"));
        assert!(!css.contains("versailles-gold-jp-egt"));
        // The shared badge rule is always present
        assert!(css.contains("-jp-egt"));
    }

    #[test]
    fn test_new_badge_stylesheet() {
        assert!(new_badge_stylesheet(&[]).is_none());
        let css =
            new_badge_stylesheet(&["book-of-ra".to_string(), "starburst".to_string()]).unwrap();
        assert!(css.contains("&[data-id=\"book-of-ra\"]"));
        assert!(css.contains("&[data-id=\"starburst\"]"));
        assert!(css.contains("content: 'New'"));
    }
}

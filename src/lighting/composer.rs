//! Lighting prompt composer — turns a catalog profile into the lighting
//! fragment of the generation prompt, and recommends a profile per room
//! type and time of day.

use serde_json::json;

use super::catalog::{find_profile, LightingProfile};

/// Build the lighting prompt fragment for a profile.
///
/// Unknown ids degrade gracefully: the caller's custom text is returned
/// verbatim, never an error. Otherwise the profile's keywords are joined
/// with ", ", followed by the explicit color temperature clause and the
/// custom additions (when non-empty).
pub fn build_prompt(profile_id: &str, custom_additions: &str) -> String {
    let Some(profile) = find_profile(profile_id) else {
        return custom_additions.to_string();
    };

    let mut prompt = profile.prompt_keywords.join(", ");

    prompt.push_str(&format!(
        ", {}K color temperature",
        profile.primary_temp.kelvin()
    ));
    if let Some(secondary) = profile.secondary_temp {
        prompt.push_str(&format!(" with {}K accent lighting", secondary.kelvin()));
    }

    if !custom_additions.is_empty() {
        prompt.push_str(", ");
        prompt.push_str(custom_additions);
    }

    prompt
}

// Room-type recommendation table: (room, [(time, profile id)]). The "any"
// row doubles as the fallback for unrecognized time preferences.
static ROOM_RECOMMENDATIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "living_room",
        &[
            ("morning", "natural_morning"),
            ("midday", "mixed_scandinavian"),
            ("afternoon", "natural_golden_hour"),
            ("evening", "artificial_warm_cozy"),
            ("night", "night_ambient"),
            ("any", "mixed_scandinavian"),
        ],
    ),
    (
        "bedroom",
        &[
            ("morning", "natural_morning"),
            ("midday", "natural_midday"),
            ("afternoon", "natural_golden_hour"),
            ("evening", "artificial_warm_cozy"),
            ("night", "night_ambient"),
            ("any", "natural_golden_hour"),
        ],
    ),
    (
        "dining_room",
        &[
            ("morning", "natural_morning"),
            ("midday", "natural_midday"),
            ("afternoon", "natural_golden_hour"),
            ("evening", "mixed_restaurant"),
            ("night", "mixed_restaurant"),
            ("any", "mixed_restaurant"),
        ],
    ),
    (
        "kitchen",
        &[
            ("morning", "natural_morning"),
            ("midday", "natural_midday"),
            ("afternoon", "natural_midday"),
            ("evening", "artificial_neutral_work"),
            ("night", "artificial_neutral_work"),
            ("any", "artificial_neutral_work"),
        ],
    ),
    (
        "office",
        &[
            ("morning", "natural_morning"),
            ("midday", "artificial_neutral_work"),
            ("afternoon", "natural_midday"),
            ("evening", "artificial_neutral_work"),
            ("night", "artificial_neutral_work"),
            ("any", "artificial_neutral_work"),
        ],
    ),
    (
        "bathroom",
        &[
            ("morning", "natural_morning"),
            ("midday", "artificial_cool_modern"),
            ("afternoon", "artificial_cool_modern"),
            ("evening", "artificial_cool_modern"),
            ("night", "artificial_warm_cozy"),
            ("any", "artificial_cool_modern"),
        ],
    ),
    ("commercial", &[("any", "mixed_boutique")]),
    ("studio", &[("any", "dramatic_studio")]),
];

/// Recommend a lighting profile for a room type and time preference.
///
/// Unknown time preferences fall back to the room's "any" entry; unknown
/// room types fall back to the living-room table. Total: always returns a
/// catalog profile.
pub fn recommend(room_type: &str, time_preference: &str) -> &'static LightingProfile {
    let table = ROOM_RECOMMENDATIONS
        .iter()
        .find(|(room, _)| *room == room_type)
        .or_else(|| {
            ROOM_RECOMMENDATIONS
                .iter()
                .find(|(room, _)| *room == "living_room")
        })
        .map(|(_, entries)| *entries)
        .unwrap_or(&[]);

    let id = table
        .iter()
        .find(|(time, _)| *time == time_preference)
        .or_else(|| table.iter().find(|(time, _)| *time == "any"))
        .map(|(_, id)| *id)
        .unwrap_or("mixed_scandinavian");

    // Every id in the table is a catalog id; the final fallback keeps this
    // total even if the table and catalog ever drift.
    find_profile(id).unwrap_or(&super::catalog::all_profiles()[0])
}

/// Full metadata for a profile as a JSON value; empty object for unknown ids.
pub fn metadata(profile_id: &str) -> serde_json::Value {
    let Some(profile) = find_profile(profile_id) else {
        return json!({});
    };

    json!({
        "id": profile.id,
        "name": profile.name,
        "description": profile.description,
        "primary_temperature_k": profile.primary_temp.kelvin(),
        "primary_temperature_name": format!("{:?}", profile.primary_temp),
        "secondary_temperature_k": profile.secondary_temp.map(|t| t.kelvin()),
        "secondary_temperature_name": profile.secondary_temp.map(|t| format!("{t:?}")),
        "intensity": profile.intensity,
        "direction": profile.direction,
        "time_of_day": profile.time_of_day,
        "category": profile.category,
        "prompt_keywords": profile.prompt_keywords,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_hour_prompt_preserves_keyword_order() {
        let prompt = build_prompt("natural_golden_hour", "");
        assert!(prompt.starts_with(
            "golden hour, warm sunset light, 2700K amber glow, long soft shadows, \
             late afternoon sunlight, 2700K color temperature"
        ));
        // No secondary temperature on this profile.
        assert!(!prompt.contains("accent lighting"));
    }

    #[test]
    fn secondary_temperature_adds_the_accent_clause() {
        let prompt = build_prompt("artificial_warm_cozy", "");
        assert!(prompt.contains("2700K color temperature with 2200K accent lighting"));
    }

    #[test]
    fn custom_additions_are_appended() {
        let prompt = build_prompt("natural_midday", "sheer curtains");
        assert!(prompt.ends_with(", sheer curtains"));
    }

    #[test]
    fn unknown_profile_returns_custom_text_verbatim() {
        assert_eq!(build_prompt("nonexistent_profile", "rim light"), "rim light");
        assert_eq!(build_prompt("nonexistent_profile", ""), "");
    }

    #[test]
    fn build_prompt_is_idempotent() {
        let a = build_prompt("mixed_restaurant", "brass fixtures");
        let b = build_prompt("mixed_restaurant", "brass fixtures");
        assert_eq!(a, b);
    }

    #[test]
    fn dining_room_evening_recommends_the_restaurant_profile() {
        assert_eq!(recommend("dining_room", "evening").id, "mixed_restaurant");
    }

    #[test]
    fn unknown_room_falls_back_to_the_living_room_table() {
        assert_eq!(recommend("unknown_room", "evening").id, "artificial_warm_cozy");
    }

    #[test]
    fn unknown_time_falls_back_to_the_any_entry() {
        assert_eq!(recommend("kitchen", "dusk").id, "artificial_neutral_work");
        assert_eq!(recommend("commercial", "morning").id, "mixed_boutique");
    }

    #[test]
    fn every_recommended_id_exists_in_the_catalog() {
        for (_, entries) in ROOM_RECOMMENDATIONS {
            for (_, id) in *entries {
                assert!(super::find_profile(id).is_some(), "{id}");
            }
        }
    }

    #[test]
    fn metadata_carries_temperatures_and_keywords() {
        let meta = metadata("night_ambient");
        assert_eq!(meta["primary_temperature_k"], 2200);
        assert_eq!(meta["secondary_temperature_k"], 1850);
        assert_eq!(meta["prompt_keywords"][0], "night ambient lighting");

        assert_eq!(metadata("nope"), serde_json::json!({}));
    }
}

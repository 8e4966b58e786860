//! # Reference Renderer
//! Default English formatting of a [`Rationale`]. This is presentation, not
//! decision logic; apps with their own i18n should render the fragments
//! themselves and ignore this module.

use crate::recommendation::{Completeness, Rationale, RationaleCode};

/// English phrase for one fragment.
pub fn fragment_text(code: RationaleCode) -> &'static str {
    match code {
        RationaleCode::ColdTop => "A heavy, insulating top for sub-zero cold.",
        RationaleCode::CoolTop => "A warm layered top for a chilly day.",
        RationaleCode::MildTop => "A light top works for mild weather.",
        RationaleCode::WarmTop => "A breathable top for the warmth.",
        RationaleCode::WaterproofTop => "The top should shrug off the rain.",
        RationaleCode::HotBottom => "Light bottoms to stay cool in the heat.",
        RationaleCode::ColdBottom => "Insulated bottoms against the cold.",
        RationaleCode::NormalBottom => "Comfortable bottoms for the day.",
        RationaleCode::RainShoes => "Closed, water-resistant shoes for the rain.",
        RationaleCode::HotShoes => "Breathable shoes for the hot weather.",
        RationaleCode::NormalShoes => "Everyday shoes suited to the season.",
    }
}

/// Assemble the full reason text. Three branches keyed by completeness:
///
/// - empty wardrobe: a standalone message, no date header;
/// - partial outfit: `"<date> — <season>. "` + fragments + incomplete notice;
/// - complete outfit: `"<date> — <season>. "` + summary sentence + fragments.
pub fn reason_text(rationale: &Rationale) -> String {
    if rationale.completeness == Completeness::Empty {
        return "Your wardrobe has no usable items yet — add a few tops, bottoms and shoes \
                to get a recommendation."
            .to_string();
    }

    let header = format!(
        "{} — {}.",
        rationale.date.format("%Y-%m-%d"),
        rationale.season
    );
    let fragments = rationale
        .fragments
        .iter()
        .map(|code| fragment_text(*code))
        .collect::<Vec<_>>()
        .join(" ");

    match rationale.completeness {
        Completeness::Complete => {
            let rain = if rationale.raining { ", with rain" } else { "" };
            format!(
                "{header} A perfect outfit for {}°C{rain}. {fragments}",
                rationale.temperature
            )
        }
        Completeness::Partial => {
            format!(
                "{header} {fragments} Some slots could not be filled; add more items \
                 for a complete outfit."
            )
        }
        Completeness::Empty => unreachable!("handled above"),
    }
}

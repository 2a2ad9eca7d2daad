// src/widget/build.rs
//
// Snapshot → visual tree. Pure: same inputs, same tree.

use chrono::Datelike;

use crate::{
    config::{
        consts::{HEADER_SYMBOL, TIMEZONE_LABEL, UPDATED_MARKER},
        options::WidgetSize,
    },
    snapshot::{BeachSnapshot, DayReading},
};

use super::{
    quality::quality_color,
    tree::{Font, Image, Palette, Stack, Text, Weight, Widget},
};

const TITLE_FONT: Font = Font::rounded(16.0, Weight::Bold);
const UPDATED_FONT: Font = Font::system(10.0, Weight::Semibold);
const DAY_LABEL_FONT: Font = Font::system(11.0, Weight::Bold);
const MIN_SCALE: f32 = 0.5;

/// Point size of the quality readout for a widget family.
pub fn quality_point_size(size: WidgetSize) -> f32 {
    match size {
        WidgetSize::Small => 18.0,
        WidgetSize::Medium | WidgetSize::Large | WidgetSize::ExtraLarge => 20.0,
    }
}

/// Build the widget, cleaning the timestamp against the current local year.
pub fn render_widget(snapshot: &BeachSnapshot, beach: &str, size: WidgetSize) -> Widget {
    render_widget_for_year(snapshot, beach, size, chrono::Local::now().year())
}

pub fn render_widget_for_year(
    snapshot: &BeachSnapshot,
    beach: &str,
    size: WidgetSize,
    year: i32,
) -> Widget {
    let quality_font = Font::rounded(quality_point_size(size), Weight::Semibold);

    let mut main = Stack::vertical();

    // Title: icon + beach name
    let mut title = Stack::horizontal();
    title.image(Image {
        symbol: HEADER_SYMBOL,
        font: Font::system(16.0, Weight::Semibold),
        tint: Palette::HEADING,
        resizable: false,
    });
    title.spacer(4.0);
    title.text(Text::new(beach, TITLE_FONT, Palette::HEADING));
    title.flexible();
    main.stack(title);

    main.spacer(6.0);

    let updated = clean_updated(snapshot.updated.as_deref(), year);
    main.text(Text::new(format!("Updated: {}", updated), UPDATED_FONT, Palette::MUTED));

    main.flexible();

    let mut days = Stack::vertical();
    days.stack(day_stack("TODAY", &snapshot.today, quality_font, true));
    days.flexible();
    days.stack(day_stack("TOMORROW", &snapshot.tomorrow, quality_font, false));
    main.stack(days);

    Widget { size, root: main }
}

fn day_stack(label: &str, day: &DayReading, quality_font: Font, with_temperature: bool) -> Stack {
    let mut stack = Stack::vertical();
    stack.text(Text::new(label, DAY_LABEL_FONT, Palette::MUTED));
    stack.spacer(4.0);

    let quality = Text::new(&day.quality, quality_font, quality_color(&day.quality)).shrink_to(MIN_SCALE);

    if !with_temperature {
        stack.text(quality);
        return stack;
    }

    let mut row = Stack::horizontal();
    row.text(quality);
    if let Some(temp) = day.water_temperature.as_deref().filter(|t| !t.is_empty()) {
        row.spacer(4.0);
        row.text(Text::new(format!("{}ºC", temp), quality_font, Palette::MUTED).shrink_to(MIN_SCALE));
    }
    stack.stack(row);
    stack
}

/// `"Updated 5:00pm AEST 2024"` → `"5:00pm"`.
/// Drops the first `Updated`, the first `AEST` and the first occurrence of `year`, then trims.
/// No caption gives an empty string.
pub fn clean_updated(updated: Option<&str>, year: i32) -> String {
    let Some(text) = updated else { return s!() };
    text.replacen(UPDATED_MARKER, "", 1)
        .replacen(TIMEZONE_LABEL, "", 1)
        .replacen(&year.to_string(), "", 1)
        .trim()
        .to_string()
}

// tests/widget_tree.rs
//
// Snapshot → widget tree: colours, fonts, temperature suffix, text rendering.
//
use beach_report::config::options::WidgetSize;
use beach_report::snapshot::{BeachSnapshot, DayReading};
use beach_report::widget::tree::{Node, Stack, Text};
use beach_report::widget::{render_text, render_widget_for_year, Palette};

const YEAR: i32 = 2026;

fn reading(quality: &str, temp: Option<&str>) -> DayReading {
    DayReading {
        quality: quality.into(),
        description: "desc".into(),
        conditions_url: None,
        water_temperature: temp.map(String::from),
    }
}

fn snap(today: DayReading, tomorrow: DayReading) -> BeachSnapshot {
    BeachSnapshot {
        today,
        tomorrow,
        updated: Some("Updated 5:00pm AEST 18 October 2026".into()),
    }
}

fn find<'a>(root: &'a Stack, content: &str) -> &'a Text {
    root.texts()
        .into_iter()
        .find(|t| t.content == content)
        .unwrap_or_else(|| panic!("no text {content:?}"))
}

#[test]
fn quality_colors_follow_the_vocabulary() {
    let w = render_widget_for_year(&snap(reading("Good", None), reading("Poor", None)), "Hampton", WidgetSize::Small, YEAR);
    assert_eq!(find(&w.root, "Good").color, Palette::Green);
    assert_eq!(find(&w.root, "Poor").color, Palette::Red);

    let w = render_widget_for_year(&snap(reading("Illegal", None), reading("Fair", None)), "Hampton", WidgetSize::Small, YEAR);
    assert_eq!(find(&w.root, "Illegal").color, Palette::Brown);
    assert_eq!(find(&w.root, "Fair").color, Palette::Yellow);
}

#[test]
fn sentinel_renders_in_neutral_color() {
    let w = render_widget_for_year(&BeachSnapshot::unavailable(), "Hampton", WidgetSize::Medium, YEAR);
    let unavailable: Vec<_> = w.root.texts().into_iter().filter(|t| t.content == "unavailable").collect();
    assert_eq!(unavailable.len(), 2);
    assert!(unavailable.iter().all(|t| t.color == Palette::TEXT));
    assert_eq!(find(&w.root, "Updated: ").color, Palette::MUTED);
}

#[test]
fn small_family_uses_smaller_quality_font() {
    let s = snap(reading("Good", None), reading("Fair", None));
    let small = render_widget_for_year(&s, "Hampton", WidgetSize::Small, YEAR);
    let large = render_widget_for_year(&s, "Hampton", WidgetSize::Large, YEAR);
    assert_eq!(find(&small.root, "Good").font.size, 18.0);
    assert_eq!(find(&large.root, "Good").font.size, 20.0);
    assert_eq!(find(&large.root, "Good").min_scale, 0.5);
    // Title is fixed across families
    assert_eq!(find(&small.root, "Hampton").font.size, 16.0);
    assert_eq!(find(&small.root, "Hampton").color, Palette::HEADING);
}

#[test]
fn temperature_only_for_today() {
    let w = render_widget_for_year(&snap(reading("Good", Some("18.5")), reading("Fair", Some("19"))), "Hampton", WidgetSize::Small, YEAR);
    let temps: Vec<_> = w.root.texts().into_iter().filter(|t| t.content.ends_with("ºC")).collect();
    assert_eq!(temps.len(), 1);
    assert_eq!(temps[0].content, "18.5ºC");
    assert_eq!(temps[0].color, Palette::MUTED);
}

#[test]
fn empty_temperature_is_not_shown() {
    let w = render_widget_for_year(&snap(reading("Good", Some("")), reading("Fair", None)), "Hampton", WidgetSize::Small, YEAR);
    assert!(w.root.texts().iter().all(|t| !t.content.contains("ºC")));
}

#[test]
fn updated_caption_is_cleaned() {
    let w = render_widget_for_year(&snap(reading("Good", None), reading("Fair", None)), "Hampton", WidgetSize::Small, YEAR);
    assert!(w.root.texts().iter().any(|t| t.content == "Updated: 5:00pm  18 October"));
}

#[test]
fn rendering_is_pure() {
    let s = snap(reading("Good", Some("17")), reading("Fair", None));
    let a = render_widget_for_year(&s, "Hampton", WidgetSize::ExtraLarge, YEAR);
    let b = render_widget_for_year(&s, "Hampton", WidgetSize::ExtraLarge, YEAR);
    assert_eq!(a, b);
    assert_eq!(a.size, WidgetSize::ExtraLarge);
}

#[test]
fn root_starts_with_title_row() {
    let w = render_widget_for_year(&BeachSnapshot::unavailable(), "Elwood", WidgetSize::Small, YEAR);
    match &w.root.children[0] {
        Node::Stack(title) => {
            assert!(matches!(title.children[0], Node::Image(_)));
            assert_eq!(title.texts()[0].content, "Elwood");
        }
        other => panic!("expected title stack, got {other:?}"),
    }
}

#[test]
fn text_rendering_lines() {
    let w = render_widget_for_year(&snap(reading("Good", Some("17")), reading("Fair", None)), "Hampton", WidgetSize::Small, YEAR);
    let out = render_text(&w);
    assert_eq!(
        out,
        "⛱ Hampton\nUpdated: 5:00pm  18 October\nTODAY\nGood 17ºC\nTOMORROW\nFair\n"
    );
}

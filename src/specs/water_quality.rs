// src/specs/water_quality.rs
//! Scraping rules for the EPA "water quality across Victoria" page.
//!
//! Purpose:
//! - Find the first row of any `table.js-responsive-table` whose text content contains
//!   the beach name (case-sensitive substring on the raw text, first match wins;
//!   `&nbsp;` is U+00A0 there, not a space).
//! - Read today (cell 2), tomorrow (cell 3) and the beachsafe link (cell 4) from it.
//!   Cells are counted like CSS `nth-child`: element children of the row, from 1.
//! - Read the `Updated ...` caption from `section.cm-yb-table p`, verbatim.
//! - Quality and description are read as visible text (whitespace collapsed).
//!
//! Every lookup degrades to the `unavailable` sentinel instead of failing, so a
//! page redesign shows up as sentinels in the widget, not as an error.
//!
//! Non-Responsibilities:
//! - **No networking** (see `report`). This module only reads a document.

use crate::{
    config::consts::*,
    core::html::{self, Element},
    snapshot::{BeachSnapshot, DayReading},
};

/// Parse the whole page for `beach`. Never fails.
pub fn parse_report(doc: &str, beach: &str) -> BeachSnapshot {
    let mut snap = BeachSnapshot::unavailable();

    match find_beach_row(doc, beach) {
        Some(row) => {
            logd!("Report: matched row for '{}'", beach);
            let cells = html::child_elements(row.inner);
            snap.today = read_day(&cells, TODAY_COL);
            snap.today.conditions_url = conditions_url(&cells);
            snap.tomorrow = read_day(&cells, TOMORROW_COL);
        }
        None => loge!("Report: no row matches '{}', showing {}", beach, UNAVAILABLE),
    }

    snap.updated = find_updated(doc);
    if snap.updated.is_none() {
        logd!("Report: no '{}' caption found", UPDATED_MARKER);
    }
    snap
}

/// First results row whose text contains `beach`.
pub fn find_beach_row<'a>(doc: &'a str, beach: &str) -> Option<Element<'a>> {
    html::elements(doc, "table")
        .into_iter()
        .filter(|t| t.has_class(TABLE_CLASS))
        .flat_map(|t| html::elements(t.inner, "tr"))
        .find(|tr| tr.raw_text().contains(beach))
}

/// The `Updated ...` paragraph text from the results summary, if any, as written.
pub fn find_updated(doc: &str) -> Option<String> {
    html::elements(doc, "section")
        .into_iter()
        .filter(|s| s.has_class(SUMMARY_SECTION_CLASS))
        .flat_map(|s| html::elements(s.inner, "p"))
        .map(|p| p.raw_text())
        .find(|t| t.contains(UPDATED_MARKER))
}

/* ---------- helpers ---------- */

/// `td:nth-child(n)`: the n-th element child, and only if it is a `<td>`.
fn nth_td<'a, 'b>(cells: &'b [Element<'a>], n: usize) -> Option<&'b Element<'a>> {
    cells.get(n.checked_sub(1)?).filter(|c| c.is("td"))
}

fn read_day(cells: &[Element<'_>], col: usize) -> DayReading {
    let cell = nth_td(cells, col);

    let quality = cell
        .and_then(|c| html::first_with_class(c.inner, INDICATOR_CLASS))
        .map(|e| e.text());
    let description = cell
        .and_then(|c| html::first_element(c.inner, "p"))
        .map(|e| e.text());

    if cell.is_none() {
        logd!("Report: cell {} missing", col);
    }

    DayReading {
        quality: quality.unwrap_or_else(|| s!(UNAVAILABLE)),
        description: description.unwrap_or_else(|| s!(UNAVAILABLE)),
        conditions_url: None,
        water_temperature: None,
    }
}

/// First `a[href*="beachsafe.org.au"]` in the links cell.
fn conditions_url(cells: &[Element<'_>]) -> Option<String> {
    let cell = nth_td(cells, LINKS_COL)?;
    let href = html::elements(cell.inner, "a")
        .into_iter()
        .filter_map(|a| a.attr("href"))
        .find(|h| h.contains(BEACHSAFE_HOST))?;

    // Protocol-relative links resolve the way a browser would.
    Some(if href.starts_with("//") { join!("https:", &href) } else { href })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: &str = r#"
<table class="table js-responsive-table">
  <thead><tr><th>Beach</th><th>Today</th><th>Tomorrow</th><th>More</th></tr></thead>
  <tbody>
    <tr>
      <td>Hampton</td>
      <td><span class="indicator indicator--good">Good</span><p>Suitable for swimming</p></td>
      <td><span class="indicator">Fair</span><p>Swimming not advised after rain</p></td>
      <td><a href="https://beachsafe.org.au/beach/vic/bayside/hampton/hampton">Beachsafe</a></td>
    </tr>
  </tbody>
</table>"#;

    #[test]
    fn reads_all_fields_from_a_matching_row() {
        let snap = parse_report(ROW, "Hampton");
        assert_eq!(snap.today.quality, "Good");
        assert_eq!(snap.today.description, "Suitable for swimming");
        assert_eq!(
            snap.today.conditions_url.as_deref(),
            Some("https://beachsafe.org.au/beach/vic/bayside/hampton/hampton")
        );
        assert_eq!(snap.tomorrow.quality, "Fair");
        assert_eq!(snap.tomorrow.conditions_url, None);
        assert_eq!(snap.updated, None);
    }

    #[test]
    fn header_row_th_is_not_a_td() {
        // Row whose first cells are <th>: child 2 is a <th>, so today is unavailable.
        let doc = r#"<table class="js-responsive-table"><tr><th>X</th><th>Hampton</th><td>y</td></tr></table>"#;
        let snap = parse_report(doc, "Hampton");
        assert_eq!(snap.today, DayReading::unavailable());
    }

    #[test]
    fn protocol_relative_link_gets_https() {
        let doc = r#"<table class="js-responsive-table"><tr><td>Elwood</td><td></td><td></td>
            <td><a href="/local">EPA</a><a href="//beachsafe.org.au/beach/vic/elwood">BS</a></td></tr></table>"#;
        let snap = parse_report(doc, "Elwood");
        assert_eq!(snap.today.conditions_url.as_deref(), Some("https://beachsafe.org.au/beach/vic/elwood"));
    }

    #[test]
    fn row_match_does_not_normalize_text() {
        let doc = r#"<table class="js-responsive-table"><tr><td>St&nbsp;Kilda</td>
            <td><span class="indicator">Good</span><p>ok</p></td></tr></table>"#;
        assert_eq!(parse_report(doc, "St Kilda").today, DayReading::unavailable());
        assert_eq!(parse_report(doc, "St\u{a0}Kilda").today.quality, "Good");
    }

    #[test]
    fn caption_is_kept_verbatim() {
        let doc = "<section class=\"cm-yb-table\"><p>\n  Updated 5:00pm AEST\n   18 October 2026\n</p></section>";
        assert_eq!(find_updated(doc).as_deref(), Some("\n  Updated 5:00pm AEST\n   18 October 2026\n"));
    }

    #[test]
    fn tables_without_the_class_are_ignored() {
        let doc = ROW.replace("js-responsive-table", "other-table");
        assert_eq!(parse_report(&doc, "Hampton"), BeachSnapshot::unavailable());
    }
}

//! Screen renderer
//!
//! Draws a [`UiSnapshot`] onto any monochrome `embedded-graphics` target.
//! The renderer keeps no state; every call redraws the whole screen.

use embedded_graphics::mono_font::ascii::{FONT_5X8, FONT_6X10};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{self, Circle, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use lensbeacon_core::profile::profiles;
use lensbeacon_core::{Screen, UiSnapshot};

use crate::layout::*;

const HEADER: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
const BODY: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&FONT_5X8, BinaryColor::On);
const BODY_INVERTED: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&FONT_5X8, BinaryColor::Off);

/// Draw the screen named by the snapshot
pub fn render<D>(snapshot: &UiSnapshot, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;
    match snapshot.screen {
        Screen::Menu => draw_menu(snapshot, target),
        Screen::Advertising => draw_advertising(snapshot, target),
    }
}

/// Blank the screen (shown after exit)
pub fn render_blank<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)
}

fn draw_menu<D>(snapshot: &UiSnapshot, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    text(MENU_TITLE, MARGIN_X, HEADER_Y, HEADER, target)?;
    rule(HEADER_RULE_Y, target)?;

    for (index, profile) in profiles() {
        let row = index.index();
        let y = menu_row_y(row);
        let style = if index == snapshot.selected {
            Rectangle::new(
                Point::new(0, menu_row_top(row)),
                Size::new(target.bounding_box().size.width, MENU_ROW_HEIGHT),
            )
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(target)?;
            text(">", MENU_MARKER_X, y, BODY_INVERTED, target)?;
            BODY_INVERTED
        } else {
            BODY
        };
        text(profile.short_name, MENU_NAME_X, y, style, target)?;
        text(profile.company_id_label, MENU_CID_X, y, style, target)?;
    }

    rule(MENU_FOOTER_RULE_Y, target)?;
    text(MENU_FOOTER, MARGIN_X, MENU_FOOTER_Y, BODY, target)
}

fn draw_advertising<D>(snapshot: &UiSnapshot, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let profile = snapshot.selected.profile();

    text(ADV_TITLE, MARGIN_X, HEADER_Y, HEADER, target)?;
    let (cx, cy, r) = ADV_INDICATOR;
    Circle::with_center(Point::new(cx, cy), 2 * r + 1)
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(target)?;
    rule(HEADER_RULE_Y, target)?;

    text(profile.long_name, MARGIN_X, ADV_NAME_Y, BODY, target)?;
    text(&company_line(profile), MARGIN_X, ADV_CID_Y, BODY, target)?;
    text(&address_line(&snapshot.config), MARGIN_X, ADV_MAC_Y, BODY, target)?;
    text(&summary_line(&snapshot.config), MARGIN_X, ADV_SUMMARY_Y, BODY, target)?;

    rule(ADV_FOOTER_RULE_Y, target)?;
    text(ADV_FOOTER, MARGIN_X, ADV_FOOTER_Y, BODY, target)
}

fn text<D>(
    s: &str,
    x: i32,
    y: i32,
    style: MonoTextStyle<'static, BinaryColor>,
    target: &mut D,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Text::with_baseline(s, Point::new(x, y), style, Baseline::Alphabetic)
        .draw(target)
        .map(|_| ())
}

/// Full-width horizontal line
fn rule<D>(y: i32, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let right = target.bounding_box().size.width as i32 - 1;
    primitives::Line::new(Point::new(0, y), Point::new(right, y))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::{FrameBuffer, WIDTH};
    use lensbeacon_core::config::{BeaconConfig, TxPower};
    use lensbeacon_core::{DeviceIndex, DEVICE_COUNT};

    fn snapshot(screen: Screen, selected: DeviceIndex) -> UiSnapshot {
        UiSnapshot {
            screen,
            selected,
            advertising: screen == Screen::Advertising,
            config: BeaconConfig::default(),
        }
    }

    fn draw(s: &UiSnapshot) -> FrameBuffer {
        let mut fb = FrameBuffer::new();
        render(s, &mut fb).unwrap();
        fb
    }

    /// Right edge of a menu row is only lit by the highlight box
    fn row_highlighted(fb: &FrameBuffer, row: usize) -> bool {
        fb.pixel(WIDTH - 2, (menu_row_top(row) + 1) as usize)
    }

    #[test]
    fn test_menu_highlights_only_selected_row() {
        for selected in DeviceIndex::ALL {
            let fb = draw(&snapshot(Screen::Menu, selected));
            for row in 0..DEVICE_COUNT {
                assert_eq!(row_highlighted(&fb, row), row == selected.index());
            }
        }
    }

    #[test]
    fn test_menu_chrome() {
        let fb = draw(&snapshot(Screen::Menu, DeviceIndex::MetaTech));
        assert!(fb.pixel(0, HEADER_RULE_Y as usize));
        assert!(fb.pixel(WIDTH - 1, MENU_FOOTER_RULE_Y as usize));
        assert!(fb.count_lit(0, 0, WIDTH, HEADER_RULE_Y as usize) > 0);
        assert!(fb.count_lit(0, MENU_FOOTER_RULE_Y as usize + 1, WIDTH, 8) > 0);
    }

    #[test]
    fn test_menu_unselected_rows_have_text() {
        let fb = draw(&snapshot(Screen::Menu, DeviceIndex::MetaTech));
        let top = menu_row_top(1) as usize;
        assert!(fb.count_lit(MENU_NAME_X as usize, top, 60, 10) > 0);
        assert!(fb.count_lit(MENU_CID_X as usize, top, 30, 10) > 0);
        // No marker on unselected rows
        assert_eq!(fb.count_lit(0, top, MENU_NAME_X as usize, 10), 0);
    }

    #[test]
    fn test_advertising_screen() {
        let fb = draw(&snapshot(Screen::Advertising, DeviceIndex::Luxottica));
        let (cx, cy, _) = ADV_INDICATOR;
        assert!(fb.pixel(cx as usize, cy as usize));
        assert!(fb.pixel(64, HEADER_RULE_Y as usize));
        assert!(fb.pixel(64, ADV_FOOTER_RULE_Y as usize));
        for y in [ADV_NAME_Y, ADV_CID_Y, ADV_MAC_Y, ADV_SUMMARY_Y] {
            assert!(fb.count_lit(0, (y - 7) as usize, WIDTH, 8) > 0);
        }
        // No menu highlight
        assert!(!row_highlighted(&fb, 0));
    }

    #[test]
    fn test_advertising_depends_on_profile_and_config() {
        let lux = draw(&snapshot(Screen::Advertising, DeviceIndex::Luxottica));
        let snap = draw(&snapshot(Screen::Advertising, DeviceIndex::SnapSpectacles));
        assert!(lux != snap);

        let mut s = snapshot(Screen::Advertising, DeviceIndex::Luxottica);
        s.config.tx_power = TxPower::ZerodBm;
        assert!(draw(&s) != lux);
    }

    #[test]
    fn test_render_replaces_previous_frame() {
        let mut fb = FrameBuffer::new();
        render(&snapshot(Screen::Advertising, DeviceIndex::MetaInc), &mut fb).unwrap();
        render(&snapshot(Screen::Menu, DeviceIndex::MetaInc), &mut fb).unwrap();
        assert!(fb == draw(&snapshot(Screen::Menu, DeviceIndex::MetaInc)));
    }

    #[test]
    fn test_blank() {
        let mut fb = draw(&snapshot(Screen::Menu, DeviceIndex::MetaTech));
        render_blank(&mut fb).unwrap();
        assert!(fb.is_blank());
    }
}

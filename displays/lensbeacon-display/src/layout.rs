//! Screen geometry and text lines
//!
//! Y coordinates are text baselines.

use core::fmt::Write;

use heapless::String;
use lensbeacon_core::config::BeaconConfig;
use lensbeacon_core::DeviceProfile;

/// Longest line the renderer formats
pub const LINE_LEN: usize = 32;

/// One formatted line of text
pub type Line = String<LINE_LEN>;

/// Left margin for text
pub const MARGIN_X: i32 = 2;

/// Header baseline
pub const HEADER_Y: i32 = 10;

/// Header rule
pub const HEADER_RULE_Y: i32 = 12;

/// Menu title
pub const MENU_TITLE: &str = "Glasses BLE Emulator";

/// Baseline of the first menu row
pub const MENU_FIRST_ROW_Y: i32 = 24;

/// Distance between menu rows
pub const MENU_ROW_PITCH: i32 = 10;

/// Highlight box height
pub const MENU_ROW_HEIGHT: u32 = 10;

/// Selection marker column
pub const MENU_MARKER_X: i32 = 4;

/// Profile name column
pub const MENU_NAME_X: i32 = 12;

/// Company ID column
pub const MENU_CID_X: i32 = 92;

/// Menu footer rule
pub const MENU_FOOTER_RULE_Y: i32 = 56;

/// Menu footer baseline
pub const MENU_FOOTER_Y: i32 = 63;

/// Menu footer text
pub const MENU_FOOTER: &str = "[Ok] Advertise  [Bk] Exit";

/// Advertising header text
pub const ADV_TITLE: &str = "Broadcasting...";

/// Centre and radius of the on-air indicator
pub const ADV_INDICATOR: (i32, i32, u32) = (122, 6, 4);

/// Baselines of the four detail lines
pub const ADV_NAME_Y: i32 = 24;
pub const ADV_CID_Y: i32 = 34;
pub const ADV_MAC_Y: i32 = 44;
pub const ADV_SUMMARY_Y: i32 = 54;

/// Advertising footer rule
pub const ADV_FOOTER_RULE_Y: i32 = 56;

/// Advertising footer baseline
pub const ADV_FOOTER_Y: i32 = 64;

/// Advertising footer text
pub const ADV_FOOTER: &str = "[Back] Stop";

/// Baseline of menu row `row`
pub const fn menu_row_y(row: usize) -> i32 {
    MENU_FIRST_ROW_Y + row as i32 * MENU_ROW_PITCH
}

/// Top edge of the highlight box for menu row `row`
pub const fn menu_row_top(row: usize) -> i32 {
    menu_row_y(row) - 8
}

/// `Company ID: 0x0D53`
pub fn company_line(profile: &DeviceProfile) -> Line {
    let mut line = Line::new();
    // Longest label is 6 characters, well inside LINE_LEN
    let _ = write!(line, "Company ID: {}", profile.company_id_label);
    line
}

/// `MAC: DE:9A:3C:1D:87:42`
pub fn address_line(config: &BeaconConfig) -> Line {
    let mut line = Line::new();
    let _ = write!(line, "MAC: {}", config.address);
    line
}

/// `100-200ms  +6dBm  All Ch`
pub fn summary_line(config: &BeaconConfig) -> Line {
    let mut line = Line::new();
    let _ = write!(line, "{}", config.summary());
    line
}

//! Icon substitution
//!
//! Product and device icons are exported as lazy-loaded SVG images. Known
//! ones become `:symbol:` text that the target format renders as an icon.

use crate::dom::{self, NodeRef};
use crate::selector::{Role, RoleMap};
use crate::url_utils;

/// Icon file name to symbol name.
pub const ICONS_MAPPING: &[(&str, &str)] = &[
    // Adobe apps
    ("desktop_illustrator.svg", "adobe-illustrator"),
    ("illustrator.svg", "adobe-illustrator"),
    ("Draw_EOL_Page_icon-Ps.svg", "adobe-photoshop"),
    ("photoshop.svg", "adobe-photoshop"),
    ("indesign.svg", "adobe-indesign"),
    ("mnemonic-Fresco-32x32.svg", "adobe-fresco"),
    ("dimension.svg", "adobe-dimension"),
    ("adobe-fonts.svg", "adobe-fonts"),
    ("stock.svg", "adobe-stock"),
    ("incopy.svg", "adobe-incopy"),
    ("acrobat_reader_appicon_noshadow_256.svg", "adobe-acrobat-reader"),
    ("Adobe_Express-01.svg", "adobe-express"),
    ("cc_express_appicon_256.svg", "adobe-express"),
    ("logo_cc.svg", "adobe-creative-cloud"),
    ("creative-cloud.svg", "adobe-creative-cloud"),
    // Devices
    ("S_DeviceDesktop_22_N.svg", "device-desktop"),
    ("S_DeviceTablet_22_N.svg", "device-tablet"),
    ("S_TabletMobile_22_N.svg", "device-table-mobile"),
    ("S_DevicePhone_22_N.svg", "device-phone"),
    ("icon-mobile-tablet-desktop.svg", "device-mobile-table-desktop"),
];

/// Look up the symbol for an icon file name. `extra` entries win.
#[must_use]
pub fn icon_symbol<'m>(file_name: &str, extra: &'m [(String, String)]) -> Option<&'m str> {
    extra
        .iter()
        .find(|(name, _)| name == file_name)
        .map(|(_, symbol)| symbol.as_str())
        .or_else(|| {
            ICONS_MAPPING
                .iter()
                .find(|(name, _)| *name == file_name)
                .map(|(_, symbol)| *symbol)
        })
}

/// Replace mapped icon images by `<span>:symbol:</span>`.
///
/// Icons without a `src` are removed. Unmapped icons are logged, left in
/// place, and their `src` returned so the caller can report them.
pub fn replace_icons<'a>(body: &NodeRef<'a>, roles: &RoleMap, extra: &[(String, String)]) -> Vec<String> {
    let mut unmapped = Vec::new();
    for img in roles.find_all(body, Role::Icon) {
        let Some(src) = dom::non_empty_attr(&img, "src") else {
            dom::detach(&img);
            continue;
        };

        match icon_symbol(url_utils::file_name(&src), extra) {
            Some(symbol) => {
                let span = dom::new_element_with_text(&img, "span", &format!(":{symbol}:"));
                dom::replace(&img, &span);
            }
            None => {
                tracing::warn!(src = %src, "no mapping found for icon");
                unmapped.push(src);
            }
        }
    }
    unmapped
}

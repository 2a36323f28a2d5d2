use fltk::{app, enums::Color, frame::Frame, group::Flex, prelude::*};

use crate::app::controller::{Notice, NoticeLevel};
use super::main_window::BANNER_HEIGHT;

const DISPLAY_SECONDS: f64 = 3.0;

fn level_colors(level: NoticeLevel) -> (Color, Color) {
    match level {
        NoticeLevel::Info => (Color::from_rgb(214, 216, 222), Color::from_rgb(40, 40, 40)),
        NoticeLevel::Success => (Color::from_rgb(212, 237, 218), Color::from_rgb(21, 87, 36)),
        NoticeLevel::Warning => (Color::from_rgb(255, 243, 205), Color::from_rgb(133, 100, 4)),
        NoticeLevel::Error => (Color::from_rgb(248, 215, 218), Color::from_rgb(114, 28, 36)),
    }
}

/// Show a transient banner under the tab strip; it hides itself after a few
/// seconds. A newer notice simply replaces the text and restarts the clock
/// via its own timeout.
pub fn show_notice(banner: &mut Frame, flex: &mut Flex, notice: &Notice) {
    let (bg, fg) = level_colors(notice.level);
    banner.set_color(bg);
    banner.set_label_color(fg);
    banner.set_label(&notice.text);
    flex.fixed(banner, BANNER_HEIGHT);
    banner.show();
    relayout(flex);

    let shown_label = notice.text.clone();
    let mut banner = banner.clone();
    let mut flex = flex.clone();
    app::add_timeout3(DISPLAY_SECONDS, move |_| {
        // A newer notice owns the banner now; leave it alone
        if banner.label() != shown_label {
            return;
        }
        banner.hide();
        flex.fixed(&banner, 0);
        relayout(&mut flex);
    });
}

fn relayout(flex: &mut Flex) {
    let (x, y, w, h) = (flex.x(), flex.y(), flex.w(), flex.h());
    flex.resize(x, y, w, h);
    app::redraw();
}

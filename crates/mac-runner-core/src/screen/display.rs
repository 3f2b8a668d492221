use crate::{
    CoreResult,
    screen::{Rect, ScreenSize},
};

/// Height of the Dock, in points.
pub const DOCK_HEIGHT: u32 = 76;

/// Height of the menu bar, in points.
pub const MENU_BAR_HEIGHT: u32 = 22;

/// Size of the main display.
///
/// # Errors
///
/// Returns [`CoreError::ScreenUnavailable`](crate::CoreError::ScreenUnavailable)
/// if the display reports an empty size, or on platforms other than macOS.
#[cfg(target_os = "macos")]
#[track_caller]
pub fn screen_size() -> CoreResult<ScreenSize> {
    use crate::CoreError;

    use std::panic::Location;

    use core_graphics::display::CGDisplay;
    use error_location::ErrorLocation;
    use tracing::debug;

    let bounds = CGDisplay::main().bounds();

    if bounds.size.width <= 0.0 || bounds.size.height <= 0.0 {
        return Err(CoreError::ScreenUnavailable {
            reason: "main display reported an empty size".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let size = ScreenSize {
        width: bounds.size.width as u32,
        height: bounds.size.height as u32,
    };

    debug!(width = size.width, height = size.height, "Screen size");

    Ok(size)
}

/// Size of the main display.
///
/// # Errors
///
/// Always returns [`CoreError::ScreenUnavailable`](crate::CoreError::ScreenUnavailable)
/// on this platform.
#[cfg(not(target_os = "macos"))]
#[track_caller]
pub fn screen_size() -> CoreResult<ScreenSize> {
    use crate::CoreError;

    use std::panic::Location;

    use error_location::ErrorLocation;

    Err(CoreError::ScreenUnavailable {
        reason: "screen size is only available on macOS".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Region of `screen` below the menu bar and above the Dock.
pub fn usable_area(screen: ScreenSize) -> Rect {
    Rect::new(
        0,
        MENU_BAR_HEIGHT as i32,
        screen.width,
        screen.height.saturating_sub(MENU_BAR_HEIGHT + DOCK_HEIGHT),
    )
}

// ANSI/VT100 sequences for highlight styling of the rendered widget.

#[macro_export]
macro_rules! csi {
    ($suffix:literal) => {
        concat!("\x1B[", $suffix)
    };
}

/// Reset terminal styling to defaults.
pub const STYLE_RESET: &str = crate::csi!("0m");
/// Bold text, used for the active date column header.
pub const STYLE_BOLD: &str = crate::csi!("1m");
/// Inverse video, used for the active slot button.
pub const STYLE_INVERSE: &str = crate::csi!("7m");
/// Light gray foreground for the paging affordances.
pub const FG_LIGHT_GRAY: &str = crate::csi!("37m");

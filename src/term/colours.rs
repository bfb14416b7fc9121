use std::fmt;

use crate::term::ANSI_PREFIX;

/// Foreground colour codes.
///
/// The `Dark*` variants are the original 8 colours; the plain names map to
/// their bright counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fg {
    /// Code `30`.
    Black,
    /// Code `31`.
    DarkRed,
    /// Code `32`.
    DarkGreen,
    /// Code `33`.
    DarkYellow,
    /// Code `34`.
    DarkBlue,
    /// Code `35`.
    DarkMagenta,
    /// Code `36`.
    DarkCyan,
    /// Code `37`.
    DarkWhite,
    /// Code `91`.
    Red,
    /// Code `92`.
    Green,
    /// Code `93`.
    Yellow,
    /// Code `94`.
    Blue,
    /// Code `95`.
    Magenta,
    /// Code `96`.
    Cyan,
    /// Code `97`.
    White,
    /// 24-bit colour, code `38;2;r;g;b`.
    Rgb(u8, u8, u8),
}

impl fmt::Display for Fg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fg::Black => write!(f, "{ANSI_PREFIX}30m"),
            Fg::DarkRed => write!(f, "{ANSI_PREFIX}31m"),
            Fg::DarkGreen => write!(f, "{ANSI_PREFIX}32m"),
            Fg::DarkYellow => write!(f, "{ANSI_PREFIX}33m"),
            Fg::DarkBlue => write!(f, "{ANSI_PREFIX}34m"),
            Fg::DarkMagenta => write!(f, "{ANSI_PREFIX}35m"),
            Fg::DarkCyan => write!(f, "{ANSI_PREFIX}36m"),
            Fg::DarkWhite => write!(f, "{ANSI_PREFIX}37m"),
            Fg::Red => write!(f, "{ANSI_PREFIX}91m"),
            Fg::Green => write!(f, "{ANSI_PREFIX}92m"),
            Fg::Yellow => write!(f, "{ANSI_PREFIX}93m"),
            Fg::Blue => write!(f, "{ANSI_PREFIX}94m"),
            Fg::Magenta => write!(f, "{ANSI_PREFIX}95m"),
            Fg::Cyan => write!(f, "{ANSI_PREFIX}96m"),
            Fg::White => write!(f, "{ANSI_PREFIX}97m"),
            Fg::Rgb(r, g, b) => write!(f, "{ANSI_PREFIX}38;2;{r};{g};{b}m"),
        }
    }
}

/// Background colour codes, mirroring [`Fg`] shifted into the `4x`/`10x`
/// ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bg {
    /// Code `40`.
    Black,
    /// Code `41`.
    DarkRed,
    /// Code `42`.
    DarkGreen,
    /// Code `43`.
    DarkYellow,
    /// Code `44`.
    DarkBlue,
    /// Code `45`.
    DarkMagenta,
    /// Code `46`.
    DarkCyan,
    /// Code `47`.
    DarkWhite,
    /// Code `101`.
    Red,
    /// Code `102`.
    Green,
    /// Code `103`.
    Yellow,
    /// Code `104`.
    Blue,
    /// Code `105`.
    Magenta,
    /// Code `106`.
    Cyan,
    /// Code `107`.
    White,
    /// 24-bit colour, code `48;2;r;g;b`.
    Rgb(u8, u8, u8),
}

impl fmt::Display for Bg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bg::Black => write!(f, "{ANSI_PREFIX}40m"),
            Bg::DarkRed => write!(f, "{ANSI_PREFIX}41m"),
            Bg::DarkGreen => write!(f, "{ANSI_PREFIX}42m"),
            Bg::DarkYellow => write!(f, "{ANSI_PREFIX}43m"),
            Bg::DarkBlue => write!(f, "{ANSI_PREFIX}44m"),
            Bg::DarkMagenta => write!(f, "{ANSI_PREFIX}45m"),
            Bg::DarkCyan => write!(f, "{ANSI_PREFIX}46m"),
            Bg::DarkWhite => write!(f, "{ANSI_PREFIX}47m"),
            Bg::Red => write!(f, "{ANSI_PREFIX}101m"),
            Bg::Green => write!(f, "{ANSI_PREFIX}102m"),
            Bg::Yellow => write!(f, "{ANSI_PREFIX}103m"),
            Bg::Blue => write!(f, "{ANSI_PREFIX}104m"),
            Bg::Magenta => write!(f, "{ANSI_PREFIX}105m"),
            Bg::Cyan => write!(f, "{ANSI_PREFIX}106m"),
            Bg::White => write!(f, "{ANSI_PREFIX}107m"),
            Bg::Rgb(r, g, b) => write!(f, "{ANSI_PREFIX}48;2;{r};{g};{b}m"),
        }
    }
}

/// Text attribute codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Code `0`: clear every attribute and colour.
    Reset,
    /// Code `1`.
    Bold,
    /// Code `2`.
    Faint,
    /// Code `4`.
    Underline,
    /// Code `21`.
    DoubleUnderline,
    /// Code `5`.
    SlowBlink,
    /// Code `6`.
    FastBlink,
    /// Code `7`.
    Inverse,
    /// Code `22`: bold and faint off.
    BoldOff,
    /// Code `24`.
    UnderlineOff,
    /// Code `25`.
    BlinkOff,
    /// Code `27`.
    InverseOff,
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Style::Reset => 0,
            Style::Bold => 1,
            Style::Faint => 2,
            Style::Underline => 4,
            Style::DoubleUnderline => 21,
            Style::SlowBlink => 5,
            Style::FastBlink => 6,
            Style::Inverse => 7,
            Style::BoldOff => 22,
            Style::UnderlineOff => 24,
            Style::BlinkOff => 25,
            Style::InverseOff => 27,
        };
        write!(f, "{ANSI_PREFIX}{code}m")
    }
}

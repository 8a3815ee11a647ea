use ratatui::style::Color;

pub struct Palette {
    pub base: Color,
    pub crust: Color,
    pub surface0: Color,
    pub surface1: Color,
    pub overlay0: Color,
    pub text: Color,
    pub subtext0: Color,
    pub blue: Color,
    pub green: Color,
    pub yellow: Color,
    pub red: Color,
    pub mauve: Color,
    pub teal: Color,
    pub peach: Color,
}

pub const SLATE: Palette = Palette {
    base: Color::Rgb(30, 34, 42),
    crust: Color::Rgb(22, 25, 31),
    surface0: Color::Rgb(49, 55, 67),
    surface1: Color::Rgb(64, 71, 86),
    overlay0: Color::Rgb(110, 118, 135),
    text: Color::Rgb(220, 224, 232),
    subtext0: Color::Rgb(170, 176, 190),
    blue: Color::Rgb(116, 160, 232),
    green: Color::Rgb(142, 196, 128),
    yellow: Color::Rgb(229, 196, 110),
    red: Color::Rgb(224, 108, 117),
    mauve: Color::Rgb(186, 140, 214),
    teal: Color::Rgb(104, 190, 186),
    peach: Color::Rgb(236, 150, 104),
};

pub const PAPER: Palette = Palette {
    base: Color::Rgb(250, 248, 244),
    crust: Color::Rgb(232, 228, 220),
    surface0: Color::Rgb(222, 218, 210),
    surface1: Color::Rgb(204, 199, 190),
    overlay0: Color::Rgb(140, 136, 128),
    text: Color::Rgb(48, 46, 44),
    subtext0: Color::Rgb(92, 88, 84),
    blue: Color::Rgb(40, 96, 184),
    green: Color::Rgb(56, 130, 64),
    yellow: Color::Rgb(170, 120, 20),
    red: Color::Rgb(184, 48, 56),
    mauve: Color::Rgb(128, 72, 160),
    teal: Color::Rgb(24, 128, 128),
    peach: Color::Rgb(196, 96, 40),
};

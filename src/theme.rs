//! Design tokens shared by the primitives, plus the vertical rhythm helpers.

/// Responsive breakpoints, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints([&'static str; 3]);

impl Breakpoints {
    pub const fn sm(&self) -> &'static str {
        self.0[0]
    }

    pub const fn md(&self) -> &'static str {
        self.0[1]
    }

    pub const fn lg(&self) -> &'static str {
        self.0[2]
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub breakpoints: Breakpoints,
    /// Spacing scale in px, indexed positionally.
    pub space: [u32; 9],
}

pub const THEME: Theme = Theme {
    breakpoints: Breakpoints(["40em", "52em", "64em"]),
    space: [0, 4, 8, 16, 32, 64, 128, 256, 512],
};

impl Theme {
    /// Resolves a spacing index. Indices past the scale are taken as raw px.
    pub fn space(&self, index: usize) -> String {
        match self.space.get(index) {
            Some(px) => format!("{px}px"),
            None => format!("{index}px"),
        }
    }

    /// Global stylesheet: base typography stepped up at each breakpoint.
    pub fn stylesheet(&self) -> String {
        let mut css = format!(
            "html {{ font-size: 100%; line-height: {BASE_LINE_HEIGHT}; }}\n\
             body {{ margin: 0; color: hsla(0, 0%, 0%, 0.9); \
             font-family: Merriweather, Georgia, serif; }}\n\
             a {{ color: #007acc; text-decoration: none; }}\n"
        );
        for (step, breakpoint) in self.breakpoints.iter().enumerate() {
            let percent = 100 + (step + 1) * 5;
            css.push_str(&format!(
                "@media (min-width: {breakpoint}) {{ html {{ font-size: {percent}%; }} }}\n"
            ));
        }
        css
    }
}

const BASE_LINE_HEIGHT: f64 = 1.75;
const SCALE_RATIO: f64 = 2.5;

fn rem(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    format!("{rounded}rem")
}

/// `lines` units of the base line height.
pub fn rhythm(lines: f64) -> String {
    rem(lines * BASE_LINE_HEIGHT)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    pub font_size: String,
    pub line_height: String,
}

/// Modular type scale. The line height snaps up to whole half-rhythm units.
pub fn scale(value: f64) -> Scale {
    let size = SCALE_RATIO.powf(value);
    let half = BASE_LINE_HEIGHT / 2.0;
    let lines = (size / half).ceil().max(1.0);
    Scale {
        font_size: rem(size),
        line_height: rem(lines * half),
    }
}

use crate::theme::THEME;

/// A spacing value: a position on the theme's space scale, or a literal CSS length.
///
/// Negative scale positions produce negative lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Space {
    Scale(i32),
    Raw(String),
}

impl Space {
    fn resolve(&self) -> String {
        match self {
            Space::Scale(index) if *index < 0 => {
                format!("-{}", THEME.space(index.unsigned_abs() as usize))
            }
            Space::Scale(index) => THEME.space(*index as usize),
            Space::Raw(value) => value.clone(),
        }
    }
}

impl From<i32> for Space {
    fn from(index: i32) -> Self {
        Space::Scale(index)
    }
}

impl From<&str> for Space {
    fn from(value: &str) -> Self {
        Space::Raw(value.to_string())
    }
}

impl From<String> for Space {
    fn from(value: String) -> Self {
        Space::Raw(value)
    }
}

/// A width/height value: px for plain numbers, literal CSS otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Size {
    Px(i32),
    Raw(String),
}

impl Size {
    fn resolve(&self) -> String {
        match self {
            Size::Px(px) => format!("{px}px"),
            Size::Raw(value) => value.clone(),
        }
    }
}

impl From<i32> for Size {
    fn from(px: i32) -> Self {
        Size::Px(px)
    }
}

impl From<&str> for Size {
    fn from(value: &str) -> Self {
        Size::Raw(value.to_string())
    }
}

impl From<String> for Size {
    fn from(value: String) -> Self {
        Size::Raw(value)
    }
}

/// Ordered CSS declarations for one element, built up fluently:
///
/// ```ignore
/// let badge = Style::new().px(1).py("2px").border("1px solid orange").color("orange");
/// ```
///
/// A later declaration of the same property overrides an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    declarations: Vec<(&'static str, String)>,
}

macro_rules! space_props {
    ($($name:ident => [$($prop:literal),+];)*) => {
        $(
            pub fn $name(self, value: impl Into<Space>) -> Self {
                self.space(&[$($prop),+], value.into())
            }
        )*
    };
}

macro_rules! size_props {
    ($($name:ident => $prop:literal;)*) => {
        $(
            pub fn $name(self, value: impl Into<Size>) -> Self {
                let size: Size = value.into();
                self.set($prop, size.resolve())
            }
        )*
    };
}

macro_rules! raw_props {
    ($($name:ident => $prop:literal;)*) => {
        $(
            pub fn $name(self, value: impl Into<String>) -> Self {
                self.set($prop, value)
            }
        )*
    };
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an arbitrary property.
    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some(existing) => existing.1 = value,
            None => self.declarations.push((property, value)),
        }
        self
    }

    fn space(self, properties: &[&'static str], value: Space) -> Self {
        let resolved = value.resolve();
        properties
            .iter()
            .fold(self, |style, property| style.set(*property, resolved.clone()))
    }

    space_props! {
        m => ["margin"];
        mx => ["margin-left", "margin-right"];
        my => ["margin-top", "margin-bottom"];
        mt => ["margin-top"];
        mr => ["margin-right"];
        mb => ["margin-bottom"];
        ml => ["margin-left"];
        p => ["padding"];
        px => ["padding-left", "padding-right"];
        py => ["padding-top", "padding-bottom"];
        pt => ["padding-top"];
        pr => ["padding-right"];
        pb => ["padding-bottom"];
        pl => ["padding-left"];
        gap => ["gap"];
    }

    size_props! {
        width => "width";
        height => "height";
        max_width => "max-width";
        min_width => "min-width";
        max_height => "max-height";
        min_height => "min-height";
    }

    raw_props! {
        border => "border";
        border_radius => "border-radius";
        color => "color";
        bg => "background-color";
        display => "display";
        align_items => "align-items";
        justify_content => "justify-content";
        flex_direction => "flex-direction";
        flex_wrap => "flex-wrap";
        font_family => "font-family";
        font_size => "font-size";
        line_height => "line-height";
    }

    pub fn bold(self) -> Self {
        self.set("font-weight", "700")
    }

    pub fn crossed(self) -> Self {
        self.set("text-decoration", "line-through")
    }

    pub fn no_list_style(self) -> Self {
        self.set("list-style", "none")
    }

    /// Applies `other` on top of `self`.
    pub fn merge(self, other: &Style) -> Self {
        other
            .declarations
            .iter()
            .fold(self, |style, (property, value)| style.set(*property, value.clone()))
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Inline `style` attribute value, `None` when nothing is set.
    pub fn to_css(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let css = self
            .declarations
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ");
        Some(css)
    }
}

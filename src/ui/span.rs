use crate::ui::style::Style;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    NoWrap,
    Wrap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
    pub wrap_mode: WrapMode,
}

impl Span {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
            wrap_mode: WrapMode::Wrap,
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            wrap_mode: WrapMode::Wrap,
        }
    }

    pub fn no_wrap(mut self) -> Self {
        self.wrap_mode = WrapMode::NoWrap;
        self
    }

    pub fn width(&self) -> usize {
        UnicodeWidthStr::width(self.text.as_str())
    }

    /// Split into a head of at most `width` display columns and the
    /// remaining tail, preserving style and wrap mode.
    pub fn split_at_width(&self, width: usize) -> (Span, Option<Span>) {
        let mut used = 0usize;
        let mut head = String::new();
        let mut tail = String::new();

        for ch in self.text.chars() {
            let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
            if tail.is_empty() && used + ch_width <= width {
                head.push(ch);
                used += ch_width;
            } else {
                tail.push(ch);
            }
        }

        let head_span = Span {
            text: head,
            style: self.style,
            wrap_mode: self.wrap_mode,
        };
        let tail_span = if tail.is_empty() {
            None
        } else {
            Some(Span {
                text: tail,
                style: self.style,
                wrap_mode: self.wrap_mode,
            })
        };

        (head_span, tail_span)
    }
}

pub type SpanLine = Vec<Span>;

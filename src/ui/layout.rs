use crate::ui::span::{Span, SpanLine, WrapMode};

/// Fits span lines to the terminal width. Wrappable spans continue on the
/// next line; no-wrap spans are clipped. Blank lines pass through.
pub struct Layout;

impl Layout {
    pub fn compose(lines: &[SpanLine], width: u16) -> Vec<SpanLine> {
        let width = width as usize;
        if width == 0 {
            return lines.to_vec();
        }

        let mut out = Vec::with_capacity(lines.len());
        for line in lines {
            let mut ctx = LineContext::new(width);
            for span in line {
                ctx.place_span(span.clone());
            }
            out.extend(ctx.finish());
        }
        out
    }
}

struct LineContext {
    lines: Vec<SpanLine>,
    current: SpanLine,
    width: usize,
    current_width: usize,
}

impl LineContext {
    fn new(width: usize) -> Self {
        Self {
            lines: Vec::new(),
            current: Vec::new(),
            width,
            current_width: 0,
        }
    }

    fn place_span(&mut self, span: Span) {
        if span.width() == 0 {
            return;
        }

        match span.wrap_mode {
            WrapMode::NoWrap => self.place_no_wrap(span),
            WrapMode::Wrap => self.place_wrap(span),
        }
    }

    fn place_no_wrap(&mut self, span: Span) {
        let span_width = span.width();
        if self.current_width > 0 && span_width > self.available_width() {
            self.new_line();
        }

        let (head, _) = if span_width > self.width {
            span.split_at_width(self.width)
        } else {
            (span, None)
        };

        self.push_span(head);
    }

    fn place_wrap(&mut self, mut span: Span) {
        while span.width() > 0 {
            if self.current_width >= self.width {
                self.new_line();
            }

            let available = self.available_width();
            if span.width() <= available {
                self.push_span(span);
                return;
            }

            let (head, tail) = span.split_at_width(available);
            if head.width() > 0 {
                self.push_span(head);
            }
            self.new_line();

            match tail {
                Some(rest) => span = rest,
                None => return,
            }
        }
    }

    fn push_span(&mut self, span: Span) {
        self.current_width += span.width();
        self.current.push(span);
    }

    fn new_line(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
        self.current_width = 0;
    }

    fn available_width(&self) -> usize {
        self.width.saturating_sub(self.current_width)
    }

    fn finish(mut self) -> Vec<SpanLine> {
        self.lines.push(self.current);
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::Layout;
    use crate::ui::span::{Span, SpanLine};

    fn text_of(lines: &[SpanLine]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.iter().map(|span| span.text.as_str()).collect())
            .collect()
    }

    #[test]
    fn short_lines_pass_through() {
        let lines = vec![vec![Span::new("Contact Form")], vec![]];
        let composed = Layout::compose(&lines, 80);
        assert_eq!(text_of(&composed), ["Contact Form", ""]);
    }

    #[test]
    fn long_wrappable_spans_continue_on_the_next_line() {
        let lines = vec![vec![Span::new("abcdefghij")]];
        let composed = Layout::compose(&lines, 4);
        assert_eq!(text_of(&composed), ["abcd", "efgh", "ij"]);
    }

    #[test]
    fn no_wrap_spans_are_clipped() {
        let lines = vec![vec![Span::new("abcdefghij").no_wrap()]];
        let composed = Layout::compose(&lines, 4);
        assert_eq!(text_of(&composed), ["abcd"]);
    }

    #[test]
    fn zero_width_leaves_lines_untouched() {
        let lines = vec![vec![Span::new("abc")]];
        let composed = Layout::compose(&lines, 0);
        assert_eq!(text_of(&composed), ["abc"]);
    }
}

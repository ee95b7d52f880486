use crate::core::state::AppState;
use crate::terminal::{CursorPos, Terminal};
use crate::ui::layout::Layout;
use crate::ui::span::{Span, SpanLine};
use crate::ui::theme::Theme;
use std::io;
use unicode_width::UnicodeWidthStr;

const INDENT: &str = "  ";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
    pub cursor: Option<CursorPos>,
}

impl RenderFrame {
    /// The frame's visible text, one string per line. This is the queryable
    /// surface headless consumers and tests assert against.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| {
                line.iter()
                    .map(|span| span.text.as_str())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Builds frames as a pure function of the app state and paints them in
/// place below the shell prompt.
pub struct Renderer {
    origin_row: Option<u16>,
    drawn: u16,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            origin_row: None,
            drawn: 0,
        }
    }

    pub fn render(state: &AppState, theme: &Theme, width: u16) -> RenderFrame {
        let mut frame = RenderFrame::default();
        let mut row: u16 = 0;

        frame
            .lines
            .push(vec![Span::styled("Contact Form", theme.header)]);
        row = row.saturating_add(1);

        frame.lines.push(vec![Span::styled(
            "Hint: Tab/Shift+Tab to move, Enter to submit, Esc to quit",
            theme.hint,
        )]);
        row = row.saturating_add(1);

        frame.lines.push(vec![]);
        row = row.saturating_add(1);

        for input in &state.inputs {
            let focused = input.is_focused();
            let label_style = if focused { theme.focused } else { theme.label };
            let show_placeholder = input.value().is_empty() && input.placeholder().is_some();

            if input.block_label() {
                frame.lines.push(vec![Span::styled(
                    format!("{}:", input.label()),
                    label_style,
                )]);
                row = row.saturating_add(1);

                if show_placeholder {
                    if focused && frame.cursor.is_none() {
                        frame.cursor = Some(CursorPos {
                            col: INDENT.len() as u16,
                            row,
                        });
                    }
                    frame.lines.push(vec![
                        Span::new(INDENT),
                        Span::styled(input.placeholder().unwrap_or_default(), theme.placeholder),
                    ]);
                    row = row.saturating_add(1);
                } else {
                    if focused && frame.cursor.is_none() {
                        if let Some(cursor) = input.content_cursor() {
                            frame.cursor = Some(CursorPos {
                                col: (INDENT.len() + cursor.col) as u16,
                                row: row.saturating_add(cursor.row as u16),
                            });
                        }
                    }
                    for content_line in input.render_content() {
                        let mut spans = vec![Span::new(INDENT)];
                        spans.extend(content_line);
                        frame.lines.push(spans);
                        row = row.saturating_add(1);
                    }
                }
            } else if input.field().is_some() {
                let label = format!("{}: ", input.label());
                let label_width = UnicodeWidthStr::width(label.as_str());
                let mut spans = vec![Span::styled(label, label_style)];

                if show_placeholder {
                    spans.push(Span::styled(
                        input.placeholder().unwrap_or_default(),
                        theme.placeholder,
                    ));
                    if focused && frame.cursor.is_none() {
                        frame.cursor = Some(CursorPos {
                            col: label_width as u16,
                            row,
                        });
                    }
                } else {
                    if let Some(content_line) = input.render_content().into_iter().next() {
                        spans.extend(content_line);
                    }
                    if focused && frame.cursor.is_none() {
                        if let Some(cursor) = input.content_cursor() {
                            frame.cursor = Some(CursorPos {
                                col: (label_width + cursor.col) as u16,
                                row,
                            });
                        }
                    }
                }

                frame.lines.push(spans);
                row = row.saturating_add(1);
            } else {
                let mut spans: SpanLine =
                    input.render_content().into_iter().next().unwrap_or_default();
                if focused {
                    for span in &mut spans {
                        span.style = theme.focused;
                    }
                }
                frame.lines.push(spans);
                row = row.saturating_add(1);
            }

            if let Some(field) = input.field() {
                if let Some(message) = state.form.error(field) {
                    frame.lines.push(vec![Span::styled(
                        format!("{INDENT}! Error: {message}"),
                        theme.error,
                    )]);
                    row = row.saturating_add(1);
                }
            }
        }

        if let Some(submission) = state.form.submission() {
            frame.lines.push(vec![]);
            frame
                .lines
                .push(vec![Span::styled("Submitted:", theme.header)]);
            frame.lines.push(vec![Span::new(format!(
                "First Name: {}",
                submission.first_name
            ))]);
            frame.lines.push(vec![Span::new(format!(
                "Last Name: {}",
                submission.last_name
            ))]);
            frame
                .lines
                .push(vec![Span::new(format!("Email: {}", submission.email))]);
            if let Some(message) = &submission.message {
                for (index, part) in message.split('\n').enumerate() {
                    if index == 0 {
                        frame.lines.push(vec![Span::new(format!("Message: {part}"))]);
                    } else {
                        frame.lines.push(vec![Span::new(format!("{INDENT}{part}"))]);
                    }
                }
            }
        }

        frame.lines = Layout::compose(&frame.lines, width);
        frame
    }

    pub fn draw(
        &mut self,
        state: &AppState,
        theme: &Theme,
        terminal: &mut Terminal,
    ) -> io::Result<()> {
        terminal.refresh_size()?;
        let size = terminal.size();
        let frame = Self::render(state, theme, size.width);

        if self.origin_row.is_none() {
            terminal.refresh_cursor_position()?;
            self.origin_row = Some(terminal.cursor_position().row);
        }

        let frame_len = frame.lines.len();
        let fit = frame_len.min(size.height as usize) as u16;
        let mut origin = self.origin_row.unwrap_or(0);
        if origin.saturating_add(fit) > size.height {
            origin = size.height.saturating_sub(fit);
        }
        self.origin_row = Some(origin);

        let available = size.height.saturating_sub(origin) as usize;
        let skip = frame_len.saturating_sub(available);

        terminal.queue_hide_cursor()?;
        terminal.queue_move_cursor(0, origin)?;
        terminal.queue_clear_from_cursor_down()?;

        for (offset, line) in frame.lines.iter().skip(skip).enumerate() {
            terminal.queue_move_cursor(0, origin.saturating_add(offset as u16))?;
            terminal.write_span_line(line)?;
        }
        self.drawn = (frame_len - skip) as u16;

        if let Some(cursor) = frame.cursor {
            if (cursor.row as usize) >= skip {
                let row = origin.saturating_add(cursor.row - skip as u16);
                let col = cursor.col.min(size.width.saturating_sub(1));
                terminal.queue_move_cursor(col, row)?;
                terminal.queue_show_cursor()?;
            }
        }

        terminal.flush()
    }

    pub fn move_to_end(&mut self, terminal: &mut Terminal) -> io::Result<()> {
        let Some(origin) = self.origin_row else {
            return Ok(());
        };

        let size = terminal.size();
        let row = origin
            .saturating_add(self.drawn)
            .min(size.height.saturating_sub(1));
        terminal.move_cursor(0, row)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

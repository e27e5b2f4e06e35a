use ratatui::{layout::Flex, prelude::*, widgets::*};

use crate::presentation::view::Alert;

/// Modal box centered in the area it is given
#[derive(Clone, Debug)]
pub struct AlertWidget<'a> {
    alert: &'a Alert,
}

impl<'a> AlertWidget<'a> {
    pub fn new(alert: &'a Alert) -> Self {
        Self { alert }
    }

    fn popup_area(area: Rect) -> Rect {
        let width = area.width.saturating_sub(4).min(60);
        let height = area.height.min(8);
        let [row] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(row);
        popup
    }
}

impl Widget for AlertWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = Self::popup_area(area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(Line::from(self.alert.title).bold().centered())
            .border_style(Style::default().fg(Color::Red))
            .padding(Padding::horizontal(1));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let [message_area, buttons_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
        Paragraph::new(self.alert.message)
            .wrap(Wrap { trim: true })
            .centered()
            .render(message_area, buf);

        let buttons: Vec<Span> = self
            .alert
            .buttons
            .iter()
            .flat_map(|label| [Span::raw(format!("[ {label} ]")), Span::raw("  ")])
            .collect();
        Line::from(buttons).centered().render(buttons_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::State;
    use crate::domain::TwitterOperationError;
    use crate::presentation::view::view;

    #[test]
    fn test_renders_title_and_buttons() {
        let view = view(&State::Failed(TwitterOperationError::InvalidRequest));
        let alert = view.alert.unwrap();
        let area = Rect::new(0, 0, 70, 12);
        let mut buf = Buffer::empty(area);

        AlertWidget::new(&alert).render(area, &mut buf);

        let screen: String = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(screen.contains("Operation error"));
        assert!(screen.contains("[ No ]"));
        assert!(screen.contains("[ Yes ]"));
        assert!(screen.contains("try again?"));
    }
}

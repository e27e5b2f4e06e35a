use chrono::{DateTime, Local, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::{
    domain::text::{ellipsize, relative_time, truncate_text, wrap_text},
    presentation::view::TweetItem,
};

pub const AVATAR_LOADED: &str = "■";
pub const AVATAR_PLACEHOLDER: &str = "□";

/// Lines of tweet text shown in the list before truncation
const MAX_TEXT_LINES: usize = 5;

/// One tweet: avatar slot, author, age, text and place.
///
/// In detail mode the whole text is shown along with the absolute time and
/// the like status.
#[derive(Clone, Debug)]
pub struct TweetWidget<'a> {
    item: &'a TweetItem,
    now: DateTime<Utc>,
    highlighted: bool,
    detailed: bool,
}

impl<'a> TweetWidget<'a> {
    pub fn new(item: &'a TweetItem, now: DateTime<Utc>) -> Self {
        Self {
            item,
            now,
            highlighted: false,
            detailed: false,
        }
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    pub fn detailed(mut self, detailed: bool) -> Self {
        self.detailed = detailed;
        self
    }

    fn header(&self, width: usize) -> Line<'static> {
        let avatar = if self.item.avatar.is_some() {
            AVATAR_LOADED
        } else {
            AVATAR_PLACEHOLDER
        };
        let name_style = if self.highlighted {
            Style::default().bold().reversed()
        } else {
            Style::default().bold()
        };
        let age = relative_time(self.item.tweet.created_at, self.now);
        // avatar, spaces and the age are fixed; the name and handle share the rest
        let name_width = width.saturating_sub(age.chars().count() + 5);
        let name = ellipsize(&self.item.author.name, name_width);
        let handle = ellipsize(
            &self.item.author.handle(),
            name_width.saturating_sub(name.chars().count() + 1),
        );

        Line::from(vec![
            Span::styled(avatar, Style::default().fg(Color::Cyan)),
            Span::raw(" "),
            Span::styled(name, name_style),
            Span::raw(" "),
            Span::styled(handle, Style::default().italic().fg(Color::Gray)),
            Span::styled(format!(" · {age}"), Style::default().fg(Color::Gray)),
        ])
    }

    fn body(&self, width: usize) -> Text<'static> {
        let wrapped = wrap_text(&self.item.tweet.text, width);
        let content = if self.detailed {
            wrapped
        } else {
            truncate_text(&wrapped, MAX_TEXT_LINES)
        };
        Text::from(content)
    }

    fn footer(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        if let Some(place) = &self.item.tweet.place {
            lines.push(Line::styled(
                format!("at {place}"),
                Style::default().fg(Color::Gray),
            ));
        }
        if self.detailed {
            let created_at = self
                .item
                .tweet
                .created_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string();
            lines.push(Line::styled(created_at, Style::default().fg(Color::Gray)));
            if self.item.tweet.liked {
                lines.push(Line::styled("♥ Liked", Style::default().fg(Color::Red)));
            }
        }
        lines
    }

    pub fn text(&self, width: u16) -> Text<'static> {
        let width = width as usize;
        let mut text = Text::from(self.header(width));
        text.extend(self.body(width));
        text.extend(self.footer());
        text.extend(Text::styled(
            "─".repeat(width),
            Style::default().fg(Color::DarkGray),
        ));
        text
    }

    pub fn height(&self, width: u16) -> u16 {
        u16::try_from(self.text(width).height()).unwrap_or(u16::MAX)
    }
}

impl Widget for TweetWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.text(area.width)).render(area, buf);
    }
}

//! Timeline list component

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::{
    domain::{ObjectId, Tweet},
    presentation::{
        view::{Body, TweetItem, View},
        widgets::TweetWidget,
    },
};

/// Scrollable tweet list with a selection cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelineComponent {
    selected: usize,
    offset: usize,
}

impl TimelineComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn scroll_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn scroll_down(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.selected = 0;
    }

    pub fn scroll_to_bottom(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Id of the selected tweet when the view is showing the list
    pub fn selected_tweet(&self, view: &View) -> Option<ObjectId<Tweet>> {
        match &view.body {
            Body::Timeline(items) => items.get(self.selected).map(|item| item.tweet.id.clone()),
            _ => None,
        }
    }

    pub fn render(
        &mut self,
        frame: &mut Frame<'_>,
        area: Rect,
        items: &[TweetItem],
        now: DateTime<Utc>,
    ) {
        if items.is_empty() {
            let empty_text = Paragraph::new("No tweets to display")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty_text, area);
            return;
        }

        self.selected = self.selected.min(items.len() - 1);
        let heights: Vec<u16> = items
            .iter()
            .map(|item| TweetWidget::new(item, now).height(area.width))
            .collect();
        self.offset = visible_offset(&heights, self.offset, self.selected, area.height);

        let mut y = area.top();
        for (index, item) in items.iter().enumerate().skip(self.offset) {
            if y >= area.bottom() {
                break;
            }
            let height = heights[index].min(area.bottom() - y);
            let widget = TweetWidget::new(item, now).highlighted(index == self.selected);
            frame.render_widget(widget, Rect::new(area.x, y, area.width, height));
            y += height;
        }
    }
}

/// First item to draw so that `selected` fits below it within `viewport` rows
fn visible_offset(heights: &[u16], offset: usize, selected: usize, viewport: u16) -> usize {
    if selected < offset {
        return selected;
    }
    let mut offset = offset;
    while offset < selected {
        let used: u32 = heights[offset..=selected]
            .iter()
            .map(|&h| u32::from(h))
            .sum();
        if used <= u32::from(viewport) {
            break;
        }
        offset += 1;
    }
    offset
}

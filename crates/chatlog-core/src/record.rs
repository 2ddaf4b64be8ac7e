//! The persisted chat record

use crate::error::{ChatLogError, ChatLogResult};
use crate::text::TextComponent;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// One logged chat message
///
/// Date and time are kept apart because the chat client timestamps
/// messages with a time of day and the log groups them by date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRecord {
    pub date: NaiveDate,
    pub time: NaiveTime,

    /// Text as rendered in the chat window
    pub display_text: TextComponent,

    /// Text as received, before any formatting was applied
    pub original_text: TextComponent,

    /// Number of consecutive identical messages merged into this record
    pub stacks: u32,
}

impl ChatRecord {
    pub fn builder() -> ChatRecordBuilder {
        ChatRecordBuilder::default()
    }

    /// Date and time combined
    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

/// Builder for [`ChatRecord`]
///
/// Date and time are required; texts default to empty and stacks to 1.
#[derive(Debug, Clone, Default)]
pub struct ChatRecordBuilder {
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
    display_text: Option<TextComponent>,
    original_text: Option<TextComponent>,
    stacks: Option<u32>,
}

impl ChatRecordBuilder {
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Set date and time from a single timestamp
    pub fn timestamp(self, timestamp: NaiveDateTime) -> Self {
        self.date(timestamp.date()).time(timestamp.time())
    }

    pub fn display_text(mut self, text: impl Into<TextComponent>) -> Self {
        self.display_text = Some(text.into());
        self
    }

    pub fn original_text(mut self, text: impl Into<TextComponent>) -> Self {
        self.original_text = Some(text.into());
        self
    }

    pub fn stacks(mut self, stacks: u32) -> Self {
        self.stacks = Some(stacks);
        self
    }

    pub fn build(self) -> ChatLogResult<ChatRecord> {
        Ok(ChatRecord {
            date: self.date.ok_or(ChatLogError::MissingField("date"))?,
            time: self.time.ok_or(ChatLogError::MissingField("time"))?,
            display_text: self.display_text.unwrap_or_default(),
            original_text: self.original_text.unwrap_or_default(),
            stacks: self.stacks.unwrap_or(1),
        })
    }
}

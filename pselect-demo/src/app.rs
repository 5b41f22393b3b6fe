//! The demo page: a title, the select control and the current value.

use std::sync::Arc;

use pselect::{
    Buffer, Event, Key, Pen, Rect, SelectConfig, SelectOption, SelectProps, SelectValue,
    VirtualizedSelect,
};
use pselect::text::truncate_to_width;

/// Where the control sits on the page.
const SELECT_ORIGIN: (u16, u16) = (4, 4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Host state: the options, the selection and the control.
pub struct DemoApp {
    options: Arc<[SelectOption]>,
    value: Option<SelectValue>,
    multiple: bool,
    select: VirtualizedSelect,
    changes: usize,
}

impl DemoApp {
    pub fn new(options: Vec<SelectOption>, multiple: bool) -> Self {
        let mut select = VirtualizedSelect::new(SelectConfig::default());
        select.set_focused(true);
        Self {
            options: options.into(),
            value: None,
            multiple,
            select,
            changes: 0,
        }
    }

    pub fn value(&self) -> Option<&SelectValue> {
        self.value.as_ref()
    }

    pub fn handle(&mut self, event: &Event) -> Flow {
        if let Event::Key {
            key: Key::Char('c'),
            modifiers,
        } = event
            && modifiers.ctrl
        {
            return Flow::Quit;
        }

        let props = SelectProps::new(&self.options)
            .value(self.value.as_ref())
            .multiple(self.multiple);
        let mut next = None;
        let result = self
            .select
            .handle_event(&props, event, &mut |value| next = Some(value));

        if let Some(value) = next {
            self.changes += 1;
            log::info!("selection changed ({}): {}", self.changes, value.summary());
            self.value = Some(value);
        }

        match event {
            Event::Key {
                key: Key::Char('q'),
                ..
            } if !result.is_consumed() => Flow::Quit,
            _ => Flow::Continue,
        }
    }

    pub fn render(&mut self, buf: &mut Buffer) {
        let theme = self.select.theme().clone();
        buf.fill(buf.area(), theme.background);
        let width = buf.width().saturating_sub(4);

        let mode = if self.multiple { "multiple" } else { "single" };
        let title = format!("pselect demo · {} options · {}", self.options.len(), mode);
        buf.put_str(2, 1, &title, width, Pen::new(theme.text, theme.background).bold());
        buf.put_str(
            2,
            2,
            "click or Enter to open · type to search · Esc closes · q quits",
            width,
            Pen::new(theme.muted, theme.background),
        );

        let value_line = match &self.value {
            None => "Value: (none)".to_string(),
            Some(value) => {
                let labels: Vec<&str> = value.options().iter().map(|o| o.label()).collect();
                format!("Value: {}", labels.join(", "))
            }
        };
        let value_line = truncate_to_width(&value_line, width as usize);
        buf.put_str(2, 8, &value_line, width, Pen::new(theme.text, theme.background));

        let (x, y) = SELECT_ORIGIN;
        let area = Rect::new(
            x,
            y,
            buf.width().saturating_sub(x),
            buf.height().saturating_sub(y),
        );
        let props = SelectProps::new(&self.options)
            .value(self.value.as_ref())
            .multiple(self.multiple);
        self.select.render(&props, buf, area);
    }
}

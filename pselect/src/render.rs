//! Painting the trigger field and the popover into a [`Buffer`].

use crate::buffer::{Buffer, Pen};
use crate::config::SelectConfig;
use crate::rect::Rect;
use crate::row::RowView;
use crate::search::SearchInput;
use crate::text::{char_width, truncate_to_width};
use crate::theme::Theme;
use crate::window::FixedSizeList;

/// Rows taken by the trigger field: border, content, border.
pub const TRIGGER_HEIGHT: u16 = 3;

const SEARCH_ICON: &str = "⌕";
const CLEAR_ICON: &str = "✕";
const CHECKED: &str = "[x] ";
const UNCHECKED: &str = "[ ] ";

/// State the trigger field shows.
#[derive(Debug, Clone, Copy)]
pub struct TriggerView<'a> {
    pub label: &'a str,
    pub summary: &'a str,
    pub has_value: bool,
    pub open: bool,
    pub focused: bool,
}

/// Screen regions of a placed popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopoverLayout {
    pub frame: Rect,
    pub search: Rect,
    /// Clear adornment; only present while there is search text.
    pub clear: Option<Rect>,
    pub list: Rect,
}

/// Popover size for a given anchor: at least as wide as the trigger, tall
/// enough for the border, the search row, a separator and the list.
pub fn popover_size(config: &SelectConfig, anchor: Rect) -> (u16, u16) {
    let width = config.popover_min_width.max(anchor.width);
    let height = config.list_height.saturating_add(4);
    (width, height)
}

pub fn popover_layout(frame: Rect, has_query: bool) -> PopoverLayout {
    let inner = frame.inner(1);
    let search = inner.row(0);
    let clear = (has_query && search.width >= 4)
        .then(|| Rect::new(search.right() - 2, search.y, 2, 1));
    let list = Rect::new(
        inner.x,
        inner.y.saturating_add(2),
        inner.width,
        inner.height.saturating_sub(2),
    );
    PopoverLayout {
        frame,
        search,
        clear,
        list,
    }
}

pub fn render_trigger(buf: &mut Buffer, area: Rect, view: &TriggerView<'_>, theme: &Theme) {
    if area.width < 4 || area.height < TRIGGER_HEIGHT {
        return;
    }
    let area = Rect::new(area.x, area.y, area.width, TRIGGER_HEIGHT);
    buf.fill(area, theme.surface);

    let edge = if view.open || view.focused {
        theme.accent
    } else {
        theme.border
    };
    draw_border(buf, area, Pen::new(edge, theme.surface));

    let content_x = area.x + 2;
    let content_width = area.width.saturating_sub(6);
    let shrink = view.open || view.has_value;

    if shrink {
        let caption = format!(" {} ", view.label);
        let caption = truncate_to_width(&caption, area.width.saturating_sub(4) as usize);
        buf.put_str(area.x + 1, area.y, &caption, area.width - 2, Pen::new(edge, theme.surface));
        let summary = truncate_to_width(view.summary, content_width as usize);
        buf.put_str(
            content_x,
            area.y + 1,
            &summary,
            content_width,
            Pen::new(theme.text, theme.surface),
        );
    } else {
        buf.put_str(
            content_x,
            area.y + 1,
            view.label,
            content_width,
            Pen::new(theme.muted, theme.surface),
        );
    }

    let arrow = if view.open { "▲" } else { "▼" };
    buf.put_str(
        area.right() - 3,
        area.y + 1,
        arrow,
        1,
        Pen::new(theme.muted, theme.surface),
    );
}

/// Inputs for painting the popover.
pub struct PopoverView<'a> {
    pub layout: &'a PopoverLayout,
    pub search: &'a SearchInput,
    pub placeholder: &'a str,
    pub rows: &'a [RowView<'a>],
    pub list: &'a FixedSizeList,
}

pub fn render_popover(buf: &mut Buffer, view: &PopoverView<'_>, theme: &Theme) {
    let layout = view.layout;
    let frame = layout.frame;
    if frame.width < 4 || frame.height < 4 {
        return;
    }
    buf.fill(frame, theme.surface);
    let border = Pen::new(theme.border, theme.surface);
    draw_border(buf, frame, border);

    render_search(buf, view, theme);

    // Separator between the search row and the list
    let sep_y = layout.search.y + 1;
    if sep_y < frame.bottom() - 1 {
        buf.put_str(frame.x, sep_y, "├", 1, border);
        for x in frame.x + 1..frame.right() - 1 {
            buf.put_str(x, sep_y, "─", 1, border);
        }
        buf.put_str(frame.right() - 1, sep_y, "┤", 1, border);
    }

    for row in view.rows {
        render_list_row(buf, layout.list, view.list, row, theme);
    }

    if let Some((start, len)) = scrollbar_thumb(view.list, layout.list.height) {
        let x = frame.right() - 1;
        for y in start..start + len {
            buf.put_str(x, layout.list.y + y, "┃", 1, Pen::new(theme.accent, theme.surface));
        }
    }
}

fn render_search(buf: &mut Buffer, view: &PopoverView<'_>, theme: &Theme) {
    let search = view.layout.search;
    let icon_pen = Pen::new(theme.muted, theme.surface);
    buf.put_str(search.x, search.y, SEARCH_ICON, 1, icon_pen);

    let field_x = search.x + 2;
    let field_end = view.layout.clear.map_or(search.right(), |clear| clear.x);
    let field_width = field_end.saturating_sub(field_x);

    if view.search.is_empty() {
        buf.put_str(field_x, search.y, view.placeholder, field_width, icon_pen.dim());
    } else {
        buf.put_str(
            field_x,
            search.y,
            view.search.text(),
            field_width,
            Pen::new(theme.text, theme.surface),
        );
    }

    // Caret: invert the cell under the cursor
    let before: usize = view
        .search
        .text()
        .chars()
        .take(view.search.cursor())
        .map(char_width)
        .sum();
    let caret_x = field_x as usize + before;
    if caret_x < field_end as usize
        && let Some(cell) = buf.get_mut(caret_x as u16, search.y)
    {
        cell.fg = theme.surface;
        cell.bg = theme.text;
    }

    if let Some(clear) = view.layout.clear {
        buf.put_str(clear.x, clear.y, CLEAR_ICON, clear.width, icon_pen);
    }
}

fn render_list_row(
    buf: &mut Buffer,
    area: Rect,
    list: &FixedSizeList,
    row: &RowView<'_>,
    theme: &Theme,
) {
    let top = list.row_top(row.index);
    let bg = if row.highlighted() {
        theme.highlight
    } else {
        theme.surface
    };
    let pen = Pen::new(theme.text, bg);
    let text_line = (list.row_height() as isize - 1) / 2;

    for line in 0..list.row_height() as isize {
        let y = top + line;
        // Overscan rows fall outside the viewport and are clipped here.
        if y < 0 || y >= area.height as isize {
            continue;
        }
        let y = area.y + y as u16;
        buf.fill(Rect::new(area.x, y, area.width, 1), bg);
        if line != text_line {
            continue;
        }

        let mut x = area.x + 1;
        let mut width = area.width.saturating_sub(2);
        if let Some(checked) = row.checked {
            let mark = if checked { CHECKED } else { UNCHECKED };
            let used = buf.put_str(x, y, mark, width, pen);
            x += used;
            width -= used;
        }
        let label = truncate_to_width(row.label, width as usize);
        let label_pen = if row.selected { pen.bold() } else { pen };
        buf.put_str(x, y, &label, width, label_pen);
    }
}

/// Scrollbar thumb as (start, length) within a track of `track` rows, or
/// `None` when the list fits in its viewport.
pub fn scrollbar_thumb(list: &FixedSizeList, track: u16) -> Option<(u16, u16)> {
    let content = list.content_height();
    let viewport = list.viewport_height();
    if track == 0 || content <= viewport {
        return None;
    }

    let track = track as usize;
    let len = (viewport * track / content).clamp(1, track);
    let max_offset = list.max_offset().max(1);
    let start = list.offset() * (track - len) / max_offset;
    Some((start as u16, len as u16))
}

fn draw_border(buf: &mut Buffer, area: Rect, pen: Pen) {
    let right = area.right() - 1;
    let bottom = area.bottom() - 1;
    for x in area.x + 1..right {
        buf.put_str(x, area.y, "─", 1, pen);
        buf.put_str(x, bottom, "─", 1, pen);
    }
    for y in area.y + 1..bottom {
        buf.put_str(area.x, y, "│", 1, pen);
        buf.put_str(right, y, "│", 1, pen);
    }
    buf.put_str(area.x, area.y, "┌", 1, pen);
    buf.put_str(right, area.y, "┐", 1, pen);
    buf.put_str(area.x, bottom, "└", 1, pen);
    buf.put_str(right, bottom, "┘", 1, pen);
}

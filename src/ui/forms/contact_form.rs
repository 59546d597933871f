//! Contact form view

use super::field_renderer::draw_field;
use crate::app::App;
use crate::form::ContactForm;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::HEADER_HEIGHT;
use ratatui::{layout::Rect, Frame};

/// Height of a single-line field box
const FIELD_HEIGHT: u16 = 3;
/// Height of a multiline field box
const MULTILINE_HEIGHT: u16 = 7;

/// `(top, height)` of every field and then the send button, in rows of the
/// scrolled content. Content starts below the expanded header.
pub fn item_rows(form: &ContactForm) -> Vec<(u16, u16)> {
    let heights = form
        .fields()
        .iter()
        .map(|f| {
            if f.is_multiline {
                MULTILINE_HEIGHT
            } else {
                FIELD_HEIGHT
            }
        })
        .chain(std::iter::once(BUTTON_HEIGHT));

    let mut top = HEADER_HEIGHT;
    heights
        .map(|height| {
            let row = (top, height);
            top += height;
            row
        })
        .collect()
}

/// Screen area of an item, or `None` when it is under the header or below
/// the view. Items cut off at the bottom are clipped.
fn visible_rect(area: Rect, row: (u16, u16), scroll: u16, header: u16) -> Option<Rect> {
    let (top, height) = row;
    if top < scroll + header {
        return None;
    }
    let y = top - scroll;
    if y >= area.height {
        return None;
    }
    Some(Rect {
        x: area.x + 1,
        y: area.y + y,
        width: area.width.saturating_sub(2),
        height: height.min(area.height - y),
    })
}

/// Draw the visible fields and the send button at the current scroll offset
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.form();
    let fields = form.fields();
    let header = app.header_height();

    for (i, row) in item_rows(form).into_iter().enumerate() {
        let Some(item_area) = visible_rect(area, row, app.scroll, header) else {
            continue;
        };

        match fields.get(i) {
            Some(field) => draw_field(
                frame,
                item_area,
                field,
                form.active_field_index == i,
                app.display.indicator(&field.name),
            ),
            None => {
                let button_area = Rect {
                    width: item_area.width.min(16),
                    ..item_area
                };
                let label = if app.pipeline.is_submitting() {
                    "Sending..."
                } else {
                    "Send"
                };
                render_button(
                    frame,
                    button_area,
                    label,
                    form.is_button_active(),
                    !app.pipeline.is_submitting(),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_stack_below_header() {
        assert_eq!(
            item_rows(&ContactForm::standard()),
            vec![(3, 3), (6, 3), (9, 3), (12, 7), (19, 3)]
        );
    }

    mod visible {
        use super::*;

        fn view() -> Rect {
            Rect::new(0, 0, 40, 10)
        }

        #[test]
        fn test_unscrolled_item_keeps_its_row() {
            assert_eq!(
                visible_rect(view(), (3, 3), 0, 3),
                Some(Rect::new(1, 3, 38, 3))
            );
        }

        #[test]
        fn test_item_under_header_is_hidden() {
            assert_eq!(visible_rect(view(), (3, 3), 1, 3), None);
            assert_eq!(visible_rect(view(), (6, 3), 6, 1), None);
        }

        #[test]
        fn test_item_below_view_is_hidden() {
            assert_eq!(visible_rect(view(), (19, 3), 0, 3), None);
        }

        #[test]
        fn test_item_at_bottom_is_clipped() {
            assert_eq!(
                visible_rect(view(), (12, 7), 4, 3),
                Some(Rect::new(1, 8, 38, 2))
            );
        }
    }
}

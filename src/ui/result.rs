/// Style transfer result panel
use iced::widget::{canvas, column, container, text};
use iced::{Element, Length};

use super::card::picture;
use super::spinner::Spinner;
use crate::remote::ImageStore;
use crate::state::selection::{DisplaySource, Selection};
use crate::Message;

/// Edge length of the square result image (px)
pub const RESULT_SIZE: f32 = 320.0;

const INFO_NOTE: &str = "This demo simulates how CycleGAN technology transforms product \
images into different artistic styles. In a production environment, this would connect to \
a FastAPI backend with Cassandra for style configuration storage.";

pub fn result_panel<'a>(
    selection: &'a Selection,
    images: &'a ImageStore,
    spinner_phase: f32,
    status: &'a str,
) -> Element<'a, Message> {
    let caption = selection.caption();

    let preview: Element<'a, Message> = match selection.display_source() {
        DisplaySource::Placeholder => container(
            canvas(Spinner { phase: spinner_phase })
                .width(Length::Fixed(RESULT_SIZE))
                .height(Length::Fixed(RESULT_SIZE)),
        )
        .style(container::bordered_box)
        .into(),
        DisplaySource::Remote(uri) => {
            picture(images, Some(uri), &caption, RESULT_SIZE, RESULT_SIZE)
        }
        DisplaySource::Missing => picture(images, None, &caption, RESULT_SIZE, RESULT_SIZE),
    };

    column![
        text("Style Transfer Result").size(18),
        preview,
        text(caption).size(14),
        text(INFO_NOTE).size(12).style(text::secondary),
        text(status).size(12),
    ]
    .spacing(12)
    .width(Length::Fixed(RESULT_SIZE))
    .into()
}

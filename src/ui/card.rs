/// Selectable catalog cards
///
/// Products and styles render through the same card: an image, a title,
/// a subtitle, and a highlighted border when selected.

use iced::widget::{column, container, image, mouse_area, text};
use iced::{Border, Color, ContentFit, Element, Length, Theme};

use crate::remote::{ImageStore, RemoteImage};
use crate::state::data::{Product, Style};
use crate::Message;

/// Width and image height of a card (px)
pub const CARD_SIZE: f32 = 150.0;

/// Border color of the selected card
const SELECTED: Color = Color::from_rgb(0.388, 0.4, 0.945);

/// Anything that can be shown as a card
pub trait Selectable {
    fn image_uri(&self) -> &str;
    fn title(&self) -> &str;
    fn subtitle(&self) -> &str;
}

impl Selectable for Product {
    fn image_uri(&self) -> &str {
        &self.image
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn subtitle(&self) -> &str {
        &self.category
    }
}

impl Selectable for Style {
    fn image_uri(&self) -> &str {
        &self.preview_image
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn subtitle(&self) -> &str {
        &self.description
    }
}

/// Render a card. Clicking it emits `on_press`.
pub fn card<'a, T: Selectable>(
    item: &'a T,
    is_selected: bool,
    images: &'a ImageStore,
    on_press: Message,
) -> Element<'a, Message> {
    let body = column![
        picture(images, Some(item.image_uri()), item.title(), CARD_SIZE, CARD_SIZE),
        column![
            text(item.title()).size(14),
            text(item.subtitle()).size(12).style(text::secondary),
        ]
        .spacing(2)
        .padding(8),
    ];

    let framed = container(body)
        .width(Length::Fixed(CARD_SIZE))
        .clip(true)
        .style(move |theme: &Theme| card_style(theme, is_selected));

    mouse_area(framed).on_press(on_press).into()
}

fn card_style(theme: &Theme, is_selected: bool) -> container::Style {
    let palette = theme.extended_palette();
    let (color, width) = if is_selected {
        (SELECTED, 2.0)
    } else {
        (palette.background.strong.color, 1.0)
    };

    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            color,
            width,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

/// Show a remote image by URI.
///
/// A missing URI, a failed load, or a URI that was never requested all
/// render the same framed "unavailable" box with the alt text.
pub fn picture<'a>(
    images: &'a ImageStore,
    uri: Option<&str>,
    alt: &str,
    width: f32,
    height: f32,
) -> Element<'a, Message> {
    match uri.and_then(|uri| images.get(uri)) {
        Some(RemoteImage::Ready(handle)) => image(handle.clone())
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(RemoteImage::Loading) => stand_in(text("Loading...").size(12), width, height),
        Some(RemoteImage::Broken) | None => stand_in(
            text(format!("⚠ {}", alt)).size(12).style(text::secondary),
            width,
            height,
        ),
    }
}

fn stand_in<'a>(
    label: impl Into<Element<'a, Message>>,
    width: f32,
    height: f32,
) -> Element<'a, Message> {
    container(label)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .center_x(Length::Fixed(width))
        .center_y(Length::Fixed(height))
        .style(container::bordered_box)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::Catalog;

    #[test]
    fn test_product_card_fields() {
        let catalog = Catalog::builtin().unwrap();
        let product = &catalog.products()[0];

        assert_eq!(product.title(), "Leather Jacket");
        assert_eq!(product.subtitle(), "Outerwear");
        assert_eq!(product.image_uri(), product.image);
    }

    #[test]
    fn test_style_card_fields() {
        let catalog = Catalog::builtin().unwrap();
        let style = &catalog.styles()[1];

        assert_eq!(style.title(), "Vintage");
        assert_eq!(style.subtitle(), "Retro-inspired warm tones");
        assert_eq!(style.image_uri(), style.preview_image);
    }
}
